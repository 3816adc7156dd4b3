use super::{App, ConfirmTerminate, StatusLevel};
use crate::app::Focus;
use crate::data::start_terminate;

impl App {
    /// Open the confirm dialog for the focused table's selected row,
    /// copying its identity out of the table before anything can move.
    pub fn open_confirm(&mut self) {
        let target = match self.focus {
            Focus::Processes => self
                .selected_process()
                .map(|record| ConfirmTerminate {
                    pid: record.pid,
                    name: record.name.clone(),
                    cpu: record.cpu,
                }),
            Focus::Threats => self
                .selected_threat()
                .map(|record| ConfirmTerminate {
                    pid: record.pid,
                    name: record.name.clone(),
                    cpu: record.cpu,
                }),
        };

        match target {
            Some(confirm) => self.confirm = Some(confirm),
            None => self.set_status(StatusLevel::Warn, "No process selected".to_string()),
        }
    }

    /// Declined: no request, no state change beyond closing the dialog.
    pub fn cancel_confirm(&mut self) {
        self.confirm = None;
    }

    /// Confirmed: fire the terminate request and return to the tables.
    /// The outcome arrives later as an `ApiUpdate::Terminated`.
    pub fn confirm_terminate(&mut self) {
        if let Some(confirm) = self.confirm.take() {
            start_terminate(&self.client, &self.api_tx, confirm.pid, confirm.name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_app;
    use crate::data::{ProcessRecord, ThreatRecord};

    #[test]
    fn open_confirm_captures_selected_process_by_value() {
        let mut app = test_app();
        app.processes = vec![ProcessRecord {
            pid: 4242,
            name: "miner".to_string(),
            cpu: 97.5,
            memory: 3.0,
            status: "running".to_string(),
        }];
        app.sync_selection();

        app.open_confirm();
        let confirm = app.confirm.as_ref().unwrap();
        assert_eq!(confirm.pid, 4242);
        assert_eq!(confirm.name, "miner");

        // A refresh replacing the table must not re-aim the dialog.
        app.processes.clear();
        app.sync_selection();
        let confirm = app.confirm.as_ref().unwrap();
        assert_eq!(confirm.pid, 4242);
        assert_eq!(confirm.name, "miner");
    }

    #[test]
    fn open_confirm_uses_threat_row_when_threats_focused() {
        let mut app = test_app();
        app.threats = vec![ThreatRecord {
            pid: 7,
            name: "cryptominer".to_string(),
            cpu: 88.0,
            timestamp: "2026-08-06 10:00:00".to_string(),
        }];
        app.sync_threat_selection();
        app.toggle_focus();

        app.open_confirm();
        assert_eq!(app.confirm.as_ref().unwrap().pid, 7);
    }

    #[test]
    fn open_confirm_with_nothing_selected_warns() {
        let mut app = test_app();
        app.open_confirm();
        assert!(app.confirm.is_none());
        assert!(app.status.is_some());
    }

    #[test]
    fn cancel_issues_no_request() {
        let mut app = test_app();
        app.processes = vec![ProcessRecord {
            pid: 1,
            name: "bash".to_string(),
            cpu: 0.1,
            memory: 0.1,
            status: "sleeping".to_string(),
        }];
        app.sync_selection();
        app.open_confirm();

        app.cancel_confirm();
        assert!(app.confirm.is_none());
        assert_eq!(app.gates.processes.issued(), 0);
    }
}
