use super::App;
use crate::data::ProcessRecord;

/// Substring predicate behind the search box. `needle` must already be
/// lowercased; an empty needle matches every row. The PID matches as a
/// rendered string, so "34" finds PID 1234.
pub fn record_matches(record: &ProcessRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    record.name.to_lowercase().contains(needle) || record.pid.to_string().contains(needle)
}

impl App {
    pub fn begin_search(&mut self) {
        self.search_active = true;
    }

    /// Keep the query and its match set, drop the input focus.
    pub fn end_search(&mut self) {
        self.search_active = false;
    }

    /// Abandon the search entirely: clear the query and show all rows.
    pub fn cancel_search(&mut self) {
        self.search_active = false;
        self.search_query.clear();
        self.search_matches = None;
        self.sync_selection();
    }

    pub fn push_search_char(&mut self, ch: char) {
        self.search_query.push(ch);
        self.recompute_search_matches();
    }

    pub fn pop_search_char(&mut self) {
        self.search_query.pop();
        self.recompute_search_matches();
    }

    /// Recomputed on input events only. A later snapshot discards the
    /// result (rows come up visible) until the next keystroke; that is
    /// the upstream dashboard's behavior, kept as-is.
    fn recompute_search_matches(&mut self) {
        let needle = self.search_query.trim().to_lowercase();
        if needle.is_empty() {
            self.search_matches = None;
        } else {
            self.search_matches = Some(
                self.processes
                    .iter()
                    .filter(|record| record_matches(record, &needle))
                    .map(|record| record.pid)
                    .collect(),
            );
        }
        self.sync_selection();
    }

    pub(super) fn reset_search_matches(&mut self) {
        self.search_matches = None;
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_app;
    use super::*;

    fn process(pid: u32, name: &str) -> ProcessRecord {
        ProcessRecord {
            pid,
            name: name.to_string(),
            cpu: 0.0,
            memory: 0.0,
            status: "running".to_string(),
        }
    }

    #[test]
    fn empty_needle_matches_everything() {
        assert!(record_matches(&process(99, "nginx"), ""));
        assert!(record_matches(&process(1234, "bash"), ""));
    }

    #[test]
    fn needle_matches_pid_or_name_substring() {
        let bash = process(1234, "bash");
        let nginx = process(99, "nginx");

        assert!(record_matches(&bash, "34"));
        assert!(!record_matches(&nginx, "34"));
        assert!(record_matches(&nginx, "ngi"));
        assert!(record_matches(&bash, "bas"));
    }

    #[test]
    fn matching_is_case_insensitive_on_names() {
        let record = process(1, "PostgreSQL");
        assert!(record_matches(&record, "postgres"));
    }

    #[test]
    fn keystrokes_filter_visible_rows() {
        let mut app = test_app();
        app.processes = vec![process(1234, "bash"), process(99, "nginx")];
        app.sync_selection();

        app.begin_search();
        app.push_search_char('3');
        app.push_search_char('4');

        let visible = app.visible_processes();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].pid, 1234);
    }

    #[test]
    fn backspacing_to_empty_shows_all_rows() {
        let mut app = test_app();
        app.processes = vec![process(1234, "bash"), process(99, "nginx")];
        app.sync_selection();

        app.push_search_char('x');
        assert_eq!(app.visible_processes().len(), 0);
        app.pop_search_char();
        assert_eq!(app.visible_processes().len(), 2);
    }

    #[test]
    fn fresh_snapshot_discards_match_set_until_next_keystroke() {
        let mut app = test_app();
        app.processes = vec![process(1234, "bash"), process(99, "nginx")];
        app.sync_selection();
        app.push_search_char('9');
        assert_eq!(app.visible_processes().len(), 1);

        let seq = app.gates.processes.issue();
        app.apply_update(crate::data::ApiUpdate::Processes {
            seq,
            result: Ok(vec![process(1234, "bash"), process(99, "nginx")]),
        });

        // Query text survives, but every fresh row is visible again.
        assert_eq!(app.search_query, "9");
        assert_eq!(app.visible_processes().len(), 2);

        app.push_search_char('9');
        app.pop_search_char();
        assert_eq!(app.visible_processes().len(), 1);
    }

    #[test]
    fn cancel_clears_query_and_filter() {
        let mut app = test_app();
        app.processes = vec![process(1234, "bash"), process(99, "nginx")];
        app.sync_selection();
        app.push_search_char('b');
        assert_eq!(app.visible_processes().len(), 1);

        app.cancel_search();
        assert!(app.search_query.is_empty());
        assert_eq!(app.visible_processes().len(), 2);
    }
}
