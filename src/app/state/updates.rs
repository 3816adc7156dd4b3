use std::time::Instant;

use super::{App, StatusLevel};
use crate::data::{ApiUpdate, HistoryRecord, ProcessRecord, SystemStats, ThreatRecord};
use crate::data::sort_process_records;

/// Monotonic request/apply counters for one table. Responses may arrive
/// in any order; only a response newer than the last applied one wins.
#[derive(Default)]
pub(crate) struct SeqGate {
    issued: u64,
    applied: u64,
}

impl SeqGate {
    pub(crate) fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    pub(crate) fn admit(&mut self, seq: u64) -> bool {
        if seq > self.applied {
            self.applied = seq;
            true
        } else {
            false
        }
    }

    #[cfg(test)]
    pub(crate) fn issued(&self) -> u64 {
        self.issued
    }
}

impl App {
    /// Apply one worker result to UI state. Failed reads never touch the
    /// tables: the last good snapshot stays up, a warning lands in the
    /// status line, and the next cycle is the recovery path.
    pub(super) fn apply_update(&mut self, update: ApiUpdate) {
        match update {
            ApiUpdate::Stats { seq, result } => match result {
                Ok(stats) => {
                    if self.gates.stats.admit(seq) {
                        self.apply_stats(stats);
                    }
                }
                Err(err) => self.set_status(StatusLevel::Warn, format!("stats fetch: {err}")),
            },
            ApiUpdate::Processes { seq, result } => match result {
                Ok(records) => {
                    if self.gates.processes.admit(seq) {
                        self.apply_processes(records);
                    }
                }
                Err(err) => self.set_status(StatusLevel::Warn, format!("process fetch: {err}")),
            },
            ApiUpdate::Threats { seq, result } => match result {
                Ok(records) => {
                    if self.gates.threats.admit(seq) {
                        self.apply_threats(records);
                    }
                }
                Err(err) => self.set_status(StatusLevel::Warn, format!("threat fetch: {err}")),
            },
            ApiUpdate::History { seq, result } => match result {
                Ok(records) => {
                    if self.gates.history.admit(seq) {
                        self.apply_history(records);
                    }
                }
                Err(err) => self.set_status(StatusLevel::Warn, format!("history fetch: {err}")),
            },
            ApiUpdate::Terminated { pid, name, result } => {
                self.apply_terminate_outcome(pid, &name, result);
            }
        }
    }

    fn apply_stats(&mut self, stats: SystemStats) {
        self.stats = Some(stats);
        self.stats_fetched_at = Some(Instant::now());
    }

    /// Full replacement of the process table. The pending search match
    /// set is discarded: fresh rows come up visible until the next
    /// keystroke recomputes the filter.
    fn apply_processes(&mut self, mut records: Vec<ProcessRecord>) {
        sort_process_records(&mut records, self.sort_key, self.sort_dir);
        self.processes = records;
        self.processes_fetched_at = Some(Instant::now());
        self.reset_search_matches();
        self.sync_selection();
    }

    fn apply_threats(&mut self, records: Vec<ThreatRecord>) {
        self.threats = records;
        self.threats_fetched_at = Some(Instant::now());
        self.sync_threat_selection();
    }

    fn apply_history(&mut self, records: Vec<HistoryRecord>) {
        self.history = records;
        self.history_fetched_at = Some(Instant::now());
    }

    fn apply_terminate_outcome(
        &mut self,
        pid: u32,
        name: &str,
        result: crate::error::Result<crate::data::TerminateResponse>,
    ) {
        match result {
            Ok(response) if response.success => {
                self.set_status(
                    StatusLevel::Info,
                    format!("Terminated {name} (PID {pid})"),
                );
                self.refresh();
            }
            Ok(_) => self.set_status(
                StatusLevel::Warn,
                format!("Failed to terminate {name} (PID {pid})"),
            ),
            Err(err) => self.set_status(
                StatusLevel::Warn,
                format!("Terminate {name} (PID {pid}): {err}"),
            ),
        }
    }
}
