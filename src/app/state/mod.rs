mod actions;
mod filter;
mod selection;
mod updates;

use std::collections::HashSet;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use ratatui::widgets::TableState;

use super::config::Config;
use super::focus::Focus;
use super::status::{StatusLevel, StatusMessage};
use crate::data::{
    ApiClient, ApiUpdate, HistoryRecord, ProcessRecord, RefreshSeqs, SortDir, SortKey, SystemStats,
    ThreatRecord, sort_process_records, start_refresh,
};
use crate::error::Result;
use updates::SeqGate;

pub use filter::record_matches;

/// Terminate target, captured by value when the dialog opens. Holding a
/// copy rather than a row index keeps the request aimed at the row the
/// operator saw, even if a refresh replaces the table underneath the
/// dialog.
pub struct ConfirmTerminate {
    pub pid: u32,
    pub name: String,
    pub cpu: f64,
}

/// Per-table sequence gates. One refresh cycle issues four numbers; a
/// response is applied only if nothing newer already landed on its table.
#[derive(Default)]
pub(crate) struct TableGates {
    pub(crate) stats: SeqGate,
    pub(crate) processes: SeqGate,
    pub(crate) threats: SeqGate,
    pub(crate) history: SeqGate,
}

pub struct App {
    client: ApiClient,
    api_tx: Sender<ApiUpdate>,
    api_rx: Receiver<ApiUpdate>,
    tick_rate: Duration,
    pub(crate) gates: TableGates,

    pub sort_key: SortKey,
    pub sort_dir: SortDir,
    pub stats: Option<SystemStats>,
    pub processes: Vec<ProcessRecord>,
    pub threats: Vec<ThreatRecord>,
    pub history: Vec<HistoryRecord>,
    pub stats_fetched_at: Option<Instant>,
    pub processes_fetched_at: Option<Instant>,
    pub threats_fetched_at: Option<Instant>,
    pub history_fetched_at: Option<Instant>,

    pub focus: Focus,
    pub table_state: TableState,
    pub selected_pid: Option<u32>,
    pub scroll: usize,
    pub threat_state: TableState,
    pub threat_scroll: usize,

    pub confirm: Option<ConfirmTerminate>,
    pub search_active: bool,
    pub search_query: String,
    search_matches: Option<HashSet<u32>>,
    pub status: Option<StatusMessage>,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let client = ApiClient::new(&config.url, config.request_timeout)?;
        let (api_tx, api_rx) = mpsc::channel();
        Ok(Self {
            client,
            api_tx,
            api_rx,
            tick_rate: config.tick_rate,
            gates: TableGates::default(),
            sort_key: config.sort_key,
            sort_dir: config.sort_dir,
            stats: None,
            processes: Vec::new(),
            threats: Vec::new(),
            history: Vec::new(),
            stats_fetched_at: None,
            processes_fetched_at: None,
            threats_fetched_at: None,
            history_fetched_at: None,
            focus: Focus::default(),
            table_state: TableState::default(),
            selected_pid: None,
            scroll: 0,
            threat_state: TableState::default(),
            threat_scroll: 0,
            confirm: None,
            search_active: false,
            search_query: String::new(),
            search_matches: None,
            status: None,
        })
    }

    /// Issue one full refresh cycle. Never waits for an in-flight cycle;
    /// overlap is resolved by the sequence gates when responses land.
    pub fn refresh(&mut self) {
        let seqs = RefreshSeqs {
            stats: self.gates.stats.issue(),
            processes: self.gates.processes.issue(),
            threats: self.gates.threats.issue(),
            history: self.gates.history.issue(),
        };
        start_refresh(&self.client, &self.api_tx, seqs);
    }

    /// Per-iteration housekeeping on the UI thread: drain completed
    /// fetches and drop an expired status notice.
    pub fn tick(&mut self) {
        self.poll_api_updates();
        self.clear_expired_status();
    }

    fn poll_api_updates(&mut self) {
        while let Ok(update) = self.api_rx.try_recv() {
            self.apply_update(update);
        }
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    pub fn set_status(&mut self, level: StatusLevel, message: String) {
        self.status = Some(StatusMessage::new(level, message));
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
        self.sort_dir = key.default_dir();
        self.resort();
    }

    pub fn toggle_sort_dir(&mut self) {
        self.sort_dir = self.sort_dir.toggle();
        self.resort();
    }

    fn resort(&mut self) {
        sort_process_records(&mut self.processes, self.sort_key, self.sort_dir);
        self.sync_selection();
    }

    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggle();
    }

    /// Process rows that pass the search filter, in display order. With
    /// no filter applied since the last snapshot, every row is visible.
    pub fn visible_processes(&self) -> Vec<&ProcessRecord> {
        match self.search_matches.as_ref() {
            None => self.processes.iter().collect(),
            Some(matches) => self
                .processes
                .iter()
                .filter(|record| matches.contains(&record.pid))
                .collect(),
        }
    }

    fn visible_pids(&self) -> Vec<u32> {
        self.visible_processes()
            .iter()
            .map(|record| record.pid)
            .collect()
    }

    /// A table is stale when its last snapshot is older than a few
    /// cycles; the next successful fetch clears it.
    pub fn is_stale(&self, fetched_at: Option<Instant>) -> bool {
        fetched_at.is_some_and(|at| at.elapsed() > self.tick_rate.saturating_mul(3))
    }

    fn clear_expired_status(&mut self) {
        if let Some(status) = self.status.as_ref()
            && status.is_expired()
        {
            self.status = None;
        }
    }
}

#[cfg(test)]
pub(crate) fn test_app() -> App {
    App::new(Config {
        url: "http://localhost:5000".to_string(),
        tick_rate: Duration::from_millis(3000),
        request_timeout: Duration::from_millis(100),
        sort_key: SortKey::Cpu,
        sort_dir: SortDir::Desc,
    })
    .unwrap()
}
