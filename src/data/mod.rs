mod client;
mod fetch;
mod sorting;
mod types;

pub use client::ApiClient;
pub use fetch::{ApiUpdate, RefreshSeqs, start_refresh, start_terminate};
pub use sorting::{SortDir, SortKey, sort_process_records};
pub use types::{HistoryRecord, ProcessRecord, SystemStats, TerminateResponse, ThreatRecord};
