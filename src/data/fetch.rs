use std::sync::mpsc::Sender;
use std::thread;

use super::client::ApiClient;
use super::types::{HistoryRecord, ProcessRecord, SystemStats, TerminateResponse, ThreatRecord};
use crate::error::Result;

/// Messages delivered from fetch workers back to the UI thread.
///
/// Read results carry the sequence number their request was issued with;
/// the receiving side uses it to drop responses that arrive after a newer
/// one has already been applied to the same table.
pub enum ApiUpdate {
    Stats {
        seq: u64,
        result: Result<SystemStats>,
    },
    Processes {
        seq: u64,
        result: Result<Vec<ProcessRecord>>,
    },
    Threats {
        seq: u64,
        result: Result<Vec<ThreatRecord>>,
    },
    History {
        seq: u64,
        result: Result<Vec<HistoryRecord>>,
    },
    Terminated {
        pid: u32,
        name: String,
        result: Result<TerminateResponse>,
    },
}

/// Sequence numbers for one refresh cycle, one per read endpoint.
#[derive(Clone, Copy)]
pub struct RefreshSeqs {
    pub stats: u64,
    pub processes: u64,
    pub threats: u64,
    pub history: u64,
}

/// Kick off one full refresh cycle: four independent workers, one per
/// read endpoint. No ordering between them; each table updates as soon as
/// its own response lands. A send failure means the UI is gone, so the
/// result is dropped on the floor.
pub fn start_refresh(client: &ApiClient, tx: &Sender<ApiUpdate>, seqs: RefreshSeqs) {
    {
        let client = client.clone();
        let tx = tx.clone();
        let seq = seqs.stats;
        thread::spawn(move || {
            let result = client.stats();
            let _ = tx.send(ApiUpdate::Stats { seq, result });
        });
    }
    {
        let client = client.clone();
        let tx = tx.clone();
        let seq = seqs.processes;
        thread::spawn(move || {
            let result = client.processes();
            let _ = tx.send(ApiUpdate::Processes { seq, result });
        });
    }
    {
        let client = client.clone();
        let tx = tx.clone();
        let seq = seqs.threats;
        thread::spawn(move || {
            let result = client.threats();
            let _ = tx.send(ApiUpdate::Threats { seq, result });
        });
    }
    {
        let client = client.clone();
        let tx = tx.clone();
        let seq = seqs.history;
        thread::spawn(move || {
            let result = client.history();
            let _ = tx.send(ApiUpdate::History { seq, result });
        });
    }
}

/// Fire the terminate request for `(pid, name)` from a worker thread.
/// Deliberately fire-and-forget: the UI stays live while the request is
/// in flight and nothing stops the operator from issuing another one.
pub fn start_terminate(client: &ApiClient, tx: &Sender<ApiUpdate>, pid: u32, name: String) {
    let client = client.clone();
    let tx = tx.clone();
    thread::spawn(move || {
        let result = client.terminate(pid);
        let _ = tx.send(ApiUpdate::Terminated { pid, name, result });
    });
}
