use serde::{Deserialize, Serialize};

/// One running process as reported by the agent. A snapshot row only:
/// nothing is tracked across refreshes, a process missing from the next
/// snapshot is simply gone.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ProcessRecord {
    pub pid: u32,
    pub name: String,
    pub cpu: f64,
    pub memory: f64,
    pub status: String,
}

/// A process the agent has flagged as anomalous.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ThreatRecord {
    pub pid: u32,
    pub name: String,
    pub cpu: f64,
    pub timestamp: String,
}

/// A past flagged or terminated process. The agent sends these oldest
/// first; display order is the reverse.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct HistoryRecord {
    pub name: String,
    pub cpu: f64,
    pub timestamp: String,
}

/// Instantaneous aggregate snapshot of the monitored host.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SystemStats {
    pub cpu_percent: f64,
    pub memory_percent: f64,
    pub running_processes: u64,
    #[serde(default)]
    pub boot_time: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TerminateRequest {
    pub pid: u32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TerminateResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_record_from_agent_payload() {
        let records: Vec<ProcessRecord> = serde_json::from_str(
            r#"[{"pid": 1234, "name": "bash", "cpu": 12.5, "memory": 0.4, "status": "running"}]"#,
        )
        .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].pid, 1234);
        assert_eq!(records[0].name, "bash");
        assert_eq!(records[0].status, "running");
    }

    #[test]
    fn stats_boot_time_is_optional() {
        let stats: SystemStats = serde_json::from_str(
            r#"{"cpu_percent": 75.0, "memory_percent": 40.0, "running_processes": 12}"#,
        )
        .unwrap();
        assert_eq!(stats.running_processes, 12);
        assert!(stats.boot_time.is_none());

        let stats: SystemStats = serde_json::from_str(
            r#"{"cpu_percent": 1.0, "memory_percent": 2.0, "running_processes": 3, "boot_time": "2026-08-06 09:00:00"}"#,
        )
        .unwrap();
        assert_eq!(stats.boot_time.as_deref(), Some("2026-08-06 09:00:00"));
    }

    #[test]
    fn malformed_payload_is_rejected() {
        let result: std::result::Result<Vec<ProcessRecord>, _> =
            serde_json::from_str(r#"[{"pid": "not-a-number", "name": "x"}]"#);
        assert!(result.is_err());

        let result: std::result::Result<SystemStats, _> = serde_json::from_str(r#""whoops""#);
        assert!(result.is_err());
    }

    #[test]
    fn terminate_request_wire_shape() {
        let body = serde_json::to_string(&TerminateRequest { pid: 42 }).unwrap();
        assert_eq!(body, r#"{"pid":42}"#);
    }
}
