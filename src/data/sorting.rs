use std::cmp::Ordering;

use super::ProcessRecord;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    pub fn toggle(self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "asc" => Some(SortDir::Asc),
            "desc" => Some(SortDir::Desc),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Pid,
    Name,
    Cpu,
    Memory,
    Status,
}

impl SortKey {
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Pid => "pid",
            SortKey::Name => "name",
            SortKey::Cpu => "cpu",
            SortKey::Memory => "mem",
            SortKey::Status => "stat",
        }
    }

    pub fn default_dir(self) -> SortDir {
        match self {
            SortKey::Cpu | SortKey::Memory => SortDir::Desc,
            SortKey::Pid | SortKey::Name | SortKey::Status => SortDir::Asc,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "pid" => Some(SortKey::Pid),
            "name" => Some(SortKey::Name),
            "cpu" => Some(SortKey::Cpu),
            "mem" | "memory" => Some(SortKey::Memory),
            "stat" | "status" => Some(SortKey::Status),
            _ => None,
        }
    }

    pub fn next(self) -> Self {
        match self {
            SortKey::Pid => SortKey::Name,
            SortKey::Name => SortKey::Cpu,
            SortKey::Cpu => SortKey::Memory,
            SortKey::Memory => SortKey::Status,
            SortKey::Status => SortKey::Pid,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            SortKey::Pid => SortKey::Status,
            SortKey::Name => SortKey::Pid,
            SortKey::Cpu => SortKey::Name,
            SortKey::Memory => SortKey::Cpu,
            SortKey::Status => SortKey::Memory,
        }
    }
}

/// Deterministic sort: ties always break by PID so identical snapshots
/// render identically regardless of fetch order.
pub fn sort_process_records(records: &mut [ProcessRecord], sort_key: SortKey, sort_dir: SortDir) {
    records.sort_by(|a, b| {
        let ordering = match sort_key {
            SortKey::Pid => a.pid.cmp(&b.pid),
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Cpu => a.cpu.partial_cmp(&b.cpu).unwrap_or(Ordering::Equal),
            SortKey::Memory => a.memory.partial_cmp(&b.memory).unwrap_or(Ordering::Equal),
            SortKey::Status => a.status.cmp(&b.status),
        };

        let ordering = match sort_dir {
            SortDir::Asc => ordering,
            SortDir::Desc => ordering.reverse(),
        };

        ordering.then_with(|| a.pid.cmp(&b.pid))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pid: u32, name: &str, cpu: f64, memory: f64) -> ProcessRecord {
        ProcessRecord {
            pid,
            name: name.to_string(),
            cpu,
            memory,
            status: "running".to_string(),
        }
    }

    #[test]
    fn sort_by_cpu_desc_breaks_ties_by_pid() {
        let mut records = vec![
            record(2, "b", 20.0, 1.0),
            record(1, "a", 20.0, 2.0),
            record(3, "c", 10.0, 3.0),
        ];

        sort_process_records(&mut records, SortKey::Cpu, SortDir::Desc);

        assert_eq!(records[0].pid, 1);
        assert_eq!(records[1].pid, 2);
        assert_eq!(records[2].pid, 3);
    }

    #[test]
    fn sort_by_name_asc() {
        let mut records = vec![
            record(1, "nginx", 1.0, 1.0),
            record(2, "bash", 2.0, 2.0),
            record(3, "cron", 3.0, 3.0),
        ];

        sort_process_records(&mut records, SortKey::Name, SortDir::Asc);

        assert_eq!(records[0].name, "bash");
        assert_eq!(records[1].name, "cron");
        assert_eq!(records[2].name, "nginx");
    }

    #[test]
    fn sort_is_idempotent_for_identical_input() {
        let snapshot = vec![
            record(5, "e", 50.0, 1.0),
            record(4, "d", 50.0, 2.0),
            record(9, "f", 1.0, 0.1),
        ];

        let mut first = snapshot.clone();
        sort_process_records(&mut first, SortKey::Cpu, SortDir::Desc);
        let mut second = snapshot;
        sort_process_records(&mut second, SortKey::Cpu, SortDir::Desc);

        assert_eq!(first, second);
    }
}
