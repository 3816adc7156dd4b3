use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;

use super::types::{
    HistoryRecord, ProcessRecord, SystemStats, TerminateRequest, TerminateResponse, ThreatRecord,
};
use crate::error::{Result, SentopError};

const STATS_PATH: &str = "/api/stats";
const PROCESSES_PATH: &str = "/api/processes";
const THREATS_PATH: &str = "/api/threats";
const HISTORY_PATH: &str = "/api/history";
const TERMINATE_PATH: &str = "/api/terminate";

/// Blocking HTTP client for the process-monitor agent. Cheap to clone;
/// every fetch worker gets its own handle.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: &str, request_timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(request_timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn stats(&self) -> Result<SystemStats> {
        self.get_json(STATS_PATH)
    }

    pub fn processes(&self) -> Result<Vec<ProcessRecord>> {
        self.get_json(PROCESSES_PATH)
    }

    pub fn threats(&self) -> Result<Vec<ThreatRecord>> {
        self.get_json(THREATS_PATH)
    }

    pub fn history(&self) -> Result<Vec<HistoryRecord>> {
        self.get_json(HISTORY_PATH)
    }

    pub fn terminate(&self, pid: u32) -> Result<TerminateResponse> {
        let response = self
            .client
            .post(self.url(TERMINATE_PATH))
            .json(&TerminateRequest { pid })
            .send()?;
        decode(TERMINATE_PATH, response)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.client.get(self.url(path)).send()?;
        decode(path, response)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Treat every response body as untrusted: check the status, then require
/// the body to decode into the expected shape before anything reaches the
/// tables.
fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(SentopError::api(path, status.as_u16()));
    }
    let body = response.text()?;
    serde_json::from_str(&body).map_err(|err| SentopError::decode(path, err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:5000/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(client.url(STATS_PATH), "http://localhost:5000/api/stats");
    }

    #[test]
    fn endpoint_urls_join_without_doubling() {
        let client = ApiClient::new("http://agent:9000", Duration::from_secs(5)).unwrap();
        assert_eq!(client.url(TERMINATE_PATH), "http://agent:9000/api/terminate");
        assert_eq!(client.url(HISTORY_PATH), "http://agent:9000/api/history");
    }
}
