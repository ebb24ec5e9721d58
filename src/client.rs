use std::time::Duration;

use crate::result::Result;
use reqwest::{header::USER_AGENT, Client as ReqwestClient, StatusCode};
use serde::de::DeserializeOwned;

/// Per-request timeout. Covers connect, read and body decode.
const TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP layer shared by every fetch path.
///
/// One GET per dispatched operation, no retries, no caching.
#[derive(Debug)]
pub struct Client {
    http: ReqwestClient,
}

impl Client {
    /// Builds a client. Cheap to create; meant to be built once per run.
    pub fn new() -> Client {
        Client {
            http: ReqwestClient::new(),
        }
    }

    /// Issues one GET and parses the body as JSON on a 200.
    ///
    /// Non-2xx statuses are data, not errors: callers get the raw status
    /// back and decide what it means for their operation. Only transport
    /// failures (DNS, timeout, connection reset) and undecodable bodies
    /// surface as `Err`.
    pub(crate) async fn fetch_json<T>(&self, url: &str) -> Result<Fetch<T>>
    where
        T: DeserializeOwned,
    {
        log::info!("request for {url} dispatched");
        let response = self
            .http
            .get(url)
            .header(USER_AGENT, "chanscope/0.1")
            .timeout(TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        log::info!("response status: {status}");

        if status == StatusCode::OK {
            Ok(Fetch::Payload(response.json::<T>().await?))
        } else {
            Ok(Fetch::Status(status))
        }
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a fetch: a parsed payload, or the raw non-200 status.
#[derive(Debug)]
pub(crate) enum Fetch<T> {
    Payload(T),
    Status(StatusCode),
}
