use std::sync::{Arc, Mutex, PoisonError};

use reqwest::{
    header::{HeaderValue, CONTENT_TYPE},
    Url,
};
use serde_json::Value;
use tokio::time::{timeout, Duration};
use tracing::{debug, error};

use crate::api::{SumRequestPayload, SumResponse, CALCULATE_SUM_PATH};
use crate::config::AppConfig;
use crate::display::{render_result, ResultSink};
use crate::error::{Result, SumError};

#[derive(Debug, Clone)]
pub struct RequesterConfig {
    service_url: String,
    timeout_ms: u64,
}

impl RequesterConfig {
    pub fn new(service_url: impl Into<String>, timeout_ms: u64) -> Self {
        Self {
            service_url: service_url.into(),
            timeout_ms,
        }
    }
}

impl From<&AppConfig> for RequesterConfig {
    fn from(cfg: &AppConfig) -> Self {
        Self::new(cfg.service_url(), cfg.timeout_ms())
    }
}

/// The two raw values a caller submits. Nothing is validated or coerced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPair {
    pub num1: String,
    pub num2: String,
}

impl InputPair {
    pub fn new(num1: impl Into<String>, num2: impl Into<String>) -> Self {
        Self {
            num1: num1.into(),
            num2: num2.into(),
        }
    }
}

impl From<&InputPair> for SumRequestPayload {
    fn from(input: &InputPair) -> Self {
        Self {
            num1: input.num1.clone(),
            num2: input.num2.clone(),
        }
    }
}

/// What a single [`SumRequester::calculate_sum`] call ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SumOutcome {
    /// The sink now shows this text.
    Displayed(String),
    /// The request failed and the error was logged.
    Failed,
    /// A later request was issued before this one completed.
    Discarded,
}

/// Sends input pairs to the sum service and renders the answer.
///
/// Clones share the request sequence, so only the most recently issued
/// request of any clone may update a sink.
#[derive(Debug, Clone)]
pub struct SumRequester {
    client: reqwest::Client,
    endpoint: Url,
    timeout: Duration,
    latest: Arc<Mutex<u64>>,
}

impl SumRequester {
    pub fn new(cfg: &RequesterConfig) -> Result<Self> {
        Self::with_client(reqwest::Client::new(), cfg)
    }

    pub fn with_client(client: reqwest::Client, cfg: &RequesterConfig) -> Result<Self> {
        let endpoint = endpoint_url(&cfg.service_url)?;
        Ok(Self {
            client,
            endpoint,
            timeout: Duration::from_millis(cfg.timeout_ms),
            latest: Arc::new(Mutex::new(0)),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Runs one request and writes `Sum: <result>` into `sink`.
    ///
    /// Failures are logged once and leave the sink untouched. A response that
    /// arrives after a newer request was issued is dropped.
    pub async fn calculate_sum(&self, input: &InputPair, sink: &dyn ResultSink) -> SumOutcome {
        let token = {
            let mut latest = self.latest.lock().unwrap_or_else(PoisonError::into_inner);
            *latest += 1;
            *latest
        };
        debug!(token, endpoint = %self.endpoint, "issuing calculate_sum request");

        let result = match self
            .request_sum(input)
            .await
            .and_then(|response| response.result.ok_or(SumError::MissingResult))
        {
            Ok(result) => result,
            Err(err) => {
                error!(token, error = %err, "calculate_sum failed");
                return SumOutcome::Failed;
            }
        };

        // Held across the show so a newer flow cannot display in between.
        let latest = self.latest.lock().unwrap_or_else(PoisonError::into_inner);
        if *latest != token {
            debug!(token, "discarding stale calculate_sum response");
            return SumOutcome::Discarded;
        }

        let text = render_result(&result);
        sink.show(&text);
        drop(latest);
        SumOutcome::Displayed(text)
    }

    /// Single round trip against the service.
    ///
    /// The configured timeout bounds the whole exchange: send, status check
    /// and body read.
    pub async fn request_sum(&self, input: &InputPair) -> Result<SumResponse> {
        timeout(self.timeout, self.round_trip(input))
            .await
            .map_err(|_| SumError::Timeout)?
    }

    async fn round_trip(&self, input: &InputPair) -> Result<SumResponse> {
        let payload = SumRequestPayload::from(input);
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response body>".to_string());
            return Err(SumError::Status { status, body });
        }

        let body = response.bytes().await?;
        parse_response(&body)
    }
}

fn endpoint_url(service_url: &str) -> Result<Url> {
    let base = Url::parse(service_url)
        .map_err(|err| SumError::InvalidEndpoint(format!("{service_url}: {err}")))?;
    base.join(CALCULATE_SUM_PATH)
        .map_err(|err| SumError::InvalidEndpoint(format!("{service_url}: {err}")))
}

fn parse_response(body: &[u8]) -> Result<SumResponse> {
    let response: SumResponse = serde_json::from_slice(body)?;
    match response.result {
        Some(Value::Null) | None => Err(SumError::MissingResult),
        Some(_) => Ok(response),
    }
}
