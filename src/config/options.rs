// src/config/options.rs
use std::time::Duration;

use super::consts::*;

/// How the fetched body is turned into markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyFormat {
    /// Length-prefixed record stream; decode before parsing.
    RecordStream,
    /// Already plain HTML.
    Html,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupOptions {
    /// Page URL is `base_url` + percent-encoded word.
    pub base_url: String,
    /// Sent as the `Host` header; `None` leaves it to the client.
    pub host_header: Option<String>,
    pub timeout: Duration,
    pub body_format: BodyFormat,
    pub workers: usize,
    pub request_pause: Duration,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            host_header: Some(s!(HOST_HEADER)),
            timeout: Duration::from_secs(TIMEOUT_SECS),
            body_format: BodyFormat::RecordStream,
            workers: WORKERS,
            request_pause: Duration::from_millis(REQUEST_PAUSE_MS),
        }
    }
}

impl LookupOptions {
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_host_header(mut self, host: Option<String>) -> Self {
        self.host_header = host;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_body_format(mut self, format: BodyFormat) -> Self {
        self.body_format = format;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Pause a worker takes between two of its own requests.
    pub fn with_request_pause(mut self, pause: Duration) -> Self {
        self.request_pause = pause;
        self
    }

    /// URL of the definition page for `word`.
    pub fn page_url(&self, word: &str) -> String {
        join!(&self.base_url, &urlencoding::encode(word))
    }
}
