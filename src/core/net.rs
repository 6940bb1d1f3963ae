// src/core/net.rs
//
// Page fetching. The extraction pipeline only sees `PageSource`; the HTTP
// client is one implementation of it.

use reqwest::blocking::Client;
use reqwest::header::HOST;

use crate::config::{consts::USER_AGENT, LookupOptions};
use crate::error::{LookupError, Result};

/// Something that can hand back the raw body of a word's definition page.
pub trait PageSource {
    fn fetch_page(&self, word: &str) -> Result<String>;
}

impl<F> PageSource for F
where
    F: Fn(&str) -> Result<String>,
{
    fn fetch_page(&self, word: &str) -> Result<String> {
        self(word)
    }
}

/// Blocking HTTP GET against `LookupOptions::page_url`.
pub struct HttpPageSource {
    client: Client,
    options: LookupOptions,
}

impl HttpPageSource {
    pub fn new(options: LookupOptions) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(options.timeout)
            .build()
            .map_err(transport)?;
        Ok(Self { client, options })
    }
}

impl PageSource for HttpPageSource {
    fn fetch_page(&self, word: &str) -> Result<String> {
        let url = self.options.page_url(word);
        logd!("GET {url}");

        let mut req = self.client.get(&url);
        if let Some(host) = &self.options.host_header {
            req = req.header(HOST, host);
        }

        // Unknown words come back as error pages; the body still decides
        // between found and not found.
        let resp = req.send().map_err(transport)?;
        logd!("{} {url}", resp.status());
        resp.text().map_err(transport)
    }
}

fn transport(e: reqwest::Error) -> LookupError {
    LookupError::TransportFailure(e.to_string())
}
