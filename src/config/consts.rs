// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.lexico.com/en/definition/";
pub const HOST_HEADER: &str = "lexico.com";
pub const USER_AGENT: &str = concat!("lexi_scrape/", env!("CARGO_PKG_VERSION"));
pub const TIMEOUT_SECS: u64 = 15;

// Concurrency
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
