// src/cli.rs
use std::{fs, path::PathBuf, process::ExitCode, time::Duration};

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Result, WrapErr};
use serde_json::{Map, Value};

use crate::{
    config::{consts::TIMEOUT_SECS, BodyFormat, LookupOptions},
    data::Entry,
    error::LookupError,
    lookup::Lookup,
    progress::Progress,
};

#[derive(Parser, Debug)]
#[command(name = "lexi", version, about = "Look up dictionary definitions and print them as JSON")]
pub struct Cli {
    /// Word(s) to look up
    #[arg(required = true)]
    pub words: Vec<String>,

    /// Read the page body from a saved file instead of fetching it
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Body is plain HTML rather than a record stream
    #[arg(long)]
    pub raw: bool,

    /// Definition page prefix; the encoded word is appended
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Value of the Host header ("" to send none)
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = TIMEOUT_SECS)]
    pub timeout: u64,

    /// Concurrent lookups when several words are given
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Pretty-print JSON
    #[arg(short, long)]
    pub pretty: bool,

    /// Write JSON to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn options(&self) -> LookupOptions {
        let mut opts = LookupOptions::default()
            .with_timeout(Duration::from_secs(self.timeout))
            .with_body_format(if self.raw { BodyFormat::Html } else { BodyFormat::RecordStream });
        if let Some(url) = &self.base_url {
            opts = opts.with_base_url(url.clone());
        }
        if let Some(host) = &self.host {
            opts = opts.with_host_header((!host.is_empty()).then(|| host.clone()));
        }
        if let Some(n) = self.workers {
            opts = opts.with_workers(n);
        }
        opts
    }

    fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Parse args, run, print. Exit code is non-zero if any lookup failed.
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    crate::log::init(cli.log_level());
    let opts = cli.options();

    let (json, ok) = match &cli.file {
        Some(path) => {
            let path = path.clone();
            let source = move |_: &str| {
                fs::read_to_string(&path).map_err(|e| {
                    LookupError::TransportFailure(format!("{}: {e}", path.display()))
                })
            };
            lookup_all(&Lookup::new(source, opts), &cli.words)?
        }
        None => {
            let lookup = Lookup::http(opts).wrap_err("could not build HTTP client")?;
            lookup_all(&lookup, &cli.words)?
        }
    };

    match &cli.out {
        Some(path) => {
            crate::file::write_json(path, &json, cli.pretty)
                .wrap_err_with(|| format!("writing {}", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        None => {
            let text = if cli.pretty { serde_json::to_string_pretty(&json)? } else { serde_json::to_string(&json)? };
            println!("{text}");
        }
    }

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// One word prints its entries (or error) directly; several words print an
/// object keyed by word.
fn lookup_all<S>(lookup: &Lookup<S>, words: &[String]) -> Result<(Value, bool)>
where
    S: crate::core::PageSource + Sync,
{
    if let [word] = words {
        let result = lookup.extract_definitions(word);
        let ok = result.is_ok();
        return Ok((to_json(result)?, ok));
    }

    let mut progress = StderrProgress::default();
    let results = lookup.lookup_many(words, Some(&mut progress));
    let ok = results.iter().all(|(_, r)| r.is_ok());
    let map = results
        .into_iter()
        .map(|(word, result)| Ok((word, to_json(result)?)))
        .collect::<Result<Map<String, Value>>>()?;
    Ok((Value::Object(map), ok))
}

fn to_json(result: Result<Vec<Entry>, LookupError>) -> Result<Value> {
    let value = match result {
        Ok(entries) => serde_json::to_value(entries),
        Err(e) => serde_json::to_value(e.to_body()),
    };
    value.wrap_err("serializing lookup result")
}

#[derive(Default)]
struct StderrProgress {
    total: usize,
    done: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn item_done(&mut self, word: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {word}", self.done, self.total);
    }
}
