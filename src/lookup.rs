// src/lookup.rs
//
// Top level: validate the word, fetch, decode, extract.
// Batch lookups fan out over a few worker threads; each word is its own
// independent pipeline run.

use std::{
    sync::{atomic::{AtomicUsize, Ordering}, mpsc},
    thread,
};

use crate::{
    config::{BodyFormat, LookupOptions},
    core::{records::decode_records, HttpPageSource, Markup, PageSource},
    data::Entry,
    error::{LookupError, Result},
    progress::Progress,
    specs::{entry::build_entries, segment::segment, Grammar},
};

/// Look up `word` on the live site with default options.
pub fn extract_definitions(word: &str) -> Result<Vec<Entry>> {
    validate_word(word)?;
    Lookup::http(LookupOptions::default())?.extract_definitions(word)
}

/// Reject words that cannot have a page before touching the network.
///
/// A run of spaces percent-encodes to `%20%20`; the site never has an entry
/// for such a term, so it is reported as not found straight away.
pub fn validate_word(word: &str) -> Result<()> {
    if word.trim().is_empty() {
        return Err(LookupError::InvalidInput(s!("no word provided")));
    }
    if urlencoding::encode(word).contains("%20%20") {
        return Err(LookupError::WordNotFound(format!("`{word}` contains a run of spaces")));
    }
    Ok(())
}

/// Run the pipeline on a fetched body.
pub fn extract_from_body(raw: &str, format: BodyFormat) -> Result<Vec<Entry>> {
    match format {
        BodyFormat::RecordStream => extract_from_markup(&decode_records(raw)?),
        BodyFormat::Html => extract_from_markup(raw),
    }
}

/// Run the pipeline on page markup.
pub fn extract_from_markup(markup: &str) -> Result<Vec<Entry>> {
    let g = Grammar::compile()?;
    let doc = Markup::parse(markup);

    if doc.select(&g.headword).is_empty() {
        return Err(LookupError::WordNotFound(s!("no headword on page")));
    }
    let seg = segment(&doc, &g)?;
    build_entries(&doc, &g, &seg)
}

/// A page source plus the options that shape each lookup.
pub struct Lookup<S> {
    source: S,
    options: LookupOptions,
}

impl Lookup<HttpPageSource> {
    pub fn http(options: LookupOptions) -> Result<Self> {
        let source = HttpPageSource::new(options.clone())?;
        Ok(Self { source, options })
    }
}

impl<S: PageSource> Lookup<S> {
    pub fn new(source: S, options: LookupOptions) -> Self {
        Self { source, options }
    }

    pub fn options(&self) -> &LookupOptions {
        &self.options
    }

    pub fn extract_definitions(&self, word: &str) -> Result<Vec<Entry>> {
        let out = self.run(word);
        match &out {
            Ok(entries) => logf!("`{word}`: {} entries", entries.len()),
            Err(e) => loge!("`{word}`: {e}"),
        }
        out
    }

    fn run(&self, word: &str) -> Result<Vec<Entry>> {
        validate_word(word)?;
        let body = self.source.fetch_page(word)?;
        extract_from_body(&body, self.options.body_format)
    }
}

impl<S: PageSource + Sync> Lookup<S> {
    /// Look up several words concurrently. Results come back in input order;
    /// one word failing does not affect the others.
    pub fn lookup_many(
        &self,
        words: &[String],
        mut progress: Option<&mut dyn Progress>,
    ) -> Vec<(String, Result<Vec<Entry>>)> {
        if let Some(p) = progress.as_deref_mut() {
            p.begin(words.len());
        }

        let counter = AtomicUsize::new(0);
        let (res_tx, res_rx) = mpsc::channel::<(usize, Result<Vec<Entry>>)>();
        let workers = self.options.workers.min(words.len()).max(1);
        let mut slots: Vec<Option<Result<Vec<Entry>>>> = vec![None; words.len()];

        thread::scope(|scope| {
            for _ in 0..workers {
                let tx = res_tx.clone();
                let counter = &counter;
                scope.spawn(move || {
                    let mut first = true;
                    loop {
                        let i = counter.fetch_add(1, Ordering::Relaxed);
                        if i >= words.len() {
                            break;
                        }
                        if !first {
                            thread::sleep(self.options.request_pause); // be polite
                        }
                        first = false;

                        let result = self.extract_definitions(&words[i]);
                        if tx.send((i, result)).is_err() {
                            break;
                        }
                    }
                });
            }
            drop(res_tx); // main thread is sole receiver now

            for (i, result) in res_rx {
                if let Some(p) = progress.as_deref_mut() {
                    if let Err(e) = &result {
                        p.log(&format!("{}: {e}", words[i]));
                    }
                    p.item_done(&words[i]);
                }
                slots[i] = Some(result);
            }
        });

        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }

        words
            .iter()
            .cloned()
            .zip(slots)
            .map(|(word, slot)| {
                let result = slot.unwrap_or_else(|| {
                    Err(LookupError::TransportFailure(s!("worker stopped before this word")))
                });
                (word, result)
            })
            .collect()
    }
}
