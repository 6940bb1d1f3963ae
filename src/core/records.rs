// src/core/records.rs
//! Record-stream decoding.
//!
//! Some page bodies arrive as a length-prefixed chunk stream instead of plain
//! HTML:
//!
//! ```text
//! <metadata line>\n
//! 1b;<html><head>...<title>x</title>5;[1,2]2a;...
//! ```
//!
//! Each record is `<hex length>;<payload>`, lengths counted in characters.
//! Records whose payload starts with `[` are control data, not markup.
//! Surviving payloads are stitched back together with a `<script>` opener
//! inserted as the second piece and a `</script>` closer appended, so the
//! trailing script payloads do not leak into the text of the page.

use crate::error::{LookupError, Result};

pub const SCRIPT_OPEN: &str = "<script>";
pub const SCRIPT_CLOSE: &str = "</script>";

/// Decode a raw record stream into a markup string.
pub fn decode_records(raw: &str) -> Result<String> {
    // First line is stream metadata
    let stream = raw.split_once('\n').map(|(_, rest)| rest).unwrap_or("");

    let records = split_records(stream)?;
    let total = records.len();
    let kept: Vec<&str> = records
        .into_iter()
        .filter(|r| !is_control_record(r))
        .collect();

    logd!("record stream: {total} records, {} markup", kept.len());
    assemble(kept)
}

/// Split a stream (metadata line already removed) into record payloads.
///
/// Stops at the first point where no `;` follows. A prefix that is not hex,
/// or a length that runs past the end of the input, is a decode failure.
pub fn split_records(stream: &str) -> Result<Vec<&str>> {
    let mut out = Vec::new();
    let mut rest = stream;

    while let Some(semi) = rest.find(';') {
        let prefix = rest[..semi].trim();
        let len = parse_length(prefix).ok_or_else(|| {
            LookupError::DecodeFailure(format!(
                "record {}: length prefix {prefix:?} is not hexadecimal",
                out.len()
            ))
        })?;

        let body = &rest[semi + 1..];
        let end = char_boundary(body, len).ok_or_else(|| {
            LookupError::DecodeFailure(format!(
                "record {}: declares {len} chars, only {} remain",
                out.len(),
                body.chars().count()
            ))
        })?;

        out.push(&body[..end]);
        rest = &body[end..];
    }

    Ok(out)
}

pub fn is_control_record(record: &str) -> bool {
    record.starts_with('[')
}

fn assemble(mut kept: Vec<&str>) -> Result<String> {
    if kept.is_empty() {
        return Err(LookupError::DecodeFailure(s!("stream holds no markup records")));
    }
    kept.insert(1, SCRIPT_OPEN);
    kept.push(SCRIPT_CLOSE);
    Ok(kept.concat())
}

fn parse_length(prefix: &str) -> Option<usize> {
    if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    usize::from_str_radix(prefix, 16).ok()
}

/// Byte offset just past the first `n` chars of `s`, if `s` has that many.
fn char_boundary(s: &str, n: usize) -> Option<usize> {
    if n == 0 {
        return Some(0);
    }
    s.char_indices()
        .nth(n - 1)
        .map(|(i, c)| i + c.len_utf8())
}
