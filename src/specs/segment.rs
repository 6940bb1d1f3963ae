// src/specs/segment.rs
//! Split the page's grammar blocks into one run per homograph.
//!
//! The page is flat: homograph headings and grammar blocks are siblings, in
//! document order. For heading `i`, `after[i]` counts the grammar blocks that
//! follow it. Blocks belonging to homographs before `i` are exactly the ones
//! that follow heading 0 but not heading `i`, so homograph `i` starts at
//! `after[0] - after[i]`. The last homograph ends at `after[0]`.

use std::ops::Range;

use scraper::ElementRef;

use crate::core::markup::{following_siblings_matching, Markup};
use crate::error::{LookupError, Result};
use super::grammar::Grammar;

/// Half-open `[start, end)` span over the page's grammar blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HomographRange {
    pub start: usize,
    pub end: usize,
}

impl HomographRange {
    pub fn indices(&self) -> Range<usize> { self.start..self.end }
    pub fn len(&self) -> usize { self.end - self.start }
    pub fn is_empty(&self) -> bool { self.start == self.end }
}

/// Headings and their block ranges, index-aligned.
pub struct Segmentation<'a> {
    pub headings: Vec<ElementRef<'a>>,
    pub ranges: Vec<HomographRange>,
}

pub fn segment<'a>(markup: &'a Markup, g: &Grammar) -> Result<Segmentation<'a>> {
    let headings = markup.select(&g.heading);
    if headings.is_empty() {
        return Err(LookupError::WordNotFound(s!("no homograph heading on page")));
    }

    let after: Vec<usize> = headings
        .iter()
        .map(|h| following_siblings_matching(*h, &g.grammar_block_sibling))
        .collect();
    let ranges = ranges_from_counts(&after)?;

    let total = markup.select(&g.grammar_block).len();
    let covered = ranges.last().map_or(0, |r| r.end);
    if covered > total {
        return Err(LookupError::UnsupportedLayout(format!(
            "homographs claim {covered} grammar blocks, page has {total}"
        )));
    }

    logd!("segmented {} homographs over {covered} blocks: {ranges:?}", headings.len());
    Ok(Segmentation { headings, ranges })
}

/// Turn per-heading "blocks after" counts into contiguous ranges.
///
/// `after` must be non-increasing; anything else means the headings and
/// blocks are not laid out as siblings in document order, and any ranges
/// built from it would hand blocks to the wrong homograph.
pub fn ranges_from_counts(after: &[usize]) -> Result<Vec<HomographRange>> {
    let Some(&first) = after.first() else {
        return Err(LookupError::WordNotFound(s!("no homograph heading on page")));
    };

    let mut bounds = Vec::with_capacity(after.len() + 1);
    for (i, &n) in after.iter().enumerate() {
        let bound = first.checked_sub(n).ok_or_else(|| {
            LookupError::UnsupportedLayout(format!(
                "heading {i} is followed by {n} blocks, more than heading 0 ({first})"
            ))
        })?;
        bounds.push(bound);
    }
    bounds.push(first);

    if let Some(i) = bounds.windows(2).position(|w| w[0] > w[1]) {
        return Err(LookupError::UnsupportedLayout(format!(
            "block boundaries go backwards at homograph {i}: {bounds:?}"
        )));
    }

    Ok(bounds
        .windows(2)
        .map(|w| HomographRange { start: w[0], end: w[1] })
        .collect())
}
