// src/specs/entry.rs
//! Build one `Entry` per homograph range.
//!
//! Per-homograph nodes (headword, phonetic, speaker, pronunciation section)
//! are collected page-wide and picked by homograph index; grammar blocks are
//! picked by the indices of the homograph's range.

use scraper::ElementRef;

use crate::core::markup::{attr, first_text_child, prev_element, text, Markup};
use crate::core::sanitize::non_empty;
use crate::data::{CROSS_REFERENCE_LABEL, Entry, Meaning};
use crate::error::{LookupError, Result};
use super::grammar::Grammar;
use super::segment::{HomographRange, Segmentation};
use super::sense::extract_senses;

/// Page-wide node lists, in document order.
struct PageNodes<'a> {
    headwords: Vec<ElementRef<'a>>,
    phonetics: Vec<ElementRef<'a>>,
    speakers: Vec<ElementRef<'a>>,
    pron_sections: Vec<ElementRef<'a>>,
    blocks: Vec<ElementRef<'a>>,
}

impl<'a> PageNodes<'a> {
    fn collect(markup: &'a Markup, g: &Grammar) -> Self {
        Self {
            headwords: markup.select(&g.headword),
            phonetics: markup.select(&g.phonetic),
            speakers: markup.select(&g.speaker),
            pron_sections: markup.select(&g.pron_section),
            blocks: markup.select(&g.grammar_block),
        }
    }
}

pub fn build_entries(markup: &Markup, g: &Grammar, seg: &Segmentation<'_>) -> Result<Vec<Entry>> {
    let nodes = PageNodes::collect(markup, g);
    seg.ranges
        .iter()
        .enumerate()
        .map(|(i, range)| build_entry(i, *range, &nodes, g))
        .collect()
}

fn build_entry(i: usize, range: HomographRange, nodes: &PageNodes<'_>, g: &Grammar) -> Result<Entry> {
    let word = nodes
        .headwords
        .get(i)
        .and_then(|hw| first_text_child(*hw))
        .and_then(|t| non_empty(&t))
        .ok_or_else(|| LookupError::UnsupportedLayout(format!("homograph {i} has no headword text")))?;

    let phonetic = nodes
        .phonetics
        .get(i)
        .and_then(|p| first_text_child(*p))
        .and_then(|t| non_empty(&t));

    let pronunciation_audio_url = nodes
        .speakers
        .get(i)
        .and_then(|sp| sp.select(&g.audio).next())
        .and_then(|audio| attr(audio, "src"))
        .and_then(non_empty);

    let origin = nodes
        .pron_sections
        .get(i)
        .and_then(|ps| prev_element(*ps))
        .map(|prev| prev.select(&g.origin_text).map(text).collect::<String>())
        .and_then(|t| non_empty(&t));

    let mut meaning = range.indices().try_fold(Meaning::new(), |acc, j| {
        let block = nodes.blocks.get(j).ok_or_else(|| {
            LookupError::UnsupportedLayout(format!("grammar block {j} out of range for homograph {i}"))
        })?;
        Ok(fold_block(acc, *block, g))
    })?;
    meaning.prune_empty();

    logd!("entry {i} `{word}`: blocks {range:?}, {} labels", meaning.len());
    Ok(Entry { word, phonetic, pronunciation_audio_url, origin, meaning })
}

/// Fold one grammar block into the meaning map.
///
/// Each sense group in the block is assigned under the block's part of
/// speech. Assigning a label that is already present replaces its senses,
/// so the last sense group for a label wins, across blocks as well as
/// within one.
pub fn fold_block(mut meaning: Meaning, block: ElementRef<'_>, g: &Grammar) -> Meaning {
    let label: String = block.select(&g.part_of_speech).map(text).collect();
    let label = match label.trim() {
        "" => CROSS_REFERENCE_LABEL,
        l => l,
    };

    for group in block.select(&g.sense_group) {
        meaning.assign(label, extract_senses(group, g));
    }
    meaning
}
