// src/specs/sense.rs
//! One `Sense` per list item of a sense group.
//!
//! ```text
//! ul.semb > li > .trg
//!                ├─ p > .ind                     definition
//!                ├─ … .crossReference            definition fallback
//!                ├─ .exg > .ex > em              example
//!                └─ .synonyms > .exg > div       synonyms
//! ```

use scraper::ElementRef;

use crate::core::markup::{child_path, children, text};
use crate::core::sanitize::{clean_example, non_empty, split_synonyms};
use crate::data::Sense;
use super::grammar::Grammar;

/// Senses of every direct `li` of `group`, in order.
///
/// Items with nothing extractable still yield a blank `Sense`, so positions
/// line up with the page's numbering.
pub fn extract_senses(group: ElementRef<'_>, g: &Grammar) -> Vec<Sense> {
    children(group, &g.item)
        .into_iter()
        .map(|item| extract_sense(item, g))
        .collect()
}

pub fn extract_sense(item: ElementRef<'_>, g: &Grammar) -> Sense {
    let target = children(item, &g.translation_group);

    Sense {
        definition: definition(&target, g),
        example: example(&target, g),
        synonyms: synonyms(&target, g),
    }
}

fn definition(target: &[ElementRef<'_>], g: &Grammar) -> Option<String> {
    let indicator: String = child_path(target, &[&g.paragraph, &g.indicator])
        .into_iter()
        .map(text)
        .collect();

    non_empty(&indicator).or_else(|| {
        target
            .iter()
            .find_map(|t| t.select(&g.cross_reference).next())
            .and_then(|x| non_empty(&text(x)))
    })
}

fn example(target: &[ElementRef<'_>], g: &Grammar) -> Option<String> {
    child_path(target, &[&g.example_group, &g.example, &g.emphasis])
        .first()
        .and_then(|em| clean_example(&text(*em)))
}

fn synonyms(target: &[ElementRef<'_>], g: &Grammar) -> Option<Vec<String>> {
    let run = child_path(target, &[&g.synonyms, &g.example_group, &g.division])
        .first()
        .map(|div| text(*div))?;
    let list = split_synonyms(&run);
    (!list.is_empty()).then_some(list)
}
