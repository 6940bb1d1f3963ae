// src/specs/grammar.rs
//! Where things live on a definition page.
//!
//! Every selector the extractor uses is listed here and compiled once per
//! extraction. Page-level selectors run against the whole document; the
//! item-level ones are single steps chained with `markup::child_path` to
//! express `>`-relative paths such as `li > .trg > p > .ind`.

use scraper::Selector;

use crate::core::markup::selector;
use crate::error::Result;

// Page level
pub const HEADING: &str = ".entryHead.primary_homograph";
pub const HEADWORD: &str = ".hwg .hw";
pub const GRAMMAR_BLOCK: &str = "section.gramb";
pub const GRAMMAR_BLOCK_SIBLING: &str = ".gramb";
pub const PRON_SECTION: &str = ".pronSection.etym";
pub const PHONETIC: &str = ".pronSection.etym .pron .phoneticspelling";
pub const SPEAKER: &str = ".pronSection.etym .pron .speaker";

// Inside a homograph
pub const AUDIO: &str = "a audio";
pub const ORIGIN_TEXT: &str = ".senseInnerWrapper p";
pub const PART_OF_SPEECH: &str = ".ps.pos .pos";
pub const SENSE_GROUP: &str = ".semb";

// Inside a sense group
pub const ITEM: &str = "li";
pub const TRANSLATION_GROUP: &str = ".trg";
pub const PARAGRAPH: &str = "p";
pub const INDICATOR: &str = ".ind";
pub const CROSS_REFERENCE: &str = ".crossReference";
pub const EXAMPLE_GROUP: &str = ".exg";
pub const EXAMPLE: &str = ".ex";
pub const EMPHASIS: &str = "em";
pub const SYNONYMS: &str = ".synonyms";
pub const DIVISION: &str = "div";

pub struct Grammar {
    pub heading: Selector,
    pub headword: Selector,
    pub grammar_block: Selector,
    pub grammar_block_sibling: Selector,
    pub pron_section: Selector,
    pub phonetic: Selector,
    pub speaker: Selector,

    pub audio: Selector,
    pub origin_text: Selector,
    pub part_of_speech: Selector,
    pub sense_group: Selector,

    pub item: Selector,
    pub translation_group: Selector,
    pub paragraph: Selector,
    pub indicator: Selector,
    pub cross_reference: Selector,
    pub example_group: Selector,
    pub example: Selector,
    pub emphasis: Selector,
    pub synonyms: Selector,
    pub division: Selector,
}

impl Grammar {
    pub fn compile() -> Result<Self> {
        Ok(Self {
            heading: selector(HEADING)?,
            headword: selector(HEADWORD)?,
            grammar_block: selector(GRAMMAR_BLOCK)?,
            grammar_block_sibling: selector(GRAMMAR_BLOCK_SIBLING)?,
            pron_section: selector(PRON_SECTION)?,
            phonetic: selector(PHONETIC)?,
            speaker: selector(SPEAKER)?,

            audio: selector(AUDIO)?,
            origin_text: selector(ORIGIN_TEXT)?,
            part_of_speech: selector(PART_OF_SPEECH)?,
            sense_group: selector(SENSE_GROUP)?,

            item: selector(ITEM)?,
            translation_group: selector(TRANSLATION_GROUP)?,
            paragraph: selector(PARAGRAPH)?,
            indicator: selector(INDICATOR)?,
            cross_reference: selector(CROSS_REFERENCE)?,
            example_group: selector(EXAMPLE_GROUP)?,
            example: selector(EXAMPLE)?,
            emphasis: selector(EMPHASIS)?,
            synonyms: selector(SYNONYMS)?,
            division: selector(DIVISION)?,
        })
    }
}
