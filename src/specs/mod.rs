//! # Page "specs" module
//!
//! This module hosts the **extraction grammar** for a dictionary definition
//! page: *where the ground truth lives in the markup* and *how to turn it
//! into entries*.
//!
//! ## What lives here
//! - **Selectors** for every node the extractor reads (`grammar`).
//! - **Homograph segmentation**: which grammar blocks belong to which
//!   headword variant (`segment`).
//! - **Entry assembly**: headword, phonetics, audio, origin and the
//!   part-of-speech → senses map (`entry`).
//! - **Sense extraction** from one sense group (`sense`).
//!
//! ## What does **not** live here
//! - **Fetching** (`core::net`) and **record-stream decoding**
//!   (`core::records`). Specs only ever see a parsed `Markup`.
//! - **Input validation, logging of failures, batching**: that is
//!   `lookup`'s job.
//!
//! ## Typical call chain
//! ```text
//! lookup::extract_from_markup → specs::segment::segment
//!                             → specs::entry::build_entries
//!                                 ↘ specs::sense::extract_senses (per sense group)
//! ```
//!
//! ## Conventions & invariants
//! - Everything is pure: a `Markup` in, owned data out, no state kept
//!   between calls.
//! - Ranges from `segment` are contiguous and cover the blocks that follow
//!   the first heading; if the page breaks that, segmentation fails instead
//!   of guessing.
//! - Optional fields are only set when their text is non-empty after
//!   trimming; an entry never keeps a label with no senses.
//!
//! ## Testing notes
//! Specs are tested offline against small inline fixtures shaped like the
//! real page.
pub mod entry;
pub mod grammar;
pub mod segment;
pub mod sense;

pub use grammar::Grammar;
pub use segment::{HomographRange, Segmentation};
