// src/lib.rs
//! Dictionary page scraping.
//!
//! Fetch a word's definition page, decode its record stream, and extract one
//! [`Entry`] per homograph. See [`lookup`] for the entry points.

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod file;
pub mod lookup;
pub mod progress;
pub mod specs;

#[cfg(feature = "cli")]
pub mod cli;

pub use data::{Entry, Meaning, Sense};
pub use error::{ErrorKind, LookupError};
pub use lookup::{extract_definitions, extract_from_body, extract_from_markup, Lookup};
