// src/core/mod.rs

pub mod markup;
pub mod net;
pub mod records;
pub mod sanitize;

pub use markup::Markup;
pub use net::{HttpPageSource, PageSource};
