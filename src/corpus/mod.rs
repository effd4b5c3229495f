//! The external input schema and its lowering into `styleloom::core`'s
//! `StyleCorpus`. Nothing in `styleloom::analysis` depends on this module;
//! it is the only code that sees the duck-typed source document.

mod document;
mod raw_value;

pub use document::{lower, ComponentSpec, DesignDocument, StyleBlock, TokenEntry};
pub use raw_value::RawValue;
