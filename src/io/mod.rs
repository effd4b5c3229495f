//! Output formatters: the core emits only abstract result values, and
//! this module owns every dialect-specific rendering. Not a plug-in
//! surface — each format is a plain function, not a trait object.

pub mod css;
pub mod dot;
pub mod json;
pub mod markdown;
