//! `styleloom` — a design-token and style-corpus analyzer: frequent-pattern
//! mining, hierarchical clustering, BEM naming analysis, and refactoring
//! suggestions over a declarative style corpus.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod core;
pub mod corpus;
pub mod errors;
pub mod io;
pub mod observability;
