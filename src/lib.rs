//! Password generation driven by a small pattern language
//!
//! A pattern mixes literal characters, `[...]` character classes with
//! inclusive ranges, and `(...)` groups, each optionally repeated with `*N`.
//! Patterns are validated in a single pass, parsed once into a node tree,
//! and replayed for every requested password with fresh random draws.

#![forbid(unsafe_code)]

/// Password generation from parsed patterns
pub mod generation;
/// Command-line driver, configuration, logging and error handling
pub mod io;
/// Pattern tokenizing, validation and parsing
pub mod pattern;

pub use io::error::{GeneratorError, PatternError, Result};
pub use pattern::{Pattern, is_valid, validate};
