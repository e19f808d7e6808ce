/// Deduplicated ASCII sets expanded from classes
pub mod charset;
/// Node tree construction for validated patterns
pub mod parser;
/// Escape-aware tokenizer and repetition suffix recognition
pub mod token;
/// Single-pass pattern validation
pub mod validator;

pub use parser::{Class, Group, Node, Pattern};
pub use validator::{is_valid, validate};
