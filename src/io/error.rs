//! Error types for pattern validation and password generation

use crate::io::configuration::{
    EXIT_INVALID_PATTERN, EXIT_MISSING_PATTERN, EXIT_RUNTIME_FAILURE,
};
use std::fmt;

/// Reason a pattern was rejected, with the byte offset where it was detected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternError {
    /// Byte outside the printable ASCII range `!`..=`~`
    InvalidCharacter {
        /// Offset of the offending byte
        offset: usize,
        /// The offending byte
        byte: u8,
    },

    /// `\` as the final byte of the pattern
    DanglingEscape {
        /// Offset of the escape introducer
        offset: usize,
    },

    /// `\` followed by a byte outside the printable range
    InvalidEscape {
        /// Offset of the escape introducer
        offset: usize,
        /// The byte that followed it
        byte: u8,
    },

    /// `[` while a class is already open
    NestedClass {
        /// Offset of the second `[`
        offset: usize,
    },

    /// `]` with no open class
    UnopenedClass {
        /// Offset of the `]`
        offset: usize,
    },

    /// `[]` with no items
    EmptyClass {
        /// Offset of the closing `]`
        offset: usize,
    },

    /// Class still open at end of pattern
    UnclosedClass {
        /// Offset of the opening `[`
        offset: usize,
    },

    /// `(` or `)` inside a class
    GroupInClass {
        /// Offset of the parenthesis
        offset: usize,
    },

    /// `)` with no open group
    UnopenedGroup {
        /// Offset of the `)`
        offset: usize,
    },

    /// Group still open at end of pattern
    UnclosedGroup {
        /// Offset of the innermost unmatched `(`
        offset: usize,
    },

    /// `-` with no character before it in the class
    MissingRangeStart {
        /// Offset of the `-`
        offset: usize,
    },

    /// `-` with no character after it in the class
    MissingRangeEnd {
        /// Offset of the `-`
        offset: usize,
    },

    /// Range whose end sorts before its start
    DescendingRange {
        /// Offset of the `-`
        offset: usize,
        /// Start operand
        start: u8,
        /// End operand
        end: u8,
    },

    /// Repetition count does not fit in `usize`
    CountOverflow {
        /// Offset of the `*`
        offset: usize,
    },
}

impl PatternError {
    /// Byte offset in the pattern where the problem was detected
    pub const fn offset(&self) -> usize {
        match *self {
            Self::InvalidCharacter { offset, .. }
            | Self::DanglingEscape { offset }
            | Self::InvalidEscape { offset, .. }
            | Self::NestedClass { offset }
            | Self::UnopenedClass { offset }
            | Self::EmptyClass { offset }
            | Self::UnclosedClass { offset }
            | Self::GroupInClass { offset }
            | Self::UnopenedGroup { offset }
            | Self::UnclosedGroup { offset }
            | Self::MissingRangeStart { offset }
            | Self::MissingRangeEnd { offset }
            | Self::DescendingRange { offset, .. }
            | Self::CountOverflow { offset } => offset,
        }
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::InvalidCharacter { offset, byte } => {
                write!(f, "byte 0x{byte:02X} at offset {offset} is not printable ASCII")
            }
            Self::DanglingEscape { offset } => {
                write!(f, "escape at offset {offset} has nothing to escape")
            }
            Self::InvalidEscape { offset, byte } => {
                write!(
                    f,
                    "escape at offset {offset} is followed by non-printable byte 0x{byte:02X}"
                )
            }
            Self::NestedClass { offset } => {
                write!(f, "'[' at offset {offset} opens a class inside a class")
            }
            Self::UnopenedClass { offset } => {
                write!(f, "']' at offset {offset} has no matching '['")
            }
            Self::EmptyClass { offset } => {
                write!(f, "class closed at offset {offset} is empty")
            }
            Self::UnclosedClass { offset } => {
                write!(f, "class opened at offset {offset} is never closed")
            }
            Self::GroupInClass { offset } => {
                write!(f, "parenthesis at offset {offset} is inside a class")
            }
            Self::UnopenedGroup { offset } => {
                write!(f, "')' at offset {offset} has no matching '('")
            }
            Self::UnclosedGroup { offset } => {
                write!(f, "group opened at offset {offset} is never closed")
            }
            Self::MissingRangeStart { offset } => {
                write!(f, "range at offset {offset} has no start character")
            }
            Self::MissingRangeEnd { offset } => {
                write!(f, "range at offset {offset} has no end character")
            }
            Self::DescendingRange { offset, start, end } => {
                write!(
                    f,
                    "range '{}-{}' at offset {offset} is descending",
                    char::from(start),
                    char::from(end)
                )
            }
            Self::CountOverflow { offset } => {
                write!(f, "repetition count at offset {offset} is too large")
            }
        }
    }
}

impl std::error::Error for PatternError {}

/// Main error type for the password generator
#[derive(Debug)]
pub enum GeneratorError {
    /// No pattern was supplied
    MissingPattern,

    /// Pattern failed validation
    InvalidPattern {
        /// The rejected pattern text
        pattern: String,
        /// Why it was rejected
        source: PatternError,
    },

    /// The operating system entropy source could not seed the generator
    Entropy {
        /// Description of the failure
        reason: String,
    },

    /// Writing a generated password failed
    Output {
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl GeneratorError {
    /// Process exit status reported for this error
    ///
    /// Missing and invalid patterns map to distinct statuses so callers can
    /// tell them apart.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::MissingPattern => EXIT_MISSING_PATTERN,
            Self::InvalidPattern { .. } => EXIT_INVALID_PATTERN,
            Self::Entropy { .. } | Self::Output { .. } => EXIT_RUNTIME_FAILURE,
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPattern => write!(f, "Need password definition (use --pattern)"),
            Self::InvalidPattern { pattern, source } => {
                write!(f, "Password definition error in '{pattern}': {source}")
            }
            Self::Entropy { reason } => {
                write!(f, "Failed to seed random generator: {reason}")
            }
            Self::Output { source } => write!(f, "Failed to write password: {source}"),
        }
    }
}

impl std::error::Error for GeneratorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPattern { source, .. } => Some(source),
            Self::Output { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generator results
pub type Result<T> = std::result::Result<T, GeneratorError>;

impl From<std::io::Error> for GeneratorError {
    fn from(err: std::io::Error) -> Self {
        Self::Output { source: err }
    }
}

/// Wrap a validation failure together with the pattern it came from
pub fn invalid_pattern(pattern: &str, source: PatternError) -> GeneratorError {
    GeneratorError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    }
}
