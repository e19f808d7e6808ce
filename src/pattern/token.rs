//! Tokenizer shared by the validator and the parser
//!
//! Escapes are resolved here and nowhere else: `\x` always becomes an
//! [`TokenKind::Escaped`] token, so later stages never see a structural
//! meaning for an escaped byte.

use crate::io::configuration::{
    CLASS_CLOSE, CLASS_OPEN, ESCAPE, GROUP_CLOSE, GROUP_OPEN, RANGE_DASH, REPEAT_MARKER,
    is_printable,
};
use crate::io::error::PatternError;

/// Lexical category of one pattern unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Unescaped `[`
    OpenClass,
    /// Unescaped `]`
    CloseClass,
    /// Unescaped `(`
    OpenGroup,
    /// Unescaped `)`
    CloseGroup,
    /// Unescaped `-`; a range operator inside a class, a literal elsewhere
    Dash,
    /// Any other unescaped printable byte
    Char(u8),
    /// Byte that followed a `\`
    Escaped(u8),
}

impl TokenKind {
    /// Byte this token contributes as a class item, if it is one
    pub const fn operand(self) -> Option<u8> {
        match self {
            Self::Char(byte) | Self::Escaped(byte) => Some(byte),
            _ => None,
        }
    }

    /// Byte this token prints when it appears outside a class
    pub const fn literal(self) -> Option<u8> {
        match self {
            Self::Dash => Some(RANGE_DASH),
            Self::Char(byte) | Self::Escaped(byte) => Some(byte),
            _ => None,
        }
    }

    const fn digit(self) -> Option<usize> {
        match self {
            Self::Char(byte @ b'0'..=b'9') => Some((byte - b'0') as usize),
            _ => None,
        }
    }
}

/// One lexical unit with the offset of its first byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// Byte offset in the pattern
    pub offset: usize,
    /// What the unit is
    pub kind: TokenKind,
}

/// Iterator over the tokens of a pattern
///
/// Yields an error for the first byte that cannot start a token.
pub struct Tokenizer<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> Tokenizer<'a> {
    /// Start tokenizing from the beginning of the pattern
    pub const fn new(pattern: &'a str) -> Self {
        Self {
            bytes: pattern.as_bytes(),
            position: 0,
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, PatternError>;

    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.position;
        let byte = *self.bytes.get(offset)?;
        self.position += 1;

        if !is_printable(byte) {
            return Some(Err(PatternError::InvalidCharacter { offset, byte }));
        }

        let kind = match byte {
            ESCAPE => match self.bytes.get(self.position).copied() {
                None => return Some(Err(PatternError::DanglingEscape { offset })),
                Some(next) if !is_printable(next) => {
                    return Some(Err(PatternError::InvalidEscape { offset, byte: next }));
                }
                Some(next) => {
                    self.position += 1;
                    TokenKind::Escaped(next)
                }
            },
            CLASS_OPEN => TokenKind::OpenClass,
            CLASS_CLOSE => TokenKind::CloseClass,
            GROUP_OPEN => TokenKind::OpenGroup,
            GROUP_CLOSE => TokenKind::CloseGroup,
            RANGE_DASH => TokenKind::Dash,
            other => TokenKind::Char(other),
        };

        Some(Ok(Token { offset, kind }))
    }
}

/// Tokenize a whole pattern, stopping at the first lexical error
///
/// # Errors
///
/// Returns the first non-printable byte or malformed escape
pub fn tokenize(pattern: &str) -> Result<Vec<Token>, PatternError> {
    Tokenizer::new(pattern).collect()
}

/// Parsed `*N` suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repetition {
    /// The repeat count N, always at least 1
    pub count: usize,
    /// Number of tokens the suffix occupies
    pub consumed: usize,
}

/// Recognize a repetition suffix at the start of `tokens`
///
/// A suffix is an unescaped `*`, an unescaped digit 1-9, then any further
/// unescaped digits. Anything else (including `*0`) is not a suffix and
/// yields `Ok(None)`.
///
/// # Errors
///
/// Returns [`PatternError::CountOverflow`] if the count does not fit in `usize`
pub fn repetition_suffix(tokens: &[Token]) -> Result<Option<Repetition>, PatternError> {
    let Some((marker, digits)) = tokens.split_first() else {
        return Ok(None);
    };
    if marker.kind != TokenKind::Char(REPEAT_MARKER) {
        return Ok(None);
    }
    match digits.first().and_then(|token| token.kind.digit()) {
        Some(1..=9) => {}
        _ => return Ok(None),
    }

    let mut count: usize = 0;
    let mut consumed = 1;
    for digit in digits.iter().map_while(|token| token.kind.digit()) {
        count = count
            .checked_mul(10)
            .and_then(|value| value.checked_add(digit))
            .ok_or(PatternError::CountOverflow {
                offset: marker.offset,
            })?;
        consumed += 1;
    }

    Ok(Some(Repetition { count, consumed }))
}
