//! Single-pass well-formedness check for patterns

use crate::io::error::PatternError;
use crate::pattern::token::{Token, TokenKind, repetition_suffix, tokenize};

/// Items seen so far in the currently open class
#[derive(Debug)]
struct ClassState {
    opened_at: usize,
    items: usize,
    /// Last character item, available as the start of a following range
    previous: Option<u8>,
    /// Offset and start operand of a `-` still waiting for its end operand
    pending_range: Option<(usize, u8)>,
}

impl ClassState {
    const fn new(opened_at: usize) -> Self {
        Self {
            opened_at,
            items: 0,
            previous: None,
            pending_range: None,
        }
    }

    fn operand(&mut self, byte: u8) -> Result<(), PatternError> {
        if let Some((offset, start)) = self.pending_range.take()
            && byte < start
        {
            return Err(PatternError::DescendingRange {
                offset,
                start,
                end: byte,
            });
        }
        self.items += 1;
        self.previous = Some(byte);
        Ok(())
    }

    fn dash(&mut self, offset: usize) -> Result<(), PatternError> {
        if let Some((pending, _)) = self.pending_range {
            return Err(PatternError::MissingRangeEnd { offset: pending });
        }
        let start = self
            .previous
            .take()
            .ok_or(PatternError::MissingRangeStart { offset })?;
        self.pending_range = Some((offset, start));
        Ok(())
    }

    const fn close(&self, offset: usize) -> Result<(), PatternError> {
        if let Some((pending, _)) = self.pending_range {
            return Err(PatternError::MissingRangeEnd { offset: pending });
        }
        if self.items == 0 {
            return Err(PatternError::EmptyClass { offset });
        }
        Ok(())
    }
}

/// Check that a pattern is well formed
///
/// # Errors
///
/// Returns the first rule violation found scanning left to right
pub fn validate(pattern: &str) -> Result<(), PatternError> {
    let tokens = tokenize(pattern)?;
    validate_tokens(&tokens)
}

/// Boolean form of [`validate`]
pub fn is_valid(pattern: &str) -> bool {
    validate(pattern).is_ok()
}

/// Validate an already tokenized pattern
///
/// # Errors
///
/// Returns the first rule violation found scanning left to right
pub fn validate_tokens(tokens: &[Token]) -> Result<(), PatternError> {
    let mut class: Option<ClassState> = None;
    let mut open_groups: Vec<usize> = Vec::new();
    let mut position = 0;

    while let Some(token) = tokens.get(position) {
        position += 1;
        let offset = token.offset;

        match token.kind {
            TokenKind::OpenClass => {
                if class.is_some() {
                    return Err(PatternError::NestedClass { offset });
                }
                class = Some(ClassState::new(offset));
            }
            TokenKind::CloseClass => {
                let state = class
                    .take()
                    .ok_or(PatternError::UnopenedClass { offset })?;
                state.close(offset)?;
                position += skip_suffix(tokens, position)?;
            }
            TokenKind::OpenGroup | TokenKind::CloseGroup if class.is_some() => {
                return Err(PatternError::GroupInClass { offset });
            }
            TokenKind::OpenGroup => open_groups.push(offset),
            TokenKind::CloseGroup => {
                if open_groups.pop().is_none() {
                    return Err(PatternError::UnopenedGroup { offset });
                }
                position += skip_suffix(tokens, position)?;
            }
            TokenKind::Dash => {
                if let Some(state) = class.as_mut() {
                    state.dash(offset)?;
                }
            }
            TokenKind::Char(byte) | TokenKind::Escaped(byte) => {
                if let Some(state) = class.as_mut() {
                    state.operand(byte)?;
                }
            }
        }
    }

    if let Some(state) = class {
        return Err(PatternError::UnclosedClass {
            offset: state.opened_at,
        });
    }
    if let Some(&offset) = open_groups.last() {
        return Err(PatternError::UnclosedGroup { offset });
    }
    Ok(())
}

/// Number of tokens taken by a repetition suffix starting at `position`
fn skip_suffix(tokens: &[Token], position: usize) -> Result<usize, PatternError> {
    let rest = tokens.get(position..).unwrap_or_default();
    Ok(repetition_suffix(rest)?.map_or(0, |repetition| repetition.consumed))
}
