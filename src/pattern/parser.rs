//! Builds the replayable node tree for a validated pattern
//!
//! Classes are expanded and repetition suffixes resolved once here, so
//! generation only walks nodes and never rescans pattern text.

use crate::io::error::PatternError;
use crate::pattern::charset::CharacterSet;
use crate::pattern::token::{Token, TokenKind, repetition_suffix, tokenize};
use crate::pattern::validator::validate_tokens;

/// Character class with its draw count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    set: CharacterSet,
    count: usize,
    choices: Vec<u8>,
}

impl Class {
    /// Create a class drawing `count` characters from `set`
    pub fn new(set: CharacterSet, count: usize) -> Self {
        let choices = set.to_vec();
        Self {
            set,
            count,
            choices,
        }
    }

    /// Expanded, deduplicated members
    pub const fn set(&self) -> &CharacterSet {
        &self.set
    }

    /// Number of independent draws per execution
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Members as a slice for uniform sampling
    pub fn choices(&self) -> &[u8] {
        &self.choices
    }
}

/// Repeatable sub-sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Nodes executed on every pass
    pub body: Vec<Node>,
    /// Number of passes
    pub count: usize,
}

/// One element of a pattern sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Byte printed verbatim
    Literal(u8),
    /// Random draws from a class
    Class(Class),
    /// Nested sequence executed `count` times
    Group(Group),
}

/// A validated pattern ready for generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    nodes: Vec<Node>,
}

impl Pattern {
    /// Validate and parse pattern text
    ///
    /// # Errors
    ///
    /// Returns the first validation failure; no tree is built for an
    /// invalid pattern
    pub fn parse(text: &str) -> Result<Self, PatternError> {
        let tokens = tokenize(text)?;
        validate_tokens(&tokens)?;

        let mut parser = Parser {
            tokens: &tokens,
            position: 0,
        };
        let nodes = parser.sequence();

        Ok(Self {
            source: text.to_string(),
            nodes,
        })
    }

    /// Top-level node sequence
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Original pattern text
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

/// Cursor over validated tokens
struct Parser<'a> {
    tokens: &'a [Token],
    position: usize,
}

impl Parser<'_> {
    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position).copied();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    /// Read nodes until end of input or the `)` closing the current group
    fn sequence(&mut self) -> Vec<Node> {
        let mut nodes = Vec::new();

        while let Some(token) = self.next() {
            match token.kind {
                TokenKind::OpenGroup => {
                    let body = self.sequence();
                    let count = self.repetition();
                    nodes.push(Node::Group(Group { body, count }));
                }
                TokenKind::CloseGroup => break,
                TokenKind::OpenClass => nodes.push(Node::Class(self.class())),
                kind => {
                    if let Some(byte) = kind.literal() {
                        nodes.push(Node::Literal(byte));
                    }
                }
            }
        }

        nodes
    }

    /// Expand class items up to the closing `]`
    fn class(&mut self) -> Class {
        let mut set = CharacterSet::new();
        let mut previous: Option<u8> = None;
        let mut range_start: Option<u8> = None;

        while let Some(token) = self.next() {
            match token.kind {
                TokenKind::CloseClass => break,
                TokenKind::Dash => range_start = previous.take(),
                kind => {
                    if let Some(byte) = kind.operand() {
                        match range_start.take() {
                            Some(start) => set.insert_range(start, byte),
                            None => set.insert(byte),
                        }
                        previous = Some(byte);
                    }
                }
            }
        }

        Class::new(set, self.repetition())
    }

    /// Consume an optional `*N` suffix, defaulting to one execution
    fn repetition(&mut self) -> usize {
        let rest = self.tokens.get(self.position..).unwrap_or_default();
        match repetition_suffix(rest) {
            Ok(Some(repetition)) => {
                self.position += repetition.consumed;
                repetition.count
            }
            _ => 1,
        }
    }
}
