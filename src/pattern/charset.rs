use crate::io::configuration::ASCII_WIDTH;
use bitvec::prelude::*;
use std::fmt;

/// Deduplicated set of ASCII bytes expanded from a class
///
/// Membership only; insertion order is not kept since draws are uniform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterSet {
    bits: BitArr!(for ASCII_WIDTH, in u64, Lsb0),
}

impl Default for CharacterSet {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterSet {
    /// Create a set with no members
    pub const fn new() -> Self {
        Self {
            bits: BitArray::ZERO,
        }
    }

    /// Add one byte; repeats and non-ASCII bytes are ignored
    pub fn insert(&mut self, byte: u8) {
        if let Some(mut slot) = self.bits.get_mut(usize::from(byte)) {
            *slot = true;
        }
    }

    /// Add every byte from `start` to `end` inclusive
    ///
    /// An empty range (`end < start`) adds nothing.
    pub fn insert_range(&mut self, start: u8, end: u8) {
        for byte in start..=end {
            self.insert(byte);
        }
    }

    /// Test byte membership
    pub fn contains(&self, byte: u8) -> bool {
        self.bits.get(usize::from(byte)).as_deref() == Some(&true)
    }

    /// Test if no bytes are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count bytes in the set
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Extract members in ascending order
    pub fn to_vec(&self) -> Vec<u8> {
        self.bits
            .iter_ones()
            .filter_map(|index| u8::try_from(index).ok())
            .collect()
    }
}

impl FromIterator<u8> for CharacterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for byte in iter {
            set.insert(byte);
        }
        set
    }
}

impl fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let members: String = self.to_vec().into_iter().map(char::from).collect();
        write!(f, "CharacterSet({} chars: {members})", self.len())
    }
}
