//! Characters that delimit words.
//!
//! A [`SeparatorSet`] is built once when the program starts and then passed
//! by reference to the tokenizer and counter. It is never mutated after
//! construction.

use std::collections::BTreeSet;

use crate::error::TagCloudError;

/// Whitespace and ASCII punctuation treated as word delimiters by default.
pub const DEFAULT_SEPARATORS: &str = " \t\n\r,-.!?[]';:/()\"*`";

/// Immutable set of separator characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorSet {
    chars: BTreeSet<char>,
}

impl SeparatorSet {
    /// Build a set from every character of `spec`. Duplicates collapse.
    ///
    /// An empty `spec` is rejected: with no separators the whole line would
    /// be a single word.
    pub fn from_chars(spec: &str) -> Result<Self, TagCloudError> {
        if spec.is_empty() {
            return Err(TagCloudError::InvalidArgument(
                "separator set must contain at least one character".into(),
            ));
        }
        Ok(Self {
            chars: spec.chars().collect(),
        })
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl Default for SeparatorSet {
    fn default() -> Self {
        Self {
            chars: DEFAULT_SEPARATORS.chars().collect(),
        }
    }
}
