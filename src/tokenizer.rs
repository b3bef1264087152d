//! Splits text into maximal runs of separator or word characters.

use crate::error::TagCloudError;
use crate::separators::SeparatorSet;

/// A slice of the input that is entirely separators or entirely word
/// characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub is_separator: bool,
}

/// Return the longest token of `text` starting at byte offset `position`.
///
/// The token takes the classification of the character at `position` and
/// extends until the first character of the other class or the end of
/// `text`. `position` must satisfy `position < text.len()` and fall on a
/// character boundary.
pub fn next_token<'a>(
    text: &'a str,
    position: usize,
    separators: &SeparatorSet,
) -> Result<&'a str, TagCloudError> {
    if position >= text.len() {
        return Err(TagCloudError::InvalidArgument(format!(
            "token position {position} out of bounds for text of length {}",
            text.len()
        )));
    }
    if !text.is_char_boundary(position) {
        return Err(TagCloudError::InvalidArgument(format!(
            "token position {position} is not on a character boundary"
        )));
    }

    let rest = &text[position..];
    let mut chars = rest.char_indices();
    // rest is non-empty, checked above
    let first_is_sep = chars
        .next()
        .map(|(_, c)| separators.contains(c))
        .unwrap_or(false);
    let end = chars
        .find(|&(_, c)| separators.contains(c) != first_is_sep)
        .map(|(i, _)| i)
        .unwrap_or(rest.len());

    Ok(&rest[..end])
}

/// Iterator over every token of a text, in order.
pub struct Tokens<'a, 's> {
    text: &'a str,
    position: usize,
    separators: &'s SeparatorSet,
}

impl<'a> Iterator for Tokens<'a, '_> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.text.len() {
            return None;
        }
        let text = next_token(self.text, self.position, self.separators).ok()?;
        let is_separator = text
            .chars()
            .next()
            .map(|c| self.separators.contains(c))
            .unwrap_or(false);
        self.position += text.len();
        Some(Token { text, is_separator })
    }
}

/// Tokenize `text` from the start.
pub fn tokens<'a, 's>(text: &'a str, separators: &'s SeparatorSet) -> Tokens<'a, 's> {
    Tokens {
        text,
        position: 0,
        separators,
    }
}

/// Only the word tokens of `text`; separator runs are dropped.
pub fn words<'a, 's>(
    text: &'a str,
    separators: &'s SeparatorSet,
) -> impl Iterator<Item = &'a str> + 's
where
    'a: 's,
{
    tokens(text, separators)
        .filter(|t| !t.is_separator)
        .map(|t| t.text)
}
