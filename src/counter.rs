//! Word frequency counting.

use std::collections::hash_map;
use std::collections::HashMap;
use std::io::BufRead;

use tracing::debug;

use crate::error::TagCloudError;
use crate::separators::SeparatorSet;
use crate::tokenizer::words;

/// Lowercased word to occurrence count.
///
/// Every key occurred at least once in the counted text and its value is the
/// exact number of occurrences. The map cannot be modified once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: HashMap<String, u64>,
}

impl FrequencyMap {
    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of word tokens seen.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, u64> {
        self.counts.iter()
    }

    fn record(mut self, word: &str) -> Self {
        match self.counts.get_mut(word) {
            Some(n) => *n += 1,
            None => {
                self.counts.insert(word.to_owned(), 1);
            }
        }
        self
    }
}

impl<'a> IntoIterator for &'a FrequencyMap {
    type Item = (&'a String, &'a u64);
    type IntoIter = hash_map::Iter<'a, String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Count the words of every line. Lines are lowercased before tokenizing so
/// `The` and `the` are the same word.
pub fn count_lines<I, S>(lines: I, separators: &SeparatorSet) -> FrequencyMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines.into_iter().fold(FrequencyMap::default(), |map, line| {
        let line = line.as_ref().to_lowercase();
        words(&line, separators).fold(map, FrequencyMap::record)
    })
}

/// Read the whole stream and count its words.
///
/// The stream is read to the end before any counting happens; a read error
/// aborts the run and no partial map is returned.
#[tracing::instrument(skip_all)]
pub fn count_reader<R: BufRead>(
    reader: R,
    separators: &SeparatorSet,
) -> Result<FrequencyMap, TagCloudError> {
    let lines = reader
        .lines()
        .collect::<Result<Vec<String>, _>>()
        .map_err(|e| TagCloudError::input("reading input lines", e))?;
    let map = count_lines(&lines, separators);
    debug!(
        lines = lines.len(),
        words = map.total(),
        distinct = map.len(),
        "counted input"
    );
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_folds_before_counting() {
        let seps = SeparatorSet::default();
        let map = count_lines(["The the THE tHe"], &seps);
        assert_eq!(map.get("the"), Some(4));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn separators_never_become_keys() {
        let seps = SeparatorSet::default();
        let map = count_lines(["  ...  ", "--", ""], &seps);
        assert!(map.is_empty());
        assert_eq!(map.total(), 0);
    }
}
