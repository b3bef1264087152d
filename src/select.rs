//! Top-N selection and display ordering.

use crate::counter::FrequencyMap;

/// Direction of a [`sort_by`] pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

/// Stable sort of `items` by the key returned from `key`.
///
/// Items with equal keys keep their relative order in both directions.
pub fn sort_by<T, K, F>(items: &mut [T], mut key: F, order: Order)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    match order {
        Order::Ascending => items.sort_by(|a, b| key(a).cmp(&key(b))),
        Order::Descending => items.sort_by(|a, b| key(b).cmp(&key(a))),
    }
}

/// A word and its count, borrowed from a [`FrequencyMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordCount<'a> {
    pub word: &'a str,
    pub count: u64,
}

/// The words chosen for display, in alphabetical order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<'a> {
    pub entries: Vec<WordCount<'a>>,
    /// `min(requested, distinct words)`.
    pub effective_count: usize,
}

/// Every entry of `map`, most frequent first. Equal counts are ordered
/// alphabetically.
pub fn rank(map: &FrequencyMap) -> Vec<WordCount<'_>> {
    let mut ranked: Vec<WordCount<'_>> = map
        .iter()
        .map(|(word, &count)| WordCount {
            word: word.as_str(),
            count,
        })
        .collect();
    // alphabetical first so the stable count pass keeps ties in word order
    sort_by(&mut ranked, |e| e.word, Order::Ascending);
    sort_by(&mut ranked, |e| e.count, Order::Descending);
    ranked
}

/// Pick the `n` most frequent words of `map` and order them alphabetically.
#[tracing::instrument(skip(map), fields(distinct = map.len()))]
pub fn select_top(map: &FrequencyMap, n: usize) -> Selection<'_> {
    let mut entries = rank(map);
    let effective_count = n.min(entries.len());
    entries.truncate(effective_count);
    sort_by(&mut entries, |e| e.word, Order::Ascending);
    Selection {
        entries,
        effective_count,
    }
}
