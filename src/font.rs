//! Maps word counts to font sizes.

use serde::Serialize;

use crate::error::TagCloudError;
use crate::select::WordCount;

/// Smallest font size handed to the renderer.
pub const MIN_FONT: u32 = 11;
/// Largest font size handed to the renderer.
pub const MAX_FONT: u32 = 48;

/// Inclusive range of font sizes. `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontScale {
    min: u32,
    max: u32,
}

impl FontScale {
    pub fn new(min: u32, max: u32) -> Result<Self, TagCloudError> {
        if min > max {
            return Err(TagCloudError::InvalidArgument(format!(
                "minimum font size {min} exceeds maximum {max}"
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Font size for `count` when the largest count on display is
    /// `max_count`. Requires `0 < count <= max_count`.
    pub fn size_for(&self, count: u64, max_count: u64) -> u32 {
        let span = u64::from(self.max - self.min);
        let scaled = count.saturating_mul(span) / max_count.max(1);
        // count <= max_count keeps scaled within span
        self.min + scaled.min(span) as u32
    }
}

impl Default for FontScale {
    fn default() -> Self {
        Self {
            min: MIN_FONT,
            max: MAX_FONT,
        }
    }
}

/// A word ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub word: String,
    pub count: u64,
    pub font_size: u32,
}

/// Size every selected entry linearly against the largest selected count.
///
/// Entry order is preserved. The entry with the largest count gets
/// `scale.max()`.
pub fn assign_font_sizes(entries: &[WordCount<'_>], scale: &FontScale) -> Vec<RankedEntry> {
    let max_count = match entries.iter().map(|e| e.count).max() {
        Some(m) if m > 0 => m,
        _ => return Vec::new(),
    };

    entries
        .iter()
        .map(|e| RankedEntry {
            word: e.word.to_owned(),
            count: e.count,
            font_size: scale.size_for(e.count, max_count),
        })
        .collect()
}
