use crate::error::TagCloudError;
use crate::font::FontScale;
use crate::separators::SeparatorSet;

/// Number of words shown when nothing else is requested.
pub const DEFAULT_COUNT: usize = 10;

/// Runtime parameters for building a tag cloud.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of words to include in the cloud.
    pub requested_count: usize,
    /// Characters that delimit words.
    pub separators: SeparatorSet,
    /// Font range used for sizing the selected words.
    pub font: FontScale,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            requested_count: DEFAULT_COUNT,
            separators: SeparatorSet::default(),
            font: FontScale::default(),
        }
    }
}

/// Check a user supplied word count.
pub fn validate_count(requested: i64) -> Result<usize, TagCloudError> {
    usize::try_from(requested).map_err(|_| {
        TagCloudError::InvalidArgument(format!(
            "requested word count {requested} must not be negative"
        ))
    })
}
