//! End-to-end pipeline from a text stream to a sized, ordered tag cloud.

use std::io::BufRead;

use serde::Serialize;
use tracing::info;

use crate::config::Config;
use crate::counter::{count_reader, FrequencyMap};
use crate::error::TagCloudError;
use crate::font::{assign_font_sizes, RankedEntry};
use crate::select::select_top;

/// Everything a renderer needs to draw one cloud.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCloud {
    /// Name of the source, shown in the title and heading.
    pub label: String,
    pub requested_count: usize,
    /// `min(requested_count, distinct words)`.
    pub effective_count: usize,
    /// Alphabetical order.
    pub entries: Vec<RankedEntry>,
}

impl TagCloud {
    /// Size and order the top words of an already counted map.
    pub fn from_map(label: impl Into<String>, map: &FrequencyMap, config: &Config) -> Self {
        let selection = select_top(map, config.requested_count);
        let entries = assign_font_sizes(&selection.entries, &config.font);
        Self {
            label: label.into(),
            requested_count: config.requested_count,
            effective_count: selection.effective_count,
            entries,
        }
    }

    pub fn title(&self) -> String {
        format!("Top {} words in {}", self.requested_count, self.label)
    }

    pub fn heading(&self) -> String {
        format!("Top {} words in {}", self.effective_count, self.label)
    }
}

/// Read `reader` to the end and build its tag cloud.
#[tracing::instrument(skip(reader, config), fields(requested = config.requested_count))]
pub fn build_cloud<R: BufRead>(
    reader: R,
    label: &str,
    config: &Config,
) -> Result<TagCloud, TagCloudError> {
    let map = count_reader(reader, &config.separators)?;
    let cloud = TagCloud::from_map(label, &map, config);
    info!(
        distinct = map.len(),
        effective = cloud.effective_count,
        "built tag cloud"
    );
    Ok(cloud)
}
