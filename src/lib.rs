//! Core logic for the tag cloud generator.
//!
//! Text is split into words by a [`SeparatorSet`], counted into a
//! [`FrequencyMap`], the most frequent words are picked and ordered
//! alphabetically, and each one gets a font size proportional to its count.
//! The resulting [`TagCloud`] is handed to [`render_html`] or
//! [`render_json`].

pub mod cloud;
pub mod config;
pub mod counter;
mod error;
pub mod font;
pub mod io_utils;
pub mod render;
pub mod select;
pub mod separators;
pub mod tokenizer;

pub use cloud::{build_cloud, TagCloud};
pub use config::{validate_count, Config, DEFAULT_COUNT};
pub use counter::{count_lines, count_reader, FrequencyMap};
pub use error::TagCloudError;
pub use font::{assign_font_sizes, FontScale, RankedEntry, MAX_FONT, MIN_FONT};
pub use render::{escape_html, render_html, render_json, DEFAULT_STYLESHEET};
pub use select::{rank, select_top, sort_by, Order, Selection, WordCount};
pub use separators::{SeparatorSet, DEFAULT_SEPARATORS};
pub use tokenizer::{next_token, tokens, words, Token, Tokens};
