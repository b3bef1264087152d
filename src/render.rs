//! HTML and JSON output for a [`TagCloud`].

use std::io::{self, Write};

use crate::cloud::TagCloud;
use crate::error::TagCloudError;

/// Stylesheet defining the `f11`..`f48` font classes and the cloud box.
pub const DEFAULT_STYLESHEET: &str = "http://web.cse.ohio-state.edu/software/2231/web-sw2/assignments/projects/tag-cloud-generator/data/tagcloud.css";

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn write_page<W: Write>(cloud: &TagCloud, stylesheet: &str, out: &mut W) -> io::Result<()> {
    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<title>{}</title>", escape_html(&cloud.title()))?;
    writeln!(
        out,
        "<link href=\"{}\" rel=\"stylesheet\" type=\"text/css\">",
        escape_html(stylesheet)
    )?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "<h2>{}</h2>", escape_html(&cloud.heading()))?;
    writeln!(out, "<hr>")?;
    writeln!(out, "<div class=\"cdiv\">")?;
    writeln!(out, "<p class=\"cbox\">")?;
    for entry in &cloud.entries {
        writeln!(
            out,
            "<span style=\"cursor:default\" class=\"f{}\" title=\"count: {}\">{}</span>",
            entry.font_size,
            entry.count,
            escape_html(&entry.word)
        )?;
    }
    writeln!(out, "</p>")?;
    writeln!(out, "</div>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;
    out.flush()
}

/// Write `cloud` as a standalone HTML page linking `stylesheet`.
#[tracing::instrument(skip_all, fields(entries = cloud.entries.len()))]
pub fn render_html<W: Write>(
    cloud: &TagCloud,
    stylesheet: &str,
    mut out: W,
) -> Result<(), TagCloudError> {
    write_page(cloud, stylesheet, &mut out)
        .map_err(|e| TagCloudError::output("writing HTML page", e))
}

/// Write `cloud` as pretty-printed JSON.
#[tracing::instrument(skip_all, fields(entries = cloud.entries.len()))]
pub fn render_json<W: Write>(cloud: &TagCloud, mut out: W) -> Result<(), TagCloudError> {
    serde_json::to_writer_pretty(&mut out, cloud)
        .map_err(|e| TagCloudError::output("writing JSON", io::Error::from(e)))?;
    writeln!(out)
        .and_then(|_| out.flush())
        .map_err(|e| TagCloudError::output("writing JSON", e))
}
