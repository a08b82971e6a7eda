/*!
 * Marker block handling for presentation pages.
 *
 * A marker block is a plain-text script element such as
 * `<script type="text/plain" id="mdContent">...</script>`. Its inner text is
 * replaced wholesale with the contents of a documentation file.
 */

use std::borrow::Cow;

use log::trace;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

use crate::errors::InjectError;

/// Id of the marker block used by the demo pages
pub const DEFAULT_MARKER_ID: &str = "mdContent";

/// Closing tag shared by every marker block
const CLOSING_TAG: &str = "</script>";

static DEFAULT_MARKER_REGEX: Lazy<Regex> = Lazy::new(|| {
    build_regex(&opening_tag(DEFAULT_MARKER_ID)).expect("Invalid default marker regex")
});

fn opening_tag(id: &str) -> String {
    format!(r#"<script type="text/plain" id="{}">"#, id)
}

// Shortest span from the opening tag to the next closing tag, across newlines
fn build_regex(open_tag: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        "{}(?s:.*?){}",
        regex::escape(open_tag),
        regex::escape(CLOSING_TAG)
    ))
}

/// A delimited region in a presentation page that receives injected text
#[derive(Debug, Clone)]
pub struct MarkerBlock {
    open_tag: String,
    regex: Regex,
}

impl MarkerBlock {
    /// Build the marker block for the given script element id
    pub fn new(id: &str) -> Result<Self, InjectError> {
        if id.is_empty() {
            return Err(InjectError::InvalidMarker {
                id: id.to_string(),
                reason: "id must not be empty".to_string(),
            });
        }
        if let Some(bad) = id.chars().find(|c| matches!(c, '"' | '<' | '>')) {
            return Err(InjectError::InvalidMarker {
                id: id.to_string(),
                reason: format!("id must not contain '{}'", bad),
            });
        }

        if id == DEFAULT_MARKER_ID {
            return Ok(Self::default());
        }

        let open_tag = opening_tag(id);
        let regex = build_regex(&open_tag).map_err(|e| InjectError::InvalidMarker {
            id: id.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { open_tag, regex })
    }

    /// The literal opening tag, e.g. `<script type="text/plain" id="mdContent">`
    pub fn open_tag(&self) -> &str {
        &self.open_tag
    }

    /// Whether the text holds at least one marker block
    pub fn contains(&self, html: &str) -> bool {
        self.regex.is_match(html)
    }

    /// Replace the first marker block in `html` with one holding `content`.
    ///
    /// The content is inserted verbatim, framed by a line break on each side.
    /// Returns `Cow::Borrowed` when the page has no marker block.
    pub fn inject<'a>(&self, html: &'a str, content: &str) -> Cow<'a, str> {
        let replacement = format!("{}\n{}\n{}", self.open_tag, content, CLOSING_TAG);
        let result = self.regex.replace(html, NoExpand(&replacement));
        if matches!(result, Cow::Borrowed(_)) {
            trace!("No marker block '{}' found", self.open_tag);
        }
        result
    }
}

impl Default for MarkerBlock {
    fn default() -> Self {
        Self {
            open_tag: opening_tag(DEFAULT_MARKER_ID),
            regex: DEFAULT_MARKER_REGEX.clone(),
        }
    }
}
