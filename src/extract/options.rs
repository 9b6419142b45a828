//! Extraction options and configuration.

use crate::error::{Error, Result};

/// Marker appended to text cut by `max_text_length`.
pub const ELLIPSIS: &str = "...";

/// Options for extracting content from a range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Populate element text and the aggregate text
    pub include_text: bool,

    /// Emit images embedded in paragraphs
    pub include_images: bool,

    /// Emit tables
    pub include_tables: bool,

    /// Emit content controls
    pub include_content_controls: bool,

    /// Look up secondary metadata (style, alignment, list membership)
    pub detailed_metadata: bool,

    /// Per-element text limit in characters
    pub max_text_length: Option<usize>,
}

impl ExtractOptions {
    /// Create new extraction options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable text.
    pub fn with_text(mut self, include: bool) -> Self {
        self.include_text = include;
        self
    }

    /// Enable or disable images.
    pub fn with_images(mut self, include: bool) -> Self {
        self.include_images = include;
        self
    }

    /// Enable or disable tables.
    pub fn with_tables(mut self, include: bool) -> Self {
        self.include_tables = include;
        self
    }

    /// Enable or disable content controls.
    pub fn with_content_controls(mut self, include: bool) -> Self {
        self.include_content_controls = include;
        self
    }

    /// Enable or disable secondary metadata lookups.
    pub fn with_detailed_metadata(mut self, detailed: bool) -> Self {
        self.detailed_metadata = detailed;
        self
    }

    /// Truncate element text longer than `max` characters.
    pub fn with_max_text_length(mut self, max: usize) -> Self {
        self.max_text_length = Some(max);
        self
    }

    /// Paragraph text only: no images, tables or content controls.
    pub fn text_only(mut self) -> Self {
        self.include_images = false;
        self.include_tables = false;
        self.include_content_controls = false;
        self
    }

    /// Reject option values that cannot be honored.
    pub fn validate(&self) -> Result<()> {
        validate_max_text_length(self.max_text_length)
    }

    /// Apply the text limit to one field.
    pub(crate) fn truncate(&self, text: &str) -> (String, bool) {
        truncate_text(text, self.max_text_length)
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            include_text: true,
            include_images: true,
            include_tables: true,
            include_content_controls: true,
            detailed_metadata: false,
            max_text_length: None,
        }
    }
}

/// Check a text limit; zero would discard every character.
pub(crate) fn validate_max_text_length(max: Option<usize>) -> Result<()> {
    if max == Some(0) {
        return Err(Error::validation("max_text_length must be at least 1"));
    }
    Ok(())
}

/// Cut `text` to `max` characters and append [`ELLIPSIS`].
///
/// Returns the (possibly shortened) text and whether it was cut.
pub fn truncate_text(text: &str, max: Option<usize>) -> (String, bool) {
    match max {
        Some(max) if text.chars().count() > max => {
            let mut cut: String = text.chars().take(max).collect();
            cut.push_str(ELLIPSIS);
            (cut, true)
        }
        _ => (text.to_string(), false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ExtractOptions::default();
        assert!(options.include_text);
        assert!(options.include_images);
        assert!(options.include_tables);
        assert!(options.include_content_controls);
        assert!(!options.detailed_metadata);
        assert_eq!(options.max_text_length, None);
    }

    #[test]
    fn test_options_builder() {
        let options = ExtractOptions::new()
            .text_only()
            .with_detailed_metadata(true)
            .with_max_text_length(50);

        assert!(!options.include_tables);
        assert!(!options.include_images);
        assert!(options.detailed_metadata);
        assert_eq!(options.max_text_length, Some(50));
    }

    #[test]
    fn test_truncate_text() {
        let long = "x".repeat(300);
        let (cut, truncated) = truncate_text(&long, Some(100));
        assert!(truncated);
        assert_eq!(cut.chars().count(), 103);
        assert!(cut.ends_with(ELLIPSIS));

        let (same, truncated) = truncate_text("short", Some(100));
        assert!(!truncated);
        assert_eq!(same, "short");

        let (exact, truncated) = truncate_text("abcde", Some(5));
        assert!(!truncated);
        assert_eq!(exact, "abcde");
    }

    #[test]
    fn test_truncate_counts_characters() {
        let (cut, truncated) = truncate_text("가나다라마", Some(2));
        assert!(truncated);
        assert_eq!(cut, "가나...");
    }

    #[test]
    fn test_zero_limit_rejected() {
        let options = ExtractOptions::new().with_max_text_length(0);
        assert!(options.validate().unwrap_err().is_validation());
    }
}
