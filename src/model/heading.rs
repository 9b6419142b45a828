//! Heading records reported by the host paragraph scan.

use super::FormatSnapshot;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Lowest heading level.
pub const MIN_HEADING_LEVEL: u8 = 1;

/// Deepest heading level.
pub const MAX_HEADING_LEVEL: u8 = 9;

/// A heading paragraph detected in the document body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingRecord {
    /// Heading text
    pub text: String,

    /// Heading level (1-9)
    pub level: u8,

    /// Position of the heading paragraph in the body paragraph sequence
    pub sequence_index: usize,

    /// Formatting captured by the host, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<FormatSnapshot>,
}

impl HeadingRecord {
    /// Create a new heading record.
    pub fn new(text: impl Into<String>, level: u8, sequence_index: usize) -> Self {
        Self {
            text: text.into(),
            level,
            sequence_index,
            format: None,
        }
    }

    /// Attach a formatting snapshot.
    pub fn with_format(mut self, format: FormatSnapshot) -> Self {
        self.format = Some(format);
        self
    }

    /// Check that the level is within 1-9.
    pub fn validate(&self) -> Result<()> {
        validate_level(self.level).map_err(|_| {
            Error::Validation(format!(
                "heading {:?} at paragraph {} has level {} (expected {}-{})",
                self.text, self.sequence_index, self.level, MIN_HEADING_LEVEL, MAX_HEADING_LEVEL
            ))
        })
    }
}

/// Check that a heading level is within 1-9.
pub fn validate_level(level: u8) -> Result<()> {
    if (MIN_HEADING_LEVEL..=MAX_HEADING_LEVEL).contains(&level) {
        Ok(())
    } else {
        Err(Error::Validation(format!(
            "heading level {} is outside {}-{}",
            level, MIN_HEADING_LEVEL, MAX_HEADING_LEVEL
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_validate() {
        assert!(HeadingRecord::new("Intro", 1, 0).validate().is_ok());
        assert!(HeadingRecord::new("Deep", 9, 4).validate().is_ok());

        let err = HeadingRecord::new("Broken", 0, 2).validate().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Broken"));

        assert!(HeadingRecord::new("Too deep", 10, 3).validate().is_err());
    }

    #[test]
    fn test_heading_serde_skips_missing_format() {
        let json = serde_json::to_string(&HeadingRecord::new("Intro", 1, 0)).unwrap();
        assert!(!json.contains("format"));

        let parsed: HeadingRecord =
            serde_json::from_str(r#"{"text":"Intro","level":2,"sequence_index":7}"#).unwrap();
        assert_eq!(parsed.level, 2);
        assert!(parsed.format.is_none());
    }
}
