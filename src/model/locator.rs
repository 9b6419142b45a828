//! Locator descriptions: "where in the document" a query operates.

use super::heading::validate_level;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A description of a document range, resolved by [`crate::locate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RangeLocator {
    /// A bookmark by exact name.
    Bookmark {
        /// Bookmark name
        name: String,
    },

    /// The N-th heading matching optional text and level filters.
    Heading {
        /// Substring the heading text must contain
        #[serde(default)]
        text: Option<String>,
        /// Exact heading level
        #[serde(default)]
        level: Option<u8>,
        /// Which match to select (default 0)
        #[serde(default)]
        index: Option<usize>,
    },

    /// Paragraphs `start_index..=end_index` of the body.
    ParagraphRange {
        /// First paragraph (0-based)
        start_index: usize,
        /// Last paragraph, inclusive (defaults to `start_index`)
        #[serde(default)]
        end_index: Option<usize>,
    },

    /// A whole section body.
    Section {
        /// Section index (0-based)
        index: usize,
    },

    /// The N-th content control matching optional title and tag filters.
    ContentControl {
        /// Substring the control title must contain
        #[serde(default)]
        title: Option<String>,
        /// Exact control tag
        #[serde(default)]
        tag: Option<String>,
        /// Which match to select (default 0)
        #[serde(default)]
        index: Option<usize>,
    },
}

impl RangeLocator {
    /// Locate a bookmark by name.
    pub fn bookmark(name: impl Into<String>) -> Self {
        RangeLocator::Bookmark { name: name.into() }
    }

    /// Locate the first heading containing `text`.
    pub fn heading(text: impl Into<String>) -> Self {
        RangeLocator::Heading {
            text: Some(text.into()),
            level: None,
            index: None,
        }
    }

    /// Locate a single paragraph.
    pub fn paragraph(index: usize) -> Self {
        RangeLocator::ParagraphRange {
            start_index: index,
            end_index: None,
        }
    }

    /// Locate paragraphs `start..=end`.
    pub fn paragraphs(start: usize, end: usize) -> Self {
        RangeLocator::ParagraphRange {
            start_index: start,
            end_index: Some(end),
        }
    }

    /// Locate a section.
    pub fn section(index: usize) -> Self {
        RangeLocator::Section { index }
    }

    /// Locate the first content control with the given tag.
    pub fn content_control_tag(tag: impl Into<String>) -> Self {
        RangeLocator::ContentControl {
            title: None,
            tag: Some(tag.into()),
            index: None,
        }
    }

    /// Get the locator kind.
    pub fn kind(&self) -> LocatorKind {
        match self {
            RangeLocator::Bookmark { .. } => LocatorKind::Bookmark,
            RangeLocator::Heading { .. } => LocatorKind::Heading,
            RangeLocator::ParagraphRange { .. } => LocatorKind::ParagraphRange,
            RangeLocator::Section { .. } => LocatorKind::Section,
            RangeLocator::ContentControl { .. } => LocatorKind::ContentControl,
        }
    }

    /// Reject locators that are malformed independent of any document.
    pub fn validate(&self) -> Result<()> {
        match self {
            RangeLocator::Bookmark { name } => {
                if name.trim().is_empty() {
                    return Err(Error::validation("bookmark name must not be empty"));
                }
            }
            RangeLocator::Heading { level, .. } => {
                if let Some(level) = level {
                    validate_level(*level)?;
                }
            }
            RangeLocator::ParagraphRange {
                start_index,
                end_index: Some(end),
            } if end < start_index => {
                return Err(Error::Validation(format!(
                    "paragraph range end {} precedes start {}",
                    end, start_index
                )));
            }
            RangeLocator::ParagraphRange { .. }
            | RangeLocator::Section { .. }
            | RangeLocator::ContentControl { .. } => {}
        }
        Ok(())
    }

    /// Human-readable search criteria, used in error messages.
    pub fn criteria(&self) -> String {
        match self {
            RangeLocator::Bookmark { name } => format!("name={:?}", name),
            RangeLocator::Heading { text, level, index } => {
                let mut parts = Vec::new();
                if let Some(text) = text {
                    parts.push(format!("text={:?}", text));
                }
                if let Some(level) = level {
                    parts.push(format!("level={}", level));
                }
                parts.push(format!("index={}", index.unwrap_or(0)));
                parts.join(", ")
            }
            RangeLocator::ParagraphRange {
                start_index,
                end_index,
            } => format!(
                "paragraphs {}..={}",
                start_index,
                end_index.unwrap_or(*start_index)
            ),
            RangeLocator::Section { index } => format!("section {}", index),
            RangeLocator::ContentControl { title, tag, index } => {
                let mut parts = Vec::new();
                if let Some(title) = title {
                    parts.push(format!("title={:?}", title));
                }
                if let Some(tag) = tag {
                    parts.push(format!("tag={:?}", tag));
                }
                parts.push(format!("index={}", index.unwrap_or(0)));
                parts.join(", ")
            }
        }
    }
}

/// Discriminant of a [`RangeLocator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocatorKind {
    /// Bookmark by name
    Bookmark,
    /// Heading search
    Heading,
    /// Paragraph index range
    ParagraphRange,
    /// Section by index
    Section,
    /// Content control search
    ContentControl,
}

impl LocatorKind {
    /// Name reported in extraction metadata.
    pub fn as_str(&self) -> &'static str {
        match self {
            LocatorKind::Bookmark => "bookmark",
            LocatorKind::Heading => "heading",
            LocatorKind::ParagraphRange => "paragraph_range",
            LocatorKind::Section => "section",
            LocatorKind::ContentControl => "content_control",
        }
    }
}

impl fmt::Display for LocatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
