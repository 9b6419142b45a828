//! Extraction result with metadata.

use crate::model::{ContentElement, LocatorKind, TableElement};
use serde::{Deserialize, Serialize};

/// Where the extracted range came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionScope {
    /// A resolved locator
    Locator(LocatorKind),
    /// A page range supplied by the caller
    Page {
        /// 1-indexed page number
        number: u32,
    },
    /// The visible viewport supplied by the caller
    Visible,
}

impl ExtractionScope {
    /// Name reported as `metadata.locator_type`.
    pub fn locator_type(&self) -> &'static str {
        match self {
            ExtractionScope::Locator(kind) => kind.as_str(),
            ExtractionScope::Page { .. } => "page",
            ExtractionScope::Visible => "visible",
        }
    }
}

impl From<LocatorKind> for ExtractionScope {
    fn from(kind: LocatorKind) -> Self {
        ExtractionScope::Locator(kind)
    }
}

/// Result of extracting a range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Paragraph text of the range, joined by newlines (never truncated)
    pub text: String,

    /// Emitted elements: paragraphs with their images, then tables, then
    /// content controls
    pub elements: Vec<ContentElement>,

    /// Counts over the emitted elements
    pub metadata: ExtractionMetadata,
}

impl ExtractionResult {
    /// Iterate over emitted tables.
    pub fn tables(&self) -> impl Iterator<Item = &TableElement> {
        self.elements.iter().filter_map(|e| match e {
            ContentElement::Table(t) => Some(t),
            _ => None,
        })
    }

    /// Find an element by id.
    pub fn element(&self, id: &str) -> Option<&ContentElement> {
        self.elements.iter().find(|e| e.id() == id)
    }

    /// Check if nothing was emitted.
    pub fn is_empty(&self) -> bool {
        self.metadata.is_empty
    }
}

/// Aggregate statistics over emitted elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionMetadata {
    /// Locator kind or caller-supplied scope ("page", "visible")
    pub locator_type: String,

    /// Characters in the aggregate text
    pub character_count: usize,

    /// Number of paragraph elements
    pub paragraph_count: usize,

    /// Number of table elements
    pub table_count: usize,

    /// Number of image and inline picture elements
    pub image_count: usize,

    /// Number of content control elements
    pub content_control_count: usize,

    /// Whether no element was emitted
    pub is_empty: bool,
}

impl ExtractionMetadata {
    /// Create metadata for a scope with zero counts.
    pub fn new(scope: ExtractionScope) -> Self {
        Self {
            locator_type: scope.locator_type().to_string(),
            is_empty: true,
            ..Default::default()
        }
    }

    /// Total number of emitted elements.
    pub fn element_count(&self) -> usize {
        self.paragraph_count + self.table_count + self.image_count + self.content_control_count
    }
}
