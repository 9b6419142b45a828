//! Formatting snapshots attached to headings and paragraphs.

use serde::{Deserialize, Serialize};

/// Text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justify,
}

/// Character and paragraph formatting captured from a heading paragraph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormatSnapshot {
    /// Font name
    pub font_name: Option<String>,

    /// Font size in points
    pub font_size: Option<f32>,

    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,

    /// Text color (hex format, e.g., "#FF0000")
    pub color: Option<String>,

    /// Paragraph alignment
    pub alignment: Option<Alignment>,
}

impl FormatSnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font name and size.
    pub fn with_font(mut self, name: impl Into<String>, size: f32) -> Self {
        self.font_name = Some(name.into());
        self.font_size = Some(size);
        self
    }

    /// Mark the text bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Mark the text italic.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Set the text color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the paragraph alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }
}

/// Secondary paragraph metadata looked up on demand from the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParagraphFormat {
    /// Style name (e.g. "Normal", "Heading 2")
    pub style: Option<String>,

    /// Paragraph alignment
    pub alignment: Alignment,

    /// List nesting level if the paragraph belongs to a list
    pub list_level: Option<u8>,
}

impl ParagraphFormat {
    /// Check if the paragraph is a list item.
    pub fn is_list_item(&self) -> bool {
        self.list_level.is_some()
    }
}

/// Secondary table metadata looked up on demand from the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableFormat {
    /// Table style name
    pub style: Option<String>,

    /// Number of header rows (0 = no header)
    pub header_row_count: usize,
}
