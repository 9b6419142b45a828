//! Typed content elements produced by extraction.

use super::Alignment;
use serde::{Deserialize, Serialize};

/// One typed unit of extracted content.
///
/// Element ids are synthesized from emission order within a single
/// extraction call. They are not host identities and must not be
/// compared across calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentElement {
    /// A body paragraph
    Paragraph(ParagraphElement),

    /// A table with its full cell grid
    Table(TableElement),

    /// A floating image anchored to a paragraph
    Image(ImageElement),

    /// An image inline with paragraph text
    InlinePicture(ImageElement),

    /// A content control
    ContentControl(ContentControlElement),
}

impl ContentElement {
    /// Get the element id.
    pub fn id(&self) -> &str {
        match self {
            ContentElement::Paragraph(p) => &p.id,
            ContentElement::Table(t) => &t.id,
            ContentElement::Image(i) | ContentElement::InlinePicture(i) => &i.id,
            ContentElement::ContentControl(c) => &c.id,
        }
    }

    /// Get the type tag used in serialized output.
    pub fn type_name(&self) -> &'static str {
        match self {
            ContentElement::Paragraph(_) => "paragraph",
            ContentElement::Table(_) => "table",
            ContentElement::Image(_) => "image",
            ContentElement::InlinePicture(_) => "inline_picture",
            ContentElement::ContentControl(_) => "content_control",
        }
    }

    /// Primary text of the element, if it carries any.
    pub fn text(&self) -> Option<&str> {
        match self {
            ContentElement::Paragraph(p) => p.text.as_deref(),
            ContentElement::ContentControl(c) => c.text.as_deref(),
            ContentElement::Image(i) | ContentElement::InlinePicture(i) => i.alt_text.as_deref(),
            ContentElement::Table(_) => None,
        }
    }

    /// Check if this element is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, ContentElement::Paragraph(_))
    }

    /// Check if this element is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, ContentElement::Table(_))
    }

    /// Check if this element is an image of either anchoring.
    pub fn is_image(&self) -> bool {
        matches!(
            self,
            ContentElement::Image(_) | ContentElement::InlinePicture(_)
        )
    }

    /// Check if this element is a content control.
    pub fn is_content_control(&self) -> bool {
        matches!(self, ContentElement::ContentControl(_))
    }
}

/// An extracted paragraph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParagraphElement {
    /// Synthesized id (`paragraph-<n>`)
    pub id: String,

    /// Paragraph text (absent when text is excluded)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Style name (detailed metadata only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,

    /// Alignment (detailed metadata only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,

    /// List membership (detailed metadata only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_list_item: Option<bool>,

    /// List nesting level (detailed metadata only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_level: Option<u8>,

    /// Whether `text` was cut to the length limit
    #[serde(default, skip_serializing_if = "is_false")]
    pub truncated: bool,
}

/// An extracted table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableElement {
    /// Synthesized id (`table-<n>`)
    pub id: String,

    /// Number of rows
    pub row_count: usize,

    /// Number of columns (widest row)
    pub column_count: usize,

    /// Cell text, row by row
    pub cells: Vec<Vec<String>>,

    /// Table style (detailed metadata only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,

    /// Header row count (detailed metadata only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_row_count: Option<usize>,
}

/// An extracted image or inline picture.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageElement {
    /// Synthesized id (`image-<n>`)
    pub id: String,

    /// Id of the paragraph the image belongs to
    pub paragraph_id: String,

    /// Width in points
    pub width: f32,

    /// Height in points
    pub height: f32,

    /// Alternative text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,

    /// Alternative text title (detailed metadata only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_title: Option<String>,

    /// Hyperlink target (detailed metadata only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hyperlink: Option<String>,
}

/// An extracted content control.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentControlElement {
    /// Synthesized id (`content-control-<n>`)
    pub id: String,

    /// Control title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Control tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Kind of control
    pub control_type: ControlType,

    /// Control text (absent when text is excluded)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Placeholder text (detailed metadata only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Edit lock (detailed metadata only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cannot_edit: Option<bool>,

    /// Delete lock (detailed metadata only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cannot_delete: Option<bool>,

    /// Whether `text` was cut to the length limit
    #[serde(default, skip_serializing_if = "is_false")]
    pub truncated: bool,
}

/// Kind of content control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlType {
    /// Rich text control (default)
    #[default]
    RichText,
    /// Plain text control
    PlainText,
    /// Check box
    CheckBox,
    /// Combo box
    ComboBox,
    /// Drop-down list
    DropDownList,
    /// Date picker
    DatePicker,
    /// Picture control
    Picture,
    /// Group control
    Group,
    /// Repeating section
    RepeatingSection,
}

fn is_false(value: &bool) -> bool {
    !*value
}
