//! Host document abstraction layer.
//!
//! Provides a trait-based interface to the document being queried,
//! isolating the host automation API from the outline, locator and
//! extraction logic. [`MemoryDocument`] is a concrete host backed by an
//! in-memory snapshot.

mod memory;

pub use memory::{
    MemoryBlock, MemoryBookmark, MemoryComment, MemoryContentControl, MemoryDocument,
    MemoryImage, MemoryParagraph, MemoryReply, MemoryTable, MemoryTextBox,
};

use crate::error::Result;
use crate::model::{ControlType, HeadingRecord, ParagraphFormat, RangeHandle, TableFormat};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How an image is attached to its paragraph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageAnchor {
    /// Flows with the paragraph text
    #[default]
    Inline,
    /// Positioned independently, anchored to the paragraph
    Floating,
}

/// An image embedded in a paragraph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageHandle {
    /// Inline or floating
    pub anchor: ImageAnchor,
    /// Width in points
    pub width: f32,
    /// Height in points
    pub height: f32,
    /// Alternative text
    pub alt_text: Option<String>,
    /// Alternative text title
    pub alt_title: Option<String>,
    /// Hyperlink target
    pub hyperlink: Option<String>,
}

/// A body paragraph as seen by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphHandle {
    /// Position in the body paragraph sequence
    pub index: usize,
    /// Range covered by the paragraph
    pub range: RangeHandle,
    /// Paragraph text
    pub text: String,
    /// Images embedded in the paragraph
    pub images: Vec<ImageHandle>,
}

/// A table as seen by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct TableHandle {
    /// Position in the document's table sequence
    pub index: usize,
    /// Range covered by the table
    pub range: RangeHandle,
    /// Cell text, row by row
    pub rows: Vec<Vec<String>>,
}

impl TableHandle {
    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (widest row).
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|r| r.len()).max().unwrap_or(0)
    }
}

/// A content control as seen by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentControlHandle {
    /// Position in the document's content-control sequence
    pub index: usize,
    /// Range covered by the control
    pub range: RangeHandle,
    /// Control title
    pub title: Option<String>,
    /// Control tag
    pub tag: Option<String>,
    /// Kind of control
    pub control_type: ControlType,
    /// Control text
    pub text: String,
    /// Placeholder text
    pub placeholder: Option<String>,
    /// Edit lock
    pub cannot_edit: bool,
    /// Delete lock
    pub cannot_delete: bool,
}

/// A document section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionHandle {
    /// Section index
    pub index: usize,
    /// Range covered by the section body
    pub range: RangeHandle,
}

/// A comment reply.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentReply {
    /// Reply author
    pub author: Option<String>,
    /// Reply body
    pub content: String,
    /// Creation time
    pub created: Option<DateTime<Utc>>,
}

/// A comment thread as seen by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentHandle {
    /// Range the comment is anchored to
    pub range: RangeHandle,
    /// Comment author
    pub author: Option<String>,
    /// Comment body
    pub content: String,
    /// Creation time
    pub created: Option<DateTime<Utc>>,
    /// Whether the thread is resolved
    pub resolved: bool,
    /// Text of the anchored range
    pub anchor_text: String,
    /// Replies in thread order
    pub replies: Vec<CommentReply>,
}

/// A text box shape as seen by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBoxHandle {
    /// Shape name
    pub name: Option<String>,
    /// Paragraph texts inside the text box
    pub paragraphs: Vec<String>,
    /// Width in points
    pub width: f32,
    /// Height in points
    pub height: f32,
}

/// Borrowed reference to any handle that occupies a range.
#[derive(Debug, Clone, Copy)]
pub enum HandleRef<'a> {
    /// A paragraph
    Paragraph(&'a ParagraphHandle),
    /// A table
    Table(&'a TableHandle),
    /// A section
    Section(&'a SectionHandle),
    /// A content control
    ContentControl(&'a ContentControlHandle),
}

impl HandleRef<'_> {
    /// The range recorded on the handle itself.
    pub fn recorded_range(&self) -> RangeHandle {
        match self {
            HandleRef::Paragraph(p) => p.range,
            HandleRef::Table(t) => t.range,
            HandleRef::Section(s) => s.range,
            HandleRef::ContentControl(c) => c.range,
        }
    }
}

/// Abstract interface to a host document.
///
/// Implementations return snapshots in document order. A `scope` limits
/// enumeration to items lying entirely inside the given range.
pub trait DocumentHost {
    /// Return all heading paragraphs in document order.
    fn list_headings(&self) -> Result<Vec<HeadingRecord>>;

    /// Look up a bookmark by exact name.
    fn find_bookmark(&self, name: &str) -> Result<Option<RangeHandle>>;

    /// Return body paragraphs, optionally limited to a range.
    fn list_paragraphs(&self, scope: Option<&RangeHandle>) -> Result<Vec<ParagraphHandle>>;

    /// Return tables, optionally limited to a range.
    fn list_tables(&self, scope: Option<&RangeHandle>) -> Result<Vec<TableHandle>>;

    /// Return content controls, optionally limited to a range.
    fn list_content_controls(
        &self,
        scope: Option<&RangeHandle>,
    ) -> Result<Vec<ContentControlHandle>>;

    /// Number of sections in the document.
    fn section_count(&self) -> Result<usize>;

    /// Return a section by index, or `None` past the end.
    fn get_section(&self, index: usize) -> Result<Option<SectionHandle>>;

    /// Materialize the concrete range of a handle.
    fn range_of(&self, handle: HandleRef<'_>) -> Result<RangeHandle> {
        Ok(handle.recorded_range())
    }

    /// Look up secondary paragraph formatting.
    fn paragraph_format(&self, paragraph: &ParagraphHandle) -> Result<ParagraphFormat>;

    /// Look up secondary table formatting.
    fn table_format(&self, table: &TableHandle) -> Result<TableFormat>;

    /// Return comment threads, optionally limited to a range.
    fn list_comments(&self, scope: Option<&RangeHandle>) -> Result<Vec<CommentHandle>> {
        let _ = scope;
        Ok(Vec::new())
    }

    /// Return text box shapes in document order.
    fn list_text_boxes(&self) -> Result<Vec<TextBoxHandle>> {
        Ok(Vec::new())
    }
}

impl<H: DocumentHost + ?Sized> DocumentHost for &H {
    fn list_headings(&self) -> Result<Vec<HeadingRecord>> {
        (**self).list_headings()
    }

    fn find_bookmark(&self, name: &str) -> Result<Option<RangeHandle>> {
        (**self).find_bookmark(name)
    }

    fn list_paragraphs(&self, scope: Option<&RangeHandle>) -> Result<Vec<ParagraphHandle>> {
        (**self).list_paragraphs(scope)
    }

    fn list_tables(&self, scope: Option<&RangeHandle>) -> Result<Vec<TableHandle>> {
        (**self).list_tables(scope)
    }

    fn list_content_controls(
        &self,
        scope: Option<&RangeHandle>,
    ) -> Result<Vec<ContentControlHandle>> {
        (**self).list_content_controls(scope)
    }

    fn section_count(&self) -> Result<usize> {
        (**self).section_count()
    }

    fn get_section(&self, index: usize) -> Result<Option<SectionHandle>> {
        (**self).get_section(index)
    }

    fn range_of(&self, handle: HandleRef<'_>) -> Result<RangeHandle> {
        (**self).range_of(handle)
    }

    fn paragraph_format(&self, paragraph: &ParagraphHandle) -> Result<ParagraphFormat> {
        (**self).paragraph_format(paragraph)
    }

    fn table_format(&self, table: &TableHandle) -> Result<TableFormat> {
        (**self).table_format(table)
    }

    fn list_comments(&self, scope: Option<&RangeHandle>) -> Result<Vec<CommentHandle>> {
        (**self).list_comments(scope)
    }

    fn list_text_boxes(&self) -> Result<Vec<TextBoxHandle>> {
        (**self).list_text_boxes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_handle_dimensions() {
        let table = TableHandle {
            index: 0,
            range: RangeHandle::single(3),
            rows: vec![
                vec!["a".to_string(), "b".to_string()],
                vec!["c".to_string(), "d".to_string(), "e".to_string()],
            ],
        };
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 3);
    }

    #[test]
    fn test_handle_ref_range() {
        let section = SectionHandle {
            index: 1,
            range: RangeHandle::new(4, 9),
        };
        assert_eq!(
            HandleRef::Section(&section).recorded_range(),
            RangeHandle::new(4, 9)
        );
    }
}
