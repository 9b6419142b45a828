//! In-memory document host.
//!
//! A [`MemoryDocument`] is a flat list of body blocks (paragraphs and
//! tables) plus side tables for bookmarks, content controls, section
//! breaks, comments and text boxes. Block `i` occupies position `i`, so a
//! block's range is `i..i+1` and spans refer to blocks by index.

use super::{
    CommentHandle, CommentReply, ContentControlHandle, DocumentHost, ImageAnchor, ImageHandle,
    ParagraphHandle, SectionHandle, TableHandle, TextBoxHandle,
};
use crate::error::{Error, Result};
use crate::model::{
    Alignment, ControlType, FormatSnapshot, HeadingRecord, ParagraphFormat, RangeHandle,
    TableFormat,
};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

static HEADING_STYLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?i:heading)\s?([1-9])$").expect("valid heading style pattern"));

/// Detect a heading level from a paragraph style name ("Heading 2" → 2).
fn heading_level_from_style(style: &str) -> Option<u8> {
    HEADING_STYLE
        .captures(style.trim())
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// A document snapshot held entirely in memory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryDocument {
    /// Body blocks in document order
    #[serde(default)]
    pub blocks: Vec<MemoryBlock>,

    /// Named bookmarks
    #[serde(default)]
    pub bookmarks: Vec<MemoryBookmark>,

    /// Content controls
    #[serde(default)]
    pub content_controls: Vec<MemoryContentControl>,

    /// Block indices at which a new section starts (section 0 starts at 0)
    #[serde(default)]
    pub section_breaks: Vec<usize>,

    /// Comment threads
    #[serde(default)]
    pub comments: Vec<MemoryComment>,

    /// Text box shapes
    #[serde(default)]
    pub text_boxes: Vec<MemoryTextBox>,
}

impl MemoryDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a snapshot from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: MemoryDocument = serde_json::from_str(json)
            .map_err(|e| Error::InvalidDocument(format!("JSON parse error: {}", e)))?;
        doc.validate()?;
        Ok(doc)
    }

    /// Load a snapshot from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize the snapshot to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
    }

    /// Append a plain paragraph; returns its block index.
    pub fn add_paragraph(&mut self, text: impl Into<String>) -> usize {
        self.add_paragraph_with(MemoryParagraph::new(text))
    }

    /// Append a heading paragraph styled "Heading <level>".
    pub fn add_heading(&mut self, text: impl Into<String>, level: u8) -> usize {
        self.add_paragraph_with(MemoryParagraph::new(text).with_style(format!("Heading {}", level)))
    }

    /// Append a paragraph; returns its block index.
    pub fn add_paragraph_with(&mut self, paragraph: MemoryParagraph) -> usize {
        self.blocks.push(MemoryBlock::Paragraph(paragraph));
        self.blocks.len() - 1
    }

    /// Append a table built from rows of cell text; returns its block index.
    pub fn add_table<R, S>(&mut self, rows: impl IntoIterator<Item = R>) -> usize
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_table_with(MemoryTable::from_rows(rows))
    }

    /// Append a table; returns its block index.
    pub fn add_table_with(&mut self, table: MemoryTable) -> usize {
        self.blocks.push(MemoryBlock::Table(table));
        self.blocks.len() - 1
    }

    /// Add a bookmark spanning blocks `start_block..=end_block`.
    pub fn add_bookmark(&mut self, name: impl Into<String>, start_block: usize, end_block: usize) {
        self.bookmarks.push(MemoryBookmark {
            name: name.into(),
            start_block,
            end_block,
        });
    }

    /// Add a content control.
    pub fn add_content_control(&mut self, control: MemoryContentControl) {
        self.content_controls.push(control);
    }

    /// Start a new section at the next block appended.
    pub fn add_section_break(&mut self) {
        self.section_breaks.push(self.blocks.len());
    }

    /// Add a comment thread.
    pub fn add_comment(&mut self, comment: MemoryComment) {
        self.comments.push(comment);
    }

    /// Add a text box shape.
    pub fn add_text_box(&mut self, text_box: MemoryTextBox) {
        self.text_boxes.push(text_box);
    }

    /// Number of body paragraphs (tables excluded).
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs().count()
    }

    /// Check that every span refers to existing blocks.
    pub fn validate(&self) -> Result<()> {
        let len = self.blocks.len();
        let check_span = |what: &str, start: usize, end: usize| -> Result<()> {
            if start > end || end >= len {
                return Err(Error::InvalidDocument(format!(
                    "{} spans blocks {}..={} but the document has {} blocks",
                    what, start, end, len
                )));
            }
            Ok(())
        };

        for bookmark in &self.bookmarks {
            if bookmark.name.is_empty() {
                return Err(Error::InvalidDocument("bookmark with empty name".into()));
            }
            check_span(
                &format!("bookmark {:?}", bookmark.name),
                bookmark.start_block,
                bookmark.end_block,
            )?;
        }
        for (i, control) in self.content_controls.iter().enumerate() {
            check_span(
                &format!("content control {}", i),
                control.start_block,
                control.end_block,
            )?;
        }
        for (i, comment) in self.comments.iter().enumerate() {
            check_span(
                &format!("comment {}", i),
                comment.start_block,
                comment.end_block,
            )?;
        }

        let mut previous = 0;
        for &start in &self.section_breaks {
            if start == 0 || start <= previous || start >= len {
                return Err(Error::InvalidDocument(format!(
                    "section break at block {} is out of order or past the end",
                    start
                )));
            }
            previous = start;
        }

        Ok(())
    }

    /// Iterate over `(block index, paragraph index, paragraph)`.
    fn paragraphs(&self) -> impl Iterator<Item = (usize, usize, &MemoryParagraph)> {
        self.blocks
            .iter()
            .enumerate()
            .filter_map(|(block, b)| match b {
                MemoryBlock::Paragraph(p) => Some((block, p)),
                MemoryBlock::Table(_) => None,
            })
            .enumerate()
            .map(|(index, (block, p))| (block, index, p))
    }

    /// Iterate over `(block index, table index, table)`.
    fn tables(&self) -> impl Iterator<Item = (usize, usize, &MemoryTable)> {
        self.blocks
            .iter()
            .enumerate()
            .filter_map(|(block, b)| match b {
                MemoryBlock::Table(t) => Some((block, t)),
                MemoryBlock::Paragraph(_) => None,
            })
            .enumerate()
            .map(|(index, (block, t))| (block, index, t))
    }

    /// Paragraph text of blocks `start..=end`, joined by newlines.
    fn span_text(&self, start: usize, end: usize) -> String {
        self.blocks
            .iter()
            .take(end + 1)
            .skip(start)
            .filter_map(|b| match b {
                MemoryBlock::Paragraph(p) => Some(p.text.as_str()),
                MemoryBlock::Table(_) => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn paragraph_at(&self, index: usize) -> Result<&MemoryParagraph> {
        self.paragraphs()
            .find(|(_, i, _)| *i == index)
            .map(|(_, _, p)| p)
            .ok_or_else(|| Error::Host(format!("no paragraph with index {}", index)))
    }

    fn section_ranges(&self) -> Vec<RangeHandle> {
        let mut starts = vec![0];
        starts.extend(self.section_breaks.iter().copied());
        starts
            .iter()
            .enumerate()
            .map(|(i, &start)| {
                let end = starts.get(i + 1).copied().unwrap_or(self.blocks.len());
                RangeHandle::new(start, end)
            })
            .collect()
    }
}

fn span_range(start_block: usize, end_block: usize) -> RangeHandle {
    RangeHandle::new(start_block, end_block + 1)
}

fn in_scope(scope: Option<&RangeHandle>, range: &RangeHandle) -> bool {
    scope.map_or(true, |s| s.contains(range))
}

impl DocumentHost for MemoryDocument {
    fn list_headings(&self) -> Result<Vec<HeadingRecord>> {
        Ok(self
            .paragraphs()
            .filter_map(|(_, index, p)| {
                let level = p.style.as_deref().and_then(heading_level_from_style)?;
                let mut heading = HeadingRecord::new(p.text.clone(), level, index);
                heading.format = p.format.clone();
                Some(heading)
            })
            .collect())
    }

    fn find_bookmark(&self, name: &str) -> Result<Option<RangeHandle>> {
        Ok(self
            .bookmarks
            .iter()
            .find(|b| b.name == name)
            .map(|b| span_range(b.start_block, b.end_block)))
    }

    fn list_paragraphs(&self, scope: Option<&RangeHandle>) -> Result<Vec<ParagraphHandle>> {
        Ok(self
            .paragraphs()
            .map(|(block, index, p)| ParagraphHandle {
                index,
                range: RangeHandle::single(block),
                text: p.text.clone(),
                images: p.images.iter().map(MemoryImage::to_handle).collect(),
            })
            .filter(|p| in_scope(scope, &p.range))
            .collect())
    }

    fn list_tables(&self, scope: Option<&RangeHandle>) -> Result<Vec<TableHandle>> {
        Ok(self
            .tables()
            .map(|(block, index, t)| TableHandle {
                index,
                range: RangeHandle::single(block),
                rows: t.rows.clone(),
            })
            .filter(|t| in_scope(scope, &t.range))
            .collect())
    }

    fn list_content_controls(
        &self,
        scope: Option<&RangeHandle>,
    ) -> Result<Vec<ContentControlHandle>> {
        let mut controls: Vec<_> = self
            .content_controls
            .iter()
            .enumerate()
            .map(|(index, c)| ContentControlHandle {
                index,
                range: span_range(c.start_block, c.end_block),
                title: c.title.clone(),
                tag: c.tag.clone(),
                control_type: c.control_type,
                text: self.span_text(c.start_block, c.end_block),
                placeholder: c.placeholder.clone(),
                cannot_edit: c.cannot_edit,
                cannot_delete: c.cannot_delete,
            })
            .filter(|c| in_scope(scope, &c.range))
            .collect();
        // document order, not insertion order
        controls.sort_by_key(|c| (c.range.start, c.index));
        Ok(controls)
    }

    fn section_count(&self) -> Result<usize> {
        Ok(self.section_breaks.len() + 1)
    }

    fn get_section(&self, index: usize) -> Result<Option<SectionHandle>> {
        Ok(self
            .section_ranges()
            .get(index)
            .map(|&range| SectionHandle { index, range }))
    }

    fn paragraph_format(&self, paragraph: &ParagraphHandle) -> Result<ParagraphFormat> {
        let p = self.paragraph_at(paragraph.index)?;
        Ok(ParagraphFormat {
            style: p.style.clone(),
            alignment: p.alignment,
            list_level: p.list_level,
        })
    }

    fn table_format(&self, table: &TableHandle) -> Result<TableFormat> {
        let (_, _, t) = self
            .tables()
            .find(|(_, i, _)| *i == table.index)
            .ok_or_else(|| Error::Host(format!("no table with index {}", table.index)))?;
        Ok(TableFormat {
            style: t.style.clone(),
            header_row_count: t.header_rows,
        })
    }

    fn list_comments(&self, scope: Option<&RangeHandle>) -> Result<Vec<CommentHandle>> {
        let mut comments: Vec<_> = self
            .comments
            .iter()
            .map(|c| CommentHandle {
                range: span_range(c.start_block, c.end_block),
                author: c.author.clone(),
                content: c.content.clone(),
                created: c.created,
                resolved: c.resolved,
                anchor_text: c
                    .anchor_text
                    .clone()
                    .unwrap_or_else(|| self.span_text(c.start_block, c.end_block)),
                replies: c
                    .replies
                    .iter()
                    .map(|r| CommentReply {
                        author: r.author.clone(),
                        content: r.content.clone(),
                        created: r.created,
                    })
                    .collect(),
            })
            .filter(|c| in_scope(scope, &c.range))
            .collect();
        comments.sort_by_key(|c| c.range.start);
        Ok(comments)
    }

    fn list_text_boxes(&self) -> Result<Vec<TextBoxHandle>> {
        Ok(self
            .text_boxes
            .iter()
            .map(|t| TextBoxHandle {
                name: t.name.clone(),
                paragraphs: t.paragraphs.clone(),
                width: t.width,
                height: t.height,
            })
            .collect())
    }
}

/// A body block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MemoryBlock {
    /// A paragraph
    Paragraph(MemoryParagraph),
    /// A table
    Table(MemoryTable),
}

/// A paragraph in a [`MemoryDocument`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryParagraph {
    /// Paragraph text
    pub text: String,

    /// Style name; "Heading N" marks a heading
    #[serde(default)]
    pub style: Option<String>,

    /// Alignment
    #[serde(default)]
    pub alignment: Alignment,

    /// List nesting level if part of a list
    #[serde(default)]
    pub list_level: Option<u8>,

    /// Embedded images
    #[serde(default)]
    pub images: Vec<MemoryImage>,

    /// Character formatting reported with headings
    #[serde(default)]
    pub format: Option<FormatSnapshot>,
}

impl MemoryParagraph {
    /// Create a paragraph with plain text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Set the style name.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Set the alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Mark as a list item at the given level.
    pub fn with_list_level(mut self, level: u8) -> Self {
        self.list_level = Some(level);
        self
    }

    /// Embed an image.
    pub fn with_image(mut self, image: MemoryImage) -> Self {
        self.images.push(image);
        self
    }

    /// Attach a formatting snapshot.
    pub fn with_format(mut self, format: FormatSnapshot) -> Self {
        self.format = Some(format);
        self
    }
}

/// An image in a [`MemoryParagraph`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryImage {
    /// Inline or floating
    #[serde(default)]
    pub anchor: ImageAnchor,
    /// Width in points
    pub width: f32,
    /// Height in points
    pub height: f32,
    /// Alternative text
    #[serde(default)]
    pub alt_text: Option<String>,
    /// Alternative text title
    #[serde(default)]
    pub alt_title: Option<String>,
    /// Hyperlink target
    #[serde(default)]
    pub hyperlink: Option<String>,
}

impl MemoryImage {
    /// Create an inline picture.
    pub fn inline(width: f32, height: f32) -> Self {
        Self {
            anchor: ImageAnchor::Inline,
            width,
            height,
            ..Default::default()
        }
    }

    /// Create a floating image.
    pub fn floating(width: f32, height: f32) -> Self {
        Self {
            anchor: ImageAnchor::Floating,
            width,
            height,
            ..Default::default()
        }
    }

    /// Set alternative text.
    pub fn with_alt_text(mut self, alt: impl Into<String>) -> Self {
        self.alt_text = Some(alt.into());
        self
    }

    fn to_handle(&self) -> ImageHandle {
        ImageHandle {
            anchor: self.anchor,
            width: self.width,
            height: self.height,
            alt_text: self.alt_text.clone(),
            alt_title: self.alt_title.clone(),
            hyperlink: self.hyperlink.clone(),
        }
    }
}

/// A table in a [`MemoryDocument`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryTable {
    /// Cell text, row by row
    pub rows: Vec<Vec<String>>,

    /// Table style
    #[serde(default)]
    pub style: Option<String>,

    /// Number of header rows
    #[serde(default)]
    pub header_rows: usize,
}

impl MemoryTable {
    /// Create a table from rows of cell text.
    pub fn from_rows<R, S>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
            ..Default::default()
        }
    }

    /// Set the number of header rows.
    pub fn with_header_rows(mut self, count: usize) -> Self {
        self.header_rows = count;
        self
    }

    /// Set the table style.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }
}

/// A bookmark spanning blocks `start_block..=end_block`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryBookmark {
    /// Bookmark name
    pub name: String,
    /// First block
    pub start_block: usize,
    /// Last block, inclusive
    pub end_block: usize,
}

/// A content control spanning blocks `start_block..=end_block`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryContentControl {
    /// First block
    pub start_block: usize,
    /// Last block, inclusive
    pub end_block: usize,
    /// Control title
    #[serde(default)]
    pub title: Option<String>,
    /// Control tag
    #[serde(default)]
    pub tag: Option<String>,
    /// Kind of control
    #[serde(default)]
    pub control_type: ControlType,
    /// Placeholder text
    #[serde(default)]
    pub placeholder: Option<String>,
    /// Edit lock
    #[serde(default)]
    pub cannot_edit: bool,
    /// Delete lock
    #[serde(default)]
    pub cannot_delete: bool,
}

impl MemoryContentControl {
    /// Create a rich-text control over blocks `start_block..=end_block`.
    pub fn new(start_block: usize, end_block: usize) -> Self {
        Self {
            start_block,
            end_block,
            ..Default::default()
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Set the control type.
    pub fn with_type(mut self, control_type: ControlType) -> Self {
        self.control_type = control_type;
        self
    }

    /// Set the placeholder text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}

/// A comment thread anchored to blocks `start_block..=end_block`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryComment {
    /// First anchored block
    pub start_block: usize,
    /// Last anchored block, inclusive
    pub end_block: usize,
    /// Comment body
    pub content: String,
    /// Comment author
    #[serde(default)]
    pub author: Option<String>,
    /// Creation time
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    /// Whether the thread is resolved
    #[serde(default)]
    pub resolved: bool,
    /// Explicit anchor text; defaults to the text of the anchored blocks
    #[serde(default)]
    pub anchor_text: Option<String>,
    /// Replies in thread order
    #[serde(default)]
    pub replies: Vec<MemoryReply>,
}

impl MemoryComment {
    /// Create a comment anchored to blocks `start_block..=end_block`.
    pub fn new(start_block: usize, end_block: usize, content: impl Into<String>) -> Self {
        Self {
            start_block,
            end_block,
            content: content.into(),
            ..Default::default()
        }
    }

    /// Anchor to a sub-span of text rather than whole blocks.
    pub fn with_anchor_text(mut self, text: impl Into<String>) -> Self {
        self.anchor_text = Some(text.into());
        self
    }

    /// Set the author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Mark the thread resolved.
    pub fn resolved(mut self) -> Self {
        self.resolved = true;
        self
    }

    /// Append a reply.
    pub fn with_reply(mut self, content: impl Into<String>) -> Self {
        self.replies.push(MemoryReply {
            content: content.into(),
            ..Default::default()
        });
        self
    }
}

/// A reply in a [`MemoryComment`] thread.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryReply {
    /// Reply body
    pub content: String,
    /// Reply author
    #[serde(default)]
    pub author: Option<String>,
    /// Creation time
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

/// A text box shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryTextBox {
    /// Shape name
    #[serde(default)]
    pub name: Option<String>,
    /// Paragraph texts
    #[serde(default)]
    pub paragraphs: Vec<String>,
    /// Width in points
    pub width: f32,
    /// Height in points
    pub height: f32,
}

impl MemoryTextBox {
    /// Create a text box with the given paragraphs.
    pub fn new<S: Into<String>>(
        width: f32,
        height: f32,
        paragraphs: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            name: None,
            paragraphs: paragraphs.into_iter().map(Into::into).collect(),
            width,
            height,
        }
    }

    /// Set the shape name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MemoryDocument {
        let mut doc = MemoryDocument::new();
        doc.add_heading("Intro", 1); // block 0, paragraph 0
        doc.add_paragraph("Welcome."); // block 1, paragraph 1
        doc.add_table([["a", "b"], ["c", "d"]]); // block 2, table 0
        doc.add_section_break();
        doc.add_heading("Details", 2); // block 3, paragraph 2
        doc.add_paragraph("More."); // block 4, paragraph 3
        doc
    }

    #[test]
    fn test_heading_level_from_style() {
        assert_eq!(heading_level_from_style("Heading 1"), Some(1));
        assert_eq!(heading_level_from_style("heading9"), Some(9));
        assert_eq!(heading_level_from_style("Heading 10"), None);
        assert_eq!(heading_level_from_style("Normal"), None);
    }

    #[test]
    fn test_list_headings_uses_paragraph_indices() {
        let doc = sample();
        let headings = doc.list_headings().unwrap();
        assert_eq!(headings.len(), 2);
        assert_eq!(headings[1].text, "Details");
        assert_eq!(headings[1].level, 2);
        assert_eq!(headings[1].sequence_index, 2);
    }

    #[test]
    fn test_scoped_enumeration() {
        let doc = sample();
        let section = doc.get_section(0).unwrap().unwrap();
        assert_eq!(section.range, RangeHandle::new(0, 3));

        let paragraphs = doc.list_paragraphs(Some(&section.range)).unwrap();
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(doc.list_tables(Some(&section.range)).unwrap().len(), 1);

        let second = doc.get_section(1).unwrap().unwrap();
        assert!(doc.list_tables(Some(&second.range)).unwrap().is_empty());
        assert!(doc.get_section(2).unwrap().is_none());
        assert_eq!(doc.section_count().unwrap(), 2);
    }

    #[test]
    fn test_content_controls_in_document_order() {
        let mut doc = sample();
        doc.add_content_control(MemoryContentControl::new(3, 4).with_tag("late"));
        doc.add_content_control(MemoryContentControl::new(0, 1).with_tag("early"));

        let controls = doc.list_content_controls(None).unwrap();
        assert_eq!(controls[0].tag.as_deref(), Some("early"));
        assert_eq!(controls[0].text, "Intro\nWelcome.");
        assert_eq!(controls[1].tag.as_deref(), Some("late"));
    }

    #[test]
    fn test_validate_rejects_bad_spans() {
        let mut doc = sample();
        doc.add_bookmark("tail", 4, 9);
        assert!(matches!(doc.validate(), Err(Error::InvalidDocument(_))));

        let mut doc = sample();
        doc.section_breaks.push(1);
        assert!(doc.validate().is_err());
    }

    #[test]
    fn test_json_roundtrip_preserves_structure() {
        let mut doc = sample();
        doc.add_bookmark("intro", 0, 1);
        let json = doc.to_json().unwrap();
        let loaded = MemoryDocument::from_json(&json).unwrap();
        assert_eq!(loaded.blocks.len(), 5);
        assert_eq!(
            loaded.find_bookmark("intro").unwrap(),
            Some(RangeHandle::new(0, 2))
        );
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let err = MemoryDocument::from_json("{\"blocks\": 3}").unwrap_err();
        assert!(matches!(err, Error::InvalidDocument(_)));
    }
}
