//! # docscope
//!
//! Structural queries over word-processing documents.
//!
//! This library builds heading outlines, resolves named locators (bookmarks,
//! headings, paragraph ranges, sections, content controls) to document
//! ranges, extracts typed content from those ranges, and groups comments
//! that are anchored to identical text.
//!
//! The document itself is reached through the [`DocumentHost`] trait, so the
//! same queries run against a live editor binding or against the in-memory
//! [`MemoryDocument`](host::MemoryDocument) snapshot shipped with the crate.
//!
//! ## Quick Start
//!
//! ```
//! use docscope::host::MemoryDocument;
//! use docscope::{DocScope, RangeLocator};
//!
//! fn main() -> docscope::Result<()> {
//!     let mut doc = MemoryDocument::new();
//!     doc.add_heading("Introduction", 1);
//!     doc.add_paragraph("Scope of the study.");
//!     doc.add_heading("Method", 1);
//!
//!     let scope = DocScope::new(&doc);
//!
//!     let outline = scope.outline()?;
//!     assert_eq!(docscope::serialize_markdown(&outline), "# Introduction\n# Method");
//!
//!     let result = scope.extract(&RangeLocator::paragraph(1))?;
//!     assert_eq!(result.text, "Scope of the study.");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Outlines**: nested or flat, filtered by depth or explicit levels
//! - **Locators**: deterministic "N-th match" resolution in document order
//! - **Extraction**: paragraphs, images, tables and content controls with
//!   per-element truncation and optional formatting metadata
//! - **Comments**: anchor text hashing and duplicate-anchor grouping

pub mod annotate;
pub mod error;
pub mod extract;
pub mod host;
pub mod locate;
pub mod model;
pub mod outline;
pub mod render;

// Re-export commonly used types
pub use annotate::{
    anchor_text_hash, deduplicate_references, retrieve_comments, CommentOptions, CommentReport,
};
pub use error::{Error, Result};
pub use extract::{
    extract_range, list_text_boxes, resolve_and_extract, ExtractOptions, ExtractionMetadata,
    ExtractionResult, ExtractionScope, TextBoxInfo,
};
pub use host::DocumentHost;
pub use locate::resolve_locator;
pub use model::{
    AnnotationRecord, ContentElement, DocumentOutline, DuplicateGroup, HeadingRecord,
    LocatorKind, OutlineNode, RangeHandle, RangeLocator,
};
pub use outline::{build_flat_outline, build_outline, build_outline_from_host, OutlineOptions};
pub use render::JsonFormat;

/// Render an outline as Markdown headings.
///
/// # Example
///
/// ```
/// use docscope::{build_outline, serialize_markdown, HeadingRecord, OutlineOptions};
///
/// let headings = vec![HeadingRecord::new("Intro", 1, 0)];
/// let outline = build_outline(&headings, &OutlineOptions::default()).unwrap();
/// assert_eq!(serialize_markdown(&outline), "# Intro");
/// ```
pub fn serialize_markdown(outline: &DocumentOutline) -> String {
    render::outline_to_markdown(outline)
}

/// Dump an outline as pretty-printed JSON.
pub fn serialize_json(outline: &DocumentOutline) -> Result<String> {
    render::outline_to_json(outline)
}

/// Builder binding a host document to query options.
///
/// # Example
///
/// ```
/// use docscope::host::MemoryDocument;
/// use docscope::DocScope;
///
/// let mut doc = MemoryDocument::new();
/// doc.add_heading("Overview", 1);
/// doc.add_heading("Details", 2);
///
/// let outline = DocScope::new(&doc).with_max_depth(1).outline()?;
/// assert_eq!(outline.total_headings, 1);
/// # Ok::<(), docscope::Error>(())
/// ```
pub struct DocScope<'h, H: ?Sized> {
    host: &'h H,
    outline_options: OutlineOptions,
    extract_options: ExtractOptions,
    comment_options: CommentOptions,
}

impl<'h, H: DocumentHost + ?Sized> DocScope<'h, H> {
    /// Create a builder with default options.
    pub fn new(host: &'h H) -> Self {
        Self {
            host,
            outline_options: OutlineOptions::default(),
            extract_options: ExtractOptions::default(),
            comment_options: CommentOptions::default(),
        }
    }

    /// Limit outlines to levels `1..=depth`.
    pub fn with_max_depth(mut self, depth: u8) -> Self {
        self.outline_options = self.outline_options.with_max_depth(depth);
        self
    }

    /// Limit outlines to the given heading levels.
    pub fn with_levels(mut self, levels: impl IntoIterator<Item = u8>) -> Self {
        self.outline_options = self.outline_options.with_levels(levels);
        self
    }

    /// Copy heading formatting into outline nodes.
    pub fn with_heading_format(mut self) -> Self {
        self.outline_options = self.outline_options.with_format(true);
        self
    }

    /// Enable or disable image extraction.
    pub fn with_images(mut self, include: bool) -> Self {
        self.extract_options = self.extract_options.with_images(include);
        self
    }

    /// Enable or disable table extraction.
    pub fn with_tables(mut self, include: bool) -> Self {
        self.extract_options = self.extract_options.with_tables(include);
        self
    }

    /// Enable or disable content control extraction.
    pub fn with_content_controls(mut self, include: bool) -> Self {
        self.extract_options = self.extract_options.with_content_controls(include);
        self
    }

    /// Extract paragraph text only.
    pub fn text_only(mut self) -> Self {
        self.extract_options = self.extract_options.text_only();
        self
    }

    /// Look up style, alignment and list metadata during extraction.
    pub fn with_detailed_metadata(mut self) -> Self {
        self.extract_options = self.extract_options.with_detailed_metadata(true);
        self
    }

    /// Truncate extracted text and comment text to `max` characters.
    pub fn with_max_text_length(mut self, max: usize) -> Self {
        self.extract_options = self.extract_options.with_max_text_length(max);
        self.comment_options = self.comment_options.with_max_text_length(max);
        self
    }

    /// Skip resolved comment threads.
    pub fn without_resolved_comments(mut self) -> Self {
        self.comment_options = self.comment_options.with_resolved(false);
        self
    }

    /// Build the nested outline.
    pub fn outline(&self) -> Result<DocumentOutline> {
        build_outline_from_host(self.host, &self.outline_options)
    }

    /// Build the flat outline.
    pub fn flat_outline(&self) -> Result<Vec<OutlineNode>> {
        let headings = self.host.list_headings()?;
        build_flat_outline(&headings, &self.outline_options)
    }

    /// Resolve a locator to a range.
    pub fn resolve(&self, locator: &RangeLocator) -> Result<RangeHandle> {
        resolve_locator(self.host, locator)
    }

    /// Resolve a locator and extract its content.
    pub fn extract(&self, locator: &RangeLocator) -> Result<ExtractionResult> {
        resolve_and_extract(self.host, locator, &self.extract_options)
    }

    /// Extract a caller-supplied range.
    pub fn extract_range(
        &self,
        range: &RangeHandle,
        scope: ExtractionScope,
    ) -> Result<ExtractionResult> {
        extract_range(self.host, range, scope, &self.extract_options)
    }

    /// Retrieve comments across the whole document.
    pub fn comments(&self) -> Result<CommentReport> {
        retrieve_comments(self.host, None, &self.comment_options)
    }

    /// Retrieve comments anchored inside the range a locator resolves to.
    pub fn comments_in(&self, locator: &RangeLocator) -> Result<CommentReport> {
        let range = self.resolve(locator)?;
        retrieve_comments(self.host, Some(&range), &self.comment_options)
    }

    /// List the document's text boxes.
    pub fn text_boxes(&self) -> Result<Vec<TextBoxInfo>> {
        list_text_boxes(self.host, self.extract_options.max_text_length)
    }
}
