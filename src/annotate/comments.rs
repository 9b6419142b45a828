//! Comment retrieval.

use super::{anchor_text_hash, deduplicate_references};
use crate::error::Result;
use crate::extract::truncate_text;
use crate::host::DocumentHost;
use crate::model::{AnnotationRecord, DuplicateGroup, RangeHandle};
use serde::{Deserialize, Serialize};

/// Options for comment retrieval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentOptions {
    /// Keep resolved threads
    pub include_resolved: bool,

    /// Group comments anchored to identical text
    pub detect_duplicates: bool,

    /// Maximum characters kept for comment content and anchor text
    pub max_text_length: Option<usize>,
}

impl Default for CommentOptions {
    fn default() -> Self {
        Self {
            include_resolved: true,
            detect_duplicates: true,
            max_text_length: None,
        }
    }
}

impl CommentOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep or drop resolved threads.
    pub fn with_resolved(mut self, include: bool) -> Self {
        self.include_resolved = include;
        self
    }

    /// Enable or disable duplicate grouping.
    pub fn with_duplicates(mut self, detect: bool) -> Self {
        self.detect_duplicates = detect;
        self
    }

    /// Limit comment content and anchor text length.
    pub fn with_max_text_length(mut self, max: usize) -> Self {
        self.max_text_length = Some(max);
        self
    }
}

/// Comments found in a document or range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommentReport {
    /// Comment records in document order
    pub comments: Vec<AnnotationRecord>,

    /// Groups of comments sharing anchor text
    pub duplicates: Vec<DuplicateGroup>,

    /// Number of records returned
    pub total_count: usize,

    /// Number of resolved records returned
    pub resolved_count: usize,
}

/// Read comments from `host`, optionally limited to `scope`.
///
/// Anchor text hashes are always computed over the full anchor text, so
/// truncation never splits a duplicate group.
pub fn retrieve_comments<H: DocumentHost + ?Sized>(
    host: &H,
    scope: Option<&RangeHandle>,
    options: &CommentOptions,
) -> Result<CommentReport> {
    crate::extract::validate_max_text_length(options.max_text_length)?;

    let comments: Vec<AnnotationRecord> = host
        .list_comments(scope)?
        .into_iter()
        .filter(|c| options.include_resolved || !c.resolved)
        .enumerate()
        .map(|(i, c)| {
            let (content, _) = truncate_text(&c.content, options.max_text_length);
            let (anchor_text, _) = truncate_text(&c.anchor_text, options.max_text_length);
            AnnotationRecord {
                id: format!("comment-{}", i),
                content,
                author: c.author,
                created: c.created,
                resolved: c.resolved,
                anchor_text_hash: anchor_text_hash(&c.anchor_text),
                anchor_text_length: c.anchor_text.chars().count(),
                anchor_text,
                reply_count: c.replies.len(),
            }
        })
        .collect();

    let duplicates = if options.detect_duplicates {
        deduplicate_references(&comments)
    } else {
        Vec::new()
    };

    let resolved_count = comments.iter().filter(|c| c.resolved).count();
    log::debug!(
        "Retrieved {} comments ({} resolved, {} duplicate groups)",
        comments.len(),
        resolved_count,
        duplicates.len()
    );

    Ok(CommentReport {
        total_count: comments.len(),
        resolved_count,
        comments,
        duplicates,
    })
}
