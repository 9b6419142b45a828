//! Annotation (comment) records and duplicate groups.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment read from the host, flattened for reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationRecord {
    /// Synthesized id (`comment-<n>`)
    pub id: String,

    /// Comment body
    pub content: String,

    /// Comment author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Whether the comment thread is resolved
    #[serde(default)]
    pub resolved: bool,

    /// Text the comment is anchored to
    pub anchor_text: String,

    /// Hash of the normalized anchor text
    pub anchor_text_hash: String,

    /// Length of the anchor text in characters
    pub anchor_text_length: usize,

    /// Number of replies in the thread
    #[serde(default)]
    pub reply_count: usize,
}

impl AnnotationRecord {
    /// Create a record; the hash is computed from `anchor_text`.
    pub fn new(
        id: impl Into<String>,
        content: impl Into<String>,
        anchor_text: impl Into<String>,
    ) -> Self {
        let anchor_text = anchor_text.into();
        Self {
            id: id.into(),
            content: content.into(),
            author: None,
            created: None,
            resolved: false,
            anchor_text_hash: crate::annotate::anchor_text_hash(&anchor_text),
            anchor_text_length: anchor_text.chars().count(),
            anchor_text,
            reply_count: 0,
        }
    }

    /// Set the author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }
}

/// Comments anchored to identical text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicateGroup {
    /// Shared anchor text hash
    pub text_hash: String,

    /// Anchor text of the first member
    pub text: String,

    /// Number of members (at least 2)
    pub count: usize,

    /// Members in input order
    pub comments: Vec<AnnotationRecord>,
}
