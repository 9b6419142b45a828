//! Comment retrieval and duplicate anchor detection.
//!
//! Comments are reduced to [`AnnotationRecord`]s whose anchor text is
//! hashed after normalization, so records anchored to the same wording can
//! be grouped regardless of whitespace or Unicode composition.
//!
//! [`AnnotationRecord`]: crate::model::AnnotationRecord

mod comments;
mod dedup;
mod hash;

pub use comments::{retrieve_comments, CommentOptions, CommentReport};
pub use dedup::deduplicate_references;
pub use hash::{anchor_text_hash, normalize_anchor_text};
