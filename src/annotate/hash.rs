//! Anchor text hashing.

use md5::{Digest, Md5};
use unicode_normalization::UnicodeNormalization;

/// Normalize anchor text: NFC, whitespace runs collapsed, trimmed.
pub fn normalize_anchor_text(text: &str) -> String {
    let composed: String = text.nfc().collect();
    composed.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lowercase hex MD5 of the normalized anchor text.
pub fn anchor_text_hash(text: &str) -> String {
    let digest = Md5::digest(normalize_anchor_text(text).as_bytes());
    format!("{:x}", digest)
}
