//! Outline filtering options.

use crate::error::{Error, Result};
use crate::model::heading::validate_level;
use std::collections::BTreeSet;

/// Options controlling which headings enter an outline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutlineOptions {
    /// Keep only headings at or above this level (1 = top level only)
    pub max_depth: Option<u8>,

    /// Keep only headings at exactly these levels; takes precedence over `max_depth`
    pub specific_levels: Option<BTreeSet<u8>>,

    /// Copy heading formatting into outline nodes
    pub include_format: bool,
}

impl OutlineOptions {
    /// Create new outline options (all headings, no formatting).
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the outline to levels `1..=depth`.
    pub fn with_max_depth(mut self, depth: u8) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Limit the outline to the given levels.
    pub fn with_levels(mut self, levels: impl IntoIterator<Item = u8>) -> Self {
        self.specific_levels = Some(levels.into_iter().collect());
        self
    }

    /// Enable or disable formatting snapshots on nodes.
    pub fn with_format(mut self, include: bool) -> Self {
        self.include_format = include;
        self
    }

    /// Reject option values that can never match a heading.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == Some(0) {
            return Err(Error::validation("max_depth must be at least 1"));
        }
        if let Some(ref levels) = self.specific_levels {
            for &level in levels {
                validate_level(level)?;
            }
        }
        Ok(())
    }

    /// Check whether a heading at `level` passes the filter.
    pub fn includes(&self, level: u8) -> bool {
        match (&self.specific_levels, self.max_depth) {
            (Some(levels), _) => levels.contains(&level),
            (None, Some(depth)) => level <= depth,
            (None, None) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_includes_everything() {
        let options = OutlineOptions::default();
        assert!((1..=9).all(|level| options.includes(level)));
        assert!(!options.include_format);
    }

    #[test]
    fn test_max_depth_filter() {
        let options = OutlineOptions::new().with_max_depth(2);
        assert!(options.includes(1));
        assert!(options.includes(2));
        assert!(!options.includes(3));
    }

    #[test]
    fn test_specific_levels_win_over_max_depth() {
        let options = OutlineOptions::new().with_max_depth(1).with_levels([2, 4]);
        assert!(!options.includes(1));
        assert!(options.includes(2));
        assert!(options.includes(4));
    }

    #[test]
    fn test_validate() {
        assert!(OutlineOptions::new().with_max_depth(0).validate().is_err());
        assert!(OutlineOptions::new().with_levels([0]).validate().is_err());
        assert!(OutlineOptions::new().with_levels([1, 9]).validate().is_ok());
    }
}
