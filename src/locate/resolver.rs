//! Locator resolution against a host document.

use crate::error::{Error, Result};
use crate::host::{DocumentHost, HandleRef};
use crate::model::{RangeHandle, RangeLocator};

/// Resolves [`RangeLocator`]s to concrete ranges.
pub struct LocatorResolver<'h, H: ?Sized> {
    host: &'h H,
}

impl<'h, H: DocumentHost + ?Sized> LocatorResolver<'h, H> {
    /// Create a resolver over a host document.
    pub fn new(host: &'h H) -> Self {
        Self { host }
    }

    /// Resolve a locator to a range.
    ///
    /// Lookups by name or search criteria fail with [`Error::NotFound`];
    /// numeric indexes past the end fail with [`Error::OutOfRange`].
    /// Nothing is clamped.
    pub fn resolve(&self, locator: &RangeLocator) -> Result<RangeHandle> {
        locator.validate()?;

        let range = match locator {
            RangeLocator::Bookmark { name } => self.resolve_bookmark(name),
            RangeLocator::Heading { text, level, index } => {
                self.resolve_heading(locator, text.as_deref(), *level, index.unwrap_or(0))
            }
            RangeLocator::ParagraphRange {
                start_index,
                end_index,
            } => self.resolve_paragraphs(*start_index, end_index.unwrap_or(*start_index)),
            RangeLocator::Section { index } => self.resolve_section(*index),
            RangeLocator::ContentControl { title, tag, index } => self.resolve_content_control(
                locator,
                title.as_deref(),
                tag.as_deref(),
                index.unwrap_or(0),
            ),
        }?;

        log::debug!(
            "Resolved {} locator ({}) to {}",
            locator.kind(),
            locator.criteria(),
            range
        );
        Ok(range)
    }

    fn resolve_bookmark(&self, name: &str) -> Result<RangeHandle> {
        self.host
            .find_bookmark(name)?
            .ok_or_else(|| Error::NotFound {
                target: "Bookmark",
                criteria: format!("name={:?}", name),
            })
    }

    fn resolve_heading(
        &self,
        locator: &RangeLocator,
        text: Option<&str>,
        level: Option<u8>,
        index: usize,
    ) -> Result<RangeHandle> {
        let mut headings = self.host.list_headings()?;
        headings.sort_by_key(|h| h.sequence_index);

        let heading = headings
            .iter()
            .filter(|h| text.map_or(true, |t| h.text.contains(t)))
            .filter(|h| level.map_or(true, |l| h.level == l))
            .nth(index)
            .ok_or_else(|| Error::NotFound {
                target: "Heading",
                criteria: locator.criteria(),
            })?;

        let paragraphs = self.host.list_paragraphs(None)?;
        let paragraph = paragraphs
            .iter()
            .find(|p| p.index == heading.sequence_index)
            .ok_or_else(|| {
                Error::Host(format!(
                    "heading {:?} refers to missing paragraph {}",
                    heading.text, heading.sequence_index
                ))
            })?;
        self.host.range_of(HandleRef::Paragraph(paragraph))
    }

    fn resolve_paragraphs(&self, start: usize, end: usize) -> Result<RangeHandle> {
        let paragraphs = self.host.list_paragraphs(None)?;
        let count = paragraphs.len();
        for index in [start, end] {
            if index >= count {
                return Err(Error::OutOfRange {
                    target: "Paragraph",
                    index,
                    bound: count,
                });
            }
        }

        let first = self.host.range_of(HandleRef::Paragraph(&paragraphs[start]))?;
        if start == end {
            return Ok(first);
        }
        let last = self.host.range_of(HandleRef::Paragraph(&paragraphs[end]))?;
        Ok(first.expand_to(&last))
    }

    fn resolve_section(&self, index: usize) -> Result<RangeHandle> {
        let count = self.host.section_count()?;
        let out_of_range = || Error::OutOfRange {
            target: "Section",
            index,
            bound: count,
        };
        if index >= count {
            return Err(out_of_range());
        }
        let section = self.host.get_section(index)?.ok_or_else(out_of_range)?;
        self.host.range_of(HandleRef::Section(&section))
    }

    fn resolve_content_control(
        &self,
        locator: &RangeLocator,
        title: Option<&str>,
        tag: Option<&str>,
        index: usize,
    ) -> Result<RangeHandle> {
        let mut controls = self.host.list_content_controls(None)?;
        controls.sort_by_key(|c| c.range.start);

        let control = controls
            .iter()
            .filter(|c| {
                title.map_or(true, |t| {
                    c.title.as_deref().is_some_and(|title| title.contains(t))
                })
            })
            .filter(|c| tag.map_or(true, |t| c.tag.as_deref() == Some(t)))
            .nth(index)
            .ok_or_else(|| Error::NotFound {
                target: "Content control",
                criteria: locator.criteria(),
            })?;
        self.host.range_of(HandleRef::ContentControl(control))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{MemoryContentControl, MemoryDocument};

    fn chapters() -> MemoryDocument {
        let mut doc = MemoryDocument::new();
        doc.add_heading("Ch A", 1); // block 0
        doc.add_paragraph("alpha"); // block 1
        doc.add_heading("Other", 1); // block 2
        doc.add_paragraph("beta"); // block 3
        doc.add_heading("Ch B", 2); // block 4
        doc
    }

    #[test]
    fn test_heading_nth_match() {
        let doc = chapters();
        let resolver = LocatorResolver::new(&doc);
        let locator = RangeLocator::Heading {
            text: Some("Ch".to_string()),
            level: None,
            index: Some(1),
        };
        assert_eq!(resolver.resolve(&locator).unwrap(), RangeHandle::single(4));

        let missing = RangeLocator::Heading {
            text: Some("Ch".to_string()),
            level: None,
            index: Some(2),
        };
        let err = resolver.resolve(&missing).unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("index=2"));
    }

    #[test]
    fn test_heading_level_filter() {
        let doc = chapters();
        let resolver = LocatorResolver::new(&doc);
        let locator = RangeLocator::Heading {
            text: None,
            level: Some(2),
            index: None,
        };
        assert_eq!(resolver.resolve(&locator).unwrap(), RangeHandle::single(4));
    }

    #[test]
    fn test_section_out_of_range_reports_bound() {
        let doc = chapters();
        let err = LocatorResolver::new(&doc)
            .resolve(&RangeLocator::section(1))
            .unwrap_err();
        match err {
            Error::OutOfRange { index, bound, .. } => {
                assert_eq!(index, 1);
                assert_eq!(bound, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_content_control_filters() {
        let mut doc = chapters();
        doc.add_content_control(
            MemoryContentControl::new(1, 1)
                .with_title("Customer name")
                .with_tag("customer"),
        );
        doc.add_content_control(MemoryContentControl::new(3, 3).with_title("Customer id"));
        let resolver = LocatorResolver::new(&doc);

        let by_title = RangeLocator::ContentControl {
            title: Some("Customer".to_string()),
            tag: None,
            index: Some(1),
        };
        assert_eq!(resolver.resolve(&by_title).unwrap(), RangeHandle::single(3));

        let by_tag = RangeLocator::content_control_tag("customer");
        assert_eq!(resolver.resolve(&by_tag).unwrap(), RangeHandle::single(1));

        let missing = RangeLocator::content_control_tag("Customer");
        assert!(resolver.resolve(&missing).unwrap_err().is_not_found());
    }
}
