//! Outline construction from heading records.
//!
//! Turns the flat, leveled heading list reported by the host into a
//! [`DocumentOutline`] tree, or into a flat node list with the same
//! filtering. Serialization lives in [`crate::render`].

mod builder;
mod options;

pub use builder::OutlineBuilder;
pub use options::OutlineOptions;

use crate::error::Result;
use crate::host::DocumentHost;
use crate::model::{DocumentOutline, HeadingRecord, OutlineNode};

/// Build a nested outline from heading records.
pub fn build_outline(
    headings: &[HeadingRecord],
    options: &OutlineOptions,
) -> Result<DocumentOutline> {
    OutlineBuilder::new(options.clone()).build(headings)
}

/// Build a flat outline (no nesting) from heading records.
pub fn build_flat_outline(
    headings: &[HeadingRecord],
    options: &OutlineOptions,
) -> Result<Vec<OutlineNode>> {
    OutlineBuilder::new(options.clone()).build_flat(headings)
}

/// Read the host's headings and build a nested outline.
pub fn build_outline_from_host<H: DocumentHost + ?Sized>(
    host: &H,
    options: &OutlineOptions,
) -> Result<DocumentOutline> {
    let headings = host.list_headings()?;
    build_outline(&headings, options)
}
