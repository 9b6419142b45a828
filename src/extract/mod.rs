//! Content extraction from resolved ranges.
//!
//! The extractor walks a range's paragraphs (with their embedded images),
//! tables and content controls and emits typed [`ContentElement`]s plus
//! counts over what was emitted.
//!
//! [`ContentElement`]: crate::model::ContentElement

mod extractor;
mod options;
mod result;
mod text_box;

pub use extractor::ContentExtractor;
pub use options::{truncate_text, ExtractOptions, ELLIPSIS};
pub(crate) use options::validate_max_text_length;
pub use result::{ExtractionMetadata, ExtractionResult, ExtractionScope};
pub use text_box::{list_text_boxes, TextBoxInfo};

use crate::error::Result;
use crate::host::DocumentHost;
use crate::locate::resolve_locator;
use crate::model::{RangeHandle, RangeLocator};

/// Extract a range supplied by the caller (e.g. a page or the viewport).
pub fn extract_range<H: DocumentHost + ?Sized>(
    host: &H,
    range: &RangeHandle,
    scope: ExtractionScope,
    options: &ExtractOptions,
) -> Result<ExtractionResult> {
    ContentExtractor::new(host, options.clone()).extract(range, scope)
}

/// Resolve a locator and extract the resulting range.
pub fn resolve_and_extract<H: DocumentHost + ?Sized>(
    host: &H,
    locator: &RangeLocator,
    options: &ExtractOptions,
) -> Result<ExtractionResult> {
    options.validate()?;
    let range = resolve_locator(host, locator)?;
    extract_range(host, &range, locator.kind().into(), options)
}
