//! Data model shared by the query components.
//!
//! Every type here is a plain, serializable value. Nothing in the model
//! refers back into the host document, so results can be kept, exported
//! or discarded freely once a query returns.

mod annotation;
mod element;
mod format;
pub(crate) mod heading;
mod locator;
mod outline;
mod range;

pub use annotation::{AnnotationRecord, DuplicateGroup};
pub use element::{
    ContentControlElement, ContentElement, ControlType, ImageElement, ParagraphElement,
    TableElement,
};
pub use format::{Alignment, FormatSnapshot, ParagraphFormat, TableFormat};
pub use heading::{HeadingRecord, MAX_HEADING_LEVEL, MIN_HEADING_LEVEL};
pub use locator::{LocatorKind, RangeLocator};
pub use outline::{DocumentOutline, OutlineIter, OutlineNode};
pub use range::RangeHandle;
