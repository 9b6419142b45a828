//! Locator resolution.
//!
//! Maps one of the five [`RangeLocator`] kinds to a concrete
//! [`RangeHandle`]. "N-th match" semantics always follow document order,
//! so repeated calls against an unchanged document agree.

mod resolver;

pub use resolver::LocatorResolver;

use crate::error::Result;
use crate::host::DocumentHost;
use crate::model::{RangeHandle, RangeLocator};

/// Resolve a locator against a host document.
pub fn resolve_locator<H: DocumentHost + ?Sized>(
    host: &H,
    locator: &RangeLocator,
) -> Result<RangeHandle> {
    LocatorResolver::new(host).resolve(locator)
}
