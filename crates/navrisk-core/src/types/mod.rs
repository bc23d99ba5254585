//! Domain types for NAV analytics.
//!
//! - [`Date`]: Calendar date of a NAV observation
//! - [`NavPoint`]: A single dated NAV
//! - [`NavSeries`]: Validated, date-ordered NAV history
//! - [`SchemeCode`] / [`SchemeInfo`]: Scheme identity as listed by a directory

mod date;
mod nav;
mod scheme;

pub use date::Date;
pub use nav::{NavPoint, NavSeries};
pub use scheme::{SchemeCode, SchemeInfo};
