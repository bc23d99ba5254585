//! # NavRisk Core
//!
//! Core domain types for the NavRisk fund analytics workspace.
//!
//! - **Types**: `Date`, `NavPoint`, `NavSeries`, `SchemeCode`, `SchemeInfo`
//! - **Errors**: `CoreError` for invalid dates, series and NAV values
//!
//! A [`NavSeries`](types::NavSeries) is immutable once built and always
//! strictly ordered by date with positive NAVs; everything downstream relies
//! on that.
//!
//! ## Example
//!
//! ```rust
//! use navrisk_core::prelude::*;
//!
//! let series = NavSeries::from_pairs([
//!     (Date::from_ymd(2024, 1, 31).unwrap(), 10.0),
//!     (Date::from_ymd(2024, 2, 29).unwrap(), 10.4),
//! ])
//! .unwrap();
//! assert_eq!(series.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_wrap)]

pub mod error;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use types::{Date, NavPoint, NavSeries, SchemeCode, SchemeInfo};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{Date, NavPoint, NavSeries, SchemeCode, SchemeInfo};
}
