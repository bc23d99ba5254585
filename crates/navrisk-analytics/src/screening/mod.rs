//! Category screening and ranking.

pub mod parallel;
mod screener;

pub use parallel::maybe_parallel_map;
pub use screener::{
    FundScreener, ScreeningCandidate, ScreeningReport, SkipReason, SkippedCandidate,
};
