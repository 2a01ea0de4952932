// Match lifecycle and team statistics aggregation
pub mod aggregator;
pub mod lifecycle;

pub use aggregator::AppliedResult;
