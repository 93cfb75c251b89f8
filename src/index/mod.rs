//! Content index: pure lookups over the static catalog.
//!
//! - [`filter`]: manual and platform search with a configurable empty-query view
//! - [`risk`]: domain blacklist checker

pub mod filter;
pub mod risk;

pub use filter::{filter_articles, filter_platforms, matching_articles, matching_platforms, DefaultView};
pub use risk::{check_domain, RiskVerdict};
