//! Domain layer: content records and error types.
//!
//! Everything here is plain data with no knowledge of navigation or rendering.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`article`]: Help manual articles and their opaque bodies
//! - [`platform`]: Marketplace and carrier reference entries
//! - [`catalog`]: The static data feed bundling all content tables
//!
//! # Examples
//!
//! ```
//! use lekutao_hub::domain::{Catalog, Result};
//!
//! fn load() -> Result<Catalog> {
//!     Catalog::builtin()
//! }
//! assert!(!load().unwrap().articles.is_empty());
//! ```

pub mod article;
pub mod catalog;
pub mod error;
pub mod platform;

pub use article::{Article, Body};
pub use catalog::{AppStoreLink, Catalog, Contact, LinkCategory, LinkItem};
pub use error::{HubError, Result};
pub use platform::{Platform, PlatformKind};
