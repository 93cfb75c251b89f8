//! Environment-facing helpers: data locations and the URL opener.

pub mod launcher;
pub mod paths;

pub use launcher::open_url;
pub use paths::{expand_tilde, get_data_dir};
