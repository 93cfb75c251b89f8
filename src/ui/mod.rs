//! Terminal presentation layer.
//!
//! Turns a [`UIViewModel`] into ANSI-styled output. Components are plain
//! functions that print at absolute positions and return the next free row.
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready types computed from `AppState`
//! - [`renderer`]: Frame entry point
//! - [`components`]: Header, search box, table, detail page, status, footer
//! - [`helpers`]: Cursor positioning, column widths, match highlighting
//! - [`theme`]: Colour themes and escape sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render_viewmodel;
pub use theme::Theme;
pub use viewmodel::{
    DetailView, DisplayItem, DomainCheckInfo, EmptyState, FooterInfo, HeaderInfo, PageView,
    SearchBarInfo, SectionKind, StatusInfo, UIViewModel,
};
