//! Navigation and input mode types.
//!
//! # State Machine
//!
//! ```text
//!             select_article              select_platform
//!   ArticleDetail ◄────────── List ──────────► PlatformDetail
//!         │                   ▲  ▲                  │
//!         └──── go_back ──────┘  └──── go_back ─────┘
//! ```
//!
//! `List` is the initial and only re-entrant state. The detail variants carry
//! the index of the selected catalog entry, so "at most one selection, and
//! none exactly when the list is shown" holds by construction.
//!
//! Input modes only matter while the list is shown: in `Search` typed
//! characters go to the query, in `Normal` they are commands.

/// The page currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// The hub page with the manual, platforms, links and contacts.
    #[default]
    List,
    /// Reading an article; holds its index in `Catalog::articles`.
    ArticleDetail(usize),
    /// Viewing a platform page; holds its index in `Catalog::platforms`.
    PlatformDetail(usize),
}

impl View {
    #[must_use]
    pub const fn is_list(self) -> bool {
        matches!(self, Self::List)
    }

    #[must_use]
    pub const fn selected_article(self) -> Option<usize> {
        match self {
            Self::ArticleDetail(idx) => Some(idx),
            _ => None,
        }
    }

    #[must_use]
    pub const fn selected_platform(self) -> Option<usize> {
        match self {
            Self::PlatformDetail(idx) => Some(idx),
            _ => None,
        }
    }
}

/// Current input handling mode of the list page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys are commands: move, open, back, quit.
    #[default]
    Normal,
    /// Keys edit the search query.
    Search,
}

/// State of the domain blacklist checker card.
///
/// Stays `Idle` until a non-blank domain has been checked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CheckStatus {
    #[default]
    Idle,
    Safe,
    Flagged { matched_entry: String },
}
