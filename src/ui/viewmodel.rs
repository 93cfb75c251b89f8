//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready strings and flags only; no catalog
//! references and no business logic.

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Title bar.
    pub header: HeaderInfo,

    /// Key hints for the current view and input mode.
    pub footer: FooterInfo,

    /// Search box, present only in search mode on the list page.
    pub search_bar: Option<SearchBarInfo>,

    /// Main area: the list window or a detail page.
    pub page: PageView,

    /// Notice line and domain checker result.
    pub status: StatusInfo,
}

/// Main content area.
#[derive(Debug, Clone)]
pub enum PageView {
    /// Visible window of the hub list.
    List {
        /// Rows inside the scroll window.
        items: Vec<DisplayItem>,
        /// Cursor position relative to the window, if the cursor is visible.
        selected_index: Option<usize>,
        /// Shown instead of rows when nothing matches.
        empty_state: Option<EmptyState>,
    },
    /// Article or platform page.
    Detail(DetailView),
}

/// Which hub section a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Manual,
    Marketplace,
    Carrier,
    Link,
    Contact,
}

impl SectionKind {
    /// Short column label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Manual => "手册",
            Self::Marketplace => "平台",
            Self::Carrier => "物流",
            Self::Link => "链接",
            Self::Contact => "联系",
        }
    }
}

/// One row of the hub list.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    pub section: SectionKind,

    /// Article title, platform name, link title or contact label.
    pub label: String,

    /// Secondary column: tags, brand, subtitle or email.
    pub detail: String,

    /// Whether the cursor is on this row.
    pub is_selected: bool,

    /// Character ranges of `label` matching the search query.
    ///
    /// Each tuple is `(start, end)` in character indices, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,

    /// Transient marker such as "已复制" after copying an email.
    pub badge: Option<String>,
}

/// A detail page.
#[derive(Debug, Clone)]
pub struct DetailView {
    pub title: String,

    /// Tags of an article, or brand and features of a platform.
    pub chips: Vec<String>,

    /// Body lines inside the scroll window.
    pub lines: Vec<String>,

    /// Whether more lines follow below the window.
    pub has_more: bool,
}

#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Message shown when the list has no rows.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    pub query: String,
}

/// Bottom status area.
#[derive(Debug, Clone, Default)]
pub struct StatusInfo {
    pub notice: Option<String>,
    pub domain_check: Option<DomainCheckInfo>,
}

/// Result line of the domain checker.
#[derive(Debug, Clone)]
pub struct DomainCheckInfo {
    pub input: String,
    pub message: String,
    pub flagged: bool,
}
