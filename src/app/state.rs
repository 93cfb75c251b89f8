//! Application state and view model computation.
//!
//! [`AppState`] is the single source of truth for a session: the immutable
//! catalog, the navigation state machine, the search query with the list it
//! derives, the scroll bookkeeping and the small transient bits of UI state
//! (copied badge, last notice, domain checker result).
//!
//! Transitions live here as methods with guards that turn invalid calls into
//! no-ops; the event handler decides which side effects follow from them.
//!
//! # Example
//!
//! ```rust
//! use lekutao_hub::app::{AppState, View};
//! use lekutao_hub::domain::Catalog;
//! use lekutao_hub::ui::Theme;
//!
//! let mut state = AppState::new(Catalog::builtin()?, Theme::default());
//! let idx = state.catalog.article_index("售后服务").unwrap();
//! assert!(state.enter_article(idx));
//! assert_eq!(state.view, View::ArticleDetail(idx));
//! assert_eq!(state.leave_detail(), Some(0));
//! # Ok::<(), lekutao_hub::HubError>(())
//! ```

use super::modes::{CheckStatus, InputMode, View};
use crate::domain::{Article, Catalog, Platform, PlatformKind};
use crate::index::{self, DefaultView, RiskVerdict};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DetailView, DisplayItem, DomainCheckInfo, EmptyState, FooterInfo, HeaderInfo, PageView,
    SearchBarInfo, SectionKind, StatusInfo, UIViewModel,
};
use chrono::{DateTime, Duration, Utc};

/// Terminal height assumed until the host reports one.
pub const DEFAULT_VIEWPORT_ROWS: usize = 24;

/// Terminal width assumed until the host reports one.
pub const DEFAULT_VIEWPORT_COLS: usize = 80;

/// How long the "copied" badge stays next to a mailbox.
pub const DEFAULT_COPIED_BADGE_MS: i64 = 2000;

/// Rows used by header, column headers, status lines, border and footer.
const CHROME_ROWS: usize = 8;

/// Extra rows taken by the search box.
const SEARCH_BAR_ROWS: usize = 3;

/// A row of the hub list, pointing into the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEntry {
    Article(usize),
    Platform(usize),
    Link(usize),
    Contact(usize),
}

/// Marks a mailbox whose address was just copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedBadge {
    pub email: String,
    pub copied_at: DateTime<Utc>,
}

/// Outcome of trying to open a platform page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformSelection {
    /// The platform page is now shown.
    Entered,
    /// The platform has no page; carries the notice to show instead.
    ComingSoon(String),
    /// Not on the list page, or no such platform.
    Ignored,
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Static content, immutable for the session.
    pub catalog: Catalog,

    /// What the manual shows while the query is empty.
    pub default_view: DefaultView,

    /// Current page; detail variants carry the selected index.
    pub view: View,

    /// Whether typed characters go to the search query.
    pub input_mode: InputMode,

    /// Current search query. Only editable on the list page.
    pub search_query: String,

    /// List rows derived from the catalog and the query.
    ///
    /// Recomputed by `apply_search_filter()` whenever the query changes.
    pub entries: Vec<ListEntry>,

    /// Cursor position within `entries`.
    pub cursor: usize,

    /// First visible row of the current page.
    pub scroll_offset: usize,

    /// List offset recorded when a detail page was entered.
    pub saved_scroll_offset: usize,

    pub viewport_rows: usize,
    pub viewport_cols: usize,

    /// Last domain submitted to the checker (trimmed).
    pub domain_input: String,

    pub check_status: CheckStatus,

    pub copied: Option<CopiedBadge>,

    pub copied_badge_ttl: Duration,

    /// Last notice shown to the user, cleared by the next input event.
    pub notice: Option<String>,

    /// Address copied by the "copy page link" button.
    pub page_url: String,

    pub theme: Theme,
}

impl AppState {
    /// Creates the session state on the list page with an empty query.
    #[must_use]
    pub fn new(catalog: Catalog, theme: Theme) -> Self {
        let mut state = Self {
            catalog,
            default_view: DefaultView::default(),
            view: View::List,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            entries: vec![],
            cursor: 0,
            scroll_offset: 0,
            saved_scroll_offset: 0,
            viewport_rows: DEFAULT_VIEWPORT_ROWS,
            viewport_cols: DEFAULT_VIEWPORT_COLS,
            domain_input: String::new(),
            check_status: CheckStatus::Idle,
            copied: None,
            copied_badge_ttl: Duration::milliseconds(DEFAULT_COPIED_BADGE_MS),
            notice: None,
            page_url: String::new(),
            theme,
        };
        state.apply_search_filter();
        state
    }

    /// The article being read, if any.
    #[must_use]
    pub fn selected_article(&self) -> Option<&Article> {
        self.view
            .selected_article()
            .and_then(|idx| self.catalog.articles.get(idx))
    }

    /// The platform being viewed, if any.
    #[must_use]
    pub fn selected_platform(&self) -> Option<&Platform> {
        self.view
            .selected_platform()
            .and_then(|idx| self.catalog.platforms.get(idx))
    }

    /// Manual articles currently listed, in catalog order.
    #[must_use]
    pub fn visible_articles(&self) -> Vec<&Article> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                ListEntry::Article(idx) => self.catalog.articles.get(*idx),
                _ => None,
            })
            .collect()
    }

    /// Platforms currently listed, in catalog order.
    #[must_use]
    pub fn visible_platforms(&self) -> Vec<&Platform> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                ListEntry::Platform(idx) => self.catalog.platforms.get(*idx),
                _ => None,
            })
            .collect()
    }

    /// Re-derives the list rows from the catalog and the current query.
    ///
    /// Rows are the matching articles, then the matching platforms; links and
    /// contacts are appended only while the query is empty. The cursor is
    /// clamped to the new bounds.
    pub fn apply_search_filter(&mut self) {
        let _span = tracing::debug_span!("apply_search_filter",
            total_articles = self.catalog.articles.len(),
            query_len = self.search_query.len(),
            default_view = ?self.default_view
        )
        .entered();

        let articles = index::matching_articles(
            &self.catalog.articles,
            &self.search_query,
            self.default_view,
            &self.catalog.popular,
        );
        let platforms = index::matching_platforms(&self.catalog.platforms, &self.search_query);

        let mut entries: Vec<ListEntry> = articles
            .into_iter()
            .map(ListEntry::Article)
            .chain(platforms.into_iter().map(ListEntry::Platform))
            .collect();

        if self.search_query.is_empty() {
            entries.extend((0..self.catalog.links.len()).map(ListEntry::Link));
            entries.extend((0..self.catalog.contacts.len()).map(ListEntry::Contact));
        }

        self.entries = entries;

        if self.entries.is_empty() {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(self.entries.len() - 1);
        }

        tracing::debug!(entry_count = self.entries.len(), "search filter applied");
    }

    /// Replaces the search query and re-filters.
    ///
    /// Only valid on the list page. Returns `false` when ignored.
    pub fn set_search_query(&mut self, text: &str) -> bool {
        if !self.view.is_list() {
            tracing::debug!("search query ignored outside the list page");
            return false;
        }
        text.clone_into(&mut self.search_query);
        self.apply_search_filter();
        true
    }

    /// Moves the cursor down, wrapping to the top.
    pub fn move_cursor_down(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.entries.len();
        self.keep_cursor_visible();
    }

    /// Moves the cursor up, wrapping to the bottom.
    pub fn move_cursor_up(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        if self.cursor == 0 {
            self.cursor = self.entries.len() - 1;
        } else {
            self.cursor -= 1;
        }
        self.keep_cursor_visible();
    }

    /// The list row under the cursor.
    #[must_use]
    pub fn entry_at_cursor(&self) -> Option<ListEntry> {
        self.entries.get(self.cursor).copied()
    }

    /// Opens an article page.
    ///
    /// Valid only from the list page. Records the list scroll offset and
    /// resets the page scroll to the top.
    pub fn enter_article(&mut self, idx: usize) -> bool {
        if !self.view.is_list() || idx >= self.catalog.articles.len() {
            tracing::debug!(idx, view = ?self.view, "article selection ignored");
            return false;
        }
        self.saved_scroll_offset = self.scroll_offset;
        self.scroll_offset = 0;
        self.view = View::ArticleDetail(idx);
        tracing::debug!(
            title = %self.catalog.articles[idx].title,
            saved_scroll_offset = self.saved_scroll_offset,
            "article opened"
        );
        true
    }

    /// Opens a platform page, if the platform has one.
    ///
    /// Platforms without a description and a reference URL leave the state
    /// untouched and yield the "coming soon" notice instead.
    pub fn enter_platform(&mut self, idx: usize) -> PlatformSelection {
        if !self.view.is_list() {
            return PlatformSelection::Ignored;
        }
        let Some(platform) = self.catalog.platforms.get(idx) else {
            return PlatformSelection::Ignored;
        };
        if !platform.is_navigable() {
            tracing::debug!(name = %platform.name, "platform has no page yet");
            return PlatformSelection::ComingSoon(platform.coming_soon_notice());
        }

        self.saved_scroll_offset = self.scroll_offset;
        self.scroll_offset = 0;
        self.view = View::PlatformDetail(idx);
        tracing::debug!(
            name = %self.catalog.platforms[idx].name,
            saved_scroll_offset = self.saved_scroll_offset,
            "platform opened"
        );
        PlatformSelection::Entered
    }

    /// Returns to the list page from a detail page.
    ///
    /// Yields the list offset to restore; the caller applies it once the list
    /// has been rendered. Returns `None` when already on the list page.
    pub fn leave_detail(&mut self) -> Option<usize> {
        if self.view.is_list() {
            return None;
        }
        self.view = View::List;
        tracing::debug!(restore_to = self.saved_scroll_offset, "back to list");
        Some(self.saved_scroll_offset)
    }

    /// Sets the scroll offset of the current page.
    pub fn apply_scroll(&mut self, offset: usize) {
        self.scroll_offset = offset;
    }

    /// Scrolls the current page by `delta` rows, stopping at the top.
    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta);
    }

    /// Runs the blacklist check and records the result.
    ///
    /// Blank input leaves the checker as it was and returns `false`.
    pub fn check_domain(&mut self, input: &str) -> bool {
        let Some(verdict) = index::check_domain(input, &self.catalog.blacklist) else {
            return false;
        };
        input.trim().clone_into(&mut self.domain_input);
        self.check_status = match verdict {
            RiskVerdict::Safe => CheckStatus::Safe,
            RiskVerdict::Flagged { matched_entry } => CheckStatus::Flagged { matched_entry },
        };
        true
    }

    /// Shows the "copied" badge next to `email`.
    pub fn mark_copied(&mut self, email: &str, now: DateTime<Utc>) {
        self.copied = Some(CopiedBadge {
            email: email.to_string(),
            copied_at: now,
        });
    }

    /// Drops the "copied" badge once it has been shown long enough.
    ///
    /// Returns `true` if the badge was removed.
    pub fn expire_copied_badge(&mut self, now: DateTime<Utc>) -> bool {
        let expired = self
            .copied
            .as_ref()
            .is_some_and(|badge| now - badge.copied_at >= self.copied_badge_ttl);
        if expired {
            self.copied = None;
        }
        expired
    }

    /// Rows available for list rows or detail lines.
    #[must_use]
    pub const fn page_rows(&self) -> usize {
        Self::calculate_available_rows(self.viewport_rows, self.view, self.input_mode)
    }

    /// Rows one page-down moves.
    ///
    /// Detail pages keep a row for the "more" marker, so their step is one
    /// row shorter than the window.
    #[must_use]
    pub const fn page_step(&self) -> usize {
        let rows = self.page_rows();
        if self.view.is_list() || rows <= 1 {
            rows
        } else {
            rows - 1
        }
    }

    /// Computes a renderable view model from the current state.
    ///
    /// # Windowing
    ///
    /// The page window starts at `scroll_offset`, clamped so that a stale
    /// offset (for example a detail-page offset still set while the list is
    /// being redrawn) never produces an empty window over a non-empty list.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let available_rows = Self::calculate_available_rows(rows, self.view, self.input_mode).max(1);

        let page = match self.view {
            View::List => self.compute_list_page(available_rows, cols),
            View::ArticleDetail(_) | View::PlatformDetail(_) => {
                PageView::Detail(self.compute_detail_page(available_rows))
            }
        };

        UIViewModel {
            header: self.compute_header(),
            footer: self.compute_footer(),
            search_bar: self.compute_search_bar(),
            page,
            status: self.compute_status(),
        }
    }

    fn keep_cursor_visible(&mut self) {
        let rows = self.page_rows().max(1);
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + rows {
            self.scroll_offset = self.cursor + 1 - rows;
        }
    }

    fn compute_list_page(&self, available_rows: usize, cols: usize) -> PageView {
        if self.entries.is_empty() {
            return PageView::List {
                items: vec![],
                selected_index: None,
                empty_state: Some(EmptyState {
                    message: "没有找到相关内容".to_string(),
                    subtitle: "换个关键词试试，或加入官方QQ群咨询".to_string(),
                }),
            };
        }

        let max_start = self.entries.len().saturating_sub(available_rows);
        let visible_start = self.scroll_offset.min(max_start);
        let visible_end = (visible_start + available_rows).min(self.entries.len());

        let items = self.entries[visible_start..visible_end]
            .iter()
            .enumerate()
            .filter_map(|(relative_idx, entry)| {
                self.compute_display_item(*entry, visible_start + relative_idx == self.cursor, cols)
            })
            .collect();

        let selected_index = (visible_start..visible_end)
            .contains(&self.cursor)
            .then(|| self.cursor - visible_start);

        PageView::List {
            items,
            selected_index,
            empty_state: None,
        }
    }

    fn compute_display_item(&self, entry: ListEntry, is_selected: bool, cols: usize) -> Option<DisplayItem> {
        const LABEL_COLUMN_WIDTH: usize = 30;

        let max_detail_width = cols.saturating_sub(LABEL_COLUMN_WIDTH + 8);

        let (section, label, detail, searchable) = match entry {
            ListEntry::Article(idx) => {
                let article = self.catalog.articles.get(idx)?;
                let tags = article.tags.iter().take(3).map(|t| format!("#{t}")).collect::<Vec<_>>();
                (SectionKind::Manual, article.title.clone(), tags.join(" "), true)
            }
            ListEntry::Platform(idx) => {
                let platform = self.catalog.platforms.get(idx)?;
                let section = match platform.kind {
                    PlatformKind::Marketplace => SectionKind::Marketplace,
                    PlatformKind::Carrier => SectionKind::Carrier,
                };
                let detail = if platform.is_navigable() {
                    format!("{} ›", platform.brand_label)
                } else {
                    platform.brand_label.clone()
                };
                (section, platform.name.clone(), detail, true)
            }
            ListEntry::Link(idx) => {
                let link = self.catalog.links.get(idx)?;
                (SectionKind::Link, link.title.clone(), link.subtitle.clone(), false)
            }
            ListEntry::Contact(idx) => {
                let contact = self.catalog.contacts.get(idx)?;
                (SectionKind::Contact, contact.label.clone(), contact.email.clone(), false)
            }
        };

        let badge = match entry {
            ListEntry::Contact(idx) => self.copied.as_ref().and_then(|badge| {
                let contact = self.catalog.contacts.get(idx)?;
                (contact.email == badge.email).then(|| "✓ 已复制".to_string())
            }),
            _ => None,
        };

        let highlight_ranges = if searchable {
            Self::compute_highlight_ranges(&label, &self.search_query)
        } else {
            vec![]
        };

        Some(DisplayItem {
            section,
            label,
            detail: crate::ui::helpers::truncate_to_width(&detail, max_detail_width),
            is_selected,
            highlight_ranges,
            badge,
        })
    }

    /// Character ranges of every occurrence of `query` in `text`, ignoring case.
    ///
    /// Returns no ranges when lower-casing changes the character count, since
    /// the offsets would no longer line up with the displayed text.
    fn compute_highlight_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
        if query.is_empty() {
            return vec![];
        }
        let haystack = text.to_lowercase();
        let needle = query.to_lowercase();
        if haystack.chars().count() != text.chars().count() {
            return vec![];
        }

        let needle_chars = needle.chars().count();
        haystack
            .match_indices(needle.as_str())
            .map(|(byte_start, _)| {
                let start = haystack[..byte_start].chars().count();
                (start, start + needle_chars)
            })
            .collect()
    }

    fn compute_detail_page(&self, available_rows: usize) -> DetailView {
        let (title, chips, lines) = if let Some(article) = self.selected_article() {
            let lines = article.body.as_ref().map_or_else(
                || Self::article_fallback_lines(&article.title),
                |body| body.as_str().lines().map(str::to_string).collect(),
            );
            (article.title.clone(), article.tags.clone(), lines)
        } else if let Some(platform) = self.selected_platform() {
            let mut chips = vec![platform.brand_label.clone()];
            chips.extend(platform.features.iter().flatten().cloned());
            (platform.name.clone(), chips, Self::platform_lines(platform))
        } else {
            (String::new(), vec![], vec![])
        };

        let start = self.scroll_offset.min(lines.len().saturating_sub(1));
        // The "more" marker takes the last row of a window that does not reach the end.
        let budget = if start + available_rows < lines.len() {
            available_rows.saturating_sub(1).max(1)
        } else {
            available_rows
        };
        let has_more = start + budget < lines.len();
        let lines = lines.into_iter().skip(start).take(budget).collect();

        DetailView {
            title,
            chips,
            lines,
            has_more,
        }
    }

    fn article_fallback_lines(title: &str) -> Vec<String> {
        vec![
            format!("这里是关于“{title}”的详细说明文档。我们致力于为您提供最透明、最便捷的日淘体验。"),
            String::new(),
            "1. 服务概述".to_string(),
            format!("乐酷淘一直秉承用户至上的原则。针对{title}，我们制定了详细的规范流程，"),
            "以确保每一位用户的权益得到充分保障。所有的操作都在系统内全程留痕，透明可查。".to_string(),
            String::new(),
            "2. 核心规则".to_string(),
            "  • 规则适用范围：本说明适用于所有乐酷淘注册用户。".to_string(),
            "  • 时效性：相关政策可能会根据日本市场或物流渠道的变化进行微调，请以最新公告为准。".to_string(),
            "  • 用户义务：使用服务前建议详细阅读本指南，避免因操作失误造成不必要的损失。".to_string(),
            String::new(),
            "3. 常见问题 (FAQ)".to_string(),
            "Q: 如果遇到特殊情况怎么办？".to_string(),
            "A: 您可以随时联系在线客服，或者在官方QQ群（850815830）中咨询。".to_string(),
            String::new(),
            "💡 温馨提示：如果您对内容有疑问，请截图联系客服。".to_string(),
        ]
    }

    fn platform_lines(platform: &Platform) -> Vec<String> {
        let mut lines = vec![];
        if let Some(description) = &platform.description {
            lines.extend(description.lines().map(str::to_string));
        }
        if let Some(tips) = &platform.tips {
            lines.push(String::new());
            lines.push(format!("💡 小贴士：{tips}"));
        }
        if let Some(url) = &platform.reference_url {
            lines.push(String::new());
            lines.push(format!("官网：{url}"));
        }
        lines
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match (self.selected_article(), self.selected_platform()) {
            (Some(article), _) => format!(" {} ", article.title),
            (_, Some(platform)) => format!(" {} · {} ", platform.name, platform.brand_label),
            _ => format!(" 乐酷淘 · 帮助中心 ({}) ", self.visible_articles().len()),
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.view, self.input_mode) {
            (View::List, InputMode::Search) => "Esc: 退出搜索  Enter: 打开  输入以筛选",
            (View::List, InputMode::Normal) => {
                "j/k: 移动  Enter: 打开  /: 搜索  c <域名>: 检测  y: 复制链接  q: 退出"
            }
            (View::ArticleDetail(_), _) => "b: 返回  j/k: 滚动  s: 联系客服",
            (View::PlatformDetail(_), _) => "b: 返回  j/k: 滚动  o: 打开官网",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        (self.view.is_list() && self.input_mode == InputMode::Search).then(|| SearchBarInfo {
            query: self.search_query.clone(),
        })
    }

    fn compute_status(&self) -> StatusInfo {
        let domain_check = match &self.check_status {
            CheckStatus::Idle => None,
            CheckStatus::Safe => Some(DomainCheckInfo {
                input: self.domain_input.clone(),
                message: "未在黑名单中发现该域名".to_string(),
                flagged: false,
            }),
            CheckStatus::Flagged { matched_entry } => Some(DomainCheckInfo {
                input: self.domain_input.clone(),
                message: format!("风险域名！命中黑名单：{matched_entry}"),
                flagged: true,
            }),
        };
        StatusInfo {
            notice: self.notice.clone(),
            domain_check,
        }
    }

    const fn calculate_available_rows(total_rows: usize, view: View, input_mode: InputMode) -> usize {
        match (view, input_mode) {
            (View::List, InputMode::Search) => total_rows.saturating_sub(CHROME_ROWS + SEARCH_BAR_ROWS),
            _ => total_rows.saturating_sub(CHROME_ROWS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Article, Body};

    fn state() -> AppState {
        let catalog = Catalog {
            articles: vec![
                Article::new("APP新手指南", ["入门"]),
                Article::new("售后服务", ["客服", "退款"]),
                Article::new("国际物流", ["运费"]),
            ],
            platforms: vec![
                Platform::new("メルカリ", "MERCARI").with_description("闲置交易"),
                Platform::new("ZOZOTOWN", "ZOZO"),
            ],
            popular: vec!["售后服务".into()],
            ..Catalog::default()
        };
        AppState::new(catalog, Theme::default())
    }

    #[test]
    fn popular_view_lists_curated_articles_then_platforms() {
        let state = state();
        assert_eq!(
            state.entries,
            vec![ListEntry::Article(1), ListEntry::Platform(0), ListEntry::Platform(1)]
        );
    }

    #[test]
    fn cursor_wraps_both_ways() {
        let mut state = state();
        state.move_cursor_up();
        assert_eq!(state.cursor, 2);
        state.move_cursor_down();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn cursor_is_clamped_after_narrowing() {
        let mut state = state();
        state.cursor = 2;
        assert!(state.set_search_query("退款"));
        assert_eq!(state.entries, vec![ListEntry::Article(1)]);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn cursor_drags_scroll_window() {
        let mut state = state();
        state.viewport_rows = CHROME_ROWS + 1;
        state.move_cursor_down();
        assert_eq!(state.scroll_offset, 1);
        state.move_cursor_up();
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn detail_transitions_are_guarded() {
        let mut state = state();
        assert!(!state.enter_article(99));
        assert!(state.enter_article(0));
        assert!(!state.enter_article(1));
        assert_eq!(state.enter_platform(0), PlatformSelection::Ignored);
        assert!(!state.set_search_query("x"));
        assert_eq!(state.search_query, "");
    }

    #[test]
    fn highlight_ranges_use_character_offsets() {
        assert_eq!(
            AppState::compute_highlight_ranges("煤炉拍卖代购规则", "代购"),
            vec![(4, 6)]
        );
        assert_eq!(AppState::compute_highlight_ranges("ZOZOTOWN", "zo"), vec![(0, 2), (2, 4)]);
        assert!(AppState::compute_highlight_ranges("ZOZOTOWN", "").is_empty());
    }

    #[test]
    fn copied_badge_expires_after_ttl() {
        let mut state = state();
        let now = Utc::now();
        state.mark_copied("work@lekutao.cn", now);
        assert!(!state.expire_copied_badge(now + Duration::milliseconds(1999)));
        assert!(state.expire_copied_badge(now + Duration::milliseconds(2000)));
        assert!(state.copied.is_none());
    }

    #[test]
    fn list_viewmodel_reports_empty_state() {
        let mut state = state();
        state.set_search_query("不存在");
        let vm = state.compute_viewmodel(24, 80);
        match vm.page {
            PageView::List { items, empty_state, .. } => {
                assert!(items.is_empty());
                assert!(empty_state.is_some());
            }
            PageView::Detail(_) => panic!("expected list page"),
        }
    }

    #[test]
    fn stale_offset_is_clamped_in_list_window() {
        let mut state = state();
        state.apply_scroll(40);
        let vm = state.compute_viewmodel(24, 80);
        match vm.page {
            PageView::List { items, .. } => assert_eq!(items.len(), 3),
            PageView::Detail(_) => panic!("expected list page"),
        }
    }

    #[test]
    fn article_without_body_uses_template() {
        let mut state = state();
        state.enter_article(2);
        let vm = state.compute_viewmodel(40, 80);
        match vm.page {
            PageView::Detail(detail) => {
                assert_eq!(detail.title, "国际物流");
                assert_eq!(detail.chips, vec!["运费"]);
                assert!(detail.lines[0].contains("国际物流"));
            }
            PageView::List { .. } => panic!("expected detail page"),
        }
    }

    #[test]
    fn paging_a_long_article_shows_every_line() {
        let mut state = state();
        let body: Vec<String> = (0..40).map(|i| format!("line-{i}")).collect();
        state
            .catalog
            .articles
            .push(Article::new("长文", ["测试"]).with_body(Body::new(body.join("\n"))));
        assert!(state.enter_article(state.catalog.articles.len() - 1));
        assert_eq!(state.page_step(), state.page_rows() - 1);

        let mut seen = Vec::new();
        loop {
            let vm = state.compute_viewmodel(DEFAULT_VIEWPORT_ROWS, DEFAULT_VIEWPORT_COLS);
            let PageView::Detail(detail) = vm.page else {
                panic!("expected detail page");
            };
            assert!(detail.lines.len() + usize::from(detail.has_more) <= state.page_rows());
            seen.extend(detail.lines);
            if !detail.has_more {
                break;
            }
            state.scroll_by(isize::try_from(state.page_step()).unwrap());
        }

        assert_eq!(seen, body);
    }
}
