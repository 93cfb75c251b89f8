//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point for everything the user or the
//! host does to the hub. It pattern-matches the event, mutates [`AppState`]
//! through its guarded transition methods and returns:
//!
//! 1. whether the view must be re-rendered, and
//! 2. the side effects to run afterwards, in order.
//!
//! # Event Types
//!
//! - **Navigation**: `CursorDown`, `CursorUp`, `SelectEntry`, `SelectArticle`,
//!   `SelectPlatform`, `GoBack`
//! - **Search**: `EnterSearch`, `ExitSearch`, `Char`, `Backspace`, `SetQuery`
//! - **Viewport**: `ScrollBy`, `ScrollTo`, `Resize`
//! - **Tools**: `CheckDomain`, `CopyEmail`, `MailTo`, `CopyPageLink`,
//!   `ContactSupport`, `OpenReference`, `OpenLink`, `OpenAppStore`
//! - **System**: `Tick`, `Quit`
//!
//! # Example
//!
//! ```rust
//! use lekutao_hub::app::{handle_event, Action, AppState, Event};
//! use lekutao_hub::domain::Catalog;
//! use lekutao_hub::ui::Theme;
//!
//! let mut state = AppState::new(Catalog::builtin()?, Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::SelectArticle("售后服务".into()));
//! assert!(render);
//! assert_eq!(actions, vec![Action::ScrollTo(0)]);
//! # Ok::<(), lekutao_hub::HubError>(())
//! ```

use super::actions::mailto_url;
use super::modes::InputMode;
use super::state::{ListEntry, PlatformSelection};
use crate::app::{Action, AppState};
use chrono::{DateTime, Utc};

/// Notice shown after the page link has been copied.
pub const LINK_COPIED_NOTICE: &str = "链接已复制，请收藏！";

/// Notice shown by the "contact support" button.
pub const SUPPORT_PENDING_NOTICE: &str = "功能开发中：将跳转到客服咨询页面";

/// Events triggered by user input or the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the list cursor down by one row (wraps to top).
    CursorDown,
    /// Moves the list cursor up by one row (wraps to bottom).
    CursorUp,
    /// Sends typed characters to the search query.
    EnterSearch,
    /// Leaves search mode and clears the query.
    ExitSearch,
    /// Appends a character to the query (search mode only).
    Char(char),
    /// Removes the last character of the query (search mode only).
    Backspace,
    /// Replaces the whole query.
    SetQuery(String),

    /// Activates the row under the cursor.
    ///
    /// Articles and platforms open their page, links open in the browser and
    /// contacts copy their address.
    SelectEntry,
    /// Opens the article with this title.
    SelectArticle(String),
    /// Opens the platform with this name.
    SelectPlatform(String),
    /// Returns from a detail page to the list.
    GoBack,

    /// Scrolls the current page by a number of rows.
    ScrollBy(isize),
    /// Scrolls the current page to an absolute offset.
    ScrollTo(usize),
    /// Reports a new terminal size.
    Resize { rows: usize, cols: usize },

    /// Checks a domain against the blacklist.
    CheckDomain(String),
    /// Copies a contact address and shows the "copied" badge.
    CopyEmail(String),
    /// Opens a `mailto:` link for a contact address.
    MailTo(String),
    /// Copies the hub page URL.
    CopyPageLink,
    /// The "contact support" button of an article page.
    ContactSupport,
    /// Opens the official site of the platform being viewed.
    OpenReference,
    /// Opens a download or social link by id.
    OpenLink(String),
    /// Opens the Android store listing with this store name.
    OpenAppStore(String),

    /// Clock tick used to expire transient UI state.
    Tick(DateTime<Utc>),
    /// Ends the session.
    Quit,
}

/// Processes an event, mutates application state and returns actions to execute.
///
/// Returns `(should_render, actions)`. Actions are meant to run after the
/// render, in order; see [`Hub::dispatch`](crate::app::Hub::dispatch).
///
/// Any notice from the previous event is cleared before a non-tick event is
/// handled, so a notice stays on screen until the next user interaction.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let cleared_notice = !matches!(event, Event::Tick(_)) && state.notice.take().is_some();

    let (render, actions) = match event {
        Event::CursorDown => {
            if !state.view.is_list() {
                return (cleared_notice, vec![]);
            }
            state.move_cursor_down();
            (true, vec![])
        }
        Event::CursorUp => {
            if !state.view.is_list() {
                return (cleared_notice, vec![]);
            }
            state.move_cursor_up();
            (true, vec![])
        }
        Event::EnterSearch => {
            if !state.view.is_list() {
                return (cleared_notice, vec![]);
            }
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search;
            (true, vec![])
        }
        Event::ExitSearch => {
            if !state.view.is_list() {
                return (cleared_notice, vec![]);
            }
            tracing::debug!(query = %state.search_query, "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.set_search_query("");
            (true, vec![])
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search {
                return (cleared_notice, vec![]);
            }
            let mut query = state.search_query.clone();
            query.push(*c);
            let changed = state.set_search_query(&query);
            tracing::trace!(query = %state.search_query, char = %c, "search query updated");
            (changed, vec![])
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search || state.search_query.is_empty() {
                return (cleared_notice, vec![]);
            }
            let mut query = state.search_query.clone();
            query.pop();
            (state.set_search_query(&query), vec![])
        }
        Event::SetQuery(text) => (state.set_search_query(text), vec![]),

        Event::SelectEntry => select_entry(state),
        Event::SelectArticle(title) => match state.catalog.article_index(title) {
            Some(idx) => select_article(state, idx),
            None => {
                tracing::debug!(%title, "unknown article");
                (false, vec![])
            }
        },
        Event::SelectPlatform(name) => match state.catalog.platform_index(name) {
            Some(idx) => select_platform(state, idx),
            None => {
                tracing::debug!(%name, "unknown platform");
                (false, vec![])
            }
        },
        Event::GoBack => state
            .leave_detail()
            .map_or((false, vec![]), |offset| (true, vec![Action::ScrollTo(offset)])),

        Event::ScrollBy(delta) => {
            let before = state.scroll_offset;
            state.scroll_by(*delta);
            (state.scroll_offset != before, vec![])
        }
        Event::ScrollTo(offset) => {
            let changed = state.scroll_offset != *offset;
            state.apply_scroll(*offset);
            (changed, vec![])
        }
        Event::Resize { rows, cols } => {
            tracing::debug!(rows, cols, "viewport resized");
            state.viewport_rows = *rows;
            state.viewport_cols = *cols;
            (true, vec![])
        }

        Event::CheckDomain(input) => (state.check_domain(input), vec![]),
        Event::CopyEmail(email) => copy_email(state, email),
        Event::MailTo(email) => (false, vec![Action::OpenUrl(mailto_url(email))]),
        Event::CopyPageLink => {
            tracing::debug!(page_url = %state.page_url, "copying page link");
            state.notice = Some(LINK_COPIED_NOTICE.to_string());
            (
                true,
                vec![
                    Action::WriteClipboard(state.page_url.clone()),
                    Action::Notify(LINK_COPIED_NOTICE.to_string()),
                ],
            )
        }
        Event::ContactSupport => {
            if state.view.selected_article().is_none() {
                return (cleared_notice, vec![]);
            }
            state.notice = Some(SUPPORT_PENDING_NOTICE.to_string());
            (true, vec![Action::Notify(SUPPORT_PENDING_NOTICE.to_string())])
        }
        Event::OpenReference => state
            .selected_platform()
            .and_then(|platform| platform.reference_url.clone())
            .map_or((false, vec![]), |url| (false, vec![Action::OpenUrl(url)])),
        Event::OpenLink(id) => state
            .catalog
            .links
            .iter()
            .find(|link| &link.id == id)
            .map_or_else(
                || {
                    tracing::debug!(%id, "unknown link");
                    (false, vec![])
                },
                |link| (false, vec![Action::OpenUrl(link.url.clone())]),
            ),
        Event::OpenAppStore(store) => open_app_store(state, store),

        Event::Tick(now) => (state.expire_copied_badge(*now), vec![]),
        Event::Quit => (false, vec![Action::Quit]),
    };

    (render || cleared_notice, actions)
}

fn select_entry(state: &mut AppState) -> (bool, Vec<Action>) {
    if !state.view.is_list() {
        return (false, vec![]);
    }

    let Some(entry) = state.entry_at_cursor() else {
        tracing::debug!("no entry under cursor");
        if state.input_mode == InputMode::Search {
            state.input_mode = InputMode::Normal;
            state.set_search_query("");
            return (true, vec![]);
        }
        return (false, vec![]);
    };

    match entry {
        ListEntry::Article(idx) => select_article(state, idx),
        ListEntry::Platform(idx) => select_platform(state, idx),
        ListEntry::Link(idx) => state
            .catalog
            .links
            .get(idx)
            .map_or((false, vec![]), |link| (false, vec![Action::OpenUrl(link.url.clone())])),
        ListEntry::Contact(idx) => match state.catalog.contacts.get(idx) {
            Some(contact) => {
                let email = contact.email.clone();
                copy_email(state, &email)
            }
            None => (false, vec![]),
        },
    }
}

fn select_article(state: &mut AppState, idx: usize) -> (bool, Vec<Action>) {
    if state.enter_article(idx) {
        (true, vec![Action::ScrollTo(0)])
    } else {
        (false, vec![])
    }
}

fn select_platform(state: &mut AppState, idx: usize) -> (bool, Vec<Action>) {
    match state.enter_platform(idx) {
        PlatformSelection::Entered => (true, vec![Action::ScrollTo(0)]),
        PlatformSelection::ComingSoon(notice) => {
            state.notice = Some(notice.clone());
            (true, vec![Action::Notify(notice)])
        }
        PlatformSelection::Ignored => (false, vec![]),
    }
}

fn open_app_store(state: &mut AppState, store: &str) -> (bool, Vec<Action>) {
    let Some(listing) = state.catalog.app_stores.iter().find(|s| s.platform == store) else {
        tracing::debug!(%store, "unknown app store");
        return (false, vec![]);
    };

    match &listing.url {
        Some(url) => (false, vec![Action::OpenUrl(url.clone())]),
        None => {
            let notice = format!("{store} 应用商店即将上线，敬请期待！");
            state.notice = Some(notice.clone());
            (true, vec![Action::Notify(notice)])
        }
    }
}

fn copy_email(state: &mut AppState, email: &str) -> (bool, Vec<Action>) {
    tracing::debug!(%email, "copying email");
    state.mark_copied(email, Utc::now());
    (true, vec![Action::WriteClipboard(email.to_string())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::View;
    use crate::domain::{AppStoreLink, Article, Catalog, Contact, Platform};
    use crate::ui::theme::Theme;

    fn state() -> AppState {
        let catalog = Catalog {
            articles: vec![
                Article::new("APP新手指南", ["入门"]),
                Article::new("售后服务", ["客服", "退款"]),
            ],
            platforms: vec![
                Platform::new("メルカリ", "MERCARI").with_reference_url("https://jp.mercari.com"),
                Platform::new("ZOZOTOWN", "ZOZO"),
            ],
            contacts: vec![Contact {
                label: "商务合作".into(),
                email: "work@lekutao.cn".into(),
            }],
            blacklist: vec!["flypixes.click".into()],
            popular: vec!["APP新手指南".into(), "售后服务".into()],
            ..Catalog::default()
        };
        AppState::new(catalog, Theme::default())
    }

    #[test]
    fn typing_outside_search_mode_is_ignored() {
        let mut state = state();
        let (render, _) = handle_event(&mut state, &Event::Char('x'));
        assert!(!render);
        assert_eq!(state.search_query, "");
    }

    #[test]
    fn typing_filters_the_list() {
        let mut state = state();
        handle_event(&mut state, &Event::EnterSearch);
        for c in "退款".chars() {
            handle_event(&mut state, &Event::Char(c));
        }
        assert_eq!(state.search_query, "退款");
        assert_eq!(state.entries, vec![ListEntry::Article(1)]);

        handle_event(&mut state, &Event::ExitSearch);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.search_query, "");
    }

    #[test]
    fn select_entry_opens_article_under_cursor() {
        let mut state = state();
        handle_event(&mut state, &Event::CursorDown);
        let (render, actions) = handle_event(&mut state, &Event::SelectEntry);
        assert!(render);
        assert_eq!(actions, vec![Action::ScrollTo(0)]);
        assert_eq!(state.view, View::ArticleDetail(1));
    }

    #[test]
    fn coming_soon_platform_notifies_without_navigating() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::SelectPlatform("ZOZOTOWN".into()));
        assert!(render);
        assert_eq!(actions, vec![Action::Notify("ZOZOTOWN 功能即将上线，敬请期待！".into())]);
        assert_eq!(state.view, View::List);
        assert!(state.notice.is_some());

        handle_event(&mut state, &Event::CursorDown);
        assert!(state.notice.is_none());
    }

    #[test]
    fn open_reference_only_on_platform_page() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::OpenReference);
        assert!(actions.is_empty());

        handle_event(&mut state, &Event::SelectPlatform("メルカリ".into()));
        let (_, actions) = handle_event(&mut state, &Event::OpenReference);
        assert_eq!(actions, vec![Action::OpenUrl("https://jp.mercari.com".into())]);
    }

    #[test]
    fn contact_support_requires_article_page() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::ContactSupport);
        assert!(actions.is_empty());

        handle_event(&mut state, &Event::SelectArticle("售后服务".into()));
        let (_, actions) = handle_event(&mut state, &Event::ContactSupport);
        assert_eq!(actions, vec![Action::Notify(SUPPORT_PENDING_NOTICE.into())]);
    }

    #[test]
    fn copy_email_writes_clipboard_and_sets_badge() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::CopyEmail("work@lekutao.cn".into()));
        assert!(render);
        assert_eq!(actions, vec![Action::WriteClipboard("work@lekutao.cn".into())]);
        assert_eq!(state.copied.as_ref().map(|b| b.email.as_str()), Some("work@lekutao.cn"));
    }

    #[test]
    fn mail_to_opens_mailto_url() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::MailTo("work@lekutao.cn".into()));
        assert!(!render);
        assert_eq!(actions, vec![Action::OpenUrl("mailto:work@lekutao.cn".into())]);
    }

    #[test]
    fn blank_domain_check_keeps_idle() {
        let mut state = state();
        let (render, _) = handle_event(&mut state, &Event::CheckDomain("   ".into()));
        assert!(!render);
        assert_eq!(state.check_status, crate::app::CheckStatus::Idle);
    }

    #[test]
    fn go_back_on_list_is_a_no_op() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::GoBack);
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn quit_emits_quit() {
        let mut state = state();
        assert_eq!(handle_event(&mut state, &Event::Quit), (false, vec![Action::Quit]));
    }

    #[test]
    fn app_store_without_listing_notifies() {
        let mut state = state();
        state.catalog.app_stores = vec![
            AppStoreLink { platform: "华为".into(), url: None },
            AppStoreLink {
                platform: "应用宝".into(),
                url: Some("https://sj.qq.com".into()),
            },
        ];

        let (render, actions) = handle_event(&mut state, &Event::OpenAppStore("华为".into()));
        assert!(render);
        assert!(matches!(&actions[..], [Action::Notify(n)] if n.starts_with("华为")));

        let (_, actions) = handle_event(&mut state, &Event::OpenAppStore("应用宝".into()));
        assert_eq!(actions, vec![Action::OpenUrl("https://sj.qq.com".into())]);
        assert!(state.notice.is_none());

        assert_eq!(handle_event(&mut state, &Event::OpenAppStore("vivo".into())), (false, vec![]));
    }
}
