//! Maps stdin lines to hub events.
//!
//! In search mode a plain line replaces the query; prefix a command with `:`
//! to run it instead (`:j`, `:q`). Queries are taken verbatim, so a line of
//! spaces searches for spaces; only an empty line opens the row under the cursor.

use lekutao_hub::app::{AppState, Event, InputMode};

/// Events for one input line, or `None` if the line is not a command.
pub fn map_line(state: &AppState, line: &str) -> Option<Vec<Event>> {
    let line = line.trim_end_matches(['\r', '\n']);

    if state.view.is_list() && state.input_mode == InputMode::Search {
        if line.is_empty() {
            return Some(vec![Event::SelectEntry]);
        }
        if line.trim() == "esc" {
            return Some(vec![Event::ExitSearch]);
        }
        return line.strip_prefix(':').map_or_else(
            || Some(vec![Event::SetQuery(line.to_string())]),
            |command| map_command(state, command),
        );
    }

    if let Some(query) = line.trim_start().strip_prefix('/').filter(|query| !query.is_empty()) {
        return Some(vec![Event::EnterSearch, Event::SetQuery(query.to_string())]);
    }

    map_command(state, line)
}

fn map_command(state: &AppState, line: &str) -> Option<Vec<Event>> {
    let line = line.trim();
    let (command, arg) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(c, a)| (c, a.trim()));
    let page = isize::try_from(state.page_step().max(1)).unwrap_or(1);
    let in_list = state.view.is_list();

    let event = match (command, arg.is_empty()) {
        ("j" | "down", true) if in_list => Event::CursorDown,
        ("k" | "up", true) if in_list => Event::CursorUp,
        ("j" | "down", true) => Event::ScrollBy(1),
        ("k" | "up", true) => Event::ScrollBy(-1),
        ("J" | "pgdn", true) => Event::ScrollBy(page),
        ("K" | "pgup", true) => Event::ScrollBy(-page),
        ("" | "enter", true) => Event::SelectEntry,
        ("/", true) => Event::EnterSearch,
        ("esc", true) => Event::ExitSearch,
        ("b" | "back", true) => Event::GoBack,
        ("y", true) => Event::CopyPageLink,
        ("s", true) => Event::ContactSupport,
        ("o", true) => Event::OpenReference,
        ("q" | "quit", true) => Event::Quit,
        ("a", false) => Event::SelectArticle(arg.to_string()),
        ("p", false) => Event::SelectPlatform(arg.to_string()),
        ("c", false) => Event::CheckDomain(arg.to_string()),
        ("l", false) => Event::OpenLink(arg.to_string()),
        ("store", false) => Event::OpenAppStore(arg.to_string()),
        ("copy", false) => Event::CopyEmail(arg.to_string()),
        ("mail", false) => Event::MailTo(arg.to_string()),
        ("size", false) => {
            let (rows, cols) = arg.split_once(char::is_whitespace)?;
            Event::Resize {
                rows: rows.trim().parse().ok()?,
                cols: cols.trim().parse().ok()?,
            }
        }
        _ => return None,
    };

    Some(vec![event])
}

#[cfg(test)]
mod tests {
    use super::*;
    use lekutao_hub::app::handle_event;
    use lekutao_hub::domain::Catalog;
    use lekutao_hub::ui::Theme;

    fn state() -> AppState {
        AppState::new(Catalog::builtin().unwrap(), Theme::default())
    }

    #[test]
    fn list_keys_move_cursor() {
        let state = state();
        assert_eq!(map_line(&state, "j"), Some(vec![Event::CursorDown]));
        assert_eq!(map_line(&state, "k\n"), Some(vec![Event::CursorUp]));
        assert_eq!(map_line(&state, ""), Some(vec![Event::SelectEntry]));
    }

    #[test]
    fn detail_keys_scroll() {
        let mut state = state();
        handle_event(&mut state, &Event::SelectArticle("售后服务".into()));
        assert_eq!(map_line(&state, "j"), Some(vec![Event::ScrollBy(1)]));
        assert_eq!(map_line(&state, "b"), Some(vec![Event::GoBack]));
    }

    #[test]
    fn commands_with_arguments() {
        let state = state();
        assert_eq!(
            map_line(&state, "c  flypixes.click "),
            Some(vec![Event::CheckDomain("flypixes.click".into())])
        );
        assert_eq!(
            map_line(&state, "p メルカリ"),
            Some(vec![Event::SelectPlatform("メルカリ".into())])
        );
        assert_eq!(
            map_line(&state, "size 40 120"),
            Some(vec![Event::Resize { rows: 40, cols: 120 }])
        );
        assert_eq!(map_line(&state, "size 40"), None);
    }

    #[test]
    fn slash_prefix_starts_search() {
        let state = state();
        assert_eq!(
            map_line(&state, "/退款"),
            Some(vec![Event::EnterSearch, Event::SetQuery("退款".into())])
        );
        assert_eq!(map_line(&state, "/"), Some(vec![Event::EnterSearch]));
        assert_eq!(
            map_line(&state, "/  "),
            Some(vec![Event::EnterSearch, Event::SetQuery("  ".into())])
        );
    }

    #[test]
    fn whitespace_line_in_search_mode_is_a_query() {
        let mut state = state();
        handle_event(&mut state, &Event::EnterSearch);
        assert_eq!(map_line(&state, "  "), Some(vec![Event::SetQuery("  ".into())]));
        assert_eq!(map_line(&state, "\n"), Some(vec![Event::SelectEntry]));
        assert_eq!(map_line(&state, " 运费 "), Some(vec![Event::SetQuery(" 运费 ".into())]));
    }

    #[test]
    fn detail_pages_keep_the_marker_row_when_paging() {
        let mut state = state();
        let list_page = isize::try_from(state.page_rows()).unwrap();
        assert_eq!(map_line(&state, "J"), Some(vec![Event::ScrollBy(list_page)]));

        handle_event(&mut state, &Event::SelectArticle("售后服务".into()));
        assert_eq!(map_line(&state, "J"), Some(vec![Event::ScrollBy(list_page - 1)]));
        assert_eq!(map_line(&state, "K"), Some(vec![Event::ScrollBy(1 - list_page)]));
    }

    #[test]
    fn search_mode_lines_are_queries() {
        let mut state = state();
        handle_event(&mut state, &Event::EnterSearch);
        assert_eq!(map_line(&state, "运费"), Some(vec![Event::SetQuery("运费".into())]));
        assert_eq!(map_line(&state, ":j"), Some(vec![Event::CursorDown]));
        assert_eq!(map_line(&state, "esc"), Some(vec![Event::ExitSearch]));
    }

    #[test]
    fn unknown_line_is_none() {
        assert_eq!(map_line(&state(), "launch rockets"), None);
    }
}
