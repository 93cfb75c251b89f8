mod common;

use common::{hub, Frame, HostCall};
use lekutao_hub::app::{Event, View};

fn scroll_list_to_five(hub: &mut lekutao_hub::Hub<common::RecordingHost>) {
    // 24-row viewport leaves 16 list rows; cursor 20 drags the window to 5.
    for _ in 0..20 {
        hub.dispatch(&Event::CursorDown);
    }
    assert_eq!(hub.state().scroll_offset, 5);
    hub.host_mut().take();
}

#[test]
fn selecting_an_article_renders_detail_then_scrolls_to_top() {
    let mut hub = hub();
    scroll_list_to_five(&mut hub);

    hub.dispatch(&Event::SelectArticle("售后服务".into()));

    assert_eq!(
        hub.host_mut().take(),
        vec![
            HostCall::Render(Frame::Detail {
                title: "售后服务".into()
            }),
            HostCall::ScrollTo(0),
        ]
    );
    assert_eq!(hub.state().saved_scroll_offset, 5);
    assert!(hub.state().selected_article().is_some());
}

#[test]
fn going_back_restores_list_offset_after_the_list_is_rendered() {
    let mut hub = hub();
    scroll_list_to_five(&mut hub);
    hub.dispatch(&Event::SelectArticle("售后服务".into()));
    hub.dispatch(&Event::ScrollBy(3));
    hub.host_mut().take();

    hub.dispatch(&Event::GoBack);

    let calls = hub.host_mut().take();
    assert_eq!(calls.len(), 3, "{calls:?}");
    assert!(matches!(&calls[0], HostCall::Render(Frame::List { .. })));
    assert_eq!(calls[1], HostCall::ScrollTo(5));
    assert!(matches!(&calls[2], HostCall::Render(Frame::List { .. })));

    assert_eq!(hub.state().view, View::List);
    assert_eq!(hub.state().scroll_offset, 5);
}

#[test]
fn list_offset_survives_any_detail_scrolling() {
    for detail_scroll in [0_isize, 1, 7, 120] {
        let mut hub = hub();
        scroll_list_to_five(&mut hub);

        hub.dispatch(&Event::SelectPlatform("メルカリ".into()));
        assert_eq!(hub.state().scroll_offset, 0);
        hub.dispatch(&Event::ScrollBy(detail_scroll));
        hub.dispatch(&Event::GoBack);

        assert_eq!(hub.state().scroll_offset, 5, "detail scroll {detail_scroll}");
        assert_eq!(hub.state().cursor, 20);
    }
}

#[test]
fn selection_and_view_always_agree() {
    let mut hub = hub();
    let script = [
        Event::SelectArticle("免责声明".into()),
        Event::SelectPlatform("メルカリ".into()),
        Event::GoBack,
        Event::SelectPlatform("ヤフオク".into()),
        Event::SelectArticle("售后服务".into()),
        Event::ScrollBy(2),
        Event::GoBack,
        Event::GoBack,
        Event::SelectPlatform("ZOZOTOWN".into()),
        Event::CursorDown,
        Event::SelectEntry,
        Event::GoBack,
        Event::SelectArticle("不存在的文章".into()),
    ];

    for event in &script {
        hub.dispatch(event);
        let state = hub.state();
        match state.view {
            View::List => {
                assert!(state.selected_article().is_none());
                assert!(state.selected_platform().is_none());
            }
            View::ArticleDetail(_) => {
                assert!(state.selected_article().is_some());
                assert!(state.selected_platform().is_none());
            }
            View::PlatformDetail(_) => {
                assert!(state.selected_platform().is_some());
                assert!(state.selected_article().is_none());
            }
        }
    }
}

#[test]
fn detail_selection_is_ignored_while_in_detail() {
    let mut hub = hub();
    hub.dispatch(&Event::SelectArticle("免责声明".into()));
    hub.host_mut().take();

    hub.dispatch(&Event::SelectPlatform("メルカリ".into()));

    assert!(hub.host_mut().take().is_empty());
    assert_eq!(
        hub.state().selected_article().map(|a| a.title.as_str()),
        Some("免责声明")
    );
}

#[test]
fn platform_without_page_only_notifies() {
    let mut hub = hub();
    hub.host_mut().take();

    hub.dispatch(&Event::SelectPlatform("ZOZOTOWN".into()));

    let calls = hub.host_mut().take();
    assert!(matches!(&calls[0], HostCall::Render(Frame::List { .. })));
    assert_eq!(
        calls[1],
        HostCall::Notify("ZOZOTOWN 功能即将上线，敬请期待！".into())
    );
    assert_eq!(hub.state().view, View::List);
}

#[test]
fn platform_with_page_opens_its_reference() {
    let mut hub = hub();
    hub.dispatch(&Event::SelectPlatform("ヤフオク".into()));
    hub.host_mut().take();

    hub.dispatch(&Event::OpenReference);

    assert_eq!(
        hub.host_mut().take(),
        vec![HostCall::OpenUrl("https://auctions.yahoo.co.jp".into())]
    );
}

#[test]
fn quit_stops_the_hub() {
    let mut hub = hub();
    assert!(hub.is_running());
    hub.dispatch(&Event::Quit);
    assert!(!hub.is_running());
}
