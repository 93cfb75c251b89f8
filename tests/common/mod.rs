#![allow(dead_code)]

use lekutao_hub::app::{Clipboard, Hub, Navigator, Notifier, Surface};
use lekutao_hub::ui::{PageView, Theme, UIViewModel};
use lekutao_hub::{initialize, Config};

/// Everything the hub asked the host to do, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Render(Frame),
    ScrollTo(usize),
    Clipboard(String),
    OpenUrl(String),
    Notify(String),
}

/// The parts of a rendered view model the tests care about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    List { labels: Vec<String> },
    Detail { title: String },
}

#[derive(Debug, Default)]
pub struct RecordingHost {
    pub calls: Vec<HostCall>,
}

impl RecordingHost {
    pub fn take(&mut self) -> Vec<HostCall> {
        std::mem::take(&mut self.calls)
    }
}

impl Surface for RecordingHost {
    fn render(&mut self, view: &UIViewModel, _theme: &Theme) {
        let frame = match &view.page {
            PageView::List { items, .. } => Frame::List {
                labels: items.iter().map(|i| i.label.clone()).collect(),
            },
            PageView::Detail(detail) => Frame::Detail {
                title: detail.title.clone(),
            },
        };
        self.calls.push(HostCall::Render(frame));
    }

    fn scroll_to(&mut self, offset: usize) {
        self.calls.push(HostCall::ScrollTo(offset));
    }
}

impl Clipboard for RecordingHost {
    fn write_text(&mut self, text: &str) {
        self.calls.push(HostCall::Clipboard(text.to_string()));
    }
}

impl Navigator for RecordingHost {
    fn open_url(&mut self, url: &str) {
        self.calls.push(HostCall::OpenUrl(url.to_string()));
    }
}

impl Notifier for RecordingHost {
    fn notify(&mut self, message: &str) {
        self.calls.push(HostCall::Notify(message.to_string()));
    }
}

pub fn hub_with(config: &Config) -> Hub<RecordingHost> {
    let state = initialize(config).unwrap();
    Hub::new(state, RecordingHost::default())
}

pub fn hub() -> Hub<RecordingHost> {
    hub_with(&Config::default())
}
