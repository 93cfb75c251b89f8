//! Host capabilities backed by the terminal.

use base64::{engine::general_purpose, Engine as _};
use lekutao_hub::app::{Clipboard, Navigator, Notifier, Surface};
use lekutao_hub::infrastructure;
use lekutao_hub::ui::{self, Theme, UIViewModel};
use std::io::Write;

#[derive(Debug)]
pub struct TerminalHost {
    pub rows: usize,
    pub cols: usize,
    /// Last text written to the clipboard.
    pub clipboard: Option<String>,
}

impl TerminalHost {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            clipboard: None,
        }
    }
}

impl Surface for TerminalHost {
    fn render(&mut self, view: &UIViewModel, theme: &Theme) {
        ui::render_viewmodel(view, theme, self.rows, self.cols);
    }

    fn scroll_to(&mut self, offset: usize) {
        tracing::trace!(offset, "viewport scrolled");
    }
}

impl Clipboard for TerminalHost {
    /// OSC 52, understood by most terminal emulators and multiplexers.
    fn write_text(&mut self, text: &str) {
        let encoded = general_purpose::STANDARD.encode(text);
        print!("\u{1b}]52;c;{encoded}\u{7}");
        if let Err(e) = std::io::stdout().flush() {
            tracing::warn!(error = %e, "clipboard write failed");
        }
        self.clipboard = Some(text.to_string());
    }
}

impl Navigator for TerminalHost {
    fn open_url(&mut self, url: &str) {
        if let Err(e) = infrastructure::open_url(url) {
            tracing::warn!(%url, error = %e, "could not open url");
        }
    }
}

impl Notifier for TerminalHost {
    fn notify(&mut self, message: &str) {
        tracing::info!(%message, "notice");
        print!("\u{7}");
    }
}
