//! The hub controller: owns the state and drives the host.
//!
//! [`Hub`] ties [`handle_event`] to the outside world. The host is anything
//! that can draw a view model, move its viewport, write the clipboard, open
//! URLs and show notices. Side effects are fire-and-forget: the hub neither
//! awaits nor tracks them.

use super::handler::{handle_event, Event};
use super::{Action, AppState};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Something the hub can be drawn on.
pub trait Surface {
    /// Draws a full frame.
    fn render(&mut self, view: &UIViewModel, theme: &Theme);

    /// Moves the viewport to `offset` rows from the top.
    fn scroll_to(&mut self, offset: usize);
}

pub trait Clipboard {
    fn write_text(&mut self, text: &str);
}

pub trait Navigator {
    /// Opens `url` (`https:` or `mailto:`) in an external application.
    fn open_url(&mut self, url: &str);
}

pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Event loop controller.
///
/// # Ordering
///
/// [`dispatch`](Self::dispatch) renders before executing actions. Returning
/// from a detail page emits `ScrollTo(saved)`, which must apply to the list
/// that has just been laid out and not to the page being left.
#[derive(Debug)]
pub struct Hub<H> {
    state: AppState,
    host: H,
    running: bool,
}

impl<H> Hub<H>
where
    H: Surface + Clipboard + Navigator + Notifier,
{
    pub const fn new(state: AppState, host: H) -> Self {
        Self {
            state,
            host,
            running: true,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// `false` once a `Quit` action has been executed.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Draws the current state.
    pub fn render(&mut self) {
        let view = self
            .state
            .compute_viewmodel(self.state.viewport_rows, self.state.viewport_cols);
        self.host.render(&view, &self.state.theme);
    }

    /// Handles one event: update state, render if needed, then run actions.
    pub fn dispatch(&mut self, event: &Event) {
        let (should_render, actions) = handle_event(&mut self.state, event);

        if should_render {
            self.render();
        }

        for action in actions {
            self.execute(action);
        }
    }

    fn execute(&mut self, action: Action) {
        tracing::debug!(action = ?action, "executing action");

        match action {
            Action::WriteClipboard(text) => self.host.write_text(&text),
            Action::OpenUrl(url) => self.host.open_url(&url),
            Action::Notify(message) => self.host.notify(&message),
            Action::ScrollTo(offset) => {
                let changed = self.state.scroll_offset != offset;
                self.state.apply_scroll(offset);
                self.host.scroll_to(offset);
                if changed {
                    self.render();
                }
            }
            Action::Quit => {
                tracing::info!("quit requested");
                self.running = false;
            }
        }
    }
}
