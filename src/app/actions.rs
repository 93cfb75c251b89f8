//! Side effects requested by the event handler.
//!
//! The handler never touches the clipboard, the browser or the screen. It
//! returns a list of [`Action`]s and the [`Hub`](crate::app::Hub) executes
//! them through the injected host capabilities, after rendering, in the order
//! they were emitted. None of them is awaited or tracked.

/// Commands to be executed by the host after an event has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Writes text to the system clipboard.
    WriteClipboard(String),

    /// Opens a URL in the external browser (`https:` or `mailto:`).
    OpenUrl(String),

    /// Shows a transient notice ("coming soon", "link copied").
    Notify(String),

    /// Moves the viewport to the given scroll offset.
    ///
    /// Executed after the current view has been rendered, so restoring the
    /// list position applies to the laid-out list and not to the detail page
    /// being left.
    ScrollTo(usize),

    /// Ends the session.
    Quit,
}

/// Builds the `mailto:` URL for a contact address.
///
/// # Examples
///
/// ```
/// use lekutao_hub::app::actions::mailto_url;
///
/// assert_eq!(mailto_url("support@lekutao.cn"), "mailto:support@lekutao.cn");
/// ```
#[must_use]
pub fn mailto_url(address: &str) -> String {
    format!("mailto:{}", address.trim())
}
