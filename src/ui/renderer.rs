//! Frame rendering entry point.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render_viewmodel → ANSI on stdout
//! ```

use crate::ui::components;
use crate::ui::helpers::clear_screen;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;
use std::io::Write;

/// Clears the screen, draws a pre-computed view model and flushes stdout.
pub fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    clear_screen();
    components::render_page(vm, theme, cols, rows);
    print!("{}", Theme::reset());

    if let Err(e) = std::io::stdout().flush() {
        tracing::warn!(error = %e, "failed to flush frame");
    }
}
