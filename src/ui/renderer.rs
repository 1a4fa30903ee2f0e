//! The render adapter seam.
//!
//! Everything the board knows about its display surface is this trait. The
//! host implements it over whatever it renders to; the core calls it with a
//! fresh view model after every state change that needs one, plus the odd
//! imperative nudge (scroll restoration on page navigation).

use crate::ui::viewmodel::BoardViewModel;

/// Rendering collaborator driven by the host's event loop.
///
/// Implementations must reflect every `render` call. The core does not
/// diff view models, it re-derives them, so skipping a call shows stale
/// state.
pub trait Render {
    /// Draws the given view model, replacing whatever was shown before.
    fn render(&mut self, vm: &BoardViewModel);

    /// Scrolls the list container back to its top.
    ///
    /// Requested on pagination navigation (`Action::ScrollToTop`).
    fn scroll_to_top(&mut self);
}
