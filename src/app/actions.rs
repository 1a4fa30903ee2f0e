//! Actions representing side effects to be executed by the host.
//!
//! The event handler never touches the rendering surface or the network
//! directly. After processing an event it returns a list of [`Action`]s;
//! the host executes them in order against its collaborators (render
//! adapter, source layer). This keeps the handler a pure state transformer
//! and the effect boundary explicit.

use crate::source::SourceRequest;

/// Commands for the host to execute after an event is processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Scroll the list container back to the top.
    ///
    /// Emitted on pagination navigation so the user lands at the start of
    /// the new page instead of mid-list.
    ScrollToTop,

    /// Ask the source collaborator to perform a fetch.
    ///
    /// The collaborator reports back via
    /// [`Event::SourceResponse`](crate::app::Event::SourceResponse).
    Fetch(SourceRequest),
}
