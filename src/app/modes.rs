//! Filter mode and screen state types for the application.
//!
//! This module defines the enums that control which slice of the record store
//! the user is looking at: the active filter/sort mode and the current screen
//! (the question list or a single question's detail view).

use std::fmt;

/// The active filter/sort mode over the question list.
///
/// Exactly one mode is active at a time. Changing the mode resets pagination
/// to the first page and recomputes the projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Store order, no filtering. The default view.
    #[default]
    All,

    /// Most recently asked first (stable sort by creation time, descending).
    Newest,

    /// Only questions with no answers yet, in store order.
    Unanswered,

    /// Most answered first (stable sort by answer count, descending).
    Active,

    /// Highest voted first (stable sort by vote score, descending).
    Votes,

    /// Most viewed first (stable sort by view count, descending).
    Views,
}

impl FilterMode {
    /// Parses a mode name, falling back to [`FilterMode::All`].
    ///
    /// Unknown names are not an error: the board degrades to the unfiltered
    /// view and logs the rejected input. Matching is case-insensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use stackit_board::app::FilterMode;
    ///
    /// assert_eq!(FilterMode::parse("votes"), FilterMode::Votes);
    /// assert_eq!(FilterMode::parse("bogus"), FilterMode::All);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "all" | "" => Self::All,
            "newest" => Self::Newest,
            "unanswered" => Self::Unanswered,
            "active" => Self::Active,
            "votes" => Self::Votes,
            "views" => Self::Views,
            other => {
                tracing::debug!(mode = %other, "unknown filter mode, falling back to all");
                Self::All
            }
        }
    }

    /// Whether projections under this mode depend on view counts or recency.
    ///
    /// The live update simulator only forces a re-render for these modes;
    /// under any other mode its view-count bumps apply silently.
    #[must_use]
    pub const fn depends_on_views(self) -> bool {
        matches!(self, Self::Newest | Self::Views)
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::All => "all",
            Self::Newest => "newest",
            Self::Unanswered => "unanswered",
            Self::Active => "active",
            Self::Votes => "votes",
            Self::Views => "views",
        };
        write!(f, "{name}")
    }
}

/// Which screen the board is showing.
///
/// The list screen carries the paginated projection; the question screen
/// shows a single record's detail and hides the list until closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// The paginated question list. The default screen.
    #[default]
    List,

    /// Detail view of the question with the given identifier.
    Question(u64),
}
