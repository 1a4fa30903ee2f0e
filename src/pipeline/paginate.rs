//! Page slicing and navigation metadata.
//!
//! The second pipeline stage: given a projection, a page size, and a
//! requested page number, produce the visible slice plus everything a
//! renderer needs to draw a pager: total pages, the clamped current page,
//! and a page-number strip with ellipsis collapsing.

use crate::domain::Question;

/// How many neighbors of the current page the strip shows on each side.
const STRIP_NEIGHBORS: usize = 2;

/// One page of the projection, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// The visible slice, at most `page_size` records.
    pub items: Vec<Question>,

    /// Total page count; 0 for an empty projection.
    pub total_pages: usize,

    /// The clamped page number actually shown. Always ≥ 1, even when the
    /// projection is empty and there is nothing to show.
    pub current_page: usize,
}

/// One control in the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    /// The "previous page" chevron; disabled on the first page.
    Previous {
        /// Whether navigating backwards is possible.
        enabled: bool,
    },

    /// A concrete page number.
    Number {
        /// 1-based page number.
        page: usize,
        /// Whether this is the page being shown.
        current: bool,
    },

    /// A collapsed run of page numbers.
    Ellipsis,

    /// The "next page" chevron; disabled on the last page.
    Next {
        /// Whether navigating forwards is possible.
        enabled: bool,
    },
}

/// Total page count for a projection of `len` records.
///
/// Ceiling division; 0 when the projection is empty. A zero page size is
/// treated as "nothing fits" and also yields 0 rather than dividing by zero
/// (configuration validation rejects it upstream).
#[must_use]
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    (len + page_size - 1) / page_size
}

/// Clamps a requested page number into `[1, max(1, total)]`.
///
/// Out-of-range requests (including page 0) are silently clamped rather
/// than rejected.
#[must_use]
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, total.max(1))
}

/// Slices one page out of the projection.
///
/// The requested page is clamped first, so callers can pass through raw
/// navigation input. An empty projection produces an empty page with
/// `total_pages = 0`; rendering an explicit empty state is the caller's
/// business, not an error.
///
/// # Examples
///
/// ```
/// use stackit_board::pipeline::paginate;
/// use stackit_board::store::seed::sample_questions;
///
/// let projection = sample_questions(1_700_000_000).unwrap();
/// let page = paginate(&projection, 5, 1);
/// assert_eq!(page.items.len(), 5);
/// assert_eq!(page.total_pages, 2);
/// ```
#[must_use]
pub fn paginate(projection: &[Question], page_size: usize, page: usize) -> Page {
    let total = total_pages(projection.len(), page_size);
    let current = clamp_page(page, total);

    if total == 0 {
        return Page {
            items: Vec::new(),
            total_pages: 0,
            current_page: current,
        };
    }

    let start = (current - 1) * page_size;
    let end = (start + page_size).min(projection.len());

    Page {
        items: projection[start..end].to_vec(),
        total_pages: total,
        current_page: current,
    }
}

/// Builds the page-number strip for a pager.
///
/// Always shows the first and last page and the current page ± 2; every
/// other run of pages collapses into a single [`PageControl::Ellipsis`].
/// Previous/next controls are always present but disabled at their
/// boundary. With one page or none there is nothing to navigate, so the
/// strip is empty and no pager is rendered.
#[must_use]
pub fn page_strip(current: usize, total: usize) -> Vec<PageControl> {
    if total <= 1 {
        return Vec::new();
    }

    let mut strip = vec![PageControl::Previous {
        enabled: current > 1,
    }];

    for page in 1..=total {
        let near_current = page + STRIP_NEIGHBORS >= current && page <= current + STRIP_NEIGHBORS;

        if page == 1 || page == total || near_current {
            strip.push(PageControl::Number {
                page,
                current: page == current,
            });
        } else if page + STRIP_NEIGHBORS + 1 == current || page == current + STRIP_NEIGHBORS + 1 {
            strip.push(PageControl::Ellipsis);
        }
    }

    strip.push(PageControl::Next {
        enabled: current < total,
    });

    strip
}

#[cfg(test)]
#[path = "paginate_tests.rs"]
mod tests;
