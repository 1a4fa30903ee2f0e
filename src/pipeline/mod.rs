//! Pure derivation pipeline from the record store to a displayable page.
//!
//! The pipeline has two stages, both side-effect free:
//!
//! ```text
//! RecordStore ── project(records, mode, term) ──▶ projection
//! projection ── paginate(projection, size, page) ──▶ Page (+ page strip)
//! ```
//!
//! [`project`] applies the search term and the filter/sort mode;
//! [`paginate`] slices the result and produces navigation metadata. Both are
//! deterministic functions of their inputs, so every state change can simply
//! re-derive the view instead of patching it.
//!
//! # Modules
//!
//! - [`project`]: search + filter/sort projection
//! - [`paginate`]: page slicing and page-strip metadata

pub mod paginate;
pub mod project;

pub use paginate::{page_strip, paginate, total_pages, Page, PageControl};
pub use project::project;
