//! Plain-text render adapter.
//!
//! Writes the view model as lines of text to any `io::Write`. Useful for
//! smoke-testing a host wiring and for inspecting board state in tests
//! without a real surface. Write errors are swallowed: a display that has
//! gone away is not the board's problem.

use crate::pipeline::PageControl;
use crate::ui::renderer::Render;
use crate::ui::viewmodel::BoardViewModel;
use std::io::Write;

/// Render adapter emitting plain text.
#[derive(Debug)]
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the renderer, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_strip(&mut self, strip: &[PageControl]) {
        if strip.is_empty() {
            return;
        }

        let mut parts = Vec::with_capacity(strip.len());
        for control in strip {
            let part = match control {
                PageControl::Previous { enabled } => {
                    if *enabled { "<".to_string() } else { "(<)".to_string() }
                }
                PageControl::Number { page, current } => {
                    if *current {
                        format!("[{page}]")
                    } else {
                        page.to_string()
                    }
                }
                PageControl::Ellipsis => "...".to_string(),
                PageControl::Next { enabled } => {
                    if *enabled { ">".to_string() } else { "(>)".to_string() }
                }
            };
            parts.push(part);
        }

        let _ = writeln!(self.out, "pages: {}", parts.join(" "));
    }
}

impl<W: Write> Render for TextRenderer<W> {
    fn render(&mut self, vm: &BoardViewModel) {
        if let Some(user) = &vm.user {
            let _ = writeln!(self.out, "signed in as {user}");
        }

        if let Some(notification) = &vm.notification {
            let _ = writeln!(self.out, "[{}] {}", notification.severity, notification.message);
        }

        if let Some(overlay) = vm.overlay {
            let _ = writeln!(self.out, "overlay: {overlay}");
        }

        if let Some(detail) = &vm.detail {
            let _ = writeln!(self.out, "# {}", detail.title);
            let _ = writeln!(self.out, "{}", detail.excerpt);
            let _ = writeln!(
                self.out,
                "by {} | {} votes | {} answers | {} views | {}",
                detail.author, detail.votes, detail.answers, detail.views,
                detail.tags.join(", ")
            );
            return;
        }

        if let Some(empty) = &vm.empty_state {
            let _ = writeln!(self.out, "{}", empty.message);
            let _ = writeln!(self.out, "{}", empty.subtitle);
            return;
        }

        for card in &vm.cards {
            let _ = writeln!(
                self.out,
                "{:>3}v {:>2}a {:>4}x  {}  [{}] by {} ({})",
                card.votes,
                card.answers,
                card.views,
                card.title,
                card.tags.join(", "),
                card.author,
                card.age
            );
        }

        self.write_strip(&vm.page_strip);
    }

    fn scroll_to_top(&mut self) {
        let _ = writeln!(self.out, "-- top --");
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
