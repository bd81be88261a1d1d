#![forbid(unsafe_code)]

//! Line renderers for body fragments.
//!
//! The body is laid out as one tall column of pre-wrapped [`Line`]s and then
//! drawn through a scrolling [`Paragraph`]. While writing, each activatable
//! control records the line it landed on so the app can scroll focus into
//! view. Controls must be written in the same order
//! [`Fragment::actions`] lists them; the focus ring relies on it.

pub mod case_studies;
pub mod contact;
pub mod hero;
pub mod methodology;
pub mod services;

use autoscale_core::compose::{ActionItem, ComposedView, Fragment};
use ftui_core::geometry::Rect;
use ftui_render::frame::Frame;
use ftui_style::Style;
use ftui_text::{Line, Span, Text, WrapMode, display_width, wrap_text};
use ftui_widgets::Widget;
use ftui_widgets::paragraph::Paragraph;

use crate::focus::{FocusRing, Region};
use crate::theme;

/// How a control is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Primary,
    Secondary,
    /// Muted text link, e.g. "Back to Home".
    Link,
}

impl ButtonKind {
    fn style(self) -> Style {
        match self {
            Self::Primary => theme::button_primary(),
            Self::Secondary => theme::button_secondary(),
            Self::Link => theme::muted(),
        }
    }
}

/// Rendered body plus the line of every control, in focus order.
#[derive(Debug, Clone, Default)]
pub struct BodyText {
    lines: Vec<Line>,
    anchors: Vec<usize>,
}

impl BodyText {
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Line on which the `nth` body control was drawn.
    pub fn anchor(&self, nth: usize) -> Option<usize> {
        self.anchors.get(nth).copied()
    }

    pub fn control_count(&self) -> usize {
        self.anchors.len()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn to_plain_text(&self) -> String {
        self.lines
            .iter()
            .map(Line::to_plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Draw the visible window starting at line `scroll`.
    pub fn render(self, scroll: u16, frame: &mut Frame, area: Rect) {
        if area.is_empty() {
            return;
        }
        Paragraph::new(Text::from_lines(self.lines))
            .scroll((scroll, 0))
            .render(area, frame);
    }
}

/// Accumulates body lines at a fixed width.
pub struct BodyWriter<'f> {
    width: usize,
    focus: &'f FocusRing,
    lines: Vec<Line>,
    anchors: Vec<usize>,
}

impl<'f> BodyWriter<'f> {
    pub fn new(width: u16, focus: &'f FocusRing) -> Self {
        Self {
            width: usize::from(width).max(1),
            focus,
            lines: Vec::new(),
            anchors: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::raw(""));
    }

    pub fn line(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn rule(&mut self) {
        self.lines
            .push(Line::styled("─".repeat(self.width), theme::muted()));
    }

    pub fn heading(&mut self, text: &str) {
        self.wrapped(text, theme::heading());
    }

    pub fn eyebrow(&mut self, text: &str) {
        self.wrapped(&text.to_uppercase(), theme::eyebrow());
    }

    /// Word-wrap `text` to the body width; empty text writes nothing.
    pub fn wrapped(&mut self, text: &str, style: Style) {
        if text.trim().is_empty() {
            return;
        }
        for row in wrap_text(text, self.width, WrapMode::WordChar) {
            self.lines.push(Line::styled(row, style));
        }
    }

    /// Wrap with a lead-in (a number, a glyph) and hang continuation rows
    /// under the text.
    pub fn hanging(&mut self, lead: Span<'_>, text: &str, style: Style) {
        let lead_width = lead.width();
        let avail = self.width.saturating_sub(lead_width).max(1);
        let pad = " ".repeat(lead_width);
        let mut lead = Some(lead);
        for row in wrap_text(text, avail, WrapMode::WordChar) {
            let first = match lead.take() {
                Some(span) => span,
                None => Span::raw(pad.clone()),
            };
            self.lines
                .push(Line::from_spans([first, Span::styled(row, style)]));
        }
        if let Some(span) = lead {
            self.lines.push(Line::from_spans([span]));
        }
    }

    /// Write controls side by side, spilling onto new rows when they don't fit.
    pub fn buttons(&mut self, items: &[(&ActionItem, ButtonKind)]) {
        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut used = 0usize;
        for (item, kind) in items {
            let label = format!(" {} → ", item.label);
            let width = display_width(&label);
            if used > 0 && used + 2 + width > self.width {
                self.lines.push(Line::from_spans(std::mem::take(&mut spans)));
                used = 0;
            }
            if used > 0 {
                spans.push(Span::raw("  "));
                used += 2;
            }
            let nth = self.anchors.len();
            let style = if self.focus.is_focused(Region::Body, nth) {
                theme::focused(kind.style())
            } else {
                kind.style()
            };
            self.anchors.push(self.lines.len());
            spans.push(Span::styled(label, style));
            used += width;
        }
        if !spans.is_empty() {
            self.lines.push(Line::from_spans(spans));
        }
    }

    pub fn button(&mut self, item: &ActionItem, kind: ButtonKind) {
        self.buttons(&[(item, kind)]);
    }

    pub fn finish(self) -> BodyText {
        BodyText {
            lines: self.lines,
            anchors: self.anchors,
        }
    }
}

/// Lay out every body fragment of `view`, top to bottom.
pub fn render_body(view: &ComposedView<'_>, width: u16, focus: &FocusRing) -> BodyText {
    let mut w = BodyWriter::new(width, focus);
    for (idx, fragment) in view.body.iter().enumerate() {
        if idx > 0 {
            w.blank();
            w.rule();
        }
        w.blank();
        match fragment {
            Fragment::Hero { actions } => hero::render(&mut w, actions),
            Fragment::CaseStudyGrid {
                variant,
                cards,
                view_all,
            } => case_studies::render_grid(&mut w, *variant, cards, view_all.as_ref()),
            Fragment::Services { offerings } => services::render_services(&mut w, offerings),
            Fragment::Pricing { plans } => services::render_pricing(&mut w, plans),
            Fragment::Methodology { pillars, manifest } => {
                methodology::render(&mut w, pillars, manifest)
            }
            Fragment::Contact { channels, email } => contact::render(&mut w, channels, email),
            Fragment::CaseStudyDetail(detail) => case_studies::render_detail(&mut w, detail),
        }
    }
    w.blank();
    w.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoscale_core::catalog::Catalog;
    use autoscale_core::compose::compose;
    use autoscale_core::nav::{Navigator, Page};

    fn body_for(nav: &Navigator, width: u16) -> BodyText {
        let view = compose(nav.state(), Catalog::builtin());
        let ring = FocusRing::build(&view, false, None);
        render_body(&view, width, &ring)
    }

    #[test]
    fn control_count_matches_fragment_actions() {
        for &page in Page::ALL {
            let mut nav = Navigator::new();
            nav.go_to(page);
            let view = compose(nav.state(), Catalog::builtin());
            let expected: usize = view.body.iter().map(|f| f.actions().len()).sum();
            assert_eq!(body_for(&nav, 76).control_count(), expected, "{page}");
        }
    }

    #[test]
    fn lines_fit_the_width() {
        for &page in Page::ALL {
            let mut nav = Navigator::new();
            nav.go_to(page);
            for width in [30u16, 60, 118] {
                let body = body_for(&nav, width);
                for line in body.lines() {
                    assert!(
                        line.width() <= usize::from(width),
                        "{page} at {width}: {:?}",
                        line.to_plain_text()
                    );
                }
            }
        }
    }

    #[test]
    fn anchors_are_monotonic() {
        let body = body_for(&Navigator::new(), 76);
        let anchors: Vec<usize> = (0..body.control_count())
            .filter_map(|i| body.anchor(i))
            .collect();
        assert!(anchors.windows(2).all(|w| w[0] <= w[1]));
        assert!(anchors.iter().all(|&a| a < body.height()));
    }

    #[test]
    fn buttons_spill_when_narrow() {
        let ring = FocusRing::default();
        let a = ActionItem::go("Book Free Automation Audit", Page::Contact);
        let b = ActionItem::go("See Real Projects", Page::Projects);

        let mut wide = BodyWriter::new(80, &ring);
        wide.buttons(&[(&a, ButtonKind::Primary), (&b, ButtonKind::Secondary)]);
        assert_eq!(wide.finish().height(), 1);

        let mut narrow = BodyWriter::new(30, &ring);
        narrow.buttons(&[(&a, ButtonKind::Primary), (&b, ButtonKind::Secondary)]);
        let narrow = narrow.finish();
        assert_eq!(narrow.height(), 2);
        assert_eq!(narrow.anchor(1), Some(1));
    }

    #[test]
    fn hanging_indent_aligns_continuations() {
        let ring = FocusRing::default();
        let mut w = BodyWriter::new(20, &ring);
        w.hanging(
            Span::raw(" 1. "),
            "a fairly long step description that wraps",
            Style::new(),
        );
        let body = w.finish();
        assert!(body.height() > 1);
        let text = body.to_plain_text();
        let mut rows = text.lines();
        assert!(rows.next().is_some_and(|r| r.starts_with(" 1. ")));
        assert!(rows.all(|r| r.starts_with("    ")));
    }
}
