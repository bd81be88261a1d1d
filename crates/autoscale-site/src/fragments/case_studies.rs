#![forbid(unsafe_code)]

//! Case-study grid cards and the full detail page.

use autoscale_core::catalog::Metric;
use autoscale_core::compose::{ActionItem, CaseCard, DetailView, GridVariant};
use autoscale_core::content::DETAIL_CTA;
use ftui_text::{Line, Span, display_width};

use super::{BodyWriter, ButtonKind};
use crate::theme;

pub fn render_grid(
    w: &mut BodyWriter<'_>,
    variant: GridVariant,
    cards: &[CaseCard<'_>],
    view_all: Option<&ActionItem>,
) {
    let copy = variant.copy();
    w.heading(copy.title);
    w.wrapped(copy.tagline, theme::muted());
    if let Some(item) = view_all {
        w.button(item, ButtonKind::Link);
    }

    for card in cards {
        w.blank();
        w.eyebrow(&card.study.category);
        w.heading(&card.study.title);
        w.wrapped(&card.study.short_desc, theme::body());
        if !card.metrics.is_empty() {
            w.blank();
            render_metric_row(w, card.metrics, false);
        }
        w.blank();
        w.button(&card.open, ButtonKind::Secondary);
    }
}

pub fn render_detail(w: &mut BodyWriter<'_>, detail: &DetailView<'_>) {
    w.button(&detail.back, ButtonKind::Link);
    w.blank();
    w.eyebrow("Case Study");

    if detail.is_placeholder() {
        let note = match detail.requested_id() {
            Some(id) => format!("No case study named \"{id}\"."),
            None => "No case study selected.".to_string(),
        };
        w.wrapped(&note, theme::muted());
    } else {
        w.heading(detail.title());
        w.wrapped(detail.short_desc(), theme::muted());
        w.blank();
        render_metric_row(w, detail.metrics(), true);

        w.blank();
        w.line(Line::styled("✖ The Business Problem", theme::problem_heading()));
        w.wrapped(detail.problem(), theme::body());

        w.blank();
        w.line(Line::styled("✔ The Automation Solution", theme::solution_heading()));
        w.wrapped(detail.solution(), theme::body());

        w.blank();
        w.line(Line::styled("⇄ Workflow Architecture", theme::heading()));
        for (n, step) in detail.numbered_steps() {
            w.hanging(
                Span::styled(format!(" {n:>2}. "), theme::stat_value()),
                step,
                theme::body(),
            );
        }

        w.blank();
        w.line(Line::styled("Tools & Stack", theme::heading()));
        render_badges(w, detail.tools());

        if let Some(url) = detail.video_link() {
            w.blank();
            w.hanging(Span::styled("▶ Walkthrough: ", theme::eyebrow()), url, theme::muted());
        }
    }

    w.blank();
    w.rule();
    w.blank();
    w.heading(DETAIL_CTA.title);
    w.wrapped(DETAIL_CTA.tagline, theme::muted());
    w.blank();
    w.button(&detail.cta, ButtonKind::Primary);
}

/// Metrics side by side, one per row when they don't fit.
fn render_metric_row(w: &mut BodyWriter<'_>, metrics: &[Metric], with_trend: bool) {
    let cells: Vec<Vec<Span<'static>>> = metrics
        .iter()
        .map(|m| {
            let mut spans = vec![
                Span::styled(m.value.clone(), theme::heading()),
                Span::raw(" "),
            ];
            if with_trend {
                spans.push(Span::styled(m.trend.glyph(), theme::trend(m.trend)));
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(m.label.to_uppercase(), theme::muted()));
            spans
        })
        .collect();

    let width_of = |spans: &[Span<'static>]| spans.iter().map(Span::width).sum::<usize>();
    let total: usize = cells.iter().map(|c| width_of(c)).sum::<usize>()
        + cells.len().saturating_sub(1) * 3;

    if total <= w.width() {
        let mut row = Vec::new();
        for (idx, cell) in cells.into_iter().enumerate() {
            if idx > 0 {
                row.push(Span::styled(" · ", theme::muted()));
            }
            row.extend(cell);
        }
        w.line(Line::from_spans(row));
        return;
    }

    for metric in metrics {
        let mut lead = format!("{} ", metric.value);
        if with_trend {
            lead.push_str(metric.trend.glyph());
            lead.push(' ');
        }
        let style = if with_trend {
            theme::trend(metric.trend)
        } else {
            theme::heading()
        };
        w.hanging(Span::styled(lead, style), &metric.label.to_uppercase(), theme::muted());
    }
}

/// Tool names as inline badges, wrapping at the body width.
fn render_badges(w: &mut BodyWriter<'_>, tools: &[String]) {
    let mut row: Vec<Span<'static>> = Vec::new();
    let mut used = 0usize;
    for tool in tools {
        let badge = format!(" {tool} ");
        let width = display_width(&badge);
        if used > 0 && used + 1 + width > w.width() {
            w.line(Line::from_spans(std::mem::take(&mut row)));
            used = 0;
        }
        if used > 0 {
            row.push(Span::raw(" "));
            used += 1;
        }
        row.push(Span::styled(badge, theme::badge()));
        used += width;
    }
    if !row.is_empty() {
        w.line(Line::from_spans(row));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focus::FocusRing;
    use autoscale_core::catalog::Catalog;
    use autoscale_core::compose::compose;
    use autoscale_core::nav::{Navigator, Page};

    fn detail_text(nav: &Navigator, width: u16) -> String {
        let view = compose(nav.state(), Catalog::builtin());
        let ring = FocusRing::default();
        let mut w = BodyWriter::new(width, &ring);
        render_detail(&mut w, view.detail().expect("detail page"));
        w.finish().to_plain_text()
    }

    #[test]
    fn detail_lists_every_metric_with_trend() {
        let mut nav = Navigator::new();
        nav.open_case_study("lead-nurture");
        let text = detail_text(&nav, 100);
        let study = Catalog::builtin().find("lead-nurture").expect("builtin study");
        for metric in &study.metrics {
            assert!(text.contains(&metric.value), "{}", metric.value);
            assert!(text.contains(&metric.label.to_uppercase()), "{}", metric.label);
        }
        assert!(text.contains('▲'));
        assert!(text.contains('▼'));
    }

    #[test]
    fn detail_numbers_steps_from_one() {
        let mut nav = Navigator::new();
        nav.open_case_study("lead-nurture");
        let text = detail_text(&nav, 100);
        assert!(text.contains("  1. "));
        assert!(text.contains("  5. "));
        assert!(!text.contains("  6. "));
        assert!(!text.contains("  0. "));
    }

    #[test]
    fn video_link_only_when_real() {
        let mut nav = Navigator::new();
        nav.open_case_study("lead-nurture");
        assert!(detail_text(&nav, 100).contains("Walkthrough"));
        nav.open_case_study("medicine-reminder");
        assert!(!detail_text(&nav, 100).contains("Walkthrough"));
    }

    #[test]
    fn placeholder_detail_renders_without_fields() {
        let mut nav = Navigator::new();
        nav.go_to(Page::ProjectDetail);
        let text = detail_text(&nav, 80);
        assert!(text.contains("No case study selected."));
        assert!(!text.contains("The Business Problem"));
        assert!(text.contains("Back to Home"));
        assert!(text.contains("Book My Free Audit"));
    }

    #[test]
    fn home_cards_show_two_metrics_only() {
        let view = compose(Navigator::new().state(), Catalog::builtin());
        let ring = FocusRing::default();
        let mut w = BodyWriter::new(100, &ring);
        let Some(autoscale_core::compose::Fragment::CaseStudyGrid {
            variant,
            cards,
            view_all,
        }) = view.body.get(1)
        else {
            panic!("home grid expected");
        };
        render_grid(&mut w, *variant, cards, view_all.as_ref());
        let text = w.finish().to_plain_text();
        let study = &Catalog::builtin().list_case_studies()[0];
        assert!(text.contains(&study.metrics[0].label.to_uppercase()));
        assert!(text.contains(&study.metrics[1].label.to_uppercase()));
        assert!(!text.contains(&study.metrics[2].label.to_uppercase()));
        assert!(text.contains("View All Projects"));
    }
}
