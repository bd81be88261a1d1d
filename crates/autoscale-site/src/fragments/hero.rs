#![forbid(unsafe_code)]

//! Landing banner: badge, headline, two calls to action, and the stat strip.

use autoscale_core::compose::ActionItem;
use autoscale_core::content::{HERO, HERO_STATS, Stat};
use ftui_text::{Line, Span, display_width};

use super::{BodyWriter, ButtonKind};
use crate::theme;

pub fn render(w: &mut BodyWriter<'_>, actions: &[ActionItem]) {
    w.eyebrow(&format!("ϟ {}", HERO.badge));
    w.blank();
    w.heading(HERO.headline);
    w.blank();
    w.wrapped(HERO.subhead, theme::body());
    w.blank();

    let buttons: Vec<(&ActionItem, ButtonKind)> = actions
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let kind = if idx == 0 {
                ButtonKind::Primary
            } else {
                ButtonKind::Secondary
            };
            (item, kind)
        })
        .collect();
    w.buttons(&buttons);
    w.blank();

    render_stats(w, HERO_STATS);
}

/// Stats in as many columns as fit: four, two, or one.
fn render_stats(w: &mut BodyWriter<'_>, stats: &[Stat]) {
    let cell = stats
        .iter()
        .map(|s| display_width(s.value) + 1 + display_width(s.label) + 2)
        .max()
        .unwrap_or(1);
    let columns = [4usize, 2]
        .into_iter()
        .find(|&n| n * cell <= w.width())
        .unwrap_or(1);

    for row in stats.chunks(columns) {
        if columns == 1 {
            for stat in row {
                w.hanging(
                    Span::styled(format!("{} ", stat.value), theme::stat_value()),
                    &stat.label.to_uppercase(),
                    theme::muted(),
                );
            }
            continue;
        }
        let mut spans = Vec::with_capacity(row.len() * 3);
        for stat in row {
            let label = stat.label.to_uppercase();
            let used = display_width(stat.value) + 1 + display_width(&label);
            spans.push(Span::styled(stat.value, theme::stat_value()));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(label, theme::muted()));
            spans.push(Span::raw(" ".repeat(cell.saturating_sub(used))));
        }
        // Trailing padding on the last cell would overflow exact-width rows.
        spans.pop();
        w.line(Line::from_spans(spans));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focus::FocusRing;
    use autoscale_core::nav::Page;

    fn hero_text(width: u16) -> String {
        let ring = FocusRing::default();
        let mut w = BodyWriter::new(width, &ring);
        let actions = vec![
            ActionItem::go("Book Free Automation Audit", Page::Contact),
            ActionItem::go("See Real Projects", Page::Projects),
        ];
        render(&mut w, &actions);
        w.finish().to_plain_text()
    }

    #[test]
    fn shows_headline_and_stats() {
        let text = hero_text(100);
        assert!(text.contains("AUTOMATION PROBLEM SOLVER"));
        assert!(text.contains("save businesses time"));
        for stat in HERO_STATS {
            assert!(text.contains(stat.value), "{}", stat.value);
        }
        assert!(text.contains("Book Free Automation Audit"));
    }

    #[test]
    fn stats_fold_into_fewer_columns() {
        let wide = hero_text(120);
        let narrow = hero_text(40);
        let row_with = |text: &str, needle: &str| {
            text.lines()
                .position(|l| l.contains(needle))
                .expect("stat row")
        };
        assert_eq!(row_with(&wide, "50+"), row_with(&wide, "0%"));
        assert_ne!(row_with(&narrow, "50+"), row_with(&narrow, "0% "));
    }
}
