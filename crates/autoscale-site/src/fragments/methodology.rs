#![forbid(unsafe_code)]

//! "How it Works": the three pillars and a sample workflow manifest.

use autoscale_core::content::{METHODOLOGY, Pillar};
use ftui_text::Span;

use super::BodyWriter;
use crate::theme;

const PILLAR_GLYPHS: [&str; 3] = ["⛨", "⛁", "▤"];

pub fn render(w: &mut BodyWriter<'_>, pillars: &[Pillar], manifest: &[&str]) {
    w.eyebrow(METHODOLOGY.tagline);
    w.heading(METHODOLOGY.title);

    for (idx, pillar) in pillars.iter().enumerate() {
        let glyph = PILLAR_GLYPHS[idx % PILLAR_GLYPHS.len()];
        w.blank();
        w.hanging(
            Span::styled(format!(" {glyph} "), theme::eyebrow()),
            pillar.title,
            theme::heading(),
        );
        w.hanging(Span::raw("   "), pillar.body, theme::muted());
    }

    w.blank();
    w.hanging(Span::styled(" ● ● ● ", theme::muted()), "manifest.json", theme::muted());
    for row in manifest {
        let body = row.trim_start();
        let indent = row.len() - body.len();
        w.hanging(
            Span::raw(" ".repeat(indent + 2)),
            body,
            theme::code(),
        );
    }
}
