#![forbid(unsafe_code)]

//! Palette and shared styles for the site.
//!
//! Colours follow the brand: a deep slate canvas, a single blue accent, and
//! emerald/rose for metric trends.

use autoscale_core::catalog::{IconRef, Trend};
use ftui_render::cell::PackedRgba;
use ftui_style::{Style, StyleFlags};

pub mod bg {
    use super::PackedRgba;

    /// Page canvas.
    pub const DEEP: PackedRgba = PackedRgba::rgb(2, 6, 23);
    /// Navbar, footer, and overlay panels.
    pub const SURFACE: PackedRgba = PackedRgba::rgb(15, 23, 42);
    /// Cards and the focused row.
    pub const RAISED: PackedRgba = PackedRgba::rgb(30, 41, 59);
}

pub mod fg {
    use super::PackedRgba;

    pub const PRIMARY: PackedRgba = PackedRgba::rgb(248, 250, 252);
    pub const SECONDARY: PackedRgba = PackedRgba::rgb(203, 213, 225);
    pub const MUTED: PackedRgba = PackedRgba::rgb(100, 116, 139);
}

pub mod accent {
    use super::PackedRgba;

    pub const PRIMARY: PackedRgba = PackedRgba::rgb(37, 99, 235);
    pub const SOFT: PackedRgba = PackedRgba::rgb(96, 165, 250);
    pub const EMERALD: PackedRgba = PackedRgba::rgb(16, 185, 129);
    pub const ROSE: PackedRgba = PackedRgba::rgb(244, 63, 94);
    pub const PURPLE: PackedRgba = PackedRgba::rgb(168, 85, 247);
    pub const AMBER: PackedRgba = PackedRgba::rgb(245, 158, 11);
}

// ---------------------------------------------------------------------------
// Semantic styles
// ---------------------------------------------------------------------------

pub fn canvas() -> Style {
    Style::new().bg(bg::DEEP).fg(fg::SECONDARY)
}

pub fn bar() -> Style {
    Style::new().bg(bg::SURFACE).fg(fg::SECONDARY)
}

pub fn body() -> Style {
    Style::new().fg(fg::SECONDARY)
}

pub fn muted() -> Style {
    Style::new().fg(fg::MUTED)
}

pub fn heading() -> Style {
    Style::new().fg(fg::PRIMARY).attrs(StyleFlags::BOLD)
}

pub fn eyebrow() -> Style {
    Style::new().fg(accent::SOFT).attrs(StyleFlags::BOLD)
}

pub fn content_border() -> Style {
    Style::new().bg(bg::DEEP).fg(fg::MUTED)
}

pub fn overlay() -> Style {
    Style::new().bg(bg::SURFACE).fg(fg::PRIMARY)
}

/// Nav link; the active page is drawn in the accent colour.
pub fn nav_link(active: bool) -> Style {
    if active {
        Style::new()
            .bg(bg::SURFACE)
            .fg(accent::SOFT)
            .attrs(StyleFlags::BOLD)
    } else {
        Style::new().bg(bg::SURFACE).fg(fg::SECONDARY)
    }
}

/// Primary call-to-action button.
pub fn button_primary() -> Style {
    Style::new()
        .bg(accent::PRIMARY)
        .fg(fg::PRIMARY)
        .attrs(StyleFlags::BOLD)
}

/// Secondary, outlined-looking action.
pub fn button_secondary() -> Style {
    Style::new().fg(accent::SOFT).attrs(StyleFlags::BOLD)
}

/// Wrap any style so a focused control stands out.
pub fn focused(style: Style) -> Style {
    style.attrs(StyleFlags::REVERSE | StyleFlags::BOLD)
}

pub fn trend(trend: Trend) -> Style {
    let color = match trend {
        Trend::Up => accent::EMERALD,
        Trend::Down => accent::ROSE,
    };
    Style::new().fg(color).attrs(StyleFlags::BOLD)
}

pub fn icon(icon: IconRef) -> Style {
    let color = match icon {
        IconRef::MessageSquare => accent::EMERALD,
        IconRef::Mail => accent::SOFT,
        IconRef::Workflow => accent::PURPLE,
        IconRef::Zap => accent::AMBER,
    };
    Style::new().fg(color).attrs(StyleFlags::BOLD)
}

pub fn problem_heading() -> Style {
    Style::new().fg(accent::ROSE).attrs(StyleFlags::BOLD)
}

pub fn solution_heading() -> Style {
    Style::new().fg(accent::EMERALD).attrs(StyleFlags::BOLD)
}

pub fn badge() -> Style {
    Style::new().bg(bg::RAISED).fg(fg::SECONDARY)
}

pub fn stat_value() -> Style {
    Style::new().fg(accent::SOFT).attrs(StyleFlags::BOLD)
}

pub fn code() -> Style {
    Style::new().fg(accent::EMERALD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trends_use_distinct_colours() {
        assert_ne!(trend(Trend::Up), trend(Trend::Down));
    }

    #[test]
    fn focus_changes_style() {
        let base = button_secondary();
        assert_ne!(focused(base), base);
    }

    #[test]
    fn active_link_differs() {
        assert_ne!(nav_link(true), nav_link(false));
    }
}
