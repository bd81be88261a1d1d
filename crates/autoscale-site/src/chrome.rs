#![forbid(unsafe_code)]

//! Page chrome: navbar, footer, collapsed menu, and the help overlay.

use autoscale_core::compose::{ActionItem, FooterView, NavbarView};
use autoscale_core::content::BRAND;
use autoscale_core::nav::{Action, Page};
use ftui_core::geometry::Rect;
use ftui_render::frame::Frame;
use ftui_style::Style;
use ftui_text::{Line, Span, Text, display_width};
use ftui_widgets::Widget;
use ftui_widgets::block::{Alignment, Block};
use ftui_widgets::borders::{BorderType, Borders};
use ftui_widgets::paragraph::Paragraph;

use crate::focus::{FocusRing, Region, menu_toggle};
use crate::theme;

/// One row of the help overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpEntry {
    pub key: &'static str,
    pub action: &'static str,
}

/// Global keybindings, in help-overlay order.
pub const KEYBINDINGS: &[HelpEntry] = &[
    HelpEntry {
        key: "1-5",
        action: "Jump to a navbar page",
    },
    HelpEntry {
        key: "Tab / j",
        action: "Focus next control",
    },
    HelpEntry {
        key: "S-Tab / k",
        action: "Focus previous control",
    },
    HelpEntry {
        key: "Enter",
        action: "Activate focused control",
    },
    HelpEntry {
        key: "↑ ↓ PgUp PgDn",
        action: "Scroll the page",
    },
    HelpEntry {
        key: "Home / End",
        action: "Jump to top / bottom",
    },
    HelpEntry {
        key: "m",
        action: "Toggle the menu",
    },
    HelpEntry {
        key: "Esc / b",
        action: "Close menu, or back to Home",
    },
    HelpEntry {
        key: "?",
        action: "Toggle this help",
    },
    HelpEntry {
        key: "q / Ctrl+C",
        action: "Quit",
    },
];

fn control_style(base: Style, focused: bool) -> Style {
    if focused { theme::focused(base) } else { base }
}

/// Draw the wordmark, then the links or, when `collapsed`, the menu toggle.
pub fn render_navbar(
    navbar: &NavbarView,
    collapsed: bool,
    focus: &FocusRing,
    frame: &mut Frame,
    area: Rect,
) {
    Paragraph::new("").style(theme::bar()).render(area, frame);
    if area.is_empty() {
        return;
    }

    let brand_style = control_style(theme::heading(), focus.is_focused(Region::Navbar, 0));
    let accent_style = control_style(
        Style::new().fg(theme::accent::SOFT).bold(),
        focus.is_focused(Region::Navbar, 0),
    );
    let brand = Line::from_spans([
        Span::styled(" ⬢ ", Style::new().fg(theme::accent::PRIMARY)),
        Span::styled(BRAND.0, brand_style),
        Span::styled(BRAND.1, accent_style),
    ]);
    let brand_width = brand.width() as u16;
    Paragraph::new(Text::from_lines([brand])).render(
        Rect::new(area.x, area.y, brand_width.min(area.width), 1),
        frame,
    );

    let right_edge = area.x + area.width;
    if collapsed {
        let toggle = menu_toggle(navbar.menu_open);
        let label = format!(" {} ", toggle.label);
        let width = display_width(&label) as u16;
        let x = right_edge.saturating_sub(width + 1).max(area.x + brand_width);
        let style = control_style(theme::nav_link(true), focus.is_focused(Region::Navbar, 1));
        Paragraph::new(label)
            .style(style)
            .render(Rect::new(x, area.y, right_edge.saturating_sub(x), 1), frame);
        return;
    }

    let labels: Vec<String> = navbar
        .links
        .iter()
        .map(|item| format!(" {} ", item.label))
        .collect();
    let total: u16 = labels.iter().map(|l| display_width(l) as u16 + 1).sum();
    let mut x = right_edge.saturating_sub(total).max(area.x + brand_width + 1);
    for (idx, (item, label)) in navbar.links.iter().zip(&labels).enumerate() {
        let width = display_width(label) as u16;
        if x + width > right_edge {
            break;
        }
        let page = page_of(item);
        let base = if page == Some(Page::Contact) {
            theme::button_primary()
        } else {
            theme::nav_link(page.is_some_and(|p| navbar.is_active(p)))
        };
        let style = control_style(base, focus.is_focused(Region::Navbar, idx + 1));
        Paragraph::new(label.as_str())
            .style(style)
            .render(Rect::new(x, area.y, width, 1), frame);
        x += width + 1;
    }
}

/// Drop-down list of navbar pages under the navbar row.
pub fn render_menu(navbar: &NavbarView, focus: &FocusRing, frame: &mut Frame, area: Rect) {
    let items = navbar.menu_items();
    if items.is_empty() || area.is_empty() {
        return;
    }
    let inner_width = items
        .iter()
        .map(|item| display_width(item.label) as u16 + 4)
        .max()
        .unwrap_or(0);
    let width = (inner_width + 2).min(area.width);
    let height = (items.len() as u16 + 2).min(area.height);
    let menu_area = Rect::new(
        area.x + area.width.saturating_sub(width),
        area.y,
        width,
        height,
    );

    let block = Block::new()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" Menu ")
        .style(theme::overlay());
    let inner = block.inner(menu_area);
    block.render(menu_area, frame);

    let lines: Vec<Line> = items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let active = page_of(item).is_some_and(|p| navbar.is_active(p));
            let marker = if active { "›" } else { " " };
            let base = if page_of(item) == Some(Page::Contact) {
                theme::button_primary()
            } else {
                theme::nav_link(active)
            };
            Line::from_spans([
                Span::styled(format!("{marker} "), theme::eyebrow()),
                Span::styled(
                    item.label,
                    control_style(base, focus.is_focused(Region::Menu, idx)),
                ),
            ])
        })
        .collect();
    Paragraph::new(Text::from_lines(lines)).render(inner, frame);
}

/// Footer links on the left, copyright note on the right.
pub fn render_footer(footer: &FooterView, focus: &FocusRing, frame: &mut Frame, area: Rect) {
    Paragraph::new("").style(theme::bar()).render(area, frame);
    if area.is_empty() {
        return;
    }

    let mut spans = vec![Span::raw(" ")];
    for (idx, item) in footer.links.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" · ", theme::muted()));
        }
        spans.push(Span::styled(
            item.label,
            control_style(theme::nav_link(false), focus.is_focused(Region::Footer, idx)),
        ));
    }
    let links = Line::from_spans(spans);
    let links_width = links.width() as u16;
    Paragraph::new(Text::from_lines([links]))
        .render(Rect::new(area.x, area.y, links_width.min(area.width), 1), frame);

    let note_width = display_width(footer.note) as u16 + 1;
    if links_width + note_width < area.width {
        let x = area.x + area.width - note_width;
        Paragraph::new(footer.note)
            .style(Style::new().fg(theme::fg::MUTED).bg(theme::bg::SURFACE))
            .render(Rect::new(x, area.y, note_width, 1), frame);
    }
}

/// Centered modal listing [`KEYBINDINGS`].
pub fn render_help_overlay(current: Page, frame: &mut Frame, area: Rect) {
    let overlay_width = ((area.width as u32 * 60) / 100).clamp(36, 60) as u16;
    let overlay_height = (KEYBINDINGS.len() as u16 + 6).min(area.height.saturating_sub(2));
    let overlay_width = overlay_width.min(area.width.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(overlay_width)) / 2;
    let y = area.y + (area.height.saturating_sub(overlay_height)) / 2;
    let overlay_area = Rect::new(x, y, overlay_width, overlay_height);

    let block = Block::new()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .title(" ⌨ Keyboard Shortcuts ")
        .title_alignment(Alignment::Center)
        .style(theme::overlay());
    let inner = block.inner(overlay_area);
    block.render(overlay_area, frame);

    if inner.width < 10 || inner.height < 3 {
        return;
    }

    let key_style = Style::new().bold().fg(theme::accent::SOFT);
    let key_width = KEYBINDINGS
        .iter()
        .map(|entry| display_width(entry.key))
        .max()
        .unwrap_or(0);

    let mut lines = vec![
        Line::styled(format!(" On: {}", current.title()), theme::muted()),
        Line::raw(""),
    ];
    lines.extend(KEYBINDINGS.iter().map(|entry| {
        let pad = key_width.saturating_sub(display_width(entry.key));
        Line::from_spans([
            Span::raw(" "),
            Span::styled(entry.key, key_style),
            Span::raw(" ".repeat(pad + 2)),
            Span::styled(entry.action, theme::body()),
        ])
    }));
    Paragraph::new(Text::from_lines(lines)).render(inner, frame);

    let footer_y = overlay_area.bottom().saturating_sub(2);
    if footer_y > inner.y {
        let footer = "Press ? or Esc to close";
        let footer_x = inner.x + (inner.width.saturating_sub(footer.len() as u16)) / 2;
        Paragraph::new(footer)
            .style(theme::muted())
            .render(Rect::new(footer_x, footer_y, footer.len() as u16, 1), frame);
    }
}

fn page_of(item: &ActionItem) -> Option<Page> {
    match item.action {
        Action::GoTo(page) => Some(page),
        _ => None,
    }
}
