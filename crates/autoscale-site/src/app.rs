#![forbid(unsafe_code)]

//! Main application model, message routing, and top-level view.
//!
//! All session state lives in [`AppModel`]: the [`Navigator`] owns which page
//! is showing, and the model adds what only a terminal needs (focus, scroll
//! offset, help overlay, terminal size). `view()` recomposes the page from
//! navigation state on every frame.

use std::time::Duration;

use autoscale_core::catalog::Catalog;
use autoscale_core::compose::{ComposedView, compose};
use autoscale_core::nav::{
    Action, NavOrigin, NavigationHooks, NavigationState, Navigator, Page, Transition,
};
use ftui_core::event::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers};
use ftui_core::geometry::Rect;
use ftui_layout::{Constraint, Flex};
use ftui_render::frame::Frame;
use ftui_runtime::{Cmd, Model};
use ftui_widgets::Widget;
use ftui_widgets::block::{Alignment, Block};
use ftui_widgets::borders::{BorderType, Borders};
use ftui_widgets::paragraph::Paragraph;

use crate::chrome;
use crate::focus::{COLLAPSE_BELOW, FocusRing, FocusTarget, Region};
use crate::fragments::{self, BodyText};
use crate::theme;

/// Size assumed until the runtime reports the real one.
const DEFAULT_SIZE: (u16, u16) = (100, 32);

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// Application-level messages.
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// A raw terminal event, mapped to one of the messages below.
    Event(Event),
    /// Run a navigation action from an inline control.
    Navigate(Action),
    /// Close the menu if it is open, otherwise return home.
    Back,
    FocusNext,
    FocusPrev,
    /// Activate the focused control.
    Activate,
    /// Scroll the body by this many rows; clamped to the content.
    ScrollBy(i32),
    ToggleHelp,
    Resize {
        width: u16,
        height: u16,
    },
    Quit,
}

impl From<Event> for AppMsg {
    fn from(event: Event) -> Self {
        if let Event::Resize { width, height } = event {
            return Self::Resize { width, height };
        }
        Self::Event(event)
    }
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub navbar: Rect,
    pub content: Rect,
    /// Inside the content border, with one column of padding per side.
    pub body: Rect,
    pub footer: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Flex::vertical()
            .constraints([
                Constraint::Fixed(1),
                Constraint::Min(1),
                Constraint::Fixed(1),
            ])
            .split(area);
        let content = chunks[1];
        let inner = content_block("").inner(content);
        let body = Rect::new(
            inner.x.saturating_add(1),
            inner.y,
            inner.width.saturating_sub(2),
            inner.height,
        );
        Self {
            navbar: chunks[0],
            content,
            body,
            footer: chunks[2],
        }
    }
}

fn content_block(title: &str) -> Block<'_> {
    Block::new()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_alignment(Alignment::Center)
        .style(theme::content_border())
}

// ---------------------------------------------------------------------------
// AppModel
// ---------------------------------------------------------------------------

/// Top-level application state.
pub struct AppModel {
    navigator: Navigator,
    catalog: &'static Catalog,
    /// Index into the focus ring; `None` until the user tabs. Re-resolved
    /// by identity whenever the ring changes shape.
    focus: Option<usize>,
    /// First visible body row.
    scroll: u16,
    pub help_visible: bool,
    width: u16,
    height: u16,
    /// Auto-quit after this many milliseconds (0 = disabled).
    pub exit_after_ms: u64,
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new()
    }
}

impl AppModel {
    pub fn new() -> Self {
        Self::with_catalog(Catalog::builtin())
    }

    pub fn with_catalog(catalog: &'static Catalog) -> Self {
        let hooks = NavigationHooks::new().on_transition(|transition, state| {
            if transition.scroll_to_top() {
                tracing::info!(
                    target: "autoscale.app",
                    page = %state.current_page(),
                    selection = ?state.selected_case_study(),
                    origin = ?transition.origin,
                    "page view"
                );
            }
        });
        Self {
            navigator: Navigator::new().with_hooks(hooks),
            catalog,
            focus: None,
            scroll: 0,
            help_visible: false,
            width: DEFAULT_SIZE.0,
            height: DEFAULT_SIZE.1,
            exit_after_ms: 0,
        }
    }

    /// Open on `page` instead of home.
    pub fn start_on(mut self, page: Page) -> Self {
        self.navigator.go_to(page);
        self
    }

    /// Open on the detail page of case study `id`.
    pub fn start_on_case_study(mut self, id: impl Into<String>) -> Self {
        self.navigator.open_case_study(id);
        self
    }

    pub fn state(&self) -> &NavigationState {
        self.navigator.state()
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// The page as it should be drawn now.
    pub fn composed(&self) -> ComposedView<'static> {
        compose(self.navigator.state(), self.catalog)
    }

    pub fn focus_ring(&self, view: &ComposedView<'_>, width: u16) -> FocusRing {
        FocusRing::build(view, width < COLLAPSE_BELOW, self.focus)
    }

    fn collapsed(&self) -> bool {
        self.width < COLLAPSE_BELOW
    }

    fn focused_target(&self) -> Option<FocusTarget> {
        let view = self.composed();
        self.focus_ring(&view, self.width).current().cloned()
    }

    /// Run `f`, then point focus back at the control that held it before.
    ///
    /// Opening the menu or crossing the collapse width inserts and removes
    /// targets, so the stored index alone would drift onto a neighbour.
    fn with_stable_focus(&mut self, f: impl FnOnce(&mut Self)) {
        let before = self.focused_target();
        f(self);
        if self.focus.is_none() {
            return;
        }
        let Some(before) = before else {
            self.focus = None;
            return;
        };
        let view = self.composed();
        let ring = FocusRing::build(&view, self.collapsed(), None);
        let targets = ring.targets();
        self.focus = targets
            .iter()
            .position(|t| t.region == before.region && t.item == before.item)
            .or_else(|| {
                // The menu toggle relabels itself when it flips.
                targets.iter().position(|t| {
                    t.region == before.region && t.item.action == before.item.action
                })
            });
    }

    fn layout(&self) -> AppLayout {
        AppLayout::new(Rect::from_size(self.width, self.height))
    }

    fn body_text(&self, view: &ComposedView<'_>, ring: &FocusRing, width: u16) -> BodyText {
        fragments::render_body(view, width, ring)
    }

    fn max_scroll(body: &BodyText, viewport: u16) -> u16 {
        let height = u16::try_from(body.height()).unwrap_or(u16::MAX);
        height.saturating_sub(viewport)
    }

    // -- navigation ---------------------------------------------------------

    fn navigate(&mut self, action: &Action, origin: NavOrigin) {
        self.with_stable_focus(|app| {
            if let Some(transition) = app.navigator.apply(action, origin) {
                app.after_transition(transition);
            }
        });
    }

    fn after_transition(&mut self, transition: Transition) {
        if transition.scroll_to_top() {
            self.scroll = 0;
            self.focus = None;
        }
    }

    fn back(&mut self) {
        if self.navigator.state().menu_open() {
            self.with_stable_focus(|app| {
                app.navigator.toggle_menu();
            });
            return;
        }
        let transition = self.navigator.go_to(Page::Home);
        self.after_transition(transition);
    }

    fn activate(&mut self) {
        let view = self.composed();
        let ring = self.focus_ring(&view, self.width);
        let Some(target) = ring.current() else {
            return;
        };
        tracing::debug!(
            target: "autoscale.app",
            label = target.item.label,
            region = ?target.region,
            "activate"
        );
        let (action, origin) = (target.item.action.clone(), target.origin);
        self.navigate(&action, origin);
    }

    // -- focus & scroll -----------------------------------------------------

    fn move_focus(&mut self, forward: bool) {
        let view = self.composed();
        let ring = self.focus_ring(&view, self.width);
        let next = if forward {
            ring.next_index()
        } else {
            ring.prev_index()
        };
        self.focus = next;

        // Keep a focused body control on screen.
        let ring = self.focus_ring(&view, self.width);
        let Some(nth) = ring.ordinal_in(Region::Body) else {
            return;
        };
        let layout = self.layout();
        let body = self.body_text(&view, &ring, layout.body.width);
        let Some(anchor) = body.anchor(nth) else {
            return;
        };
        let anchor = u16::try_from(anchor).unwrap_or(u16::MAX);
        let viewport = layout.body.height.max(1);
        if anchor < self.scroll {
            self.scroll = anchor;
        } else if anchor >= self.scroll.saturating_add(viewport) {
            self.scroll = anchor - viewport + 1;
        }
        self.scroll = self.scroll.min(Self::max_scroll(&body, layout.body.height));
    }

    fn scroll_by(&mut self, delta: i32) {
        let view = self.composed();
        let ring = self.focus_ring(&view, self.width);
        let layout = self.layout();
        let body = self.body_text(&view, &ring, layout.body.width);
        let max = i64::from(Self::max_scroll(&body, layout.body.height));
        let next = (i64::from(self.scroll) + i64::from(delta)).clamp(0, max);
        self.scroll = u16::try_from(next).unwrap_or(0);
    }

    fn page_rows(&self) -> i32 {
        i32::from(self.layout().body.height.saturating_sub(1).max(1))
    }

    // -- input --------------------------------------------------------------

    fn handle_key(&mut self, key: KeyEvent) -> Cmd<AppMsg> {
        if key.kind != KeyEventKind::Press {
            return Cmd::None;
        }

        if self.help_visible {
            return match (key.code, key.modifiers) {
                (KeyCode::Char('q'), Modifiers::NONE) | (KeyCode::Char('c'), Modifiers::CTRL) => {
                    Cmd::Quit
                }
                (KeyCode::Char('?'), _) | (KeyCode::Escape, _) => {
                    self.handle_msg(AppMsg::ToggleHelp)
                }
                _ => Cmd::None,
            };
        }

        let msg = match (key.code, key.modifiers) {
            (KeyCode::Char('q'), Modifiers::NONE) => AppMsg::Quit,
            (KeyCode::Char('c'), Modifiers::CTRL) => AppMsg::Quit,
            (KeyCode::Char('?'), _) => AppMsg::ToggleHelp,
            (KeyCode::Char('m'), Modifiers::NONE) if self.collapsed() => {
                AppMsg::Navigate(Action::ToggleMenu)
            }
            (KeyCode::Char(ch @ '1'..='9'), Modifiers::NONE) => match Page::from_number_key(ch) {
                Some(page) => AppMsg::Navigate(Action::GoTo(page)),
                None => return Cmd::None,
            },
            (KeyCode::Tab, m) if m.contains(Modifiers::SHIFT) => AppMsg::FocusPrev,
            (KeyCode::Tab, _) | (KeyCode::Char('j'), Modifiers::NONE) => AppMsg::FocusNext,
            (KeyCode::BackTab, _) | (KeyCode::Char('k'), Modifiers::NONE) => AppMsg::FocusPrev,
            (KeyCode::Enter, _) => AppMsg::Activate,
            (KeyCode::Up, _) => AppMsg::ScrollBy(-1),
            (KeyCode::Down, _) => AppMsg::ScrollBy(1),
            (KeyCode::PageUp, _) => AppMsg::ScrollBy(-self.page_rows()),
            (KeyCode::PageDown, _) | (KeyCode::Char(' '), Modifiers::NONE) => {
                AppMsg::ScrollBy(self.page_rows())
            }
            (KeyCode::Home, _) => AppMsg::ScrollBy(i32::MIN),
            (KeyCode::End, _) => AppMsg::ScrollBy(i32::MAX),
            (KeyCode::Escape, _) | (KeyCode::Backspace, _) | (KeyCode::Char('b'), Modifiers::NONE) => {
                AppMsg::Back
            }
            _ => return Cmd::None,
        };
        self.handle_msg(msg)
    }

    fn handle_msg(&mut self, msg: AppMsg) -> Cmd<AppMsg> {
        match msg {
            AppMsg::Quit => Cmd::Quit,
            AppMsg::Event(Event::Key(key)) => self.handle_key(key),
            AppMsg::Event(_) => Cmd::None,
            AppMsg::Navigate(action) => {
                self.navigate(&action, NavOrigin::Inline);
                Cmd::None
            }
            AppMsg::Back => {
                self.back();
                Cmd::None
            }
            AppMsg::FocusNext => {
                self.move_focus(true);
                Cmd::None
            }
            AppMsg::FocusPrev => {
                self.move_focus(false);
                Cmd::None
            }
            AppMsg::Activate => {
                self.activate();
                Cmd::None
            }
            AppMsg::ScrollBy(delta) => {
                self.scroll_by(delta);
                Cmd::None
            }
            AppMsg::ToggleHelp => {
                self.help_visible = !self.help_visible;
                Cmd::None
            }
            AppMsg::Resize { width, height } => {
                self.with_stable_focus(|app| {
                    app.width = width;
                    app.height = height;
                    // The menu only exists on a collapsed navbar.
                    if !app.collapsed() && app.navigator.state().menu_open() {
                        app.navigator.toggle_menu();
                    }
                });
                // Re-clamp against the new wrap width.
                self.scroll_by(0);
                Cmd::None
            }
        }
    }
}

impl Model for AppModel {
    type Message = AppMsg;

    fn init(&mut self) -> Cmd<Self::Message> {
        if self.exit_after_ms > 0 {
            let ms = self.exit_after_ms;
            Cmd::task(move || {
                std::thread::sleep(Duration::from_millis(ms));
                AppMsg::Quit
            })
        } else {
            Cmd::None
        }
    }

    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message> {
        self.handle_msg(msg)
    }

    fn view(&self, frame: &mut Frame) {
        let area = Rect::from_size(frame.buffer.width(), frame.buffer.height());
        Paragraph::new("").style(theme::canvas()).render(area, frame);

        let layout = AppLayout::new(area);
        let view = self.composed();
        let ring = self.focus_ring(&view, area.width);

        chrome::render_navbar(
            &view.navbar,
            area.width < COLLAPSE_BELOW,
            &ring,
            frame,
            layout.navbar,
        );

        let title = format!(" {} ", view.page.title());
        content_block(&title).render(layout.content, frame);

        let body = self.body_text(&view, &ring, layout.body.width);
        let scroll = self.scroll.min(Self::max_scroll(&body, layout.body.height));
        body.render(scroll, frame, layout.body);

        chrome::render_footer(&view.footer, &ring, frame, layout.footer);

        if view.navbar.menu_open && area.width < COLLAPSE_BELOW {
            chrome::render_menu(&view.navbar, &ring, frame, layout.content);
        }
        if self.help_visible {
            chrome::render_help_overlay(view.page, frame, area);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
