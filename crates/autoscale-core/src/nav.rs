#![forbid(unsafe_code)]

//! Navigation state and the controller that owns it.
//!
//! A [`Navigator`] holds exactly one [`NavigationState`]. It is the only
//! writer; everything else reads a shared reference. There is no history
//! stack: "back" is an ordinary transition to [`Page::Home`].
//!
//! Every operation is total. Nothing is rejected; odd input (an unknown or
//! blank case-study key) is normalized and simply renders as an empty detail
//! view downstream.

use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// Which page is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    /// Landing page: hero, featured work, services, method, contact.
    #[default]
    Home,
    /// Full case-study list.
    Projects,
    /// One case study in depth.
    ProjectDetail,
    /// Services and pricing.
    Services,
    /// Methodology ("How it Works").
    Docs,
    /// Contact funnel.
    Contact,
}

impl Page {
    /// Every page.
    pub const ALL: &'static [Page] = &[
        Self::Home,
        Self::Projects,
        Self::ProjectDetail,
        Self::Services,
        Self::Docs,
        Self::Contact,
    ];

    /// Pages with a navbar entry, in navbar order.
    pub const NAVBAR: &'static [Page] = &[
        Self::Home,
        Self::Projects,
        Self::Services,
        Self::Docs,
        Self::Contact,
    ];

    /// Page heading.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Projects => "Projects",
            Self::ProjectDetail => "Case Study",
            Self::Services => "Services",
            Self::Docs => "How it Works",
            Self::Contact => "Contact",
        }
    }

    /// Label on the navbar link that leads here.
    pub const fn nav_label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Projects | Self::ProjectDetail => "Projects",
            Self::Services => "Services",
            Self::Docs => "How it Works",
            Self::Contact => "Book Free Audit",
        }
    }

    /// Stable lowercase identifier.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Projects => "projects",
            Self::ProjectDetail => "project-detail",
            Self::Services => "services",
            Self::Docs => "docs",
            Self::Contact => "contact",
        }
    }

    /// The navbar entry highlighted while this page is showing.
    ///
    /// A case-study detail page counts as part of the project list.
    pub const fn nav_group(self) -> Page {
        match self {
            Self::ProjectDetail => Self::Projects,
            other => other,
        }
    }

    /// Map '1'..='5' onto the navbar pages.
    pub fn from_number_key(ch: char) -> Option<Self> {
        let idx = match ch {
            '1'..='9' => (ch as usize) - ('1' as usize),
            _ => return None,
        };
        Self::NAVBAR.get(idx).copied()
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Error returned when a string names no page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePageError {
    input: String,
}

impl fmt::Display for ParsePageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown page '{}' (expected one of:", self.input)?;
        for (i, page) in Page::ALL.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{}", page.slug())?;
        }
        f.write_str(")")
    }
}

impl std::error::Error for ParsePageError {}

impl FromStr for Page {
    type Err = ParsePageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .iter()
            .copied()
            .find(|page| page.slug() == wanted)
            .ok_or_else(|| ParsePageError {
                input: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// NavigationState
// ---------------------------------------------------------------------------

/// The single piece of mutable session state.
///
/// Starts as `{Home, no selection, menu closed}`. Only [`Navigator`] mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationState {
    current_page: Page,
    selected_case_study: Option<String>,
    menu_open: bool,
}

impl NavigationState {
    pub fn current_page(&self) -> Page {
        self.current_page
    }

    /// The raw selection key. May be stale when not on the detail page.
    pub fn selected_case_study(&self) -> Option<&str> {
        self.selected_case_study.as_deref()
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// The selection, but only where it means something.
    pub fn detail_selection(&self) -> Option<&str> {
        match self.current_page {
            Page::ProjectDetail => self.selected_case_study(),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Actions and transitions
// ---------------------------------------------------------------------------

/// Where a navigation request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavOrigin {
    /// Regular in-page link or button.
    #[default]
    Inline,
    /// An entry in the collapsed (mobile) menu. Closes the menu.
    CollapsedMenu,
}

/// User intent, as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    GoTo(Page),
    OpenCaseStudy(String),
    ToggleMenu,
}

/// Record of one committed page/selection change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Page,
    pub to: Page,
    pub origin: NavOrigin,
    pub page_changed: bool,
    pub selection_changed: bool,
}

impl Transition {
    /// Whether the viewport should jump back to the top.
    ///
    /// Fires whenever the page or the selection changed.
    pub fn scroll_to_top(&self) -> bool {
        self.page_changed || self.selection_changed
    }
}

type TransitionCallback = Box<dyn Fn(&Transition, &NavigationState) + Send + Sync>;
type ScrollCallback = Box<dyn Fn(&NavigationState) + Send + Sync>;

/// Optional observers, invoked after a transition is committed.
#[derive(Default)]
pub struct NavigationHooks {
    on_transition: Option<TransitionCallback>,
    on_scroll_to_top: Option<ScrollCallback>,
}

impl NavigationHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_transition(
        mut self,
        f: impl Fn(&Transition, &NavigationState) + Send + Sync + 'static,
    ) -> Self {
        self.on_transition = Some(Box::new(f));
        self
    }

    /// Scroll-control collaborator. Never skipped when a transition asks for it.
    pub fn on_scroll_to_top(mut self, f: impl Fn(&NavigationState) + Send + Sync + 'static) -> Self {
        self.on_scroll_to_top = Some(Box::new(f));
        self
    }

    fn dispatch(&self, transition: &Transition, state: &NavigationState) {
        if let Some(ref hook) = self.on_transition {
            hook(transition, state);
        }
        if transition.scroll_to_top()
            && let Some(ref hook) = self.on_scroll_to_top
        {
            hook(state);
        }
    }
}

impl fmt::Debug for NavigationHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationHooks")
            .field("on_transition", &self.on_transition.is_some())
            .field("on_scroll_to_top", &self.on_scroll_to_top.is_some())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Navigator
// ---------------------------------------------------------------------------

/// Owns the navigation state for one session.
#[derive(Debug, Default)]
pub struct Navigator {
    state: NavigationState,
    hooks: Option<NavigationHooks>,
}

impl Navigator {
    /// Fresh session on the home page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach observers for transitions and scroll-to-top.
    pub fn with_hooks(mut self, hooks: NavigationHooks) -> Self {
        self.hooks = Some(hooks);
        self
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Show `page`. The selection is left alone.
    pub fn go_to(&mut self, page: Page) -> Transition {
        self.go_to_from(page, NavOrigin::Inline)
    }

    /// Show `page` from the collapsed menu, closing it.
    pub fn go_to_from_menu(&mut self, page: Page) -> Transition {
        self.go_to_from(page, NavOrigin::CollapsedMenu)
    }

    pub fn go_to_from(&mut self, page: Page, origin: NavOrigin) -> Transition {
        let from = self.state.current_page;
        self.state.current_page = page;
        if origin == NavOrigin::CollapsedMenu {
            self.state.menu_open = false;
        }
        self.commit(Transition {
            from,
            to: page,
            origin,
            page_changed: from != page,
            selection_changed: false,
        })
    }

    /// Select a case study and show its detail page in one step.
    ///
    /// Membership in the catalog is not checked. A blank key clears the
    /// selection, which renders as the placeholder detail view.
    pub fn open_case_study(&mut self, id: impl Into<String>) -> Transition {
        self.open_case_study_from(id, NavOrigin::Inline)
    }

    pub fn open_case_study_from(&mut self, id: impl Into<String>, origin: NavOrigin) -> Transition {
        let id = id.into();
        let key = id.trim();
        let selection = (!key.is_empty()).then(|| key.to_string());

        let from = self.state.current_page;
        let selection_changed = self.state.selected_case_study != selection;
        self.state.selected_case_study = selection;
        self.state.current_page = Page::ProjectDetail;
        if origin == NavOrigin::CollapsedMenu {
            self.state.menu_open = false;
        }
        self.commit(Transition {
            from,
            to: Page::ProjectDetail,
            origin,
            page_changed: from != Page::ProjectDetail,
            selection_changed,
        })
    }

    /// Flip the collapsed-menu flag. Returns the new value.
    pub fn toggle_menu(&mut self) -> bool {
        self.state.menu_open = !self.state.menu_open;
        tracing::debug!(
            target: "autoscale.nav",
            menu_open = self.state.menu_open,
            "menu toggled"
        );
        self.state.menu_open
    }

    /// Run an [`Action`]. Menu toggles report no transition.
    pub fn apply(&mut self, action: &Action, origin: NavOrigin) -> Option<Transition> {
        match action {
            Action::GoTo(page) => Some(self.go_to_from(*page, origin)),
            Action::OpenCaseStudy(id) => Some(self.open_case_study_from(id.as_str(), origin)),
            Action::ToggleMenu => {
                self.toggle_menu();
                None
            }
        }
    }

    fn commit(&self, transition: Transition) -> Transition {
        tracing::debug!(
            target: "autoscale.nav",
            from = %transition.from,
            to = %transition.to,
            origin = ?transition.origin,
            selection = ?self.state.selected_case_study,
            scroll_to_top = transition.scroll_to_top(),
            "navigation transition"
        );
        if let Some(ref hooks) = self.hooks {
            hooks.dispatch(&transition, &self.state);
        }
        transition
    }
}
