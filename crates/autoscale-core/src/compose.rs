#![forbid(unsafe_code)]

//! View composition: navigation state in, ordered fragments out.
//!
//! [`page_layout`] is the declarative page table. It is an exhaustive `match`,
//! so adding a [`Page`] without a layout fails to compile instead of rendering
//! a blank page. [`compose`] then resolves each [`FragmentKind`] into a
//! [`Fragment`] carrying the catalog slice it draws and the [`ActionItem`]s it
//! offers. Composition is pure: it never touches the navigator.

use crate::catalog::{CaseStudy, Catalog, Metric, ServiceOffering};
use crate::content::{self, ContactChannel, Pillar, PricingPlan, SectionCopy};
use crate::nav::{Action, NavigationState, Page};

// ---------------------------------------------------------------------------
// Page table
// ---------------------------------------------------------------------------

/// Display scope of a case-study grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridVariant {
    /// Featured cards on the home page, two headline metrics each.
    Home,
    /// The full portfolio list: no inline metrics, a deep-dive action only.
    FullList,
}

impl GridVariant {
    /// How many leading metrics each card shows.
    pub const fn inline_metrics(self) -> usize {
        match self {
            Self::Home => 2,
            Self::FullList => 0,
        }
    }

    pub const fn copy(self) -> &'static SectionCopy {
        match self {
            Self::Home => &content::GRID_HOME,
            Self::FullList => &content::GRID_FULL,
        }
    }

    const fn card_action_label(self) -> &'static str {
        match self {
            Self::Home => "View Case Study",
            Self::FullList => "Deep Dive Study",
        }
    }
}

/// A renderable section, without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    Hero,
    CaseStudyGrid(GridVariant),
    Services,
    Pricing,
    Methodology,
    Contact,
    CaseStudyDetail,
}

/// Body fragments for each page, top to bottom.
///
/// Navbar and footer wrap every page and are not listed here.
pub const fn page_layout(page: Page) -> &'static [FragmentKind] {
    use FragmentKind as F;
    match page {
        Page::Home => &[
            F::Hero,
            F::CaseStudyGrid(GridVariant::Home),
            F::Services,
            F::Methodology,
            F::Contact,
        ],
        Page::Projects => &[F::CaseStudyGrid(GridVariant::FullList), F::Contact],
        Page::ProjectDetail => &[F::CaseStudyDetail],
        Page::Services => &[F::Services, F::Pricing, F::Contact],
        Page::Docs => &[F::Methodology],
        Page::Contact => &[F::Contact],
    }
}

// ---------------------------------------------------------------------------
// Composed views
// ---------------------------------------------------------------------------

/// A labelled, activatable control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionItem {
    pub label: &'static str,
    pub action: Action,
}

impl ActionItem {
    pub fn go(label: &'static str, page: Page) -> Self {
        Self {
            label,
            action: Action::GoTo(page),
        }
    }

    pub fn open(label: &'static str, id: impl Into<String>) -> Self {
        Self {
            label,
            action: Action::OpenCaseStudy(id.into()),
        }
    }
}

/// Persistent top bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavbarView {
    /// Navbar entry to highlight.
    pub active: Page,
    pub menu_open: bool,
    /// The wordmark; leads home.
    pub brand: ActionItem,
    /// One link per navbar page, in order.
    pub links: Vec<ActionItem>,
}

impl NavbarView {
    fn new(state: &NavigationState) -> Self {
        Self {
            active: state.current_page().nav_group(),
            menu_open: state.menu_open(),
            brand: ActionItem::go("AUTOSCALE", Page::Home),
            links: Page::NAVBAR
                .iter()
                .map(|&page| ActionItem::go(page.nav_label(), page))
                .collect(),
        }
    }

    /// Brand first, then the links.
    pub fn actions(&self) -> impl Iterator<Item = &ActionItem> {
        std::iter::once(&self.brand).chain(self.links.iter())
    }

    /// Entries of the expanded collapsed-menu, empty while it is closed.
    pub fn menu_items(&self) -> &[ActionItem] {
        if self.menu_open { &self.links } else { &[] }
    }

    pub fn is_active(&self, page: Page) -> bool {
        self.active == page
    }
}

/// Persistent bottom bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterView {
    pub links: Vec<ActionItem>,
    pub note: &'static str,
}

impl FooterView {
    fn new() -> Self {
        Self {
            links: vec![
                ActionItem::go("Home", Page::Home),
                ActionItem::go("Work", Page::Projects),
                ActionItem::go("Methodology", Page::Docs),
                ActionItem::go("Contact", Page::Contact),
            ],
            note: content::FOOTER_NOTE,
        }
    }
}

/// One card in a case-study grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseCard<'a> {
    pub study: &'a CaseStudy,
    /// Leading metrics shown inline; length set by the grid variant.
    pub metrics: &'a [Metric],
    pub open: ActionItem,
}

/// The case-study detail panel.
///
/// With no selection, or a key the catalog doesn't know, every accessor
/// returns an empty value and [`DetailView::is_placeholder`] is true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView<'a> {
    study: Option<&'a CaseStudy>,
    requested: Option<String>,
    pub back: ActionItem,
    pub cta: ActionItem,
}

impl<'a> DetailView<'a> {
    fn new(selection: Option<&str>, catalog: &'a Catalog) -> Self {
        let study = selection.and_then(|id| catalog.find(id));
        if study.is_none() {
            tracing::debug!(
                target: "autoscale.compose",
                selection = ?selection,
                "detail page without a known case study; rendering placeholder"
            );
        }
        Self {
            study,
            requested: selection.map(str::to_string),
            back: ActionItem::go("Back to Home", Page::Home),
            cta: ActionItem::go("Book My Free Audit", Page::Contact),
        }
    }

    pub fn study(&self) -> Option<&'a CaseStudy> {
        self.study
    }

    /// The key that was asked for, known or not.
    pub fn requested_id(&self) -> Option<&str> {
        self.requested.as_deref()
    }

    pub fn is_placeholder(&self) -> bool {
        self.study.is_none()
    }

    pub fn title(&self) -> &'a str {
        self.study.map_or("", |s| s.title.as_str())
    }

    pub fn short_desc(&self) -> &'a str {
        self.study.map_or("", |s| s.short_desc.as_str())
    }

    pub fn category(&self) -> &'a str {
        self.study.map_or("", |s| s.category.as_str())
    }

    pub fn problem(&self) -> &'a str {
        self.study.map_or("", |s| s.problem.as_str())
    }

    pub fn solution(&self) -> &'a str {
        self.study.map_or("", |s| s.solution.as_str())
    }

    /// Every metric, untruncated.
    pub fn metrics(&self) -> &'a [Metric] {
        self.study
            .map(|s| s.metrics.as_slice())
            .unwrap_or_default()
    }

    /// Architecture steps numbered from 1.
    pub fn numbered_steps(&self) -> Vec<(usize, &'a str)> {
        self.study
            .map(|s| s.numbered_steps().collect())
            .unwrap_or_default()
    }

    pub fn tools(&self) -> &'a [String] {
        self.study
            .map(|s| s.tools.as_slice())
            .unwrap_or_default()
    }

    pub fn video_link(&self) -> Option<&'a str> {
        self.study.and_then(CaseStudy::video_link)
    }
}

/// A body section with its data resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment<'a> {
    Hero {
        actions: Vec<ActionItem>,
    },
    CaseStudyGrid {
        variant: GridVariant,
        cards: Vec<CaseCard<'a>>,
        /// "View All Projects", home variant only.
        view_all: Option<ActionItem>,
    },
    Services {
        offerings: &'a [ServiceOffering],
    },
    Pricing {
        plans: &'static [PricingPlan],
    },
    Methodology {
        pillars: &'static [Pillar],
        manifest: &'static [&'static str],
    },
    Contact {
        channels: &'static [ContactChannel],
        email: &'static str,
    },
    CaseStudyDetail(DetailView<'a>),
}

impl<'a> Fragment<'a> {
    fn build(kind: FragmentKind, state: &NavigationState, catalog: &'a Catalog) -> Self {
        match kind {
            FragmentKind::Hero => Self::Hero {
                actions: vec![
                    ActionItem::go("Book Free Automation Audit", Page::Contact),
                    ActionItem::go("See Real Projects", Page::Projects),
                ],
            },
            FragmentKind::CaseStudyGrid(variant) => Self::CaseStudyGrid {
                variant,
                cards: catalog
                    .list_case_studies()
                    .iter()
                    .map(|study| CaseCard {
                        study,
                        metrics: &study.metrics[..variant.inline_metrics().min(study.metrics.len())],
                        open: ActionItem::open(variant.card_action_label(), study.id.as_str()),
                    })
                    .collect(),
                view_all: match variant {
                    GridVariant::Home => Some(ActionItem::go("View All Projects", Page::Projects)),
                    GridVariant::FullList => None,
                },
            },
            FragmentKind::Services => Self::Services {
                offerings: catalog.list_services(),
            },
            FragmentKind::Pricing => Self::Pricing {
                plans: content::PRICING_PLANS,
            },
            FragmentKind::Methodology => Self::Methodology {
                pillars: content::PILLARS,
                manifest: content::WORKFLOW_MANIFEST,
            },
            FragmentKind::Contact => Self::Contact {
                channels: content::CONTACT_CHANNELS,
                email: content::CONTACT_EMAIL,
            },
            FragmentKind::CaseStudyDetail => {
                Self::CaseStudyDetail(DetailView::new(state.detail_selection(), catalog))
            }
        }
    }

    pub fn kind(&self) -> FragmentKind {
        match self {
            Self::Hero { .. } => FragmentKind::Hero,
            Self::CaseStudyGrid { variant, .. } => FragmentKind::CaseStudyGrid(*variant),
            Self::Services { .. } => FragmentKind::Services,
            Self::Pricing { .. } => FragmentKind::Pricing,
            Self::Methodology { .. } => FragmentKind::Methodology,
            Self::Contact { .. } => FragmentKind::Contact,
            Self::CaseStudyDetail(_) => FragmentKind::CaseStudyDetail,
        }
    }

    /// Actions this fragment offers, in display order.
    pub fn actions(&self) -> Vec<&ActionItem> {
        match self {
            Self::Hero { actions } => actions.iter().collect(),
            Self::CaseStudyGrid {
                cards, view_all, ..
            } => view_all
                .iter()
                .chain(cards.iter().map(|card| &card.open))
                .collect(),
            Self::CaseStudyDetail(detail) => vec![&detail.back, &detail.cta],
            Self::Services { .. }
            | Self::Pricing { .. }
            | Self::Methodology { .. }
            | Self::Contact { .. } => Vec::new(),
        }
    }
}

/// Everything a front end needs to draw one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedView<'a> {
    pub page: Page,
    pub navbar: NavbarView,
    pub body: Vec<Fragment<'a>>,
    pub footer: FooterView,
}

impl<'a> ComposedView<'a> {
    pub fn kinds(&self) -> Vec<FragmentKind> {
        self.body.iter().map(Fragment::kind).collect()
    }

    /// Every action on the page: navbar, body, then footer.
    pub fn actions(&self) -> Vec<&ActionItem> {
        self.navbar
            .actions()
            .chain(self.body.iter().flat_map(Fragment::actions))
            .chain(self.footer.links.iter())
            .collect()
    }

    /// The detail panel, when this is a detail page.
    pub fn detail(&self) -> Option<&DetailView<'a>> {
        self.body.iter().find_map(|fragment| match fragment {
            Fragment::CaseStudyDetail(detail) => Some(detail),
            _ => None,
        })
    }
}

/// Derive the page to draw from the current navigation state.
pub fn compose<'a>(state: &NavigationState, catalog: &'a Catalog) -> ComposedView<'a> {
    let page = state.current_page();
    let body: Vec<Fragment<'a>> = page_layout(page)
        .iter()
        .map(|&kind| Fragment::build(kind, state, catalog))
        .collect();
    tracing::trace!(
        target: "autoscale.compose",
        page = %page,
        fragments = body.len(),
        "composed view"
    );
    ComposedView {
        page,
        navbar: NavbarView::new(state),
        body,
        footer: FooterView::new(),
    }
}
