#![forbid(unsafe_code)]

//! Keyboard focus across the controls of the composed page.
//!
//! The ring is rebuilt from the [`ComposedView`] on every frame, so it always
//! matches what is drawn: navbar, open menu, body, then footer. Renderers ask
//! [`FocusRing::is_focused`] with their region and the ordinal of the control
//! they are drawing.

use autoscale_core::compose::{ActionItem, ComposedView};
use autoscale_core::nav::{Action, NavOrigin};

/// Below this width the navbar links fold into a menu toggle.
pub const COLLAPSE_BELOW: u16 = 80;

/// Where on screen a control lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Navbar,
    Menu,
    Body,
    Footer,
}

/// One focusable control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusTarget {
    pub region: Region,
    pub item: ActionItem,
    /// Origin reported to the navigator when this control is activated.
    pub origin: NavOrigin,
}

impl FocusTarget {
    fn inline(region: Region, item: &ActionItem) -> Self {
        Self {
            region,
            item: item.clone(),
            origin: NavOrigin::Inline,
        }
    }
}

/// The toggle drawn in place of the navbar links on narrow terminals.
pub fn menu_toggle(open: bool) -> ActionItem {
    ActionItem {
        label: if open { "✕ Close" } else { "≡ Menu" },
        action: Action::ToggleMenu,
    }
}

/// Ordered focus targets plus the current selection.
#[derive(Debug, Clone, Default)]
pub struct FocusRing {
    targets: Vec<FocusTarget>,
    selected: Option<usize>,
}

impl FocusRing {
    /// Collect every visible control of `view`.
    ///
    /// `selected` is clamped to the new target count.
    pub fn build(view: &ComposedView<'_>, collapsed: bool, selected: Option<usize>) -> Self {
        let navbar = &view.navbar;
        let mut targets = vec![FocusTarget::inline(Region::Navbar, &navbar.brand)];
        if collapsed {
            targets.push(FocusTarget::inline(
                Region::Navbar,
                &menu_toggle(navbar.menu_open),
            ));
        } else {
            targets.extend(
                navbar
                    .links
                    .iter()
                    .map(|item| FocusTarget::inline(Region::Navbar, item)),
            );
        }
        if collapsed {
            targets.extend(navbar.menu_items().iter().map(|item| FocusTarget {
                region: Region::Menu,
                item: item.clone(),
                origin: NavOrigin::CollapsedMenu,
            }));
        }
        targets.extend(
            view.body
                .iter()
                .flat_map(|fragment| fragment.actions())
                .map(|item| FocusTarget::inline(Region::Body, item)),
        );
        targets.extend(
            view.footer
                .links
                .iter()
                .map(|item| FocusTarget::inline(Region::Footer, item)),
        );

        let selected = selected.filter(|_| !targets.is_empty()).map(|i| i.min(targets.len() - 1));
        Self { targets, selected }
    }

    pub fn targets(&self) -> &[FocusTarget] {
        &self.targets
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn current(&self) -> Option<&FocusTarget> {
        self.selected.and_then(|i| self.targets.get(i))
    }

    /// Next index, wrapping. Starts at the first body control when nothing
    /// is focused yet, so Tab lands on page content rather than the brand.
    pub fn next_index(&self) -> Option<usize> {
        let len = self.targets.len();
        if len == 0 {
            return None;
        }
        Some(match self.selected {
            Some(i) => (i + 1) % len,
            None => self.first_in(Region::Body).unwrap_or(0),
        })
    }

    /// Previous index, wrapping.
    pub fn prev_index(&self) -> Option<usize> {
        let len = self.targets.len();
        if len == 0 {
            return None;
        }
        Some(match self.selected {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        })
    }

    /// Whether the `nth` control drawn in `region` holds focus.
    pub fn is_focused(&self, region: Region, nth: usize) -> bool {
        self.ordinal_in(region) == Some(nth)
    }

    /// Position of the focused control within `region`, if it lives there.
    pub fn ordinal_in(&self, region: Region) -> Option<usize> {
        let current = self.current()?;
        if current.region != region {
            return None;
        }
        let start = self.first_in(region)?;
        self.selected.map(|i| i - start)
    }

    fn first_in(&self, region: Region) -> Option<usize> {
        self.targets.iter().position(|t| t.region == region)
    }
}
