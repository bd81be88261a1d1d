#![forbid(unsafe_code)]

//! Property and scenario tests for the navigation controller and composer.

use autoscale_core::catalog::Catalog;
use autoscale_core::compose::{Fragment, FragmentKind, GridVariant, compose};
use autoscale_core::nav::{NavOrigin, Navigator, Page};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    GoTo(Page),
    GoToFromMenu(Page),
    Open(String),
    ToggleMenu,
}

fn page() -> impl Strategy<Value = Page> {
    prop::sample::select(Page::ALL.to_vec())
}

fn case_key() -> impl Strategy<Value = String> {
    let mut keys: Vec<String> = Catalog::builtin()
        .list_case_studies()
        .iter()
        .map(|c| c.id.clone())
        .collect();
    keys.push("unknown-study".into());
    keys.push(String::new());
    prop::sample::select(keys)
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        page().prop_map(Op::GoTo),
        page().prop_map(Op::GoToFromMenu),
        case_key().prop_map(Op::Open),
        Just(Op::ToggleMenu),
    ]
}

fn run(nav: &mut Navigator, ops: &[Op]) {
    for op in ops {
        match op {
            Op::GoTo(p) => {
                nav.go_to(*p);
            }
            Op::GoToFromMenu(p) => {
                nav.go_to_from_menu(*p);
            }
            Op::Open(id) => {
                nav.open_case_study(id.as_str());
            }
            Op::ToggleMenu => {
                nav.toggle_menu();
            }
        }
    }
}

proptest! {
    #[test]
    fn go_to_is_idempotent_and_keeps_selection(
        history in prop::collection::vec(op(), 0..16),
        target in page(),
    ) {
        let mut once = Navigator::new();
        run(&mut once, &history);
        let before = once.state().selected_case_study().map(str::to_string);
        once.go_to(target);

        let mut twice = Navigator::new();
        run(&mut twice, &history);
        twice.go_to(target);
        twice.go_to(target);

        prop_assert_eq!(once.state(), twice.state());
        prop_assert_eq!(once.state().current_page(), target);
        if target != Page::ProjectDetail {
            prop_assert_eq!(once.state().selected_case_study(), before.as_deref());
        }
    }

    #[test]
    fn last_open_wins(
        history in prop::collection::vec(op(), 0..16),
        first in case_key(),
        second in case_key(),
    ) {
        let mut nav = Navigator::new();
        run(&mut nav, &history);
        nav.open_case_study(first.as_str());
        nav.open_case_study(second.as_str());

        prop_assert_eq!(nav.state().current_page(), Page::ProjectDetail);
        let expected = (!second.is_empty()).then_some(second.as_str());
        prop_assert_eq!(nav.state().detail_selection(), expected);
    }

    #[test]
    fn toggle_twice_restores_menu(history in prop::collection::vec(op(), 0..16)) {
        let mut nav = Navigator::new();
        run(&mut nav, &history);
        let before = nav.state().menu_open();
        nav.toggle_menu();
        nav.toggle_menu();
        prop_assert_eq!(nav.state().menu_open(), before);
    }

    #[test]
    fn menu_navigation_always_closes(
        history in prop::collection::vec(op(), 0..16),
        target in page(),
    ) {
        let mut nav = Navigator::new();
        run(&mut nav, &history);
        nav.go_to_from(target, NavOrigin::CollapsedMenu);
        prop_assert!(!nav.state().menu_open());
    }

    #[test]
    fn composition_is_total(history in prop::collection::vec(op(), 0..24)) {
        let catalog = Catalog::builtin();
        let mut nav = Navigator::new();
        run(&mut nav, &history);
        let view = compose(nav.state(), catalog);

        prop_assert!(!view.body.is_empty());
        prop_assert_eq!(view.page, nav.state().current_page());
        if let Some(detail) = view.detail() {
            let expected = nav
                .state()
                .detail_selection()
                .and_then(|id| catalog.find(id))
                .map_or(0, |c| c.metrics.len());
            prop_assert_eq!(detail.metrics().len(), expected);
        }
    }
}

#[test]
fn every_case_study_detail_shows_all_metrics() {
    let catalog = Catalog::builtin();
    for study in catalog.list_case_studies() {
        let mut nav = Navigator::new();
        nav.open_case_study(study.id.as_str());
        let view = compose(nav.state(), catalog);
        assert_eq!(nav.state().current_page(), Page::ProjectDetail);
        let detail = view.detail().expect("detail fragment");
        assert_eq!(detail.metrics().len(), study.metrics.len());
        assert_eq!(detail.metrics(), study.metrics.as_slice());

        // The home grid only shows the first two.
        let home = compose(Navigator::new().state(), catalog);
        let card_metrics = home
            .body
            .iter()
            .find_map(|f| match f {
                Fragment::CaseStudyGrid { cards, .. } => {
                    cards.iter().find(|c| c.study.id == study.id).map(|c| c.metrics.len())
                }
                _ => None,
            })
            .expect("study on home grid");
        assert_eq!(card_metrics, study.metrics.len().min(2));
    }
}

#[test]
fn scenario_go_to_projects() {
    let mut nav = Navigator::new();
    nav.go_to(Page::Projects);
    assert_eq!(nav.state().current_page(), Page::Projects);
    assert_eq!(nav.state().selected_case_study(), None);
    assert!(!nav.state().menu_open());

    let view = compose(nav.state(), Catalog::builtin());
    assert_eq!(
        view.kinds(),
        [
            FragmentKind::CaseStudyGrid(GridVariant::FullList),
            FragmentKind::Contact
        ]
    );
    assert!(view.navbar.is_active(Page::Projects));
    assert_eq!(view.footer.links.len(), 4);
}

#[test]
fn scenario_open_lead_nurture() {
    let mut nav = Navigator::new();
    nav.open_case_study("lead-nurture");
    assert_eq!(nav.state().current_page(), Page::ProjectDetail);
    assert_eq!(nav.state().selected_case_study(), Some("lead-nurture"));
    assert!(!nav.state().menu_open());

    let view = compose(nav.state(), Catalog::builtin());
    let detail = view.detail().expect("detail fragment");
    assert_eq!(detail.metrics().len(), 4);
    let numbers: Vec<usize> = detail.numbered_steps().iter().map(|(n, _)| *n).collect();
    assert_eq!(numbers, [1, 2, 3, 4, 5]);
}

#[test]
fn scenario_detail_without_selection() {
    let mut nav = Navigator::new();
    nav.go_to(Page::ProjectDetail);
    let view = compose(nav.state(), Catalog::builtin());
    let detail = view.detail().expect("detail fragment");
    assert!(detail.is_placeholder());
    assert_eq!(detail.title(), "");
    assert_eq!(detail.problem(), "");
}

#[test]
fn catalog_listing_is_deterministic() {
    let catalog = Catalog::builtin();
    let first = catalog.list_case_studies().to_vec();
    let second = catalog.list_case_studies().to_vec();
    assert_eq!(first, second);
    assert_eq!(catalog.list_services(), Catalog::builtin().list_services());
}

#[test]
fn sessions_are_independent() {
    let mut a = Navigator::new();
    let b = Navigator::new();
    a.open_case_study("lead-nurture");
    a.toggle_menu();
    assert_eq!(b.state().current_page(), Page::Home);
    assert!(!b.state().menu_open());
}
