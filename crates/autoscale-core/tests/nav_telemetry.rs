#![forbid(unsafe_code)]

//! Navigation emits one `autoscale.nav` event per committed transition.
//!
//! Run: `cargo test -p autoscale-core --test nav_telemetry`

use std::sync::{Arc, Mutex};

use autoscale_core::nav::{NavigationHooks, Navigator, Page};
use tracing::Subscriber;
use tracing::field::{Field, Visit};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::layer::{Context, SubscriberExt};

const NAV_TARGET: &str = "autoscale.nav";

#[derive(Debug, Default, Clone)]
struct Captured {
    message: String,
    fields: Vec<(String, String)>,
}

impl Captured {
    fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Default)]
struct NavVisitor(Captured);

impl Visit for NavVisitor {
    fn record_bool(&mut self, field: &Field, value: bool) {
        self.0.fields.push((field.name().to_string(), value.to_string()));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.fields.push((field.name().to_string(), value.to_string()));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0.message = format!("{value:?}");
        } else {
            self.0.fields.push((field.name().to_string(), format!("{value:?}")));
        }
    }
}

struct CaptureLayer(Arc<Mutex<Vec<Captured>>>);

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        if event.metadata().target() != NAV_TARGET {
            return;
        }
        let mut visitor = NavVisitor::default();
        event.record(&mut visitor);
        self.0.lock().expect("capture lock").push(visitor.0);
    }
}

fn install_capture() -> (tracing::subscriber::DefaultGuard, Arc<Mutex<Vec<Captured>>>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry()
        .with(CaptureLayer(Arc::clone(&events)))
        .with(Targets::new().with_target(NAV_TARGET, tracing::Level::DEBUG));
    (tracing::subscriber::set_default(subscriber), events)
}

#[test]
fn each_transition_is_logged() {
    let (_guard, events) = install_capture();

    let mut nav = Navigator::new();
    nav.go_to(Page::Projects);
    nav.open_case_study("lead-nurture");
    nav.toggle_menu();

    let events = events.lock().expect("capture lock");
    assert_eq!(events.len(), 3, "{events:?}");

    let first = &events[0];
    assert_eq!(first.message, "navigation transition");
    assert_eq!(first.field("from"), Some("home"));
    assert_eq!(first.field("to"), Some("projects"));
    assert_eq!(first.field("scroll_to_top"), Some("true"));

    let second = &events[1];
    assert_eq!(second.field("to"), Some("project-detail"));
    assert_eq!(second.field("selection"), Some("Some(\"lead-nurture\")"));

    let third = &events[2];
    assert_eq!(third.message, "menu toggled");
    assert_eq!(third.field("menu_open"), Some("true"));
}

#[test]
fn same_page_is_logged_without_scroll() {
    let (_guard, events) = install_capture();

    let mut nav = Navigator::new();
    nav.go_to(Page::Home);

    let events = events.lock().expect("capture lock");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].field("scroll_to_top"), Some("false"));
}

#[test]
fn hooks_see_committed_state() {
    let seen: Arc<Mutex<Vec<(Page, Option<String>)>>> = Arc::default();
    let scrolls = Arc::new(Mutex::new(0usize));

    let hooks = {
        let seen = Arc::clone(&seen);
        let scrolls = Arc::clone(&scrolls);
        NavigationHooks::new()
            .on_transition(move |_, state| {
                seen.lock().expect("seen lock").push((
                    state.current_page(),
                    state.selected_case_study().map(str::to_string),
                ));
            })
            .on_scroll_to_top(move |_| {
                *scrolls.lock().expect("scroll lock") += 1;
            })
    };

    let mut nav = Navigator::new().with_hooks(hooks);
    nav.open_case_study("medicine-reminder");
    nav.open_case_study("medicine-reminder");
    nav.open_case_study("lead-nurture");
    nav.go_to(Page::Home);

    let seen = seen.lock().expect("seen lock");
    assert_eq!(
        *seen,
        [
            (Page::ProjectDetail, Some("medicine-reminder".to_string())),
            (Page::ProjectDetail, Some("medicine-reminder".to_string())),
            (Page::ProjectDetail, Some("lead-nurture".to_string())),
            (Page::Home, Some("lead-nurture".to_string())),
        ]
    );
    // The repeated open changes nothing, so it does not scroll.
    assert_eq!(*scrolls.lock().expect("scroll lock"), 3);
}
