#![forbid(unsafe_code)]

//! The app logs a "page view" for every scroll-to-top transition, and
//! nothing for focus or scroll changes.

use std::sync::{Arc, Mutex};

use autoscale_core::nav::{Action, Page};
use autoscale_site::app::{AppModel, AppMsg};
use ftui_runtime::Model;
use tracing::Subscriber;
use tracing::field::{Field, Visit};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::layer::{Context, SubscriberExt};

const APP_TARGET: &str = "autoscale.app";

#[derive(Debug, Default, Clone)]
struct Captured {
    message: String,
    page: Option<String>,
}

struct PageVisitor(Captured);

impl Visit for PageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        match field.name() {
            "message" => self.0.message = format!("{value:?}"),
            "page" => self.0.page = Some(format!("{value:?}")),
            _ => {}
        }
    }
}

struct CaptureLayer(Arc<Mutex<Vec<Captured>>>);

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        if event.metadata().target() != APP_TARGET {
            return;
        }
        let mut visitor = PageVisitor(Captured::default());
        event.record(&mut visitor);
        self.0.lock().expect("capture lock").push(visitor.0);
    }
}

fn page_views(run: impl FnOnce()) -> Vec<Captured> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry()
        .with(CaptureLayer(Arc::clone(&events)))
        .with(Targets::new().with_target(APP_TARGET, tracing::Level::INFO));
    tracing::subscriber::with_default(subscriber, run);
    let events = events.lock().expect("capture lock");
    events
        .iter()
        .filter(|e| e.message == "page view")
        .cloned()
        .collect()
}

#[test]
fn page_views_follow_scroll_to_top() {
    let views = page_views(|| {
        let mut app = AppModel::new();
        app.update(AppMsg::Navigate(Action::GoTo(Page::Services)));
        app.update(AppMsg::ScrollBy(3));
        app.update(AppMsg::FocusNext);
        // Same page again: no scroll-to-top, no page view.
        app.update(AppMsg::Navigate(Action::GoTo(Page::Services)));
        app.update(AppMsg::Back);
    });

    let pages: Vec<_> = views.iter().filter_map(|v| v.page.as_deref()).collect();
    assert_eq!(pages, ["services", "home"]);
}

#[test]
fn menu_toggle_is_not_a_page_view() {
    let views = page_views(|| {
        let mut app = AppModel::new();
        app.update(AppMsg::Navigate(Action::ToggleMenu));
        app.update(AppMsg::Back);
    });
    assert!(views.is_empty(), "{views:?}");
}
