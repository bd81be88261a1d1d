#![forbid(unsafe_code)]

//! Core model for the AutoScale portfolio site.
//!
//! Three layers, leaves first:
//!
//! - [`catalog`]: the immutable case-study and service dataset, compiled in.
//! - [`nav`]: the single mutable navigation state and the controller that owns it.
//! - [`compose`]: a pure mapping from navigation state to the ordered fragments
//!   a front end should draw, each fed the slice of catalog data it needs.
//!
//! Nothing here touches a terminal. Front ends read a [`compose::ComposedView`]
//! and feed user intent back as [`nav::Action`]s.
//!
//! # Example
//! ```
//! use autoscale_core::catalog::Catalog;
//! use autoscale_core::compose::{compose, FragmentKind, GridVariant};
//! use autoscale_core::nav::{Navigator, Page};
//!
//! let catalog = Catalog::builtin();
//! let mut nav = Navigator::new();
//! nav.go_to(Page::Projects);
//!
//! let view = compose(nav.state(), catalog);
//! let kinds: Vec<_> = view.body.iter().map(|f| f.kind()).collect();
//! assert_eq!(
//!     kinds,
//!     [FragmentKind::CaseStudyGrid(GridVariant::FullList), FragmentKind::Contact]
//! );
//! ```

pub mod catalog;
pub mod compose;
pub mod content;
pub mod nav;

pub use catalog::{CaseStudy, Catalog, IconRef, Metric, ServiceOffering, Trend};
pub use compose::{ComposedView, Fragment, FragmentKind, GridVariant, compose, page_layout};
pub use nav::{Action, NavOrigin, NavigationHooks, NavigationState, Navigator, Page, Transition};
