#![forbid(unsafe_code)]

//! Terminal front end for the AutoScale agency site.
//!
//! Pages are composed by `autoscale-core`; this crate draws them with
//! FrankenTUI widgets and turns keys into navigation actions.

pub mod app;
pub mod chrome;
pub mod cli;
pub mod focus;
pub mod fragments;
pub mod logging;
pub mod theme;
