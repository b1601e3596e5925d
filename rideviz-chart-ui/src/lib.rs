//! Shared Dioxus components and Chart.js bridge for the ridership chart apps.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for Chart.js functions via `js_sys::eval()`
//! - `net`: the data-endpoint fetch helper
//! - `chart_store`: chart lifecycle store (fetch, render, update, zoom)
//! - `theme_store`: persisted light/dark/system theme store
//! - `form`: date-range validation wired to the live form inputs
//! - `state`: reactive AppState with Dioxus Signals
//! - `components`: reusable RSX components (picker, container, toggles)

pub mod chart_store;
pub mod components;
pub mod form;
pub mod js_bridge;
pub mod net;
pub mod state;
pub mod theme_store;
