//! Core types and logic for the transit ridership chart apps.
//!
//! Everything in this crate is pure and runs natively (no DOM, no JS interop),
//! so it carries the unit tests for the workspace:
//! - `validation`: date-range form validation rules and messages
//! - `theme`: tri-state theme preference and resolution rule
//! - `chart_data`: the Chart.js-ready payload aggregate
//! - `url`: data-endpoint URL building with percent-encoding
//! - `zoom`: chart zoom factors
//! - `dates`: date parsing/formatting helpers

pub mod chart_data;
pub mod dates;
pub mod theme;
pub mod url;
pub mod validation;
pub mod zoom;
