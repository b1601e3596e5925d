//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals shared across components into a
//! single struct provided via `use_context_provider`. Child components
//! retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use rideviz_core::validation::{DateBounds, ValidationState};

/// Shared application state for the ridership chart apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Error message if something went wrong (in-flight loading state lives
    /// on the chart store)
    pub error_msg: Signal<Option<String>>,
    /// Start date of the filter range ("YYYY-MM-DD", as the input holds it)
    pub start_date: Signal<String>,
    /// End date of the filter range
    pub end_date: Signal<String>,
    /// Inclusive window for which the database holds records
    pub bounds: Signal<DateBounds>,
    /// Current error strings for the date form
    pub validation: Signal<ValidationState>,
}

impl AppState {
    /// Create a new AppState with the date inputs pre-filled to the full
    /// available window.
    pub fn new(bounds: DateBounds) -> Self {
        Self {
            error_msg: Signal::new(None),
            start_date: Signal::new(rideviz_core::dates::format_date(&bounds.min)),
            end_date: Signal::new(rideviz_core::dates::format_date(&bounds.max)),
            bounds: Signal::new(bounds),
            validation: Signal::new(ValidationState::default()),
        }
    }
}
