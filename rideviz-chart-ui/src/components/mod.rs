//! Reusable Dioxus RSX components for the ridership chart apps.

mod chart_container;
mod chart_header;
mod date_range_picker;
mod error_display;
mod theme_toggle;
mod zoom_controls;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use date_range_picker::DateRangePicker;
pub use error_display::ErrorDisplay;
pub use theme_toggle::ThemeToggle;
pub use zoom_controls::ZoomControls;
