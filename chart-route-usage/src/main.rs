//! Ticket Validations per Route
//!
//! Displays a bar chart of ticket validation counts per public-transport
//! route. The user adjusts a date range; the server returns a Chart.js-ready
//! payload for that window and the chart updates in place.
//!
//! Data flow:
//! 1. On mount, the theme store rehydrates from localStorage and the
//!    Chart.js helper script is evaluated.
//! 2. The date inputs are validated on every change; while either field has
//!    an error, no fetch is issued.
//! 3. On a valid range the data URL is rebuilt and the chart store fetches
//!    `/data/routes?start_date=...&end_date=...`, creating the chart on the
//!    first pass and updating it in place afterwards.

use chrono::Local;
use dioxus::prelude::*;
use rideviz_chart_ui::chart_store::ChartStore;
use rideviz_chart_ui::components::{
    ChartContainer, ChartHeader, DateRangePicker, ErrorDisplay, ThemeToggle, ZoomControls,
};
use rideviz_chart_ui::state::AppState;
use rideviz_chart_ui::theme_store::ThemeStore;
use rideviz_chart_ui::{form, js_bridge};
use rideviz_core::dates;
use rideviz_core::validation::DateBounds;

/// Canvas DOM element ID used by Chart.js to render into.
const CHART_ID: &str = "route-usage-chart";

/// Endpoint returning the per-route validation counts.
const DATA_URL: &str = "/data/routes";

/// Earliest date with validation records in the database.
const EARLIEST_DATE: &str = "2023-01-01";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("route-usage-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(|| {
        let max = Local::now().date_naive();
        let min = dates::parse_date(EARLIEST_DATE).unwrap_or(max);
        AppState::new(DateBounds::new(min, max))
    });
    let chart = use_context_provider(ChartStore::new);
    let mut theme = use_context_provider(ThemeStore::new);

    // Rehydrate the theme and evaluate the chart helper script once on mount
    use_effect(move || {
        theme.init();
        js_bridge::init_charts();
    });

    // Validate and (re)load the chart whenever the date range changes
    use_effect(move || {
        let start = (state.start_date)();
        let end = (state.end_date)();

        let errors = form::validate_dates(&state.bounds.peek());
        let valid = errors.is_valid();
        state.validation.set(errors);
        if !valid {
            return;
        }

        let mut chart = chart;
        chart.set_range_url(DATA_URL, Some(&start), Some(&end));
        spawn(async move {
            if chart.has_chart() {
                chart.update_chart().await;
            } else {
                chart.new_chart(CHART_ID).await;
                if chart.has_chart() {
                    state.error_msg.set(None);
                } else {
                    state
                        .error_msg
                        .set(Some("Neizdevās ielādēt grafika datus.".to_string()));
                }
            }
        });
    });

    // Dispose the chart before the view unmounts
    use_drop(move || {
        let mut chart = chart;
        chart.destroy();
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Validāciju skaits pa maršrutiem".to_string(),
                subtitle: "Biļešu validācijas izvēlētajā laika posmā".to_string(),
            }

            div {
                style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: flex-end; margin-bottom: 8px;",
                DateRangePicker {}
                ZoomControls {}
                ThemeToggle {}
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            }

            ChartContainer {
                id: CHART_ID.to_string(),
                loading: chart.loading(),
                min_height: 450,
            }
        }
    }
}
