//! Ticket Validations per Hour of Day
//!
//! Displays a bar chart of validation counts bucketed by hour (0-23),
//! showing when public transport is used the most. Same wiring as the
//! per-route app: theme and chart scripts initialize on mount, the date
//! form gates fetching, and the chart updates in place on range changes.

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
const CHART_ID: &str = "hourly-usage-chart";

/// Endpoint returning the per-hour validation counts.
const DATA_URL: &str = "/data/times";

/// Earliest date with validation records in the database.
const EARLIEST_DATE: &str = "2023-01-01";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("hourly-usage-root"))
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

    use_effect(move || {
        theme.init();
        js_bridge::init_charts();
    });

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

    use_drop(move || {
        let mut chart = chart;
        chart.destroy();
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Validāciju skaits pa diennakts stundām".to_string(),
                subtitle: "Cikos sabiedriskais transports tiek izmantots visvairāk".to_string(),
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
