//! Zoom buttons for the chart.

use crate::chart_store::ChartStore;
use dioxus::prelude::*;

const BUTTON_STYLE: &str = "padding: 4px 10px; cursor: pointer;";

/// Zoom in/out/reset buttons backed by the shared ChartStore. Each action is
/// a no-op until a chart is mounted.
#[component]
pub fn ZoomControls() -> Element {
    let store = use_context::<ChartStore>();

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 4px; align-items: center;",
            span {
                style: "font-weight: bold; margin-right: 4px;",
                "Mērogs: "
            }
            button {
                style: BUTTON_STYLE,
                onclick: move |_| store.zoom_in(),
                "+"
            }
            button {
                style: BUTTON_STYLE,
                onclick: move |_| store.zoom_out(),
                "\u{2212}"
            }
            button {
                style: BUTTON_STYLE,
                onclick: move |_| store.reset_zoom(),
                "Atiestatīt"
            }
        }
    }
}
