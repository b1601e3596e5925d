//! Chart container component with loading state.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the canvas element (Chart.js will render into this)
    pub id: String,
    /// Whether the chart is still loading
    #[props(default = false)]
    pub loading: bool,
    /// Optional minimum height in pixels
    #[props(default = 400)]
    pub min_height: u32,
}

/// A canvas wrapper for Chart.js charts with loading overlay.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                    "Ielādē grafiku..."
                }
            }
            canvas {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
