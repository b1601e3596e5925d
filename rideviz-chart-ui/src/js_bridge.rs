//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Chart.js itself is loaded by the hosting page (script tag); the helper
//! functions live in `assets/js/bar-chart.js`, embedded at compile time and
//! evaluated as globals exposed via `window.*`. This module provides safe
//! Rust wrappers that hand serialized chart data to those globals.

// Embed the Chart.js helper file at compile time
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('rideviz JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Load and evaluate the chart helper script. Call once at app startup.
///
/// The helpers are declared with `function` statements, so to make them
/// globally accessible (not block-scoped inside the polling callback) they
/// are evaluated at global scope via indirect eval once Chart.js is ready,
/// and then explicitly promoted to `window.*`.
pub fn init_charts() {
    // Store the script on window so the polling callback can eval it
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__ridevizChartScripts = {};",
        serde_json::to_string(BAR_CHART_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForChartJs = setInterval(function() {
                if (typeof Chart !== 'undefined') {
                    clearInterval(waitForChartJs);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__ridevizChartScripts);
                    delete window.__ridevizChartScripts;
                    // Promote function declarations to window explicitly
                    if (typeof renderRidershipChart !== 'undefined') window.renderRidershipChart = renderRidershipChart;
                    if (typeof updateRidershipChart !== 'undefined') window.updateRidershipChart = updateRidershipChart;
                    if (typeof zoomRidershipChart !== 'undefined') window.zoomRidershipChart = zoomRidershipChart;
                    if (typeof resetRidershipChartZoom !== 'undefined') window.resetRidershipChartZoom = resetRidershipChartZoom;
                    if (typeof destroyRidershipChart !== 'undefined') window.destroyRidershipChart = destroyRidershipChart;
                    window.__ridevizChartsReady = true;
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render a bar chart into the canvas with the given id, replacing any chart
/// already bound to that canvas.
///
/// Uses a polling loop to wait for Chart.js to load, the helper script to
/// initialize, and the canvas element to exist before rendering.
pub fn render_bar_chart(canvas_id: &str, data_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__ridevizChartsReady &&
                    typeof window.renderRidershipChart !== 'undefined' &&
                    document.getElementById('{canvas_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderRidershipChart('{canvas_id}', '{escaped_data}');
                    }} catch(e) {{ console.error('[rideviz] renderRidershipChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Replace an existing chart's data in place and redraw, resetting any
/// zoom/pan transform. No-op if no chart is bound to the canvas.
pub fn update_bar_chart(canvas_id: &str, data_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        "if (typeof window.updateRidershipChart !== 'undefined') window.updateRidershipChart('{canvas_id}', '{escaped_data}');",
    ));
}

/// Apply a multiplicative zoom step to the chart bound to the canvas.
pub fn zoom_bar_chart(canvas_id: &str, factor: f64) {
    call_js(&format!(
        "if (typeof window.zoomRidershipChart !== 'undefined') window.zoomRidershipChart('{canvas_id}', {factor});",
    ));
}

/// Reset the chart's zoom/pan transform to its initial state.
pub fn reset_bar_chart_zoom(canvas_id: &str) {
    call_js(&format!(
        "if (typeof window.resetRidershipChartZoom !== 'undefined') window.resetRidershipChartZoom('{canvas_id}');",
    ));
}

/// Dispose the chart bound to the canvas, releasing its canvas and event
/// listener bindings.
pub fn destroy_bar_chart(canvas_id: &str) {
    call_js(&format!(
        "if (typeof window.destroyRidershipChart !== 'undefined') window.destroyRidershipChart('{canvas_id}');",
    ));
}
