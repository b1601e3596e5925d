//! Chart lifecycle store: fetch, render, update, zoom.
//!
//! Each store owns at most one live chart instance, tracked by the canvas id
//! it was mounted on. Instances are keyed by canvas id on the JS side too, so
//! several stores can drive several charts on one page independently.
//!
//! Every fetch carries a generation ticket. A completion whose ticket is
//! stale (a newer `set_url`+fetch pair started meanwhile) is discarded, so
//! out-of-order responses can never overwrite newer chart state.

use dioxus::prelude::*;
use rideviz_core::chart_data::ChartData;
use rideviz_core::url::build_range_url;
use rideviz_core::zoom::{ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};

use crate::js_bridge;
use crate::net;

/// Reactive store managing a single chart against a remote JSON data source.
#[derive(Clone, Copy)]
pub struct ChartStore {
    /// URL the next fetch will hit
    data_url: Signal<String>,
    /// Whether a chart attempt is still in flight
    loading: Signal<bool>,
    /// Canvas id of the live chart instance, if any
    canvas: Signal<Option<String>>,
    /// Ticket of the most recently started fetch
    generation: Signal<u64>,
}

impl ChartStore {
    pub fn new() -> Self {
        Self {
            data_url: Signal::new(String::new()),
            loading: Signal::new(true),
            canvas: Signal::new(None),
            generation: Signal::new(0),
        }
    }

    pub fn loading(&self) -> bool {
        (self.loading)()
    }

    pub fn data_url(&self) -> String {
        (self.data_url)()
    }

    pub fn has_chart(&self) -> bool {
        self.canvas.peek().is_some()
    }

    /// Store the URL the next fetch will use.
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.data_url.set(url.into());
    }

    /// Build and store the URL from a base endpoint and an optional date
    /// range; date parameters are percent-encoded when present.
    pub fn set_range_url(&mut self, base: &str, start_date: Option<&str>, end_date: Option<&str>) {
        self.data_url.set(build_range_url(base, start_date, end_date));
    }

    fn begin_request(&mut self) -> u64 {
        let ticket = *self.generation.peek() + 1;
        self.generation.set(ticket);
        ticket
    }

    fn is_current(&self, ticket: u64) -> bool {
        *self.generation.peek() == ticket
    }

    /// GET the stored URL. `None` means no update occurred (failure already
    /// logged by the fetch helper).
    async fn fetch_chart_data(&self) -> Option<ChartData> {
        let url = self.data_url.peek().clone();
        net::fetch_chart_json(&url).await
    }

    /// Fetch data and mount a fresh bar chart on `canvas_id`, disposing any
    /// instance this store already owns first. Aborts silently when the
    /// fetch yields nothing; `loading` clears when the attempt concludes,
    /// success or failure.
    pub async fn new_chart(&mut self, canvas_id: &str) {
        let ticket = self.begin_request();
        let data = self.fetch_chart_data().await;
        if !self.is_current(ticket) {
            log::warn!("Novecojusi atbilde grafikam '{}', izlaista", canvas_id);
            return;
        }
        if let Some(data) = data {
            if let Some(old_canvas) = self.canvas.peek().clone() {
                js_bridge::destroy_bar_chart(&old_canvas);
            }
            js_bridge::render_bar_chart(canvas_id, &data.to_json());
            self.canvas.set(Some(canvas_id.to_string()));
        }
        self.loading.set(false);
    }

    /// Fetch data and replace the existing chart's data in place, resetting
    /// any zoom/pan transform. No-op when the fetch yields nothing or no
    /// chart exists yet.
    pub async fn update_chart(&mut self) {
        let ticket = self.begin_request();
        let data = self.fetch_chart_data().await;
        if !self.is_current(ticket) {
            log::warn!("Novecojusi atbilde grafika atjauninājumam, izlaista");
            return;
        }
        if let Some(data) = data {
            if let Some(canvas_id) = self.canvas.peek().clone() {
                js_bridge::update_bar_chart(&canvas_id, &data.to_json());
            }
        }
        self.loading.set(false);
    }

    /// Reset the chart's zoom/pan transform. No-op without a chart.
    pub fn reset_zoom(&self) {
        if let Some(canvas_id) = self.canvas.peek().clone() {
            js_bridge::reset_bar_chart_zoom(&canvas_id);
        }
    }

    /// Zoom in one step. No-op without a chart.
    pub fn zoom_in(&self) {
        if let Some(canvas_id) = self.canvas.peek().clone() {
            js_bridge::zoom_bar_chart(&canvas_id, ZOOM_IN_FACTOR);
        }
    }

    /// Zoom out one step. No-op without a chart.
    pub fn zoom_out(&self) {
        if let Some(canvas_id) = self.canvas.peek().clone() {
            js_bridge::zoom_bar_chart(&canvas_id, ZOOM_OUT_FACTOR);
        }
    }

    /// Dispose the current chart instance. Callers invoke this before the
    /// hosting view unmounts so no canvas or listener bindings dangle.
    pub fn destroy(&mut self) {
        if let Some(canvas_id) = self.canvas.peek().clone() {
            js_bridge::destroy_bar_chart(&canvas_id);
        }
        self.canvas.set(None);
    }
}

impl Default for ChartStore {
    fn default() -> Self {
        Self::new()
    }
}
