//! Data-endpoint fetch helper.
//!
//! Failures are swallowed into `None` after a log line; the caller treats
//! `None` as "no update occurred" and keeps whatever the page already shows.

use rideviz_core::chart_data::ChartData;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// GET the url and decode the body as a chart payload. Returns `None` on any
/// non-2xx status, network failure, or malformed body.
pub async fn fetch_chart_json(url: &str) -> Option<ChartData> {
    let window = web_sys::window()?;
    let response_value = match JsFuture::from(window.fetch_with_str(url)).await {
        Ok(value) => value,
        Err(e) => {
            log::error!("Neizdevās lejuplādēt grafika datus: {:?}", e);
            return None;
        }
    };
    let response: Response = match response_value.dyn_into() {
        Ok(response) => response,
        Err(_) => {
            log::error!("Neizdevās lejuplādēt grafika datus: atbilde nav Response objekts");
            return None;
        }
    };
    if !response.ok() {
        log::error!("Kļūdaina atbilde no servera: HTTP {}", response.status());
        return None;
    }
    let text_promise = match response.text() {
        Ok(promise) => promise,
        Err(e) => {
            log::error!("Neizdevās nolasīt atbildes saturu: {:?}", e);
            return None;
        }
    };
    let body = match JsFuture::from(text_promise).await {
        Ok(value) => match value.as_string() {
            Some(body) => body,
            None => {
                log::error!("Neizdevās nolasīt atbildes saturu: vērtība nav teksts");
                return None;
            }
        },
        Err(e) => {
            log::error!("Neizdevās nolasīt atbildes saturu: {:?}", e);
            return None;
        }
    };
    ChartData::from_json(&body)
}
