//! The Chart.js-ready payload aggregate returned by the data endpoints.
//!
//! The endpoints return `{labels: [...], datasets: [...]}`. Labels and
//! dataset entries are kept as raw JSON values so library-native fields
//! (colors, stack options, etc.) pass through to the chart untouched while a
//! malformed body still fails to decode.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A bar-chart data aggregate as consumed by Chart.js.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default)]
    pub labels: Vec<Value>,
    pub datasets: Vec<Value>,
}

impl ChartData {
    /// Decode a response body. `None` means the body was not a chart payload.
    pub fn from_json(body: &str) -> Option<Self> {
        match serde_json::from_str(body) {
            Ok(data) => Some(data),
            Err(e) => {
                log::error!("Neizdevās nolasīt grafika datus: {}", e);
                None
            }
        }
    }

    /// Serialize back to the JSON string handed to the chart bridge.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_payload_decodes_unchanged() {
        let body = r#"{"labels":["A"],"datasets":[]}"#;
        let data = ChartData::from_json(body).unwrap();
        assert_eq!(data.labels, vec![json!("A")]);
        assert!(data.datasets.is_empty());
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&data.to_json()).unwrap(),
            serde_json::from_str::<serde_json::Value>(body).unwrap()
        );
    }

    #[test]
    fn test_dataset_fields_pass_through() {
        let body = r##"{"labels":[3,7],"datasets":[{"label":"Tal. 3","data":[10,20],"backgroundColor":"#10b981"}]}"##;
        let data = ChartData::from_json(body).unwrap();
        assert_eq!(data.datasets.len(), 1);
        assert_eq!(data.datasets[0]["backgroundColor"], json!("#10b981"));
    }

    #[test]
    fn test_malformed_body_fails_to_decode() {
        assert!(ChartData::from_json("").is_none());
        assert!(ChartData::from_json("<html>404</html>").is_none());
        assert!(ChartData::from_json(r#"{"labels":["A"]}"#).is_none());
    }
}
