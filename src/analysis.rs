//! Analysis API client.
//!
//! Talks to the analyzer backend over a single `POST /analyze` call and maps
//! whatever comes back (including nothing at all) into an [`AnalysisResult`]
//! the demo panel can always render. Every failure mode collapses into the
//! same "System Error" result; callers never see an `Err`.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// Endpoint of the locally running analyzer backend.
pub const ANALYZE_ENDPOINT: &str = "http://localhost:8000/analyze";

// ── Modes ─────────────────────────────────────────────────────────────────────

/// Analysis configuration. Selects both the demo preset and the `mode`
/// parameter sent to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Education,
    Interview,
    Research,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Education, Mode::Interview, Mode::Research];

    /// Wire key, as transmitted in the request body.
    pub fn key(self) -> &'static str {
        match self {
            Mode::Education => "education",
            Mode::Interview => "interview",
            Mode::Research => "research",
        }
    }

    /// Human-readable name for buttons and cards.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Education => "Education",
            Mode::Interview => "Interview",
            Mode::Research => "Research",
        }
    }
}

// ── Request / response types ──────────────────────────────────────────────────

/// Body of one analyze call. Built fresh from the panel's current fields on
/// every submit; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRequest {
    pub problem: String,
    pub reasoning: String,
    pub mode: Mode,
}

/// Raw success-path response body. Every field is optional; the backend is
/// free to omit any of them and the mapping below fills the gaps.
#[derive(Debug, Default, Deserialize)]
struct AnalysisResponse {
    #[serde(default)]
    mistake_type: Option<String>,
    #[serde(default)]
    reasoning_pattern: Option<String>,
    #[serde(default)]
    explanation: Option<String>,
    #[serde(default)]
    raw_response: Option<String>,
    #[serde(default)]
    additional_fields: Option<serde_json::Map<String, Value>>,
}

/// A single extra field value the result card knows how to display.
///
/// Anything that is not a string, number, or boolean is rendered as its
/// compact JSON text so the display stays total over arbitrary backends.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl FieldValue {
    fn from_json(value: Value) -> Self {
        match value {
            Value::String(text) => FieldValue::Text(text),
            Value::Number(number) => FieldValue::Number(number),
            Value::Bool(flag) => FieldValue::Bool(flag),
            other => FieldValue::Text(other.to_string()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Number(number) => write!(f, "{number}"),
            FieldValue::Bool(flag) => write!(f, "{flag}"),
        }
    }
}

/// Normalized analysis outcome, ready for display.
///
/// `additional_fields` keeps the backend's own ordering. `None` means the
/// backend sent no extra fields at all, which is distinct from it sending an
/// empty set.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub mistake_type: String,
    pub reasoning_pattern: String,
    pub explanation: String,
    pub additional_fields: Option<Vec<(String, FieldValue)>>,
}

impl AnalysisResult {
    fn from_response(response: AnalysisResponse) -> Self {
        let explanation = match non_empty(response.explanation) {
            Some(explanation) => explanation,
            None => match non_empty(response.raw_response) {
                Some(raw) => format!("Raw Output: {raw}"),
                None => "No explanation provided.".to_string(),
            },
        };

        AnalysisResult {
            mistake_type: non_empty(response.mistake_type)
                .unwrap_or_else(|| "Unknown Error".to_string()),
            reasoning_pattern: non_empty(response.reasoning_pattern)
                .unwrap_or_else(|| "Analysis incomplete".to_string()),
            explanation,
            additional_fields: response.additional_fields.map(|fields| {
                fields
                    .into_iter()
                    .map(|(key, value)| (key, FieldValue::from_json(value)))
                    .collect()
            }),
        }
    }

    /// Fixed placeholder shown for every transport or server failure.
    pub fn connection_failed() -> Self {
        AnalysisResult {
            mistake_type: "System Error".to_string(),
            reasoning_pattern: "Connection Failed".to_string(),
            explanation: "Could not connect to the analysis server. Please ensure the backend is \
                          running."
                .to_string(),
            additional_fields: None,
        }
    }
}

/// Missing and empty are equivalent everywhere a default applies.
fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|text| !text.is_empty())
}

// ── Client ────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
enum AnalysisError {
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("analysis server returned HTTP {status}")]
    Status { status: u16 },

    #[error("browser fetch failed: {detail}")]
    Fetch { detail: String },

    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl From<JsValue> for AnalysisError {
    fn from(value: JsValue) -> Self {
        AnalysisError::Fetch {
            detail: format!("{value:?}"),
        }
    }
}

/// Runs one analysis round-trip.
///
/// Infallible by contract: any error on the way is logged and folded into the
/// [`AnalysisResult::connection_failed`] sentinel. Never retries and sets no
/// explicit timeout; each call settles exactly once.
pub async fn analyze(request: &AnalysisRequest) -> AnalysisResult {
    match send(request).await {
        Ok(result) => result,
        Err(err) => {
            log::error!("analysis request failed: {err}");
            AnalysisResult::connection_failed()
        }
    }
}

async fn send(request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
    let body = serde_json::to_string(request).map_err(AnalysisError::Encode)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(&body));

    let http_request = Request::new_with_str_and_init(ANALYZE_ENDPOINT, &init)?;
    http_request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or_else(|| AnalysisError::Fetch {
        detail: "no window object".to_string(),
    })?;
    let response: Response = JsFuture::from(window.fetch_with_request(&http_request))
        .await?
        .dyn_into()?;

    // Any non-success status is a failure; the body is not consulted.
    if !response.ok() {
        return Err(AnalysisError::Status {
            status: response.status(),
        });
    }

    let text = JsFuture::from(response.text()?).await?;
    let text = text.as_string().unwrap_or_default();
    let parsed: AnalysisResponse = serde_json::from_str(&text).map_err(AnalysisError::Decode)?;
    Ok(AnalysisResult::from_response(parsed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(body: Value) -> AnalysisResult {
        let response: AnalysisResponse = serde_json::from_value(body).unwrap();
        AnalysisResult::from_response(response)
    }

    #[test]
    fn test_full_response_maps_verbatim() {
        let result = map(json!({
            "mistake_type": "X",
            "reasoning_pattern": "Y",
            "explanation": "Z",
        }));

        assert_eq!(result.mistake_type, "X");
        assert_eq!(result.reasoning_pattern, "Y");
        assert_eq!(result.explanation, "Z");
        assert!(result.additional_fields.is_none());
    }

    #[test]
    fn test_empty_response_uses_default_literals() {
        let result = map(json!({}));

        assert_eq!(result.mistake_type, "Unknown Error");
        assert_eq!(result.reasoning_pattern, "Analysis incomplete");
        assert_eq!(result.explanation, "No explanation provided.");
        assert!(result.additional_fields.is_none());
    }

    #[test]
    fn test_raw_response_fallback_for_explanation() {
        let result = map(json!({ "raw_response": "foo" }));
        assert_eq!(result.explanation, "Raw Output: foo");
    }

    #[test]
    fn test_explanation_wins_over_raw_response() {
        let result = map(json!({ "explanation": "Z", "raw_response": "foo" }));
        assert_eq!(result.explanation, "Z");
    }

    #[test]
    fn test_empty_strings_behave_as_missing() {
        let result = map(json!({
            "mistake_type": "",
            "reasoning_pattern": "",
            "explanation": "",
        }));

        assert_eq!(result.mistake_type, "Unknown Error");
        assert_eq!(result.reasoning_pattern, "Analysis incomplete");
        assert_eq!(result.explanation, "No explanation provided.");
    }

    #[test]
    fn test_additional_fields_preserve_order_and_coerce() {
        let result = map(json!({
            "additional_fields": {
                "confidence": 0.87,
                "flagged": true,
                "note": "check units",
                "trace": { "steps": 3 },
            }
        }));

        let fields = result.additional_fields.unwrap();
        let keys: Vec<&str> = fields.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys, ["confidence", "flagged", "note", "trace"]);

        assert_eq!(fields[0].1.to_string(), "0.87");
        assert_eq!(fields[1].1, FieldValue::Bool(true));
        assert_eq!(fields[2].1, FieldValue::Text("check units".to_string()));
        assert_eq!(fields[3].1, FieldValue::Text(r#"{"steps":3}"#.to_string()));
    }

    #[test]
    fn test_present_but_empty_additional_fields_stay_present() {
        let result = map(json!({ "additional_fields": {} }));
        assert_eq!(result.additional_fields, Some(Vec::new()));
    }

    #[test]
    fn test_connection_failed_sentinel() {
        let sentinel = AnalysisResult::connection_failed();

        assert_eq!(sentinel.mistake_type, "System Error");
        assert_eq!(sentinel.reasoning_pattern, "Connection Failed");
        assert_eq!(
            sentinel.explanation,
            "Could not connect to the analysis server. Please ensure the backend is running."
        );
        assert!(sentinel.additional_fields.is_none());
    }

    #[test]
    fn test_request_body_shape() {
        let request = AnalysisRequest {
            problem: "p".to_string(),
            reasoning: "r".to_string(),
            mode: Mode::Interview,
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "problem": "p", "reasoning": "r", "mode": "interview" })
        );
    }

    #[test]
    fn test_mode_keys_and_labels() {
        let keys: Vec<&str> = Mode::ALL.iter().map(|mode| mode.key()).collect();
        assert_eq!(keys, ["education", "interview", "research"]);

        for mode in Mode::ALL {
            assert_eq!(mode.label().to_lowercase(), mode.key());
        }
    }
}
