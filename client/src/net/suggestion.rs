//! Suggestion client for the generative text service.
//!
//! Client-side (hydrate): one real HTTP call per invocation via `gloo-net`.
//! Native/test builds resolve straight to the fallback quote.
//!
//! ERROR HANDLING
//! ==============
//! [`fetch_suggestion`] never fails. Missing API key, network errors, quota
//! rejections, and malformed bodies all collapse into a fixed fallback
//! string, so callers present a quote either way and never branch on errors.

#[cfg(test)]
#[path = "suggestion_test.rs"]
mod suggestion_test;

use serde::Deserialize;

/// Returned whenever the service cannot produce a suggestion.
pub const FALLBACK_SUGGESTION: &str = "The pen is mightier than the sword.";

/// Seed theme used when the board text is empty.
pub const DEFAULT_SEED: &str = "حكمة بليغة لسبورة الفصل بالطباشير الأبيض";

/// Model and sampling knobs — fixed at call time, not user-configurable.
const MODEL: &str = "gemini-2.0-flash";
const TEMPERATURE: f64 = 0.8;
const TOP_P: f64 = 0.9;

#[cfg(any(test, feature = "hydrate"))]
fn api_key() -> Option<&'static str> {
    option_env!("GEMINI_API_KEY")
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(key: &str) -> String {
    format!("https://generativelanguage.googleapis.com/v1beta/models/{MODEL}:generateContent?key={key}")
}

/// Build the full prompt for a board context. An empty context falls back to
/// the fixed seed theme; otherwise the user's text is embedded verbatim.
#[must_use]
pub fn build_prompt(context: &str) -> String {
    let theme = if context.trim().is_empty() { DEFAULT_SEED } else { context };
    format!(
        "Suggest a short, inspiring, or funny quote or sentence to write on a board. \
         The user context or theme is: \"{theme}\". \
         Respond ONLY with the text of the suggestion. \
         If the user prompt is in Arabic, provide an Arabic suggestion. \
         Keep it under 15 words."
    )
}

/// Request body for the `generateContent` call.
#[must_use]
pub fn build_request_body(prompt: &str) -> serde_json::Value {
    serde_json::json!({
        "contents": [{ "parts": [{ "text": prompt }] }],
        "generationConfig": { "temperature": TEMPERATURE, "topP": TOP_P },
    })
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Pull the first candidate's text out of a `generateContent` response.
#[must_use]
pub fn extract_text(response: &GenerateContentResponse) -> Option<String> {
    let content = response.candidates.first()?.content.as_ref()?;
    let joined: String = content
        .parts
        .iter()
        .filter_map(|part| part.text.as_deref())
        .collect();
    if joined.trim().is_empty() { None } else { Some(joined) }
}

/// Strip one pair of surrounding quote characters, if present.
#[must_use]
pub fn strip_quotes(text: &str) -> &str {
    let trimmed = text.trim();
    for (open, close) in [('"', '"'), ('«', '»'), ('“', '”')] {
        if let Some(inner) = trimmed.strip_prefix(open).and_then(|rest| rest.strip_suffix(close)) {
            return inner;
        }
    }
    trimmed
}

/// Fetch a suggestion for the given board context. Resolves to
/// [`FALLBACK_SUGGESTION`] on any failure.
pub async fn fetch_suggestion(context: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        match request_suggestion(context).await {
            Ok(suggestion) => suggestion,
            Err(err) => {
                log::warn!("suggestion request failed: {err}");
                FALLBACK_SUGGESTION.to_owned()
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = context;
        FALLBACK_SUGGESTION.to_owned()
    }
}

#[cfg(feature = "hydrate")]
async fn request_suggestion(context: &str) -> Result<String, String> {
    let key = api_key().ok_or("GEMINI_API_KEY is not configured")?;
    let body = build_request_body(&build_prompt(context));
    let resp = gloo_net::http::Request::post(&endpoint(key))
        .json(&body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("suggestion endpoint returned {}", resp.status()));
    }
    let parsed: GenerateContentResponse = resp.json().await.map_err(|e| e.to_string())?;
    extract_text(&parsed)
        .map(|text| strip_quotes(&text).to_owned())
        .ok_or_else(|| "empty suggestion response".to_owned())
}
