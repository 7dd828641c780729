//! Wire types shared by the rewrite client and the proxy.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::trace;

pub const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash-preview-09-2025";

/// Returned when a successful response carries no generated text.
pub const NO_RESPONSE: &str = "No response from AI";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

impl Content {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// Body of `POST /api/generate-prompt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratePromptRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "systemInstruction")]
    pub system_instruction: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Pull `candidates[0].content.parts[0].text` out of a generateContent
/// response. A missing or empty text is an error.
pub fn candidate_text(raw: &str) -> Result<String> {
    trace!(raw = %raw, "generate response");
    let response: GenerateResponse = serde_json::from_str(raw)?;
    response
        .candidates
        .and_then(|c| c.into_iter().next())
        .and_then(|c| c.content)
        .and_then(|c| c.parts)
        .and_then(|p| p.into_iter().next())
        .and_then(|p| p.text)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| anyhow!(NO_RESPONSE))
}

/// Upstream body: the system instruction is wrapped into a content part.
pub fn build_upstream_body(contents: &Value, system_instruction: &Value) -> Value {
    json!({
        "contents": contents,
        "systemInstruction": { "parts": [{ "text": system_instruction }] },
    })
}

pub fn upstream_url(base: &str, model: &str, api_key: &str) -> String {
    format!(
        "{}/v1beta/models/{}:generateContent?key={}",
        base.trim_end_matches('/'),
        model,
        api_key
    )
}
