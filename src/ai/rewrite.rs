//! Client side of the magic writer: sends an idea through the proxy and
//! returns the rewritten prompt.

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::ai::common::{candidate_text, Content, GeneratePromptRequest};
use crate::ai::prompts::{rewrite_instruction, rewrite_request};
use crate::messages::simulated_rewrite;
use crate::target::TargetModel;

/// Path the proxy serves.
pub const GENERATE_PROMPT_PATH: &str = "/api/generate-prompt";

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

pub fn build_rewrite_request(idea: &str, model: TargetModel) -> GeneratePromptRequest {
    GeneratePromptRequest {
        contents: vec![Content::text(rewrite_request(idea, model))],
        system_instruction: rewrite_instruction(model),
    }
}

/// Ask the proxy at `endpoint` to rewrite `idea` for `model`.
///
/// Non-success responses become an error carrying the body's `error`
/// field, or `HTTP <code>: <reason>` when there is none.
#[instrument(level = "trace", skip(idea))]
pub async fn request_rewrite(endpoint: &str, idea: &str, model: TargetModel) -> Result<String> {
    let body = build_rewrite_request(idea, model);
    debug!(endpoint, %model, "sending rewrite request");

    let client = reqwest::Client::new();
    let resp = client.post(endpoint).json(&body).send().await?;

    let status = resp.status();
    if !status.is_success() {
        let raw = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&raw)
            .ok()
            .and_then(|b| b.error)
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| {
                format!(
                    "HTTP {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or_default()
                )
            });
        warn!(%status, error = %message, "rewrite request failed");
        return Err(anyhow!(message));
    }

    let raw = resp.text().await?;
    candidate_text(&raw)
}

/// Rewrite `idea`, falling back to a simulated prompt on any failure.
pub async fn rewrite(endpoint: &str, idea: &str, model: TargetModel) -> String {
    match request_rewrite(endpoint, idea, model).await {
        Ok(text) => text,
        Err(err) => {
            warn!(error = %err, "using simulated rewrite");
            simulated_rewrite(idea, model, &err.to_string())
        }
    }
}
