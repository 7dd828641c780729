//! Shared text returned to callers.
//!
//! Keep user-facing strings in this module so they stay in one place and are
//! easy to update.

use crate::target::TargetModel;

pub const METHOD_NOT_ALLOWED: &str = "Method not allowed. Use POST.";
pub const API_KEY_NOT_CONFIGURED: &str =
    "API key not configured. Please set GEMINI_API_KEY in the environment.";
pub const MISSING_FIELDS: &str = "Missing required fields: contents and systemInstruction";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

pub fn upstream_error(reason: &str) -> String {
    format!("Gemini API error: {reason}")
}

/// Placeholder shown when the magic writer cannot reach the model.
pub fn simulated_rewrite(idea: &str, model: TargetModel, error: &str) -> String {
    format!(
        "(AI Enhanced {} Prompt)\nBased on: \"{idea}\"\n\nA cinematic masterpiece featuring detailed subject matter... [Simulated AI Output - API Error: {error}]",
        model.id().to_uppercase()
    )
}
