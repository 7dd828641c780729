use std::env;

use crate::ai::common::{DEFAULT_GEMINI_MODEL, GEMINI_API_URL};

#[derive(Clone, Debug)]
pub struct AiConfig {
    pub api_key: String,
    pub model: String,
    pub api_url: String,
}

impl AiConfig {
    /// `None` when `GEMINI_API_KEY` is not set.
    pub fn from_env() -> Option<Self> {
        let api_key = match env::var("GEMINI_API_KEY") {
            Ok(k) if !k.is_empty() => k,
            _ => return None,
        };
        Some(Self {
            api_key,
            model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            api_url: env::var("GEMINI_API_URL").unwrap_or_else(|_| GEMINI_API_URL.to_string()),
        })
    }
}
