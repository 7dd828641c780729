//! Text sent to the generation model by the magic writer.

use crate::target::TargetModel;

/// System instruction naming the model the rewrite is for.
pub fn rewrite_instruction(model: TargetModel) -> String {
    format!(
        "You are a professional Prompt Engineer for {model}. Rewrite user input into a detailed technical prompt."
    )
}

/// User turn wrapping the idea to rewrite.
pub fn rewrite_request(idea: &str, model: TargetModel) -> String {
    format!("User Idea: {idea}\n\nTarget Model: {model}\n\nRephrase:")
}
