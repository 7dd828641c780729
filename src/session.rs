//! Owner of all per-session state.
//!
//! Every mutation goes through [`Session`] and recomputes the prompt right
//! away, so [`Session::prompt`] always reflects the latest committed state.

use rand::Rng;
use tracing::{debug, warn};

use crate::ai::rewrite::request_rewrite;
use crate::compiler::compile;
use crate::messages::simulated_rewrite;
use crate::options::Field;
use crate::randomizer::randomize;
use crate::selection::{Choice, Selections};
use crate::target::{MediaType, Target, TargetModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Prompt compiled from the form.
    #[default]
    Builder,
    /// Prompt written by the remote model from free text.
    Magic,
}

#[derive(Debug, Clone)]
pub struct Session {
    media_type: MediaType,
    target_model: TargetModel,
    mode: AppMode,
    selections: Selections,
    prompt: String,
    magic_input: String,
    generating: bool,
    magic_error: Option<String>,
    rewrite_endpoint: String,
}

impl Session {
    /// Fresh session. `rewrite_endpoint` is the full URL of the proxy's
    /// generate-prompt route.
    pub fn new(rewrite_endpoint: impl Into<String>) -> Self {
        let media_type = MediaType::default();
        let mut session = Self {
            media_type,
            target_model: media_type.default_model(),
            mode: AppMode::Builder,
            selections: Selections::new(),
            prompt: String::new(),
            magic_input: String::new(),
            generating: false,
            magic_error: None,
            rewrite_endpoint: rewrite_endpoint.into(),
        };
        session.recompute();
        session
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    pub fn is_human(&self) -> bool {
        self.selections.is_human()
    }

    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    pub fn target_model(&self) -> TargetModel {
        self.target_model
    }

    pub fn target(&self) -> Target {
        self.target_model.target()
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    pub fn magic_error(&self) -> Option<&str> {
        self.magic_error.as_deref()
    }

    pub fn magic_input(&self) -> &str {
        &self.magic_input
    }

    /// Store a raw picker value or typed text for `field`.
    pub fn update(&mut self, field: Field, value: &str) {
        self.selections.select(field, value);
        self.recompute();
    }

    pub fn set_choice(&mut self, field: Field, choice: Choice) {
        self.selections.set(field, choice);
        self.recompute();
    }

    pub fn reset_field(&mut self, field: Field) {
        self.selections.reset(field);
        self.recompute();
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.selections.set_notes(notes);
        self.recompute();
    }

    /// Switch media type; the model falls back to the type's default.
    pub fn set_media_type(&mut self, media_type: MediaType) {
        self.media_type = media_type;
        self.target_model = media_type.default_model();
        self.recompute();
    }

    pub fn set_target_model(&mut self, model: TargetModel) {
        self.target_model = model;
        self.recompute();
    }

    pub fn set_mode(&mut self, mode: AppMode) {
        self.mode = mode;
        self.recompute();
    }

    /// Editing the input drops the error from the previous attempt.
    pub fn set_magic_input(&mut self, text: impl Into<String>) {
        self.magic_input = text.into();
        self.magic_error = None;
    }

    pub fn clear_magic(&mut self) {
        self.magic_input.clear();
        self.magic_error = None;
    }

    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.selections = randomize(&self.selections, rng);
        self.recompute();
    }

    /// Rewrite the magic input through the proxy.
    ///
    /// Blank input is ignored. `generating` is only set for the duration of
    /// the call so a view can show progress. On failure the error is kept
    /// for display and a simulated prompt replaces the output so it is never
    /// empty.
    pub async fn magic_rewrite(&mut self) {
        if self.magic_input.trim().is_empty() {
            return;
        }
        self.generating = true;
        self.magic_error = None;

        let result =
            request_rewrite(&self.rewrite_endpoint, &self.magic_input, self.target_model).await;
        match result {
            Ok(text) => {
                debug!(len = text.len(), "magic rewrite succeeded");
                self.prompt = text;
            }
            Err(err) => {
                let message = err.to_string();
                warn!(error = %message, "magic rewrite failed");
                self.prompt = simulated_rewrite(&self.magic_input, self.target_model, &message);
                self.magic_error = Some(message);
            }
        }
        self.generating = false;
    }

    fn recompute(&mut self) {
        if self.mode != AppMode::Builder {
            return;
        }
        let is_human = self.selections.is_human();
        self.prompt = compile(&self.selections, is_human, self.target());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_has_a_narrative_prompt() {
        let session = Session::new("http://127.0.0.1:9/api/generate-prompt");
        assert_eq!(session.target_model(), TargetModel::Sora);
        assert!(session.prompt().starts_with("A 4K Cinematic Feature Film Shot. "));
    }

    #[test]
    fn magic_mode_keeps_last_prompt() {
        let mut session = Session::new("http://127.0.0.1:9/api/generate-prompt");
        session.set_mode(AppMode::Magic);
        let before = session.prompt().to_string();
        session.update(Field::Lens, "85mm");
        assert_eq!(session.prompt(), before);

        session.set_mode(AppMode::Builder);
        assert!(session.prompt().contains("Shot on 85mm"));
    }
}
