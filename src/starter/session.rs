use serde::{Deserialize, Serialize};

use super::prompts::prompts_for_selection;
use super::types::{PracticeLanguage, Scenario, StarterError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionPhase {
    Unconfigured,
    Configured,
    Submitting,
}

/// Everything one screen of practice needs. Mutated only through the
/// transition methods so the prompt list always matches the selections.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    language: Option<PracticeLanguage>,
    scenario: Option<Scenario>,
    prompt_options: &'static [&'static str],
    prompt_index: usize,
    response_text: String,
    is_loading: bool,
    error_message: Option<String>,
    feedback: Option<String>,
}

/// A response that passed validation and is waiting for evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub text: String,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn language(&self) -> Option<PracticeLanguage> {
        self.language
    }

    pub fn scenario(&self) -> Option<Scenario> {
        self.scenario
    }

    pub fn prompt_options(&self) -> &'static [&'static str] {
        self.prompt_options
    }

    pub fn prompt_index(&self) -> usize {
        self.prompt_index
    }

    /// Current prompt, or `""` while the selection is incomplete.
    pub fn prompt(&self) -> &'static str {
        self.prompt_options.get(self.prompt_index).copied().unwrap_or("")
    }

    pub fn response_text(&self) -> &str {
        &self.response_text
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    pub fn can_generate_prompt(&self) -> bool {
        self.language.is_some() && self.scenario.is_some()
    }

    pub fn can_cycle_prompt(&self) -> bool {
        self.can_generate_prompt() && self.prompt_options.len() > 1
    }

    pub fn can_submit(&self) -> bool {
        self.can_generate_prompt() && !self.response_text.trim().is_empty() && !self.is_loading
    }

    pub fn phase(&self) -> SessionPhase {
        if self.is_loading {
            SessionPhase::Submitting
        } else if self.can_generate_prompt() {
            SessionPhase::Configured
        } else {
            SessionPhase::Unconfigured
        }
    }

    pub fn select_language(&mut self, language: Option<PracticeLanguage>) {
        self.language = language;
        self.refresh_prompts();
    }

    pub fn select_scenario(&mut self, scenario: Option<Scenario>) {
        self.scenario = scenario;
        self.refresh_prompts();
    }

    /// Advances to the next prompt, wrapping around. Lists with fewer than
    /// two prompts leave the state untouched.
    pub fn cycle_prompt(&mut self) {
        let len = self.prompt_options.len();
        if len <= 1 {
            return;
        }
        self.clear_outcome();
        self.prompt_index = (self.prompt_index + 1) % len;
    }

    pub fn edit_response(&mut self, text: impl Into<String>) {
        self.response_text = text.into();
    }

    /// Validates the draft and enters the submitting phase.
    ///
    /// Validation failures are recorded in `error_message` (replacing any
    /// previous feedback) and returned. A submission already in flight is
    /// rejected without touching the state.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, StarterError> {
        if self.is_loading {
            return Err(StarterError::SubmissionInFlight);
        }

        self.clear_outcome();

        if !self.can_generate_prompt() {
            return Err(self.reject(StarterError::MissingSelection));
        }

        let trimmed = self.response_text.trim();
        if trimmed.is_empty() {
            return Err(self.reject(StarterError::EmptyResponse));
        }

        let pending = PendingSubmission {
            text: trimmed.to_string(),
        };
        self.is_loading = true;
        Ok(pending)
    }

    /// Stores the evaluation result and leaves the submitting phase.
    pub fn complete_submit(&mut self, feedback: String) {
        self.feedback = Some(feedback);
        self.is_loading = false;
    }

    /// Leaves the submitting phase without recording feedback.
    pub fn abandon_submit(&mut self) {
        self.is_loading = false;
    }

    fn reject(&mut self, err: StarterError) -> StarterError {
        self.error_message = Some(err.to_string());
        err
    }

    fn clear_outcome(&mut self) {
        self.error_message = None;
        self.feedback = None;
    }

    fn refresh_prompts(&mut self) {
        self.clear_outcome();
        self.prompt_options = prompts_for_selection(self.language, self.scenario);
        self.prompt_index = 0;
    }
}
