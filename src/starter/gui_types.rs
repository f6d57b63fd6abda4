use serde::{Deserialize, Serialize};

use super::feedback::character_count;
use super::session::{SessionPhase, SessionState};
use super::types::{PracticeLanguage, Scenario};

pub const SELECT_PLACEHOLDER: &str = "Select";
pub const PROMPT_NEEDS_SELECTION: &str = "Select a language and scenario to generate a prompt.";
pub const PROMPT_UNAVAILABLE: &str = "No prompt available.";
pub const RESPONSE_PLACEHOLDER: &str = "Type what you would say…";
pub const RESPONSE_PLACEHOLDER_LOCKED: &str = "Select a prompt first…";
pub const SUBMIT_LABEL: &str = "Submit";
pub const SUBMITTING_LABEL: &str = "Submitting…";
pub const CHECKING_CAPTION: &str = "Checking your response…";

/// Immutable snapshot of a session, already shaped for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub phase: SessionPhase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<PracticeLanguage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario: Option<Scenario>,
    pub language_label: String,
    pub scenario_label: String,
    pub prompt: String,
    pub prompt_text: String,
    pub prompt_index: usize,
    pub prompt_count: usize,
    pub response_text: String,
    pub response_placeholder: String,
    pub character_count: usize,
    pub character_caption: String,
    pub submit_label: String,
    pub is_loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loading_caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    pub can_generate_prompt: bool,
    pub can_cycle_prompt: bool,
    pub can_submit: bool,
}

impl From<&SessionState> for SessionView {
    fn from(state: &SessionState) -> Self {
        let prompt = state.prompt();
        let prompt_text = if !state.can_generate_prompt() {
            PROMPT_NEEDS_SELECTION
        } else if prompt.is_empty() {
            PROMPT_UNAVAILABLE
        } else {
            prompt
        };
        let chars = character_count(state.response_text());

        Self {
            phase: state.phase(),
            language: state.language(),
            scenario: state.scenario(),
            language_label: state
                .language()
                .map(|l| l.label())
                .unwrap_or(SELECT_PLACEHOLDER)
                .to_string(),
            scenario_label: state
                .scenario()
                .map(|s| s.label())
                .unwrap_or(SELECT_PLACEHOLDER)
                .to_string(),
            prompt: prompt.to_string(),
            prompt_text: prompt_text.to_string(),
            prompt_index: state.prompt_index(),
            prompt_count: state.prompt_options().len(),
            response_text: state.response_text().to_string(),
            response_placeholder: if state.can_generate_prompt() {
                RESPONSE_PLACEHOLDER
            } else {
                RESPONSE_PLACEHOLDER_LOCKED
            }
            .to_string(),
            character_count: chars,
            character_caption: format!("{} characters", chars),
            submit_label: if state.is_loading() { SUBMITTING_LABEL } else { SUBMIT_LABEL }.to_string(),
            is_loading: state.is_loading(),
            loading_caption: state.is_loading().then(|| CHECKING_CAPTION.to_string()),
            error_message: state.error_message().map(str::to_string),
            feedback: state.feedback().map(str::to_string),
            can_generate_prompt: state.can_generate_prompt(),
            can_cycle_prompt: state.can_cycle_prompt(),
            can_submit: state.can_submit(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectOption<T> {
    pub value: T,
    pub label: String,
}

/// The choices offered by the two selection menus.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionOptions {
    pub languages: Vec<SelectOption<PracticeLanguage>>,
    pub scenarios: Vec<SelectOption<Scenario>>,
}

impl SelectionOptions {
    pub fn all() -> Self {
        Self {
            languages: PracticeLanguage::ALL
                .into_iter()
                .map(|value| SelectOption {
                    value,
                    label: value.label().to_string(),
                })
                .collect(),
            scenarios: Scenario::ALL
                .into_iter()
                .map(|value| SelectOption {
                    value,
                    label: value.label().to_string(),
                })
                .collect(),
        }
    }
}
