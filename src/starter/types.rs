use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PracticeLanguage {
    French,
    Spanish,
}

impl PracticeLanguage {
    pub const ALL: [PracticeLanguage; 2] = [PracticeLanguage::French, PracticeLanguage::Spanish];

    pub fn label(self) -> &'static str {
        match self {
            PracticeLanguage::French => "French",
            PracticeLanguage::Spanish => "Spanish",
        }
    }
}

impl fmt::Display for PracticeLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PracticeLanguage {
    type Err = StarterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "french" | "fr" => Ok(PracticeLanguage::French),
            "spanish" | "es" => Ok(PracticeLanguage::Spanish),
            other => Err(StarterError::UnknownOption {
                kind: "language",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Scenario {
    OrderingFood,
    MeetingSomeone,
    AskingDirections,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [
        Scenario::OrderingFood,
        Scenario::MeetingSomeone,
        Scenario::AskingDirections,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Scenario::OrderingFood => "Ordering food",
            Scenario::MeetingSomeone => "Meeting someone new",
            Scenario::AskingDirections => "Asking for directions",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Scenario {
    type Err = StarterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        let found = Scenario::ALL.into_iter().find(|scen| {
            let ident = match scen {
                Scenario::OrderingFood => "orderingfood",
                Scenario::MeetingSomeone => "meetingsomeone",
                Scenario::AskingDirections => "askingdirections",
            };
            key == ident || key == scen.label().to_lowercase()
        });
        found.ok_or(StarterError::UnknownOption {
            kind: "scenario",
            value: key,
        })
    }
}

pub const DEFAULT_EVAL_DELAY_MS: u64 = 650;
pub const EVAL_DELAY_ENV: &str = "CONVERSATION_STARTER_EVAL_DELAY_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarterConfig {
    pub evaluation_delay: Duration,
}

impl Default for StarterConfig {
    fn default() -> Self {
        Self {
            evaluation_delay: Duration::from_millis(DEFAULT_EVAL_DELAY_MS),
        }
    }
}

impl StarterConfig {
    pub fn from_env() -> Self {
        Self::from_delay_var(std::env::var(EVAL_DELAY_ENV).ok().as_deref())
    }

    fn from_delay_var(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match raw.trim().parse::<u64>() {
            Ok(ms) => Self {
                evaluation_delay: Duration::from_millis(ms),
            },
            Err(e) => {
                tracing::warn!(value = raw, error = %e, "ignoring {}, using default", EVAL_DELAY_ENV);
                Self::default()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StarterError {
    #[error("Select a language and scenario to get a prompt.")]
    MissingSelection,

    #[error("Type a response before submitting.")]
    EmptyResponse,

    #[error("A response is already being checked.")]
    SubmissionInFlight,

    #[error("Unknown {kind}: {value}")]
    UnknownOption { kind: &'static str, value: String },
}
