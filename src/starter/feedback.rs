use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use unicode_segmentation::UnicodeSegmentation;

use super::types::StarterConfig;

pub const SHORT_RESPONSE_NOTE: &str = "Try adding one more sentence for clarity.";
pub const GOOD_LENGTH_NOTE: &str = "Good length — nice job expressing a complete thought.";
pub const POLITENESS_NOTE: &str = "Nice politeness! That’s very natural in real conversation.";
pub const QUESTION_NOTE: &str = "Consider adding a follow-up question to keep the conversation going.";

const MIN_COMPLETE_LENGTH: usize = 25;
const POLITE_PHRASES: [&str; 4] = ["please", "por favor", "s'il vous plaît", "s’il vous plaît"];

/// User-perceived character count (grapheme clusters).
pub fn character_count(text: &str) -> usize {
    text.graphemes(true).count()
}

pub fn feedback(text: &str) -> String {
    let lower = text.to_lowercase();
    let mut notes: Vec<&str> = Vec::with_capacity(3);

    if character_count(text) < MIN_COMPLETE_LENGTH {
        notes.push(SHORT_RESPONSE_NOTE);
    } else {
        notes.push(GOOD_LENGTH_NOTE);
    }

    if POLITE_PHRASES.iter().any(|p| lower.contains(p)) {
        notes.push(POLITENESS_NOTE);
    }

    if !text.contains('?') {
        notes.push(QUESTION_NOTE);
    }

    format!("• {}", notes.join("\n• "))
}

/// Turns a submitted response into feedback text. The session only ever
/// talks to this trait, so a remote backend can replace the simulated one.
pub trait Evaluator: Send + Sync {
    fn evaluate<'a>(&'a self, text: &'a str) -> Pin<Box<dyn Future<Output = String> + Send + 'a>>;
}

/// Waits out a fixed delay, then runs the local heuristics.
#[derive(Debug, Clone)]
pub struct SimulatedEvaluator {
    delay: Duration,
}

impl SimulatedEvaluator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(cfg: &StarterConfig) -> Self {
        Self::new(cfg.evaluation_delay)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedEvaluator {
    fn default() -> Self {
        Self::from_config(&StarterConfig::default())
    }
}

impl Evaluator for SimulatedEvaluator {
    fn evaluate<'a>(&'a self, text: &'a str) -> Pin<Box<dyn Future<Output = String> + Send + 'a>> {
        Box::pin(async move {
            tokio::time::sleep(self.delay).await;
            feedback(text)
        })
    }
}
