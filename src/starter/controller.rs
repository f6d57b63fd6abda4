use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use tokio::sync::watch;

use super::feedback::{Evaluator, SimulatedEvaluator};
use super::gui_types::SessionView;
use super::session::{PendingSubmission, SessionState};
use super::types::{PracticeLanguage, Scenario, StarterConfig, StarterError};

/// Sole writer of a [`SessionState`]. Every action publishes a fresh
/// [`SessionView`] on a watch channel; readers subscribe to it.
pub struct SessionController {
    state: SessionState,
    evaluator: Arc<dyn Evaluator>,
    updates: watch::Sender<SessionView>,
}

impl SessionController {
    pub fn new(evaluator: Arc<dyn Evaluator>) -> Self {
        let state = SessionState::new();
        let (updates, _) = watch::channel(SessionView::from(&state));
        Self {
            state,
            evaluator,
            updates,
        }
    }

    pub fn from_config(cfg: &StarterConfig) -> Self {
        Self::new(Arc::new(SimulatedEvaluator::from_config(cfg)))
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn view(&self) -> SessionView {
        SessionView::from(&self.state)
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionView> {
        self.updates.subscribe()
    }

    pub fn evaluator(&self) -> Arc<dyn Evaluator> {
        self.evaluator.clone()
    }

    pub fn select_language(&mut self, language: Option<PracticeLanguage>) -> SessionView {
        tracing::debug!(?language, "language selected");
        self.state.select_language(language);
        self.publish()
    }

    pub fn select_scenario(&mut self, scenario: Option<Scenario>) -> SessionView {
        tracing::debug!(?scenario, "scenario selected");
        self.state.select_scenario(scenario);
        self.publish()
    }

    pub fn cycle_prompt(&mut self) -> SessionView {
        self.state.cycle_prompt();
        tracing::debug!(index = self.state.prompt_index(), "prompt cycled");
        self.publish()
    }

    pub fn edit_response(&mut self, text: impl Into<String>) -> SessionView {
        self.state.edit_response(text);
        self.publish()
    }

    /// Validates the draft and enters the submitting phase. Hosts that share
    /// the controller behind a lock call this, release the lock while the
    /// evaluator runs, then hand the result to [`Self::complete_submit`].
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, StarterError> {
        let result = self.state.begin_submit();
        match &result {
            Ok(pending) => tracing::info!(chars = pending.text.chars().count(), "submitting response"),
            Err(StarterError::SubmissionInFlight) => tracing::debug!("submit ignored, already in flight"),
            Err(e) => tracing::warn!(error = %e, "submit rejected"),
        }
        self.publish();
        result
    }

    pub fn complete_submit(&mut self, feedback: String) -> SessionView {
        tracing::info!("feedback ready");
        self.state.complete_submit(feedback);
        self.publish()
    }

    pub fn abandon_submit(&mut self) -> SessionView {
        tracing::debug!("submission abandoned");
        self.state.abandon_submit();
        self.publish()
    }

    /// Validates, waits for the evaluator, and stores its feedback.
    ///
    /// If the returned future is dropped before the evaluator finishes, the
    /// session leaves the submitting phase without feedback.
    pub async fn submit(&mut self) -> Result<SessionView, StarterError> {
        let pending = self.begin_submit()?;
        let evaluator = self.evaluator.clone();

        let mut guard = SubmitGuard {
            controller: self,
            finished: false,
        };
        let feedback = evaluator.evaluate(&pending.text).await;
        guard.finished = true;
        Ok(guard.complete_submit(feedback))
    }

    fn publish(&self) -> SessionView {
        let view = self.view();
        self.updates.send_replace(view.clone());
        view
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::from_config(&StarterConfig::default())
    }
}

struct SubmitGuard<'a> {
    controller: &'a mut SessionController,
    finished: bool,
}

impl Deref for SubmitGuard<'_> {
    type Target = SessionController;

    fn deref(&self) -> &Self::Target {
        self.controller
    }
}

impl DerefMut for SubmitGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.controller
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        if !self.finished {
            self.controller.abandon_submit();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::pin::Pin;
    use std::time::Duration;

    struct Echo;

    impl Evaluator for Echo {
        fn evaluate<'a>(&'a self, text: &'a str) -> Pin<Box<dyn Future<Output = String> + Send + 'a>> {
            Box::pin(async move { format!("• echo: {text}") })
        }
    }

    fn ready_controller(evaluator: Arc<dyn Evaluator>) -> SessionController {
        let mut ctl = SessionController::new(evaluator);
        ctl.select_language(Some(PracticeLanguage::Spanish));
        ctl.select_scenario(Some(Scenario::MeetingSomeone));
        ctl
    }

    #[tokio::test]
    async fn submit_goes_through_evaluator() {
        let mut ctl = ready_controller(Arc::new(Echo));
        ctl.edit_response("  Hola, ¿qué tal?  ");
        let view = ctl.submit().await.unwrap();
        assert_eq!(view.feedback.as_deref(), Some("• echo: Hola, ¿qué tal?"));
        assert!(!view.is_loading);
    }

    #[tokio::test]
    async fn rejected_submit_is_published() {
        let mut ctl = SessionController::new(Arc::new(Echo));
        let mut rx = ctl.subscribe();
        ctl.edit_response("Hola");
        assert_eq!(ctl.submit().await.unwrap_err(), StarterError::MissingSelection);

        assert!(rx.has_changed().unwrap());
        let seen = rx.borrow_and_update().clone();
        assert_eq!(
            seen.error_message.as_deref(),
            Some("Select a language and scenario to get a prompt.")
        );
        assert_eq!(seen.response_text, "Hola");
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_submission_clears_loading() {
        let mut ctl = ready_controller(Arc::new(SimulatedEvaluator::new(Duration::from_secs(5))));
        ctl.edit_response("Hola, me llamo Ana.");

        let outcome = tokio::time::timeout(Duration::from_millis(100), ctl.submit()).await;
        assert!(outcome.is_err());

        assert!(!ctl.state().is_loading());
        assert!(ctl.state().feedback().is_none());
        assert!(ctl.state().can_submit());
    }

    #[tokio::test(start_paused = true)]
    async fn subscribers_see_submitting_then_feedback() {
        let mut ctl = ready_controller(Arc::new(SimulatedEvaluator::new(Duration::from_millis(650))));
        ctl.edit_response("Hola, me llamo Ana. ¿Y tú?");
        let mut rx = ctl.subscribe();

        let pending = ctl.begin_submit().unwrap();
        assert!(rx.borrow_and_update().is_loading);

        let feedback = ctl.evaluator().evaluate(&pending.text).await;
        ctl.complete_submit(feedback);

        let last = rx.borrow_and_update().clone();
        assert!(!last.is_loading);
        assert_eq!(last.submit_label, "Submit");
        assert!(last.feedback.is_some());
    }
}
