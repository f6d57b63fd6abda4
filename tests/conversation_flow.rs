use std::sync::Arc;
use std::time::Duration;

use conversation_starter::starter::feedback::{
    GOOD_LENGTH_NOTE, POLITENESS_NOTE, QUESTION_NOTE, SHORT_RESPONSE_NOTE,
};
use conversation_starter::starter::{
    feedback, prompts, PracticeLanguage, Scenario, SessionController, SessionPhase,
    SimulatedEvaluator, StarterConfig, StarterError,
};

fn controller_with_delay(ms: u64) -> SessionController {
    SessionController::new(Arc::new(SimulatedEvaluator::new(Duration::from_millis(ms))))
}

#[tokio::test(start_paused = true)]
async fn french_cafe_round_trip() {
    let mut ctl = controller_with_delay(650);

    ctl.select_language(Some(PracticeLanguage::French));
    let view = ctl.select_scenario(Some(Scenario::OrderingFood));
    assert_eq!(view.prompt, prompts(PracticeLanguage::French, Scenario::OrderingFood)[0]);
    assert_eq!(view.phase, SessionPhase::Configured);

    ctl.edit_response("Je voudrais un café, s'il vous plaît.");
    let started = tokio::time::Instant::now();
    let view = ctl.submit().await.expect("valid submission");
    assert!(started.elapsed() >= Duration::from_millis(650));

    let text = view.feedback.expect("feedback after delay");
    assert_eq!(
        text,
        format!("• {GOOD_LENGTH_NOTE}\n• {POLITENESS_NOTE}\n• {QUESTION_NOTE}")
    );
    assert!(!view.is_loading);
    assert!(view.error_message.is_none());
}

#[tokio::test(start_paused = true)]
async fn short_answer_gets_length_hint() {
    let mut ctl = controller_with_delay(650);
    ctl.select_language(Some(PracticeLanguage::Spanish));
    ctl.select_scenario(Some(Scenario::AskingDirections));
    ctl.edit_response("¿Dónde está?");

    let view = ctl.submit().await.unwrap();
    assert_eq!(view.feedback, Some(format!("• {SHORT_RESPONSE_NOTE}")));
}

#[tokio::test]
async fn missing_selection_leaves_draft_alone() {
    let mut ctl = controller_with_delay(0);
    ctl.select_scenario(Some(Scenario::MeetingSomeone));
    ctl.edit_response("Bonjour !");

    let err = ctl.submit().await.unwrap_err();
    assert_eq!(err, StarterError::MissingSelection);

    let view = ctl.view();
    assert_eq!(
        view.error_message.as_deref(),
        Some("Select a language and scenario to get a prompt.")
    );
    assert_eq!(view.response_text, "Bonjour !");
    assert!(view.feedback.is_none());
    assert!(!view.is_loading);
}

#[tokio::test]
async fn whitespace_draft_is_rejected() {
    let mut ctl = controller_with_delay(0);
    ctl.select_language(Some(PracticeLanguage::French));
    ctl.select_scenario(Some(Scenario::AskingDirections));
    ctl.edit_response("  \n ");

    assert!(!ctl.view().can_submit);
    assert_eq!(ctl.submit().await.unwrap_err(), StarterError::EmptyResponse);
    assert_eq!(
        ctl.view().error_message.as_deref(),
        Some("Type a response before submitting.")
    );
}

#[tokio::test]
async fn new_selection_clears_feedback_and_restarts_prompts() {
    let mut ctl = controller_with_delay(0);
    ctl.select_language(Some(PracticeLanguage::Spanish));
    ctl.select_scenario(Some(Scenario::OrderingFood));
    ctl.cycle_prompt();
    ctl.edit_response("Una mesa para dos, por favor.");
    ctl.submit().await.unwrap();
    assert!(ctl.view().feedback.is_some());

    let view = ctl.select_language(Some(PracticeLanguage::French));
    assert_eq!(view.prompt_index, 0);
    assert!(view.feedback.is_none());
    assert!(view.error_message.is_none());
    assert_eq!(view.response_text, "Una mesa para dos, por favor.");
}

#[test]
fn politeness_check_ignores_selected_language() {
    // Spanish phrasing still counts while practicing French.
    let mut ctl = SessionController::from_config(&StarterConfig::default());
    ctl.select_language(Some(PracticeLanguage::French));
    ctl.select_scenario(Some(Scenario::OrderingFood));
    assert!(feedback("Un café por favor").contains(POLITENESS_NOTE));
    assert_eq!(ctl.view().language_label, "French");
}
