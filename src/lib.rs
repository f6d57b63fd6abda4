pub mod starter;

use tracing_subscriber::EnvFilter;

#[cfg(feature = "gui")]
pub use shell::run;

/// Installs the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("conversation_starter=info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(feature = "gui")]
mod shell {
    use crate::starter::{
        PracticeLanguage, Scenario, SelectionOptions, SessionController, SessionView, StarterConfig,
    };

    use tauri::async_runtime::Mutex;
    use tauri::Emitter;

    const STATE_EVENT: &str = "starter:state";

    struct StarterState {
        controller: Mutex<SessionController>,
    }

    impl StarterState {
        fn new(cfg: &StarterConfig) -> Self {
            Self {
                controller: Mutex::new(SessionController::from_config(cfg)),
            }
        }
    }

    fn emit_view(app: &tauri::AppHandle, view: &SessionView) {
        if let Err(e) = app.emit(STATE_EVENT, view.clone()) {
            tracing::warn!(error = %e, "failed to emit session state");
        }
    }

    #[tauri::command]
    async fn starter_get_state(state: tauri::State<'_, StarterState>) -> Result<SessionView, String> {
        Ok(state.controller.lock().await.view())
    }

    #[tauri::command]
    fn starter_list_options() -> SelectionOptions {
        SelectionOptions::all()
    }

    #[tauri::command]
    async fn starter_select_language(
        app: tauri::AppHandle,
        state: tauri::State<'_, StarterState>,
        language: Option<PracticeLanguage>,
    ) -> Result<SessionView, String> {
        let view = state.controller.lock().await.select_language(language);
        emit_view(&app, &view);
        Ok(view)
    }

    #[tauri::command]
    async fn starter_select_scenario(
        app: tauri::AppHandle,
        state: tauri::State<'_, StarterState>,
        scenario: Option<Scenario>,
    ) -> Result<SessionView, String> {
        let view = state.controller.lock().await.select_scenario(scenario);
        emit_view(&app, &view);
        Ok(view)
    }

    #[tauri::command]
    async fn starter_cycle_prompt(
        app: tauri::AppHandle,
        state: tauri::State<'_, StarterState>,
    ) -> Result<SessionView, String> {
        let view = state.controller.lock().await.cycle_prompt();
        emit_view(&app, &view);
        Ok(view)
    }

    #[tauri::command]
    async fn starter_edit_response(
        app: tauri::AppHandle,
        state: tauri::State<'_, StarterState>,
        text: String,
    ) -> Result<SessionView, String> {
        let view = state.controller.lock().await.edit_response(text);
        emit_view(&app, &view);
        Ok(view)
    }

    /// Runs a submission. The lock is released while the evaluator works so
    /// the frontend can keep reading the submitting snapshot.
    #[tauri::command]
    async fn starter_submit(
        app: tauri::AppHandle,
        state: tauri::State<'_, StarterState>,
    ) -> Result<SessionView, String> {
        let (pending, evaluator) = {
            let mut ctl = state.controller.lock().await;
            let result = ctl.begin_submit();
            emit_view(&app, &ctl.view());
            (result.map_err(|e| e.to_string())?, ctl.evaluator())
        };

        let feedback = evaluator.evaluate(&pending.text).await;

        let view = state.controller.lock().await.complete_submit(feedback);
        emit_view(&app, &view);
        Ok(view)
    }

    pub fn run() {
        crate::init_tracing();
        let cfg = StarterConfig::from_env();
        tracing::info!(delay_ms = cfg.evaluation_delay.as_millis() as u64, "starting conversation starter");

        tauri::Builder::default()
            .manage(StarterState::new(&cfg))
            .invoke_handler(tauri::generate_handler![
                starter_get_state,
                starter_list_options,
                starter_select_language,
                starter_select_scenario,
                starter_cycle_prompt,
                starter_edit_response,
                starter_submit,
            ])
            .run(tauri::generate_context!())
            .expect("error while running tauri application");
    }
}
