pub mod controller;
pub mod feedback;
pub mod gui_types;
pub mod prompts;
pub mod session;
pub mod types;

pub use controller::SessionController;
pub use feedback::{feedback, Evaluator, SimulatedEvaluator};
pub use gui_types::{SelectionOptions, SessionView};
pub use prompts::prompts;
pub use session::{PendingSubmission, SessionPhase, SessionState};
pub use types::{PracticeLanguage, Scenario, StarterConfig, StarterError};
