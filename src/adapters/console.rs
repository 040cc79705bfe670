use crate::domain::model::{SubmissionState, Violation};
use crate::domain::ports::Presenter;

/// Writes form feedback to the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsolePresenter;

impl Presenter for ConsolePresenter {
    fn state_changed(&self, state: SubmissionState) {
        if state == SubmissionState::Submitting {
            println!("⏳ Enviando...");
        }
    }

    fn show_violations(&self, violations: &[Violation]) {
        eprintln!("❌ Formulário inválido:");
        for violation in violations {
            eprintln!("   - {}", violation);
        }
    }

    fn show_error(&self, message: &str) {
        eprintln!("❌ {}", message);
    }
}
