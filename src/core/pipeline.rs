use crate::core::form::FormState;
use crate::core::schema;
use crate::domain::model::{SubmissionPayload, SubmissionState, Violation};
use crate::domain::ports::{Navigator, Presenter, SubmissionBackend};
use std::sync::{Mutex, PoisonError};

/// Result of one submit request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Another submission was already in flight; nothing was dispatched.
    Ignored,
    Invalid(Vec<Violation>),
    Succeeded,
    Failed(String),
}

/// Validate-then-transmit flow behind the form's submit button.
///
/// No retries: a failed attempt waits for the user to submit again.
/// Runs one submission at a time across every form it serves.
pub struct SubmissionPipeline<B: SubmissionBackend, N: Navigator, P: Presenter> {
    backend: B,
    navigator: N,
    presenter: P,
    gallery_route: String,
    state: Mutex<SubmissionState>,
}

impl<B: SubmissionBackend, N: Navigator, P: Presenter> SubmissionPipeline<B, N, P> {
    pub fn new(backend: B, navigator: N, presenter: P, gallery_route: impl Into<String>) -> Self {
        Self {
            backend,
            navigator,
            presenter,
            gallery_route: gallery_route.into(),
            state: Mutex::new(SubmissionState::Idle),
        }
    }

    pub fn state(&self) -> SubmissionState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    fn transition(&self, next: SubmissionState) {
        let previous = {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            std::mem::replace(&mut *state, next)
        };
        tracing::debug!("Submission state {:?} -> {:?}", previous, next);
        self.presenter.state_changed(next);
    }

    /// Claims the pipeline for one submission; `false` if another is running.
    fn try_start(&self) -> bool {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if *state != SubmissionState::Idle {
            return false;
        }
        *state = SubmissionState::Validating;
        true
    }

    pub async fn submit(&self, form: &FormState) -> SubmissionOutcome {
        let Some(in_flight) = form.begin_submission() else {
            tracing::warn!("⏳ Submission already in flight, ignoring submit request");
            return SubmissionOutcome::Ignored;
        };
        // 一個 pipeline 同時只處理一份表單
        if !self.try_start() {
            tracing::warn!("⏳ Pipeline busy with another form, ignoring submit request");
            return SubmissionOutcome::Ignored;
        }
        tracing::debug!("Submission state Idle -> Validating");
        self.presenter.state_changed(SubmissionState::Validating);

        let submission = match schema::validate(&form.draft()) {
            Ok(submission) => submission,
            Err(violations) => {
                drop(in_flight);
                self.transition(SubmissionState::Invalid);
                tracing::info!("📝 Form has {} invalid field(s)", violations.len());
                self.presenter.show_violations(&violations);
                self.transition(SubmissionState::Idle);
                return SubmissionOutcome::Invalid(violations);
            }
        };

        self.transition(SubmissionState::Submitting);
        let payload = SubmissionPayload::from(submission);
        tracing::debug!(
            "Dispatching payload with {} text field(s){}",
            payload.fields.len(),
            if payload.image.is_some() { " and an image" } else { "" }
        );

        let response = self.backend.submit(payload).await;
        // 離開 Submitting 之前先放下 in-flight
        drop(in_flight);

        let outcome = match response {
            Ok(reply) => match reply.failure_message() {
                None => {
                    self.transition(SubmissionState::Succeeded);
                    tracing::info!("✅ Project submitted");
                    self.navigator.navigate(&self.gallery_route);
                    SubmissionOutcome::Succeeded
                }
                Some(message) => {
                    self.transition(SubmissionState::Failed);
                    tracing::warn!("❌ Backend refused submission ({:?}): {}", reply, message);
                    self.presenter.show_error(&message);
                    SubmissionOutcome::Failed(message)
                }
            },
            Err(e) => {
                self.transition(SubmissionState::Failed);
                tracing::error!("❌ Submission transport failed: {}", e);
                let message = e.to_string();
                self.presenter.show_error(&message);
                SubmissionOutcome::Failed(message)
            }
        };

        self.transition(SubmissionState::Idle);
        outcome
    }
}
