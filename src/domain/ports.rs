use crate::domain::model::{BackendReply, SubmissionPayload, SubmissionState, Violation};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Endpoint receiving the multipart payload.
///
/// `Err` means the call itself failed (connection, timeout, body read);
/// an answered request always comes back as a `BackendReply`.
#[async_trait]
pub trait SubmissionBackend: Send + Sync {
    async fn submit(&self, payload: SubmissionPayload) -> Result<BackendReply>;
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}

/// Receives form feedback. Every method defaults to a no-op.
pub trait Presenter: Send + Sync {
    fn state_changed(&self, _state: SubmissionState) {}

    fn show_violations(&self, _violations: &[Violation]) {}

    fn show_error(&self, _message: &str) {}
}

pub trait ConfigProvider: Send + Sync {
    fn backend_endpoint(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn gallery_route(&self) -> &str;
}
