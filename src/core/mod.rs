pub mod form;
pub mod pipeline;
pub mod preview;
pub mod schema;

pub use crate::domain::model::{ProjectSubmission, SubmissionDraft, SubmissionState, Violation};
pub use crate::domain::ports::{ConfigProvider, Navigator, Presenter, SubmissionBackend};
pub use crate::utils::error::Result;
