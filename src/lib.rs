pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::adapters::{ConsolePresenter, HttpBackend, LogNavigator};
pub use crate::config::{cli::LocalImageSource, TomlConfig};
pub use crate::core::{
    form::FormState,
    pipeline::{SubmissionOutcome, SubmissionPipeline},
    preview::PreviewRegistry,
};
pub use crate::utils::error::{MuralError, Result};
