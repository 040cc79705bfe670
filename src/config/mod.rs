pub mod cli;
pub mod toml_config;

pub use toml_config::TomlConfig;

pub const DEFAULT_GALLERY_ROUTE: &str = "/";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::time::Duration;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "mural")]
#[command(about = "Submit a student project to the project mural")]
pub struct CliConfig {
    /// Backend endpoint receiving the multipart submission
    #[arg(long, default_value = "http://localhost:3000/api/projects")]
    pub endpoint: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    /// Route of the gallery view opened after a successful submission
    #[arg(long, default_value = DEFAULT_GALLERY_ROUTE)]
    pub gallery_route: String,

    /// Public site address, used to print the gallery location
    #[arg(long)]
    pub site_url: Option<String>,

    /// TOML file supplying backend and navigation settings
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, default_value = "")]
    pub title: String,

    #[arg(long, default_value = "")]
    pub description: String,

    #[arg(long, default_value = "")]
    pub author: String,

    #[arg(long, default_value = "")]
    pub github_url: String,

    /// FINALIZADO, "EM DESENVOLVIMENTO" or "AO VIVO"
    #[arg(long, default_value = "EM DESENVOLVIMENTO")]
    pub status: String,

    /// Cover image (jpeg, jpg, png or webp, up to 5MB)
    #[arg(long)]
    pub image: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Validate the form without sending it")]
    pub dry_run: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn backend_endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn gallery_route(&self) -> &str {
        &self.gallery_route
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("endpoint", &self.endpoint)?;
        validation::validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        validation::validate_route("gallery_route", &self.gallery_route)?;
        if let Some(site_url) = &self.site_url {
            validation::validate_url("site_url", site_url)?;
        }
        Ok(())
    }
}
