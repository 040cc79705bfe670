use clap::Parser;
use mural_projetos::core::schema;
use mural_projetos::domain::model::FormField;
use mural_projetos::domain::ports::ConfigProvider;
use mural_projetos::utils::error::{ErrorSeverity, MuralError};
use mural_projetos::utils::{logger, validation::Validate};
use mural_projetos::{
    CliConfig, ConsolePresenter, FormState, HttpBackend, LocalImageSource, LogNavigator,
    PreviewRegistry, SubmissionOutcome, SubmissionPipeline, TomlConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting mural submission CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let exit_code = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match TomlConfig::from_file(path) {
                Ok(file_config) => {
                    let site_url = file_config
                        .site_url()
                        .map(str::to_string)
                        .or_else(|| cli.site_url.clone());
                    run(&cli, &file_config, site_url).await
                }
                Err(e) => report_error(&e),
            }
        }
        None => run(&cli, &cli, cli.site_url.clone()).await,
    };

    if exit_code > 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}

async fn run<C>(cli: &CliConfig, settings: &C, site_url: Option<String>) -> i32
where
    C: ConfigProvider + Validate,
{
    // 驗證配置
    if let Err(e) = settings.validate() {
        return report_error(&e);
    }

    let form = match fill_form(cli).await {
        Ok(form) => form,
        Err(e) => return report_error(&e),
    };

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - the form will not be sent");
        return match schema::validate(&form.draft()) {
            Ok(submission) => {
                println!("✅ Formulário válido: {} ({})", submission.title, submission.status);
                0
            }
            Err(violations) => {
                for violation in &violations {
                    eprintln!("   - {}", violation);
                }
                2
            }
        };
    }

    let backend = match HttpBackend::from_config(settings) {
        Ok(backend) => backend,
        Err(e) => return report_error(&e),
    };
    tracing::info!("📡 Submitting to: {}", backend.endpoint());

    let pipeline = SubmissionPipeline::new(
        backend,
        LogNavigator::new(site_url),
        ConsolePresenter,
        settings.gallery_route(),
    );

    match pipeline.submit(&form).await {
        SubmissionOutcome::Succeeded => {
            if let Some(location) = pipeline.navigator().history().last() {
                println!("✅ Projeto enviado! Veja o mural em {}", location);
            }
            0
        }
        SubmissionOutcome::Invalid(_) => 2,
        SubmissionOutcome::Failed(_) => 1,
        SubmissionOutcome::Ignored => 1,
    }
}

async fn fill_form(cli: &CliConfig) -> mural_projetos::Result<FormState> {
    let mut form = FormState::new(PreviewRegistry::new());
    form.set_field(FormField::Title, cli.title.as_str())?;
    form.set_field(FormField::Description, cli.description.as_str())?;
    form.set_field(FormField::Author, cli.author.as_str())?;
    form.set_field(FormField::GithubUrl, cli.github_url.as_str())?;
    form.set_field(FormField::Status, cli.status.as_str())?;

    if let Some(path) = &cli.image {
        let image = LocalImageSource::new(".").load(path).await?;
        let preview = form.set_image(image);
        tracing::debug!("Image preview at {}", preview);
    }

    Ok(form)
}

fn report_error(e: &MuralError) -> i32 {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    match e.severity() {
        ErrorSeverity::Low => 2,
        ErrorSeverity::Medium | ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
