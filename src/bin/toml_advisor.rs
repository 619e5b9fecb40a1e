use clap::Parser;
use orientation_advisor::domain::ports::ConfigProvider;
use orientation_advisor::utils::error::ErrorSeverity;
use orientation_advisor::utils::{logger, validation::Validate};
use orientation_advisor::{
    AdvisorEngine, LocalStorage, OpenRouterClient, OrientationPipeline, RunSummary, Session,
    TomlConfig,
};

#[derive(Parser)]
#[command(name = "toml-advisor")]
#[command(about = "Orientation run driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "advisor.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the roster file from the config
    #[arg(long)]
    input: Option<String>,

    /// Override ZIP compression from the config
    #[arg(long)]
    zip: Option<bool>,

    /// Dry run - show what would be processed without executing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Parsed before logging so the log format and level can come from the file.
    let config = TomlConfig::from_file(&args.config);
    let (log_format, log_level) = match &config {
        Ok(c) => (c.log_format(), c.log_level()),
        Err(_) => ("compact", None),
    };
    logger::init_logger_with_level(log_format, args.verbose, log_level);

    tracing::info!("🚀 Starting TOML-based orientation run");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let mut config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Some(input) = args.input {
        tracing::info!("🔧 Roster overridden to: {}", input);
        config.input.roster = input;
    }
    if let Some(zip) = args.zip {
        tracing::info!("🔧 ZIP export overridden to: {}", zip);
        config.export.compression = Some(zip);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");
    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No actual processing will occur");
        perform_dry_run(&config);
        return Ok(());
    }

    match run(&config).await {
        Ok(summary) => {
            println!("✅ Orientation run completed successfully!");
            println!(
                "📊 {} students, {} successful, {} failed",
                summary.stats.total, summary.stats.successful, summary.stats.failed
            );
            println!("📁 Output saved to: {}", summary.output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Orientation run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

async fn run(config: &TomlConfig) -> orientation_advisor::Result<RunSummary> {
    let session = Session::load(config)?;
    let client = OpenRouterClient::new(config.llm_settings())?;
    let pipeline =
        OrientationPipeline::new(LocalStorage::default(), config.clone(), &session, client);
    AdvisorEngine::new(pipeline).run().await
}

fn display_config_summary(config: &TomlConfig) {
    let settings = config.llm_settings();

    tracing::info!("📋 Configuration Summary:");
    tracing::info!("  Advisor: {}", config.advisor.name);
    tracing::info!("  Knowledge base: {}", config.knowledge_base_path());
    tracing::info!("  Roster: {}", config.input_path());
    if let Some(personality) = config.personality_path() {
        tracing::info!("  Personality tallies: {}", personality);
    }
    tracing::info!("  LLM: {} via {}", settings.model, settings.endpoint);
    tracing::info!(
        "  Retries: {} attempts, {:?} apart",
        settings.retry.max_attempts,
        settings.retry.delay
    );
    tracing::info!("  Output: {}", config.output_path());
    tracing::info!("  ZIP export: {}", config.compress_export());
}

fn perform_dry_run(config: &TomlConfig) {
    let knowledge_base = std::path::Path::new(config.knowledge_base_path());
    let roster = std::path::Path::new(config.input_path());

    println!("🔍 Dry run:");
    println!(
        "  Knowledge base {} ({})",
        knowledge_base.display(),
        if knowledge_base.exists() { "found" } else { "missing" }
    );
    println!(
        "  Roster {} ({})",
        roster.display(),
        if roster.exists() { "found" } else { "missing" }
    );
    println!(
        "  Report would be written under {} with prefix '{}'",
        config.output_path(),
        config.export_prefix()
    );
}
