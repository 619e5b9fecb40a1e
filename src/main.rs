use clap::Parser;
use orientation_advisor::domain::ports::{ConfigProvider, Pipeline};
use orientation_advisor::utils::error::{AdvisorError, ErrorSeverity};
use orientation_advisor::utils::{logger, validation::Validate};
use orientation_advisor::{
    AdvisorEngine, CliConfig, LocalStorage, OpenRouterClient, OrientationPipeline, Session,
};

fn exit_with(e: AdvisorError) -> ! {
    tracing::error!(
        "❌ Orientation run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_logger(&config.log_format, config.verbose);

    tracing::info!("Starting orientation-advisor");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let client = OpenRouterClient::new(config.llm_settings()).unwrap_or_else(|e| exit_with(e));

    if config.check_api {
        match client.test_connection().await {
            Ok(reply) => {
                println!("✅ Connexion API réussie");
                println!("{}", reply.chars().take(100).collect::<String>());
                return Ok(());
            }
            Err(e) => exit_with(e.into()),
        }
    }

    // Without a knowledge base there is nothing to analyse.
    let session = Session::load(&config).unwrap_or_else(|e| exit_with(e));

    let storage = LocalStorage::default();
    let pipeline = OrientationPipeline::new(storage, config.clone(), &session, client);

    if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - the LLM will not be called");
        let students = pipeline.extract().await.unwrap_or_else(|e| exit_with(e));

        for student in &students {
            let request = pipeline.orchestrator().prepare(student);
            let score = request
                .bundle
                .compatibility
                .as_ref()
                .map(|c| format!("{}/10", c.score))
                .unwrap_or_else(|| "n/a".to_string());
            println!(
                "👤 {} - {} → {} (compatibilité: {}, alternatives: {})",
                student.display_name(),
                student.current_field,
                student.intended().unwrap_or("N/A"),
                score,
                request.bundle.alternative_careers.len()
            );
            tracing::debug!("Prompt for {}:\n{}", student.display_name(), request.prompt);
        }

        println!("🔍 {} students ready, nothing sent", students.len());
        return Ok(());
    }

    let engine = AdvisorEngine::new(pipeline);

    match engine.run().await {
        Ok(summary) => {
            tracing::info!("✅ Orientation run completed successfully!");
            println!("✅ Orientation run completed successfully!");
            println!(
                "📊 Étudiants analysés: {}, analyses réussies: {}",
                summary.stats.total, summary.stats.successful
            );
            if let Some(rate) = summary.stats.success_rate() {
                println!("📊 Taux de réussite: {:.1}%", rate);
            }
            println!("📁 Output saved to: {}", summary.output_path);
        }
        Err(e) => exit_with(e),
    }

    Ok(())
}
