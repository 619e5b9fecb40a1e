use clap::Parser;
use orientation_advisor::config::DEFAULT_KNOWLEDGE_BASE;
use orientation_advisor::knowledge::ValidationReport;
use orientation_advisor::utils::logger;
use orientation_advisor::{classify, KnowledgeBase, PersonalityTallies};

#[derive(Parser)]
#[command(name = "kb-report")]
#[command(about = "Summary, integrity check and lookups over the knowledge base")]
struct Args {
    /// Knowledge base JSON file
    #[arg(short, long, default_value = DEFAULT_KNOWLEDGE_BASE)]
    knowledge_base: String,

    /// Keywords to search in descriptions and skills
    #[arg(long, value_delimiter = ',')]
    search: Vec<String>,

    /// List the occupations of a sector
    #[arg(long)]
    sector: Option<String>,

    /// Show an occupation, its similar occupations and training programs
    #[arg(long)]
    occupation: Option<String>,

    /// Field of study to score against --occupation
    #[arg(long, requires = "occupation")]
    field: Option<String>,

    /// Personality tallies JSON to classify
    #[arg(long)]
    personality: Option<String>,

    /// Print the summary and validation report as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let kb = match KnowledgeBase::from_file(&args.knowledge_base) {
        Ok(kb) => kb,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(3);
        }
    };

    let report = kb.validate();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if !args.search.is_empty() {
        let found = kb.search_by_keywords(&args.search);
        println!("\n🔎 Recherche \"{}\": {} métier(s)", args.search.join(", "), found.len());
        for occupation in found {
            println!("  - {} ({}, demande {})", occupation.name, occupation.sector, occupation.demand);
        }
    }

    if let Some(sector) = &args.sector {
        match kb.find_sector(sector) {
            Some(found) => {
                println!("\n🏭 {}: {}", found.name, found.description);
                for occupation in kb.occupations_by_sector(sector) {
                    println!("  - {}", occupation.name);
                }
            }
            None => println!("\n🏭 Secteur inconnu: {}", sector),
        }
    }

    if let Some(name) = &args.occupation {
        match kb.find_occupation(name) {
            Some(occupation) => {
                println!("\n💼 {} ({})", occupation.name, occupation.sector);
                println!("  {}", occupation.description);
                for (similar, score) in kb.similar_occupations_scored(occupation, 5) {
                    println!("  ≈ {} (score {:.1})", similar.name, score);
                }
                for training in kb.training_programs_for(&occupation.name) {
                    println!("  🎓 {} [{}]", training.name, training.institutions.join(", "));
                }
                if let Some(field) = &args.field {
                    let analysis = kb.analyze_compatibility(field, name);
                    println!("  Compatibilité avec {}: {}/10", field, analysis.score);
                    for hint in &analysis.hints {
                        println!("  💡 {}", hint);
                    }
                    if !analysis.skill_gaps.is_empty() {
                        println!("  Lacunes: {}", analysis.skill_gaps.join(", "));
                    }
                }
            }
            None => println!("\n💼 Métier introuvable: {}", name),
        }
    }

    if let Some(path) = &args.personality {
        let tallies = PersonalityTallies::from_file(path)?;
        match classify(&tallies) {
            Some(profile) => {
                println!("\n🧭 Profil de personnalité: {}", profile);
                if let Some(description) = profile.describe() {
                    println!("  {} - {}", description.title, description.group);
                    println!("  {}", description.summary);
                }
                for (_, explanation) in profile.explanations() {
                    println!("  {} ({}): {}", explanation.letter, explanation.label, explanation.description);
                }
            }
            None => println!("\n🧭 Aucune réponse au questionnaire"),
        }
    }

    if !report.is_valid {
        std::process::exit(1);
    }
    Ok(())
}

fn print_report(report: &ValidationReport) {
    if let Some(stats) = &report.statistics {
        println!("📚 Base de connaissances");
        println!("  Métiers: {}", stats.total_occupations);
        println!("  Secteurs porteurs: {}", stats.total_sectors);
        println!("  Compétences: {}", stats.total_skills);
        println!("  Formations: {}", stats.total_trainings);
        println!("  Métiers à forte demande: {}", stats.high_demand_occupations);
        println!("  Métiers en croissance: {}", stats.growth_occupations);
        println!("  Secteurs: {}", stats.sector_names.join(", "));
    }

    for error in &report.errors {
        println!("❌ {}", error);
    }
    for warning in &report.warnings {
        println!("⚠️ {}", warning);
    }
    if report.is_valid && report.warnings.is_empty() {
        println!("✅ Aucun problème détecté");
    }
}
