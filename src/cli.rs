//! Command-Line Interface
//!
//! One subcommand per query routine. Each command loads the dataset fresh,
//! runs its routine, writes the JSON report, appends a protocol-log line,
//! and prints a formatted summary. Exit code 0 on success (zero matches
//! included), 1 when the dataset cannot be loaded, a required query is
//! missing, a first-aid plant is unknown, or the report cannot be written.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::data::load_plants;
use crate::protocol::log_protocol;
use crate::report::save_results;
use crate::tasks::{
    first_aid, safe_alternatives, search_animals, search_symptoms, severity_stats, top_families,
    TaskError,
};

#[derive(Parser)]
#[command(name = "greenleaf", version, about = "Plant toxicity dataset analysis toolkit")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank the most frequent toxic-plant families
    TopFamilies(TopFamiliesArgs),
    /// Severity level distribution across the dataset
    SeverityStats(SeverityStatsArgs),
    /// Find plants dangerous to a given animal
    SearchAnimal(SearchAnimalArgs),
    /// Find plants causing a given poisoning symptom
    SearchSymptom(SearchSymptomArgs),
    /// First-aid guidance for poisoning by a given plant
    FirstAid(FirstAidArgs),
    /// Safe alternatives to a dangerous plant
    Alternatives(AlternativesArgs),
}

#[derive(Args)]
pub struct TopFamiliesArgs {
    /// JSON dataset file
    #[arg(default_value = "plants.json")]
    pub input_file: PathBuf,

    /// Number of families to report
    #[arg(long, default_value_t = top_families::DEFAULT_LIMIT)]
    pub limit: usize,

    /// Report output file
    #[arg(long, default_value = "results_top_families.json")]
    pub output: PathBuf,
}

#[derive(Args)]
pub struct SeverityStatsArgs {
    /// JSON dataset file
    #[arg(default_value = "plants.json")]
    pub input_file: PathBuf,

    /// Report output file
    #[arg(long, default_value = "results_severity_stats.json")]
    pub output: PathBuf,
}

#[derive(Args)]
pub struct SearchAnimalArgs {
    /// Animal name (e.g. dogs, cats, horses)
    pub animal: Option<String>,

    /// JSON dataset file
    #[arg(long, default_value = "plants.json")]
    pub input: PathBuf,

    /// Report output file
    #[arg(long, default_value = "results_animal_search.json")]
    pub output: PathBuf,
}

#[derive(Args)]
pub struct SearchSymptomArgs {
    /// Symptom to search for (e.g. vomiting, diarrhea, pain)
    pub symptom: Option<String>,

    /// JSON dataset file
    #[arg(long, default_value = "plants.json")]
    pub input: PathBuf,

    /// Report output file
    #[arg(long, default_value = "results_symptoms.json")]
    pub output: PathBuf,
}

#[derive(Args)]
pub struct FirstAidArgs {
    /// Plant name (scientific or common)
    pub plant: Option<String>,

    /// JSON dataset file
    #[arg(long, default_value = "plants.json")]
    pub input: PathBuf,

    /// Report output file
    #[arg(long, default_value = "results_first_aid.json")]
    pub output: PathBuf,
}

#[derive(Args)]
pub struct AlternativesArgs {
    /// Dangerous plant to replace
    pub plant: Option<String>,

    /// Comma-separated animals kept at home
    #[arg(long, default_value = safe_alternatives::DEFAULT_ANIMALS)]
    pub animals: String,

    /// JSON dataset file
    #[arg(long, default_value = "plants.json")]
    pub input: PathBuf,

    /// Report output file
    #[arg(long, default_value = "results_alternatives.json")]
    pub output: PathBuf,
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Commands::TopFamilies(args) => run_top_families(args),
        Commands::SeverityStats(args) => run_severity_stats(args),
        Commands::SearchAnimal(args) => run_search_animal(args),
        Commands::SearchSymptom(args) => run_search_symptom(args),
        Commands::FirstAid(args) => run_first_aid(args),
        Commands::Alternatives(args) => run_alternatives(args),
    }
}

fn task_failed(err: &TaskError) -> ExitCode {
    eprintln!("Error: {err}");
    ExitCode::FAILURE
}

fn save_failed() -> ExitCode {
    eprintln!("Error: failed to save results");
    ExitCode::FAILURE
}

fn run_top_families(args: TopFamiliesArgs) -> ExitCode {
    let plants = load_plants(&args.input_file);
    let report = match top_families::analyze_top_families(&plants, args.limit) {
        Ok(report) => report,
        Err(err) => return task_failed(&err),
    };

    if !save_results(&report, &args.output) {
        return save_failed();
    }
    log_protocol(&format!(
        "Task 'top_families': analyzed {} plants",
        report.total_plants_processed
    ));

    println!("Results saved to {}", args.output.display());
    println!("Top {} most common families:", args.limit);
    for item in &report.top_families {
        println!(
            "    {}. {} - {} species ({}%)",
            item.rank, item.family, item.count, item.percentage
        );
    }
    println!("Total unique families: {}", report.unique_families_count);
    ExitCode::SUCCESS
}

fn run_severity_stats(args: SeverityStatsArgs) -> ExitCode {
    let plants = load_plants(&args.input_file);
    let report = match severity_stats::analyze_severity_statistics(&plants) {
        Ok(report) => report,
        Err(err) => return task_failed(&err),
    };

    if !save_results(&report, &args.output) {
        return save_failed();
    }
    log_protocol(&format!(
        "Severity statistics: {} levels, most common - {}",
        report.summary.unique_severity_levels, report.summary.most_common_severity
    ));

    println!("Results saved to {}", args.output.display());
    println!("Severity level statistics:");
    println!("Total plants analyzed: {}", report.total_plants_analyzed);
    println!(
        "Unique severity levels: {}",
        report.summary.unique_severity_levels
    );
    println!(
        "Most common level: {} ({} plants)",
        report.summary.most_common_severity, report.summary.most_common_count
    );
    println!("Detailed distribution:");
    for item in &report.severity_distribution {
        // 50-char bar equals 100%
        let filled = ((item.percentage / 2.0) as usize).min(50);
        let bar = "█".repeat(filled) + &"░".repeat(50 - filled);
        println!(
            "{:<20} | {} | {:>3} ({:>5.1}%)",
            item.level, bar, item.count, item.percentage
        );
    }
    ExitCode::SUCCESS
}

fn run_search_animal(args: SearchAnimalArgs) -> ExitCode {
    let Some(animal) = args.animal.filter(|a| !a.trim().is_empty()) else {
        eprintln!("Error: animal name is required");
        return ExitCode::FAILURE;
    };

    let plants = load_plants(&args.input);
    let report = match search_animals::search_dangerous_plants_for_animal(&plants, &animal) {
        Ok(report) => report,
        Err(err) => return task_failed(&err),
    };

    if !save_results(&report, &args.output) {
        return save_failed();
    }
    log_protocol(&format!(
        "Animal search '{}': found {} plants",
        animal, report.dangerous_plants_found
    ));

    println!("Results saved to {}", args.output.display());
    println!("Search results for animal: {animal}");
    if report.dangerous_plants_found == 0 {
        println!("No plants dangerous to {animal} found");
        return ExitCode::SUCCESS;
    }

    println!("Found {} dangerous plants:", report.dangerous_plants_found);
    println!();
    for (idx, plant) in report.dangerous_plants.iter().enumerate() {
        println!("{}. {}", idx + 1, plant.scientific_name);
        println!("   Common name: {}", plant.common_name);
        println!("   Family: {}", plant.family);
        println!("   Severity: {}", plant.severity);
        let mut symptoms = plant.symptoms.iter().take(3).cloned().collect::<Vec<_>>().join(", ");
        if plant.symptoms.len() > 3 {
            symptoms += &format!("... (+{})", plant.symptoms.len() - 3);
        }
        println!("   Symptoms: {symptoms}");
        println!();
    }
    ExitCode::SUCCESS
}

fn run_search_symptom(args: SearchSymptomArgs) -> ExitCode {
    let Some(symptom) = args.symptom.filter(|s| !s.trim().is_empty()) else {
        eprintln!("Error: symptom is required");
        return ExitCode::FAILURE;
    };

    let plants = load_plants(&args.input);
    let report = match search_symptoms::search_plants_by_symptom(&plants, &symptom) {
        Ok(report) => report,
        Err(err) => return task_failed(&err),
    };

    if !save_results(&report, &args.output) {
        return save_failed();
    }
    log_protocol(&format!(
        "Symptom search '{}': found {} plants",
        symptom, report.plants_with_symptom
    ));

    println!("Results saved to {}", args.output.display());
    println!("\n{}", "=".repeat(60));
    println!("  SEARCH RESULTS: '{symptom}'");
    println!("{}", "=".repeat(60));
    println!(
        "Plants found: {} of {}",
        report.plants_with_symptom, report.total_plants_checked
    );

    if !report.related_symptoms.is_empty() {
        println!("\nRelated symptoms:");
        for item in report.related_symptoms.iter().take(5) {
            println!("  - {} ({} plants)", item.symptom, item.count);
        }
    }

    if report.matching_plants.is_empty() {
        println!("\nNo plants with this symptom found.");
        println!("Try another search query.");
    } else {
        println!("\n{}", "-".repeat(60));
        println!("Top plants with this symptom:");
        println!("{}", "-".repeat(60));
        for (idx, plant) in report.matching_plants.iter().take(10).enumerate() {
            let severity = plant.severity.to_lowercase();
            let danger = if severity.contains("critical") || severity.contains("severe") {
                "[!!!]"
            } else if severity.contains("high") || severity.contains("moderate") {
                "[!!]"
            } else {
                "[!]"
            };

            println!("\n{}. {} {}", idx + 1, danger, plant.scientific_name);
            if !plant.common_name.is_empty() {
                println!("   Name: {}", plant.common_name);
            }
            println!("   Family: {}", plant.family);
            println!("   Severity: {}", plant.severity);
            println!(
                "   Symptoms: {}",
                plant
                    .matched_symptoms
                    .iter()
                    .take(3)
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
    }

    println!("\n{}", "=".repeat(60));
    ExitCode::SUCCESS
}

fn run_first_aid(args: FirstAidArgs) -> ExitCode {
    let Some(plant_query) = args.plant.filter(|p| !p.trim().is_empty()) else {
        eprintln!("Error: plant name is required");
        return ExitCode::FAILURE;
    };

    let plants = load_plants(&args.input);
    let report = match first_aid::get_first_aid_info(&plants, &plant_query) {
        Ok(report) => report,
        Err(err) => {
            if matches!(err, TaskError::PlantNotFound(_)) {
                eprintln!("Error: {err}");
                eprintln!("Try another name or check the spelling.");
                return ExitCode::FAILURE;
            }
            return task_failed(&err);
        }
    };

    if !save_results(&report, &args.output) {
        return save_failed();
    }
    log_protocol(&format!(
        "First aid: request for {}",
        report.plant.scientific_name
    ));

    println!("Results saved to {}", args.output.display());
    println!("\n{}", "!".repeat(60));
    println!("   POISONOUS PLANT INFORMATION");
    println!("{}", "!".repeat(60));

    println!("\nPlant: {}", report.plant.scientific_name);
    println!("Family: {}", report.plant.family);
    println!("Severity: {}", report.plant.severity);

    println!("\n{}", "-".repeat(60));
    println!("URGENCY: {}", report.urgency);
    println!("{}", "-".repeat(60));

    println!("\nPOISONING SYMPTOMS:");
    for symptom in &report.symptoms {
        println!("  - {symptom}");
    }

    println!("\nDANGEROUS FOR:");
    println!("  {}", report.plant.affected_animals.join(", "));

    if !report.first_aid_actions.is_empty() {
        println!("\n{}", "-".repeat(60));
        println!("FIRST AID ACTIONS:");
        println!("{}", "-".repeat(60));
        for (idx, action) in report.first_aid_actions.iter().enumerate() {
            println!("  {}. {action}", idx + 1);
        }
    }

    println!("\n{}", "=".repeat(60));
    println!("{}", report.emergency_info);
    println!("{}", "=".repeat(60));
    ExitCode::SUCCESS
}

fn run_alternatives(args: AlternativesArgs) -> ExitCode {
    let Some(plant_query) = args.plant.filter(|p| !p.trim().is_empty()) else {
        eprintln!("Error: plant name is required");
        return ExitCode::FAILURE;
    };

    let user_animals: Vec<String> = args
        .animals
        .split(',')
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty())
        .collect();

    let plants = load_plants(&args.input);
    let report =
        match safe_alternatives::find_safe_alternatives(&plants, &plant_query, &user_animals) {
            Ok(report) => report,
            Err(err) => return task_failed(&err),
        };

    if !save_results(&report, &args.output) {
        return save_failed();
    }
    log_protocol(&format!("Alternative search for: {plant_query}"));

    println!("Results saved to {}", args.output.display());
    println!("\n{}", "=".repeat(60));
    println!("              SEARCH RESULTS");
    println!("{}", "=".repeat(60));

    if let Some(info) = &report.dangerous_plant_info {
        println!("\nDangerous plant: {}", info.scientific_name);
        println!("Family: {}", info.family);
        println!("Severity: {}", info.severity);
    }

    println!("\n{}", "-".repeat(60));
    println!("RECOMMENDED SAFE ALTERNATIVES:");
    println!("{}", "-".repeat(60));
    for (idx, plant) in report.known_safe_plants.iter().take(8).enumerate() {
        println!("\n  {}. {}", idx + 1, plant.name);
        println!("     Family: {}", plant.family);
        println!("     {}", plant.note);
    }

    if !report.alternatives_from_db.is_empty() {
        println!("\n{}", "-".repeat(60));
        println!("LOW-RISK PLANTS FROM THE DATASET (Mild):");
        println!("{}", "-".repeat(60));
        for plant in report.alternatives_from_db.iter().take(5) {
            let name = if plant.common_name.is_empty() {
                &plant.scientific_name
            } else {
                &plant.common_name
            };
            println!("  - {} ({})", name, plant.family);
        }
    }

    println!("\n{}", "=".repeat(60));
    println!("TIP: Always check a plant before buying!");
    println!("Even \"safe\" plants can cause mild stomach");
    println!("upset when eaten in excess.");
    println!("{}", "=".repeat(60));
    ExitCode::SUCCESS
}
