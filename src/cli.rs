use crate::assessment::{AnalysisPipeline, AnalysisResult, NarrativeSource, Submission};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::server;
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Mindcheck Assessment Service",
    about = "Score psychological self-assessment submissions and run the analysis HTTP service",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a submission JSON file offline and print the analysis
    Analyze(AnalyzeArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Path to a submission JSON file
    #[arg(long)]
    pub(crate) file: PathBuf,
    /// Include the full answer listing in the output
    #[arg(long)]
    pub(crate) list_answers: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Analyze(args) => run_analyze(args),
    }
}

fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.file)?;
    let submission: Submission = serde_json::from_str(&raw)?;

    let config = AppConfig::load()?;
    let pipeline = AnalysisPipeline::new(config.assessment);
    let result = pipeline.analyze(&submission, Utc::now())?;

    render_analysis(&result, args.list_answers);
    Ok(())
}

fn render_analysis(result: &AnalysisResult, list_answers: bool) {
    println!("Self-assessment analysis {}", result.analysis_id);
    println!(
        "Score: {}/{} ({:.1}%)",
        result.total_score, result.max_score, result.score_percentage
    );
    println!("Risk level: {}", result.risk_level.label());
    if let (Some(diagnosis), Some(confidence)) = (&result.diagnosis, result.confidence) {
        println!(
            "Diagnosis: {} ({:.0}% confidence)",
            diagnosis,
            confidence * 100.0
        );
    }
    println!(
        "Professional help recommended: {}",
        if result.professional_help_needed {
            "yes"
        } else {
            "no"
        }
    );

    println!("\nCategory breakdown");
    for (category, analysis) in &result.category_analysis {
        println!(
            "- {}: {:.1}% ({}) over {} question(s)",
            category,
            analysis.percentage,
            analysis.interpretation.label(),
            analysis.question_count
        );
    }

    let source_note = match result.narrative_source {
        NarrativeSource::Generated => "generated",
        NarrativeSource::Fallback => "fallback",
    };
    println!("\nNarrative ({source_note})");
    println!("{}", result.narrative);

    println!("\nRecommendations");
    for text in &result.recommendations {
        println!("- {text}");
    }

    if list_answers {
        println!("\nAnswers");
        for (category, analysis) in &result.category_analysis {
            for answer in &analysis.answers {
                println!(
                    "- [{}] {} -> {} ({})",
                    category, answer.question_text, answer.answer_label, answer.value
                );
            }
        }
    }
}
