use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "survey",
    version,
    about = "Attachment-style survey: collect yes/no submissions and score A/B/C categories"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write survey.toml and the built-in question content into a directory
    Init(InitCommand),
    /// List the question catalog
    Questions(QuestionsCommand),
    /// Record one respondent's answers and print their result
    Submit(SubmitCommand),
    /// Recompute the result of a stored submission
    #[command(name = "result")]
    ShowResult(ResultCommand),
    /// Aggregate category tallies and per-question statistics
    Stats(StatsCommand),
    /// Remove every stored submission
    Reset(ResetCommand),
}

#[derive(Args)]
pub struct InitCommand {
    pub path: PathBuf,
    #[arg(long)]
    pub dry_run: bool,
    #[arg(long)]
    pub no_overwrite: bool,
}

#[derive(Args)]
pub struct QuestionsCommand {
    pub path: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct SubmitCommand {
    pub path: PathBuf,

    /// JSON array of {"questionId": .., "answer": "yes"|"no"}
    #[arg(long)]
    pub answers_file: Option<PathBuf>,

    /// A single answer as <question-id>=<yes|no>; repeatable
    #[arg(short, long = "answer", value_name = "ID=VALUE")]
    pub answers: Vec<String>,

    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct ResultCommand {
    pub path: PathBuf,
    pub submission_id: u64,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct StatsCommand {
    pub path: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct ResetCommand {
    pub path: PathBuf,
    #[arg(long, short)]
    pub yes: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
