mod cli;
mod config;
mod content;
mod error;
mod intake;
mod report;
mod scoring;
mod store;
mod types;

use crate::content::SurveyContent;
use crate::error::{Result, SurveyError};
use crate::store::SubmissionStore;
use crate::types::config::{StorageBackend, SurveyConfig};
use crate::types::report::{QuestionList, ResultReport, StatsReport, SurveySummary};
use crate::types::survey::{Category, NewSubmission, Respondent, Submission};
use clap::Parser;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const REJECTED: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

const CONTENT_FILE: &str = "content.toml";

/// Everything a command needs from a survey directory.
struct Survey {
    config: SurveyConfig,
    content: SurveyContent,
    store: Box<dyn SubmissionStore>,
}

fn open_survey(root: &Path) -> Result<Survey> {
    if !root.exists() {
        return Err(SurveyError::PathNotFound(root.display().to_string()));
    }

    let loaded = config::load_config(root)?;
    if !loaded.has_survey_file {
        warn!(
            "no {} found in {}; using defaults",
            config::DEFAULT_CONFIG_FILE,
            root.display()
        );
    }
    debug!(layers = loaded.sources.len(), "config resolved");
    let cfg = loaded.config;

    let content = match &cfg.content.path {
        Some(path) => SurveyContent::load(&root.join(path))?,
        None => SurveyContent::builtin()?,
    };
    info!(
        survey = %cfg.survey.name,
        questions = content.catalog.len(),
        a = content.catalog.count_in(Category::A),
        b = content.catalog.count_in(Category::B),
        c = content.catalog.count_in(Category::C),
        "survey loaded"
    );

    if cfg.storage.backend == StorageBackend::Memory {
        warn!(
            "storage.backend = \"memory\": submissions last only for this run; \
             nothing will be persisted"
        );
    }
    let store = store::open_store(&cfg, root);
    Ok(Survey {
        config: cfg,
        content,
        store,
    })
}

fn summarize(survey: &Survey, submissions: &[Submission]) -> Result<SurveySummary> {
    Ok(SurveySummary {
        total_responses: submissions.len(),
        category_scores: scoring::tally_categories(submissions, &survey.content.catalog),
        last_updated: survey.store.last_updated()?,
    })
}

fn result_report(survey: &Survey, submission: Submission) -> Result<ResultReport> {
    let submissions = survey.store.all()?;
    let summary = summarize(survey, &submissions)?;
    let dominant = scoring::dominant_category(&submission.answers, &survey.content.catalog);
    info!(
        id = submission.id,
        dominant = %dominant.key(),
        a = dominant.scores.a,
        b = dominant.scores.b,
        c = dominant.scores.c,
        tie = dominant.is_tie(),
        "result computed"
    );
    Ok(ResultReport {
        submission_id: submission.id,
        summary,
        your_answers: submission.answers,
        message: survey.content.message_for(&dominant),
        dominant_category: dominant,
        category_descriptions: survey.content.category_descriptions(),
    })
}

fn output_format(format: cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn write_init_file(path: &Path, contents: &str, cmd: &cli::InitCommand) -> Result<()> {
    if path.exists() && cmd.no_overwrite {
        println!("skip: {} (exists)", path.display());
        return Ok(());
    }
    if cmd.dry_run {
        println!("would write: {}", path.display());
        return Ok(());
    }
    fs::write(path, contents)?;
    println!("wrote: {}", path.display());
    Ok(())
}

fn run(cli: cli::Cli) -> Result<i32> {
    match cli.command {
        cli::Commands::Init(cmd) => {
            if !cmd.dry_run {
                fs::create_dir_all(&cmd.path)?;
            }
            write_init_file(
                &cmd.path.join(config::DEFAULT_CONFIG_FILE),
                &config::default_config_toml(CONTENT_FILE),
                &cmd,
            )?;
            write_init_file(&cmd.path.join(CONTENT_FILE), content::BUILTIN_CONTENT, &cmd)?;
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Questions(cmd) => {
            let survey = open_survey(&cmd.path)?;
            let list = QuestionList {
                survey: survey.config.survey.name.clone(),
                questions: survey.content.catalog.iter().cloned().collect(),
            };
            println!("{}", report::render_questions(&list, output_format(cmd.format))?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Submit(cmd) => {
            let mut survey = open_survey(&cmd.path)?;

            let mut raw = match &cmd.answers_file {
                Some(path) => intake::parse::read_answers_file(path)?,
                None => Vec::new(),
            };
            for arg in &cmd.answers {
                raw.push(intake::parse::parse_answer_arg(arg)?);
            }
            let answers = intake::build_answers(&raw, &survey.content.catalog)?;

            let submission = survey.store.append(NewSubmission {
                respondent: Respondent {
                    name: cmd.name.clone(),
                    email: cmd.email.clone(),
                },
                answers,
            })?;
            let result = result_report(&survey, submission)?;
            println!("{}", report::render_result(&result, output_format(cmd.format))?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::ShowResult(cmd) => {
            let survey = open_survey(&cmd.path)?;
            let submission = survey
                .store
                .get(cmd.submission_id)?
                .ok_or(SurveyError::SubmissionNotFound(cmd.submission_id))?;
            let result = result_report(&survey, submission)?;
            println!("{}", report::render_result(&result, output_format(cmd.format))?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Stats(cmd) => {
            let survey = open_survey(&cmd.path)?;
            let submissions = survey.store.all()?;
            let stats = StatsReport {
                summary: summarize(&survey, &submissions)?,
                questions: scoring::question_stats(&submissions, &survey.content.catalog),
            };
            println!("{}", report::render_stats(&stats, output_format(cmd.format))?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Reset(cmd) => {
            if !cmd.yes {
                return Err(SurveyError::ResetNotConfirmed);
            }
            let mut survey = open_survey(&cmd.path)?;
            survey.store.reset()?;
            println!("reset: all submissions removed");
            Ok(exit_code::SUCCESS)
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = match (quiet, verbose) {
        (true, _) => EnvFilter::new("error"),
        (false, 0) => EnvFilter::new("warn"),
        (false, 1) => EnvFilter::new("info"),
        (false, 2) => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = if e.is_rejection() {
                exit_code::REJECTED
            } else {
                exit_code::RUNTIME_FAILURE
            };
            std::process::exit(code);
        }
    }
}
