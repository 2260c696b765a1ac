//! Competence: Python student code evaluation CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use competence::analyzer::BasicPythonAnalyzer;
use competence::config::{
    build_ignore_set, is_ignored, load_config, write_default_config, Config, CONFIG_FILENAME,
};
use competence::demo::{run_demonstration, SAMPLE_CODES};
use competence::prompts::RuleBasedPromptGenerator;
use competence::reporter::{AggregateStats, ConsoleReporter, FileReport, JsonReporter};
use competence::CompetenceEvaluator;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;
use walkdir::WalkDir;

/// Competence: checks Python student code and generates learning prompts
#[derive(Parser, Debug)]
#[command(name = "competence")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Python files or directories to evaluate ("-" reads stdin). Runs the demonstration when omitted.
    paths: Vec<PathBuf>,

    /// Output format as JSON
    #[arg(long, short)]
    json: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Quiet mode (one line per file)
    #[arg(long, short)]
    quiet: bool,

    /// Verbose output (analysis messages, prompt objectives, debug logs)
    #[arg(long, short)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Path to config file (default: search .competencerc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Complexity score above which the extension prompt fires (0.0-1.0)
    #[arg(long, value_name = "SCORE")]
    complexity_threshold: Option<f64>,

    /// Exit 1 if any file has syntax errors or misconceptions
    #[arg(long)]
    strict: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the built-in demonstration on three sample snippets
    Demo,

    /// Create .competencerc.json with defaults
    Init {
        /// Complexity threshold to write (default 0.5)
        #[arg(long)]
        complexity_threshold: Option<f64>,

        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    init_logging(args.verbose);
    if args.no_color {
        colored::control::set_override(false);
    }

    if let Some(cmd) = args.command {
        return match cmd {
            Commands::Demo => run_demo(args.verbose),
            Commands::Init {
                complexity_threshold,
                dir,
            } => run_init(complexity_threshold, dir.as_deref()),
        };
    }

    if args.paths.is_empty() {
        return run_demo(args.verbose);
    }

    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let work_dir = match args.paths.first() {
        Some(p) if p.is_dir() => p.clone(),
        Some(p) => p
            .parent()
            .filter(|d| !d.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.clone()),
        None => cwd.clone(),
    };

    // Load config (CLI flags override config file)
    let config = load_config(&work_dir, args.config.as_deref())?
        .merge_with_cli(args.complexity_threshold);
    config.validate()?;

    let ignore_set = if config.ignore.is_empty() {
        None
    } else {
        Some(build_ignore_set(&config.ignore)?)
    };

    let mut files = Vec::new();
    for path in &args.paths {
        files.extend(collect_files(path, &config, ignore_set.as_ref())?);
    }

    if files.is_empty() {
        eprintln!("{}: No Python files found", "Warning".yellow());
        return Ok(ExitCode::from(2));
    }

    let evaluator = CompetenceEvaluator::new(
        BasicPythonAnalyzer::new(),
        RuleBasedPromptGenerator::new().with_complexity_threshold(config.complexity_threshold),
    );
    let (results, failed) = evaluate_files(&evaluator, &files);
    let stats = AggregateStats::from_results(&results, failed);

    // Output results
    if args.json {
        let reporter = if args.pretty {
            JsonReporter::new().pretty()
        } else {
            JsonReporter::new()
        };
        if results.len() == 1 && failed == 0 {
            println!("{}", reporter.report(&results[0].report));
        } else {
            println!("{}", reporter.report_many(&results, &stats));
        }
    } else if args.quiet {
        let reporter = ConsoleReporter::new();
        for r in &results {
            println!("{}", reporter.render_quiet(&r.path, &r.report));
        }
    } else {
        let mut reporter = ConsoleReporter::new();
        if args.verbose {
            reporter = reporter.verbose();
        }
        for r in &results {
            print!("{}", reporter.render_file(&r.path, &r.report));
            if results.len() > 1 {
                println!("{}", "─".repeat(60));
            }
        }
        if results.len() > 1 || failed > 0 {
            print!("{}", reporter.render_summary(&stats));
        }
    }

    if failed > 0 {
        return Ok(ExitCode::from(2));
    }
    if args.strict && (stats.files_with_syntax_errors > 0 || stats.files_with_misconceptions > 0) {
        return Ok(ExitCode::from(1));
    }
    Ok(ExitCode::SUCCESS)
}

fn run_demo(verbose: bool) -> Result<ExitCode> {
    let evaluator = CompetenceEvaluator::new(BasicPythonAnalyzer::new(), RuleBasedPromptGenerator::new());
    let mut reporter = ConsoleReporter::new();
    if verbose {
        reporter = reporter.verbose();
    }
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = run_demonstration(&evaluator, &reporter, &SAMPLE_CODES, &mut out)
        .context("Failed to write demonstration output")?;
    debug!(
        evaluated = outcome.evaluated,
        failed = outcome.failed,
        "demonstration finished"
    );
    Ok(ExitCode::SUCCESS)
}

fn run_init(complexity_threshold: Option<f64>, dir: Option<&Path>) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dir = dir.unwrap_or(&cwd);
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() {
        eprintln!(
            "{}: {} already exists; use --dir to write elsewhere or remove it first",
            "Warning".yellow(),
            config_path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    let path = write_default_config(dir, complexity_threshold)?;
    println!(
        "{}: Created {} with complexityThreshold={}",
        "Done".green().bold(),
        path.display(),
        complexity_threshold.unwrap_or(competence::prompts::DEFAULT_COMPLEXITY_THRESHOLD)
    );
    Ok(ExitCode::SUCCESS)
}

fn collect_files(
    path: &Path,
    config: &Config,
    ignore_set: Option<&globset::GlobSet>,
) -> Result<Vec<PathBuf>> {
    // "-" is stdin; explicit files are evaluated whatever their extension
    if path == Path::new("-") || path.is_file() {
        if let Some(set) = ignore_set {
            if is_ignored(path, set) {
                return Ok(vec![]);
            }
        }
        return Ok(vec![path.to_path_buf()]);
    }

    if !path.is_dir() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !is_skipped_dir(e.path()))
        .filter_map(|e| e.ok())
    {
        let file_path = entry.path();
        if entry.file_type().is_file() && config.matches_extension(file_path) {
            if let Some(set) = ignore_set {
                if is_ignored(file_path, set) {
                    continue;
                }
            }
            files.push(file_path.to_path_buf());
        }
    }

    // Sort for consistent output
    files.sort();

    Ok(files)
}

/// Virtual environments and caches never hold student submissions
fn is_skipped_dir(path: &Path) -> bool {
    path.is_dir()
        && path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| matches!(n, "__pycache__" | ".venv" | "venv" | ".git"))
            .unwrap_or(false)
}

fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Evaluate files one after another; a failing file is reported and skipped.
fn evaluate_files(evaluator: &CompetenceEvaluator, files: &[PathBuf]) -> (Vec<FileReport>, usize) {
    let mut results = Vec::new();
    let mut failed = 0;

    for file in files {
        let outcome = read_source(file).and_then(|code| {
            evaluator
                .evaluate_student_code(&code)
                .with_context(|| format!("Failed to evaluate {}", file.display()))
        });
        match outcome {
            Ok(report) => {
                debug!(path = %file.display(), prompts = report.summary.total_prompts, "evaluated");
                results.push(FileReport {
                    path: file.clone(),
                    report,
                });
            }
            Err(e) => {
                eprintln!("{}: {:#}", "Error analyzing code".red(), e);
                failed += 1;
            }
        }
    }

    (results, failed)
}
