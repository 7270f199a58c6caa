mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use demogen_core::config::DemoGenConfig;
use demogen_core::constants::MAX_DATE_RANGE;
use demogen_core::generator::GeneratorOptions;
use demogen_core::mode::Mode;
use demogen_core::run::{self, RunEvent, RunOptions, RunReport};
use demogen_core::store::OutputDir;
use render::{render_cleared, render_written, Render};
use tracing::Level;

const EXAMPLES: &str = "\
Examples:
  demogen ./demo -n 50 --type all
  demogen ./demo -n 20 --type calendar --with-overdue
  demogen ./demo -n 30 --type board --realistic
  demogen ./demo -n 100 --type mixed --date-range 90

Types:
  all       - Weighted mix of tasks, events, meetings and projects
  calendar  - Events with dates, times, multi-day spans
  board     - Tasks with statuses, priorities
  table     - Tasks, events and projects for table views
  mixed     - Uniform mix of every kind, undated tasks included";

#[derive(Parser)]
#[command(name = "demogen")]
#[command(about = "Generate demo tasks, events, meetings and projects as Markdown files")]
#[command(after_help = EXAMPLES)]
struct Cli {
    /// Output folder for generated Markdown files
    output: PathBuf,

    /// Number of files to generate
    #[arg(short = 'n', long)]
    numfiles: usize,

    /// Type of records to generate (default: all)
    #[arg(short = 't', long = "type", value_enum)]
    kind: Option<TypeArg>,

    /// Include overdue tasks (past due dates)
    #[arg(long)]
    with_overdue: bool,

    /// Include tasks without dates
    #[arg(long)]
    with_undated: bool,

    /// Use realistic titles and data
    #[arg(long)]
    realistic: bool,

    /// How many days ahead events may start (default: 60)
    #[arg(long, value_parser = clap::value_parser!(u32).range(..=i64::from(MAX_DATE_RANGE)))]
    date_range: Option<u32>,

    /// Remove existing Markdown files from the output folder first
    #[arg(long)]
    clear: bool,

    /// Random seed for reproducible generation
    #[arg(long)]
    seed: Option<u64>,

    /// Print every written file and debug logs
    #[arg(short, long)]
    verbose: bool,

    /// Config file (defaults to ~/.config/demogen/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum TypeArg {
    All,
    Calendar,
    Board,
    Table,
    Mixed,
}

impl From<TypeArg> for Mode {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::All => Mode::All,
            TypeArg::Calendar => Mode::Calendar,
            TypeArg::Board => Mode::Board,
            TypeArg::Table => Mode::Table,
            TypeArg::Mixed => Mode::Mixed,
        }
    }
}

impl Cli {
    /// Merge flags over config values. Boolean flags can only switch a feature on.
    fn run_options(&self, config: &DemoGenConfig) -> RunOptions {
        RunOptions {
            count: self.numfiles,
            mode: self.kind.map(Mode::from).unwrap_or(config.mode),
            generator: GeneratorOptions {
                realistic: self.realistic || config.realistic,
                with_overdue: self.with_overdue || config.with_overdue,
                with_undated: self.with_undated || config.with_undated,
                date_range: self.date_range.unwrap_or(config.date_range),
            },
            clear: self.clear,
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    let report = execute(&cli, &config, Local::now().date_naive(), |line| println!("{}", line))?;
    println!("{}", report.render());

    Ok(())
}

/// Run the generator. In verbose mode every cleared folder and written file
/// is reported through `on_line` as it happens.
fn execute(
    cli: &Cli,
    config: &DemoGenConfig,
    today: NaiveDate,
    mut on_line: impl FnMut(String),
) -> Result<RunReport> {
    let output_path = expand_path(&cli.output);
    let output = OutputDir::prepare(&output_path)
        .with_context(|| format!("Failed to prepare output folder {}", output_path.display()))?;

    let verbose = cli.verbose;
    let report = run::run(&output, &cli.run_options(config), today, |event| {
        if verbose {
            on_line(progress_line(output.path(), event));
        }
    })?;
    Ok(report)
}

fn progress_line(output: &Path, event: RunEvent<'_>) -> String {
    match event {
        RunEvent::Cleared(count) => render_cleared(output, count),
        RunEvent::Written(path) => render_written(path),
    }
}

fn load_config(path: Option<&Path>) -> Result<DemoGenConfig> {
    let config = match path {
        Some(path) => DemoGenConfig::load_from(path, true)
            .with_context(|| format!("Failed to load config file at {}", path.display()))?,
        None => DemoGenConfig::load()?,
    };
    Ok(config)
}

/// Logs go to stderr so they never mix with the summary.
fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Expand ~ in the output path
fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}
