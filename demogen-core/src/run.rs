//! Run driver: generate, render and write a batch of records.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::config::check_date_range;
use crate::error::DemoGenResult;
use crate::generator::{Generator, GeneratorOptions};
use crate::mode::Mode;
use crate::render::render;
use crate::stats::CategoryStats;
use crate::store::{filename_for, OutputDir};

/// Everything one run needs besides the output directory and "today".
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Number of files to write
    pub count: usize,
    pub mode: Mode,
    pub generator: GeneratorOptions,
    /// Remove previously generated files before writing
    pub clear: bool,
    /// Seed for reproducible output; entropy when absent
    pub seed: Option<u64>,
}

/// Outcome of a finished run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub output: PathBuf,
    /// Files removed by `clear`
    pub cleared: usize,
    /// Written files, in generation order
    pub written: Vec<PathBuf>,
    pub stats: CategoryStats,
}

/// Progress notifications, delivered as the run happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEvent<'a> {
    /// The output directory was cleared of this many files
    Cleared(usize),
    Written(&'a Path),
}

/// Generate `options.count` records into `output`.
///
/// Each record is generated, rendered and written before the next one is
/// drawn. A failed write aborts the run; files already written stay.
pub fn run(
    output: &OutputDir,
    options: &RunOptions,
    today: NaiveDate,
    mut on_event: impl FnMut(RunEvent<'_>),
) -> DemoGenResult<RunReport> {
    check_date_range(options.generator.date_range)?;

    let cleared = if options.clear {
        let cleared = output.clear()?;
        on_event(RunEvent::Cleared(cleared));
        cleared
    } else {
        0
    };

    let rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut generator = Generator::new(rng, today, options.generator.clone());

    info!(count = options.count, mode = %options.mode, seed = ?options.seed, "generating records");

    let mut stats = CategoryStats::new();
    let mut written = Vec::with_capacity(options.count);

    for _ in 0..options.count {
        let with_undated = generator.options().with_undated;
        let kind = options.mode.pick_kind(generator.rng_mut(), with_undated)?;
        let record = generator.generate(kind)?;

        let content = render(&record)?;
        let filename = filename_for(&record, generator.rng_mut());
        let path = output.write(&filename, &content)?;
        on_event(RunEvent::Written(&path));
        written.push(path);
        stats.record(&record);
    }

    info!(written = written.len(), dir = %output.path().display(), "run finished");

    Ok(RunReport {
        output: output.path().to_path_buf(),
        cleared,
        written,
        stats,
    })
}
