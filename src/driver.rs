//! The parallel run driver: prepares one target per command-line path,
//! walks them on the main thread, and fans eligible files out to an
//! explicitly constructed worker pool.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use crate::analyzer::Analyzer;
use crate::config::{
    CONFIG_FILE_NAME, ConfigFile, IGNORE_FILE_NAME, RuleConfiguration, discover_upward,
    load_config_file,
};
use crate::error::{Result, ZiglintError};
use crate::fault::Severity;
use crate::output::{ColorMode, FaultFormatter};
use crate::scanner::{IgnoreTracker, VisitedSet, Walker};
use crate::syntax;

/// Files larger than this are skipped with a diagnostic (10 MB).
const LARGE_FILE_THRESHOLD: u64 = 10 * 1024 * 1024;

/// Aggregate error count shared by all workers. Incremented once per file
/// after its analysis completes; read once after the pool drains.
#[derive(Debug, Default)]
pub struct SharedFaultCounter {
    count: RwLock<usize>,
}

impl SharedFaultCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, n: usize) {
        if n == 0 {
            return;
        }
        let mut count = self.count.write().unwrap_or_else(PoisonError::into_inner);
        *count += n;
    }

    #[must_use]
    pub fn total(&self) -> usize {
        *self.count.read().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Per-run options assembled from the CLI by `main`.
#[derive(Debug, Default)]
pub struct RunOptions {
    pub paths: Vec<PathBuf>,
    pub config_path: Option<PathBuf>,
    pub no_config: bool,
    pub exclude: Vec<String>,
    pub include: Vec<String>,
    pub max_line_length: Option<usize>,
    pub color: ColorMode,
    pub quiet: bool,
}

/// One top-level argument with its resolved configuration and ignore
/// tracker. Read-only once traversal starts.
#[derive(Debug)]
struct Target {
    root: PathBuf,
    config: RuleConfiguration,
    tracker: IgnoreTracker,
}

impl Target {
    fn prepare(path: &Path, options: &RunOptions) -> Result<Self> {
        // a missing user-specified root is the one fatal traversal error
        let root = dunce::canonicalize(path).map_err(|source| ZiglintError::PathNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let base = if root.is_dir() {
            root.clone()
        } else {
            root.parent().map_or_else(|| root.clone(), Path::to_path_buf)
        };

        let file_config = resolve_config(&root, options);

        let mut config = file_config.rule_configuration();
        if let Some(limit) = options.max_line_length {
            config.max_line_length.limit = limit;
        }

        let mut tracker = IgnoreTracker::new(base);
        for pattern in &file_config.exclude {
            tracker.add_exclude(pattern);
        }
        for pattern in &file_config.include {
            tracker.add_include(pattern);
        }
        for pattern in &options.exclude {
            tracker.add_exclude(pattern);
        }
        for pattern in &options.include {
            tracker.add_include(pattern);
        }

        if let Some(ignore_path) = discover_upward(&root, IGNORE_FILE_NAME)
            && let Err(e) = tracker.load_ignore_file(&ignore_path)
        {
            eprintln!(
                "ziglint: warning: cannot read {}: {e}",
                ignore_path.display()
            );
        }

        Ok(Self {
            root,
            config,
            tracker,
        })
    }
}

/// Load the configuration governing one target path. Invalid or unreadable
/// configuration falls back to defaults for that target with a diagnostic
/// naming the valid alternatives; it never aborts the run.
fn resolve_config(root: &Path, options: &RunOptions) -> ConfigFile {
    if options.no_config {
        return ConfigFile::default();
    }

    let discovered;
    let config_path = match &options.config_path {
        Some(path) => path.as_path(),
        None => {
            let Some(found) = discover_upward(root, CONFIG_FILE_NAME) else {
                return ConfigFile::default();
            };
            discovered = found;
            discovered.as_path()
        }
    };

    match load_config_file(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "ziglint: warning: {}: {e}; using default configuration",
                config_path.display()
            );
            ConfigFile::default()
        }
    }
}

/// Run the linter over all configured paths and return the aggregate
/// error-severity fault count.
///
/// # Errors
/// Returns an error if a user-specified root path is inaccessible or the
/// worker pool cannot be built.
pub fn run(options: &RunOptions) -> Result<usize> {
    let targets: Vec<Target> = options
        .paths
        .iter()
        .map(|path| Target::prepare(path, options))
        .collect::<Result<_>>()?;

    let pool = rayon::ThreadPoolBuilder::new().build()?;
    let counter = SharedFaultCounter::new();
    let formatter = FaultFormatter::new(options.color);
    let mut visited = VisitedSet::new();
    let quiet = options.quiet;

    pool.scope(|scope| {
        for target in &targets {
            let mut walker = Walker::new(&target.tracker, &mut visited);
            walker.walk(&target.root, &mut |path: PathBuf| {
                let config = &target.config;
                let counter = &counter;
                let formatter = &formatter;
                scope.spawn(move |_| lint_file(&path, config, formatter, counter, quiet));
            });
        }
    });

    Ok(counter.total())
}

/// One worker task: read, parse, analyze and report a single file. Failures
/// here are contained to this file and reported on the diagnostic stream.
fn lint_file(
    path: &Path,
    config: &RuleConfiguration,
    formatter: &FaultFormatter,
    counter: &SharedFaultCounter,
    quiet: bool,
) {
    match std::fs::metadata(path) {
        Ok(metadata) if metadata.len() > LARGE_FILE_THRESHOLD => {
            eprintln!(
                "ziglint: warning: skipping {}: file exceeds {} bytes",
                path.display(),
                LARGE_FILE_THRESHOLD
            );
            return;
        }
        Err(e) => {
            eprintln!("ziglint: warning: cannot access {}: {e}", path.display());
            return;
        }
        Ok(_) => {}
    }

    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("ziglint: warning: cannot read {}: {e}", path.display());
            return;
        }
    };
    let Ok(source) = String::from_utf8(bytes) else {
        eprintln!(
            "ziglint: warning: skipping {}: not valid UTF-8",
            path.display()
        );
        return;
    };

    let tree = syntax::parse(&source);
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    let faults = Analyzer::new(config).analyze(file_name, &source, &tree);
    if faults.is_empty() {
        return;
    }

    let mut errors = 0usize;
    // one lock held for the whole block keeps this file's report contiguous
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    for fault in &faults {
        let severity = config.severity_for(&fault.kind);
        if severity == Severity::Error {
            errors += 1;
        }
        if !quiet {
            let _ = writeln!(lock, "{}", formatter.format(path, fault, severity));
        }
    }
    drop(lock);

    counter.add(errors);
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
