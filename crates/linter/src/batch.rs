//! Linting many files on a worker pool.
//!
//! Files are independent, so each one is parsed and checked on its own
//! worker. Results are tagged with the input index and put back in input
//! order before they are returned, so the output never depends on
//! scheduling.

use crate::config::LintConfig;
use crate::error::LintError;
use crate::report::{lint_source, FileReport, Report};
use sass_order_types::FileName;
use std::path::PathBuf;
use std::sync::Arc;
use threadpool::ThreadPool;

/// Where a file's source text comes from
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Read from disk on the worker
    Path(PathBuf),
    /// Already in memory (e.g. read from stdin)
    Text(String),
}

/// One file to lint
#[derive(Debug, Clone)]
pub struct LintInput {
    pub name: FileName,
    pub source: InputSource,
}

impl LintInput {
    /// A file on disk, reported under its path
    #[must_use]
    pub fn path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            name: FileName::from_path(&path),
            source: InputSource::Path(path),
        }
    }

    /// In-memory source text
    #[must_use]
    pub fn text(name: FileName, text: impl Into<String>) -> Self {
        Self {
            name,
            source: InputSource::Text(text.into()),
        }
    }
}

/// Lint a batch of files using up to `jobs` worker threads.
///
/// The report lists files in the order of `inputs`, whatever order the
/// workers finish in.
#[must_use]
#[tracing::instrument(skip(inputs, config), fields(files = inputs.len()))]
pub fn lint_batch(inputs: Vec<LintInput>, config: &LintConfig, jobs: usize) -> Report {
    let total = inputs.len();
    if total == 0 {
        return Report::default();
    }

    let workers = jobs.clamp(1, total);
    if workers == 1 {
        return Report::new(
            inputs
                .into_iter()
                .map(|input| lint_input(input, config))
                .collect(),
        );
    }

    let names: Vec<FileName> = inputs.iter().map(|input| input.name.clone()).collect();
    let pool = ThreadPool::new(workers);
    let config = Arc::new(config.clone());
    let (sender, receiver) = crossbeam_channel::unbounded();

    for (index, input) in inputs.into_iter().enumerate() {
        let sender = sender.clone();
        let config = Arc::clone(&config);
        pool.execute(move || {
            let report = lint_input(input, &config);
            // The receiver outlives every worker
            let _ = sender.send((index, report));
        });
    }
    drop(sender);

    Report::new(reassemble(names, receiver))
}

/// Put tagged results back in input order.
///
/// A file whose worker never sent a result gets a [`LintError::Worker`]
/// outcome, so the failure still shows up in the report.
fn reassemble(
    names: Vec<FileName>,
    results: impl IntoIterator<Item = (usize, FileReport)>,
) -> Vec<FileReport> {
    let mut slots: Vec<Option<FileReport>> =
        std::iter::repeat_with(|| None).take(names.len()).collect();
    for (index, report) in results {
        slots[index] = Some(report);
    }

    slots
        .into_iter()
        .zip(names)
        .map(|(slot, file)| {
            slot.unwrap_or_else(|| {
                tracing::error!(file = %file, "Worker panicked before reporting file");
                FileReport {
                    file,
                    outcome: Err(LintError::Worker),
                }
            })
        })
        .collect()
}

fn lint_input(input: LintInput, config: &LintConfig) -> FileReport {
    let LintInput { name, source } = input;

    let outcome = match source {
        InputSource::Text(text) => lint_source(&name, &text, config).map_err(LintError::from),
        InputSource::Path(path) => match std::fs::read_to_string(&path) {
            Ok(text) => lint_source(&name, &text, config).map_err(LintError::from),
            Err(source) => Err(LintError::Io { path, source }),
        },
    };

    if let Err(error) = &outcome {
        tracing::warn!(file = %name, error = %error, "Failed to lint file");
    }

    FileReport {
        file: name,
        outcome,
    }
}
