use crate::context::LintContext;
use crate::discovery::{discover_files, resolve_files};
use crate::exit_code::ExitCode;
use crate::output::print_report;
use crate::OutputFormat;
use anyhow::{Context, Result};
use colored::Colorize;
use sass_order_linter::{lint_batch, LintInput};
use sass_order_types::{FileName, Syntax};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Options for one lint run, taken from the command line
#[derive(Debug, Clone)]
pub struct LintOptions {
    pub files: Vec<PathBuf>,
    pub stdin: bool,
    pub config: Option<PathBuf>,
    pub format: OutputFormat,
    pub jobs: Option<usize>,
    pub quiet: bool,
}

/// Lint the files selected by `options` and print the report to stdout.
pub fn run(options: &LintOptions) -> Result<ExitCode> {
    let base_dir = std::env::current_dir().context("Failed to get current directory")?;

    let stdin_text = if options.stdin {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read standard input")?;
        Some(text)
    } else {
        None
    };

    run_in(
        options,
        &base_dir,
        stdin_text,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )
}

/// Lint relative to `base_dir`, writing the report to `out` and problems to `err`.
pub fn run_in(
    options: &LintOptions,
    base_dir: &Path,
    stdin_text: Option<String>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<ExitCode> {
    let ctx = match LintContext::load(options.config.as_deref(), base_dir, options.jobs) {
        Ok(ctx) => ctx,
        Err(e) => {
            writeln!(err, "{} {e:#}", "error:".red().bold())?;
            return Ok(ExitCode::ConfigError);
        }
    };
    tracing::debug!(
        config = ?ctx.config_path,
        jobs = ctx.jobs,
        "Loaded lint context"
    );

    let show_progress = matches!(options.format, OutputFormat::Human) && !options.quiet;
    let spinner = crate::progress::spinner("Finding files...", show_progress);

    let inputs = if let Some(text) = stdin_text {
        vec![LintInput::text(FileName::stdin(), text)]
    } else if options.files.is_empty() {
        discover_files(
            base_dir,
            &ctx.config.include_patterns(),
            &ctx.config.exclude_patterns(),
        )?
        .into_iter()
        .map(|relative| LintInput {
            name: FileName::from_path(&relative),
            source: sass_order_linter::InputSource::Path(base_dir.join(relative)),
        })
        .collect()
    } else {
        let files = resolve_files(base_dir, &options.files);
        for file in &files {
            if Syntax::from_path(file).is_some_and(|syntax| !syntax.is_supported()) {
                writeln!(
                    err,
                    "{} {} uses brace syntax; only indented .sass files are checked reliably",
                    "warning:".yellow().bold(),
                    file.display()
                )?;
            }
        }
        files.into_iter().map(LintInput::path).collect()
    };

    spinner.set_message(format!("Linting {} file(s)...", inputs.len()));
    let report = lint_batch(inputs, &ctx.lint, ctx.jobs);
    spinner.finish_and_clear();

    print_report(&report, options.format, options.quiet, out, err)?;

    Ok(ExitCode::for_report(&report))
}
