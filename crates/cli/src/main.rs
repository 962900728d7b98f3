mod context;
mod discovery;
mod exit_code;
mod lint;
mod output;
mod progress;

use clap::Parser;
use colored::Colorize;
use exit_code::ExitCode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sass-order")]
#[command(about = "Check the property order of indented Sass files", long_about = None)]
#[command(version)]
#[allow(clippy::struct_excessive_bools)]
struct Cli {
    /// Files to lint (default: every .sass file below the current directory)
    #[arg(value_name = "FILES", conflicts_with = "stdin")]
    files: Vec<PathBuf>,

    /// Lint Sass read from standard input
    #[arg(long)]
    stdin: bool,

    /// Path to config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "classic")]
    format: OutputFormat,

    /// Number of worker threads
    #[arg(short, long, value_name = "N")]
    jobs: Option<usize>,

    /// Force colored output even when not a TTY
    #[arg(long, conflicts_with = "no_color")]
    color: bool,

    /// Disable colored output
    #[arg(long, conflicts_with = "color")]
    no_color: bool,

    /// Suppress summary lines and progress indicators
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `file:line:column: message`, one violation per line
    Classic,
    /// Human-readable output with colors
    Human,
    /// JSON output for tooling
    Json,
    /// GitHub Actions workflow commands for PR annotations
    Github,
}

fn main() {
    let cli = Cli::parse();

    init_tracing();
    configure_colors(cli.color, cli.no_color);

    let options = lint::LintOptions {
        files: cli.files,
        stdin: cli.stdin,
        config: cli.config,
        format: cli.format,
        jobs: cli.jobs,
        quiet: cli.quiet,
    };

    let code = match lint::run(&options) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::IoError
        }
    };
    tracing::debug!(code = code.code(), outcome = %code, "Exiting");
    code.exit()
}

/// Initialize tracing, written to stderr and filtered by `RUST_LOG`
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Configure colored output based on flags and environment variables.
///
/// Priority order (highest to lowest):
/// 1. `--color` flag (force colors on)
/// 2. `--no-color` flag (force colors off)
/// 3. `NO_COLOR` environment variable (if set to any value, disable colors)
/// 4. `CLICOLOR_FORCE` environment variable (if set to non-zero, force colors)
/// 5. `CLICOLOR` environment variable (if set to "0", disable colors)
/// 6. Default: colors enabled if stdout is a TTY (handled by `colored` crate)
///
/// See: <https://no-color.org/> and <https://bixense.com/clicolors/>
fn configure_colors(force_color: bool, no_color: bool) {
    use colored::control;

    if force_color {
        control::set_override(true);
    } else if no_color {
        control::set_override(false);
    } else if std::env::var_os("NO_COLOR").is_some() {
        control::set_override(false);
    } else if let Ok(val) = std::env::var("CLICOLOR_FORCE") {
        if !val.is_empty() && val != "0" {
            control::set_override(true);
        }
    } else if let Ok(val) = std::env::var("CLICOLOR") {
        if val == "0" {
            control::set_override(false);
        }
    }
}
