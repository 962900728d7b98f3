//! Configuration shared by a lint run.

use anyhow::{Context, Result};
use sass_order_config::SassOrderConfig;
use sass_order_linter::LintConfig;
use std::path::{Path, PathBuf};

/// Loaded configuration with CLI overrides applied
#[derive(Debug)]
pub struct LintContext {
    pub config: SassOrderConfig,
    pub lint: LintConfig,
    /// Config file in use, if any
    pub config_path: Option<PathBuf>,
    pub jobs: usize,
}

impl LintContext {
    /// Load the config named on the command line, or the nearest one above
    /// `base_dir`. Running without any config file is fine.
    pub fn load(config_path: Option<&Path>, base_dir: &Path, jobs: Option<usize>) -> Result<Self> {
        let config_path = match config_path {
            Some(path) => Some(base_dir.join(path)),
            None => sass_order_config::find_config(base_dir)
                .context("Failed to search for config file")?,
        };

        let config = match &config_path {
            Some(path) => sass_order_config::load_config(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => {
                tracing::debug!("No config file, using defaults");
                SassOrderConfig::default()
            }
        };

        let lint = Self::lint_config(&config)?;

        if jobs == Some(0) {
            anyhow::bail!("--jobs must be at least 1");
        }
        let jobs = jobs.or(config.jobs).unwrap_or_else(default_jobs);

        Ok(Self {
            config,
            lint,
            config_path,
            jobs,
        })
    }

    fn lint_config(config: &SassOrderConfig) -> Result<LintConfig> {
        let Some(value) = config.lint() else {
            return Ok(LintConfig::default());
        };

        let lint: LintConfig = serde_json::from_value(value.clone())
            .context("Invalid 'lint' configuration")?;
        lint.validate().map_err(anyhow::Error::msg)?;
        Ok(lint)
    }
}

fn default_jobs() -> usize {
    std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get)
}
