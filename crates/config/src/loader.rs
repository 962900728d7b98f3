use crate::{ConfigError, Result, SassOrderConfig};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names to search for, in order of preference
pub const CONFIG_FILES: &[&str] = &[
    ".sassorderrc.yml",
    ".sassorderrc.yaml",
    ".sassorderrc.json",
    ".sassorderrc",
    "sassorder.toml",
];

/// Find a config file by walking up the directory tree from the given start directory.
/// Returns the path to the config file if found.
#[tracing::instrument(fields(start = %start_dir.display()))]
pub fn find_config(start_dir: &Path) -> Result<Option<PathBuf>> {
    let mut current_dir = start_dir.to_path_buf();
    let mut checked_dirs = 0;

    loop {
        tracing::trace!(dir = %current_dir.display(), "Checking directory for config files");
        for file_name in CONFIG_FILES {
            let config_path = current_dir.join(file_name);
            if config_path.is_file() {
                tracing::info!(path = %config_path.display(), checked_dirs, "Found config file");
                return Ok(Some(config_path));
            }
        }

        checked_dirs += 1;
        if !current_dir.pop() {
            tracing::debug!(checked_dirs, "No config file found");
            break;
        }
    }

    Ok(None)
}

/// Load a config from the specified path.
/// Automatically detects the format based on file name and extension.
#[tracing::instrument(fields(path = %path.display()))]
pub fn load_config(path: &Path) -> Result<SassOrderConfig> {
    tracing::debug!("Reading config file");
    let contents = fs::read_to_string(path)?;
    let config = load_config_from_str(&contents, path)?;
    tracing::info!(
        jobs = config.jobs,
        has_lint = config.lint.is_some(),
        "Config loaded successfully"
    );
    Ok(config)
}

/// Load a config from a string.
/// The path is used for error messages and format detection.
#[tracing::instrument(skip(contents), fields(path = %path.display(), size = contents.len()))]
pub fn load_config_from_str(contents: &str, path: &Path) -> Result<SassOrderConfig> {
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("");

    tracing::debug!(extension, file_name, "Detecting config format");

    let config = match extension {
        "yml" | "yaml" => {
            tracing::trace!("Parsing as YAML");
            parse_yaml(contents, path)?
        }
        "json" => {
            tracing::trace!("Parsing as JSON");
            parse_json(contents, path)?
        }
        "toml" => {
            tracing::trace!("Parsing as TOML");
            parse_toml(contents, path)?
        }
        "" if file_name == ".sassorderrc" => {
            // .sassorderrc without extension - try YAML first, then JSON
            tracing::trace!("Trying YAML then JSON for .sassorderrc");
            parse_yaml(contents, path).or_else(|_| parse_json(contents, path))?
        }
        _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    };

    tracing::debug!("Validating config");
    validate_config(&config, path)?;

    Ok(config)
}

/// Parse YAML configuration
fn parse_yaml(contents: &str, path: &Path) -> Result<SassOrderConfig> {
    // A file holding nothing but comments is an empty configuration
    if contents
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#'))
    {
        return Ok(SassOrderConfig::default());
    }

    serde_saphyr::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("YAML parse error: {e}"),
    })
}

/// Parse JSON configuration
fn parse_json(contents: &str, path: &Path) -> Result<SassOrderConfig> {
    serde_json::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("JSON parse error: {e}"),
    })
}

/// Parse TOML configuration
fn parse_toml(contents: &str, path: &Path) -> Result<SassOrderConfig> {
    toml::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("TOML parse error: {e}"),
    })
}

/// Validate the loaded configuration
#[tracing::instrument(skip(config, path), fields(path = %path.display()))]
fn validate_config(config: &SassOrderConfig, path: &Path) -> Result<()> {
    let invalid = |message: String| ConfigError::Invalid {
        path: path.to_path_buf(),
        message,
    };

    if config.jobs == Some(0) {
        return Err(invalid("'jobs' must be at least 1".to_string()));
    }

    let patterns = [("include", &config.include), ("exclude", &config.exclude)];
    for (field, patterns) in patterns {
        let Some(patterns) = patterns else {
            continue;
        };

        if field == "include" && patterns.is_empty() {
            return Err(invalid("'include' must list at least one pattern".to_string()));
        }

        for pattern in patterns {
            if pattern.trim().is_empty() {
                return Err(invalid(format!("'{field}' has an empty pattern")));
            }
            if let Err(e) = glob::Pattern::new(pattern) {
                return Err(invalid(format!("'{field}' pattern '{pattern}' is invalid: {e}")));
            }
        }
    }

    if let Some(lint) = &config.lint {
        if !lint.is_object() {
            return Err(invalid("'lint' must be a mapping".to_string()));
        }
    }

    tracing::debug!("Config validation passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(suffix).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_yaml() {
        let yaml = r#"
include: ["src/**/*.sass"]
jobs: 2
lint:
  rules:
    property_order: warn
"#;
        let file = write_temp(".yml", yaml);

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.include_patterns(), vec!["src/**/*.sass"]);
        assert_eq!(config.exclude_patterns(), vec!["node_modules/**/*"]);
        assert_eq!(config.jobs, Some(2));
        assert!(config.lint().is_some());
    }

    #[test]
    fn test_load_json() {
        let json = r#"{ "exclude": ["vendor/**/*"], "jobs": 1 }"#;
        let file = write_temp(".json", json);

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.exclude_patterns(), vec!["vendor/**/*"]);
        assert_eq!(config.jobs, Some(1));
    }

    #[test]
    fn test_load_toml() {
        let toml = r#"
include = ["**/*.sass"]
jobs = 3

[lint.rules]
property_order = "off"
"#;
        let config = load_config_from_str(toml, Path::new("sassorder.toml")).unwrap();
        assert_eq!(config.jobs, Some(3));
        assert_eq!(
            config.lint().and_then(|lint| lint.pointer("/rules/property_order")),
            Some(&serde_json::json!("off"))
        );
    }

    #[test]
    fn test_rc_without_extension_accepts_yaml_and_json() {
        let path = Path::new(".sassorderrc");
        let yaml = load_config_from_str("jobs: 2\n", path).unwrap();
        assert_eq!(yaml.jobs, Some(2));
        let json = load_config_from_str(r#"{"jobs": 5}"#, path).unwrap();
        assert_eq!(json.jobs, Some(5));
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config =
            load_config_from_str("# nothing here\n\n", Path::new(".sassorderrc.yml")).unwrap();
        assert_eq!(config, SassOrderConfig::default());
    }

    #[test]
    fn test_unsupported_format() {
        let result = load_config_from_str("", Path::new("sassorder.ini"));
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_validation_zero_jobs() {
        let result = load_config_from_str("jobs: 0\n", Path::new(".sassorderrc.yml"));
        let error = result.unwrap_err();
        assert!(matches!(error, ConfigError::Invalid { .. }));
        insta::assert_snapshot!(
            error.to_string(),
            @"invalid config in .sassorderrc.yml: 'jobs' must be at least 1"
        );
    }

    #[test]
    fn test_validation_empty_pattern() {
        let result = load_config_from_str(
            r#"{ "exclude": ["node_modules/**/*", " "] }"#,
            Path::new(".sassorderrc.json"),
        );
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_validation_empty_include() {
        let result = load_config_from_str("include: []\n", Path::new(".sassorderrc.yml"));
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_validation_invalid_glob() {
        let result = load_config_from_str(
            r#"{ "include": ["src/[*.sass"] }"#,
            Path::new(".sassorderrc.json"),
        );
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_validation_lint_must_be_mapping() {
        let result = load_config_from_str(r#"{ "lint": "all" }"#, Path::new(".sassorderrc.json"));
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_invalid_yaml() {
        let result = load_config_from_str("jobs: [", Path::new(".sassorderrc.yml"));
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_find_config_in_current_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join(".sassorderrc.yml");
        fs::write(&config_path, "jobs: 1").unwrap();

        let found = find_config(temp_dir.path()).unwrap();
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("sassorder.toml");
        fs::write(&config_path, "jobs = 1").unwrap();

        let sub_dir = temp_dir.path().join("styles").join("components");
        fs::create_dir_all(&sub_dir).unwrap();

        let found = find_config(&sub_dir).unwrap();
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_config_file_priority() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("sassorder.toml"), "jobs = 1").unwrap();
        fs::write(temp_dir.path().join(".sassorderrc.json"), r#"{"jobs": 2}"#).unwrap();

        let found = find_config(temp_dir.path()).unwrap().unwrap();
        assert_eq!(found.file_name().unwrap(), ".sassorderrc.json");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = load_config(&temp_dir.path().join(".sassorderrc.yml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
