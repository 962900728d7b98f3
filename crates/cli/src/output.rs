//! Rendering a [`Report`] in the supported output formats.

use crate::OutputFormat;
use anyhow::Result;
use colored::Colorize;
use sass_order_linter::{LintError, Report, Violation};
use sass_order_types::Severity;
use std::io::Write;

/// Write a finished report.
///
/// Findings go to `out`; files that could not be linted are reported on
/// `err`, except in JSON output where they are part of the document.
pub fn print_report(
    report: &Report,
    format: OutputFormat,
    quiet: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    match format {
        OutputFormat::Classic => print_classic(report, out, err)?,
        OutputFormat::Human => print_human(report, quiet, out, err)?,
        OutputFormat::Json => print_json(report, out)?,
        OutputFormat::Github => print_github(report, out)?,
    }
    out.flush()?;
    Ok(())
}

/// `file:line:column: message`, one violation per line
fn print_classic(report: &Report, out: &mut impl Write, err: &mut impl Write) -> Result<()> {
    for violation in report.violations() {
        writeln!(out, "{violation}")?;
    }
    for (file, error) in report.errors() {
        writeln!(err, "{file}: {error}")?;
    }
    Ok(())
}

fn print_human(
    report: &Report,
    quiet: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    for violation in report.violations() {
        let (label, message) = match violation.severity {
            Severity::Error => ("error:".red().bold(), violation.message.red()),
            Severity::Warning => ("warning:".yellow().bold(), violation.message.yellow()),
        };
        writeln!(
            out,
            "\n{}:{}:{}: {label} {message}",
            violation.file, violation.position.line, violation.position.column
        )?;
        writeln!(out, "  {}: {}", "rule".dimmed(), violation.rule.dimmed())?;
    }

    for (file, error) in report.errors() {
        writeln!(err, "{} {file}: {error}", "error:".red().bold())?;
    }

    if quiet {
        return Ok(());
    }

    let errors = report.error_count();
    let warnings = report.warning_count();
    let failed = report.errors().count();

    writeln!(out)?;
    if errors == 0 && warnings == 0 {
        writeln!(out, "{}", "✓ No ordering issues found!".green().bold())?;
    } else if errors == 0 {
        writeln!(
            out,
            "{}",
            format!("✓ Passed with {warnings} warning(s)").yellow().bold()
        )?;
    } else if warnings == 0 {
        writeln!(out, "{}", format!("✗ Found {errors} error(s)").red())?;
    } else {
        writeln!(
            out,
            "{}",
            format!("✗ Found {errors} error(s) and {warnings} warning(s)").red()
        )?;
    }
    if failed > 0 {
        writeln!(
            out,
            "{}",
            format!("✗ {failed} file(s) could not be linted").red()
        )?;
    }
    writeln!(
        out,
        "  {} {} file(s) checked",
        "⏱".dimmed(),
        report.files.len()
    )?;

    Ok(())
}

fn print_json(report: &Report, out: &mut impl Write) -> Result<()> {
    let violation_to_json = |v: &Violation| {
        serde_json::json!({
            "message": v.message,
            "severity": v.severity.to_string(),
            "rule": v.rule,
            "line": v.position.line,
            "column": v.position.column,
        })
    };

    let files: Vec<serde_json::Value> = report
        .files
        .iter()
        .map(|file| {
            serde_json::json!({
                "file": file.file.as_str(),
                "violations": file.violations().iter().map(violation_to_json).collect::<Vec<_>>(),
                "error": file.error().map(ToString::to_string),
            })
        })
        .collect();

    let failed = report.errors().count();
    let output = serde_json::json!({
        "success": report.error_count() == 0 && failed == 0,
        "files": files,
        "stats": {
            "total_files": report.files.len(),
            "total_errors": report.error_count(),
            "total_warnings": report.warning_count(),
            "failed_files": failed,
        }
    });

    serde_json::to_writer_pretty(&mut *out, &output)?;
    writeln!(out)?;
    Ok(())
}

/// GitHub Actions workflow commands for PR annotations
fn print_github(report: &Report, out: &mut impl Write) -> Result<()> {
    for violation in report.violations() {
        let level = match violation.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        // Annotation columns are 1-based
        writeln!(
            out,
            "::{level} file={},line={},col={}::{}",
            escape_property(violation.file.as_str()),
            violation.position.line,
            violation.position.column + 1,
            escape_data(&format!("{} [{}]", violation.message, violation.rule))
        )?;
    }

    for (file, error) in report.errors() {
        let file = escape_property(file.as_str());
        let message = escape_data(&error.to_string());
        match error {
            LintError::Parse(parse) => {
                writeln!(out, "::error file={file},line={}::{message}", parse.line)?;
            }
            LintError::Io { .. } | LintError::Worker => {
                writeln!(out, "::error file={file}::{message}")?;
            }
        }
    }

    Ok(())
}

/// Escape the message part of a workflow command
fn escape_data(text: &str) -> String {
    text.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a `key=value` property of a workflow command
fn escape_property(text: &str) -> String {
    escape_data(text).replace(':', "%3A").replace(',', "%2C")
}

#[cfg(test)]
mod tests {
    use super::*;
    use sass_order_linter::{lint_batch, LintConfig, LintInput, LintSeverity};
    use sass_order_test_utils::fixtures;
    use sass_order_types::FileName;

    fn report() -> Report {
        let inputs = vec![
            LintInput::text(FileName::new("a.sass"), fixtures::REFERENCE),
            LintInput::text(FileName::new("b.sass"), fixtures::ORDERED),
            LintInput::text(FileName::new("c.sass"), fixtures::MALFORMED),
        ];
        lint_batch(inputs, &LintConfig::default(), 1)
    }

    fn render(report: &Report, format: OutputFormat, quiet: bool) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        print_report(report, format, quiet, &mut out, &mut err).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_classic_output() {
        let (out, err) = render(&report(), OutputFormat::Classic, false);
        insta::assert_snapshot!(out, @r"
        a.sass:4:2: Property `top` should not be defined after property `color` in line 3
        a.sass:5:2: Property `left` should not be defined after property `color` in line 3
        a.sass:9:4: Mixin should not be defined after property `color` in line 8
        ");
        insta::assert_snapshot!(
            err,
            @"c.sass: malformed indentation at line 4: dedent past the top level: `.d`"
        );
    }

    #[test]
    fn test_classic_output_clean() {
        let report = lint_batch(
            vec![LintInput::text(FileName::new("b.sass"), fixtures::ORDERED)],
            &LintConfig::default(),
            1,
        );
        let (out, err) = render(&report, OutputFormat::Classic, false);
        assert!(out.is_empty());
        assert!(err.is_empty());
    }

    #[test]
    fn test_github_output() {
        let (out, _) = render(&report(), OutputFormat::Github, false);
        insta::assert_snapshot!(out, @r"
        ::error file=a.sass,line=4,col=3::Property `top` should not be defined after property `color` in line 3 [property_order]
        ::error file=a.sass,line=5,col=3::Property `left` should not be defined after property `color` in line 3 [property_order]
        ::error file=a.sass,line=9,col=5::Mixin should not be defined after property `color` in line 8 [property_order]
        ::error file=c.sass,line=4::malformed indentation at line 4: dedent past the top level: `.d`
        ");
    }

    #[test]
    fn test_github_output_warning_level() {
        let config = LintConfig::default().with_rule("property_order", LintSeverity::Warn);
        let report = lint_batch(
            vec![LintInput::text(FileName::new("a.sass"), ".a\n  color: red\n  top: 0\n")],
            &config,
            1,
        );
        let (out, _) = render(&report, OutputFormat::Github, false);
        assert!(out.starts_with("::warning file=a.sass,line=3,col=3::"));
    }

    #[test]
    fn test_github_output_escapes_command_syntax() {
        let report = lint_batch(
            vec![
                LintInput::text(FileName::new("a,b:c.sass"), ".a\n  color: red\n  top: 0\n"),
                LintInput::text(FileName::new("100%.sass"), fixtures::MALFORMED),
            ],
            &LintConfig::default(),
            1,
        );
        let (out, _) = render(&report, OutputFormat::Github, false);
        insta::assert_snapshot!(out, @r"
        ::error file=a%2Cb%3Ac.sass,line=3,col=3::Property `top` should not be defined after property `color` in line 2 [property_order]
        ::error file=100%25.sass,line=4::malformed indentation at line 4: dedent past the top level: `.d`
        ");
    }

    #[test]
    fn test_escape_data() {
        assert_eq!(escape_data("50% done\r\nnext"), "50%25 done%0D%0Anext");
        assert_eq!(escape_data("a: b, c"), "a: b, c");
        assert_eq!(escape_property("a: b, c"), "a%3A b%2C c");
    }

    #[test]
    fn test_json_output() {
        let (out, err) = render(&report(), OutputFormat::Json, false);
        assert!(err.is_empty());

        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["stats"]["total_files"], 3);
        assert_eq!(json["stats"]["total_errors"], 3);
        assert_eq!(json["stats"]["total_warnings"], 0);
        assert_eq!(json["stats"]["failed_files"], 1);

        let files = json["files"].as_array().unwrap();
        assert_eq!(files[0]["file"], "a.sass");
        assert_eq!(files[0]["violations"].as_array().unwrap().len(), 3);
        assert_eq!(files[0]["violations"][2]["line"], 9);
        assert_eq!(files[0]["violations"][2]["column"], 4);
        assert_eq!(files[0]["violations"][2]["severity"], "error");
        assert!(files[1]["error"].is_null());
        assert!(files[2]["error"]
            .as_str()
            .unwrap()
            .starts_with("malformed indentation"));
    }

    #[test]
    fn test_human_output() {
        let (out, err) = render(&report(), OutputFormat::Human, false);
        assert!(out.contains("a.sass:4:2:"));
        assert!(out.contains("Property `top` should not be defined after property `color` in line 3"));
        assert!(out.contains("property_order"));
        assert!(out.contains("Found 3 error(s)"));
        assert!(out.contains("1 file(s) could not be linted"));
        assert!(out.contains("3 file(s) checked"));
        assert!(err.contains("c.sass"));
    }

    #[test]
    fn test_human_output_quiet_has_no_summary() {
        let (out, _) = render(&report(), OutputFormat::Human, true);
        assert!(out.contains("a.sass:4:2:"));
        assert!(!out.contains("file(s) checked"));
    }
}
