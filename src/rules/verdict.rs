// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Lint verdict types.

use crate::cli::args::OutputFormat;
use crate::config::Severity;
use console::{style, Style};
use serde::Serialize;

use super::table::RuleName;

/// The result of one rule against one commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleOutcome {
    /// Rule identifier.
    pub name: RuleName,
    /// Enforcement level the rule ran at.
    pub level: Severity,
    /// Whether the rule passed.
    #[serde(skip)]
    pub passed: bool,
    /// Human-readable failure message.
    pub message: String,
}

impl RuleOutcome {
    /// Format the outcome for terminal output.
    pub fn format(&self) -> String {
        let (prefix, code_style) = match self.level {
            Severity::Error => (style("✖").red().bold(), Style::new().red()),
            _ => (style("⚠").yellow().bold(), Style::new().yellow()),
        };

        format!(
            "{}   {} {}",
            prefix,
            self.message,
            code_style.apply_to(format!("[{}]", self.name))
        )
    }
}

/// Result of linting a commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// The message as given.
    pub input: String,
    /// Commit SHA if linting an existing commit.
    pub commit_sha: Option<String>,
    /// Failed error-level rules, in declaration order.
    pub errors: Vec<RuleOutcome>,
    /// Failed warning-level rules, in declaration order.
    pub warnings: Vec<RuleOutcome>,
}

impl Verdict {
    /// Create an empty (valid) verdict.
    pub fn new(input: String) -> Self {
        Self {
            input,
            commit_sha: None,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Record a rule outcome. Passing and disabled outcomes are dropped.
    pub fn record(&mut self, outcome: RuleOutcome) {
        if outcome.passed {
            return;
        }
        match outcome.level {
            Severity::Error => self.errors.push(outcome),
            Severity::Warning => self.warnings.push(outcome),
            Severity::Disabled => {}
        }
    }

    /// Whether no error-level rule failed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether the verdict passes, optionally treating warnings as errors.
    pub fn passes(&self, strict: bool) -> bool {
        self.is_valid() && !(strict && !self.warnings.is_empty())
    }

    /// Whether a rule appears among errors or warnings.
    pub fn has_failure(&self, name: RuleName) -> bool {
        self.errors
            .iter()
            .chain(self.warnings.iter())
            .any(|o| o.name == name)
    }

    /// Get the total number of issues.
    pub fn issue_count(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    /// Print the verdict to stdout.
    pub fn print(&self, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => println!(
                "{}",
                serde_json::to_string_pretty(&self.to_json()).unwrap_or_default()
            ),
            _ => println!("{}", self.render_text()),
        }
    }

    /// Machine-readable form.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "valid": self.is_valid(),
            "commit": self.commit_sha,
            "input": self.input,
            "errors": self.errors,
            "warnings": self.warnings,
        })
    }

    /// Render in commitlint's text layout.
    pub fn render_text(&self) -> String {
        let mut lines = Vec::new();

        let header = self.input.lines().next().unwrap_or("");
        match self.commit_sha {
            Some(ref sha) => {
                let short_sha = &sha[..7.min(sha.len())];
                lines.push(format!(
                    "{}   {} {}",
                    style("⧗").bold(),
                    style(short_sha).cyan(),
                    header
                ));
            }
            None => lines.push(format!("{}   input: {}", style("⧗").bold(), header)),
        }

        for outcome in self.errors.iter().chain(self.warnings.iter()) {
            lines.push(outcome.format());
        }

        lines.push(String::new());
        lines.push(self.summary());
        lines.join("\n")
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        let icon = if !self.is_valid() {
            style("✖").red().bold()
        } else if !self.warnings.is_empty() {
            style("⚠").yellow().bold()
        } else {
            style("✔").green().bold()
        };

        format!(
            "{}   found {} problems, {} warnings",
            icon,
            self.errors.len(),
            self.warnings.len()
        )
    }
}
