// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::config::{CommitType, JclConfig};
use crate::error::{ConfigError, JclError, LintError, Result, ResultExt};
use crate::hooks::{HookManager, HookStatus, HOOK_NAME};
use crate::rules::{RuleEngine, Verdict};
use console::style;
use std::io::{IsTerminal, Read};

use super::args::{CheckArgs, Cli, Commands, HooksAction, HooksArgs, InitArgs, LintArgs, OutputFormat};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    match cli.effective_command() {
        Commands::Version => return run_version(),
        Commands::Init(args) => return run_init(args),
        Commands::Types => return run_types(&cli),
        Commands::Hooks(args) => return run_hooks(args),
        _ => {}
    }

    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        JclConfig::load_from(config_path)?
    } else {
        JclConfig::load()?
    };
    let engine = RuleEngine::new(&config)?;
    let strict = cli.strict || config.ci.fail_on_warning;

    match cli.effective_command() {
        Commands::Lint(args) => run_lint(&cli, &engine, strict, args),
        Commands::Check(args) => run_check(&cli, &engine, strict, args),
        Commands::Rules => run_rules(&cli, &engine),
        _ => Ok(()),
    }
}

/// Read the message to lint from the argument, a file, or stdin.
fn read_message(args: &LintArgs) -> Result<String> {
    if let Some(ref message) = args.message {
        return Ok(message.clone());
    }

    if let Some(ref path) = args.edit {
        tracing::debug!("Reading commit message from {:?}", path);
        return std::fs::read_to_string(path)
            .context(format!("Failed to read {}", path.display()));
    }

    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(JclError::Lint(LintError::NoInput));
    }

    let mut message = String::new();
    stdin.read_to_string(&mut message)?;
    Ok(message)
}

/// Turn verdicts into the process outcome.
fn conclude(verdicts: &[Verdict], strict: bool) -> Result<()> {
    if verdicts.iter().all(|v| v.passes(strict)) {
        return Ok(());
    }

    Err(JclError::Lint(LintError::Rejected {
        errors: verdicts.iter().map(|v| v.errors.len()).sum(),
        warnings: verdicts.iter().map(|v| v.warnings.len()).sum(),
    }))
}

/// Run the lint command.
fn run_lint(cli: &Cli, engine: &RuleEngine, strict: bool, args: LintArgs) -> Result<()> {
    tracing::debug!("Running lint command with args: {:?}", args);

    let message = read_message(&args)?;
    let verdict = engine.lint(&message);
    verdict.print(cli.format);

    conclude(std::slice::from_ref(&verdict), strict)
}

/// Run the check command.
fn run_check(cli: &Cli, engine: &RuleEngine, strict: bool, args: CheckArgs) -> Result<()> {
    tracing::debug!("Running check command with args: {:?}", args);

    let verdicts = if args.target.contains("..") {
        engine.check_range(&args.target)?
    } else {
        vec![engine.check_commit(&args.target)?]
    };

    match cli.format {
        Some(OutputFormat::Json) => {
            let json: Vec<_> = verdicts.iter().map(Verdict::to_json).collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&json).unwrap_or_default()
            );
        }
        _ => {
            for verdict in &verdicts {
                println!("{}\n", verdict.render_text());
            }
        }
    }

    conclude(&verdicts, strict)
}

/// Run the rules command.
fn run_rules(cli: &Cli, engine: &RuleEngine) -> Result<()> {
    if cli.format == Some(OutputFormat::Json) {
        println!(
            "{}",
            serde_json::to_string_pretty(engine.rules()).unwrap_or_default()
        );
        return Ok(());
    }

    for spec in engine.rules() {
        let value = spec.value.as_ref().map(|v| v.to_string()).unwrap_or_default();
        let custom = if spec.name.is_custom() { " (custom)" } else { "" };
        println!(
            "{:<28} {:<8} {:<6} {}{}",
            spec.name,
            spec.level,
            spec.when,
            value,
            style(custom).dim()
        );
    }

    Ok(())
}

/// Run the types command.
fn run_types(cli: &Cli) -> Result<()> {
    if cli.format == Some(OutputFormat::Json) {
        let json: Vec<_> = CommitType::all()
            .iter()
            .map(|t| {
                serde_json::json!({
                    "type": t.as_str(),
                    "title": t.title(),
                    "description": t.description(),
                    "emoji": t.emoji(),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_default()
        );
        return Ok(());
    }

    for commit_type in CommitType::all() {
        println!(
            "{} {:<9} {}",
            commit_type.emoji(),
            style(commit_type.as_str()).bold(),
            commit_type.description()
        );
    }

    Ok(())
}

/// Run the hooks command.
fn run_hooks(args: HooksArgs) -> Result<()> {
    tracing::debug!("Running hooks command");

    let manager = HookManager::new()?;

    match args.action {
        HooksAction::Install { force } => {
            manager.install(force)?;
            println!("✓ Installed {} hook", HOOK_NAME);
        }
        HooksAction::Uninstall => {
            manager.uninstall()?;
            println!("✓ Uninstalled {} hook", HOOK_NAME);
        }
        HooksAction::Status => {
            let (icon, label) = match manager.status()? {
                HookStatus::Installed => ("✓", "installed"),
                HookStatus::Missing => ("✗", "not installed"),
                HookStatus::Foreign => ("⚠", "occupied by another hook"),
            };
            println!("{} {}: {}", icon, HOOK_NAME, label);
        }
    }

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("jclint {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    use crate::config::default::example_config;

    tracing::debug!("Running init command with args: {:?}", args);

    if args.path.exists() && !args.force {
        return Err(JclError::Config(ConfigError::AlreadyExists { path: args.path }));
    }

    std::fs::write(&args.path, example_config())
        .context(format!("Failed to write {}", args.path.display()))?;

    println!("✓ Created {}", args.path.display());

    Ok(())
}
