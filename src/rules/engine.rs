// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use crate::commit::{CommitParser, ParsedCommit};
use crate::config::{JclConfig, Severity};
use crate::error::Result;
use crate::git;

use super::table::{default_rules, resolve_rules, RuleSpec};
use super::verdict::{RuleOutcome, Verdict};

/// Rule engine for validating commit messages.
///
/// Holds an immutable rule table; evaluation has no side effects, so one
/// engine can lint any number of messages, from any thread.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: Vec<RuleSpec>,
    parser: CommitParser,
}

impl Default for RuleEngine {
    /// The built-in policy.
    fn default() -> Self {
        Self {
            rules: default_rules(),
            parser: CommitParser::default(),
        }
    }
}

impl RuleEngine {
    /// Create a rule engine from configuration.
    pub fn new(config: &JclConfig) -> Result<Self> {
        Ok(Self {
            rules: resolve_rules(&config.rules)?,
            parser: CommitParser::new(config.parser.comment_char),
        })
    }

    /// The effective rule table, in declaration order.
    pub fn rules(&self) -> &[RuleSpec] {
        &self.rules
    }

    /// Evaluate every enabled rule against a parsed commit.
    pub fn evaluate(&self, commit: &ParsedCommit) -> Verdict {
        let mut verdict = Verdict::new(commit.raw.clone());

        for spec in &self.rules {
            if spec.level == Severity::Disabled {
                continue;
            }

            let (passed, message) = spec.name.evaluate(commit, spec.when, spec.value.as_ref());
            tracing::trace!(rule = %spec.name, passed, "evaluated rule");

            verdict.record(RuleOutcome {
                name: spec.name,
                level: spec.level,
                passed,
                message,
            });
        }

        tracing::debug!(
            errors = verdict.errors.len(),
            warnings = verdict.warnings.len(),
            "lint finished"
        );

        verdict
    }

    /// Parse and validate a commit message string.
    pub fn lint(&self, message: &str) -> Verdict {
        let parsed = self.parser.parse(message);
        let mut verdict = self.evaluate(&parsed);
        verdict.input = message.trim_end().to_string();
        verdict
    }

    /// Check a specific commit by reference.
    pub fn check_commit(&self, reference: &str) -> Result<Verdict> {
        let (sha, message) = git::read_commit(reference)?;
        let mut verdict = self.lint(&message);
        verdict.commit_sha = Some(sha);
        Ok(verdict)
    }

    /// Check a range of commits (`from..to`).
    pub fn check_range(&self, range: &str) -> Result<Vec<Verdict>> {
        let commits = git::get_commit_range(range)?;
        tracing::debug!("Checking {} commits in {}", commits.len(), range);

        Ok(commits
            .into_iter()
            .map(|(oid, message)| {
                let mut verdict = self.lint(&message);
                verdict.commit_sha = Some(oid);
                verdict
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_config, CommitType};
    use crate::rules::RuleName;

    fn lint(message: &str) -> Verdict {
        RuleEngine::default().lint(message)
    }

    fn error_names(verdict: &Verdict) -> Vec<RuleName> {
        verdict.errors.iter().map(|o| o.name).collect()
    }

    #[test]
    fn test_valid_japanese_commit() {
        let verdict = lint("fix(core): 日本語の件名\n\n日本語の本文");
        assert!(verdict.is_valid());
        assert!(verdict.errors.is_empty());
        assert!(verdict.warnings.is_empty());
    }

    #[test]
    fn test_every_type_is_accepted() {
        for commit_type in CommitType::all() {
            let verdict = lint(&format!("{}(scope): 日本語の件名\n\n日本語の本文", commit_type));
            assert!(verdict.is_valid(), "{} should be accepted", commit_type);
        }
    }

    #[test]
    fn test_missing_scope() {
        let verdict = lint("fix: 日本語の件名\n\n日本語の本文");
        assert!(!verdict.is_valid());
        assert_eq!(error_names(&verdict), vec![RuleName::ScopeEmpty]);
    }

    #[test]
    fn test_missing_type() {
        let verdict = lint("(scope): 日本語の件名\n\n日本語の本文");
        assert!(!verdict.is_valid());
        assert!(verdict.has_failure(RuleName::TypeEmpty));
        assert!(!verdict.has_failure(RuleName::TypeEnum));
    }

    #[test]
    fn test_invalid_type() {
        let verdict = lint("invalid(scope): 日本語の件名\n\n日本語の本文");
        assert!(!verdict.is_valid());
        assert!(verdict.has_failure(RuleName::TypeEnum));
    }

    #[test]
    fn test_uppercase_type() {
        let verdict = lint("FIX(scope): 日本語の件名\n\n日本語の本文");
        assert!(!verdict.is_valid());
        assert!(verdict.has_failure(RuleName::TypeCase));
    }

    #[test]
    fn test_missing_subject() {
        let verdict = lint("fix(scope): \n\n日本語の本文");
        assert!(!verdict.is_valid());
        assert!(verdict.has_failure(RuleName::SubjectEmpty));
    }

    #[test]
    fn test_english_subject() {
        let verdict = lint("fix(core): English subject\n\n日本語の本文");
        assert!(!verdict.is_valid());
        assert_eq!(error_names(&verdict), vec![RuleName::SubjectJapanese]);
        assert_eq!(verdict.errors[0].message, "subjectは日本語で記述してください");
    }

    #[test]
    fn test_english_subject_fails_even_when_everything_else_does() {
        let verdict = lint("Totally wrong");
        assert!(verdict.has_failure(RuleName::SubjectJapanese));
    }

    #[test]
    fn test_subject_full_stops() {
        let verdict = lint("fix(core): 日本語の件名。\n\n日本語の本文");
        assert_eq!(error_names(&verdict), vec![RuleName::SubjectFullStopJapanese]);

        let verdict = lint("fix(core): 日本語の件名.\n\n日本語の本文");
        assert_eq!(error_names(&verdict), vec![RuleName::SubjectFullStop]);
    }

    #[test]
    fn test_missing_body() {
        let verdict = lint("fix(core): 日本語の件名");
        assert!(!verdict.is_valid());
        assert!(verdict.has_failure(RuleName::BodyEmpty));
        assert!(verdict.has_failure(RuleName::BodyJapanese));
    }

    #[test]
    fn test_english_body() {
        let verdict = lint("fix(core): 日本語の件名\n\nEnglish body");
        assert!(!verdict.is_valid());
        assert_eq!(error_names(&verdict), vec![RuleName::BodyJapanese]);
    }

    #[test]
    fn test_missing_blank_before_body_is_a_warning() {
        let verdict = lint("fix(core): 日本語の件名\n日本語の本文");
        assert!(verdict.is_valid());
        assert_eq!(verdict.warnings.len(), 1);
        assert_eq!(verdict.warnings[0].name, RuleName::BodyLeadingBlank);
    }

    #[test]
    fn test_header_length_boundary() {
        let verdict = lint(&format!("fix(core): {}\n\n日本語の本文", "日".repeat(89)));
        assert!(!verdict.has_failure(RuleName::HeaderMaxLength));

        let verdict = lint(&format!("fix(core): {}\n\n日本語の本文", "日".repeat(90)));
        assert!(verdict.has_failure(RuleName::HeaderMaxLength));
        assert!(!verdict.is_valid());
    }

    #[test]
    fn test_long_body_line() {
        let verdict = lint(&format!("fix(scope): 日本語の件名\n\n{}", "日".repeat(101)));
        assert!(!verdict.is_valid());
        assert!(verdict.has_failure(RuleName::BodyMaxLineLength));
    }

    #[test]
    fn test_missing_blank_before_footer_is_a_warning() {
        let verdict = lint("fix(core): 日本語の件名\n\n日本語の本文\nBREAKING CHANGE: 重大な変更");
        assert!(verdict.is_valid());
        assert!(verdict.has_failure(RuleName::FooterLeadingBlank));
    }

    #[test]
    fn test_long_footer_line() {
        let verdict = lint(&format!(
            "fix(scope): 日本語の件名\n\n日本語の本文\n\nBREAKING CHANGE: {}",
            "日".repeat(101)
        ));
        assert!(!verdict.is_valid());
        assert!(verdict.has_failure(RuleName::FooterMaxLineLength));
    }

    #[test]
    fn test_complete_message() {
        let message = "feat(auth): ユーザー認証機能を追加

ログイン画面とログアウト機能を実装しました。
セッション管理にはJWTトークンを使用しています。

BREAKING CHANGE: 既存の認証APIが変更されました";

        let verdict = lint(message);
        assert!(verdict.is_valid(), "{:?}", verdict.errors);
        assert!(verdict.warnings.is_empty());
    }

    #[test]
    fn test_failures_are_not_short_circuited() {
        let verdict = lint("FIX: English.");
        let names = error_names(&verdict);
        assert_eq!(
            names,
            vec![
                RuleName::TypeEnum,
                RuleName::TypeCase,
                RuleName::ScopeEmpty,
                RuleName::SubjectFullStop,
                RuleName::BodyEmpty,
                RuleName::SubjectJapanese,
                RuleName::BodyJapanese,
            ]
        );
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_engine_is_shareable_across_threads() {
        assert_send_sync::<RuleEngine>();
        assert_send_sync::<Verdict>();
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let engine = RuleEngine::default();
        let parsed = ParsedCommit::parse("fix: English\nbody");
        assert_eq!(engine.evaluate(&parsed), engine.evaluate(&parsed));
    }

    #[test]
    fn test_config_overrides() {
        let config = parse_config(
            r#"
[rules."scope-empty"]
level = "disabled"

[rules."header-max-length"]
value = 20

[rules."body-leading-blank"]
level = "error"
"#,
        )
        .unwrap();
        let engine = RuleEngine::new(&config).unwrap();

        let verdict = engine.lint("fix: 日本語の件名\n\n日本語の本文");
        assert!(verdict.is_valid());

        let verdict = engine.lint("fix: とても長い日本語の件名になってしまった\n日本語の本文");
        assert!(verdict.has_failure(RuleName::HeaderMaxLength));
        assert!(verdict
            .errors
            .iter()
            .any(|o| o.name == RuleName::BodyLeadingBlank));
    }

    #[test]
    fn test_inverted_japanese_rule() {
        let config = parse_config(
            r#"
[rules."subject-japanese"]
when = "never"
"#,
        )
        .unwrap();
        let engine = RuleEngine::new(&config).unwrap();

        let verdict = engine.lint("fix(core): English subject\n\n日本語の本文");
        assert!(verdict.is_valid());
    }

    #[test]
    fn test_subject_case_stays_inert() {
        let engine = RuleEngine::default();
        assert!(engine
            .rules()
            .iter()
            .any(|r| r.name == RuleName::SubjectCase && r.level == Severity::Disabled));

        let verdict = engine.lint("fix(core): UPPER 日本語\n\n日本語の本文");
        assert!(!verdict.has_failure(RuleName::SubjectCase));
    }

    #[test]
    fn test_lint_ignores_comment_lines() {
        let verdict = lint("fix(core): 日本語の件名\n\n日本語の本文\n# Please enter the commit message");
        assert!(verdict.is_valid());
    }
}
