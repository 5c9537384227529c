// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule identifiers and the default policy table.

use crate::commit::ParsedCommit;
use crate::config::{CommitType, Polarity, RuleOverride, RuleValue, Severity};
use crate::error::{ConfigError, JclError, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use super::builtin;
use super::japanese::{BodyJapanese, PredicateRule, SubjectFullStopJapanese, SubjectJapanese};

/// Default limit for header and line lengths.
pub const DEFAULT_MAX_LENGTH: usize = 100;

/// Every rule jclint knows, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleName {
    TypeEnum,
    TypeEmpty,
    TypeCase,
    ScopeEmpty,
    SubjectEmpty,
    SubjectCase,
    SubjectFullStop,
    SubjectFullStopJapanese,
    HeaderMaxLength,
    HeaderTrim,
    BodyLeadingBlank,
    BodyEmpty,
    BodyMaxLineLength,
    FooterLeadingBlank,
    FooterMaxLineLength,
    SubjectJapanese,
    BodyJapanese,
}

/// Shape of the parameter a rule accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    None,
    Length,
    List,
    Text,
}

impl RuleName {
    /// All rules in declaration order.
    pub fn all() -> &'static [RuleName] {
        &[
            RuleName::TypeEnum,
            RuleName::TypeEmpty,
            RuleName::TypeCase,
            RuleName::ScopeEmpty,
            RuleName::SubjectEmpty,
            RuleName::SubjectCase,
            RuleName::SubjectFullStop,
            RuleName::SubjectFullStopJapanese,
            RuleName::HeaderMaxLength,
            RuleName::HeaderTrim,
            RuleName::BodyLeadingBlank,
            RuleName::BodyEmpty,
            RuleName::BodyMaxLineLength,
            RuleName::FooterLeadingBlank,
            RuleName::FooterMaxLineLength,
            RuleName::SubjectJapanese,
            RuleName::BodyJapanese,
        ]
    }

    /// Get the rule identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleName::TypeEnum => "type-enum",
            RuleName::TypeEmpty => "type-empty",
            RuleName::TypeCase => "type-case",
            RuleName::ScopeEmpty => "scope-empty",
            RuleName::SubjectEmpty => "subject-empty",
            RuleName::SubjectCase => "subject-case",
            RuleName::SubjectFullStop => "subject-full-stop",
            RuleName::SubjectFullStopJapanese => "subject-full-stop-japanese",
            RuleName::HeaderMaxLength => "header-max-length",
            RuleName::HeaderTrim => "header-trim",
            RuleName::BodyLeadingBlank => "body-leading-blank",
            RuleName::BodyEmpty => "body-empty",
            RuleName::BodyMaxLineLength => "body-max-line-length",
            RuleName::FooterLeadingBlank => "footer-leading-blank",
            RuleName::FooterMaxLineLength => "footer-max-line-length",
            RuleName::SubjectJapanese => "subject-japanese",
            RuleName::BodyJapanese => "body-japanese",
        }
    }

    /// Whether the rule is one of the Japanese-policy predicates.
    pub fn is_custom(&self) -> bool {
        matches!(
            self,
            RuleName::SubjectJapanese | RuleName::BodyJapanese | RuleName::SubjectFullStopJapanese
        )
    }

    /// The parameter shape this rule accepts.
    pub fn value_kind(&self) -> ValueKind {
        match self {
            RuleName::TypeEnum => ValueKind::List,
            RuleName::TypeCase | RuleName::SubjectCase | RuleName::SubjectFullStop => {
                ValueKind::Text
            }
            RuleName::HeaderMaxLength
            | RuleName::BodyMaxLineLength
            | RuleName::FooterMaxLineLength => ValueKind::Length,
            _ => ValueKind::None,
        }
    }

    /// Evaluate the rule: returns pass/fail and the failure message.
    pub fn evaluate(
        &self,
        commit: &ParsedCommit,
        when: Polarity,
        value: Option<&RuleValue>,
    ) -> (bool, String) {
        match self {
            RuleName::SubjectJapanese => owned(SubjectJapanese.evaluate(commit, when)),
            RuleName::BodyJapanese => owned(BodyJapanese.evaluate(commit, when)),
            RuleName::SubjectFullStopJapanese => {
                owned(SubjectFullStopJapanese.evaluate(commit, when))
            }
            RuleName::TypeEnum => builtin::type_enum(commit, when, value),
            RuleName::TypeEmpty => builtin::type_empty(commit, when),
            RuleName::TypeCase => builtin::type_case(commit, when, value),
            RuleName::ScopeEmpty => builtin::scope_empty(commit, when),
            RuleName::SubjectEmpty => builtin::subject_empty(commit, when),
            RuleName::SubjectCase => builtin::subject_case(commit, when, value),
            RuleName::SubjectFullStop => builtin::subject_full_stop(commit, when, value),
            RuleName::HeaderMaxLength => builtin::header_max_length(commit, value),
            RuleName::HeaderTrim => builtin::header_trim(commit),
            RuleName::BodyLeadingBlank => builtin::body_leading_blank(commit, when),
            RuleName::BodyEmpty => builtin::body_empty(commit, when),
            RuleName::BodyMaxLineLength => builtin::body_max_line_length(commit, value),
            RuleName::FooterLeadingBlank => builtin::footer_leading_blank(commit, when),
            RuleName::FooterMaxLineLength => builtin::footer_max_line_length(commit, value),
        }
    }
}

fn owned((passed, message): (bool, &'static str)) -> (bool, String) {
    (passed, message.to_string())
}

impl std::str::FromStr for RuleName {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        RuleName::all()
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A configured rule: what to check, how hard, and with which parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleSpec {
    pub name: RuleName,
    pub level: Severity,
    pub when: Polarity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<RuleValue>,
}

impl RuleSpec {
    fn new(name: RuleName, level: Severity, when: Polarity) -> Self {
        Self {
            name,
            level,
            when,
            value: None,
        }
    }

    fn with_value(mut self, value: RuleValue) -> Self {
        self.value = Some(value);
        self
    }
}

/// The built-in commit policy.
pub fn default_rules() -> Vec<RuleSpec> {
    use Polarity::{Always, Never};
    use Severity::{Disabled, Error, Warning};

    let types = CommitType::all()
        .iter()
        .map(|t| t.as_str().to_string())
        .collect();

    vec![
        RuleSpec::new(RuleName::TypeEnum, Error, Always).with_value(RuleValue::List(types)),
        RuleSpec::new(RuleName::TypeEmpty, Error, Never),
        RuleSpec::new(RuleName::TypeCase, Error, Always)
            .with_value(RuleValue::Text("lower-case".to_string())),
        RuleSpec::new(RuleName::ScopeEmpty, Error, Never),
        RuleSpec::new(RuleName::SubjectEmpty, Error, Never),
        // Japanese text has no letter case.
        RuleSpec::new(RuleName::SubjectCase, Disabled, Always),
        RuleSpec::new(RuleName::SubjectFullStop, Error, Never)
            .with_value(RuleValue::Text(".".to_string())),
        RuleSpec::new(RuleName::SubjectFullStopJapanese, Error, Never),
        RuleSpec::new(RuleName::HeaderMaxLength, Error, Always)
            .with_value(RuleValue::Length(DEFAULT_MAX_LENGTH)),
        RuleSpec::new(RuleName::HeaderTrim, Error, Always),
        RuleSpec::new(RuleName::BodyLeadingBlank, Warning, Always),
        RuleSpec::new(RuleName::BodyEmpty, Error, Never),
        RuleSpec::new(RuleName::BodyMaxLineLength, Error, Always)
            .with_value(RuleValue::Length(DEFAULT_MAX_LENGTH)),
        RuleSpec::new(RuleName::FooterLeadingBlank, Warning, Always),
        RuleSpec::new(RuleName::FooterMaxLineLength, Error, Always)
            .with_value(RuleValue::Length(DEFAULT_MAX_LENGTH)),
        RuleSpec::new(RuleName::SubjectJapanese, Error, Always),
        RuleSpec::new(RuleName::BodyJapanese, Error, Always),
    ]
}

/// Apply configuration overrides on top of the built-in policy.
pub fn resolve_rules(overrides: &BTreeMap<String, RuleOverride>) -> Result<Vec<RuleSpec>> {
    let mut rules = default_rules();

    for (key, rule_override) in overrides {
        let name: RuleName = key.parse().map_err(|_| {
            JclError::Config(ConfigError::UnknownRule { name: key.clone() })
        })?;

        let Some(spec) = rules.iter_mut().find(|r| r.name == name) else {
            continue;
        };

        if let Some(level) = rule_override.level {
            spec.level = level;
        }
        if let Some(when) = rule_override.when {
            spec.when = when;
        }
        if let Some(ref value) = rule_override.value {
            check_value(name, value)?;
            spec.value = Some(value.clone());
        }

        tracing::debug!(
            rule = %name,
            level = %spec.level,
            when = %spec.when,
            "applied rule override"
        );
    }

    Ok(rules)
}

fn check_value(name: RuleName, value: &RuleValue) -> Result<()> {
    let matches = match name.value_kind() {
        ValueKind::None => false,
        ValueKind::Length => value.as_length().is_some(),
        ValueKind::List => value.as_list().is_some(),
        ValueKind::Text => value.as_text().is_some(),
    };

    if matches {
        if let (RuleName::TypeCase | RuleName::SubjectCase, Some(case)) = (name, value.as_text()) {
            if !builtin::is_known_case(case) {
                return Err(JclError::Config(ConfigError::InvalidValue {
                    key: format!("rules.{}.value", name),
                    message: format!(
                        "unknown case '{}' (expected one of {})",
                        case,
                        builtin::KNOWN_CASES.join(", ")
                    ),
                }));
            }
        }
        return Ok(());
    }

    let expected = match name.value_kind() {
        ValueKind::None => "no value",
        ValueKind::Length => "a number",
        ValueKind::List => "a list of strings",
        ValueKind::Text => "a string",
    };

    Err(JclError::Config(ConfigError::InvalidValue {
        key: format!("rules.{}.value", name),
        message: format!("expected {}, got {}", expected, value),
    }))
}
