// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and parsing.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    /// `type(scope)!: subject`. `type` is ASCII word characters only.
    static ref HEADER_REGEX: Regex =
        Regex::new(r"^([A-Za-z0-9_]*)(?:\((.*)\))?!?: (.*)$").unwrap();

    /// Lines that open the footer: notes and issue references.
    static ref FOOTER_REGEX: Regex = Regex::new(
        r"(?i)^(?:(?-i:BREAKING[ -]CHANGE):|(?:close[sd]?|fix(?:e[sd])?|resolve[sd]?)\s+#\d+)"
    )
    .unwrap();
}

/// Git's `commit --verbose` scissors marker; everything below it is dropped.
const SCISSORS: &str = "------------------------ >8 ------------------------";

/// A commit message split into conventional-commit fields.
///
/// Absent fields are empty strings. Parsing never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedCommit {
    /// Commit type (feat, fix, etc.).
    #[serde(rename = "type")]
    pub commit_type: String,
    pub scope: String,
    pub subject: String,
    /// Lines between header and footer.
    pub body: String,
    /// Notes and references (e.g. `BREAKING CHANGE: ...`).
    pub footer: String,
    /// First line of the message.
    pub header: String,
    /// The message after comment stripping, starting at the header.
    pub raw: String,
}

impl ParsedCommit {
    /// Parse with the default parser (`#` comments).
    pub fn parse(message: &str) -> Self {
        CommitParser::default().parse(message)
    }

    /// Lines of the raw message.
    pub fn raw_lines(&self) -> impl Iterator<Item = &str> {
        self.raw.split('\n')
    }
}

/// Conventional-commit parser.
#[derive(Debug, Clone)]
pub struct CommitParser {
    comment_char: Option<char>,
}

impl Default for CommitParser {
    fn default() -> Self {
        Self::new(Some('#'))
    }
}

impl CommitParser {
    /// Create a parser. Lines starting with `comment_char` are ignored.
    pub fn new(comment_char: Option<char>) -> Self {
        Self { comment_char }
    }

    /// Parse a raw commit message.
    pub fn parse(&self, message: &str) -> ParsedCommit {
        let normalized = message.replace("\r\n", "\n");
        let lines = self.strip_comments(&normalized);

        let start = lines
            .iter()
            .position(|line| !line.trim().is_empty())
            .unwrap_or(lines.len());
        let lines = &lines[start..];

        let Some((header, rest)) = lines.split_first() else {
            return ParsedCommit::default();
        };

        let mut parsed = ParsedCommit {
            header: header.to_string(),
            raw: lines.join("\n").trim_end().to_string(),
            ..ParsedCommit::default()
        };

        if let Some(caps) = HEADER_REGEX.captures(header) {
            let field = |i| caps.get(i).map(|m| m.as_str().to_string()).unwrap_or_default();
            parsed.commit_type = field(1);
            parsed.scope = field(2);
            parsed.subject = field(3);
        }

        let footer_start = rest
            .iter()
            .position(|line| FOOTER_REGEX.is_match(line))
            .unwrap_or(rest.len());
        let (body, footer) = rest.split_at(footer_start);

        parsed.body = join_trimmed(body);
        parsed.footer = join_trimmed(footer);

        tracing::trace!(
            commit_type = %parsed.commit_type,
            scope = %parsed.scope,
            subject = %parsed.subject,
            "parsed commit header"
        );

        parsed
    }

    fn strip_comments<'a>(&self, message: &'a str) -> Vec<&'a str> {
        let mut lines = Vec::new();

        for line in message.split('\n') {
            if let Some(c) = self.comment_char {
                if let Some(rest) = line.strip_prefix(c) {
                    if rest.trim() == SCISSORS {
                        break;
                    }
                    continue;
                }
            }
            lines.push(line);
        }

        lines
    }
}

/// Join lines, dropping leading and trailing blank lines.
fn join_trimmed(lines: &[&str]) -> String {
    let is_blank = |line: &&str| line.trim().is_empty();
    let start = lines.iter().position(|l| !is_blank(l)).unwrap_or(lines.len());
    let end = lines.iter().rposition(|l| !is_blank(l)).map_or(start, |i| i + 1);
    lines[start..end].join("\n")
}
