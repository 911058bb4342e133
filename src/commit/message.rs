// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and parsing.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for parsing a conventional commit header.
    static ref CONVENTIONAL_HEADER: Regex = Regex::new(
        r"^(?P<type>\w+)(?:\([^)]*\))?!?:(?: (?P<subject>.*))?$"
    ).expect("conventional header regex is valid");

    /// Headers skipped when default ignores are enabled.
    static ref DEFAULT_IGNORES: Vec<Regex> = [
        r"^((Merge pull request)|(Merge (.*?) into (.*?)|(Merge branch (.*?)))(?:\r?\n)*$)",
        r"^(Merge tag (.*?))(?:\r?\n)*$",
        r"^(R|r)evert (.*)",
        r"^(amend|fixup|squash)!",
        r"^Merged (.*?)(in|into) (.*)",
        r"^Merge remote-tracking branch(\s*)(.*)",
        r"^Automatic merge(.*)",
        r"^Auto-merged (.*?) into (.*)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("default ignore regex is valid"))
    .collect();
}

/// Marker line after which git discards the rest of an edited message.
const SCISSORS: &str = "# ------------------------ >8 ------------------------";

/// A commit message split into header and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    /// The cleaned message text.
    pub raw: String,
    /// First line of the message, without its line terminator.
    pub header: String,
    /// Every line after the header, including blank lines.
    pub body: Vec<String>,
}

/// Type and subject of a conventional `type(scope)!: subject` header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConventionalHeader {
    /// Commit type (feat, fix, etc.). Empty when the header does not conform.
    pub commit_type: String,
    /// Subject line.
    pub subject: String,
}

impl CommitMessage {
    /// Parse a message as stored in a commit or typed by a user.
    ///
    /// Never fails: an empty message yields an empty header and no body.
    pub fn parse(message: &str) -> Self {
        let lines: Vec<&str> = message.lines().collect();
        Self::from_lines(&lines)
    }

    /// Parse the contents of a git edit file (e.g. `COMMIT_EDITMSG`).
    ///
    /// Comment lines and everything from the scissors line onward are
    /// dropped, as git does before recording the commit.
    pub fn from_edit_file(content: &str) -> Self {
        let lines: Vec<&str> = content
            .lines()
            .take_while(|line| *line != SCISSORS)
            .filter(|line| !line.starts_with('#'))
            .collect();
        Self::from_lines(&lines)
    }

    fn from_lines(lines: &[&str]) -> Self {
        let start = lines
            .iter()
            .position(|line| !line.trim().is_empty())
            .unwrap_or(lines.len());
        let end = lines
            .iter()
            .rposition(|line| !line.trim().is_empty())
            .map(|i| i + 1)
            .unwrap_or(start);
        let kept = &lines[start..end.max(start)];

        let header = kept.first().map(|line| line.to_string()).unwrap_or_default();
        let body = kept.iter().skip(1).map(|line| line.to_string()).collect();

        Self {
            raw: kept.join("\n"),
            header,
            body,
        }
    }

    /// Whether the message has no content at all.
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.body.is_empty()
    }

    /// Parse the header as a conventional commit header.
    pub fn conventional(&self) -> ConventionalHeader {
        ConventionalHeader::parse(&self.header)
    }

    /// Whether the message matches one of the default ignore patterns.
    pub fn is_default_ignored(&self) -> bool {
        DEFAULT_IGNORES
            .iter()
            .any(|pattern| pattern.is_match(&self.header) || pattern.is_match(&self.raw))
    }
}

impl ConventionalHeader {
    /// Parse a header line.
    ///
    /// A header that is not `type(scope)!: subject` is returned with an
    /// empty type and the whole line as subject. Scope and breaking marker
    /// are accepted but not kept.
    pub fn parse(header: &str) -> Self {
        match CONVENTIONAL_HEADER.captures(header) {
            Some(captures) => Self {
                commit_type: captures
                    .name("type")
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default(),
                subject: captures
                    .name("subject")
                    .map(|m| m.as_str().trim().to_string())
                    .unwrap_or_default(),
            },
            None => Self {
                subject: header.trim().to_string(),
                ..Self::default()
            },
        }
    }
}
