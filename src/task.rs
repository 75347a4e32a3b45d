use std::{
    fmt::{self, Display},
    ops::Range,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;

use crate::parser::{
    parser_line::{MatchedLine, match_lines},
    task::{
        token::{Token, render},
        tokenize,
    },
};

/// A checklist item found in a file.
#[derive(Debug, Hash, Eq, PartialEq, Clone)]
pub struct Task {
    pub path: PathBuf,
    /// Byte range of the line in the file content.
    pub span: Range<usize>,
    pub line_number: usize,
    pub tokens: Vec<Token>,
}

impl Task {
    #[must_use]
    pub fn new(path: &Path, line: &MatchedLine<'_>) -> Self {
        Self {
            path: path.to_path_buf(),
            span: line.span.clone(),
            line_number: line.line_number,
            tokens: tokenize(line.text),
        }
    }

    /// The task written back from its tokens, identical to the source line.
    #[must_use]
    pub fn description(&self) -> String {
        render(&self.tokens)
    }

    /// Content of the checkbox.
    #[must_use]
    pub fn status(&self) -> &str {
        self.tokens
            .iter()
            .find_map(|t| match t {
                Token::Checkbox(status) => Some(status.as_str()),
                _ => None,
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn tags(&self) -> Vec<&str> {
        self.tokens
            .iter()
            .filter_map(|t| match t {
                Token::Tag(name) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn added(&self) -> Option<NaiveDate> {
        self.tokens
            .iter()
            .find(|t| matches!(t, Token::Added(..)))
            .and_then(Token::date)
    }

    #[must_use]
    pub fn due(&self) -> Option<NaiveDate> {
        self.tokens
            .iter()
            .find(|t| matches!(t, Token::Due(..)))
            .and_then(Token::date)
    }

    #[must_use]
    pub fn completed(&self) -> Option<NaiveDate> {
        self.tokens
            .iter()
            .find(|t| matches!(t, Token::Completed(..)))
            .and_then(Token::date)
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

/// A file and the tasks it contains.
#[derive(Debug, Hash, Eq, PartialEq, Clone)]
pub struct TaskFile {
    /// Path relative to the scanned vault, used for display.
    pub name: String,
    pub path: PathBuf,
    pub tasks: Vec<Task>,
}

impl TaskFile {
    /// Matches and tokenizes every task of `content`.
    #[must_use]
    pub fn from_content(name: String, path: PathBuf, content: &str) -> Self {
        let tasks = match_lines(content)
            .iter()
            .map(|line| Task::new(&path, line))
            .collect();
        Self { name, path, tasks }
    }

    #[must_use]
    pub fn has_tasks(&self) -> bool {
        !self.tasks.is_empty()
    }
}

impl Display for TaskFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        for task in &self.tasks {
            writeln!(f, "  {}: {task}", task.line_number)?;
        }
        Ok(())
    }
}
