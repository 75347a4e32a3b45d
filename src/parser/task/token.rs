use std::fmt::Display;

use chrono::NaiveDate;

/// Format used to read and write annotation dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A lexical piece of a task line.
///
/// Every token knows how to write itself back, so that rendering the tokens of a
/// line in order gives the line back.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum Token {
    /// Run of blanks (spaces, tabs).
    Whitespace(String),
    /// `-`, `*` or `+` run opening the list item.
    ListMarker(String),
    /// Content between `[` and `]`, possibly empty.
    Checkbox(String),
    /// Anything that wasn't classified.
    Text(String),
    /// `#name`, stored without the `#`.
    Tag(String),
    Date(NaiveDate),
    /// `➕` annotation: glyph and its children.
    Added(String, Vec<Token>),
    /// `📅` annotation: glyph and its children.
    Due(String, Vec<Token>),
    /// `✅` annotation: glyph and its children.
    Completed(String, Vec<Token>),
}

impl Token {
    /// Children of an annotation token, empty for every other variant.
    #[must_use]
    pub fn children(&self) -> &[Token] {
        match self {
            Self::Added(_, children) | Self::Due(_, children) | Self::Completed(_, children) => {
                children
            }
            _ => &[],
        }
    }

    /// First date found among the children of an annotation.
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(*date),
            _ => self.children().iter().find_map(Self::date),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Whitespace(s) | Self::ListMarker(s) | Self::Text(s) => write!(f, "{s}"),
            Self::Checkbox(s) => write!(f, "[{s}]"),
            Self::Tag(name) => write!(f, "#{name}"),
            Self::Date(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            Self::Added(symbol, children)
            | Self::Due(symbol, children)
            | Self::Completed(symbol, children) => {
                write!(f, "{symbol}")?;
                for child in children {
                    write!(f, "{child}")?;
                }
                Ok(())
            }
        }
    }
}

/// Writes a token sequence back to text.
#[must_use]
pub fn render(tokens: &[Token]) -> String {
    tokens.iter().map(ToString::to_string).collect()
}
