use std::ops::Range;

use winnow::{
    Parser, Result,
    ascii::digit1,
    combinator::{alt, preceded, terminated},
    token::{any, one_of, rest, take_while},
};

/// A line of a file that looks like a checklist item.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct MatchedLine<'a> {
    /// The whole line, line ending excluded.
    pub text: &'a str,
    /// Byte range of `text` in the scanned content.
    pub span: Range<usize>,
    /// 1-based.
    pub line_number: usize,
    pub indentation: &'a str,
    /// The marker and the spaces following it.
    pub list_marker: &'a str,
    /// What's between the brackets of the checkbox, possibly empty.
    pub status: &'a str,
    /// Rest of the line after the checkbox.
    pub body: &'a str,
}

struct TaskLineParts<'a> {
    indentation: &'a str,
    list_marker: &'a str,
    status: &'a str,
    body: &'a str,
}

/// Parses `-`, `*`, `+` or `N.`, followed by at least one space.
fn parse_list_marker<'a>(input: &mut &'a str) -> Result<&'a str> {
    (
        alt((one_of(('-', '*', '+')).void(), (digit1, '.').void())),
        take_while(1.., ' '),
    )
        .take()
        .parse_next(input)
}

/// Parses `[c]` or `[]`, returning what's inside.
fn parse_checkbox<'a>(input: &mut &'a str) -> Result<&'a str> {
    preceded('[', alt((']'.value(""), terminated(any.take(), ']')))).parse_next(input)
}

fn parse_task_line<'a>(input: &mut &'a str) -> Result<TaskLineParts<'a>> {
    let indentation = take_while(0.., (' ', '\t', '>')).parse_next(input)?;
    let list_marker = parse_list_marker(input)?;
    let status = parse_checkbox(input)?;
    let body = rest.parse_next(input)?;
    Ok(TaskLineParts {
        indentation,
        list_marker,
        status,
        body,
    })
}

/// Splits `content` into lines with their byte offsets.
///
/// `\n`, `\r\n`, a lone `\r`, U+2028 and U+2029 each end a line and are not part of it.
fn split_lines(content: &str) -> Vec<(usize, &str)> {
    let mut lines = vec![];
    let mut start = 0;
    let mut chars = content.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}') {
            lines.push((start, &content[start..i]));
            start = i + c.len_utf8();
            if c == '\r' && chars.next_if(|&(_, next)| next == '\n').is_some() {
                start += 1;
            }
        }
    }
    if start < content.len() {
        lines.push((start, &content[start..]));
    }
    lines
}

/// Finds every checklist item of `content`, in file order.
///
/// The grammar is applied to each line on its own, so Markdown structure (code blocks,
/// comments) is not taken into account.
pub fn match_lines(content: &str) -> Vec<MatchedLine<'_>> {
    let mut matches = vec![];

    for (index, (offset, line)) in split_lines(content).into_iter().enumerate() {
        let mut input = line;
        if let Ok(parts) = parse_task_line(&mut input) {
            matches.push(MatchedLine {
                text: line,
                span: offset..offset + line.len(),
                line_number: index + 1,
                indentation: parts.indentation,
                list_marker: parts.list_marker,
                status: parts.status,
                body: parts.body,
            });
        }
    }
    matches
}
