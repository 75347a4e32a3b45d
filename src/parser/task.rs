mod parser_annotation;
mod parser_date;
mod parser_tags;
mod parser_text;
pub mod token;

use parser_annotation::parse_annotation;
use parser_tags::parse_tag;
use parser_text::{parse_text, parse_whitespace};
use token::Token;
use tracing::error;
use winnow::{
    Parser, Result,
    combinator::{alt, opt, repeat},
    token::{rest, take_till, take_until, take_while},
};

/// Parses what comes before the free text of a task: indentation, list marker, checkbox.
fn parse_leading(input: &mut &str) -> Result<Vec<Token>> {
    let mut tokens = vec![];

    if let Some(indentation) = opt(parse_whitespace).parse_next(input)? {
        tokens.push(indentation);
    }
    if let Some(marker) = opt(take_while(1.., ('-', '*', '+'))).parse_next(input)? {
        tokens.push(Token::ListMarker(marker.to_owned()));
    }
    if let Some(space) = opt(parse_whitespace).parse_next(input)? {
        tokens.push(space);
    }
    // Whatever sits between the marker and the checkbox, e.g. `1. `
    if let Some(text) = opt(take_till(1.., '[')).parse_next(input)? {
        tokens.push(Token::Text(text.to_owned()));
    }

    opt('[').void().parse_next(input)?;
    let status = opt(take_until(0.., ']')).parse_next(input)?.unwrap_or_default();
    tokens.push(Token::Checkbox(status.to_owned()));
    opt(']').void().parse_next(input)?;

    if let Some(space) = opt(parse_whitespace).parse_next(input)? {
        tokens.push(space);
    }
    Ok(tokens)
}

/// One step of the main loop, first match wins.
fn parse_token(input: &mut &str) -> Result<Vec<Token>> {
    alt((
        parse_annotation,
        parse_tag.map(|t| vec![t]),
        parse_whitespace.map(|t| vec![t]),
        parse_text.map(|t| vec![t]),
    ))
    .parse_next(input)
}

fn parse_task_tokens(input: &mut &str) -> Result<Vec<Token>> {
    let mut tokens = parse_leading(input)?;

    let body: Vec<Token> = repeat(0.., parse_token)
        .fold(Vec::new, |mut acc: Vec<Token>, step: Vec<Token>| {
            acc.extend(step);
            acc
        })
        .parse_next(input)?;
    tokens.extend(body);

    // Stopped on a character no rule knows: keep the remainder verbatim
    let remainder: &str = rest.parse_next(input)?;
    if !remainder.is_empty() {
        tokens.push(Token::Text(remainder.to_owned()));
    }
    Ok(tokens)
}

/// Splits a task line into `Token`s.
///
/// Never fails: what can't be classified ends up in `Token::Text`. For any line accepted by
/// [`crate::parser::parser_line::match_lines`], rendering the result gives the line back.
#[must_use]
pub fn tokenize(line: &str) -> Vec<Token> {
    let mut input = line;
    parse_task_tokens(&mut input).unwrap_or_else(|e| {
        error!("Failed to tokenize {line:?}: {e:?}");
        vec![Token::Text(line.to_owned())]
    })
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::{token::render, token::Token, tokenize};

    fn ws(s: &str) -> Token {
        Token::Whitespace(s.to_string())
    }
    fn text(s: &str) -> Token {
        Token::Text(s.to_string())
    }
    fn date(s: &str) -> Token {
        Token::Date(NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap())
    }
    fn dated(s: &str) -> Vec<Token> {
        vec![ws(" "), date(s), ws(" ")]
    }

    #[test]
    fn test_tokenize_full_example() {
        let input = "  - [x] Follow up about contract with Ascent ➕ 2025-02-01 📅 2025-02-03 ✅ 2025-02-03 #house";
        let tokens = tokenize(input);
        assert_eq!(
            tokens,
            vec![
                ws("  "),
                Token::ListMarker("-".to_string()),
                ws(" "),
                Token::Checkbox("x".to_string()),
                ws(" "),
                text("Follow up about contract with Ascent "),
                Token::Added("➕".to_string(), dated("2025-02-01")),
                Token::Due("📅".to_string(), dated("2025-02-03")),
                Token::Completed("✅".to_string(), dated("2025-02-03")),
                Token::Tag("house".to_string()),
            ]
        );
        assert_eq!(render(&tokens), input);
    }

    #[test]
    fn test_tokenize_annotation_dispatch() {
        let input = "- [ ] ➕ 2025-02-01 📅 2025-02-03 ✅ 2025-02-03 #house";
        let tokens = tokenize(input);
        assert_eq!(
            tokens[4..].to_vec(),
            vec![
                Token::Added("➕".to_string(), dated("2025-02-01")),
                Token::Due("📅".to_string(), dated("2025-02-03")),
                Token::Completed("✅".to_string(), dated("2025-02-03")),
                Token::Tag("house".to_string()),
            ]
        );
    }

    #[test]
    fn test_tokenize_annotations_only() {
        // No checkbox at all: the whole line is read as the text before one
        let tokens = tokenize("➕ 2025-02-01 #house");
        assert_eq!(
            tokens,
            vec![
                text("➕ 2025-02-01 #house"),
                Token::Checkbox(String::new()),
            ]
        );
    }

    #[test]
    fn test_tokenize_unmapped_glyph_is_flattened() {
        let tokens = tokenize("- [ ] Trip 🛫 2025-01-01");
        assert_eq!(
            tokens,
            vec![
                Token::ListMarker("-".to_string()),
                ws(" "),
                Token::Checkbox(" ".to_string()),
                ws(" "),
                text("Trip "),
                text("🛫"),
                ws(" "),
                date("2025-01-01"),
            ]
        );
    }

    #[test]
    fn test_tokenize_scheduled_and_cancelled() {
        let input = "- [-] Call ⏳ 2025-03-04 ❌ 2025-03-05";
        let tokens = tokenize(input);
        assert_eq!(
            tokens[5..].to_vec(),
            vec![
                text("⏳"),
                ws(" "),
                date("2025-03-04"),
                ws(" "),
                text("❌"),
                ws(" "),
                date("2025-03-05"),
            ]
        );
        assert_eq!(render(&tokens), input);
    }

    #[test]
    fn test_tokenize_empty_tag() {
        let tokens = tokenize("- [ ] #");
        assert_eq!(tokens.last(), Some(&text("#")));
    }

    #[test]
    fn test_tokenize_tag_after_text_stays_text() {
        // `#` is punctuation, so a text run swallows it
        let tokens = tokenize("- [ ] buy #milk");
        assert_eq!(tokens.last(), Some(&text("buy #milk")));
    }

    #[test]
    fn test_tokenize_tags() {
        let tokens = tokenize("- [ ] #one #two");
        assert_eq!(
            tokens[4..].to_vec(),
            vec![
                Token::Tag("one".to_string()),
                ws(" "),
                Token::Tag("two".to_string()),
            ]
        );
    }

    #[test]
    fn test_tokenize_empty_checkbox() {
        let tokens = tokenize("- [] text");
        assert_eq!(
            tokens,
            vec![
                Token::ListMarker("-".to_string()),
                ws(" "),
                Token::Checkbox(String::new()),
                ws(" "),
                text("text"),
            ]
        );
    }

    #[test]
    fn test_tokenize_numbered_item() {
        let input = "1. [x] first";
        let tokens = tokenize(input);
        assert_eq!(
            tokens,
            vec![
                text("1. "),
                Token::Checkbox("x".to_string()),
                ws(" "),
                text("first"),
            ]
        );
        assert_eq!(render(&tokens), input);
    }

    #[test]
    fn test_tokenize_blockquote() {
        let input = "> - [ ] quoted";
        let tokens = tokenize(input);
        assert_eq!(tokens[0], text("> - "));
        assert_eq!(render(&tokens), input);
    }

    #[test]
    fn test_tokenize_unknown_symbol_flushes_rest() {
        let input = "- [ ] pay $5 📅 2025-01-01 #bills";
        let tokens = tokenize(input);
        assert_eq!(
            tokens[4..].to_vec(),
            vec![text("pay "), text("$5 📅 2025-01-01 #bills")]
        );
        assert_eq!(render(&tokens), input);
    }

    #[test]
    fn test_tokenize_non_latin_punctuation() {
        let input = "- [ ] 买牛奶！明天 📅 2025-01-01 #shop";
        let tokens = tokenize(input);
        assert_eq!(
            tokens[4..].to_vec(),
            vec![
                text("买牛奶！明天 "),
                Token::Due("📅".to_string(), dated("2025-01-01")),
                Token::Tag("shop".to_string()),
            ]
        );

        let tokens = tokenize("- [ ] اتصل، غدا ✅ 2025-01-01");
        assert_eq!(
            tokens[4..].to_vec(),
            vec![
                text("اتصل، غدا "),
                Token::Completed("✅".to_string(), vec![ws(" "), date("2025-01-01")]),
            ]
        );
    }

    #[test]
    fn test_tokenize_combining_marks() {
        let input = "- [ ] cafe\u{301} 📅 2025-01-01";
        let tokens = tokenize(input);
        assert_eq!(
            tokens[4..].to_vec(),
            vec![
                text("cafe\u{301} "),
                Token::Due("📅".to_string(), vec![ws(" "), date("2025-01-01")]),
            ]
        );
        assert_eq!(render(&tokens), input);
    }

    #[test]
    fn test_tokenize_malformed_date_round_trips() {
        let input = "- [ ] file taxes 📅 2025-04-31 #admin";
        let tokens = tokenize(input);
        assert_eq!(
            tokens[5],
            Token::Due("📅".to_string(), vec![ws(" "), text("2025-04-31"), ws(" ")])
        );
        assert_eq!(render(&tokens), input);
    }

    #[test]
    fn test_tokenize_round_trip() {
        let lines = [
            "- [ ] plain",
            "\t* [/] tabbed ✅2025-01-01",
            "  + [x] done, finally! #a #b ",
            "- [ ] 📅",
            "- [ ] 📅 ",
            "- [ ] ➕ -- #x",
            "- [?] naïve café — résumé",
            "- []] odd",
            "- [ ] emoji 🎉 party",
            "- [ ] trailing tabs\t\t",
        ];
        for line in lines {
            assert_eq!(render(&tokenize(line)), line);
        }
    }

    #[test]
    fn test_tokenize_empty() {
        assert_eq!(tokenize(""), vec![Token::Checkbox(String::new())]);
    }
}
