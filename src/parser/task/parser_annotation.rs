use winnow::{Parser, Result, combinator::opt, token::take_while};

use super::{parser_date::parse_date, parser_text::parse_blank, token::Token};

pub const ADDED: &str = "➕";
pub const DUE: &str = "📅";
pub const COMPLETED: &str = "✅";

/// Glyphs that open an annotation. Only `ADDED`, `DUE` and `COMPLETED` get their own token.
pub fn is_annotation_glyph(c: char) -> bool {
    matches!(c, '🛫' | '➕' | '⏳' | '📅' | '✅' | '❌')
}

/// Blank, date, blank: each part optional.
fn parse_annotation_children(input: &mut &str) -> Result<Vec<Token>> {
    let mut children = vec![];
    if let Some(space) = opt(parse_blank).parse_next(input)? {
        children.push(Token::Whitespace(space.to_owned()));
    }
    if let Some(run) = opt(take_while(1.., |c: char| c.is_ascii_digit() || c == '-'))
        .parse_next(input)?
    {
        // A run that isn't a valid date is kept verbatim so the line still renders back
        // identically.
        children.push(parse_date(run).map_or_else(|| Token::Text(run.to_owned()), Token::Date));
    }
    if let Some(space) = opt(parse_blank).parse_next(input)? {
        children.push(Token::Whitespace(space.to_owned()));
    }
    Ok(children)
}

/// Parses a glyph-prefixed annotation such as `📅 2025-02-03 `.
///
/// `➕`, `📅` and `✅` become `Added`, `Due` and `Completed` tokens holding their children.
/// Any other glyph run is emitted as `Text` followed by the children, unnested.
pub fn parse_annotation(input: &mut &str) -> Result<Vec<Token>> {
    let symbol = take_while(1.., is_annotation_glyph).parse_next(input)?;
    let children = parse_annotation_children(input)?;
    let symbol = symbol.to_owned();

    Ok(match symbol.as_str() {
        ADDED => vec![Token::Added(symbol, children)],
        DUE => vec![Token::Due(symbol, children)],
        COMPLETED => vec![Token::Completed(symbol, children)],
        _ => {
            let mut tokens = vec![Token::Text(symbol)];
            tokens.extend(children);
            tokens
        }
    })
}
