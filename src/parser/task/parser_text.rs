use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};
use winnow::{Parser, Result, token::take_while};

use super::token::Token;

/// Whitespace that doesn't end a line.
pub fn is_blank(c: char) -> bool {
    c.is_whitespace()
        && !matches!(
            c,
            '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
        )
}

/// Unicode punctuation (categories `Pc`, `Pd`, `Ps`, `Pe`, `Pi`, `Pf` and `Po`).
///
/// ASCII symbols such as `$`, `+` or `|` are math or currency symbols, not punctuation.
pub fn is_punctuation(c: char) -> bool {
    c.general_category_group() == GeneralCategoryGroup::Punctuation
}

/// Letters, marks and numbers.
fn is_alphanumeric(c: char) -> bool {
    matches!(
        c.general_category_group(),
        GeneralCategoryGroup::Letter | GeneralCategoryGroup::Mark | GeneralCategoryGroup::Number
    )
}

fn is_text(c: char) -> bool {
    is_alphanumeric(c) || is_blank(c) || is_punctuation(c)
}

/// Parses a run of blanks.
pub fn parse_blank<'a>(input: &mut &'a str) -> Result<&'a str> {
    take_while(1.., is_blank).parse_next(input)
}

/// Parses a run of blanks as a `Token::Whitespace`.
pub fn parse_whitespace(input: &mut &str) -> Result<Token> {
    parse_blank
        .map(|s: &str| Token::Whitespace(s.to_owned()))
        .parse_next(input)
}

/// Parses plain words, blanks and punctuation as a `Token::Text`.
pub fn parse_text(input: &mut &str) -> Result<Token> {
    take_while(1.., is_text)
        .map(|s: &str| Token::Text(s.to_owned()))
        .parse_next(input)
}
