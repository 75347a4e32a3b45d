use winnow::{
    Parser, Result,
    combinator::{opt, preceded},
    token::take_till,
};

use super::{parser_text::is_blank, token::Token};

/// Parses tags of the form "#tag". The name runs up to the next blank.
///
/// A lone `#` is kept as `Text`.
pub fn parse_tag(input: &mut &str) -> Result<Token> {
    preceded('#', opt(take_till(1.., is_blank)))
        .map(|name: Option<&str>| {
            name.map_or_else(|| Token::Text("#".to_owned()), |n| Token::Tag(n.to_owned()))
        })
        .parse_next(input)
}
