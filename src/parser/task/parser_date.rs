use chrono::NaiveDate;
use winnow::{
    Parser, Result,
    token::{one_of, take_while},
};

fn parse_number(digits: usize) -> impl FnMut(&mut &str) -> Result<u32> {
    move |input: &mut &str| {
        take_while(digits, |c: char| c.is_ascii_digit())
            .parse_to()
            .parse_next(input)
    }
}

/// Parses a strict `yyyy-MM-dd` date.
///
/// Field widths are fixed so that the date always writes back to the same text.
fn parse_iso_date(input: &mut &str) -> Result<Option<NaiveDate>> {
    let (year, _, month, _, day) = (
        parse_number(4),
        one_of('-'),
        parse_number(2),
        one_of('-'),
        parse_number(2),
    )
        .parse_next(input)?;
    let year = i32::try_from(year).unwrap_or_default();
    Ok(NaiveDate::from_ymd_opt(year, month, day))
}

/// Reads a whole digit-and-hyphen run as a date, `None` if it isn't one.
pub fn parse_date(run: &str) -> Option<NaiveDate> {
    parse_iso_date.parse(run).ok().flatten()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::parse_date;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-02-03"),
            Some(NaiveDate::from_ymd_opt(2025, 2, 3).unwrap())
        );
    }
    #[test]
    fn test_parse_date_leap_day() {
        assert_eq!(
            parse_date("2024-02-29"),
            Some(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
        );
        assert_eq!(parse_date("2025-02-29"), None);
    }
    #[test]
    fn test_parse_date_out_of_range() {
        assert_eq!(parse_date("2025-13-01"), None);
        assert_eq!(parse_date("2025-01-32"), None);
    }
    #[test]
    fn test_parse_date_wrong_widths() {
        assert_eq!(parse_date("2025-2-3"), None);
        assert_eq!(parse_date("25-02-03"), None);
        assert_eq!(parse_date("2025-02-031"), None);
    }
    #[test]
    fn test_parse_date_fail() {
        assert_eq!(parse_date("2025"), None);
        assert_eq!(parse_date("--"), None);
        assert_eq!(parse_date(""), None);
    }
}
