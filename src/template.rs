//! Format template scanning.
//!
//! A template is scanned left to right. At each position the longest token
//! from [`TOKENS`] that occurs there wins; anything that matches no token is
//! copied through verbatim, so arbitrary separators and punctuation need no
//! escaping. Tokens that share a leading character differ only by repetition
//! count (`M`, `MM`, `MMM`, `MMMM`), which is why the table is ordered
//! longest-first within each leading character.

/// One date component a token expands to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// `YYYY` - full year, natural width
    Year4,
    /// `YY` - last two digits of the year
    Year2,
    /// `MMMM` - full month name from the active locale
    MonthFull,
    /// `MMM` - abbreviated month name from the active locale
    MonthAbbr,
    /// `MM` - month number, zero-padded to two digits
    Month2,
    /// `M` - month number without leading zero
    Month,
    /// `DDD` - full weekday name from the active locale
    WeekdayFull,
    /// `DD` - abbreviated weekday name from the active locale
    WeekdayAbbr,
    /// `dd` - day of month, zero-padded to two digits
    Day2,
    /// `d` - day of month without leading zero
    Day,
    /// `HH` - 24-hour clock hour, zero-padded to two digits
    Hour2,
    /// `H` - 24-hour clock hour without leading zero
    Hour,
    /// `hh` - 12-hour clock hour, zero-padded to two digits
    TwelveHour2,
    /// `h` - 12-hour clock hour without leading zero
    TwelveHour,
    /// `mm` - minute, zero-padded to two digits
    Minute2,
    /// `m` - minute without leading zero
    Minute,
    /// `ss` - second, zero-padded to two digits
    Second2,
    /// `s` - second without leading zero
    Second,
    /// `f` - millisecond, natural decimal
    Millis,
    /// `a` - lowercase meridiem (`am`/`pm`)
    MeridiemLower,
    /// `A` - uppercase meridiem (`AM`/`PM`)
    MeridiemUpper,
    /// `Z` - UTC offset as `±HH:MM`
    UtcOffset,
}

/// The closed token set, longest-first within each leading character so a
/// linear prefix scan reproduces greedy longest-match exactly.
const TOKENS: &[(&str, Field)] = &[
    ("YYYY", Field::Year4),
    ("YY", Field::Year2),
    ("MMMM", Field::MonthFull),
    ("MMM", Field::MonthAbbr),
    ("MM", Field::Month2),
    ("M", Field::Month),
    ("DDD", Field::WeekdayFull),
    ("DD", Field::WeekdayAbbr),
    ("dd", Field::Day2),
    ("d", Field::Day),
    ("HH", Field::Hour2),
    ("H", Field::Hour),
    ("hh", Field::TwelveHour2),
    ("h", Field::TwelveHour),
    ("mm", Field::Minute2),
    ("m", Field::Minute),
    ("ss", Field::Second2),
    ("s", Field::Second),
    ("f", Field::Millis),
    ("a", Field::MeridiemLower),
    ("A", Field::MeridiemUpper),
    ("Z", Field::UtcOffset),
];

/// One scanned piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    Field(Field),
    Literal(String),
}

/// A scanned format template, ready to render against any date value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pieces: Vec<Piece>,
}

impl Template {
    /// Scans a template string into fields and literal runs.
    ///
    /// Scanning never fails: unrecognized characters become literals, and an
    /// empty input becomes an empty template.
    pub fn parse(input: &str) -> Self {
        let mut pieces = Vec::new();
        let mut literal = String::new();
        let mut rest = input;

        while !rest.is_empty() {
            if let Some((pattern, field)) = TOKENS
                .iter()
                .find(|(pattern, _)| rest.starts_with(pattern))
            {
                if !literal.is_empty() {
                    pieces.push(Piece::Literal(std::mem::take(&mut literal)));
                }
                pieces.push(Piece::Field(*field));
                rest = &rest[pattern.len()..];
            } else if let Some(ch) = rest.chars().next() {
                literal.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
        if !literal.is_empty() {
            pieces.push(Piece::Literal(literal));
        }

        Template { pieces }
    }

    /// The scanned pieces in template order.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// True for the empty template.
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(input: &str) -> Vec<Piece> {
        Template::parse(input).pieces().to_vec()
    }

    #[test]
    fn test_empty_input() {
        assert!(Template::parse("").is_empty());
    }

    #[test]
    fn test_longest_match_wins() {
        assert_eq!(fields("MMMM"), vec![Piece::Field(Field::MonthFull)]);
        assert_eq!(fields("MMM"), vec![Piece::Field(Field::MonthAbbr)]);
        assert_eq!(fields("MM"), vec![Piece::Field(Field::Month2)]);
        assert_eq!(fields("M"), vec![Piece::Field(Field::Month)]);
    }

    #[test]
    fn test_run_longer_than_longest_token() {
        // Five Ms scan as MMMM followed by M, greedily left to right
        assert_eq!(
            fields("MMMMM"),
            vec![
                Piece::Field(Field::MonthFull),
                Piece::Field(Field::Month),
            ]
        );
    }

    #[test]
    fn test_single_uppercase_d_is_literal() {
        // D alone is not a token; only DD and DDD are
        assert_eq!(fields("D"), vec![Piece::Literal("D".to_string())]);
        assert_eq!(
            fields("DDDD"),
            vec![
                Piece::Field(Field::WeekdayFull),
                Piece::Literal("D".to_string()),
            ]
        );
    }

    #[test]
    fn test_literals_are_batched() {
        assert_eq!(
            fields("YYYY-MM-dd"),
            vec![
                Piece::Field(Field::Year4),
                Piece::Literal("-".to_string()),
                Piece::Field(Field::Month2),
                Piece::Literal("-".to_string()),
                Piece::Field(Field::Day2),
            ]
        );
    }

    #[test]
    fn test_unknown_characters_pass_through() {
        assert_eq!(
            fields("on: [x]"),
            vec![
                Piece::Literal("on: [x]".to_string()),
            ]
        );
    }

    #[test]
    fn test_multibyte_literals() {
        assert_eq!(
            fields("d日"),
            vec![
                Piece::Field(Field::Day),
                Piece::Literal("日".to_string()),
            ]
        );
    }

    #[test]
    fn test_case_sensitive_tokens() {
        // H is the 24-hour clock, h the 12-hour clock
        assert_eq!(fields("H"), vec![Piece::Field(Field::Hour)]);
        assert_eq!(fields("h"), vec![Piece::Field(Field::TwelveHour)]);
        assert_eq!(fields("a"), vec![Piece::Field(Field::MeridiemLower)]);
        assert_eq!(fields("A"), vec![Piece::Field(Field::MeridiemUpper)]);
    }
}
