use chrono::{NaiveDate, NaiveTime, ParseResult, Weekday};

use crate::constants::formats;

/// Expands the site's one-letter meridiem suffix so the value matches `%I:%M%p`.
///
/// `"8:00p"` becomes `"8:00PM"` and `"10:30a"` becomes `"10:30AM"`. Values
/// that do not end in a bare `a`/`p` are returned trimmed but otherwise untouched.
///
/// # Examples
///
/// ```
/// use nba_rest::data_fetcher::processors::expand_meridiem;
///
/// assert_eq!(expand_meridiem("8:00p"), "8:00PM");
/// assert_eq!(expand_meridiem("10:30a"), "10:30AM");
/// ```
pub fn expand_meridiem(time: &str) -> String {
    let time = time.trim();
    match time.chars().last() {
        Some('a' | 'A') => format!("{}AM", &time[..time.len() - 1]),
        Some('p' | 'P') => format!("{}PM", &time[..time.len() - 1]),
        _ => time.to_string(),
    }
}

/// Parses a schedule start time such as `"8:00p"` into a time of day.
///
/// # Examples
///
/// ```
/// use chrono::NaiveTime;
/// use nba_rest::data_fetcher::processors::parse_start_time;
///
/// assert_eq!(parse_start_time("8:00p").unwrap(), NaiveTime::from_hms_opt(20, 0, 0).unwrap());
/// ```
pub fn parse_start_time(time: &str) -> ParseResult<NaiveTime> {
    NaiveTime::parse_from_str(&expand_meridiem(time), formats::START_TIME)
}

/// Parses a schedule date such as `"Tue, Oct 27, 2015"`.
///
/// The weekday abbreviation must be a weekday name but is not checked against
/// the calendar date.
pub fn parse_game_date(date: &str) -> ParseResult<NaiveDate> {
    let date = date.trim();
    match date.split_once(", ") {
        Some((weekday, rest)) if weekday.parse::<Weekday>().is_ok() => {
            NaiveDate::parse_from_str(rest, formats::GAME_DATE_WITHOUT_WEEKDAY)
        }
        _ => NaiveDate::parse_from_str(date, formats::GAME_DATE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_meridiem() {
        assert_eq!(expand_meridiem("8:00p"), "8:00PM");
        assert_eq!(expand_meridiem("10:30a"), "10:30AM");
        assert_eq!(expand_meridiem(" 7:30p "), "7:30PM");
        assert_eq!(expand_meridiem("7:30PM"), "7:30PM");
        assert_eq!(expand_meridiem(""), "");
    }

    #[test]
    fn test_parse_start_time_evening_and_morning() {
        assert_eq!(
            parse_start_time("8:00p").unwrap(),
            NaiveTime::from_hms_opt(20, 0, 0).unwrap()
        );
        assert_eq!(
            parse_start_time("10:30a").unwrap(),
            NaiveTime::from_hms_opt(10, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_start_time_noon_and_midnight() {
        assert_eq!(
            parse_start_time("12:00p").unwrap(),
            NaiveTime::from_hms_opt(12, 0, 0).unwrap()
        );
        assert_eq!(
            parse_start_time("12:30a").unwrap(),
            NaiveTime::from_hms_opt(0, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_start_time_rejects_malformed() {
        assert!(parse_start_time("8pm").is_err());
        assert!(parse_start_time("20:00").is_err());
        assert!(parse_start_time("13:00p").is_err());
        assert!(parse_start_time("").is_err());
    }

    #[test]
    fn test_parse_game_date() {
        assert_eq!(
            parse_game_date("Tue, Oct 27, 2015").unwrap(),
            NaiveDate::from_ymd_opt(2015, 10, 27).unwrap()
        );
        assert_eq!(
            parse_game_date("Sun, Jan 3, 2016").unwrap(),
            NaiveDate::from_ymd_opt(2016, 1, 3).unwrap()
        );
    }

    #[test]
    fn test_parse_game_date_ignores_weekday_mismatch() {
        assert_eq!(
            parse_game_date("Wed, Oct 27, 2015").unwrap(),
            NaiveDate::from_ymd_opt(2015, 10, 27).unwrap()
        );
    }

    #[test]
    fn test_parse_game_date_rejects_other_formats() {
        assert!(parse_game_date("Xyz, Oct 27, 2015").is_err());
        assert!(parse_game_date("2015-10-27").is_err());
        assert!(parse_game_date("Playoffs").is_err());
        assert!(parse_game_date("Oct 27, 2015").is_err());
    }
}
