//! Date and currency formatting for the es-AR locale.
//!
//! Output follows what `Intl` produces for `es-AR` in browsers:
//! `dd/mm/yyyy` dates and `$ 1.234,50` peso amounts, with a no-break
//! space after the currency sign.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

/// Placeholder for a missing date.
pub const MISSING_DATE: &str = "N/A";

/// Result for a date string that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Argentina has been on UTC-03:00 all year round since 2009.
const ARGENTINA_UTC_OFFSET_SECS: i32 = 3 * 3600;

const CURRENCY_SYMBOL: &str = "$";
const NO_BREAK_SPACE: char = '\u{a0}';
const GROUP_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';

/// Formats an API date string as `dd/mm/yyyy`.
///
/// Accepts plain dates (`2024-03-05`), naive timestamps
/// (`2024-03-05T18:30:00`, as the backend serializes them) and RFC 3339
/// timestamps, which are shown in Argentina time. Plain dates are taken as
/// calendar dates and never shifted across a day boundary.
///
/// # Example
///
/// ```
/// use fitflow_domain::format::format_date;
///
/// assert_eq!(format_date(Some("2024-03-05")), "05/03/2024");
/// assert_eq!(format_date(None), "N/A");
/// ```
#[must_use]
pub fn format_date(input: Option<&str>) -> String {
    match input {
        None | Some("") => MISSING_DATE.to_string(),
        Some(raw) => parse_calendar_date(raw).map_or_else(|| INVALID_DATE.to_string(), format_naive_date),
    }
}

/// Formats a calendar date as `dd/mm/yyyy`.
#[must_use]
pub fn format_naive_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(to_argentina_date(timestamp));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
}

fn to_argentina_date(timestamp: DateTime<FixedOffset>) -> NaiveDate {
    FixedOffset::west_opt(ARGENTINA_UTC_OFFSET_SECS).map_or_else(
        || timestamp.date_naive(),
        |tz| timestamp.with_timezone(&tz).date_naive(),
    )
}

/// Formats an amount as Argentine pesos.
///
/// # Example
///
/// ```
/// use fitflow_domain::format::format_currency;
///
/// assert_eq!(format_currency(1234.5), "$\u{a0}1.234,50");
/// assert_eq!(format_currency(-10.0), "-$\u{a0}10,00");
/// ```
#[must_use]
pub fn format_currency(amount: f64) -> String {
    let sign = if amount.is_sign_negative() && !amount.is_nan() {
        "-"
    } else {
        ""
    };

    let digits = if amount.is_nan() {
        "NaN".to_string()
    } else if amount.is_infinite() {
        "∞".to_string()
    } else {
        let fixed = format!("{:.2}", amount.abs());
        let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        format!("{}{DECIMAL_SEPARATOR}{fraction}", group_thousands(integer))
    };

    format!("{sign}{CURRENCY_SYMBOL}{NO_BREAK_SPACE}{digits}")
}

fn group_thousands(integer: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}
