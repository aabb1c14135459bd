//! Display formatting in the Indonesian (`id-ID`) conventions the
//! dashboard uses: dot thousands separator, comma decimal separator,
//! Rupiah with no minor units, long month names.
//!
//! Every function is total. Absent input maps to a fixed fallback string
//! instead of an error.

use crate::types::{Amount, PLACEHOLDER};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Literal shown for a zero or missing amount.
pub const ZERO_CURRENCY: &str = "Rp 0";

/// Shown for a date string that does not parse.
pub const INVALID_DATE: &str = "Invalid Date";

const CURRENCY_SYMBOL: &str = "Rp";
const NBSP: char = '\u{a0}';
const GROUP_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';
const MAX_NUMBER_FRACTION_DIGITS: usize = 3;

const MONTHS_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Zero, NaN and absence all count as "no value".
fn is_truthy(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

/// `Rp 1.000.000` style, zero decimals, rounded half away from zero.
///
/// ```
/// use c360_core::format::format_currency;
/// assert_eq!(format_currency(Some(1_500_000.0)), "Rp\u{a0}1.500.000");
/// assert_eq!(format_currency(None), "Rp 0");
/// ```
pub fn format_currency(amount: Option<Amount>) -> String {
    let Some(amount) = is_truthy(amount) else {
        return ZERO_CURRENCY.to_string();
    };
    let sign = if amount < 0.0 { "-" } else { "" };
    let digits = if amount.is_infinite() {
        "∞".to_string()
    } else {
        group_digits(&format!("{:.0}", amount.abs().round()))
    };
    format!("{sign}{CURRENCY_SYMBOL}{NBSP}{digits}")
}

/// Dot-grouped number with up to three fraction digits, trailing zeros
/// trimmed: `1234567.5` → `1.234.567,5`.
pub fn format_number(num: Option<f64>) -> String {
    let Some(num) = is_truthy(num) else {
        return "0".to_string();
    };
    if num.is_infinite() {
        return if num < 0.0 { "-∞" } else { "∞" }.to_string();
    }

    // Ties round away from zero.
    let scale = 10f64.powi(MAX_NUMBER_FRACTION_DIGITS as i32);
    let scaled = (num.abs() * scale).round();
    let whole = (scaled / scale).trunc();
    let integer_part = format!("{whole:.0}");
    let fraction_digits = format!(
        "{:0width$.0}",
        scaled - whole * scale,
        width = MAX_NUMBER_FRACTION_DIGITS
    );
    let fraction = fraction_digits.trim_end_matches('0');

    let mut out = String::new();
    // The sign survives rounding to zero: `-0.0001` reads `-0`.
    if num < 0.0 {
        out.push('-');
    }
    out.push_str(&group_digits(&integer_part));
    if !fraction.is_empty() {
        out.push(DECIMAL_SEPARATOR);
        out.push_str(fraction);
    }
    out
}

/// Long-form Indonesian date: `2024-01-15` → `15 Januari 2024`.
///
/// Timestamps render the calendar date as written, in their own offset.
pub fn format_date(value: Option<&str>) -> String {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return PLACEHOLDER.to_string();
    };
    match parse_date(raw) {
        Some(date) => format!(
            "{} {} {}",
            date.day(),
            MONTHS_ID[date.month0() as usize],
            date.year()
        ),
        None => INVALID_DATE.to_string(),
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|ts| ts.date())
}

/// Inserts the group separator every three digits from the right.
fn group_digits(integer_digits: &str) -> String {
    let len = integer_digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in integer_digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }
    out
}

// ── Display helpers ────────────────────────────────────────────────

/// A number the way a browser prints it: no trailing `.0`, no `-0`.
pub fn format_plain(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

/// Text value or the placeholder when absent or empty.
pub fn display_or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Numeric value or the placeholder; zero also shows the placeholder.
pub fn number_or_dash(value: Option<f64>) -> String {
    is_truthy(value).map_or_else(|| PLACEHOLDER.to_string(), format_plain)
}

/// `12 months`, `5 years`; placeholder when the quantity is absent.
pub fn with_unit(value: Option<f64>, unit: &str) -> String {
    value.map_or_else(
        || PLACEHOLDER.to_string(),
        |v| format!("{} {unit}", format_plain(v)),
    )
}

/// Rate already expressed in percent: `4.25` → `4.25%`.
pub fn format_percent(rate: Option<f64>) -> String {
    rate.map_or_else(
        || PLACEHOLDER.to_string(),
        |r| format!("{}%", format_plain(r)),
    )
}

/// Ratio in `0..=1` shown as a whole percentage: `0.156` → `16%`.
pub fn format_ratio_percent(ratio: Option<f64>) -> String {
    ratio.filter(|r| r.is_finite()).map_or_else(
        || PLACEHOLDER.to_string(),
        |r| format!("{}%", format_plain((r * 100.0).round())),
    )
}

/// Signed return: `+12.5%` for gains (and zero), `-3.2%` for losses.
pub fn format_return(percentage: f64) -> String {
    if percentage >= 0.0 {
        format!("+{}%", format_plain(percentage))
    } else {
        format!("{}%", format_plain(percentage))
    }
}

/// `mass_affluent` → `MASS AFFLUENT`. Only the first underscore becomes a
/// space, so `high_net_worth` reads `HIGH NET_WORTH`.
pub fn segment_label(segment: Option<&str>) -> Option<String> {
    segment.map(|s| s.replacen('_', " ", 1).to_uppercase())
}

pub fn upper_or_dash(value: Option<&str>) -> String {
    display_or_dash(value.map(str::to_uppercase).as_deref())
}

/// `M` is Male; any other recorded value is Female.
pub fn gender_label(gender: Option<&str>) -> &'static str {
    match gender {
        Some("M") => "Male",
        Some(_) => "Female",
        None => PLACEHOLDER,
    }
}

pub fn check_mark(flag: Option<bool>) -> char {
    if flag.unwrap_or(false) {
        '✓'
    } else {
        '✗'
    }
}
