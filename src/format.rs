//! Display helpers for the es-ES locale used across the dashboard.
//!
//! Every function is total: odd input gives an odd but well defined string, never a panic.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

const NBSP: char = '\u{a0}';
const ELLIPSIS: &str = "...";
pub const INVALID_DATE: &str = "Invalid Date";

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

// es-ES only groups integers of 5 digits or more: 1500, 15.000
const MIN_GROUPING_DIGITS: usize = 5;

fn group_thousands(digits: &str) -> String {
    if digits.len() < MIN_GROUPING_DIGITS {
        return digits.to_string();
    }
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, c) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("∞")
    } else if value == f64::NEG_INFINITY {
        Some("-∞")
    } else {
        None
    }
}

/// Euros without decimals, e.g. `15.000 €`.
pub fn format_currency(amount: f64) -> String {
    if let Some(special) = non_finite(amount) {
        return format!("{special}{NBSP}€");
    }
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!("{sign}{}{NBSP}€", group_thousands(&digits))
}

/// Grouped number with up to 3 decimals, e.g. `12.345,67`.
pub fn format_number(value: f64) -> String {
    if let Some(special) = non_finite(value) {
        return special.to_string();
    }
    let fixed = format!("{:.3}", value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let is_zero = integer.chars().all(|c| c == '0') && fraction.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    if fraction.is_empty() {
        format!("{sign}{}", group_thousands(integer))
    } else {
        format!("{sign}{},{fraction}", group_thousands(integer))
    }
}

/// Signed percentage with one decimal, e.g. `+4.5%`, `-3.2%`.
pub fn format_percentage(value: f64) -> String {
    // -0.0 prints as "-0.0"
    let value = if value == 0.0 { 0.0 } else { value };
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{sign}{value:.1}%")
}

/// Parses the date formats the backend sends: RFC 3339, a plain date or a naive datetime.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if let Ok(date_time) = DateTime::parse_from_rfc3339(input) {
        return Some(date_time.date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .map(|date_time| date_time.date())
}

pub fn long_date(date: NaiveDate) -> String {
    format!(
        "{} de {} de {}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

pub fn short_date(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
}

/// `15 de enero de 2024`
pub fn format_date(input: &str) -> String {
    parse_date(input).map_or_else(|| INVALID_DATE.to_string(), long_date)
}

/// `15/01/2024`
pub fn format_short_date(input: &str) -> String {
    parse_date(input).map_or_else(|| INVALID_DATE.to_string(), short_date)
}

/// Shortens `text` to at most `max_length` characters, ending with `...` when cut.
pub fn truncate(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    if max_length < ELLIPSIS.len() {
        // no room for the ellipsis
        return text.chars().take(max_length).collect();
    }
    let mut truncated: String = text.chars().take(max_length - ELLIPSIS.len()).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

fn transliterate(c: char) -> char {
    match c {
        'á' | 'à' | 'ä' | 'â' | 'ã' | 'å' => 'a',
        'é' | 'è' | 'ë' | 'ê' => 'e',
        'í' | 'ì' | 'ï' | 'î' => 'i',
        'ó' | 'ò' | 'ö' | 'ô' | 'õ' => 'o',
        'ú' | 'ù' | 'ü' | 'û' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        _ => c,
    }
}

/// URL friendly version of a title: `Año Nuevo Español` gives `ano-nuevo-espanol`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;
    for c in text.chars().flat_map(char::to_lowercase).map(transliterate) {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else {
            pending_separator = true;
        }
    }
    slug
}
