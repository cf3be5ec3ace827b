//! Number formatting utilities for human-readable display.

use crate::shared::Currency;

/// Insert thousands separators into a plain decimal string.
///
/// The input must be the output of a `format!("{:.*}")` — an optional leading
/// `-`, digits, optionally a `.` and fraction. Only the integer part is
/// grouped.
fn group_digits(formatted: &str) -> String {
    let (sign, rest) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };

    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };

    let grouped = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|c| std::str::from_utf8(c).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",");

    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Trim trailing fractional zeros (and a bare trailing dot).
fn trim_zeros(formatted: String) -> String {
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}

/// Format a crypto quantity: up to 8 decimal places, trailing zeros trimmed,
/// thousands grouped.
pub fn format_crypto_amount(amount: f64) -> String {
    group_digits(&trim_zeros(format!("{:.8}", amount)))
}

/// Format a monetary value in the given display currency.
///
/// USD/EUR render with 2 decimals and a prefixed symbol; FCFA has no minor
/// unit and conventionally suffixes the currency.
pub fn format_currency(value: f64, currency: Currency) -> String {
    let (sign, abs) = if value < 0.0 { ("-", -value) } else { ("", value) };
    let grouped = group_digits(&format!("{:.*}", currency.decimals(), abs));

    match currency {
        Currency::Usd | Currency::Eur => {
            format!("{}{}{}", sign, currency.symbol(), grouped)
        }
        Currency::Fcfa => format!("{}{} {}", sign, grouped, currency.symbol()),
    }
}

/// Format a percentage change with an explicit sign, 2 decimals.
pub fn format_percentage(value: f64) -> String {
    format_percentage_with(value, 2)
}

/// Format a percentage change with an explicit sign and given decimals.
pub fn format_percentage_with(value: f64, decimals: usize) -> String {
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{}{:.*}%", sign, decimals, value)
}

/// Format a large dollar amount with K/M/B suffixes (market caps).
pub fn format_large_number(value: f64) -> String {
    if value >= 1e9 {
        format!("${:.2}B", value / 1e9)
    } else if value >= 1e6 {
        format!("${:.2}M", value / 1e6)
    } else if value >= 1e3 {
        format!("${:.2}K", value / 1e3)
    } else {
        format!("${:.2}", value)
    }
}
