//! Display formatting for report output: fixed-currency amounts with
//! grouped thousands and zero decimals, and day/short-month/year dates.

use chrono::{Datelike, NaiveDate};

/// All reports render amounts in this single currency.
pub const CURRENCY_CODE: &str = "UGX";

const GROUPING_SEPARATOR: char = ',';

/// Formats an amount with the currency code, e.g. `UGX 1,234,567`.
///
/// Values are rounded to whole units at display time only; accumulation
/// upstream stays on the raw numbers.
pub fn format_currency(amount: f64) -> String {
    format!("{} {}", CURRENCY_CODE, format_amount(amount))
}

/// Formats an amount as a grouped whole number without the currency code,
/// e.g. `1,234,567` or `-200,000`.
pub fn format_amount(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let grouped = group_digits(&rounded.abs().to_string(), GROUPING_SEPARATOR);
    if rounded < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}

/// Formats an ISO `YYYY-MM-DD` date as `05 Mar 2024`.
///
/// Record dates may carry a time suffix; only the leading date part is
/// considered. Unparseable input is passed through untouched.
pub fn format_date(iso: &str) -> String {
    let day_part = iso.get(..10).unwrap_or(iso);
    match NaiveDate::parse_from_str(day_part, "%Y-%m-%d") {
        Ok(date) => format_naive_date(date),
        Err(_) => iso.to_string(),
    }
}

/// Formats an already-parsed date as `05 Mar 2024`.
pub fn format_naive_date(date: NaiveDate) -> String {
    format!(
        "{:02} {} {}",
        date.day(),
        month_label(date.month()),
        date.year()
    )
}

fn month_label(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "",
    }
}

/// Replaces whitespace runs with underscores for use in file names.
pub fn underscore(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join("_")
}
