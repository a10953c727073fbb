//! Price input normalization
//!
//! Sale prices and salaries are stored as display strings on the backend
//! (e.g. "£45,000"). Form fields accept arbitrary input and normalize it
//! through this helper on every keystroke.

/// Normalize free-form price input to a `£`-prefixed, comma-grouped string.
///
/// Non-digit characters are stripped first; if nothing remains the result is
/// the empty string, otherwise the digits are grouped in thousands:
/// `"2500000"` becomes `"£2,500,000"`.
pub fn format_price_input(input: &str) -> String {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return String::new();
    }

    let significant = digits.trim_start_matches('0');
    let significant = if significant.is_empty() { "0" } else { significant };

    let mut grouped = String::with_capacity(significant.len() + significant.len() / 3 + 1);
    for (i, c) in significant.chars().enumerate() {
        if i > 0 && (significant.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("£{}", grouped)
}
