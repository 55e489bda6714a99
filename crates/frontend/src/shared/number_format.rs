//! Number formatting for table cells and cards.

/// Number with `,` thousands separators and the given number of decimals.
///
/// ```
/// # use frontend::shared::number_format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };

    let mut result = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    let mut grouped: String = result.chars().rev().collect();

    // "-0.00" reads oddly in a money column
    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
    if value.is_sign_negative() && !is_zero {
        grouped.insert(0, '-');
    }

    match decimal_part {
        Some(d) => format!("{}.{}", grouped, d),
        None => grouped,
    }
}

pub const CURRENCY_SYMBOL: &str = "₹";

/// Rupee amount with two decimals, e.g. `₹1,250.00` or `-₹40.00`.
pub fn format_money(value: f64) -> String {
    let amount = format_number_with_decimals(value, 2);
    match amount.strip_prefix('-') {
        Some(abs) => format!("-{}{}", CURRENCY_SYMBOL, abs),
        None => format!("{}{}", CURRENCY_SYMBOL, amount),
    }
}

pub fn format_count(value: u64) -> String {
    format_number_with_decimals(value as f64, 0)
}
