//! Number formatting in the Indonesian locale

use contracts::domain::a001_barang::aggregate::Harga;

/// Formats a number with `.` as thousands separator and `,` before the
/// fraction, keeping at most three fractional digits
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(format_number_id(15000000.0), "15.000.000");
/// assert_eq!(format_number_id(1234.5), "1.234,5");
/// ```
pub fn format_number_id(value: f64) -> String {
    let formatted = format!("{:.3}", value);
    let (integer_part, decimal_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), ""));
    let decimal_part = decimal_part.trim_end_matches('0');

    let negative = integer_part.starts_with('-');
    let digits = integer_part.trim_start_matches('-');

    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(c);
    }
    let mut grouped = result.chars().rev().collect::<String>();

    // -0 после округления
    if negative && !(grouped == "0" && decimal_part.is_empty()) {
        grouped.insert(0, '-');
    }

    if decimal_part.is_empty() {
        grouped
    } else {
        format!("{},{}", grouped, decimal_part)
    }
}

/// Price label, e.g. `Rp 15.000.000`. Non-numeric prices are shown as sent.
pub fn format_rupiah(harga: &Harga) -> String {
    match harga.as_f64() {
        Some(value) => format!("Rp {}", format_number_id(value)),
        None => format!("Rp {}", harga),
    }
}
