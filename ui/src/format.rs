//! Display formatting helpers.

/// Colombian-peso style money: no decimals, dot thousand separators.
pub fn format_amount(value: f64) -> String {
    let negative = value < 0.0;
    let rounded = value.abs().round() as u64;
    let digits = rounded.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Calendar-date portion of an ISO-8601 timestamp, or the raw value when
/// it is too short to slice.
pub fn format_date(iso: &str) -> &str {
    iso.get(..10).unwrap_or(iso)
}

/// `format_date` over an optional timestamp, with a dash placeholder.
pub fn format_date_opt(iso: Option<&str>) -> &str {
    iso.map(format_date).unwrap_or("—")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(format_amount(0.0), "$0");
        assert_eq!(format_amount(950.0), "$950");
        assert_eq!(format_amount(1_250.0), "$1.250");
        assert_eq!(format_amount(350_000_000.0), "$350.000.000");
        assert_eq!(format_amount(1_234_567.0), "$1.234.567");
    }

    #[test]
    fn rounds_fractions_away() {
        assert_eq!(format_amount(999.6), "$1.000");
        assert_eq!(format_amount(1250.4), "$1.250");
    }

    #[test]
    fn negative_amounts_keep_the_sign() {
        assert_eq!(format_amount(-1_500.0), "-$1.500");
    }

    #[test]
    fn dates_slice_to_the_day() {
        assert_eq!(format_date("2024-05-01T10:30:00.000Z"), "2024-05-01");
        assert_eq!(format_date("2024"), "2024");
        assert_eq!(format_date_opt(None), "—");
    }
}
