// Compact magnitude formatting: 1.5K, 2.5M.
pub fn format_number(number: u64) -> String {
    if number >= 1_000_000 {
        format!("{}M", to_fixed(number as f64 / 1_000_000.0, 1))
    } else if number >= 1_000 {
        format!("{}K", to_fixed(number as f64 / 1_000.0, 1))
    } else {
        number.to_string()
    }
}

/// Fixed-point text for a non-negative `value`, rounded to the nearest
/// `digits`-decimal number. An exact tie rounds up, so `1.125` gives `1.13`
/// while `1.15` (stored just below 1.15) gives `1.1`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    let scale = 10f64.powi(digits as i32);
    let doubled = value * 2.0;
    let product = doubled * scale;
    // A tie means value * 10^digits is exactly an odd number of halves.
    let exact = doubled.mul_add(scale, -product) == 0.0;
    if exact && product.fract() == 0.0 && product % 2.0 == 1.0 {
        return format!("{:.*}", digits, (product + 1.0) / 2.0 / scale);
    }
    format!("{:.*}", digits, value)
}

/// First `max_chars` characters of `label`.
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    label.chars().take(max_chars).collect()
}

/// `numerator / denominator` rounded half-up, or `None` for a zero denominator.
pub fn rounded_ratio(numerator: u64, denominator: u64) -> Option<u64> {
    if denominator == 0 {
        return None;
    }
    let (n, d) = (numerator as u128, denominator as u128);
    Some(((2 * n + d) / (2 * d)) as u64)
}

pub fn format_rate(rate: f64) -> String {
    format!("{}%", rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_numbers_stay_plain() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
    }

    #[test]
    fn thousands_get_k_suffix() {
        assert_eq!(format_number(1000), "1.0K");
        assert_eq!(format_number(1500), "1.5K");
        assert_eq!(format_number(1250), "1.3K");
        assert_eq!(format_number(1049), "1.0K");
        assert_eq!(format_number(999_949), "999.9K");
    }

    #[test]
    fn rounding_follows_the_stored_quotient() {
        // 1.15 and 2.05 are stored just below the written value.
        assert_eq!(format_number(1150), "1.1K");
        assert_eq!(format_number(2050), "2.0K");
        assert_eq!(format_number(1250), "1.3K");
        assert_eq!(format_number(3_750_000), "3.8M");
    }

    #[test]
    fn fixed_point_ties_round_up() {
        assert_eq!(to_fixed(1.125, 2), "1.13");
        assert_eq!(to_fixed(0.5, 0), "1");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(2.3, 2), "2.30");
        assert_eq!(to_fixed(0.0, 2), "0.00");
    }

    #[test]
    fn millions_get_m_suffix() {
        assert_eq!(format_number(1_000_000), "1.0M");
        assert_eq!(format_number(2_500_000), "2.5M");
        assert_eq!(format_number(1_234_567_890), "1234.6M");
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        assert_eq!(truncate_label("short", 20), "short");
        assert_eq!(truncate_label("abcdefghijklmnopqrstuvwxyz", 20), "abcdefghijklmnopqrst");
        assert_eq!(truncate_label("ñññ", 2), "ññ");
    }

    #[test]
    fn ratio_rounds_half_up() {
        assert_eq!(rounded_ratio(5, 2), Some(3));
        assert_eq!(rounded_ratio(7, 3), Some(2));
        assert_eq!(rounded_ratio(10, 0), None);
    }

    #[test]
    fn rate_keeps_backend_precision() {
        assert_eq!(format_rate(3.25), "3.25%");
        assert_eq!(format_rate(2.0), "2%");
    }
}
