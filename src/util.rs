// Formatting and rounding helpers shared by the widgets

pub fn format_amount(value: f64, decimals: usize, suffix: &str) -> String {
    if suffix.is_empty() {
        format!("{:.*}", decimals, value)
    } else {
        format!("{:.*} {}", decimals, value, suffix)
    }
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_fixed_decimals_and_suffix() {
        assert_eq!(format_amount(0.0, 8, "SIM"), "0.00000000 SIM");
        assert_eq!(format_amount(0.000003, 8, "SIM"), "0.00000300 SIM");
        assert_eq!(format_amount(1.5, 2, ""), "1.50");
    }

    #[test]
    fn rounds_to_four_places() {
        assert_eq!(round_to(0.123456, 4), 0.1235);
        assert_eq!(round_to(0.01, 4), 0.01);
        assert_eq!(round_to(0.05999, 4), 0.06);
    }
}
