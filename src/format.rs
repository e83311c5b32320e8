// src/format.rs
// Price formatting shared by the signal composer and the report builder.

pub const NOT_AVAILABLE: &str = "N/A";

/// Rounds half away from zero at `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

pub fn format_price(price: f64) -> String {
    format!("{:.5}", price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.234567, 5), 1.23457);
        assert_eq!(round_to(99.994, 2), 99.99);
        assert_eq!(round_to(100.0, 2), 100.0);
    }

    #[test]
    fn test_formatted_prices_parse_back_within_tolerance() {
        for price in [0.0, 0.000049, 1.08123456, 1.3, 143.456789, 25000.123456] {
            let parsed: f64 = format_price(price).parse().unwrap();
            assert!(
                (parsed - price).abs() <= 1e-5,
                "{} formatted as {}",
                price,
                format_price(price)
            );
        }
    }
}
