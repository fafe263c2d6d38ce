/// Flat tax rate applied to every booking (18%).
pub const TAX_RATE: f64 = 0.18;

/// Total cost of a booking: `price * guests * (1 + TAX_RATE)`,
/// rounded half-up to two decimal places.
pub fn total_with_tax(price: f64, guests: i32) -> f64 {
    let raw = price * guests as f64 * (1.0 + TAX_RATE);
    (raw * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxed_total_for_two_guests() {
        // 100.00 * 2 * 1.18 = 236.00
        assert_eq!(total_with_tax(100.0, 2), 236.0);
    }

    #[test]
    fn taxed_total_for_single_guest() {
        assert_eq!(total_with_tax(50.0, 1), 59.0);
    }

    #[test]
    fn total_is_rounded_to_cents() {
        // 33.33 * 1.18 = 39.3294
        assert_eq!(total_with_tax(33.33, 1), 39.33);
        // 19.99 * 3 * 1.18 = 70.7646
        assert_eq!(total_with_tax(19.99, 3), 70.76);
    }
}
