use crate::types::{PricePoint, Trend};

/// Percentage change between the last two historical points, rounded to two
/// decimals. Zero when there are fewer than two points or the previous price
/// cannot be divided by.
pub fn change_pct(history: &[PricePoint]) -> f64 {
    let [.., prev, last] = history else {
        return 0.0;
    };

    if !prev.price.is_finite() || !last.price.is_finite() || prev.price == 0.0 {
        return 0.0;
    }

    round2((last.price - prev.price) / prev.price * 100.0)
}

/// Direction of the latest move.
pub fn trend(history: &[PricePoint]) -> Trend {
    Trend::from_change(change_pct(history))
}

/// Price of the final forecast point.
pub fn next_target(prediction: &[PricePoint]) -> Option<f64> {
    prediction.last().map(|p| p.price)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(prices: &[f64]) -> Vec<PricePoint> {
        prices
            .iter()
            .enumerate()
            .map(|(i, p)| PricePoint::new(format!("Day {}", i + 1), *p))
            .collect()
    }

    #[test]
    fn test_change_pct() {
        assert_eq!(change_pct(&history(&[100.0, 105.0])), 5.0);
        assert_eq!(change_pct(&history(&[100.0, 95.0])), -5.0);
        assert_eq!(change_pct(&history(&[50.0, 100.0, 95.0])), -5.0);
    }

    #[test]
    fn test_change_pct_rounds() {
        assert_eq!(change_pct(&history(&[3.0, 4.0])), 33.33);
        assert_eq!(change_pct(&history(&[3.0, 2.0])), -33.33);
    }

    #[test]
    fn test_change_pct_degenerate() {
        assert_eq!(change_pct(&[]), 0.0);
        assert_eq!(change_pct(&history(&[100.0])), 0.0);
        assert_eq!(change_pct(&history(&[0.0, 5.0])), 0.0);
        assert_eq!(change_pct(&history(&[f64::NAN, 5.0])), 0.0);
    }

    #[test]
    fn test_trend() {
        assert_eq!(trend(&history(&[100.0, 100.0])), Trend::Up);
        assert_eq!(trend(&history(&[100.0, 99.0])), Trend::Down);
        assert_eq!(trend(&[]), Trend::Up);
    }

    #[test]
    fn test_next_target() {
        assert_eq!(next_target(&[]), None);
        assert_eq!(next_target(&history(&[1.0, 2.5])), Some(2.5));
    }
}
