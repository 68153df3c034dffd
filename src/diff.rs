// src/diff.rs
use crate::data::{MetricKey, PriceValue, Snapshot};

/// Signed movement of one metric between two runs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PriceDelta {
    Increase(f64),
    Decrease(f64),
}

impl PriceDelta {
    pub fn magnitude(&self) -> f64 {
        match *self {
            PriceDelta::Increase(m) | PriceDelta::Decrease(m) => m,
        }
    }

    /// ` (₹100 🔺)` / ` (₹100 🔻)`; the magnitude is truncated to whole rupees.
    pub fn annotation(&self) -> String {
        let arrow = match self {
            PriceDelta::Increase(_) => "🔺",
            PriceDelta::Decrease(_) => "🔻",
        };
        format!(" (₹{} {arrow})", self.magnitude().trunc() as i64)
    }
}

/// `None` when either side is not a number, or when nothing moved.
pub fn price_delta(current: &PriceValue, last: &PriceValue) -> Option<PriceDelta> {
    let diff = current.to_number()? - last.to_number()?;
    if diff > 0.0 {
        Some(PriceDelta::Increase(diff))
    } else if diff < 0.0 {
        Some(PriceDelta::Decrease(-diff))
    } else {
        None
    }
}

pub fn annotation(delta: Option<PriceDelta>) -> String {
    delta.map(|d| d.annotation()).unwrap_or_default()
}

pub fn snapshot_deltas(current: &Snapshot, last: &Snapshot) -> Vec<(MetricKey, Option<PriceDelta>)> {
    current
        .iter()
        .map(|(key, value)| (key, price_delta(value, last.get(key))))
        .collect()
}

/// Whole-state gate: any difference in the state line counts as a change.
pub fn has_changed(current: &Snapshot, last_state: &str) -> bool {
    current.state_string() != last_state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(s: &str) -> PriceValue {
        PriceValue::Price(s!(s))
    }

    #[test]
    fn delta_sign_and_magnitude() {
        assert_eq!(price_delta(&price("1,000"), &price("900")), Some(PriceDelta::Increase(100.0)));
        assert_eq!(price_delta(&price("900"), &price("1,000")), Some(PriceDelta::Decrease(100.0)));
    }

    #[test]
    fn equal_values_have_no_delta() {
        assert_eq!(price_delta(&price("7,000"), &price("7000")), None);
    }

    #[test]
    fn sentinel_on_either_side_has_no_delta() {
        assert_eq!(price_delta(&PriceValue::NotAvailable, &price("900")), None);
        assert_eq!(price_delta(&price("900"), &PriceValue::NotAvailable), None);
        assert_eq!(price_delta(&price("Closed"), &price("900")), None);
    }

    #[test]
    fn annotation_text() {
        assert_eq!(PriceDelta::Increase(100.0).annotation(), " (₹100 🔺)");
        assert_eq!(PriceDelta::Decrease(12.9).annotation(), " (₹12 🔻)");
        assert_eq!(annotation(None), "");
    }

    #[test]
    fn gate_compares_full_state_line() {
        let snap = Snapshot::new(price("7,000"), price("6,500"), price("82"));
        assert!(!has_changed(&snap, "7,000-6,500-82"));
        assert!(has_changed(&snap, "7,000-6,500-83"));
        assert!(has_changed(&snap, ""));
    }

    #[test]
    fn deltas_per_metric() {
        let now = Snapshot::new(price("7,100"), price("6,500"), price("80"));
        let before = Snapshot::new(price("7,000"), price("6,500"), PriceValue::NotAvailable);
        let deltas = snapshot_deltas(&now, &before);
        assert_eq!(deltas[0], (MetricKey::Gold24K, Some(PriceDelta::Increase(100.0))));
        assert_eq!(deltas[1], (MetricKey::Gold22K, None));
        assert_eq!(deltas[2], (MetricKey::Silver, None));
    }
}
