// src/data.rs
//
// Value types shared by the extractor, store, differ and notifier.
//
// - MetricKey:  the tracked rates, in their fixed serialization order.
// - PriceValue: a cleaned price string, or the "N/A" sentinel.
// - Snapshot:   one PriceValue per MetricKey; renders to the `-`-joined state line.

use std::fmt;

use crate::config::consts::{NOT_AVAILABLE, STATE_SEP};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MetricKey {
    Gold24K,
    Gold22K,
    Silver,
}

impl MetricKey {
    /// Serialization order. Changing it invalidates every persisted state file.
    pub const ALL: [MetricKey; 3] = [MetricKey::Gold24K, MetricKey::Gold22K, MetricKey::Silver];

    pub fn label(self) -> &'static str {
        match self {
            MetricKey::Gold24K => "24K",
            MetricKey::Gold22K => "22K",
            MetricKey::Silver => "Silver",
        }
    }

    /// Human name used in notifications.
    pub fn title(self) -> &'static str {
        match self {
            MetricKey::Gold24K => "24K Gold",
            MetricKey::Gold22K => "22K Gold",
            MetricKey::Silver => "Silver",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PriceValue {
    /// Digits and thousands separators, e.g. `"1,23,456"`.
    Price(String),
    #[default]
    NotAvailable,
}

impl PriceValue {
    /// Read one persisted field; the sentinel token and an empty field map
    /// to `NotAvailable`.
    pub fn from_field(field: &str) -> Self {
        if field.is_empty() || field == NOT_AVAILABLE {
            PriceValue::NotAvailable
        } else {
            PriceValue::Price(s!(field))
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, PriceValue::Price(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            PriceValue::Price(p) => p,
            PriceValue::NotAvailable => NOT_AVAILABLE,
        }
    }

    /// Numeric reading with thousands separators removed.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            PriceValue::Price(p) => p
                .replace(',', "")
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite()),
            PriceValue::NotAvailable => None,
        }
    }
}

impl fmt::Display for PriceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Last known (or freshly scraped) value of every metric.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    values: [PriceValue; 3],
}

impl Snapshot {
    pub fn new(gold_24k: PriceValue, gold_22k: PriceValue, silver: PriceValue) -> Self {
        Self { values: [gold_24k, gold_22k, silver] }
    }

    pub fn get(&self, key: MetricKey) -> &PriceValue {
        &self.values[key.index()]
    }

    pub fn set(&mut self, key: MetricKey, value: PriceValue) {
        self.values[key.index()] = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (MetricKey, &PriceValue)> {
        MetricKey::ALL.into_iter().zip(self.values.iter())
    }

    /// `24K-22K-Silver`, the line written to disk and compared by the change gate.
    pub fn state_string(&self) -> String {
        let fields: Vec<&str> = self.values.iter().map(PriceValue::as_str).collect();
        fields.join(STATE_SEP.to_string().as_str())
    }

    /// Inverse of `state_string`. `None` unless the line splits into exactly
    /// one field per metric; fields map positionally.
    pub fn parse_state(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.trim().split(STATE_SEP).collect();
        if fields.len() != MetricKey::ALL.len() {
            return None;
        }
        Some(Self::new(
            PriceValue::from_field(fields[0]),
            PriceValue::from_field(fields[1]),
            PriceValue::from_field(fields[2]),
        ))
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(k, v)| format!("{k}: {v}")).collect();
        write!(f, "{{{}}}", parts.join(", "))
    }
}
