// src/core/sanitize.rs
use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::STATE_SEP;
use crate::data::PriceValue;

static PRICE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\d,]+").expect("price pattern is valid"));

/// Collapse sequences of whitespace (including `&nbsp;`) into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Reduce raw cell text to the first run of digits and commas.
///
/// `"₹1,23,456 per gram"` → `"1,23,456"`. Commas stay; they are stripped only
/// when a value is read as a number. Text with no digits is kept as-is unless
/// it contains the state separator; that, and missing or empty input, is the
/// sentinel.
pub fn clean_price(raw: Option<&str>) -> PriceValue {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return PriceValue::NotAvailable;
    };
    match PRICE_RUN.find(raw) {
        Some(m) => PriceValue::Price(s!(m.as_str())),
        // would split the persisted line
        None if raw.contains(STATE_SEP) => PriceValue::NotAvailable,
        None => PriceValue::from_field(raw),
    }
}
