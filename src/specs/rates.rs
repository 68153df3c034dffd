// src/specs/rates.rs
//! Extraction rules for the gold and silver rate pages.
//!
//! Two ways to find a per-gram price:
//! - **Header-anchored** (default): an `h2`–`h4` whose text contains the label
//!   (e.g. "24 Carat"), the next `table` after it, and that table's "1 gram"
//!   row. Second cell is the price.
//! - **Flat row-scan** (fallback): the first `tr` anywhere in the page whose
//!   text contains the label. Second cell is the price.
//!
//! The site has shipped both layouts, so `Extraction` runs the primary
//! strategy and falls back to the other when the first finds nothing.

use thiserror::Error;
use tracing::debug;

use crate::config::consts::{HEADING_TAGS, ONE_GRAM_LABELS};
use crate::core::html::Document;
use crate::core::sanitize::clean_price;
use crate::data::{MetricKey, PriceValue};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("no h2-h4 heading mentions '{0}'")]
    NoHeading(String),
    #[error("no table follows the '{0}' heading")]
    NoTable(String),
    #[error("the '{0}' table has no 1 gram row")]
    NoGramRow(String),
    #[error("no table row mentions '{0}'")]
    NoMatchingRow(String),
    #[error("row for '{label}' has {cells} cell(s), need at least 2")]
    UnparseableRow { label: String, cells: usize },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    #[default]
    HeaderAnchored,
    FlatRowScan,
}

impl Strategy {
    pub fn apply(self, doc: &Document, label: &str) -> Result<PriceValue, ExtractError> {
        match self {
            Strategy::HeaderAnchored => header_anchored(doc, label),
            Strategy::FlatRowScan => flat_row_scan(doc, label),
        }
    }
}

/// Primary strategy plus an optional fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Extraction {
    pub primary: Strategy,
    pub fallback: Option<Strategy>,
}

impl Default for Extraction {
    fn default() -> Self {
        Self {
            primary: Strategy::HeaderAnchored,
            fallback: Some(Strategy::FlatRowScan),
        }
    }
}

impl Extraction {
    pub fn only(strategy: Strategy) -> Self {
        Self { primary: strategy, fallback: None }
    }

    /// Run the primary strategy, then the fallback. When both fail the
    /// primary's error is reported.
    pub fn extract(&self, doc: &Document, label: &str) -> Result<PriceValue, ExtractError> {
        let err = match self.primary.apply(doc, label) {
            Ok(v) => return Ok(v),
            Err(e) => e,
        };
        let Some(fallback) = self.fallback.filter(|f| *f != self.primary) else {
            return Err(err);
        };
        debug!("{label}: {err}; trying {fallback:?}");
        fallback.apply(doc, label).map_err(|fallback_err| {
            debug!("{label}: fallback failed too: {fallback_err}");
            err
        })
    }

    /// Extract every metric in `keys` from one parsed page.
    pub fn extract_all(
        &self,
        doc: &Document,
        keys: &[MetricKey],
    ) -> Vec<(MetricKey, Result<PriceValue, ExtractError>)> {
        keys.iter()
            .map(|&key| (key, self.extract(doc, label(key))))
            .collect()
    }
}

/// Label searched for on the page for each metric.
pub fn label(key: MetricKey) -> &'static str {
    match key {
        MetricKey::Gold24K => "24 Carat",
        MetricKey::Gold22K => "22 Carat",
        MetricKey::Silver => "Silver",
    }
}

fn is_one_gram(cell_text: &str) -> bool {
    let t = cell_text.trim().to_lowercase();
    ONE_GRAM_LABELS.contains(&t.as_str())
}

/// Heading → next table → "1 gram" row → second cell.
pub fn header_anchored(doc: &Document, label: &str) -> Result<PriceValue, ExtractError> {
    let needle = label.to_lowercase();

    let heading = doc
        .find(|n| n.is_any(HEADING_TAGS) && n.text().to_lowercase().contains(&needle))
        .ok_or_else(|| ExtractError::NoHeading(s!(label)))?;

    let table = doc
        .find_next(heading, |n| n.is("table"))
        .ok_or_else(|| ExtractError::NoTable(s!(label)))?;

    for row in table.find_all(|n| n.is("tr")) {
        let cells = row.find_all(|n| n.is("td"));
        // header rows use <th>, spacer rows have one cell
        if cells.len() < 2 {
            continue;
        }
        if is_one_gram(&cells[0].text()) {
            return Ok(clean_price(Some(&cells[1].text())));
        }
    }

    Err(ExtractError::NoGramRow(s!(label)))
}

/// First row anywhere whose text mentions `label` → second `td` cell.
/// Later rows with the same label are ignored. Header cells (`th`) never
/// count, so a header naming the label is unparseable rather than a price.
pub fn flat_row_scan(doc: &Document, label: &str) -> Result<PriceValue, ExtractError> {
    let needle = label.to_lowercase();

    let row = doc
        .find(|n| n.is("tr") && n.text().to_lowercase().contains(&needle))
        .ok_or_else(|| ExtractError::NoMatchingRow(s!(label)))?;

    let cells = row.find_all(|n| n.is("td"));
    match cells.get(1) {
        Some(cell) => Ok(clean_price(Some(&cell.text()))),
        None => Err(ExtractError::UnparseableRow { label: s!(label), cells: cells.len() }),
    }
}
