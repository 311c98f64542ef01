//! FILENAME: engine/src/record.rs
//! PURPOSE: Defines the fundamental data structures for a single company record.
//! CONTEXT: This file contains the `CompanyRecord` struct and `MetricValue` enum.
//! A record is an immutable snapshot delivered by the lookup collaborator;
//! the engine decides only whether a record is present, never what it contains.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A raw metric field value as delivered by the collaborator's JSON.
///
/// Untagged so a flat record deserializes directly: JSON numbers become
/// `Number`, strings become `Text`, and `null` becomes `Missing`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
    Missing,
}

impl MetricValue {
    /// Returns the value as a finite number, if it parses as one.
    ///
    /// Text parses leniently: leading/trailing whitespace is ignored and a
    /// trailing non-numeric suffix is dropped, so `"12.5%"` yields `12.5`.
    /// Non-finite results count as unparseable.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetricValue::Number(n) if n.is_finite() => Some(*n),
            MetricValue::Text(s) => parse_leading_number(s).filter(|n| n.is_finite()),
            _ => None,
        }
    }

    /// Returns true if the value is absent.
    pub fn is_missing(&self) -> bool {
        matches!(self, MetricValue::Missing)
    }
}

impl Default for MetricValue {
    fn default() -> Self {
        MetricValue::Missing
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        MetricValue::Number(value)
    }
}

impl From<&str> for MetricValue {
    fn from(value: &str) -> Self {
        MetricValue::Text(value.to_string())
    }
}

/// Parses the longest numeric prefix of a trimmed string.
fn parse_leading_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(n) = trimmed.parse::<f64>() {
        return Some(n);
    }

    let mut best = None;
    for (idx, _) in trimmed.char_indices().skip(1) {
        if let Ok(n) = trimmed[..idx].parse::<f64>() {
            best = Some(n);
        }
    }
    best
}

/// An immutable company snapshot: identity, free-text description, and a
/// mapping from metric key to raw value.
///
/// The metric map is flattened in the serialized form, matching the flat
/// record objects the lookup backend produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub ticker: String,
    pub exchange: String,
    pub name: String,

    #[serde(rename = "company_description", default)]
    pub description: String,

    /// Every non-identity field keyed by metric key (e.g. `market_cap`).
    #[serde(flatten)]
    pub metrics: BTreeMap<String, MetricValue>,
}

impl CompanyRecord {
    pub fn new(
        ticker: impl Into<String>,
        exchange: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        CompanyRecord {
            ticker: ticker.into(),
            exchange: exchange.into(),
            name: name.into(),
            description: String::new(),
            metrics: BTreeMap::new(),
        }
    }

    /// Builder-style metric assignment, used mainly when assembling records
    /// by hand.
    pub fn with_metric(mut self, key: impl Into<String>, value: impl Into<MetricValue>) -> Self {
        self.metrics.insert(key.into(), value.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns the raw value for a metric key, `Missing` if absent.
    pub fn metric(&self, key: &str) -> MetricValue {
        self.metrics.get(key).cloned().unwrap_or(MetricValue::Missing)
    }

    /// Returns the metric as a finite number, if present and parseable.
    pub fn metric_number(&self, key: &str) -> Option<f64> {
        self.metrics.get(key).and_then(MetricValue::as_f64)
    }
}
