// Operations data domain models
use serde::Serialize;

/// A KPI value is either a plain count or pre-formatted text (e.g. "0.12%").
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum KpiValue {
    Count(u64),
    Text(String),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiEntry {
    pub label: String,
    pub value: KpiValue,
    pub icon: String,
    pub gradient: String,
}

impl KpiEntry {
    pub fn count(label: &str, value: u64, icon: &str, gradient: &str) -> Self {
        Self {
            label: label.to_string(),
            value: KpiValue::Count(value),
            icon: icon.to_string(),
            gradient: gradient.to_string(),
        }
    }

    pub fn text(label: &str, value: &str, icon: &str, gradient: &str) -> Self {
        Self {
            label: label.to_string(),
            value: KpiValue::Text(value.to_string()),
            icon: icon.to_string(),
            gradient: gradient.to_string(),
        }
    }
}

/// One hour's recorded kit-pick count.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThroughputPoint {
    pub time: String,
    pub kits: u32,
}

impl ThroughputPoint {
    pub fn new(time: &str, kits: u32) -> Self {
        Self {
            time: time.to_string(),
            kits,
        }
    }
}

/// One day's recorded error count.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorTrendPoint {
    pub day: String,
    pub errors: u32,
}

impl ErrorTrendPoint {
    pub fn new(day: &str, errors: u32) -> Self {
        Self {
            day: day.to_string(),
            errors,
        }
    }
}

/// A named performance score, shown as a percentage-width bar.
/// Scores are expected to lie in 0..=100.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorRecord {
    pub name: String,
    pub score: u8,
}

impl OperatorRecord {
    pub fn new(name: &str, score: u8) -> Self {
        Self {
            name: name.to_string(),
            score,
        }
    }
}
