// Dashboard view model
use serde::Serialize;

use crate::domain::animation::{EntranceAnimation, FillAnimation};
use crate::domain::operations::{KpiEntry, OperatorRecord};
use crate::domain::tooltip::SeriesKey;

/// Identifies one of the two dashboard charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartId {
    Throughput,
    Errors,
}

impl ChartId {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "throughput" => Some(ChartId::Throughput),
            "errors" => Some(ChartId::Errors),
            _ => None,
        }
    }

    pub fn series_key(&self) -> SeriesKey {
        match self {
            ChartId::Throughput => SeriesKey::Kits,
            ChartId::Errors => SeriesKey::Errors,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
}

/// A plotted point, generic over both charts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub label: String,
    pub value: u32,
}

impl ChartPoint {
    pub fn new(label: String, value: u32) -> Self {
        Self { label, value }
    }
}

/// One chart panel with its series and entrance animation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartView {
    pub id: ChartId,
    pub title: String,
    pub kind: ChartKind,
    pub series_key: SeriesKey,
    pub points: Vec<ChartPoint>,
    pub entrance: EntranceAnimation,
}

/// A KPI entry wrapped with its staggered entrance animation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiTile {
    #[serde(flatten)]
    pub entry: KpiEntry,
    pub entrance: EntranceAnimation,
}

impl KpiTile {
    pub fn new(entry: KpiEntry, entrance: EntranceAnimation) -> Self {
        Self { entry, entrance }
    }
}

/// An operator record with its one-shot bar fill animation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorRow {
    #[serde(flatten)]
    pub record: OperatorRecord,
    pub fill: FillAnimation,
}

impl OperatorRow {
    pub fn new(record: OperatorRecord) -> Self {
        let fill = FillAnimation::to_score(record.score);
        Self { record, fill }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorPanel {
    pub title: String,
    pub rows: Vec<OperatorRow>,
    pub entrance: EntranceAnimation,
}

/// The complete dashboard screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub title: String,
    pub subtitle: String,
    pub status_badge: String,
    pub tiles: Vec<KpiTile>,
    pub charts: Vec<ChartView>,
    pub operators: OperatorPanel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_id_parse() {
        assert_eq!(ChartId::parse("throughput"), Some(ChartId::Throughput));
        assert_eq!(ChartId::parse("errors"), Some(ChartId::Errors));
        assert_eq!(ChartId::parse("latency"), None);
    }

    #[test]
    fn test_operator_row_fill_matches_score() {
        let row = OperatorRow::new(OperatorRecord::new("Operator A", 92));
        assert_eq!(row.fill.to_pct, 92.0);
        assert_eq!(row.fill.from_pct, 0.0);
    }
}
