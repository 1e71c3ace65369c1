// Repository trait for operations data access
use crate::domain::operations::{ErrorTrendPoint, KpiEntry, OperatorRecord, ThroughputPoint};
use async_trait::async_trait;

#[async_trait]
pub trait OperationsRepository: Send + Sync {
    /// KPI summary entries shown as the top row of tiles
    async fn kpi_entries(&self) -> anyhow::Result<Vec<KpiEntry>>;

    /// Hourly kit-pick counts, ordered by time
    async fn throughput_series(&self) -> anyhow::Result<Vec<ThroughputPoint>>;

    /// Daily error counts, ordered by day
    async fn error_trend(&self) -> anyhow::Result<Vec<ErrorTrendPoint>>;

    /// Operator performance scores
    async fn operator_scores(&self) -> anyhow::Result<Vec<OperatorRecord>>;
}
