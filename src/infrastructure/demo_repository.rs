// In-memory demo catalog behind the operations repository
use crate::application::operations_repository::OperationsRepository;
use crate::domain::operations::{ErrorTrendPoint, KpiEntry, OperatorRecord, ThroughputPoint};
use async_trait::async_trait;

/// Fixed demo data for the kitting floor. Nothing here changes at runtime;
/// the repository seam exists so a live source can replace it later.
#[derive(Debug, Clone, Default)]
pub struct DemoRepository;

impl DemoRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OperationsRepository for DemoRepository {
    async fn kpi_entries(&self) -> anyhow::Result<Vec<KpiEntry>> {
        Ok(vec![
            KpiEntry::count("Active Operators", 8, "users", "from-indigo-500 to-purple-500"),
            KpiEntry::count("Kits in Progress", 24, "package", "from-sky-500 to-cyan-500"),
            KpiEntry::count(
                "Kits Completed Today",
                312,
                "check-circle-2",
                "from-emerald-500 to-lime-500",
            ),
            KpiEntry::text("Error Rate", "0.12%", "alert-triangle", "from-rose-500 to-orange-500"),
        ])
    }

    async fn throughput_series(&self) -> anyhow::Result<Vec<ThroughputPoint>> {
        Ok(vec![
            ThroughputPoint::new("8", 22),
            ThroughputPoint::new("9", 34),
            ThroughputPoint::new("10", 48),
            ThroughputPoint::new("11", 62),
            ThroughputPoint::new("12", 70),
            ThroughputPoint::new("1", 75),
            ThroughputPoint::new("2", 68),
            ThroughputPoint::new("3", 44),
            ThroughputPoint::new("4", 30),
        ])
    }

    async fn error_trend(&self) -> anyhow::Result<Vec<ErrorTrendPoint>> {
        Ok(vec![
            ErrorTrendPoint::new("D1", 5),
            ErrorTrendPoint::new("D2", 3),
            ErrorTrendPoint::new("D3", 4),
            ErrorTrendPoint::new("D4", 2),
            ErrorTrendPoint::new("D5", 1),
        ])
    }

    async fn operator_scores(&self) -> anyhow::Result<Vec<OperatorRecord>> {
        Ok(vec![
            OperatorRecord::new("Operator A", 92),
            OperatorRecord::new("Operator B", 85),
            OperatorRecord::new("Operator C", 71),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_catalog_sizes_are_fixed() {
        let repo = DemoRepository::new();

        assert_eq!(repo.kpi_entries().await.unwrap().len(), 4);
        assert_eq!(repo.throughput_series().await.unwrap().len(), 9);
        assert_eq!(repo.error_trend().await.unwrap().len(), 5);
        assert_eq!(repo.operator_scores().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_throughput_series_keeps_hour_order() {
        let repo = DemoRepository::new();
        let labels: Vec<String> = repo
            .throughput_series()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.time)
            .collect();
        assert_eq!(labels, vec!["8", "9", "10", "11", "12", "1", "2", "3", "4"]);
    }

    #[tokio::test]
    async fn test_operator_scores_stay_in_percentage_range() {
        let repo = DemoRepository::new();
        for record in repo.operator_scores().await.unwrap() {
            assert!(record.score <= 100, "{} out of range", record.name);
        }
    }
}
