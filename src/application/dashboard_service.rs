// Dashboard service - Use case for building the dashboard view model
use crate::application::operations_repository::OperationsRepository;
use crate::domain::animation::EntranceAnimation;
use crate::domain::dashboard::{
    ChartId, ChartKind, ChartPoint, ChartView, Dashboard, KpiTile, OperatorPanel, OperatorRow,
};
use crate::domain::tooltip::{ActivePoint, TooltipContent};
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn OperationsRepository>,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn OperationsRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_dashboard(&self) -> anyhow::Result<Dashboard> {
        let tiles = self.build_tiles().await?;
        let charts = vec![
            self.build_chart(ChartId::Throughput).await?,
            self.build_chart(ChartId::Errors).await?,
        ];
        let operators = self.build_operator_panel().await?;

        tracing::debug!(
            "Built dashboard: {} tiles, {} charts, {} operator rows",
            tiles.len(),
            charts.len(),
            operators.rows.len()
        );

        Ok(Dashboard {
            title: "Smart Kitting Dashboard".to_string(),
            subtitle: "Real-time operations overview".to_string(),
            status_badge: "Live (Demo)".to_string(),
            tiles,
            charts,
            operators,
        })
    }

    /// Tooltip content for a hovered chart point. A missing or out-of-range
    /// index means no point is active, and nothing is rendered.
    pub async fn tooltip(
        &self,
        chart: ChartId,
        index: Option<usize>,
    ) -> anyhow::Result<Option<TooltipContent>> {
        let active = match index {
            Some(i) => self
                .chart_points(chart)
                .await?
                .get(i)
                .map(|p| ActivePoint::new(chart.series_key(), &p.label, p.value)),
            None => None,
        };

        let content = TooltipContent::for_point(active.as_ref());
        if let Some(tooltip) = &content {
            let [axis_line, value_line] = tooltip.lines();
            tracing::debug!("Tooltip for {:?}: {} | {}", chart, axis_line, value_line);
        }
        Ok(content)
    }

    async fn build_tiles(&self) -> anyhow::Result<Vec<KpiTile>> {
        let entries = self.repository.kpi_entries().await?;
        Ok(entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| KpiTile::new(entry, EntranceAnimation::staggered(i)))
            .collect())
    }

    async fn build_chart(&self, id: ChartId) -> anyhow::Result<ChartView> {
        let (title, kind) = match id {
            ChartId::Throughput => ("Hourly Throughput", ChartKind::Bar),
            ChartId::Errors => ("Error Rate Trend", ChartKind::Line),
        };

        Ok(ChartView {
            id,
            title: title.to_string(),
            kind,
            series_key: id.series_key(),
            points: self.chart_points(id).await?,
            entrance: EntranceAnimation::immediate(),
        })
    }

    async fn chart_points(&self, id: ChartId) -> anyhow::Result<Vec<ChartPoint>> {
        let points = match id {
            ChartId::Throughput => self
                .repository
                .throughput_series()
                .await?
                .into_iter()
                .map(|p| ChartPoint::new(p.time, p.kits))
                .collect(),
            ChartId::Errors => self
                .repository
                .error_trend()
                .await?
                .into_iter()
                .map(|p| ChartPoint::new(p.day, p.errors))
                .collect(),
        };
        Ok(points)
    }

    async fn build_operator_panel(&self) -> anyhow::Result<OperatorPanel> {
        let records = self.repository.operator_scores().await?;
        Ok(OperatorPanel {
            title: "Operator Performance".to_string(),
            rows: records.into_iter().map(OperatorRow::new).collect(),
            entrance: EntranceAnimation::immediate(),
        })
    }
}
