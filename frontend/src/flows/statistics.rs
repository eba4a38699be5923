use shared::Statistics;

use super::format::percent;
use crate::error::ClientError;
use crate::services::Services;

pub const STATISTICS_FAILED: &str = "Failed to load statistics";

#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsSummary {
    pub total: u64,
    pub tumor: u64,
    pub no_tumor: u64,
    pub average_confidence: String,
}

impl From<&Statistics> for StatisticsSummary {
    fn from(stats: &Statistics) -> Self {
        Self {
            total: stats.total_predictions,
            tumor: stats.tumor_detected,
            no_tumor: stats.no_tumor_detected,
            average_confidence: percent(stats.average_confidence, 1),
        }
    }
}

/// All four figures render together, or the error does.
#[derive(Debug, Clone, PartialEq)]
pub enum StatisticsRender {
    Error(String),
    Loaded(StatisticsSummary),
}

pub trait StatisticsView {
    fn render_statistics(&self, render: StatisticsRender);
}

pub async fn load_statistics(services: &Services, view: &dyn StatisticsView) {
    let result = match services.token() {
        Some(token) => services.api.statistics(&token).await,
        None => Err(ClientError::MissingSession),
    };

    let render = match result {
        Ok(stats) => StatisticsRender::Loaded(StatisticsSummary::from(&stats)),
        Err(err) => {
            log::error!("Failed to load statistics: {}", err);
            StatisticsRender::Error(STATISTICS_FAILED.to_string())
        }
    };
    view.render_statistics(render);
}
