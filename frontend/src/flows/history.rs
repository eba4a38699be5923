use shared::PredictionHistoryItem;

use super::format::{format_timestamp, history_class, percent};
use crate::error::ClientError;
use crate::services::Services;

pub const HISTORY_FAILED: &str = "Failed to load history";
pub const HISTORY_EMPTY: &str = "No predictions yet. Upload an image to get started!";

/// One row of the history list, ready to display.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub filename: String,
    pub label: String,
    pub label_class: &'static str,
    pub confidence: String,
    pub date: String,
}

impl From<&PredictionHistoryItem> for HistoryEntry {
    fn from(item: &PredictionHistoryItem) -> Self {
        Self {
            filename: item.filename.clone(),
            label: item.prediction_label.to_string(),
            label_class: history_class(&item.prediction_label),
            confidence: percent(item.confidence_score, 2),
            date: format_timestamp(&item.created_at),
        }
    }
}

/// Full replacement of the history panel.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryRender {
    Error(String),
    Empty,
    Items(Vec<HistoryEntry>),
}

pub trait HistoryView {
    fn render_history(&self, render: HistoryRender);
}

/// Fetches the most recent predictions and renders them in server order.
pub async fn load_history(services: &Services, view: &dyn HistoryView) {
    let limit = services.config.history_limit;
    let result = match services.token() {
        Some(token) => services.api.history(&token, limit).await,
        None => Err(ClientError::MissingSession),
    };

    let render = match result {
        Ok(items) if items.is_empty() => HistoryRender::Empty,
        Ok(items) => {
            log::debug!("Loaded {} history records", items.len());
            HistoryRender::Items(items.iter().map(HistoryEntry::from).collect())
        }
        Err(err) => {
            log::error!("Failed to load history: {}", err);
            HistoryRender::Error(HISTORY_FAILED.to_string())
        }
    };
    view.render_history(render);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ApiCall, Harness, RecordingView, ViewEvent, history_item};

    #[tokio::test]
    async fn empty_history_renders_empty_state() {
        let harness = Harness::signed_in("T");
        *harness.api.history.borrow_mut() = Some(Ok(vec![]));
        let view = RecordingView::default();

        load_history(&harness.services, &view).await;

        assert_eq!(view.events(), vec![ViewEvent::History(HistoryRender::Empty)]);
        assert_eq!(
            harness.api.calls(),
            vec![ApiCall::History {
                token: "T".into(),
                limit: 10
            }]
        );
    }

    #[tokio::test]
    async fn records_keep_server_order_and_percent_format() {
        let harness = Harness::signed_in("T");
        *harness.api.history.borrow_mut() = Some(Ok(vec![
            history_item("z-last.png", "No Tumor", 0.5),
            history_item("a-first.png", "Tumor", 0.9512),
        ]));
        let view = RecordingView::default();

        load_history(&harness.services, &view).await;

        let Some(ViewEvent::History(HistoryRender::Items(entries))) = view.last() else {
            panic!("expected rendered items, got {:?}", view.events());
        };
        let names: Vec<_> = entries.iter().map(|e| e.filename.as_str()).collect();
        assert_eq!(names, vec!["z-last.png", "a-first.png"]);
        assert_eq!(entries[0].confidence, "50.00%");
        assert_eq!(entries[0].label_class, "no-tumor");
        assert_eq!(entries[1].confidence, "95.12%");
        assert_eq!(entries[1].label, "Tumor");
        assert_eq!(entries[1].label_class, "tumor");
        assert!(!entries[1].date.is_empty());
    }

    #[tokio::test]
    async fn failure_replaces_content_with_error() {
        let harness = Harness::signed_in("T");
        *harness.api.history.borrow_mut() = Some(Err(ClientError::Server {
            status: 500,
            detail: Some("boom".into()),
        }));
        let view = RecordingView::default();

        load_history(&harness.services, &view).await;

        assert_eq!(
            view.events(),
            vec![ViewEvent::History(HistoryRender::Error(HISTORY_FAILED.into()))]
        );
    }

    #[tokio::test]
    async fn missing_token_skips_request() {
        let harness = Harness::new();
        let view = RecordingView::default();

        load_history(&harness.services, &view).await;

        assert!(harness.api.calls().is_empty());
        assert_eq!(
            view.last(),
            Some(ViewEvent::History(HistoryRender::Error(HISTORY_FAILED.into())))
        );
    }
}
