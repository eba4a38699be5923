use yew::prelude::*;

use crate::flows::history::{HISTORY_EMPTY, HistoryEntry, HistoryRender};
use crate::flows::statistics::{StatisticsRender, StatisticsSummary};
use crate::flows::upload::{ANALYZING, UploadRender};

pub fn render_result(render: Option<&UploadRender>) -> Html {
    let content = match render {
        None => html! {},
        Some(UploadRender::Analyzing) => html! { <p class="loading">{ ANALYZING }</p> },
        Some(UploadRender::Result(display)) => html! {
            <div class={classes!("result-box", display.class)}>
                <h3>{"Prediction Result"}</h3>
                <p class="label">{ &display.label }</p>
                <p class="confidence">{ format!("Confidence: {}", display.confidence) }</p>
            </div>
        },
        Some(UploadRender::Error(msg)) => html! { <p class="error">{ format!("❌ {}", msg) }</p> },
    };
    html! { <div id="result">{ content }</div> }
}

pub fn render_history(render: Option<&HistoryRender>) -> Html {
    let content = match render {
        None => html! { <p class="loading">{"Loading history..."}</p> },
        Some(HistoryRender::Error(msg)) => html! { <p class="error">{ msg }</p> },
        Some(HistoryRender::Empty) => html! { <p class="empty">{ HISTORY_EMPTY }</p> },
        Some(HistoryRender::Items(entries)) => html! {
            <div class="history-items">
                { for entries.iter().map(render_history_item) }
            </div>
        },
    };
    html! {
        <section class="history-section">
            <h2>{"Recent Predictions"}</h2>
            <div id="history-list">{ content }</div>
        </section>
    }
}

fn render_history_item(entry: &HistoryEntry) -> Html {
    html! {
        <div class="history-item">
            <div class="history-info">
                <span class={classes!("history-label", entry.label_class)}>{ &entry.label }</span>
                <span class="history-confidence">{ &entry.confidence }</span>
            </div>
            <div class="history-meta">
                <span class="history-date">{ &entry.date }</span>
                <span class="history-file">{ &entry.filename }</span>
            </div>
        </div>
    }
}

pub fn render_statistics(render: Option<&StatisticsRender>) -> Html {
    let content = match render {
        None => html! { <p class="loading">{"Loading statistics..."}</p> },
        Some(StatisticsRender::Error(msg)) => html! { <p class="error">{ msg }</p> },
        Some(StatisticsRender::Loaded(summary)) => render_stats_grid(summary),
    };
    html! {
        <section class="statistics-section">
            <h2>{"Your Statistics"}</h2>
            <div id="statistics">{ content }</div>
        </section>
    }
}

fn render_stats_grid(summary: &StatisticsSummary) -> Html {
    html! {
        <div class="stats-grid">
            <div class="stat-item">
                <h3>{ summary.total }</h3>
                <p>{"Total Predictions"}</p>
            </div>
            <div class="stat-item tumor">
                <h3>{ summary.tumor }</h3>
                <p>{"Tumors Detected"}</p>
            </div>
            <div class="stat-item no-tumor">
                <h3>{ summary.no_tumor }</h3>
                <p>{"No Tumor"}</p>
            </div>
            <div class="stat-item">
                <h3>{ &summary.average_confidence }</h3>
                <p>{"Avg Confidence"}</p>
            </div>
        </div>
    }
}
