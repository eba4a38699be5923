use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::EnumString;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// The authenticated account as returned by `/api/auth/me`.
///
/// Only `email` is guaranteed; the remaining fields are filled when the
/// server sends its full user record.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct User {
    pub email: String,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Classification produced by the model.
///
/// Anything other than the two known outcomes (`Uncertain`, `Invalid Input`,
/// `Error`, ...) is kept verbatim.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, EnumString)]
#[serde(from = "String", into = "String")]
pub enum PredictionLabel {
    #[strum(serialize = "Tumor")]
    Tumor,
    #[strum(serialize = "No Tumor")]
    NoTumor,
    #[strum(default)]
    Other(String),
}

impl PredictionLabel {
    pub fn as_str(&self) -> &str {
        match self {
            PredictionLabel::Tumor => "Tumor",
            PredictionLabel::NoTumor => "No Tumor",
            PredictionLabel::Other(label) => label,
        }
    }

    /// True for a positive finding.
    pub fn is_tumor(&self) -> bool {
        matches!(self, PredictionLabel::Tumor)
    }
}

impl From<String> for PredictionLabel {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(label) => label,
            Err(_) => PredictionLabel::Other(value),
        }
    }
}

impl From<PredictionLabel> for String {
    fn from(label: PredictionLabel) -> Self {
        label.as_str().to_string()
    }
}

impl fmt::Display for PredictionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PredictionResult {
    pub label: PredictionLabel,
    pub confidence: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PredictionHistoryItem {
    pub filename: String,
    pub prediction_label: PredictionLabel,
    pub confidence_score: f64,
    pub created_at: String,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub processing_time: Option<f64>,
    #[serde(default)]
    pub model_version: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HistoryResponse {
    pub predictions: Vec<PredictionHistoryItem>,
    #[serde(default)]
    pub total: Option<usize>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Statistics {
    pub total_predictions: u64,
    pub tumor_detected: u64,
    pub no_tumor_detected: u64,
    pub average_confidence: f64,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ValidationIssue {
    pub msg: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Validation(Vec<ValidationIssue>),
}

/// Body of a non-2xx response.
///
/// Covers `{detail: "..."}`, validation errors with a list of issues under
/// `detail`, and the rate limiter's `{error, message}`.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<ErrorDetail>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn message(&self) -> Option<String> {
        let detail = match &self.detail {
            Some(ErrorDetail::Message(msg)) if !msg.is_empty() => Some(msg.clone()),
            Some(ErrorDetail::Validation(issues)) if !issues.is_empty() => Some(
                issues
                    .iter()
                    .map(|issue| issue.msg.as_str())
                    .collect::<Vec<_>>()
                    .join("; "),
            ),
            _ => None,
        };

        detail
            .or_else(|| self.message.clone())
            .or_else(|| self.error.clone())
    }
}

/// Parses RFC 3339 timestamps, and naive ISO timestamps as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}
