//! Image upload and prediction.
//!
//! ```text
//! Idle --select--> Selected --trigger--> Uploading --> Displayed
//!                                                  \-> Failed
//! ```
//!
//! Every trigger starts a fresh cycle from the current selection.

use shared::PredictionResult;
use std::cell::RefCell;
use std::rc::Rc;

use super::format::{percent, result_class};
use super::guard::expire_session;
use super::history::{HistoryView, load_history};
use crate::api::ImageFile;
use crate::error::ClientError;
use crate::services::Services;

pub const NO_FILE_SELECTED: &str = "Please select an image first.";
pub const SESSION_EXPIRED: &str = "Session expired. Please login again.";
pub const ANALYZING: &str = "Analyzing image...";

#[derive(Debug, Clone, PartialEq)]
pub enum UploadPhase {
    Idle,
    Selected,
    Uploading,
    Displayed(PredictionResult),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionDisplay {
    pub label: String,
    pub class: &'static str,
    pub confidence: String,
}

impl From<&PredictionResult> for PredictionDisplay {
    fn from(result: &PredictionResult) -> Self {
        Self {
            label: result.label.to_string(),
            class: result_class(&result.label),
            confidence: percent(result.confidence, 2),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UploadRender {
    Analyzing,
    Result(PredictionDisplay),
    Error(String),
}

pub trait UploadView {
    fn show_preview(&self, image: &ImageFile);
    fn render_upload(&self, render: UploadRender);
    /// Blocking notice, e.g. `window.alert`.
    fn notify(&self, message: &str);
}

pub struct UploadFlow {
    services: Services,
    view: Rc<dyn UploadView>,
    history: Rc<dyn HistoryView>,
    selection: RefCell<Option<ImageFile>>,
    phase: RefCell<UploadPhase>,
}

impl UploadFlow {
    pub fn new(
        services: Services,
        view: Rc<dyn UploadView>,
        history: Rc<dyn HistoryView>,
    ) -> Self {
        Self {
            services,
            view,
            history,
            selection: RefCell::new(None),
            phase: RefCell::new(UploadPhase::Idle),
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> UploadPhase {
        self.phase.borrow().clone()
    }

    /// Dashboard entry. A file picked while the session check was still
    /// running stays selected; otherwise the flow goes idle.
    pub fn start(&self) {
        if self.selection.borrow().is_none() {
            self.set_phase(UploadPhase::Idle);
        }
    }

    /// A file was chosen (or the choice was cleared). No network effect.
    pub fn select(&self, image: Option<ImageFile>) {
        let phase = if image.is_some() {
            UploadPhase::Selected
        } else {
            UploadPhase::Idle
        };
        *self.selection.borrow_mut() = image;
        self.set_phase(phase);
    }

    /// Uploads the selected image and renders the outcome.
    ///
    /// Without a selection this only shows a notice and leaves the phase
    /// unchanged.
    pub async fn trigger(&self) -> Result<PredictionResult, ClientError> {
        let Some(image) = self.selection.borrow().clone() else {
            self.view.notify(NO_FILE_SELECTED);
            return Err(ClientError::NoFileSelected);
        };

        self.set_phase(UploadPhase::Uploading);
        self.view.show_preview(&image);
        self.view.render_upload(UploadRender::Analyzing);

        let result = match self.services.token() {
            Some(token) => self.services.api.predict(&token, &image).await,
            None => Err(ClientError::MissingSession),
        };

        match result {
            Ok(prediction) => {
                log::info!(
                    "Prediction for {}: {} ({:.4})",
                    image.name,
                    prediction.label,
                    prediction.confidence
                );
                self.view
                    .render_upload(UploadRender::Result(PredictionDisplay::from(&prediction)));
                self.set_phase(UploadPhase::Displayed(prediction.clone()));
                self.schedule_history_refresh();
                Ok(prediction)
            }
            Err(err) if err.is_session_error() => {
                self.set_phase(UploadPhase::Failed(SESSION_EXPIRED.to_string()));
                self.view.notify(SESSION_EXPIRED);
                expire_session(&self.services);
                Err(err)
            }
            Err(err) => {
                log::error!("Prediction failed: {}", err);
                let message = failure_message(&err);
                self.view.render_upload(UploadRender::Error(message.clone()));
                self.set_phase(UploadPhase::Failed(message));
                Err(err)
            }
        }
    }

    fn set_phase(&self, phase: UploadPhase) {
        log::debug!("Upload phase -> {:?}", phase);
        *self.phase.borrow_mut() = phase;
    }

    fn schedule_history_refresh(&self) {
        let services = self.services.clone();
        let history = self.history.clone();
        let delay = services.config.history_refresh_delay();
        self.services.scheduler.spawn(Box::pin(async move {
            services.scheduler.sleep(delay).await;
            load_history(&services, history.as_ref()).await;
        }));
    }
}

fn failure_message(err: &ClientError) -> String {
    let fallback = match err {
        ClientError::Server { status, .. } => format!("Server error: {}", status),
        _ => "Prediction failed".to_string(),
    };
    err.user_message(&fallback)
}
