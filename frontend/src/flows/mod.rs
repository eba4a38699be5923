//! Session, auth and prediction flows.
//!
//! Each flow talks to the outside world through [`Services`](crate::services::Services)
//! and reports to the page through a small view trait, so none of them
//! touch the DOM.

pub mod format;
pub mod guard;
pub mod history;
pub mod login;
pub mod register;
pub mod statistics;
pub mod tabs;
pub mod upload;

/// Status line under an auth form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormStatus {
    Pending(String),
    Success(String),
    Error(String),
}

impl FormStatus {
    pub fn message(&self) -> &str {
        match self {
            FormStatus::Pending(msg) | FormStatus::Success(msg) | FormStatus::Error(msg) => msg,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            FormStatus::Pending(_) => "loading",
            FormStatus::Success(_) => "success",
            FormStatus::Error(_) => "error",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, FormStatus::Pending(_))
    }
}

pub trait StatusView {
    fn show_status(&self, status: FormStatus);
}
