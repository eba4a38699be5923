//! Test doubles for the flow modules.

use async_trait::async_trait;
use futures::future::LocalBoxFuture;
use shared::{
    LoginRequest, PredictionHistoryItem, PredictionLabel, PredictionResult, RegisterRequest,
    Statistics, TokenResponse, User,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::api::{ImageFile, PredictionApi};
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::flows::guard::DashboardView;
use crate::flows::history::{HistoryRender, HistoryView};
use crate::flows::register::RegisterView;
use crate::flows::statistics::{StatisticsRender, StatisticsView};
use crate::flows::upload::{UploadRender, UploadView};
use crate::flows::{FormStatus, StatusView};
use crate::navigator::{Navigator, Page};
use crate::scheduler::Scheduler;
use crate::services::Services;
use crate::session::SessionStore;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    Login(LoginRequest),
    Register(RegisterRequest),
    CurrentUser { token: String },
    Predict { token: String, file: String },
    History { token: String, limit: u32 },
    Statistics { token: String },
}

type Scripted<T> = RefCell<Option<Result<T, ClientError>>>;

/// Returns whatever was scripted for each endpoint, on every call.
/// Unscripted endpoints fail with a network error.
#[derive(Default)]
pub struct MockApi {
    pub login: Scripted<TokenResponse>,
    pub register: Scripted<()>,
    pub current_user: Scripted<User>,
    pub predict: Scripted<PredictionResult>,
    pub history: Scripted<Vec<PredictionHistoryItem>>,
    pub statistics: Scripted<Statistics>,
    calls: RefCell<Vec<ApiCall>>,
}

impl MockApi {
    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    fn record<T: Clone>(&self, call: ApiCall, scripted: &Scripted<T>) -> Result<T, ClientError> {
        self.calls.borrow_mut().push(call);
        scripted
            .borrow()
            .clone()
            .unwrap_or_else(|| Err(ClientError::Network("no response scripted".into())))
    }
}

#[async_trait(?Send)]
impl PredictionApi for MockApi {
    async fn login(&self, credentials: &LoginRequest) -> Result<TokenResponse, ClientError> {
        self.record(ApiCall::Login(credentials.clone()), &self.login)
    }

    async fn register(&self, account: &RegisterRequest) -> Result<(), ClientError> {
        self.record(ApiCall::Register(account.clone()), &self.register)
    }

    async fn current_user(&self, token: &str) -> Result<User, ClientError> {
        let call = ApiCall::CurrentUser { token: token.into() };
        self.record(call, &self.current_user)
    }

    async fn predict(
        &self,
        token: &str,
        image: &ImageFile,
    ) -> Result<PredictionResult, ClientError> {
        let call = ApiCall::Predict {
            token: token.into(),
            file: image.name.clone(),
        };
        self.record(call, &self.predict)
    }

    async fn history(
        &self,
        token: &str,
        limit: u32,
    ) -> Result<Vec<PredictionHistoryItem>, ClientError> {
        let call = ApiCall::History {
            token: token.into(),
            limit,
        };
        self.record(call, &self.history)
    }

    async fn statistics(&self, token: &str) -> Result<Statistics, ClientError> {
        let call = ApiCall::Statistics { token: token.into() };
        self.record(call, &self.statistics)
    }
}

/// Token held in memory for the lifetime of the store.
#[derive(Default)]
pub struct MemorySessionStore {
    token: RefCell<Option<String>>,
}

impl MemorySessionStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_string())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub visits: RefCell<Vec<Page>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, page: Page) {
        self.visits.borrow_mut().push(page);
    }
}

/// Sleeps return at once; spawned tasks wait for [`ManualScheduler::run_pending`].
#[derive(Default)]
pub struct ManualScheduler {
    pub sleeps: RefCell<Vec<Duration>>,
    pending: RefCell<Vec<LocalBoxFuture<'static, ()>>>,
}

impl ManualScheduler {
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    pub async fn run_pending(&self) {
        loop {
            let tasks: Vec<_> = self.pending.borrow_mut().drain(..).collect();
            if tasks.is_empty() {
                break;
            }
            for task in tasks {
                task.await;
            }
        }
    }
}

#[async_trait(?Send)]
impl Scheduler for ManualScheduler {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.borrow_mut().push(duration);
    }

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        self.pending.borrow_mut().push(task);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Status(FormStatus),
    ResetFields,
    SwitchToLogin(String),
    User(String),
    Preview(String),
    Upload(UploadRender),
    Notice(String),
    History(HistoryRender),
    Statistics(StatisticsRender),
}

/// Implements every view trait by appending to one event log.
#[derive(Default)]
pub struct RecordingView {
    events: RefCell<Vec<ViewEvent>>,
}

impl RecordingView {
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.borrow().clone()
    }

    pub fn last(&self) -> Option<ViewEvent> {
        self.events.borrow().last().cloned()
    }

    fn push(&self, event: ViewEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl StatusView for RecordingView {
    fn show_status(&self, status: FormStatus) {
        self.push(ViewEvent::Status(status));
    }
}

impl RegisterView for RecordingView {
    fn reset_fields(&self) {
        self.push(ViewEvent::ResetFields);
    }

    fn switch_to_login(&self, email: &str) {
        self.push(ViewEvent::SwitchToLogin(email.to_string()));
    }
}

impl DashboardView for RecordingView {
    fn show_user(&self, user: &User) {
        self.push(ViewEvent::User(user.email.clone()));
    }
}

impl UploadView for RecordingView {
    fn show_preview(&self, image: &ImageFile) {
        self.push(ViewEvent::Preview(image.name.clone()));
    }

    fn render_upload(&self, render: UploadRender) {
        self.push(ViewEvent::Upload(render));
    }

    fn notify(&self, message: &str) {
        self.push(ViewEvent::Notice(message.to_string()));
    }
}

impl HistoryView for RecordingView {
    fn render_history(&self, render: HistoryRender) {
        self.push(ViewEvent::History(render));
    }
}

impl StatisticsView for RecordingView {
    fn render_statistics(&self, render: StatisticsRender) {
        self.push(ViewEvent::Statistics(render));
    }
}

pub struct Harness {
    pub services: Services,
    pub api: Rc<MockApi>,
    pub session: Rc<MemorySessionStore>,
    pub navigator: Rc<RecordingNavigator>,
    pub scheduler: Rc<ManualScheduler>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_session(MemorySessionStore::default())
    }

    pub fn signed_in(token: &str) -> Self {
        Self::with_session(MemorySessionStore::with_token(token))
    }

    fn with_session(session: MemorySessionStore) -> Self {
        let api = Rc::new(MockApi::default());
        let session = Rc::new(session);
        let navigator = Rc::new(RecordingNavigator::default());
        let scheduler = Rc::new(ManualScheduler::default());
        let services = Services {
            config: Rc::new(ClientConfig::default()),
            session: session.clone() as Rc<dyn SessionStore>,
            api: api.clone() as Rc<dyn PredictionApi>,
            scheduler: scheduler.clone() as Rc<dyn Scheduler>,
            navigator: navigator.clone() as Rc<dyn Navigator>,
        };
        Self {
            services,
            api,
            session,
            navigator,
            scheduler,
        }
    }

    pub fn visits(&self) -> Vec<Page> {
        self.navigator.visits.borrow().clone()
    }
}

pub fn history_item(filename: &str, label: &str, confidence: f64) -> PredictionHistoryItem {
    PredictionHistoryItem {
        filename: filename.to_string(),
        prediction_label: PredictionLabel::from(label.to_string()),
        confidence_score: confidence,
        created_at: "2024-05-01T10:20:30+00:00".to_string(),
        id: None,
        file_size: None,
        processing_time: None,
        model_version: None,
    }
}

pub fn image(name: &str) -> ImageFile {
    ImageFile {
        name: name.to_string(),
        mime_type: "image/png".to_string(),
        bytes: vec![0x89, b'P', b'N', b'G'],
    }
}
