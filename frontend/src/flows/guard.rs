//! Session checks at page entry, logout, and the shared "session is gone"
//! path used whenever the server rejects the token.

use shared::User;

use super::history::{HistoryView, load_history};
use super::statistics::{StatisticsView, load_statistics};
use super::upload::UploadFlow;
use crate::navigator::Page;
use crate::services::Services;

pub trait DashboardView {
    fn show_user(&self, user: &User);
}

#[derive(Debug, Clone, PartialEq)]
pub enum GuardOutcome {
    /// The visitor was sent to the auth page; nothing else ran.
    Redirected,
    Authorized(User),
}

/// Clears the token and sends the visitor to the auth page.
pub fn expire_session(services: &Services) {
    log::warn!("Session rejected, clearing token");
    services.session.clear();
    services.navigator.navigate(Page::Auth);
}

pub fn logout(services: &Services) {
    log::info!("Logging out");
    services.session.clear();
    services.navigator.navigate(Page::Auth);
}

/// Auth page entry: a visitor who already holds a token goes straight to
/// the dashboard. Returns true when a redirect happened.
pub fn redirect_if_authenticated(services: &Services) -> bool {
    if services.session.is_active() {
        log::info!("Session present on auth page, redirecting to dashboard");
        services.navigator.navigate(Page::Dashboard);
        true
    } else {
        false
    }
}

/// Verifies the stored token against `/api/auth/me`.
pub async fn check_session(services: &Services, view: &dyn DashboardView) -> GuardOutcome {
    let Some(token) = services.token() else {
        log::info!("No session, redirecting to auth page");
        services.navigator.navigate(Page::Auth);
        return GuardOutcome::Redirected;
    };

    match services.api.current_user(&token).await {
        Ok(user) => {
            log::info!("Dashboard entered as {}", user.email);
            view.show_user(&user);
            GuardOutcome::Authorized(user)
        }
        Err(err) => {
            log::error!("Auth error: {}", err);
            expire_session(services);
            GuardOutcome::Redirected
        }
    }
}

/// Dashboard entry: guard first, then the upload flow starts and both
/// loaders run side by side.
pub async fn enter_dashboard(
    services: &Services,
    view: &dyn DashboardView,
    upload: &UploadFlow,
    history: &dyn HistoryView,
    statistics: &dyn StatisticsView,
) -> GuardOutcome {
    let outcome = check_session(services, view).await;
    if let GuardOutcome::Authorized(_) = outcome {
        upload.start();
        futures::join!(
            load_history(services, history),
            load_statistics(services, statistics)
        );
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::flows::history::HistoryRender;
    use crate::flows::statistics::StatisticsRender;
    use crate::flows::upload::UploadPhase;
    use crate::session::SessionStore;
    use crate::testing::{ApiCall, Harness, RecordingView, ViewEvent, image};
    use shared::{PredictionLabel, PredictionResult, Statistics};
    use std::rc::Rc;

    fn user(email: &str) -> User {
        User {
            email: email.into(),
            id: Some(1),
            username: Some("someone".into()),
            is_active: Some(true),
            created_at: None,
        }
    }

    fn upload_flow(harness: &Harness, view: &Rc<RecordingView>) -> UploadFlow {
        UploadFlow::new(harness.services.clone(), view.clone(), view.clone())
    }

    #[tokio::test]
    async fn no_token_redirects_once_without_requests() {
        let harness = Harness::new();
        let view = Rc::new(RecordingView::default());
        let upload = upload_flow(&harness, &view);

        let outcome =
            enter_dashboard(&harness.services, &*view, &upload, &*view, &*view).await;

        assert_eq!(outcome, GuardOutcome::Redirected);
        assert_eq!(harness.visits(), vec![Page::Auth]);
        assert!(harness.api.calls().is_empty());
        assert!(view.events().is_empty());
    }

    #[tokio::test]
    async fn rejected_token_is_cleared_and_redirects_once() {
        let harness = Harness::signed_in("stale");
        *harness.api.current_user.borrow_mut() =
            Some(Err(ClientError::Unauthorized { detail: None }));
        let view = Rc::new(RecordingView::default());
        let upload = upload_flow(&harness, &view);

        let outcome =
            enter_dashboard(&harness.services, &*view, &upload, &*view, &*view).await;

        assert_eq!(outcome, GuardOutcome::Redirected);
        assert_eq!(harness.session.get(), None);
        assert_eq!(harness.visits(), vec![Page::Auth]);
        assert_eq!(
            harness.api.calls(),
            vec![ApiCall::CurrentUser { token: "stale".into() }]
        );
    }

    #[tokio::test]
    async fn network_failure_also_invalidates_session() {
        let harness = Harness::signed_in("T");
        let view = RecordingView::default();

        let outcome = check_session(&harness.services, &view).await;

        assert_eq!(outcome, GuardOutcome::Redirected);
        assert_eq!(harness.session.get(), None);
    }

    #[tokio::test]
    async fn valid_session_shows_user_and_starts_loaders() {
        let harness = Harness::signed_in("T");
        *harness.api.current_user.borrow_mut() = Some(Ok(user("a@b.com")));
        *harness.api.history.borrow_mut() = Some(Ok(vec![]));
        *harness.api.statistics.borrow_mut() = Some(Ok(Statistics {
            total_predictions: 0,
            tumor_detected: 0,
            no_tumor_detected: 0,
            average_confidence: 0.0,
        }));
        let view = Rc::new(RecordingView::default());
        let upload = upload_flow(&harness, &view);

        let outcome =
            enter_dashboard(&harness.services, &*view, &upload, &*view, &*view).await;

        assert_eq!(outcome, GuardOutcome::Authorized(user("a@b.com")));
        assert!(harness.visits().is_empty());
        assert_eq!(upload.phase(), UploadPhase::Idle);

        let events = view.events();
        assert_eq!(events[0], ViewEvent::User("a@b.com".into()));
        assert!(events.contains(&ViewEvent::History(HistoryRender::Empty)));
        assert!(events.iter().any(|e| matches!(
            e,
            ViewEvent::Statistics(StatisticsRender::Loaded(_))
        )));

        let calls = harness.api.calls();
        assert_eq!(calls[0], ApiCall::CurrentUser { token: "T".into() });
        assert_eq!(calls.len(), 3);
    }

    #[tokio::test]
    async fn file_picked_before_session_check_survives_entry() {
        let harness = Harness::signed_in("T");
        *harness.api.current_user.borrow_mut() = Some(Ok(user("a@b.com")));
        *harness.api.predict.borrow_mut() = Some(Ok(PredictionResult {
            label: PredictionLabel::Tumor,
            confidence: 0.9,
        }));
        let view = Rc::new(RecordingView::default());
        let upload = upload_flow(&harness, &view);
        upload.select(Some(image("scan.png")));

        enter_dashboard(&harness.services, &*view, &upload, &*view, &*view).await;

        assert_eq!(upload.phase(), UploadPhase::Selected);
        assert!(upload.trigger().await.is_ok());
        assert!(harness.api.calls().contains(&ApiCall::Predict {
            token: "T".into(),
            file: "scan.png".into()
        }));
    }

    #[test]
    fn auth_page_bounces_signed_in_visitors() {
        let harness = Harness::signed_in("T");
        assert!(redirect_if_authenticated(&harness.services));
        assert_eq!(harness.visits(), vec![Page::Dashboard]);

        let harness = Harness::new();
        assert!(!redirect_if_authenticated(&harness.services));
        assert!(harness.visits().is_empty());
    }

    #[test]
    fn logout_clears_and_redirects() {
        let harness = Harness::signed_in("T");
        logout(&harness.services);
        assert_eq!(harness.session.get(), None);
        assert_eq!(harness.visits(), vec![Page::Auth]);
    }
}
