use shared::LoginRequest;

use super::{FormStatus, StatusView};
use crate::error::ClientError;
use crate::navigator::Page;
use crate::services::Services;

pub const LOGGING_IN: &str = "Logging in...";
pub const LOGIN_SUCCEEDED: &str = "Login successful! Redirecting...";
pub const LOGIN_FAILED: &str = "Login failed";

/// Submits credentials and, on success, stores the token and moves to the
/// dashboard after a short pause.
///
/// A rejected login leaves any existing session untouched.
pub async fn submit_login(
    services: &Services,
    view: &dyn StatusView,
    credentials: LoginRequest,
) -> Result<(), ClientError> {
    view.show_status(FormStatus::Pending(LOGGING_IN.to_string()));
    log::info!("Logging in as {}", credentials.email);

    match services.api.login(&credentials).await {
        Ok(token) => {
            services.session.set(&token.access_token);
            log::info!("Login succeeded, session stored");
            view.show_status(FormStatus::Success(LOGIN_SUCCEEDED.to_string()));

            services
                .scheduler
                .sleep(services.config.login_redirect_delay())
                .await;
            services.navigator.navigate(Page::Dashboard);
            Ok(())
        }
        Err(err) => {
            log::warn!("Login failed: {}", err);
            view.show_status(FormStatus::Error(err.user_message(LOGIN_FAILED)));
            Err(err)
        }
    }
}
