use shared::RegisterRequest;

use super::{FormStatus, StatusView};
use crate::error::ClientError;
use crate::services::Services;

pub const CREATING_ACCOUNT: &str = "Creating account...";
pub const ACCOUNT_CREATED: &str = "Account created! Please login.";
pub const REGISTRATION_FAILED: &str = "Registration failed";

pub trait RegisterView: StatusView {
    /// Empties the registration form.
    fn reset_fields(&self);
    /// Shows the login tab with `email` pre-filled.
    fn switch_to_login(&self, email: &str);
}

/// Creates an account. Never logs the user in: the session is not touched
/// on either outcome.
pub async fn submit_registration(
    services: &Services,
    view: &dyn RegisterView,
    account: RegisterRequest,
) -> Result<(), ClientError> {
    view.show_status(FormStatus::Pending(CREATING_ACCOUNT.to_string()));
    log::info!("Registering {}", account.email);

    if let Err(err) = services.api.register(&account).await {
        log::warn!("Registration failed: {}", err);
        view.show_status(FormStatus::Error(err.user_message(REGISTRATION_FAILED)));
        return Err(err);
    }

    view.show_status(FormStatus::Success(ACCOUNT_CREATED.to_string()));
    view.reset_fields();

    services
        .scheduler
        .sleep(services.config.register_switch_delay())
        .await;
    view.switch_to_login(&account.email);
    Ok(())
}
