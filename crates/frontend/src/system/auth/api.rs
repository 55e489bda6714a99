use contracts::shared::error::AppError;
use contracts::system::auth::{LoginRequest, LoginResponse, Session, LOGIN_API_PATH};

use crate::shared::api_utils::post_unauthenticated;

/// Exchange credentials for a session. Any failure is an [`AppError::Auth`].
pub async fn login(email: String, password: String) -> Result<Session, AppError> {
    let request = LoginRequest { email, password };
    let response: LoginResponse =
        post_unauthenticated(LOGIN_API_PATH, &request, AppError::Auth).await?;
    if let Some(message) = &response.message {
        log::debug!("login: {}", message);
    }
    Ok(Session::from(response))
}
