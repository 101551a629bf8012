//! Client wrapper for the login endpoint. Credentials are never logged.

use crate::{
    app_lib::{AppError, post_json},
    features::auth::types::LoginRequest,
};
use tracing::debug;

/// Submits credentials. Any 2xx answer counts as a successful login.
pub async fn login(request: &LoginRequest) -> Result<(), AppError> {
    let status = post_json("/auth/login", request).await?;
    debug!(status, "login accepted");
    Ok(())
}
