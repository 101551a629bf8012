//! Remote project source backed by `GET /projects`.

use crate::app_lib::{AppError, get_json};
use async_trait::async_trait;
use portfolio_core::loader::ProjectSource;
use serde_json::Value;

#[derive(Clone, Copy, Debug, Default)]
pub struct ApiProjectSource;

#[async_trait(?Send)]
impl ProjectSource for ApiProjectSource {
    type Error = AppError;

    async fn fetch_projects(&self) -> Result<Value, AppError> {
        get_json::<Value>("/projects").await
    }
}
