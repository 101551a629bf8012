//! Client helper for `POST /contacts`. Only HTTP 200 counts as delivered; the
//! caller reports everything else as a failure and does not retry.

use crate::app_lib::{AppError, post_json};
use portfolio_core::contact::ContactMessage;
use tracing::{debug, warn};

const SENT_STATUS: u16 = 200;

pub async fn send_message(message: &ContactMessage) -> Result<(), AppError> {
    let status = post_json("/contacts", message).await?;
    if status == SENT_STATUS {
        debug!("contact message delivered");
        Ok(())
    } else {
        warn!(status, "contact endpoint answered without 200");
        Err(AppError::Http {
            status,
            message: "Unexpected response.".to_string(),
        })
    }
}
