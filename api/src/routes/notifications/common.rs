//! Notification request DTOs.

use serde::Deserialize;
use validator::Validate;

/// Exactly one of `recipient_id` / `batch_id` is honored; when both are set
/// the direct recipient wins.
#[derive(Debug, Deserialize, Validate)]
pub struct SendNotificationRequest {
    pub recipient_id: Option<i64>,
    pub batch_id: Option<i64>,
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "message is required"))]
    pub message: String,
    pub channel: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<u64>,
}

impl LimitQuery {
    pub fn limit_or_default(&self) -> u64 {
        self.limit.unwrap_or(100)
    }
}
