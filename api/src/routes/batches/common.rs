//! Batch request DTOs shared by the POST and PUT handlers.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateBatchRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub description: Option<String>,
    pub coordinator_id: Option<i64>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

/// Partial update: absent fields leave the stored value untouched.
#[derive(Debug, Deserialize)]
pub struct UpdateBatchRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub coordinator_id: Option<i64>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
}
