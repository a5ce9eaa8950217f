//! Content and comment request DTOs.

use db::models::content::ContentType;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct UploadContentRequest {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub description: Option<String>,
    #[validate(length(min = 1, message = "storage_url is required"))]
    pub storage_url: String,
    pub content_type: Option<ContentType>,
    pub batch_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ContentListQuery {
    pub batch_id: Option<i64>,
    pub only_public: Option<bool>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, message = "text is required"))]
    pub text: String,
}
