//! Timetable slot request DTOs and the shared ownership check.

use crate::auth::Claims;
use db::models::teacher::Model as TeacherModel;
use db::models::timetable_slot::Model as SlotModel;
use sea_orm::{DatabaseConnection, DbErr};
use serde::Deserialize;
use validator::Validate;

/// A slot may be mutated by an admin or by the linked user of the slot's
/// teacher.
pub async fn slot_mutation_allowed(
    db: &DatabaseConnection,
    slot: &SlotModel,
    claims: &Claims,
) -> Result<bool, DbErr> {
    if claims.admin {
        return Ok(true);
    }
    let owner = TeacherModel::find_by_id(db, slot.teacher_id).await?;
    Ok(owner.is_some_and(|t| t.user_id == claims.sub))
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateSlotRequest {
    pub class_id: i64,
    pub subject_id: i64,
    #[validate(length(min = 1, message = "day is required"))]
    pub day: String,
    #[validate(length(min = 1, message = "start_time is required"))]
    pub start_time: String,
    #[validate(length(min = 1, message = "end_time is required"))]
    pub end_time: String,
}

/// Partial update: absent fields leave the stored value untouched.
#[derive(Debug, Deserialize)]
pub struct UpdateSlotRequest {
    pub class_id: Option<i64>,
    pub subject_id: Option<i64>,
    pub day: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DayFilter {
    pub day: Option<String>,
}
