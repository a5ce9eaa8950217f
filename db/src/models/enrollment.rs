use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Membership of a student in a batch. An active enrollment row is the sole
/// gate for batch-scoped content and notification fan-out.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "enrollments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub batch_id: i64,
    /// References `users.id` directly: fan-out recipients and content
    /// visibility checks both compare against the caller's user id.
    pub student_id: i64,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::batch::Entity",
        from = "Column::BatchId",
        to = "super::batch::Column::Id",
        on_delete = "Cascade"
    )]
    Batch,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::StudentId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Student,
}

impl Related<super::batch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Batch.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        batch_id: i64,
        student_id: i64,
        is_active: bool,
    ) -> Result<Model, DbErr> {
        let enrollment = ActiveModel {
            batch_id: Set(batch_id),
            student_id: Set(student_id),
            is_active: Set(is_active),
            ..Default::default()
        };

        enrollment.insert(db).await
    }

    /// All active enrollments of a batch, i.e. the fan-out target set.
    pub async fn active_for_batch(db: &DbConn, batch_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::BatchId.eq(batch_id))
            .filter(Column::IsActive.eq(true))
            .all(db)
            .await
    }

    /// Whether a user has an active enrollment in the given batch.
    pub async fn is_enrolled(db: &DbConn, user_id: i64, batch_id: i64) -> Result<bool, DbErr> {
        let row = Entity::find()
            .filter(Column::BatchId.eq(batch_id))
            .filter(Column::StudentId.eq(user_id))
            .filter(Column::IsActive.eq(true))
            .one(db)
            .await?;
        Ok(row.is_some())
    }
}
