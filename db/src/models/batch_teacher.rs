use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Allotment of a teacher to a batch. At most one row may exist per
/// (batch, teacher) pair; a unique index backs the application check.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "batch_teachers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub batch_id: i64,
    pub teacher_id: i64,
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
        belongs_to = "super::teacher::Entity",
        from = "Column::TeacherId",
        to = "super::teacher::Column::Id",
        on_delete = "Cascade"
    )]
    Teacher,
}

impl Related<super::batch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Batch.def()
    }
}

impl Related<super::teacher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn allot(db: &DbConn, batch_id: i64, teacher_id: i64) -> Result<Model, DbErr> {
        let row = ActiveModel {
            batch_id: Set(batch_id),
            teacher_id: Set(teacher_id),
            ..Default::default()
        };

        row.insert(db).await
    }

    pub async fn exists(db: &DbConn, batch_id: i64, teacher_id: i64) -> Result<bool, DbErr> {
        let row = Entity::find()
            .filter(Column::BatchId.eq(batch_id))
            .filter(Column::TeacherId.eq(teacher_id))
            .one(db)
            .await?;
        Ok(row.is_some())
    }
}
