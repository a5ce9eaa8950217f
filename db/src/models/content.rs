use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::QueryOrder;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Uploaded learning material. When `batch_id` is set the content is scoped
/// to that batch and only visible to enrolled students, the uploader, or an
/// admin.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "contents")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub title: String,
    pub description: String,
    pub storage_url: String,
    pub content_type: ContentType,

    pub uploader_id: i64,
    pub batch_id: Option<i64>,
    pub is_public: bool,

    pub created_at: DateTime<Utc>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Deserialize, Serialize,
)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ContentType {
    #[sea_orm(string_value = "video")]
    Video,

    #[sea_orm(string_value = "document")]
    Document,

    #[sea_orm(string_value = "audio")]
    Audio,

    #[sea_orm(string_value = "other")]
    Other,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UploaderId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Uploader,

    #[sea_orm(
        belongs_to = "super::batch::Entity",
        from = "Column::BatchId",
        to = "super::batch::Column::Id",
        on_delete = "Cascade"
    )]
    Batch,

    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Uploader.def()
    }
}

impl Related<super::batch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Batch.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        db: &DbConn,
        title: &str,
        description: &str,
        storage_url: &str,
        content_type: ContentType,
        uploader_id: i64,
        batch_id: Option<i64>,
    ) -> Result<Model, DbErr> {
        let content = ActiveModel {
            title: Set(title.to_owned()),
            description: Set(description.to_owned()),
            storage_url: Set(storage_url.to_owned()),
            content_type: Set(content_type),
            uploader_id: Set(uploader_id),
            batch_id: Set(batch_id),
            is_public: Set(true),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        content.insert(db).await
    }

    pub async fn find_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// Lists contents newest first, optionally restricted to one batch and/or
    /// to public rows only.
    pub async fn list(
        db: &DbConn,
        batch_id: Option<i64>,
        only_public: bool,
    ) -> Result<Vec<Model>, DbErr> {
        let mut query = Entity::find();
        if let Some(batch_id) = batch_id {
            query = query.filter(Column::BatchId.eq(batch_id));
        }
        if only_public {
            query = query.filter(Column::IsPublic.eq(true));
        }
        query.order_by_desc(Column::CreatedAt).all(db).await
    }
}
