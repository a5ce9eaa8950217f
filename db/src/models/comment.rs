use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::QueryOrder;
use serde::{Deserialize, Serialize};

/// A comment on a content item. Deletable by its author or an admin; only
/// public comments are listed.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub content_id: i64,
    pub author_id: i64,

    pub text: String,
    pub is_public: bool,

    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::content::Entity",
        from = "Column::ContentId",
        to = "super::content::Column::Id",
        on_delete = "Cascade"
    )]
    Content,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Author,
}

impl Related<super::content::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Content.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        content_id: i64,
        author_id: i64,
        text: &str,
    ) -> Result<Model, DbErr> {
        let comment = ActiveModel {
            content_id: Set(content_id),
            author_id: Set(author_id),
            text: Set(text.to_owned()),
            is_public: Set(true),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        comment.insert(db).await
    }

    pub async fn find_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// Public comments of a content item, oldest first.
    pub async fn public_for_content(db: &DbConn, content_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::ContentId.eq(content_id))
            .filter(Column::IsPublic.eq(true))
            .order_by_asc(Column::CreatedAt)
            .all(db)
            .await
    }

    pub async fn delete(db: &DbConn, id: i64) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}
