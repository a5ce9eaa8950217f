use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, QuerySelect, TransactionTrait};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CHANNEL: &str = "in-app";

/// One delivered notification row. Batch sends create one row per active
/// enrollment of the target batch.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub recipient_id: i64,

    pub title: String,
    pub message: String,
    pub channel: String,
    pub is_read: bool,

    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::RecipientId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Recipient,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Recipient.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        recipient_id: i64,
        title: &str,
        message: &str,
        channel: &str,
    ) -> Result<Model, DbErr> {
        let notification = ActiveModel {
            recipient_id: Set(recipient_id),
            title: Set(title.to_owned()),
            message: Set(message.to_owned()),
            channel: Set(channel.to_owned()),
            is_read: Set(false),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        notification.insert(db).await
    }

    /// Sends the same notification to every active enrollment of a batch.
    ///
    /// All rows are inserted within one transaction: either the whole batch
    /// lands or none of it does. An empty target set yields an empty vec.
    pub async fn fan_out(
        db: &DbConn,
        batch_id: i64,
        title: &str,
        message: &str,
        channel: &str,
    ) -> Result<Vec<Model>, DbErr> {
        let recipients = super::enrollment::Model::active_for_batch(db, batch_id).await?;
        if recipients.is_empty() {
            return Ok(Vec::new());
        }

        let txn = db.begin().await?;
        let now = Utc::now();
        let mut created = Vec::with_capacity(recipients.len());
        for enrollment in recipients {
            let notification = ActiveModel {
                recipient_id: Set(enrollment.student_id),
                title: Set(title.to_owned()),
                message: Set(message.to_owned()),
                channel: Set(channel.to_owned()),
                is_read: Set(false),
                created_at: Set(now),
                ..Default::default()
            };
            created.push(notification.insert(&txn).await?);
        }
        txn.commit().await?;

        Ok(created)
    }

    pub async fn find_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// Most recent notifications for a recipient, newest first.
    pub async fn for_recipient(
        db: &DbConn,
        recipient_id: i64,
        limit: u64,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::RecipientId.eq(recipient_id))
            .order_by_desc(Column::CreatedAt)
            // Tie-break on id so rows created within the same second keep a
            // stable newest-first order.
            .order_by_desc(Column::Id)
            .limit(limit)
            .all(db)
            .await
    }

    pub async fn delete(db: &DbConn, id: i64) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}
