use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::QueryOrder;
use serde::{Deserialize, Serialize};

/// One scheduled teaching session: teacher, class (batch), subject, day and
/// time range. Day and times are plain strings ("Monday", "10:00") and order
/// lexicographically.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "timetable_slots")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub teacher_id: i64,
    pub class_id: i64,
    pub subject_id: i64,

    pub day: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teacher::Entity",
        from = "Column::TeacherId",
        to = "super::teacher::Column::Id",
        on_delete = "Cascade"
    )]
    Teacher,

    #[sea_orm(
        belongs_to = "super::batch::Entity",
        from = "Column::ClassId",
        to = "super::batch::Column::Id",
        on_delete = "Cascade"
    )]
    Batch,

    #[sea_orm(
        belongs_to = "super::subject::Entity",
        from = "Column::SubjectId",
        to = "super::subject::Column::Id",
        on_delete = "Cascade"
    )]
    Subject,
}

impl Related<super::teacher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::batch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Batch.def()
    }
}

impl Related<super::subject::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        teacher_id: i64,
        class_id: i64,
        subject_id: i64,
        day: &str,
        start_time: &str,
        end_time: &str,
    ) -> Result<Model, DbErr> {
        let slot = ActiveModel {
            teacher_id: Set(teacher_id),
            class_id: Set(class_id),
            subject_id: Set(subject_id),
            day: Set(day.to_owned()),
            start_time: Set(start_time.to_owned()),
            end_time: Set(end_time.to_owned()),
            ..Default::default()
        };

        slot.insert(db).await
    }

    pub async fn find_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// Whether the class already holds a slot at (day, start_time). The
    /// teacher and the rest of the time range are deliberately not part of
    /// the admission check.
    pub async fn conflict_exists(
        db: &DbConn,
        class_id: i64,
        day: &str,
        start_time: &str,
    ) -> Result<bool, DbErr> {
        let row = Entity::find()
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::Day.eq(day))
            .filter(Column::StartTime.eq(start_time))
            .one(db)
            .await?;
        Ok(row.is_some())
    }

    /// Slots taught by a teacher, optionally filtered by day, ordered by
    /// (day, start_time) ascending.
    pub async fn for_teacher(
        db: &DbConn,
        teacher_id: i64,
        day: Option<&str>,
    ) -> Result<Vec<Model>, DbErr> {
        let mut query = Entity::find().filter(Column::TeacherId.eq(teacher_id));
        if let Some(day) = day {
            query = query.filter(Column::Day.eq(day));
        }
        query
            .order_by_asc(Column::Day)
            .order_by_asc(Column::StartTime)
            .all(db)
            .await
    }

    /// Slots scheduled for a class, optionally filtered by day, ordered by
    /// (day, start_time) ascending.
    pub async fn for_class(
        db: &DbConn,
        class_id: i64,
        day: Option<&str>,
    ) -> Result<Vec<Model>, DbErr> {
        let mut query = Entity::find().filter(Column::ClassId.eq(class_id));
        if let Some(day) = day {
            query = query.filter(Column::Day.eq(day));
        }
        query
            .order_by_asc(Column::Day)
            .order_by_asc(Column::StartTime)
            .all(db)
            .await
    }

    pub async fn delete(db: &DbConn, id: i64) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}
