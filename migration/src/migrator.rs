use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202606010001_create_users::Migration),
            Box::new(migrations::m202606010002_create_batches::Migration),
            Box::new(migrations::m202606010003_create_teachers::Migration),
            Box::new(migrations::m202606010004_create_students::Migration),
            Box::new(migrations::m202606010005_create_subjects::Migration),
            Box::new(migrations::m202606010006_create_enrollments::Migration),
            Box::new(migrations::m202606010007_create_batch_teachers::Migration),
            Box::new(migrations::m202606010008_create_timetable_slots::Migration),
            Box::new(migrations::m202606010009_create_contents::Migration),
            Box::new(migrations::m202606010010_create_comments::Migration),
            Box::new(migrations::m202606010011_create_notifications::Migration),
        ]
    }
}
