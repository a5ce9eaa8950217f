pub mod m202606010001_create_users;
pub mod m202606010002_create_batches;
pub mod m202606010003_create_teachers;
pub mod m202606010004_create_students;
pub mod m202606010005_create_subjects;
pub mod m202606010006_create_enrollments;
pub mod m202606010007_create_batch_teachers;
pub mod m202606010008_create_timetable_slots;
pub mod m202606010009_create_contents;
pub mod m202606010010_create_comments;
pub mod m202606010011_create_notifications;
