pub mod batch;
pub mod batch_teacher;
pub mod comment;
pub mod content;
pub mod enrollment;
pub mod notification;
pub mod student;
pub mod subject;
pub mod teacher;
pub mod timetable_slot;
pub mod user;

pub use batch::Entity as Batch;
pub use batch_teacher::Entity as BatchTeacher;
pub use comment::Entity as Comment;
pub use content::Entity as Content;
pub use enrollment::Entity as Enrollment;
pub use notification::Entity as Notification;
pub use student::Entity as Student;
pub use subject::Entity as Subject;
pub use teacher::Entity as Teacher;
pub use timetable_slot::Entity as TimetableSlot;
pub use user::Entity as User;
