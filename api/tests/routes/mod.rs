mod allotment_test;
mod batches_test;
mod notifications_test;
mod timetable_test;
