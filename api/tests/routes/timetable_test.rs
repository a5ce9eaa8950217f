use axum::http::{Method, StatusCode};
use db::models::batch::Model as BatchModel;
use db::models::student::Model as StudentModel;
use db::models::subject::Model as SubjectModel;
use db::models::teacher::Model as TeacherModel;
use db::models::timetable_slot::Model as SlotModel;
use db::models::user::{Model as UserModel, Role};
use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::helpers::{body_json, make_test_app, make_user, request, token_for};

async fn seed_teacher(db: &DatabaseConnection, name: &str) -> (UserModel, i64) {
    let user = make_user(db, name, Role::Teacher, false).await;
    let teacher = TeacherModel::create(db, user.id).await.unwrap();
    (user, teacher.id)
}

#[tokio::test]
async fn create_slot_and_reject_class_double_booking() {
    let t = make_test_app().await;
    let (_, teacher_id) = seed_teacher(&t.db, "t1").await;
    let (_, other_teacher_id) = seed_teacher(&t.db, "t2").await;
    let batch = BatchModel::create(&t.db, "Batch A", None, None, None, None)
        .await
        .unwrap();
    let subject = SubjectModel::create(&t.db, "Algebra").await.unwrap();

    let payload = json!({
        "class_id": batch.id,
        "subject_id": subject.id,
        "day": "Monday",
        "start_time": "10:00",
        "end_time": "11:00",
    });

    let res = request(
        &t.app,
        Method::POST,
        &format!("/timetable/teachers/{teacher_id}"),
        None,
        Some(payload.clone()),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res).await;
    assert_eq!(body["data"]["day"], "Monday");

    // The class is booked at (Monday, 10:00) no matter who teaches.
    let res = request(
        &t.app,
        Method::POST,
        &format!("/timetable/teachers/{other_teacher_id}"),
        None,
        Some(payload),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body = body_json(res).await;
    assert_eq!(body["message"], "Slot already exists for this class at this time");
}

#[tokio::test]
async fn create_slot_rejects_unknown_references_and_bad_input() {
    let t = make_test_app().await;
    let (_, teacher_id) = seed_teacher(&t.db, "t1").await;
    let batch = BatchModel::create(&t.db, "Batch A", None, None, None, None)
        .await
        .unwrap();
    let subject = SubjectModel::create(&t.db, "Algebra").await.unwrap();

    let res = request(
        &t.app,
        Method::POST,
        "/timetable/teachers/9999",
        None,
        Some(json!({
            "class_id": batch.id, "subject_id": subject.id,
            "day": "Monday", "start_time": "10:00", "end_time": "11:00",
        })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(res).await["message"], "Teacher not found");

    let res = request(
        &t.app,
        Method::POST,
        &format!("/timetable/teachers/{teacher_id}"),
        None,
        Some(json!({
            "class_id": batch.id, "subject_id": 9999,
            "day": "Monday", "start_time": "10:00", "end_time": "11:00",
        })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(res).await["message"], "Subject not found");

    let res = request(
        &t.app,
        Method::POST,
        &format!("/timetable/teachers/{teacher_id}"),
        None,
        Some(json!({
            "class_id": batch.id, "subject_id": subject.id,
            "day": "", "start_time": "10:00", "end_time": "11:00",
        })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn slot_mutation_is_owner_or_admin() {
    let t = make_test_app().await;
    let (owner_user, teacher_id) = seed_teacher(&t.db, "owner").await;
    let outsider = make_user(&t.db, "other", Role::Student, false).await;
    let admin = make_user(&t.db, "adm", Role::Admin, true).await;
    let batch = BatchModel::create(&t.db, "Batch A", None, None, None, None)
        .await
        .unwrap();
    let subject = SubjectModel::create(&t.db, "Algebra").await.unwrap();
    let slot = SlotModel::create(&t.db, teacher_id, batch.id, subject.id, "Monday", "10:00", "11:00")
        .await
        .unwrap();

    let res = request(
        &t.app,
        Method::PUT,
        &format!("/timetable/{}", slot.id),
        None,
        Some(json!({"end_time": "12:00"})),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = request(
        &t.app,
        Method::PUT,
        &format!("/timetable/{}", slot.id),
        Some(&token_for(&outsider)),
        Some(json!({"end_time": "12:00"})),
    )
    .await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(res).await["message"], "Not allowed");

    let res = request(
        &t.app,
        Method::PUT,
        &format!("/timetable/{}", slot.id),
        Some(&token_for(&owner_user)),
        Some(json!({"end_time": "12:00"})),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res).await;
    assert_eq!(body["data"]["end_time"], "12:00");
    // Untouched fields keep their stored values.
    assert_eq!(body["data"]["start_time"], "10:00");

    let res = request(
        &t.app,
        Method::DELETE,
        &format!("/timetable/{}", slot.id),
        Some(&token_for(&outsider)),
        None,
    )
    .await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = request(
        &t.app,
        Method::DELETE,
        &format!("/timetable/{}", slot.id),
        Some(&token_for(&admin)),
        None,
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(SlotModel::find_by_id(&t.db, slot.id).await.unwrap().is_none());
}

#[tokio::test]
async fn slot_update_may_not_land_on_an_occupied_key() {
    let t = make_test_app().await;
    let (owner_user, teacher_id) = seed_teacher(&t.db, "owner").await;
    let batch = BatchModel::create(&t.db, "Batch A", None, None, None, None)
        .await
        .unwrap();
    let subject = SubjectModel::create(&t.db, "Algebra").await.unwrap();

    SlotModel::create(&t.db, teacher_id, batch.id, subject.id, "Monday", "10:00", "11:00")
        .await
        .unwrap();
    let movable = SlotModel::create(&t.db, teacher_id, batch.id, subject.id, "Monday", "11:00", "12:00")
        .await
        .unwrap();

    // Moving onto the occupied (class, day, start_time) key conflicts.
    let res = request(
        &t.app,
        Method::PUT,
        &format!("/timetable/{}", movable.id),
        Some(&token_for(&owner_user)),
        Some(json!({"start_time": "10:00"})),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    assert_eq!(
        body_json(res).await["message"],
        "Slot already exists for this class at this time"
    );

    // Keeping the slot's own key is not a conflict with itself.
    let res = request(
        &t.app,
        Method::PUT,
        &format!("/timetable/{}", movable.id),
        Some(&token_for(&owner_user)),
        Some(json!({"start_time": "11:00", "end_time": "12:30"})),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res).await;
    assert_eq!(body["data"]["end_time"], "12:30");
}

#[tokio::test]
async fn teacher_schedule_is_ordered_and_filterable() {
    let t = make_test_app().await;
    let (owner_user, teacher_id) = seed_teacher(&t.db, "owner").await;
    let batch = BatchModel::create(&t.db, "Batch A", None, None, None, None)
        .await
        .unwrap();
    let subject = SubjectModel::create(&t.db, "Algebra").await.unwrap();

    SlotModel::create(&t.db, teacher_id, batch.id, subject.id, "Tuesday", "09:00", "10:00")
        .await
        .unwrap();
    SlotModel::create(&t.db, teacher_id, batch.id, subject.id, "Monday", "11:00", "12:00")
        .await
        .unwrap();
    SlotModel::create(&t.db, teacher_id, batch.id, subject.id, "Monday", "08:00", "09:00")
        .await
        .unwrap();

    let res = request(
        &t.app,
        Method::GET,
        "/timetable/teachers/me",
        Some(&token_for(&owner_user)),
        None,
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res).await;
    let starts: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["start_time"].as_str().unwrap())
        .collect();
    assert_eq!(starts, vec!["08:00", "11:00", "09:00"]);

    let res = request(
        &t.app,
        Method::GET,
        "/timetable/teachers/me?day=Monday",
        Some(&token_for(&owner_user)),
        None,
    )
    .await;
    let body = body_json(res).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    // A caller without a teacher profile has no schedule.
    let plain = make_user(&t.db, "plain", Role::Student, false).await;
    let res = request(
        &t.app,
        Method::GET,
        "/timetable/teachers/me",
        Some(&token_for(&plain)),
        None,
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn class_schedule_requires_an_assigned_class() {
    let t = make_test_app().await;
    let (_, teacher_id) = seed_teacher(&t.db, "t1").await;
    let batch = BatchModel::create(&t.db, "Batch A", None, None, None, None)
        .await
        .unwrap();
    let subject = SubjectModel::create(&t.db, "Algebra").await.unwrap();
    SlotModel::create(&t.db, teacher_id, batch.id, subject.id, "Monday", "08:00", "09:00")
        .await
        .unwrap();

    let unassigned = make_user(&t.db, "floating", Role::Student, false).await;
    StudentModel::create(&t.db, unassigned.id, None).await.unwrap();
    let res = request(
        &t.app,
        Method::GET,
        "/timetable/classes/me",
        Some(&token_for(&unassigned)),
        None,
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(res).await["message"], "Student has no class");

    let assigned = make_user(&t.db, "enrolled", Role::Student, false).await;
    StudentModel::create(&t.db, assigned.id, Some(batch.id))
        .await
        .unwrap();
    let res = request(
        &t.app,
        Method::GET,
        "/timetable/classes/me",
        Some(&token_for(&assigned)),
        None,
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}
