use axum::http::{Method, StatusCode};
use db::models::batch::Model as BatchModel;
use db::models::teacher::Model as TeacherModel;
use db::models::user::Role;
use serde_json::json;

use crate::helpers::{body_json, make_test_app, make_user, request, token_for};

#[tokio::test]
async fn allot_teacher_to_batch() {
    let t = make_test_app().await;
    let admin = make_user(&t.db, "adm", Role::Admin, true).await;
    let teacher_user = make_user(&t.db, "teach", Role::Teacher, false).await;
    let teacher = TeacherModel::create(&t.db, teacher_user.id).await.unwrap();
    let batch = BatchModel::create(&t.db, "Batch A", None, None, None, None)
        .await
        .unwrap();

    let res = request(
        &t.app,
        Method::POST,
        "/allotment",
        Some(&token_for(&admin)),
        Some(json!({"batch_id": batch.id, "teacher_id": teacher.id})),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res).await;
    assert_eq!(body["message"], "Teacher allotted to batch successfully");

    // Same pair again is a conflict.
    let res = request(
        &t.app,
        Method::POST,
        "/allotment",
        Some(&token_for(&admin)),
        Some(json!({"batch_id": batch.id, "teacher_id": teacher.id})),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body = body_json(res).await;
    assert_eq!(body["message"], "Teacher already allotted to this batch");
}

#[tokio::test]
async fn allotment_rejects_unknown_ids() {
    let t = make_test_app().await;
    let admin = make_user(&t.db, "adm", Role::Admin, true).await;
    let teacher_user = make_user(&t.db, "teach", Role::Teacher, false).await;
    let teacher = TeacherModel::create(&t.db, teacher_user.id).await.unwrap();
    let batch = BatchModel::create(&t.db, "Batch A", None, None, None, None)
        .await
        .unwrap();

    let res = request(
        &t.app,
        Method::POST,
        "/allotment",
        Some(&token_for(&admin)),
        Some(json!({"batch_id": 9999, "teacher_id": teacher.id})),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(res).await["message"], "Batch not found");

    let res = request(
        &t.app,
        Method::POST,
        "/allotment",
        Some(&token_for(&admin)),
        Some(json!({"batch_id": batch.id, "teacher_id": 9999})),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(res).await["message"], "Teacher not found");
}

#[tokio::test]
async fn allotment_is_admin_only() {
    let t = make_test_app().await;
    let teacher_user = make_user(&t.db, "teach", Role::Teacher, false).await;
    let teacher = TeacherModel::create(&t.db, teacher_user.id).await.unwrap();
    let batch = BatchModel::create(&t.db, "Batch A", None, None, None, None)
        .await
        .unwrap();

    let res = request(
        &t.app,
        Method::POST,
        "/allotment",
        Some(&token_for(&teacher_user)),
        Some(json!({"batch_id": batch.id, "teacher_id": teacher.id})),
    )
    .await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}
