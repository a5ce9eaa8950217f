use axum::http::{Method, StatusCode};
use db::models::batch::Model as BatchModel;
use db::models::enrollment::Model as EnrollmentModel;
use db::models::notification::{DEFAULT_CHANNEL, Model as NotificationModel};
use db::models::user::Role;
use serde_json::json;
use std::collections::HashSet;

use crate::helpers::{body_json, make_test_app, make_user, request, token_for};

#[tokio::test]
async fn direct_notification_reaches_one_user() {
    let t = make_test_app().await;
    let teacher = make_user(&t.db, "teach", Role::Teacher, false).await;
    let student = make_user(&t.db, "stu", Role::Student, false).await;

    let res = request(
        &t.app,
        Method::POST,
        "/notifications",
        Some(&token_for(&teacher)),
        Some(json!({
            "recipient_id": student.id,
            "title": "Exam",
            "message": "Friday 9AM",
        })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = body_json(res).await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["recipient_id"], student.id);
    assert_eq!(rows[0]["channel"], DEFAULT_CHANNEL);
    assert_eq!(rows[0]["is_read"], false);
}

#[tokio::test]
async fn send_rejects_students_and_missing_targets() {
    let t = make_test_app().await;
    let teacher = make_user(&t.db, "teach", Role::Teacher, false).await;
    let student = make_user(&t.db, "stu", Role::Student, false).await;

    let res = request(
        &t.app,
        Method::POST,
        "/notifications",
        Some(&token_for(&student)),
        Some(json!({"recipient_id": teacher.id, "title": "hi", "message": "m"})),
    )
    .await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = request(
        &t.app,
        Method::POST,
        "/notifications",
        Some(&token_for(&teacher)),
        Some(json!({"title": "hi", "message": "m"})),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(res).await["message"],
        "recipient_id or batch_id is required"
    );

    let res = request(
        &t.app,
        Method::POST,
        "/notifications",
        Some(&token_for(&teacher)),
        Some(json!({"recipient_id": 9999, "title": "hi", "message": "m"})),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(res).await["message"], "Recipient user not found");
}

#[tokio::test]
async fn batch_send_fans_out_to_active_enrollments() {
    let t = make_test_app().await;
    let teacher = make_user(&t.db, "teach", Role::Teacher, false).await;
    let batch = BatchModel::create(&t.db, "Batch A", None, None, None, None)
        .await
        .unwrap();

    let mut expected = HashSet::new();
    for i in 0..3 {
        let stu = make_user(&t.db, &format!("stu{i}"), Role::Student, false).await;
        EnrollmentModel::create(&t.db, batch.id, stu.id, true)
            .await
            .unwrap();
        expected.insert(stu.id);
    }
    let inactive = make_user(&t.db, "gone", Role::Student, false).await;
    EnrollmentModel::create(&t.db, batch.id, inactive.id, false)
        .await
        .unwrap();

    let res = request(
        &t.app,
        Method::POST,
        "/notifications",
        Some(&token_for(&teacher)),
        Some(json!({
            "batch_id": batch.id,
            "title": "Exam",
            "message": "Friday 9AM",
            "channel": "email",
        })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = body_json(res).await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 3);

    let recipients: HashSet<i64> = rows
        .iter()
        .map(|n| n["recipient_id"].as_i64().unwrap())
        .collect();
    assert_eq!(recipients, expected);
    assert!(rows.iter().all(|n| n["title"] == "Exam" && n["channel"] == "email"));
}

#[tokio::test]
async fn batch_send_to_empty_batch_creates_nothing() {
    let t = make_test_app().await;
    let teacher = make_user(&t.db, "teach", Role::Teacher, false).await;
    let batch = BatchModel::create(&t.db, "Empty", None, None, None, None)
        .await
        .unwrap();

    let res = request(
        &t.app,
        Method::POST,
        "/notifications",
        Some(&token_for(&teacher)),
        Some(json!({"batch_id": batch.id, "title": "Hello", "message": "anyone?"})),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = body_json(res).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn coordinator_may_only_target_their_own_batch() {
    let t = make_test_app().await;
    let coordinator = make_user(&t.db, "coord", Role::Coordinator, false).await;
    let rival = make_user(&t.db, "rival", Role::Coordinator, false).await;
    let own = BatchModel::create(&t.db, "Own", None, Some(coordinator.id), None, None)
        .await
        .unwrap();
    let foreign = BatchModel::create(&t.db, "Foreign", None, Some(rival.id), None, None)
        .await
        .unwrap();

    let res = request(
        &t.app,
        Method::POST,
        "/notifications",
        Some(&token_for(&coordinator)),
        Some(json!({"batch_id": foreign.id, "title": "hi", "message": "m"})),
    )
    .await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        body_json(res).await["message"],
        "Coordinator can send only to their own batch"
    );

    let res = request(
        &t.app,
        Method::POST,
        "/notifications",
        Some(&token_for(&coordinator)),
        Some(json!({"batch_id": own.id, "title": "hi", "message": "m"})),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn inbox_is_newest_first_and_capped() {
    let t = make_test_app().await;
    let user = make_user(&t.db, "stu", Role::Student, false).await;

    for i in 0..5 {
        NotificationModel::create(&t.db, user.id, &format!("n{i}"), "m", DEFAULT_CHANNEL)
            .await
            .unwrap();
    }

    let res = request(
        &t.app,
        Method::GET,
        "/notifications/me?limit=2",
        Some(&token_for(&user)),
        None,
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res).await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["title"], "n4");
    assert_eq!(rows[1]["title"], "n3");
}

#[tokio::test]
async fn mark_read_is_recipient_only_and_idempotent() {
    let t = make_test_app().await;
    let recipient = make_user(&t.db, "stu", Role::Student, false).await;
    let other = make_user(&t.db, "other", Role::Student, false).await;
    let n = NotificationModel::create(&t.db, recipient.id, "Exam", "m", DEFAULT_CHANNEL)
        .await
        .unwrap();

    let res = request(
        &t.app,
        Method::PUT,
        &format!("/notifications/{}/read", n.id),
        Some(&token_for(&other)),
        None,
    )
    .await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    for _ in 0..2 {
        let res = request(
            &t.app,
            Method::PUT,
            &format!("/notifications/{}/read", n.id),
            Some(&token_for(&recipient)),
            None,
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = body_json(res).await;
        assert_eq!(body["data"]["is_read"], true);
    }

    let res = request(
        &t.app,
        Method::PUT,
        "/notifications/9999/read",
        Some(&token_for(&recipient)),
        None,
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_notification_is_admin_only() {
    let t = make_test_app().await;
    let recipient = make_user(&t.db, "stu", Role::Student, false).await;
    let admin = make_user(&t.db, "adm", Role::Admin, true).await;
    let n = NotificationModel::create(&t.db, recipient.id, "Exam", "m", DEFAULT_CHANNEL)
        .await
        .unwrap();

    let res = request(
        &t.app,
        Method::DELETE,
        &format!("/notifications/{}", n.id),
        Some(&token_for(&recipient)),
        None,
    )
    .await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = request(
        &t.app,
        Method::DELETE,
        &format!("/notifications/{}", n.id),
        Some(&token_for(&admin)),
        None,
    )
    .await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert!(
        NotificationModel::find_by_id(&t.db, n.id)
            .await
            .unwrap()
            .is_none()
    );
}
