use axum::http::{Method, StatusCode};
use db::models::batch::Model as BatchModel;
use db::models::user::Role;
use serde_json::json;

use crate::helpers::{body_json, make_test_app, make_user, request, token_for};

#[tokio::test]
async fn create_batch_requires_admin() {
    let t = make_test_app().await;

    let res = request(
        &t.app,
        Method::POST,
        "/batches",
        None,
        Some(json!({"name": "Batch 2026"})),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let student = make_user(&t.db, "stu", Role::Student, false).await;
    let res = request(
        &t.app,
        Method::POST,
        "/batches",
        Some(&token_for(&student)),
        Some(json!({"name": "Batch 2026"})),
    )
    .await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let admin = make_user(&t.db, "adm", Role::Admin, true).await;
    let res = request(
        &t.app,
        Method::POST,
        "/batches",
        Some(&token_for(&admin)),
        Some(json!({"name": "Batch 2026"})),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = body_json(res).await;
    assert!(body["success"].as_bool().unwrap());
    assert_eq!(body["data"]["name"], "Batch 2026");
}

#[tokio::test]
async fn create_batch_rejects_empty_name() {
    let t = make_test_app().await;
    let admin = make_user(&t.db, "adm", Role::Admin, true).await;

    let res = request(
        &t.app,
        Method::POST,
        "/batches",
        Some(&token_for(&admin)),
        Some(json!({"name": ""})),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn batches_are_publicly_readable() {
    let t = make_test_app().await;
    let batch = BatchModel::create(&t.db, "Batch A", None, None, None, None)
        .await
        .unwrap();

    let res = request(&t.app, Method::GET, "/batches", None, None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let res = request(&t.app, Method::GET, &format!("/batches/{}", batch.id), None, None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res).await;
    assert_eq!(body["data"]["name"], "Batch A");

    let res = request(&t.app, Method::GET, "/batches/9999", None, None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = body_json(res).await;
    assert_eq!(body["message"], "Batch not found");
}

#[tokio::test]
async fn update_batch_checks_existence_before_role() {
    let t = make_test_app().await;
    let student = make_user(&t.db, "stu", Role::Student, false).await;
    let admin = make_user(&t.db, "adm", Role::Admin, true).await;
    let batch = BatchModel::create(&t.db, "Old name", None, None, None, None)
        .await
        .unwrap();

    // Unknown id is reported before the role is examined.
    let res = request(
        &t.app,
        Method::PUT,
        "/batches/9999",
        Some(&token_for(&student)),
        Some(json!({"name": "New name"})),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = request(
        &t.app,
        Method::PUT,
        &format!("/batches/{}", batch.id),
        Some(&token_for(&student)),
        Some(json!({"name": "New name"})),
    )
    .await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body = body_json(res).await;
    assert_eq!(body["message"], "Only admin may update batches");

    let res = request(
        &t.app,
        Method::PUT,
        &format!("/batches/{}", batch.id),
        Some(&token_for(&admin)),
        Some(json!({"name": "New name"})),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res).await;
    assert_eq!(body["data"]["name"], "New name");
}

#[tokio::test]
async fn delete_batch_is_admin_only() {
    let t = make_test_app().await;
    let student = make_user(&t.db, "stu", Role::Student, false).await;
    let admin = make_user(&t.db, "adm", Role::Admin, true).await;
    let batch = BatchModel::create(&t.db, "Doomed", None, None, None, None)
        .await
        .unwrap();

    let res = request(
        &t.app,
        Method::DELETE,
        &format!("/batches/{}", batch.id),
        Some(&token_for(&student)),
        None,
    )
    .await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = request(
        &t.app,
        Method::DELETE,
        &format!("/batches/{}", batch.id),
        Some(&token_for(&admin)),
        None,
    )
    .await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    assert!(BatchModel::find_by_id(&t.db, batch.id).await.unwrap().is_none());
}
