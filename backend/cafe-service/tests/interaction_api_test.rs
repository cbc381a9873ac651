//! `PUT /postInteractApi/{id}`: pins, likes and unlikes on memories

#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use common::TestContext;
use serde_json::{json, Value};

fn interact(id: &str, body: Value) -> actix_web::test::TestRequest {
    test::TestRequest::put()
        .uri(&format!("/postInteractApi/{id}"))
        .set_json(body)
}

#[actix_web::test]
async fn test_like_prepends_user_and_increments_count() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);
    let id = ctx.memories.seed(3, &["u1", "u2", "u3"]);

    let resp = test::call_service(
        &app,
        interact(&id, json!({ "likeUpdate": "like", "likedPerson": "u4" })).to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let ack: Value = test::read_body_json(resp).await;
    assert_eq!(ack["acknowledged"], true);
    assert_eq!(ack["matchedCount"], 1);

    let memory = ctx.memories.get(&id).unwrap();
    assert_eq!(memory.like_count, 4);
    assert_eq!(memory.liked_by, vec!["u4", "u1", "u2", "u3"]);
}

#[actix_web::test]
async fn test_unlike_removes_user_and_decrements_count() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);
    let id = ctx.memories.seed(3, &["u1", "u2", "u3"]);

    let resp = test::call_service(
        &app,
        interact(&id, json!({ "likeUpdate": "unlike", "likedPerson": "u2" })).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let memory = ctx.memories.get(&id).unwrap();
    assert_eq!(memory.like_count, 2);
    assert_eq!(memory.liked_by, vec!["u1", "u3"]);
}

#[actix_web::test]
async fn test_liking_twice_keeps_both_entries() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);
    let id = ctx.memories.seed(0, &[]);

    for _ in 0..2 {
        let resp = test::call_service(
            &app,
            interact(&id, json!({ "likeUpdate": "like", "likedPerson": "u1" })).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let memory = ctx.memories.get(&id).unwrap();
    assert_eq!(memory.like_count, 2);
    assert_eq!(memory.liked_by, vec!["u1", "u1"]);
}

#[actix_web::test]
async fn test_unlike_by_stranger_is_rejected_without_writing() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);
    let id = ctx.memories.seed(0, &[]);

    let resp = test::call_service(
        &app,
        interact(&id, json!({ "likeUpdate": "unlike", "likedPerson": "ghost" })).to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 409);

    let memory = ctx.memories.get(&id).unwrap();
    assert_eq!(memory.like_count, 0);
    assert!(memory.liked_by.is_empty());
}

#[actix_web::test]
async fn test_pin_only_leaves_likes_alone() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);
    let id = ctx.memories.seed(2, &["u1", "u2"]);

    let resp = test::call_service(&app, interact(&id, json!({ "pinnedStatus": true })).to_request())
        .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let memory = ctx.memories.get(&id).unwrap();
    assert_eq!(memory.pinned_status, Some(json!(true)));
    assert_eq!(memory.like_count, 2);
    assert_eq!(memory.liked_by, vec!["u1", "u2"]);
}

#[actix_web::test]
async fn test_pin_and_like_in_one_request() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);
    let id = ctx.memories.seed(0, &[]);

    let resp = test::call_service(
        &app,
        interact(
            &id,
            json!({ "pinnedStatus": "pinned", "likeUpdate": "like", "likedPerson": "u9" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let memory = ctx.memories.get(&id).unwrap();
    assert_eq!(memory.pinned_status, Some(json!("pinned")));
    assert_eq!(memory.liked_by, vec!["u9"]);
}

#[actix_web::test]
async fn test_concurrent_likes_both_land() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);
    let id = ctx.memories.seed(5, &["a", "b", "c", "d", "e"]);

    let first = test::call_service(
        &app,
        interact(&id, json!({ "likeUpdate": "like", "likedPerson": "x" })).to_request(),
    );
    let second = test::call_service(
        &app,
        interact(&id, json!({ "likeUpdate": "like", "likedPerson": "y" })).to_request(),
    );
    let (first, second) = futures::join!(first, second);
    assert!(first.status().is_success());
    assert!(second.status().is_success());

    let memory = ctx.memories.get(&id).unwrap();
    assert_eq!(memory.like_count, 7);
    assert_eq!(memory.liked_by.len(), 7);
}

#[actix_web::test]
async fn test_like_without_person_is_bad_request() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);
    let id = ctx.memories.seed(1, &["u1"]);

    let resp =
        test::call_service(&app, interact(&id, json!({ "likeUpdate": "like" })).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    assert_eq!(ctx.memories.get(&id).unwrap().like_count, 1);
}

#[actix_web::test]
async fn test_empty_interaction_is_acknowledged_without_changes() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);
    let id = ctx.memories.seed(2, &["u1", "u2"]);

    let resp = test::call_service(&app, interact(&id, json!({})).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let ack: Value = test::read_body_json(resp).await;
    assert_eq!(ack["matchedCount"], 1);
    assert_eq!(ack["modifiedCount"], 0);

    let memory = ctx.memories.get(&id).unwrap();
    assert_eq!(memory.like_count, 2);
    assert_eq!(memory.liked_by, vec!["u1", "u2"]);
}

#[actix_web::test]
async fn test_falsy_like_update_is_ignored() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);
    let id = ctx.memories.seed(0, &[]);

    for falsy in [json!(false), json!(0), json!("")] {
        let resp = test::call_service(
            &app,
            interact(&id, json!({ "likeUpdate": falsy, "likedPerson": "u1" })).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK, "likeUpdate {falsy}");
    }

    let memory = ctx.memories.get(&id).unwrap();
    assert_eq!(memory.like_count, 0);
    assert!(memory.liked_by.is_empty());
}

#[actix_web::test]
async fn test_empty_interaction_on_unknown_memory_is_not_found() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    let resp = test::call_service(
        &app,
        interact("65f1c0ffee0000000000beef", json!({})).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_unknown_memory_is_not_found() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    let resp = test::call_service(
        &app,
        interact(
            "65f1c0ffee0000000000beef",
            json!({ "likeUpdate": "like", "likedPerson": "u1" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(ctx.memories.records.lock().unwrap().len(), 0);
}

#[actix_web::test]
async fn test_malformed_id_is_bad_request() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    let resp = test::call_service(
        &app,
        interact("not-an-id", json!({ "pinnedStatus": true })).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
