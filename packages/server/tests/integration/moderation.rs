use serde_json::json;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn members_cannot_moderate() {
    let app = TestApp::spawn().await;
    let a = app.create_authenticated_user("a@example.com").await;
    let id = app.submit(&a, "USA", "music", "https://youtu.be/abc123").await;

    let approve = app
        .post_with_token(&routes::approve(id), &json!({}), &a)
        .await;
    assert_eq!(approve.status, 403);
    assert_eq!(approve.body["code"], "PERMISSION_DENIED");

    let queue = app.get_with_token(routes::MODERATION_QUEUE, &a).await;
    assert_eq!(queue.status, 403);

    let flags = app.get_with_token(routes::MODERATION_FLAGS, &a).await;
    assert_eq!(flags.status, 403);
}

#[tokio::test]
async fn queue_defaults_to_pending_oldest_first() {
    let app = TestApp::spawn().await;
    let moderator = app
        .create_user_with_role("mod@example.com", "moderator")
        .await;
    let a = app.create_authenticated_user("a@example.com").await;

    let first = app.submit(&a, "USA", "music", "https://youtu.be/aaa111").await;
    let second = app.submit(&a, "USA", "comedy", "https://youtu.be/bbb222").await;
    let third = app.submit(&a, "USA", "cooking", "https://youtu.be/ccc333").await;
    app.approve(&moderator, second).await;

    let res = app
        .get_with_token(routes::MODERATION_QUEUE, &moderator)
        .await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body["pagination"]["total"], 2);
    let data = res.body["data"].as_array().unwrap();
    assert_eq!(data[0]["id"], first);
    assert_eq!(data[1]["id"], third);
    assert_eq!(data[0]["user_email"], "a@example.com");
    assert_eq!(data[0]["video_id"], "aaa111");

    let approved = app
        .get_with_token(
            &format!("{}?status=approved", routes::MODERATION_QUEUE),
            &moderator,
        )
        .await;
    assert_eq!(approved.body["pagination"]["total"], 1);
    assert_eq!(approved.body["data"][0]["id"], second);
}

#[tokio::test]
async fn queue_is_paginated() {
    let app = TestApp::spawn().await;
    let moderator = app
        .create_user_with_role("mod@example.com", "moderator")
        .await;
    let a = app.create_authenticated_user("a@example.com").await;
    for (i, category) in ["inspiration", "music", "comedy"].iter().enumerate() {
        app.submit(&a, "USA", category, &format!("https://youtu.be/vid{i}"))
            .await;
    }

    let res = app
        .get_with_token(
            &format!("{}?page=2&per_page=2", routes::MODERATION_QUEUE),
            &moderator,
        )
        .await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body["data"].as_array().unwrap().len(), 1);
    assert_eq!(res.body["pagination"]["total"], 3);
    assert_eq!(res.body["pagination"]["total_pages"], 2);
}

#[tokio::test]
async fn invalid_status_filter_is_rejected() {
    let app = TestApp::spawn().await;
    let moderator = app
        .create_user_with_role("mod@example.com", "moderator")
        .await;

    let res = app
        .get_with_token(
            &format!("{}?status=archived", routes::MODERATION_QUEUE),
            &moderator,
        )
        .await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn reject_then_edit_returns_to_pending() {
    let app = TestApp::spawn().await;
    let moderator = app
        .create_user_with_role("mod@example.com", "moderator")
        .await;
    let a = app.create_authenticated_user("a@example.com").await;
    let id = app.submit(&a, "USA", "music", "https://youtu.be/abc123").await;

    let rejected = app
        .post_with_token(&routes::reject(id), &json!({}), &moderator)
        .await;
    assert_eq!(rejected.status, 200);
    assert_eq!(rejected.body["status"], "rejected");

    let edited = app
        .patch_with_token(
            &routes::submission(id),
            &json!({"source_url": "https://youtu.be/xyz789"}),
            &a,
        )
        .await;
    assert_eq!(edited.body["status"], "pending");
}

#[tokio::test]
async fn only_pending_submissions_can_be_decided() {
    let app = TestApp::spawn().await;
    let moderator = app
        .create_user_with_role("mod@example.com", "moderator")
        .await;
    let a = app.create_authenticated_user("a@example.com").await;
    let id = app.submit(&a, "USA", "music", "https://youtu.be/abc123").await;
    app.approve(&moderator, id).await;

    for path in [routes::approve(id), routes::reject(id)] {
        let res = app.post_with_token(&path, &json!({}), &moderator).await;
        assert_eq!(res.status, 409);
        assert_eq!(res.body["code"], "INVALID_TRANSITION");
    }
    assert_eq!(app.stored_status(id).await, "approved");
}

#[tokio::test]
async fn deciding_a_missing_submission_is_not_found() {
    let app = TestApp::spawn().await;
    let moderator = app
        .create_user_with_role("mod@example.com", "moderator")
        .await;

    let res = app
        .post_with_token(&routes::approve(9999), &json!({}), &moderator)
        .await;
    assert_eq!(res.status, 404);
}

#[tokio::test]
async fn flags_carry_per_submission_counts_and_can_be_dismissed() {
    let app = TestApp::spawn().await;
    let moderator = app
        .create_user_with_role("mod@example.com", "moderator")
        .await;
    let a = app.create_authenticated_user("a@example.com").await;
    let b = app.create_authenticated_user("b@example.com").await;
    let c = app.create_authenticated_user("c@example.com").await;
    let busy = app.submit(&a, "USA", "music", "https://youtu.be/aaa111").await;
    let quiet = app.submit(&a, "USA", "comedy", "https://youtu.be/bbb222").await;
    app.approve(&moderator, busy).await;
    app.approve(&moderator, quiet).await;

    for token in [&b, &c] {
        let res = app
            .post_with_token(&routes::flags(busy), &json!({"reason": "broken"}), token)
            .await;
        assert_eq!(res.status, 201);
    }
    let quiet_flag = app
        .post_with_token(&routes::flags(quiet), &json!({"reason": "other"}), &b)
        .await
        .id();

    let res = app
        .get_with_token(routes::MODERATION_FLAGS, &moderator)
        .await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["pagination"]["total"], 3);
    for item in res.body["data"].as_array().unwrap() {
        let expected = if item["submission_id"] == busy { 2 } else { 1 };
        assert_eq!(item["submission_flag_count"], expected);
    }

    let dismissed = app
        .delete_with_token(&routes::dismiss_flag(quiet_flag), &moderator)
        .await;
    assert_eq!(dismissed.status, 204);

    let again = app
        .delete_with_token(&routes::dismiss_flag(quiet_flag), &moderator)
        .await;
    assert_eq!(again.status, 404);

    let after = app
        .get_with_token(routes::MODERATION_FLAGS, &moderator)
        .await;
    assert_eq!(after.body["pagination"]["total"], 2);

    // Dismissing lets the same user flag again.
    let reflag = app
        .post_with_token(&routes::flags(quiet), &json!({"reason": "other"}), &b)
        .await;
    assert_eq!(reflag.status, 201);
}

#[tokio::test]
async fn page_past_the_offset_range_is_rejected() {
    let app = TestApp::spawn().await;
    let moderator = app
        .create_user_with_role("mod@example.com", "moderator")
        .await;

    for base in [routes::MODERATION_QUEUE, routes::MODERATION_FLAGS] {
        let res = app
            .get_with_token(&format!("{base}?page={}", u64::MAX), &moderator)
            .await;
        assert_eq!(res.status, 400, "{base}: {}", res.text);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }
}
