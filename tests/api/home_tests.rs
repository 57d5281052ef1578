//! Home Feed API Tests

use std::collections::HashSet;

use axum::http::{header, HeaderValue, StatusCode};
use pretty_assertions::assert_eq;
use test_case::test_case;

use blog_feed::application::dto::HomeResponse;
use blog_feed::shared::error::AppError;

use crate::common::{
    posts, test_settings, token_for, user, user_repo_with, post_repo_with, MockPostRepo,
    MockUserRepo, TestApp,
};

fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {}", token)).unwrap()
}

#[tokio::test]
async fn test_guest_gets_whole_feed() {
    let app = TestApp::new(post_repo_with(posts(15)), MockUserRepo::new());

    let response = app.server.get("/").add_query_param("guest", "true").await;

    response.assert_status_ok();
    let body: HomeResponse = response.json();
    assert_eq!(body.username, "Guest");
    assert!(body.is_guest);
    assert_eq!(body.created_at, None);
    assert_eq!(body.posts.len(), 15);
    assert_eq!(body.current_page, 0);
    assert_eq!(body.available_pages, 0);
    assert_eq!(body.stats.post_count, 0);
    assert!(body.posts.iter().all(|p| !p.is_liked));
}

#[tokio::test]
async fn test_guest_flag_wins_over_token() {
    let app = TestApp::new(post_repo_with(posts(3)), MockUserRepo::new());

    let response = app
        .server
        .get("/home")
        .add_query_param("guest", "true")
        .add_header(header::AUTHORIZATION, bearer(&token_for(7)))
        .await;

    response.assert_status_ok();
    assert!(response.json::<HomeResponse>().is_guest);
}

#[tokio::test]
async fn test_guest_feed_paginated_when_enabled() {
    let settings = test_settings(&[("feed.paginate_guests", "true")]);
    let app = TestApp::with_settings(post_repo_with(posts(15)), MockUserRepo::new(), settings);

    let response = app
        .server
        .get("/")
        .add_query_param("guest", "true")
        .add_query_param("currentpage", "2")
        .await;

    let body: HomeResponse = response.json();
    assert_eq!(body.posts.len(), 5);
    assert_eq!(body.current_page, 2);
    assert_eq!(body.available_pages, 2);
}

#[tokio::test]
async fn test_authenticated_first_page() {
    let viewer = user(7);
    let username = viewer.username.clone();
    let app = TestApp::new(post_repo_with(posts(15)), user_repo_with(viewer, 4, 9));

    let response = app
        .server
        .get("/")
        .add_header(header::AUTHORIZATION, bearer(&token_for(7)))
        .await;

    response.assert_status_ok();
    let body: HomeResponse = response.json();
    assert_eq!(body.username, username);
    assert!(!body.is_guest);
    assert_eq!(body.created_at.as_deref(), Some("July 4, 2023"));
    assert_eq!(body.stats.post_count, 4);
    assert_eq!(body.stats.comment_count, 9);
    assert_eq!(body.posts.len(), 10);
    assert_eq!(body.posts[0].id, 15);
    assert_eq!(body.current_page, 1);
    assert_eq!(body.available_pages, 2);
}

#[test_case("2", 2, 5 ; "last partial page")]
#[test_case("3", 3, 0 ; "past the end")]
#[test_case("abc", 1, 10 ; "malformed falls back to first")]
#[test_case("-4", 1, 10 ; "negative clamps to first")]
#[tokio::test]
async fn test_authenticated_page_selection(page: &str, expected_page: u32, expected_len: usize) {
    let app = TestApp::new(post_repo_with(posts(15)), user_repo_with(user(7), 0, 0));

    let response = app
        .server
        .get("/home")
        .add_query_param("currentpage", page)
        .add_header(header::AUTHORIZATION, bearer(&token_for(7)))
        .await;

    response.assert_status_ok();
    let body: HomeResponse = response.json();
    assert_eq!(body.current_page, expected_page);
    assert_eq!(body.available_pages, 2);
    assert_eq!(body.posts.len(), expected_len);
}

#[tokio::test]
async fn test_session_cookie_identifies_viewer() {
    let app = TestApp::new(post_repo_with(posts(2)), user_repo_with(user(7), 1, 1));
    let cookie = HeaderValue::from_str(&format!("session={}", token_for(7))).unwrap();

    let response = app.server.get("/").add_header(header::COOKIE, cookie).await;

    response.assert_status_ok();
    assert!(!response.json::<HomeResponse>().is_guest);
}

#[tokio::test]
async fn test_liked_posts_are_marked_for_viewer() {
    let mut post_repo = MockPostRepo::new();
    post_repo
        .expect_find_recent()
        .withf(|limit| *limit == 20)
        .returning(|_| Ok(posts(4)));
    post_repo
        .expect_find_liked_post_ids()
        .withf(|user_id, ids| *user_id == 7 && ids.to_vec() == vec![4, 3, 2, 1])
        .times(1)
        .returning(|_, _| Ok(HashSet::from([3, 1])));
    let app = TestApp::new(post_repo, user_repo_with(user(7), 0, 0));

    let response = app
        .server
        .get("/")
        .add_header(header::AUTHORIZATION, bearer(&token_for(7)))
        .await;

    let liked: Vec<i64> = response
        .json::<HomeResponse>()
        .posts
        .iter()
        .filter(|p| p.is_liked)
        .map(|p| p.id)
        .collect();
    assert_eq!(liked, vec![3, 1]);
}

#[tokio::test]
async fn test_anonymous_visitor_redirected_to_welcome() {
    let app = TestApp::new(MockPostRepo::new(), MockUserRepo::new());

    let response = app.server.get("/").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header(header::LOCATION), "/welcome");
}

#[tokio::test]
async fn test_invalid_token_redirected_to_welcome() {
    let app = TestApp::new(MockPostRepo::new(), MockUserRepo::new());

    let response = app
        .server
        .get("/")
        .add_header(header::AUTHORIZATION, bearer("not-a-jwt"))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_unknown_user_redirected_to_welcome() {
    let app = TestApp::new(MockPostRepo::new(), user_repo_with(user(7), 0, 0));

    let response = app
        .server
        .get("/")
        .add_header(header::AUTHORIZATION, bearer(&token_for(99)))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_post_query_failure_is_server_error() {
    let mut post_repo = MockPostRepo::new();
    post_repo
        .expect_find_recent()
        .returning(|_| Err(AppError::Internal("connection reset".into())));
    let app = TestApp::new(post_repo, MockUserRepo::new());

    let response = app.server.get("/").add_query_param("guest", "true").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], 10000);
}

#[tokio::test]
async fn test_failing_counts_render_as_zero() {
    let viewer = user(7);
    let mut user_repo = MockUserRepo::new();
    user_repo
        .expect_find_by_id()
        .returning(move |_| Ok(Some(viewer.clone())));
    user_repo
        .expect_count_posts()
        .returning(|_| Err(AppError::Internal("timeout".into())));
    user_repo.expect_count_comments().returning(|_| Ok(6));
    let app = TestApp::new(post_repo_with(posts(1)), user_repo);

    let response = app
        .server
        .get("/")
        .add_header(header::AUTHORIZATION, bearer(&token_for(7)))
        .await;

    response.assert_status_ok();
    let body: HomeResponse = response.json();
    assert_eq!(body.stats.post_count, 0);
    assert_eq!(body.stats.comment_count, 6);
}

#[tokio::test]
async fn test_viewer_lookup_failure_is_server_error() {
    let mut user_repo = MockUserRepo::new();
    user_repo
        .expect_find_by_id()
        .returning(|_| Err(AppError::Internal("pool timed out".into())));
    let app = TestApp::new(MockPostRepo::new(), user_repo);

    let response = app
        .server
        .get("/")
        .add_header(header::AUTHORIZATION, bearer(&token_for(7)))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let metrics = app.server.get("/metrics").await.text();
    assert!(metrics.lines().any(|line| {
        line.starts_with("blog_feed_feed_requests_total{")
            && line.contains(r#"viewer="unknown""#)
            && line.contains(r#"outcome="error""#)
    }));
}
