//! Integration tests for signup, login and logout.

mod common;

use axum::http::StatusCode;

use books_app::services::ServiceContainer;
use common::TestApp;

#[tokio::test]
async fn test_signup() {
    let mut app = TestApp::new().await;

    let response = app
        .post("/signup", &[("username", "test_user"), ("password", "testpass")])
        .await;
    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(response.location.as_deref(), Some("/login"));

    let profile = app.services.users().get_profile("test_user").await.unwrap();
    assert_eq!(profile.user.username, "test_user");
}

#[tokio::test]
async fn test_signup_flashes_account_created() {
    let mut app = TestApp::new().await;

    let response = app
        .post_following("/signup", &[("username", "test_user"), ("password", "testpass")])
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains("Account Created."));

    // Shown once only
    let response = app.get("/login").await;
    assert!(!response.text.contains("Account Created."));
}

#[tokio::test]
async fn test_signup_existing_user() {
    let mut app = TestApp::new().await;
    app.create_user().await;

    let response = app
        .post("/signup", &[("username", "me1"), ("password", "testpass")])
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response
        .text
        .contains("That username is taken. Please choose a different one."));

    let users = app.services.users().list_users().await.unwrap();
    assert_eq!(users.len(), 1);
}

#[tokio::test]
async fn test_signup_short_password_rejected() {
    let mut app = TestApp::new().await;

    let response = app
        .post("/signup", &[("username", "test_user"), ("password", "short")])
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(app.services.users().list_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_login_correct_password() {
    let mut app = TestApp::new().await;
    app.create_user().await;

    let response = app
        .post("/login", &[("username", "me1"), ("password", "password")])
        .await;

    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(response.location.as_deref(), Some("/"));
    assert!(!response.text.contains("Log In"));
    assert!(!response.text.contains("Sign Up"));
    assert!(app.cookie("session").is_some());
}

#[tokio::test]
async fn test_login_nonexistent_user() {
    let mut app = TestApp::new().await;

    let response = app
        .post("/login", &[("username", "me1"), ("password", "password_hash")])
        .await;

    assert!(response
        .text
        .contains("No user with that username. Please try again."));
    assert!(app.cookie("session").is_none());
}

#[tokio::test]
async fn test_login_incorrect_password() {
    let mut app = TestApp::new().await;
    app.create_user().await;

    let response = app
        .post("/login", &[("username", "me1"), ("password", "testpass")])
        .await;

    assert!(response
        .text
        .contains("Password does not match. Please try again."));
    assert!(app.cookie("session").is_none());
}

#[tokio::test]
async fn test_login_follows_local_next() {
    let mut app = TestApp::new().await;
    app.create_user().await;

    let response = app
        .post(
            "/login?next=%2Fcreate_book",
            &[("username", "me1"), ("password", "password")],
        )
        .await;

    assert_eq!(response.location.as_deref(), Some("/create_book"));
}

#[tokio::test]
async fn test_login_ignores_external_next() {
    let mut app = TestApp::new().await;
    app.create_user().await;

    let response = app
        .post(
            "/login?next=https%3A%2F%2Fevil.example",
            &[("username", "me1"), ("password", "password")],
        )
        .await;

    assert_eq!(response.location.as_deref(), Some("/"));
}

#[tokio::test]
async fn test_logout() {
    let mut app = TestApp::new().await;
    app.create_user().await;
    app.login("me1", "password").await;
    assert!(app.cookie("session").is_some());

    let response = app.post("/logout", &[]).await;
    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(response.location.as_deref(), Some("/"));
    assert!(app.cookie("session").is_none());

    let response = app.get("/").await;
    assert!(response.text.contains("Log In"));
    assert!(!response.text.contains("Create Book"));
}

#[tokio::test]
async fn test_tampered_session_is_anonymous() {
    let mut app = TestApp::new().await;
    app.create_user().await;
    app.login("me1", "password").await;

    let token = app.cookie("session").unwrap().to_string();
    app.set_cookie("session", &format!("{}tampered", token));

    let response = app.get("/").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains("Log In"));
    assert!(!response.text.contains("Create Book"));
}
