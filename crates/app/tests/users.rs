mod common;

use axum::http::StatusCode;

use crate::common::{setup_test_app, PASSWORD, USERNAME};

const SIGN_IN_REQUIRED: &str = "You must be signed in to perform this action.";

#[tokio::test]
async fn test_signin_form() {
    let app = setup_test_app().await;
    let response = app.client().get("/users/signin").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(r#"name="username""#));
    assert!(response.body.contains(r#"type="password""#));
}

#[tokio::test]
async fn test_signin() {
    let app = setup_test_app().await;
    let mut client = app.client();

    client
        .post_form("/users/signin", &[("username", USERNAME), ("password", PASSWORD)])
        .await
        .assert_redirect_home();

    let response = client.get("/").await;
    assert!(response.body.contains("Welcome"));
    assert!(response.body.contains("Signed in as admin."));

    // still signed in on later requests
    let response = client.get("/").await;
    assert!(!response.body.contains("Welcome"));
    assert!(response.body.contains("Signed in as admin."));
}

#[tokio::test]
async fn test_signin_with_bad_credentials() {
    let app = setup_test_app().await;
    let mut client = app.client();

    let response = client
        .post_form("/users/signin", &[("username", "guest"), ("password", "shhhh")])
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("Invalid credentials"));
    assert!(response.body.contains(r#"value="guest""#));

    let response = client
        .post_form("/users/signin", &[("username", USERNAME), ("password", "wrong")])
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("Invalid credentials"));

    assert!(!client.get("/").await.body.contains("Signed in as"));
}

#[tokio::test]
async fn test_signout() {
    let app = setup_test_app().await;
    let mut client = app.signed_in_client().await;

    client.post("/users/signout").await.assert_redirect_home();

    let response = client.get("/").await;
    assert!(response.body.contains("You have been signed out."));
    assert!(!response.body.contains("Signed in as"));
    assert!(response.body.contains("Sign In"));

    client.get("/new").await.assert_redirect_home();
}

#[tokio::test]
async fn test_signout_when_signed_out() {
    let app = setup_test_app().await;
    let mut client = app.client();

    client.post("/users/signout").await.assert_redirect_home();
    assert!(client.get("/").await.body.contains("You have been signed out."));
}

#[tokio::test]
async fn test_forms_require_signin() {
    let app = setup_test_app().await;
    app.create_document("test.txt", "");

    for uri in ["/new", "/test.txt/edit", "/test.txt/rename"] {
        let mut client = app.client();
        client.get(uri).await.assert_redirect_home();
        let response = client.get("/").await;
        assert!(response.body.contains(SIGN_IN_REQUIRED), "{}", uri);
    }
}

#[tokio::test]
async fn test_mutations_require_signin() {
    let app = setup_test_app().await;
    app.create_document("test.txt", "original");

    let attempts: [(&str, &[(&str, &str)]); 5] = [
        ("/create", &[("filename", "new.txt")]),
        ("/test.txt", &[("content", "changed")]),
        ("/test.txt/rename", &[("new_filename", "renamed.txt")]),
        ("/test.txt/duplicate", &[]),
        ("/test.txt/delete", &[]),
    ];

    for (uri, fields) in attempts {
        let mut client = app.client();
        client.post_form(uri, fields).await.assert_redirect_home();
        assert!(client.get("/").await.body.contains(SIGN_IN_REQUIRED), "{}", uri);
    }

    assert_eq!(app.read_document("test.txt").as_deref(), Some("original"));
    assert!(!app.has_document("new.txt"));
    assert!(!app.has_document("renamed.txt"));
    assert!(!app.has_document("testcopy.txt"));
}

#[tokio::test]
async fn test_viewing_does_not_require_signin() {
    let app = setup_test_app().await;
    app.create_document("test.txt", "public");

    let mut client = app.client();
    assert_eq!(client.get("/").await.status, StatusCode::OK);
    assert_eq!(client.get("/test.txt").await.body, "public");
}
