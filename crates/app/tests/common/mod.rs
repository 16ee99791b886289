#![allow(dead_code)]

use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tempfile::TempDir;
use tower::util::ServiceExt;

use cms::http_server::{router, SESSION_COOKIE};
use cms::{ServiceConfig, ServiceState};
use ::common::prelude::hash_password;

pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "secret";

// lowest cost bcrypt accepts
const TEST_COST: u32 = 4;

/// A router over a fresh data directory, with one user `admin` / `secret`
pub struct TestApp {
    pub router: Router,
    pub data_dir: PathBuf,
    _temp_dir: TempDir,
}

pub async fn setup_test_app() -> TestApp {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("data");
    let users_path = temp_dir.path().join("users.toml");

    let hash = hash_password(PASSWORD, TEST_COST).unwrap();
    std::fs::write(&users_path, format!("{} = \"{}\"\n", USERNAME, hash)).unwrap();

    let config = ServiceConfig {
        data_dir: data_dir.clone(),
        users_path,
        session_secret: Some("a test secret that is long enough for key derivation".to_string()),
        ..ServiceConfig::default()
    };
    let state = ServiceState::from_config(&config).await.unwrap();

    TestApp {
        router: router(state),
        data_dir,
        _temp_dir: temp_dir,
    }
}

impl TestApp {
    pub fn create_document(&self, name: &str, content: &str) {
        std::fs::write(self.data_dir.join(name), content).unwrap();
    }

    /// Write a document last modified `age` ago
    pub fn create_document_aged(&self, name: &str, content: &str, age: Duration) {
        self.create_document(name, content);
        let file = std::fs::File::options()
            .write(true)
            .open(self.data_dir.join(name))
            .unwrap();
        file.set_modified(SystemTime::now() - age).unwrap();
    }

    pub fn read_document(&self, name: &str) -> Option<String> {
        std::fs::read_to_string(self.data_dir.join(name)).ok()
    }

    pub fn has_document(&self, name: &str) -> bool {
        self.data_dir.join(name).exists()
    }

    /// A browser with an empty cookie jar
    pub fn client(&self) -> TestClient {
        TestClient {
            router: self.router.clone(),
            session: None,
        }
    }

    /// A browser that has already signed in
    pub async fn signed_in_client(&self) -> TestClient {
        let mut client = self.client();
        let response = client
            .post_form("/users/signin", &[("username", USERNAME), ("password", PASSWORD)])
            .await;
        assert_eq!(response.status, StatusCode::FOUND);
        // consume the welcome message
        client.get("/").await;
        client
    }
}

#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub fn assert_redirect_home(&self) {
        assert_eq!(self.status, StatusCode::FOUND, "body: {}", self.body);
        assert_eq!(self.location.as_deref(), Some("/"));
    }

    /// Position of the index entry linking to `name`
    pub fn entry_position(&self, name: &str) -> Option<usize> {
        self.body.find(&format!("class=\"document\" href=\"/{}\"", name))
    }
}

/// Sends requests through the router, carrying the session cookie
///  from one response to the next request
pub struct TestClient {
    router: Router,
    session: Option<String>,
}

impl TestClient {
    pub async fn get(&mut self, uri: &str) -> TestResponse {
        let request = self.request("GET", uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn post(&mut self, uri: &str) -> TestResponse {
        self.post_form(uri, &[]).await
    }

    pub async fn post_form(&mut self, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = fields
            .iter()
            .map(|(key, value)| format!("{}={}", form_encode(key), form_encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        let request = self
            .request("POST", uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap();
        self.send(request).await
    }

    fn request(&self, method: &str, uri: &str) -> axum::http::request::Builder {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::ACCEPT, "text/html");
        match &self.session {
            Some(cookie) => builder.header(header::COOKIE, format!("{}={}", SESSION_COOKIE, cookie)),
            None => builder,
        }
    }

    async fn send(&mut self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();

        for value in response.headers().get_all(header::SET_COOKIE) {
            let value = value.to_str().unwrap();
            let pair = value.split(';').next().unwrap();
            if let Some(cookie) = pair.strip_prefix(&format!("{}=", SESSION_COOKIE)) {
                self.session = Some(cookie.to_string());
            }
        }

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .map(|v| v.to_str().unwrap().to_string());
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        TestResponse {
            status,
            location,
            content_type,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}

fn form_encode(value: &str) -> String {
    value
        .bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                (b as char).to_string()
            }
            b' ' => "+".to_string(),
            _ => format!("%{:02X}", b),
        })
        .collect()
}
