//! Shared harness for router-level integration tests.
//!
//! Each `TestApp` owns a fresh in-memory SQLite database with migrations
//! applied, drives the real router through `oneshot`, and keeps a small
//! cookie store so sessions and flash messages survive across requests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{
        header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
        Method, Request, StatusCode,
    },
    Router,
};
use chrono::NaiveDate;
use tower::ServiceExt;

use books_app::domain::{Audience, BookInput};
use books_app::services::{ServiceContainer, Services};
use books_app::{create_router, AppState, Config, Database};

pub const TEST_SECRET: &str = "integration-test-session-secret-32+";

/// Response captured for assertions
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub text: String,
}

pub struct TestApp {
    router: Router,
    pub services: Services,
    cookies: HashMap<String, String>,
}

impl TestApp {
    pub async fn new() -> Self {
        let config = Config::new("sqlite::memory:", TEST_SECRET);
        let database = Database::connect(&config)
            .await
            .expect("in-memory database should migrate");

        let services = Services::from_connection(database.get_connection(), config.clone());
        let router = create_router(AppState::from_config(Arc::new(database), config));

        Self {
            router,
            services,
            cookies: HashMap::new(),
        }
    }

    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }

    pub fn set_cookie(&mut self, name: &str, value: &str) {
        self.cookies.insert(name.to_string(), value.to_string());
    }

    pub async fn get(&mut self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&mut self, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        self.send(Method::POST, uri, Some(encode_form(fields))).await
    }

    /// GET and follow redirects to the final page
    pub async fn get_following(&mut self, uri: &str) -> TestResponse {
        let response = self.get(uri).await;
        self.follow(response).await
    }

    /// POST and follow redirects to the final page
    pub async fn post_following(&mut self, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        let response = self.post(uri, fields).await;
        self.follow(response).await
    }

    async fn follow(&mut self, mut response: TestResponse) -> TestResponse {
        for _ in 0..5 {
            match (response.status, response.location.clone()) {
                (StatusCode::FOUND, Some(location)) => response = self.get(&location).await,
                _ => break,
            }
        }
        response
    }

    async fn send(&mut self, method: Method, uri: &str, form: Option<String>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);

        if !self.cookies.is_empty() {
            let header = self
                .cookies
                .iter()
                .map(|(name, value)| format!("{}={}", name, value))
                .collect::<Vec<_>>()
                .join("; ");
            builder = builder.header(COOKIE, header);
        }

        let body = match form {
            Some(form) => {
                builder = builder.header(CONTENT_TYPE, "application/x-www-form-urlencoded");
                Body::from(form)
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        for header in response.headers().get_all(SET_COOKIE) {
            self.store_cookie(header.to_str().unwrap());
        }

        let status = response.status();
        let location = response
            .headers()
            .get(LOCATION)
            .map(|value| value.to_str().unwrap().to_string());
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        TestResponse {
            status,
            location,
            text: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }

    fn store_cookie(&mut self, header: &str) {
        let pair = header.split(';').next().unwrap_or_default();
        let Some((name, value)) = pair.split_once('=') else {
            return;
        };

        let expired = header
            .split(';')
            .any(|attr| attr.trim().eq_ignore_ascii_case("max-age=0"));

        if value.is_empty() || expired {
            self.cookies.remove(name.trim());
        } else {
            self.cookies
                .insert(name.trim().to_string(), value.trim().to_string());
        }
    }

    /// Log in through the login form
    pub async fn login(&mut self, username: &str, password: &str) -> TestResponse {
        self.post_following("/login", &[("username", username), ("password", password)])
            .await
    }

    pub async fn logout(&mut self) -> TestResponse {
        self.get_following("/logout").await
    }

    /// Two authors, each with one book:
    /// "To Kill a Mockingbird" (id 1, Harper Lee) and "The Bell Jar" (id 2, Sylvia Plath)
    pub async fn create_books(&self) {
        let catalog = self.services.catalog();

        let harper = catalog
            .create_author("Harper Lee".to_string(), String::new())
            .await
            .unwrap();
        catalog
            .create_book(BookInput {
                title: "To Kill a Mockingbird".to_string(),
                publish_date: NaiveDate::from_ymd_opt(1960, 7, 11),
                author_id: harper.id,
                audience: Audience::All,
                genre_ids: vec![],
            })
            .await
            .unwrap();

        let sylvia = catalog
            .create_author("Sylvia Plath".to_string(), String::new())
            .await
            .unwrap();
        catalog
            .create_book(BookInput {
                title: "The Bell Jar".to_string(),
                publish_date: None,
                author_id: sylvia.id,
                audience: Audience::All,
                genre_ids: vec![],
            })
            .await
            .unwrap();
    }

    /// User "me1" with password "password"
    pub async fn create_user(&self) {
        self.services
            .auth()
            .signup("me1".to_string(), "password".to_string())
            .await
            .unwrap();
    }
}

fn encode_form(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}
