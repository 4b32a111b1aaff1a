//! Request-level tests driving the full router against an in-memory database.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Duration;
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory, fixture};
use tower::ServiceExt;

use crate::server::{
    model::user::User, service::auth::token::TokenService, startup::build_app, state::AppState,
};


struct TestApp {
    app: Router,
    db: DatabaseConnection,
    tokens: TokenService,
    // Keeps the in-memory database alive for the duration of the test
    _context: TestContext,
}

impl TestApp {
    async fn new() -> Self {
        let context = TestBuilder::new()
            .with_tier_list_tables()
            .build()
            .await
            .unwrap();
        let db = context.db.clone().unwrap();
        let tokens = TokenService::new("controller-test-secret", Duration::hours(1));
        let app = build_app(AppState::new(
            db.clone(),
            tokens.clone(),
            fixture::user::TEST_HASH_COST,
        ));

        Self {
            app,
            db,
            tokens,
            _context: context,
        }
    }

    fn token_for(&self, user: &entity::user::Model) -> String {
        let user = User::from_entity(user.clone()).unwrap();
        self.tokens.issue(&user).unwrap()
    }

    /// Sends a request and returns the status with the parsed JSON body (`Null` when empty).
    async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.send_request(request).await
    }

    async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, body)
    }
}
