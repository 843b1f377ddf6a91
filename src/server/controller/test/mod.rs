use axum::{
    body::Body,
    extract::{Path, State},
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};

use crate::server::state::AppState;


/// Builds a test context with every table and an app state sharing its connection.
async fn setup() -> (TestContext, AppState) {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let state = AppState::new(test.db.clone().unwrap());

    (test, state)
}

/// Splits a response into its status and parsed JSON body.
async fn into_parts(response: impl IntoResponse) -> (StatusCode, Value) {
    let response: Response = response.into_response();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}
