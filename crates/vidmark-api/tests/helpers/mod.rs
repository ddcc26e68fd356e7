//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p vidmark-api`.

#![allow(dead_code)]

use axum::Router;
use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use std::sync::Arc;
use tempfile::TempDir;
use vidmark_api::setup::routes;
use vidmark_api::state::AppState;
use vidmark_core::Config;
use vidmark_storage::LocalSlotStore;

/// Test application: server plus the temp storage directory keeping it alive.
pub struct TestApp {
    pub server: TestServer,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

/// Setup test app with isolated temp-dir storage.
pub async fn setup_test_app() -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let config = Config::for_testing(temp_dir.path().to_string_lossy().into_owned());

    let store = LocalSlotStore::new(temp_dir.path())
        .await
        .expect("Failed to create slot store");
    let state = AppState::new(config.clone(), Arc::new(store));

    let app: Router = routes::setup_routes(&config, state).expect("Failed to setup routes");
    let server = TestServer::new(app).expect("Failed to create test server");

    TestApp {
        server,
        _temp_dir: temp_dir,
    }
}

/// Multipart form with a single `file` part.
pub fn video_form(data: Vec<u8>, file_name: &str, mime_type: &str) -> MultipartForm {
    let part = Part::bytes(data)
        .file_name(file_name.to_string())
        .mime_type(mime_type.to_string());
    MultipartForm::new().add_part("file", part)
}
