//! Application state.

use std::sync::Arc;
use vidmark_core::Config;
use vidmark_storage::SlotStore;

/// Main application state: configuration plus the single-slot video store.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn SlotStore>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn SlotStore>) -> Self {
        AppState { config, store }
    }
}

#[allow(dead_code)]
fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
