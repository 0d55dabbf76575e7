//! Shared application state.

use droidgate_core::{CredentialStore, DroidgateConfig};
use droidgate_dispatch::Dispatcher;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: DroidgateConfig,
    pub credentials: CredentialStore,
    pub dispatcher: Dispatcher,
}

impl AppState {
    pub fn new(config: DroidgateConfig) -> Self {
        let credentials = CredentialStore::new(config.credential_path.clone());
        let dispatcher = Dispatcher::new(config.max_in_flight, config.dispatch_timeout);
        Self {
            config,
            credentials,
            dispatcher,
        }
    }
}
