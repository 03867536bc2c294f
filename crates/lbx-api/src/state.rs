use std::sync::Arc;

use lbx_db::FlashcardStore;

use crate::config::Environment;

/// Shared application state handed to every handler.
///
/// The store is injected at startup (memory or Postgres); handlers never
/// reach for a global. Tests build a fresh state per test for isolation.
#[derive(Clone)]
pub struct ApiState {
    pub store: Arc<dyn FlashcardStore>,
    pub environment: Environment,
}

impl ApiState {
    pub fn new(store: Arc<dyn FlashcardStore>, environment: Environment) -> Self {
        Self { store, environment }
    }
}

impl std::fmt::Debug for ApiState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiState")
            .field("environment", &self.environment)
            .finish_non_exhaustive()
    }
}
