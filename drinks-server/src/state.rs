use crate::auth::verifier::{TokenVerifier, VerifierSetupError};
use crate::config::Settings;
use crate::store::sqlite::SqliteStore;
use crate::store::{DrinkStore, StoreError};
use log::warn;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while building the application state
#[derive(Debug, Error)]
pub enum StateError {
    #[error("Failed to initialize the store: {0}")]
    Store(#[from] StoreError),
    #[error("Failed to initialize the token verifier: {0}")]
    Verifier(#[from] VerifierSetupError),
}

/// Shared context handed to every handler and middleware
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub store: Arc<dyn DrinkStore>,
    pub verifier: Arc<TokenVerifier>,
}

impl AppState {
    /// Connects to the database and prepares the token verifier
    pub async fn new(settings: Settings) -> Result<Self, StateError> {
        let store = SqliteStore::connect(&settings.database).await?;
        Self::with_store(settings, Arc::new(store)).await
    }

    /// Builds the state around an existing store
    pub async fn with_store(
        settings: Settings,
        store: Arc<dyn DrinkStore>,
    ) -> Result<Self, StateError> {
        if settings.database.reset_on_start {
            warn!("Resetting the drinks table, all stored drinks are discarded");
            store.reset().await?;
        }
        let verifier = TokenVerifier::new(&settings.auth)?;

        Ok(Self {
            settings: Arc::new(settings),
            store,
            verifier: Arc::new(verifier),
        })
    }

    /// Check if all components are healthy
    pub async fn health_check(&self) -> bool {
        match self.store.health_check().await {
            Ok(()) => true,
            Err(e) => {
                warn!("Store health check failed: {}", e);
                false
            }
        }
    }
}
