//! Application state management
use parking_lot::RwLock;
use std::sync::Arc;
use xiaopei_core::{Config, CoreError, Result, Site};

/// Thread-safe application state wrapper
pub struct AppState {
    site: Arc<RwLock<Option<Site>>>,
}

impl AppState {
    pub fn new() -> Result<Self> {
        let site = Site::new(Config::default());

        Ok(Self {
            site: Arc::new(RwLock::new(Some(site))),
        })
    }

    pub fn with_site<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Site) -> Result<T>,
    {
        let guard = self.site.read();
        match guard.as_ref() {
            Some(site) => f(site),
            None => Err(CoreError::NotInitialized),
        }
    }

    /// Clone of the site handle for background tasks
    pub fn site(&self) -> Result<Site> {
        self.with_site(|site| Ok(site.clone()))
    }
}
