use samplereg_store::{Session, Store, StoreError};

/// Shared application services handed to every handler.
pub struct AppServices {
    store: Store,
}

impl AppServices {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Open the unit of work for one request.
    ///
    /// The returned session holds a pooled connection exclusively; dropping
    /// it (on any handler exit path) releases the connection.
    pub async fn session(&self) -> Result<Session, StoreError> {
        self.store.session().await
    }
}
