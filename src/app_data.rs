use sea_orm::DatabaseConnection;

use crate::stores::{CategoryStore, ItemStore};

/// Centralized application data following the main-owned stores pattern
///
/// The database handle and both stores are created once in main.rs, wrapped
/// in an `Arc`, and passed to request handlers through poem's `Data`
/// extension. There is no ambient/global store state; the connection's
/// lifecycle (open at startup, close at shutdown) is owned by main.
pub struct AppData {
    pub db: DatabaseConnection,
    pub categories: CategoryStore,
    pub items: ItemStore,
}

impl AppData {
    /// Initialize all application data
    ///
    /// The connection should be established and migrated before this is
    /// called.
    pub fn init(db: DatabaseConnection) -> Self {
        tracing::debug!("Creating stores...");
        let categories = CategoryStore::new(db.clone());
        let items = ItemStore::new(db.clone());

        Self {
            db,
            categories,
            items,
        }
    }
}
