// Configuration layer - settings, database lifecycle, logging
pub mod database;
pub mod logging;
pub mod settings;

pub use database::{init_database, migrate_database};
pub use logging::init_logging;
pub use settings::Settings;
