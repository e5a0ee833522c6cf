// Database entities - SeaORM models
pub mod category;
pub mod item;
