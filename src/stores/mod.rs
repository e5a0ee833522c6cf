// Stores layer - entity repositories over the persistent store
pub mod category_store;
pub mod item_store;

pub use category_store::CategoryStore;
pub use item_store::ItemStore;

use uuid::Uuid;

use crate::errors::InternalError;

/// Reject ids that cannot possibly address a record.
///
/// Ids are store-assigned UUID strings; anything else in an id position is a
/// malformed request, not a lookup miss.
pub(crate) fn ensure_valid_id(id: &str) -> Result<(), InternalError> {
    Uuid::parse_str(id).map_err(|_| InternalError::invalid_identifier(id))?;
    Ok(())
}
