// Form payloads and sanitized candidates per entity
pub mod categories;
pub mod items;
