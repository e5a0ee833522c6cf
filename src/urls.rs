//! Canonical URLs for entity detail views.

/// Entity kinds that have a canonical detail URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Category,
    Item,
}

/// Stable path identifying a single entity's detail view.
///
/// Used wherever a redirect target or link is needed; records themselves do
/// not carry a URL.
pub fn canonical_url(kind: EntityKind, id: &str) -> String {
    match kind {
        EntityKind::Category => format!("/category/{id}"),
        EntityKind::Item => format!("/item/{id}"),
    }
}
