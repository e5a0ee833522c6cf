//! Views layer - pure renderers turning a data+error bundle into an HTML
//! document. Handlers pick the view; views never touch the store.
//!
//! Every dynamic string that reaches a view has already been normalized by
//! the validation engine (stored rows included, since all writes go through
//! it), so views embed values as-is and nothing gets escaped twice.

mod layout;

pub mod categories;
pub mod home;
pub mod items;

pub(crate) use layout::page;

use crate::services::FieldError;

/// Generic error document (404 / 500 pages)
pub fn error_page(title: &str, message: &str) -> String {
    let body = format!("<h1>{title}</h1>\n<p>{message}</p>\n");
    page(title, &body)
}

/// Ordered list of field errors shown above a redisplayed form
pub(crate) fn error_list(errors: &[FieldError]) -> String {
    if errors.is_empty() {
        return String::new();
    }

    let mut html = String::from("<ul class=\"errors\">\n");
    for error in errors {
        html.push_str(&format!("  <li>{}</li>\n", error.message));
    }
    html.push_str("</ul>\n");
    html
}
