// API layer - request handlers and the route table
pub mod categories;
pub mod home;
pub mod items;

use poem::{get, Route};

/// Build the application route table.
///
/// The literal `/create` paths are registered before the `:id` patterns so
/// that "create" is never interpreted as an identifier.
pub fn routes() -> Route {
    Route::new()
        .at("/", get(home::index))
        // Item routes
        .at("/item/create", get(items::create_form).post(items::create))
        .at("/item/:id/delete", get(items::delete_form).post(items::delete))
        .at("/item/:id/update", get(items::update_form).post(items::update))
        .at("/item/:id", get(items::detail))
        .at("/items", get(items::list))
        // Category routes
        .at(
            "/category/create",
            get(categories::create_form).post(categories::create),
        )
        .at(
            "/category/:id/delete",
            get(categories::delete_form).post(categories::delete),
        )
        .at(
            "/category/:id/update",
            get(categories::update_form).post(categories::update),
        )
        .at("/category/:id", get(categories::detail))
        .at("/categories", get(categories::list))
}
