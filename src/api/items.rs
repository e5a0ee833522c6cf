use std::sync::Arc;

use poem::handler;
use poem::web::{Data, Form, Html, Path, Redirect};
use poem::{IntoResponse, Response};

use crate::app_data::AppData;
use crate::errors::WebError;
use crate::services::form_validator::{quantity_field, required_field, text_field};
use crate::services::FieldError;
use crate::types::dto::items::{ItemCandidate, ItemFormData};
use crate::urls::{canonical_url, EntityKind};
use crate::views;

/// Run the item field validators in form order, collecting every error.
/// The numeric fields are optional; submitted text is kept on the candidate
/// for redisplay even when a rule fails.
fn validate(form: &ItemFormData, id: Option<String>) -> (ItemCandidate, Vec<FieldError>) {
    let mut errors = Vec::new();

    let name = text_field("name", &form.name, 3, 40, "Name must not be empty.", &mut errors);
    let description = text_field(
        "description",
        &form.description,
        3,
        100,
        "Description must not be empty.",
        &mut errors,
    );
    let category = required_field(
        "category",
        &form.category,
        "Category must not be empty.",
        &mut errors,
    );
    let (price, price_value) = quantity_field(
        "price",
        &form.price,
        "Price must be a whole number between 1 and 1,000,000.",
        &mut errors,
    );
    let (number_in_stock, number_in_stock_value) = quantity_field(
        "number_in_stock",
        &form.number_in_stock,
        "Number in stock must be a whole number between 1 and 1,000,000.",
        &mut errors,
    );

    (
        ItemCandidate {
            id,
            name,
            description,
            category,
            price,
            number_in_stock,
            price_value,
            number_in_stock_value,
        },
        errors,
    )
}

/// GET `/items` - list all items
#[handler]
pub async fn list(data: Data<&Arc<AppData>>) -> Result<Html<String>, WebError> {
    let items = data.items.list_all().await?;

    Ok(Html(views::items::item_list(&items)))
}

/// GET `/item/:id` - detail page with the populated category
#[handler]
pub async fn detail(
    data: Data<&Arc<AppData>>,
    Path(id): Path<String>,
) -> Result<Html<String>, WebError> {
    let item = data
        .items
        .find_by_id(&id)
        .await?
        .ok_or_else(|| WebError::not_found("Item not found"))?;
    let category = data.categories.find_by_id(&item.category).await?;

    Ok(Html(views::items::item_detail(&item, category.as_ref())))
}

/// GET `/item/create` - blank create form with the category dropdown
#[handler]
pub async fn create_form(data: Data<&Arc<AppData>>) -> Result<Html<String>, WebError> {
    let categories = data.categories.list_all().await?;

    Ok(Html(views::items::item_form(
        "Create New Item",
        None,
        &categories,
        &[],
    )))
}

/// POST `/item/create`
///
/// Validation failure redisplays the form (HTTP 200, nothing persisted)
/// with the sanitized submitted values echoed back.
#[handler]
pub async fn create(
    data: Data<&Arc<AppData>>,
    Form(form): Form<ItemFormData>,
) -> Result<Response, WebError> {
    let (candidate, errors) = validate(&form, None);

    if !errors.is_empty() {
        let categories = data.categories.list_all().await?;
        return Ok(Html(views::items::item_form(
            "Create item",
            Some(&candidate),
            &categories,
            &errors,
        ))
        .into_response());
    }

    let created = data
        .items
        .insert(
            &candidate.name,
            &candidate.description,
            &candidate.category,
            candidate.price_value,
            candidate.number_in_stock_value,
        )
        .await?;

    Ok(Redirect::see_other(canonical_url(EntityKind::Item, &created.id)).into_response())
}

/// GET `/item/:id/update` - form prefilled with the existing record
#[handler]
pub async fn update_form(
    data: Data<&Arc<AppData>>,
    Path(id): Path<String>,
) -> Result<Html<String>, WebError> {
    let item = data
        .items
        .find_by_id(&id)
        .await?
        .ok_or_else(|| WebError::not_found("Item not found"))?;
    let categories = data.categories.list_all().await?;
    let candidate = ItemCandidate::from(&item);

    Ok(Html(views::items::item_form(
        "Update item",
        Some(&candidate),
        &categories,
        &[],
    )))
}

/// POST `/item/:id/update`
///
/// The candidate id always comes from the path, never from the form.
#[handler]
pub async fn update(
    data: Data<&Arc<AppData>>,
    Path(id): Path<String>,
    Form(form): Form<ItemFormData>,
) -> Result<Response, WebError> {
    let (candidate, errors) = validate(&form, Some(id.clone()));

    if !errors.is_empty() {
        let categories = data.categories.list_all().await?;
        return Ok(Html(views::items::item_form(
            "Update item",
            Some(&candidate),
            &categories,
            &errors,
        ))
        .into_response());
    }

    let updated = data
        .items
        .update_by_id(
            &id,
            &candidate.name,
            &candidate.description,
            &candidate.category,
            candidate.price_value,
            candidate.number_in_stock_value,
        )
        .await?;

    Ok(Redirect::see_other(canonical_url(EntityKind::Item, &updated.id)).into_response())
}

/// GET `/item/:id/delete` - confirmation page
#[handler]
pub async fn delete_form(
    data: Data<&Arc<AppData>>,
    Path(id): Path<String>,
) -> Result<Html<String>, WebError> {
    let item = data
        .items
        .find_by_id(&id)
        .await?
        .ok_or_else(|| WebError::not_found("Item not found"))?;

    Ok(Html(views::items::item_delete(&item)))
}

/// POST `/item/:id/delete`
///
/// Items have no dependents, so the delete is never blocked; a missing item
/// propagates as NotFound.
#[handler]
pub async fn delete(
    data: Data<&Arc<AppData>>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    data.items.delete_by_id(&id).await?;

    Ok(Redirect::see_other("/items").into_response())
}
