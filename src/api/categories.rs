use std::sync::Arc;

use poem::handler;
use poem::web::{Data, Form, Html, Path, Redirect};
use poem::{IntoResponse, Response};

use crate::app_data::AppData;
use crate::errors::WebError;
use crate::services::form_validator::text_field;
use crate::services::FieldError;
use crate::types::dto::categories::{CategoryCandidate, CategoryFormData};
use crate::urls::{canonical_url, EntityKind};
use crate::views;

/// Run the category field validators in form order, collecting every error.
/// The candidate carries the sanitized values either way; `id` is set only
/// on update, always from the request path.
fn validate(form: &CategoryFormData, id: Option<String>) -> (CategoryCandidate, Vec<FieldError>) {
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

    (
        CategoryCandidate {
            id,
            name,
            description,
        },
        errors,
    )
}

/// GET `/categories` - list all categories
#[handler]
pub async fn list(data: Data<&Arc<AppData>>) -> Result<Html<String>, WebError> {
    let categories = data.categories.list_all().await?;

    Ok(Html(views::categories::category_list(&categories)))
}

/// GET `/category/:id` - detail page with the items in the category
#[handler]
pub async fn detail(
    data: Data<&Arc<AppData>>,
    Path(id): Path<String>,
) -> Result<Html<String>, WebError> {
    let category = data
        .categories
        .find_by_id(&id)
        .await?
        .ok_or_else(|| WebError::not_found("Category not found"))?;
    let items = data.items.find_by_category(&id).await?;

    Ok(Html(views::categories::category_detail(&category, &items)))
}

/// GET `/category/create` - blank create form
#[handler]
pub async fn create_form() -> Html<String> {
    Html(views::categories::category_form(
        "Create New Category",
        None,
        &[],
    ))
}

/// POST `/category/create`
///
/// Validation failure redisplays the form (HTTP 200, nothing persisted).
/// A category with the same name already existing is not an error: the
/// request redirects to the existing record instead of creating a duplicate.
#[handler]
pub async fn create(
    data: Data<&Arc<AppData>>,
    Form(form): Form<CategoryFormData>,
) -> Result<Response, WebError> {
    let (candidate, errors) = validate(&form, None);

    if !errors.is_empty() {
        return Ok(Html(views::categories::category_form(
            "Create category",
            Some(&candidate),
            &errors,
        ))
        .into_response());
    }

    if let Some(existing) = data.categories.find_by_name(&candidate.name).await? {
        return Ok(
            Redirect::see_other(canonical_url(EntityKind::Category, &existing.id))
                .into_response(),
        );
    }

    let created = data
        .categories
        .insert(&candidate.name, &candidate.description)
        .await?;

    Ok(Redirect::see_other(canonical_url(EntityKind::Category, &created.id)).into_response())
}

/// GET `/category/:id/update` - form prefilled with the existing record
#[handler]
pub async fn update_form(
    data: Data<&Arc<AppData>>,
    Path(id): Path<String>,
) -> Result<Html<String>, WebError> {
    let category = data
        .categories
        .find_by_id(&id)
        .await?
        .ok_or_else(|| WebError::not_found("Category not found"))?;
    let candidate = CategoryCandidate::from(&category);

    Ok(Html(views::categories::category_form(
        "Update category",
        Some(&candidate),
        &[],
    )))
}

/// POST `/category/:id/update`
///
/// The candidate id always comes from the path, never from the form. If a
/// different category already holds the submitted name, the request
/// redirects to that record instead of creating a second one.
#[handler]
pub async fn update(
    data: Data<&Arc<AppData>>,
    Path(id): Path<String>,
    Form(form): Form<CategoryFormData>,
) -> Result<Response, WebError> {
    let (candidate, errors) = validate(&form, Some(id.clone()));

    if !errors.is_empty() {
        return Ok(Html(views::categories::category_form(
            "Update category",
            Some(&candidate),
            &errors,
        ))
        .into_response());
    }

    if let Some(existing) = data.categories.find_by_name(&candidate.name).await? {
        if existing.id != id {
            return Ok(
                Redirect::see_other(canonical_url(EntityKind::Category, &existing.id))
                    .into_response(),
            );
        }
    }

    let updated = data
        .categories
        .update_by_id(&id, &candidate.name, &candidate.description)
        .await?;

    Ok(Redirect::see_other(canonical_url(EntityKind::Category, &updated.id)).into_response())
}

/// GET `/category/:id/delete` - confirmation page listing blocking items
#[handler]
pub async fn delete_form(
    data: Data<&Arc<AppData>>,
    Path(id): Path<String>,
) -> Result<Html<String>, WebError> {
    let category = data
        .categories
        .find_by_id(&id)
        .await?
        .ok_or_else(|| WebError::not_found("Category not found"))?;
    let items = data.items.find_by_category(&id).await?;

    Ok(Html(views::categories::category_delete(&category, &items)))
}

/// POST `/category/:id/delete`
///
/// No partial delete: while any item still references the category, the
/// confirmation view with the blocking items is rendered instead.
#[handler]
pub async fn delete(
    data: Data<&Arc<AppData>>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let category = data
        .categories
        .find_by_id(&id)
        .await?
        .ok_or_else(|| WebError::not_found("Category not found"))?;
    let items = data.items.find_by_category(&id).await?;

    if !items.is_empty() {
        return Ok(Html(views::categories::category_delete(&category, &items)).into_response());
    }

    data.categories.delete_by_id(&category.id).await?;

    Ok(Redirect::see_other("/categories").into_response())
}
