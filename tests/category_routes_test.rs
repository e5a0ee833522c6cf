mod common;

use poem::http::StatusCode;

const VALID_DESCRIPTION: &str = "Televisions and monitors";

#[tokio::test]
async fn test_create_category_redirects_to_canonical_url() {
    let app_data = common::setup_app_data().await;
    let app = common::test_app(app_data.clone());

    let resp = common::post_form(
        &app,
        "/category/create",
        &[("name", "Televisions"), ("description", VALID_DESCRIPTION)],
    )
    .await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let location = common::location(&resp);
    assert!(location.starts_with("/category/"));

    // The redirect target renders the stored record
    let detail = common::get(&app, &location).await;
    assert_eq!(detail.status(), StatusCode::OK);
    let body = common::body_text(detail).await;
    assert!(body.contains("Televisions"));
    assert!(body.contains(VALID_DESCRIPTION));
}

#[tokio::test]
async fn test_duplicate_name_redirects_to_existing_record() {
    let app_data = common::setup_app_data().await;
    let app = common::test_app(app_data.clone());

    let first = common::post_form(
        &app,
        "/category/create",
        &[("name", "Televisions"), ("description", VALID_DESCRIPTION)],
    )
    .await;
    let first_url = common::location(&first);

    let second = common::post_form(
        &app,
        "/category/create",
        &[("name", "Televisions"), ("description", "different text")],
    )
    .await;

    // Idempotent merge: redirect to the original, no second record
    assert_eq!(second.status(), StatusCode::SEE_OTHER);
    assert_eq!(common::location(&second), first_url);
    assert_eq!(app_data.categories.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_validation_failure_redisplays_form_with_values() {
    let app_data = common::setup_app_data().await;
    let app = common::test_app(app_data.clone());

    let resp = common::post_form(
        &app,
        "/category/create",
        &[("name", "TV"), ("description", VALID_DESCRIPTION)],
    )
    .await;

    // Not an error: the form comes back with the error list and the
    // submitted values, and nothing is persisted
    assert_eq!(resp.status(), StatusCode::OK);
    let body = common::body_text(resp).await;
    assert!(body.contains("Name must not be empty."));
    assert!(body.contains("value=\"TV\""));
    assert!(body.contains(&format!("value=\"{VALID_DESCRIPTION}\"")));
    assert_eq!(app_data.categories.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_validation_reports_all_errors_at_once() {
    let app_data = common::setup_app_data().await;
    let app = common::test_app(app_data);

    let resp = common::post_form(&app, "/category/create", &[("name", ""), ("description", "x")])
        .await;

    let body = common::body_text(resp).await;
    assert!(body.contains("Name must not be empty."));
    assert!(body.contains("Description must not be empty."));
}

#[tokio::test]
async fn test_submitted_values_are_trimmed_and_escaped() {
    let app_data = common::setup_app_data().await;
    let app = common::test_app(app_data.clone());

    let resp = common::post_form(
        &app,
        "/category/create",
        &[("name", "  TVs & Monitors  "), ("description", VALID_DESCRIPTION)],
    )
    .await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let stored = app_data
        .categories
        .find_by_name("TVs &amp; Monitors")
        .await
        .unwrap();
    assert!(stored.is_some());
}

#[tokio::test]
async fn test_update_replaces_record_at_path_id() {
    let app_data = common::setup_app_data().await;
    let app = common::test_app(app_data.clone());

    let created = app_data
        .categories
        .insert("Televisions", VALID_DESCRIPTION)
        .await
        .unwrap();

    let resp = common::post_form(
        &app,
        &format!("/category/{}/update", created.id),
        &[("name", "Monitors"), ("description", "Displays of all kinds")],
    )
    .await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(common::location(&resp), format!("/category/{}", created.id));

    let fetched = app_data
        .categories
        .find_by_id(&created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.name, "Monitors");
    assert_eq!(app_data.categories.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_update_to_another_categorys_name_redirects_without_writing() {
    let app_data = common::setup_app_data().await;
    let app = common::test_app(app_data.clone());

    let laptops = app_data
        .categories
        .insert("Laptops", "Portable computers")
        .await
        .unwrap();
    let desktops = app_data
        .categories
        .insert("Desktops", "Stationary computers")
        .await
        .unwrap();

    let resp = common::post_form(
        &app,
        &format!("/category/{}/update", desktops.id),
        &[("name", "Laptops"), ("description", "Renamed")],
    )
    .await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(common::location(&resp), format!("/category/{}", laptops.id));

    // The edited record was left untouched
    let fetched = app_data
        .categories
        .find_by_id(&desktops.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.name, "Desktops");
}

#[tokio::test]
async fn test_update_keeping_own_name_succeeds() {
    let app_data = common::setup_app_data().await;
    let app = common::test_app(app_data.clone());

    let created = app_data
        .categories
        .insert("Televisions", VALID_DESCRIPTION)
        .await
        .unwrap();

    // Same name, new description: not a duplicate of a different record
    let resp = common::post_form(
        &app,
        &format!("/category/{}/update", created.id),
        &[("name", "Televisions"), ("description", "Updated description")],
    )
    .await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let fetched = app_data
        .categories
        .find_by_id(&created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.description, "Updated description");
}

#[tokio::test]
async fn test_delete_with_referencing_items_is_blocked() {
    let app_data = common::setup_app_data().await;
    let app = common::test_app(app_data.clone());

    let category = app_data
        .categories
        .insert("Televisions", VALID_DESCRIPTION)
        .await
        .unwrap();
    app_data
        .items
        .insert("Sony Bravia", "A 4K OLED TV.", &category.id, Some(2799), Some(5))
        .await
        .unwrap();

    let resp = common::post_form(&app, &format!("/category/{}/delete", category.id), &[]).await;

    // Blocked delete is a normal page listing the blockers, not an error
    assert_eq!(resp.status(), StatusCode::OK);
    let body = common::body_text(resp).await;
    assert!(body.contains("Sony Bravia"));
    assert_eq!(app_data.categories.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_delete_without_items_removes_and_redirects() {
    let app_data = common::setup_app_data().await;
    let app = common::test_app(app_data.clone());

    let category = app_data
        .categories
        .insert("Televisions", VALID_DESCRIPTION)
        .await
        .unwrap();

    let resp = common::post_form(&app, &format!("/category/{}/delete", category.id), &[]).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(common::location(&resp), "/categories");
    assert!(app_data.categories.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_missing_category_is_not_found() {
    let app_data = common::setup_app_data().await;
    let app = common::test_app(app_data);

    let resp = common::post_form(
        &app,
        &format!("/category/{}/delete", uuid::Uuid::new_v4()),
        &[],
    )
    .await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_path_is_not_treated_as_an_id() {
    let app_data = common::setup_app_data().await;
    let app = common::test_app(app_data);

    let resp = common::get(&app, "/category/create").await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = common::body_text(resp).await;
    assert!(body.contains("Create New Category"));
}

#[tokio::test]
async fn test_list_renders_in_name_order() {
    let app_data = common::setup_app_data().await;
    let app = common::test_app(app_data.clone());

    for (name, description) in [
        ("Wearables", "Devices worn on the body"),
        ("Audio", "Speakers and headphones"),
    ] {
        app_data.categories.insert(name, description).await.unwrap();
    }

    let resp = common::get(&app, "/categories").await;
    let body = common::body_text(resp).await;

    let audio_at = body.find("Audio").unwrap();
    let wearables_at = body.find("Wearables").unwrap();
    assert!(audio_at < wearables_at);
}
