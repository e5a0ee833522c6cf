use crate::app_data::AppData;
use crate::errors::InternalError;
use crate::services::form_validator::sanitize;

/// Seed the database with the sample inventory.
///
/// Values pass through the same sanitizer as form input so seeded rows obey
/// the stored-values-are-HTML-safe rule everything else relies on.
pub async fn populate(app_data: &AppData) -> Result<(), InternalError> {
    tracing::info!("Adding categories");

    let categories = [
        (
            "Mobile Devices",
            "Stay connected with our cutting-edge smartphones, featuring advanced features and sleek designs.",
        ),
        (
            "Laptops",
            "Discover the perfect blend of power and portability with our top-notch laptops.",
        ),
        (
            "Televisions (TVs)",
            "Get quality entertainment without breaking the bank with our budget-friendly options.",
        ),
        (
            "Wearable Fitness Trackers",
            "Monitor your health and stay active with our fitness bands.",
        ),
        (
            "Computers (Desktops)",
            "Streamline your workspace with our sleek all-in-one desktops.",
        ),
    ];

    let mut category_ids = Vec::with_capacity(categories.len());
    for (name, description) in categories {
        let created = app_data
            .categories
            .insert(&sanitize(name), &sanitize(description))
            .await?;
        tracing::info!("Added category: {}", created.name);
        category_ids.push(created.id);
    }

    tracing::info!("Adding items");

    let items: [(usize, &str, &str, Option<i64>, Option<i64>); 15] = [
        // Mobile Devices
        (0, "Apple iPhone 13", "A high-end mobile phone with advanced features.", Some(999), Some(50)),
        (0, "Samsung Galaxy Tab S7", "A portable touchscreen device for browsing, gaming, and productivity.", Some(649), Some(30)),
        (0, "Apple Watch Series 7", "A wearable device that tracks health and provides notifications.", Some(399), Some(20)),
        // Laptops
        (1, "Dell XPS 13", "A sleek ultrabook with powerful performance.", Some(1199), Some(15)),
        (1, "MacBook Air M1", "Apple's lightweight laptop with impressive battery life.", Some(999), Some(10)),
        (1, "Lenovo ThinkPad X1 Carbon", "A business-oriented laptop known for durability.", Some(1499), Some(8)),
        // Televisions (TVs)
        (2, "Sony Bravia OLED A90J", "A 4K OLED TV with stunning picture quality.", Some(2799), Some(5)),
        (2, "Samsung QLED Q80A", "A 4K QLED TV with vibrant colors and excellent contrast.", Some(1499), Some(12)),
        (2, "LG NanoCell 85 Series", "A budget-friendly 4K TV with good performance.", Some(899), Some(20)),
        // Wearable Fitness Trackers
        (3, "Fitbit Charge 4", "A fitness band that monitors steps, heart rate, and sleep.", Some(149), Some(40)),
        (3, "Garmin Vivosmart 4", "A slim activity tracker with stress tracking features.", Some(129), Some(25)),
        (3, "Xiaomi Mi Band 6", "An affordable fitness tracker with a color display.", Some(49), Some(60)),
        // Computers (Desktops)
        (4, "HP Pavilion Gaming Desktop", "A gaming PC with powerful graphics.", Some(899), Some(10)),
        (4, "Apple iMac (24-inch, M1)", "An all-in-one desktop with Apple's M1 chip.", Some(1299), Some(8)),
        (4, "Lenovo IdeaCentre 5", "A mid-range desktop for everyday tasks.", Some(599), Some(15)),
    ];

    for (category_index, name, description, price, number_in_stock) in items {
        let created = app_data
            .items
            .insert(
                &sanitize(name),
                &sanitize(description),
                &category_ids[category_index],
                price,
                number_in_stock,
            )
            .await?;
        tracing::info!("Added item: {}", created.name);
    }

    Ok(())
}
