use crate::services::FieldError;
use crate::types::db::{category, item};
use crate::types::dto::items::ItemCandidate;
use crate::urls::{canonical_url, EntityKind};
use crate::views::{error_list, page};

/// All items as a linked list
pub fn item_list(items: &[item::Model]) -> String {
    let mut body = String::from("<h1>Item List</h1>\n");

    if items.is_empty() {
        body.push_str("<p>There are no items.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for item in items {
            body.push_str(&format!(
                "  <li><a href=\"{url}\">{name}</a></li>\n",
                url = canonical_url(EntityKind::Item, &item.id),
                name = item.name,
            ));
        }
        body.push_str("</ul>\n");
    }

    page("Item List", &body)
}

/// One item with its populated category
pub fn item_detail(item: &item::Model, category: Option<&category::Model>) -> String {
    let category_line = match category {
        Some(category) => format!(
            "<a href=\"{url}\">{name}</a>",
            url = canonical_url(EntityKind::Category, &category.id),
            name = category.name,
        ),
        // The reference can dangle; the row is still displayable
        None => "Unknown category".to_string(),
    };

    let mut body = format!(
        "<h1>Item Details</h1>\n\
         <h2>{name}</h2>\n\
         <p>{description}</p>\n\
         <p>Category: {category_line}</p>\n",
        name = item.name,
        description = item.description,
    );

    if let Some(price) = item.price {
        body.push_str(&format!("<p>Price: {price}</p>\n"));
    }
    if let Some(stock) = item.number_in_stock {
        body.push_str(&format!("<p>Number in stock: {stock}</p>\n"));
    }

    body.push_str(&format!(
        "<p>\n\
           <a href=\"{url}/update\">Update item</a>\n\
           <a href=\"{url}/delete\">Delete item</a>\n\
         </p>\n",
        url = canonical_url(EntityKind::Item, &item.id),
    ));

    page("Item Details", &body)
}

/// Create/update form with the category dropdown; redisplays candidate
/// values and errors after a failed submission
pub fn item_form(
    title: &str,
    item: Option<&ItemCandidate>,
    categories: &[category::Model],
    errors: &[FieldError],
) -> String {
    let name = item.map(|i| i.name.as_str()).unwrap_or("");
    let description = item.map(|i| i.description.as_str()).unwrap_or("");
    let selected_category = item.map(|i| i.category.as_str()).unwrap_or("");
    let price = item.map(|i| i.price.as_str()).unwrap_or("");
    let number_in_stock = item.map(|i| i.number_in_stock.as_str()).unwrap_or("");

    let mut options = String::from("<option value=\"\">-- Select a category --</option>\n");
    for category in categories {
        let selected = if category.id == selected_category {
            " selected"
        } else {
            ""
        };
        options.push_str(&format!(
            "      <option value=\"{id}\"{selected}>{name}</option>\n",
            id = category.id,
            name = category.name,
        ));
    }

    let body = format!(
        "<h1>{title}</h1>\n\
         {errors}\
         <form method=\"post\">\n\
           <div>\n\
             <label for=\"name\">Name</label>\n\
             <input id=\"name\" name=\"name\" type=\"text\" value=\"{name}\" placeholder=\"Item name\">\n\
           </div>\n\
           <div>\n\
             <label for=\"description\">Description</label>\n\
             <input id=\"description\" name=\"description\" type=\"text\" value=\"{description}\" placeholder=\"Item description\">\n\
           </div>\n\
           <div>\n\
             <label for=\"category\">Category</label>\n\
             <select id=\"category\" name=\"category\">\n      {options}    </select>\n\
           </div>\n\
           <div>\n\
             <label for=\"price\">Price (optional)</label>\n\
             <input id=\"price\" name=\"price\" type=\"text\" value=\"{price}\" placeholder=\"1 - 1,000,000\">\n\
           </div>\n\
           <div>\n\
             <label for=\"number_in_stock\">Number in stock (optional)</label>\n\
             <input id=\"number_in_stock\" name=\"number_in_stock\" type=\"text\" value=\"{number_in_stock}\" placeholder=\"1 - 1,000,000\">\n\
           </div>\n\
           <button type=\"submit\">Submit</button>\n\
         </form>\n",
        errors = error_list(errors),
    );

    page(title, &body)
}

/// Delete confirmation for an item; items have no dependents, so deleting
/// is never blocked
pub fn item_delete(item: &item::Model) -> String {
    let body = format!(
        "<h1>Delete the item:</h1>\n\
         <h2>{name}</h2>\n\
         <p>Do you really want to delete this item?</p>\n\
         <form method=\"post\">\n\
           <button type=\"submit\">Delete</button>\n\
         </form>\n",
        name = item.name,
    );

    page("Delete Item", &body)
}
