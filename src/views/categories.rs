use crate::services::FieldError;
use crate::types::db::{category, item};
use crate::types::dto::categories::CategoryCandidate;
use crate::urls::{canonical_url, EntityKind};
use crate::views::{error_list, page};

/// All categories as a linked list
pub fn category_list(categories: &[category::Model]) -> String {
    let mut body = String::from("<h1>Category List</h1>\n");

    if categories.is_empty() {
        body.push_str("<p>There are no categories.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for category in categories {
            body.push_str(&format!(
                "  <li><a href=\"{url}\">{name}</a></li>\n",
                url = canonical_url(EntityKind::Category, &category.id),
                name = category.name,
            ));
        }
        body.push_str("</ul>\n");
    }

    page("Category List", &body)
}

/// One category plus the items that reference it
pub fn category_detail(category: &category::Model, items: &[item::Model]) -> String {
    let mut body = format!(
        "<h1>Category Details</h1>\n\
         <h2>{name}</h2>\n\
         <p>{description}</p>\n",
        name = category.name,
        description = category.description,
    );

    if items.is_empty() {
        body.push_str("<p>This category has no items.</p>\n");
    } else {
        body.push_str(&items_table(items));
    }

    body.push_str(&format!(
        "<p>\n\
           <a href=\"{url}/update\">Update category</a>\n\
           <a href=\"{url}/delete\">Delete category</a>\n\
         </p>\n",
        url = canonical_url(EntityKind::Category, &category.id),
    ));

    page("Category Details", &body)
}

/// Create/update form; redisplays candidate values and errors after a
/// failed submission
pub fn category_form(
    title: &str,
    category: Option<&CategoryCandidate>,
    errors: &[FieldError],
) -> String {
    let name = category.map(|c| c.name.as_str()).unwrap_or("");
    let description = category.map(|c| c.description.as_str()).unwrap_or("");

    let body = format!(
        "<h1>{title}</h1>\n\
         {errors}\
         <form method=\"post\">\n\
           <div>\n\
             <label for=\"name\">Name</label>\n\
             <input id=\"name\" name=\"name\" type=\"text\" value=\"{name}\" placeholder=\"Category name\">\n\
           </div>\n\
           <div>\n\
             <label for=\"description\">Description</label>\n\
             <input id=\"description\" name=\"description\" type=\"text\" value=\"{description}\" placeholder=\"Category description\">\n\
           </div>\n\
           <button type=\"submit\">Submit</button>\n\
         </form>\n",
        errors = error_list(errors),
    );

    page(title, &body)
}

/// Delete confirmation; lists blocking items when the category is still
/// referenced, offers the delete button only when it is not
pub fn category_delete(category: &category::Model, items: &[item::Model]) -> String {
    let mut body = format!(
        "<h1>Delete the category:</h1>\n\
         <h2>{name}</h2>\n",
        name = category.name,
    );

    if items.is_empty() {
        body.push_str(
            "<p>Do you really want to delete this category?</p>\n\
             <form method=\"post\">\n\
               <button type=\"submit\">Delete</button>\n\
             </form>\n",
        );
    } else {
        body.push_str(
            "<p>Delete the following items before attempting to delete this category:</p>\n",
        );
        body.push_str(&items_table(items));
    }

    page("Delete Category", &body)
}

fn items_table(items: &[item::Model]) -> String {
    let mut table = String::from(
        "<table>\n  <tr><th>Name</th><th>Price</th><th>Number in stock</th></tr>\n",
    );
    for item in items {
        table.push_str(&format!(
            "  <tr><td><a href=\"{url}\">{name}</a></td><td>{price}</td><td>{stock}</td></tr>\n",
            url = canonical_url(EntityKind::Item, &item.id),
            name = item.name,
            price = optional_number(item.price),
            stock = optional_number(item.number_in_stock),
        ));
    }
    table.push_str("</table>\n");
    table
}

fn optional_number(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}
