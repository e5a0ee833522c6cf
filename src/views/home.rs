use crate::views::page;

/// Home page: dynamic content record counts
pub fn index(item_count: u64, category_count: u64) -> String {
    let body = format!(
        "<h1>Inventory Application</h1>\n\
         <p>Welcome! This inventory currently holds:</p>\n\
         <ul>\n\
           <li><a href=\"/items\">{item_count} items</a></li>\n\
           <li><a href=\"/categories\">{category_count} categories</a></li>\n\
         </ul>\n"
    );

    page("Inventory Application", &body)
}
