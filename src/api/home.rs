use std::sync::Arc;

use poem::handler;
use poem::web::{Data, Html};

use crate::app_data::AppData;
use crate::errors::WebError;
use crate::views;

/// GET `/` - home page with item and category counts
#[handler]
pub async fn index(data: Data<&Arc<AppData>>) -> Result<Html<String>, WebError> {
    let item_count = data.items.count().await?;
    let category_count = data.categories.count().await?;

    Ok(Html(views::home::index(item_count, category_count)))
}
