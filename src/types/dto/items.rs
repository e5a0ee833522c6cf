use serde::Deserialize;

use crate::types::db::item;

/// Raw item form submission, exactly as posted
#[derive(Deserialize, Debug, Default)]
pub struct ItemFormData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub number_in_stock: String,
}

/// Sanitized item values built from a submission.
///
/// The numeric fields are kept in two forms: the sanitized submitted text
/// (`price`, `number_in_stock`) for redisplaying the form, and the parsed
/// values (`price_value`, `number_in_stock_value`) which are only meaningful
/// when validation reported no errors. Empty submitted text means the field
/// was omitted and is stored as absent.
#[derive(Debug, Clone)]
pub struct ItemCandidate {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub number_in_stock: String,
    pub price_value: Option<i64>,
    pub number_in_stock_value: Option<i64>,
}

impl From<&item::Model> for ItemCandidate {
    fn from(model: &item::Model) -> Self {
        Self {
            id: Some(model.id.clone()),
            name: model.name.clone(),
            description: model.description.clone(),
            category: model.category.clone(),
            price: model.price.map(|v| v.to_string()).unwrap_or_default(),
            number_in_stock: model.number_in_stock.map(|v| v.to_string()).unwrap_or_default(),
            price_value: model.price,
            number_in_stock_value: model.number_in_stock,
        }
    }
}
