use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::errors::InternalError;
use crate::stores::ensure_valid_id;
use crate::types::db::item::{self, ActiveModel, Entity as Item};

/// ItemStore manages item records in the database
pub struct ItemStore {
    db: DatabaseConnection,
}

impl ItemStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// All items, ascending by name regardless of insertion order
    pub async fn list_all(&self) -> Result<Vec<item::Model>, InternalError> {
        Item::find()
            .order_by_asc(item::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_items", e))
    }

    /// Look up an item by id
    ///
    /// # Returns
    /// * `Ok(Some(model))` - Item found
    /// * `Ok(None)` - No item with this id
    /// * `Err(InternalError)` - Malformed id or database error
    pub async fn find_by_id(&self, id: &str) -> Result<Option<item::Model>, InternalError> {
        ensure_valid_id(id)?;

        Item::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_item_by_id", e))
    }

    /// All items referencing the given category, ascending by name.
    ///
    /// Used for category detail listings and as the blocking-items check
    /// before a category delete.
    pub async fn find_by_category(
        &self,
        category_id: &str,
    ) -> Result<Vec<item::Model>, InternalError> {
        ensure_valid_id(category_id)?;

        Item::find()
            .filter(item::Column::Category.eq(category_id))
            .order_by_asc(item::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_items_by_category", e))
    }

    /// Persist a new item, assigning its id
    pub async fn insert(
        &self,
        name: &str,
        description: &str,
        category: &str,
        price: Option<i64>,
        number_in_stock: Option<i64>,
    ) -> Result<item::Model, InternalError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(name.to_string()),
            description: Set(description.to_string()),
            category: Set(category.to_string()),
            price: Set(price),
            number_in_stock: Set(number_in_stock),
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("insert_item", e))
    }

    /// Replace every mutable field of the item at `id`, id preserved
    pub async fn update_by_id(
        &self,
        id: &str,
        name: &str,
        description: &str,
        category: &str,
        price: Option<i64>,
        number_in_stock: Option<i64>,
    ) -> Result<item::Model, InternalError> {
        ensure_valid_id(id)?;

        let model = ActiveModel {
            id: Set(id.to_string()),
            name: Set(name.to_string()),
            description: Set(description.to_string()),
            category: Set(category.to_string()),
            price: Set(price),
            number_in_stock: Set(number_in_stock),
        };

        match model.update(&self.db).await {
            Ok(updated) => Ok(updated),
            Err(DbErr::RecordNotUpdated) => Err(InternalError::not_found("Item", id)),
            Err(e) => Err(InternalError::database("update_item", e)),
        }
    }

    /// Remove the item at `id`; deleting an absent record is an error
    pub async fn delete_by_id(&self, id: &str) -> Result<(), InternalError> {
        ensure_valid_id(id)?;

        let result = Item::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_item", e))?;

        if result.rows_affected == 0 {
            return Err(InternalError::not_found("Item", id));
        }

        Ok(())
    }

    /// Number of stored items
    pub async fn count(&self) -> Result<u64, InternalError> {
        Item::find()
            .count(&self.db)
            .await
            .map_err(|e| InternalError::database("count_items", e))
    }
}
