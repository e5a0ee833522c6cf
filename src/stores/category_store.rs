use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::errors::InternalError;
use crate::stores::ensure_valid_id;
use crate::types::db::category::{self, ActiveModel, Entity as Category};

/// CategoryStore manages category records in the database
pub struct CategoryStore {
    db: DatabaseConnection,
}

impl CategoryStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// All categories, ascending by name regardless of insertion order
    pub async fn list_all(&self) -> Result<Vec<category::Model>, InternalError> {
        Category::find()
            .order_by_asc(category::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_categories", e))
    }

    /// Look up a category by id
    ///
    /// # Returns
    /// * `Ok(Some(model))` - Category found
    /// * `Ok(None)` - No category with this id
    /// * `Err(InternalError)` - Malformed id or database error
    pub async fn find_by_id(&self, id: &str) -> Result<Option<category::Model>, InternalError> {
        ensure_valid_id(id)?;

        Category::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_category_by_id", e))
    }

    /// Look up a category by exact name (handler-level uniqueness probe)
    pub async fn find_by_name(&self, name: &str) -> Result<Option<category::Model>, InternalError> {
        Category::find()
            .filter(category::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_category_by_name", e))
    }

    /// Persist a new category, assigning its id
    pub async fn insert(
        &self,
        name: &str,
        description: &str,
    ) -> Result<category::Model, InternalError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(name.to_string()),
            description: Set(description.to_string()),
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("insert_category", e))
    }

    /// Replace the name/description of the category at `id`, id preserved
    pub async fn update_by_id(
        &self,
        id: &str,
        name: &str,
        description: &str,
    ) -> Result<category::Model, InternalError> {
        ensure_valid_id(id)?;

        let model = ActiveModel {
            id: Set(id.to_string()),
            name: Set(name.to_string()),
            description: Set(description.to_string()),
        };

        match model.update(&self.db).await {
            Ok(updated) => Ok(updated),
            Err(DbErr::RecordNotUpdated) => Err(InternalError::not_found("Category", id)),
            Err(e) => Err(InternalError::database("update_category", e)),
        }
    }

    /// Remove the category at `id`; deleting an absent record is an error
    pub async fn delete_by_id(&self, id: &str) -> Result<(), InternalError> {
        ensure_valid_id(id)?;

        let result = Category::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_category", e))?;

        if result.rows_affected == 0 {
            return Err(InternalError::not_found("Category", id));
        }

        Ok(())
    }

    /// Number of stored categories
    pub async fn count(&self) -> Result<u64, InternalError> {
        Category::find()
            .count(&self.db)
            .await
            .map_err(|e| InternalError::database("count_categories", e))
    }
}
