#[cfg(test)]
mod tests {
    use crate::errors::internal::InternalError;
    use crate::errors::web::WebError;
    use sea_orm::DbErr;

    #[test]
    fn test_database_error_includes_operation() {
        let db_err = DbErr::RecordNotFound("test record".to_string());
        let error = InternalError::database("insert_category", db_err);

        let error_string = error.to_string();
        assert!(error_string.contains("insert_category"));
        assert!(error_string.contains("Database error"));
    }

    #[test]
    fn test_invalid_identifier_includes_value() {
        let error = InternalError::invalid_identifier("not-a-uuid");
        assert_eq!(error.to_string(), "Invalid identifier: not-a-uuid");
    }

    #[test]
    fn test_not_found_includes_entity_and_id() {
        let error = InternalError::not_found("Category", "abc-123");

        let error_string = error.to_string();
        assert!(error_string.contains("Category"));
        assert!(error_string.contains("abc-123"));
    }

    #[test]
    fn test_not_found_maps_to_web_not_found() {
        let error: WebError = InternalError::not_found("Item", "abc-123").into();
        assert!(matches!(error, WebError::NotFound(_)));
    }

    #[test]
    fn test_invalid_identifier_maps_to_web_not_found() {
        let error: WebError = InternalError::invalid_identifier("create").into();
        assert!(matches!(error, WebError::NotFound(_)));
    }

    #[test]
    fn test_database_error_maps_to_web_internal() {
        let db_err = DbErr::Custom("connection lost".to_string());
        let error: WebError = InternalError::database("list_items", db_err).into();
        assert!(matches!(error, WebError::Internal(_)));
    }
}
