// Services layer - pure validation logic invoked by request handlers
pub mod form_validator;

pub use form_validator::FieldError;
