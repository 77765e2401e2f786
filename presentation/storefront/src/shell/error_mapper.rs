use business::domain::cart::errors::CartError;
use business::domain::product::errors::ProductError;

/// Turns a domain error into a line the shopper can act on.
pub trait IntoUserMessage {
    fn into_user_message(self) -> String;
}

impl IntoUserMessage for CartError {
    fn into_user_message(self) -> String {
        match self {
            CartError::ProductNotFound => {
                "That product does not exist. Type 'products' to browse the catalog.".to_string()
            }
            CartError::Repository(_) => "The catalog is unavailable right now.".to_string(),
            CartError::MalformedPayload(_)
            | CartError::InvalidLine(_)
            | CartError::DuplicateLine(_) => "The cart could not be read.".to_string(),
        }
    }
}

impl IntoUserMessage for ProductError {
    fn into_user_message(self) -> String {
        match self {
            ProductError::NotFound => {
                "That product does not exist. Type 'products' to browse the catalog.".to_string()
            }
            ProductError::Repository(_) => "The catalog is unavailable right now.".to_string(),
        }
    }
}
