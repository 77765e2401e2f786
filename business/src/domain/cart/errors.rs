use crate::domain::shared::value_objects::ProductId;

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.product_not_found")]
    ProductNotFound,
    #[error("cart.malformed_payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
    #[error("cart.invalid_line: {0}")]
    InvalidLine(ProductId),
    #[error("cart.duplicate_line: {0}")]
    DuplicateLine(ProductId),
    #[error("repository.unavailable")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
