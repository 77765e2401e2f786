#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.not_found")]
    NotFound,
    #[error("repository.unavailable")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
