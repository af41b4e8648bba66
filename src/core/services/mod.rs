pub mod category_service;
pub mod summary_service;

pub use category_service::{CategoryService, ResolvedCategory};
pub use summary_service::{CategoryShare, SummaryService};

use crate::errors::BudgetError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] BudgetError),
    #[error("{0}")]
    Invalid(String),
}
