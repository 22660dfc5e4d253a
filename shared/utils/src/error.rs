use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Failure taxonomy for the catalog core. Every variant maps to a fixed
/// HTTP status and a stable error code; messages are part of the public
/// contract and must not drift.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum CatalogError {
    #[error("{field} must be provided")]
    Validation { field: String },

    #[error("can't find {resource} with id {id}")]
    NotFound { resource: String, id: Uuid },

    #[error("One or more supplier IDs not found")]
    AssociationNotFound,

    #[error("data already exist")]
    AlreadyLinked,

    #[error("data not exist")]
    NotLinked,

    #[error("{field} cannot be null")]
    MissingIdentifier { field: String },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl CatalogError {
    pub fn validation(field: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>, id: Uuid) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id,
        }
    }

    pub fn missing_identifier(field: impl Into<String>) -> Self {
        Self::MissingIdentifier {
            field: field.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::AssociationNotFound => "ASSOCIATION_NOT_FOUND",
            Self::AlreadyLinked => "ALREADY_LINKED",
            Self::NotLinked => "NOT_LINKED",
            Self::MissingIdentifier { .. } => "MISSING_IDENTIFIER",
            Self::Database { .. } => "DATABASE_ERROR",
        }
    }

    /// Status codes clients key off: validation failures and link-state
    /// conflicts report 401, missing entities 404, store failures 500.
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::Validation { .. } => 401,
            Self::AlreadyLinked => 401,
            Self::NotLinked => 401,
            Self::NotFound { .. } => 404,
            Self::AssociationNotFound => 404,
            Self::MissingIdentifier { .. } => 404,
            Self::Database { .. } => 500,
        }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;

// Conversion from common error types
impl From<sqlx::Error> for CatalogError {
    fn from(error: sqlx::Error) -> Self {
        Self::database(error.to_string())
    }
}

impl From<anyhow::Error> for CatalogError {
    fn from(error: anyhow::Error) -> Self {
        Self::database(error.to_string())
    }
}
