//! Catalog application errors.

use storefront_core::ValidationError;
use storefront_db::DbError;
use thiserror::Error;

use crate::config::ConfigError;

/// Everything the catalog binary can fail with.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid listing option: {0}")]
    InvalidOption(#[from] ValidationError),

    #[error(transparent)]
    Db(#[from] DbError),

    #[error("Failed to render page: {0}")]
    Render(#[from] serde_json::Error),
}

impl AppError {
    /// Process exit code.
    ///
    /// ```text
    /// 2  bad input (page id, page size, config values)
    /// 3  database unreachable
    /// 1  anything else
    /// ```
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Config(_) | AppError::InvalidOption(_) => 2,
            AppError::Db(e) if e.is_invalid_argument() => 2,
            AppError::Db(e) if e.is_unavailable() => 3,
            _ => 1,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let invalid: AppError = DbError::from(ValidationError::MustNotBeNegative {
            field: "page_index".to_string(),
            value: -1,
        })
        .into();
        assert_eq!(invalid.exit_code(), 2);

        let unavailable: AppError = DbError::PoolExhausted.into();
        assert_eq!(unavailable.exit_code(), 3);

        let other: AppError = DbError::Internal("boom".to_string()).into();
        assert_eq!(other.exit_code(), 1);

        let option: AppError = ValidationError::TooLong {
            field: "query".to_string(),
            max: 200,
        }
        .into();
        assert_eq!(option.exit_code(), 2);

        let config: AppError = ConfigError::MissingRequired("database_path".to_string()).into();
        assert_eq!(config.exit_code(), 2);
    }
}
