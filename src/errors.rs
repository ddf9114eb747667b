use axum::http::StatusCode;
use axum::response::IntoResponse;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
    #[error("Failed to {op}: {source}")]
    Query {
        op: &'static str,
        source: sqlx::Error,
    },
    #[error("Failed to {op}: {source}")]
    Mutation {
        op: &'static str,
        source: sqlx::Error,
    },
}

impl AppError {
    /// A failed read statement. Pool acquisition timeouts are surfaced as
    /// storage unavailability rather than a statement failure.
    pub fn query(op: &'static str, source: sqlx::Error) -> Self {
        match source {
            sqlx::Error::PoolTimedOut => {
                AppError::StorageUnavailable(format!("timed out acquiring a connection to {op}"))
            }
            _ => AppError::Query { op, source },
        }
    }

    /// A failed write statement from the upsert path.
    pub fn mutation(op: &'static str, source: sqlx::Error) -> Self {
        match source {
            sqlx::Error::PoolTimedOut => {
                AppError::StorageUnavailable(format!("timed out acquiring a connection to {op}"))
            }
            _ => AppError::Mutation { op, source },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Query { .. } | AppError::Mutation { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_errors_carry_the_operation_name() {
        let err = AppError::query("fetch stocks", sqlx::Error::RowNotFound);
        assert!(err.to_string().starts_with("Failed to fetch stocks"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn pool_timeout_maps_to_storage_unavailable() {
        let err = AppError::query("fetch stocks", sqlx::Error::PoolTimedOut);
        assert!(matches!(err, AppError::StorageUnavailable(_)));
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);

        let err = AppError::mutation("upsert stock", sqlx::Error::PoolTimedOut);
        assert!(matches!(err, AppError::StorageUnavailable(_)));
    }

    #[test]
    fn mutation_errors_are_internal_failures() {
        let err = AppError::mutation("upsert stock", sqlx::Error::RowNotFound);
        assert!(err.to_string().starts_with("Failed to upsert stock"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
