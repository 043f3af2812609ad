use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("validation failed: {0}")]
    Validation(&'static str),

    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: i64 },

    #[error(transparent)]
    Bracket(#[from] scoring::bracket::BracketError),

    #[error(transparent)]
    Phase(#[from] scoring::phase::PhaseError),

    #[error("slot already decided for team {existing}, refusing team {incoming}")]
    ConcurrencyConflict { existing: i64, incoming: i64 },

    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
}

impl From<scoring::bracket::SlotConflict> for CoreError {
    fn from(conflict: scoring::bracket::SlotConflict) -> Self {
        CoreError::ConcurrencyConflict {
            existing: conflict.existing,
            incoming: conflict.incoming,
        }
    }
}

impl CoreError {
    pub fn not_found(kind: &'static str, id: i64) -> Self {
        CoreError::NotFound { kind, id }
    }

    fn status(&self) -> StatusCode {
        match self {
            CoreError::Validation(_) => StatusCode::BAD_REQUEST,
            CoreError::NotFound { .. } => StatusCode::NOT_FOUND,
            CoreError::Bracket(scoring::bracket::BracketError::InsufficientEntrants(_)) => {
                StatusCode::BAD_REQUEST
            }
            CoreError::Bracket(scoring::bracket::BracketError::NoMatchesGenerated) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            CoreError::Phase(_) => StatusCode::BAD_REQUEST,
            CoreError::ConcurrencyConflict { .. } => StatusCode::CONFLICT,
            CoreError::Database(diesel::result::Error::NotFound) => StatusCode::NOT_FOUND,
            CoreError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl axum::response::IntoResponse for CoreError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Request failed: {:?}", self);
        } else {
            tracing::debug!("Rejecting request: {}", self);
        }

        (status, self.to_string()).into_response()
    }
}
