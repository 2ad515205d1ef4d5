use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::OperationOutcome;

/// Error response carrying a FHIR OperationOutcome body
pub struct FhirError {
    pub status: StatusCode,
    pub outcome: OperationOutcome,
}

impl FhirError {
    /// Requested records are absent; a routine outcome, not a fault
    pub fn not_found(message: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            outcome: OperationOutcome::error_with_location("not-found", message, location),
        }
    }

    /// Create server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            outcome: OperationOutcome::error("exception", message),
        }
    }
}

impl IntoResponse for FhirError {
    fn into_response(self) -> Response {
        (self.status, Json(self.outcome)).into_response()
    }
}
