use chrono::NaiveDate;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Structured error body returned by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<Value>,
}

/// Every failure the dashboard core can surface. Each variant keeps the
/// diagnostic detail; [`DashboardError::user_message`] is the only text shown
/// to the user.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Rejected locally before any network call was made.
    #[error("validation failed: {0}")]
    Validation(String),
    /// A second submission for a date whose edit is still unresolved.
    #[error("an edit for {0} is already in flight")]
    EditInFlight(NaiveDate),
    /// HTTP 403.
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    /// HTTP 404.
    #[error("not found: {0}")]
    NotFound(String),
    /// HTTP 400: the server rejected a payload the client considered valid.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// HTTP 5xx or an undecodable response payload.
    #[error("server error: {0}")]
    Server(String),
    /// No response received, connection refused, or timeout.
    #[error("network error: {0}")]
    Network(String),
}

impl DashboardError {
    /// The one user-facing message per classification. Never a raw stack
    /// trace; retrying is always safe.
    pub fn user_message(&self) -> String {
        match self {
            DashboardError::Validation(msg) => msg.clone(),
            DashboardError::EditInFlight(date) => format!(
                "an update for {} is already in progress; wait for it to finish",
                date
            ),
            DashboardError::PermissionDenied(_) => {
                "only managers or admins may update attendance status".to_string()
            }
            DashboardError::NotFound(_) => "employee not found or inactive".to_string(),
            DashboardError::BadRequest(_) => {
                "invalid data; check the status and day-status values".to_string()
            }
            DashboardError::Server(detail) => {
                format!("error updating attendance status: {}", detail)
            }
            DashboardError::Network(_) => {
                "failed to fetch data; check your connection".to_string()
            }
        }
    }

    /// Maps a non-success HTTP response to the taxonomy. The decoded error
    /// body supplies the diagnostic detail when present.
    pub fn from_response(status: StatusCode, body: Option<ErrorResponse>) -> Self {
        let detail = body
            .map(|b| b.error)
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
        match status {
            StatusCode::FORBIDDEN => DashboardError::PermissionDenied(detail),
            StatusCode::NOT_FOUND => DashboardError::NotFound(detail),
            StatusCode::BAD_REQUEST => DashboardError::BadRequest(detail),
            _ => DashboardError::Server(detail),
        }
    }
}

impl From<reqwest::Error> for DashboardError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() || err.is_request() {
            DashboardError::Network(err.to_string())
        } else if err.is_decode() {
            DashboardError::Server(format!("unexpected payload shape: {}", err))
        } else {
            DashboardError::Server(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(msg: &str) -> Option<ErrorResponse> {
        Some(ErrorResponse {
            error: msg.to_string(),
            code: None,
            details: None,
        })
    }

    #[test]
    fn http_statuses_map_to_taxonomy() {
        assert!(matches!(
            DashboardError::from_response(StatusCode::FORBIDDEN, body("no")),
            DashboardError::PermissionDenied(_)
        ));
        assert!(matches!(
            DashboardError::from_response(StatusCode::NOT_FOUND, body("no")),
            DashboardError::NotFound(_)
        ));
        assert!(matches!(
            DashboardError::from_response(StatusCode::BAD_REQUEST, body("no")),
            DashboardError::BadRequest(_)
        ));
        assert!(matches!(
            DashboardError::from_response(StatusCode::INTERNAL_SERVER_ERROR, body("boom")),
            DashboardError::Server(_)
        ));
    }

    #[test]
    fn missing_error_body_falls_back_to_status_code() {
        let err = DashboardError::from_response(StatusCode::BAD_GATEWAY, None);
        match err {
            DashboardError::Server(detail) => assert_eq!(detail, "HTTP 502"),
            other => panic!("expected server error, got {:?}", other),
        }
    }

    #[test]
    fn user_messages_are_distinct_per_classification() {
        let messages = [
            DashboardError::PermissionDenied("x".into()).user_message(),
            DashboardError::NotFound("x".into()).user_message(),
            DashboardError::BadRequest("x".into()).user_message(),
            DashboardError::Server("x".into()).user_message(),
            DashboardError::Network("x".into()).user_message(),
        ];
        for (i, a) in messages.iter().enumerate() {
            for b in messages.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn permission_message_matches_manager_wording() {
        let err = DashboardError::PermissionDenied("forbidden".into());
        assert_eq!(
            err.user_message(),
            "only managers or admins may update attendance status"
        );
    }

    #[test]
    fn server_message_appends_underlying_detail() {
        let err = DashboardError::Server("row lock timeout".into());
        assert!(err.user_message().ends_with("row lock timeout"));
    }
}
