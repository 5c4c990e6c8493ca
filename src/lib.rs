//! Goalie is a service for tracking progress towards personal savings goals.
//!
//! The goals themselves are stored elsewhere. This library takes a user's goal
//! collection and derives the views a dashboard needs: the filtered and sorted
//! goal list, summary statistics, and a running-balance timeline per goal.
//! The views are available both as plain functions and as a JSON REST API.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod app_state;
pub mod dashboard;
pub mod endpoints;
pub mod goal;
mod logging;
mod routing;
pub mod timeline;
mod timezone;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use timezone::get_timezone;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty string was used as a goal name.
    #[error("goal name cannot be empty")]
    EmptyGoalName,

    /// A goal target was zero, negative or not a number.
    #[error("target value must be a number greater than zero, got {0}")]
    InvalidTargetValue(f64),

    /// A goal's saved amount was negative or not a number.
    #[error("current value must be a number of at least zero, got {0}")]
    InvalidCurrentValue(f64),

    /// A contribution amount was zero, negative or not a number.
    #[error("contribution amount must be a number greater than zero, got {0}")]
    InvalidContributionAmount(f64),

    /// A contribution type other than "deposit" or "withdrawal".
    #[error("unknown contribution type \"{0}\", expected \"deposit\" or \"withdrawal\"")]
    UnknownContributionType(String),

    /// A category that is not one of the known goal categories.
    #[error("unknown goal category \"{0}\"")]
    UnknownCategory(String),

    /// A contribution timestamp that could not be parsed.
    #[error("could not parse timestamp \"{0}\"")]
    InvalidTimestamp(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,
}

impl Error {
    /// Whether the error was caused by bad input from the client.
    fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::EmptyGoalName
                | Error::InvalidTargetValue(_)
                | Error::InvalidCurrentValue(_)
                | Error::InvalidContributionAmount(_)
                | Error::UnknownContributionType(_)
                | Error::UnknownCategory(_)
                | Error::InvalidTimestamp(_)
        )
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Error::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            error if error.is_client_error() => (StatusCode::BAD_REQUEST, error.to_string()),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred, check the server logs for more details."
                        .to_owned(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod error_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::Error;

    async fn body_json(error: Error) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn validation_errors_are_bad_requests() {
        let (status, body) = body_json(Error::UnknownCategory("boats".to_owned())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "unknown goal category \"boats\"");
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let (status, _) = body_json(Error::NotFound).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn server_errors_hide_details() {
        let (status, body) = body_json(Error::InvalidTimezoneError("Mars/Base".to_owned())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body["error"].as_str().unwrap().contains("Mars"));
    }
}
