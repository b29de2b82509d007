// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::transport::TransportError;
use gearguard_board::CoreError;
use gearguard_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
/// Expected conditions (rejected transitions, missing input) are reported as
/// outcomes, not errors; an `ApiError` means the operation could not produce
/// a trustworthy board at all.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The transport failed and the board could not be re-fetched, so local
    /// state is no longer known to match the server.
    Transport {
        /// A human-readable description of the failure.
        message: String,
    },
    /// The transport reported an authorization failure. The embedding
    /// application should invalidate the session.
    SessionExpired,
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// An internal error occurred (a programming error, such as referencing
    /// a ticket id that is not on the board).
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport { message } => write!(f, "Transport failure: {message}"),
            Self::SessionExpired => write!(f, "Session expired"),
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::UnknownStatus(status) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Unknown ticket status: '{status}'"),
        },
        DomainError::UnknownPriority(priority) => ApiError::InvalidInput {
            field: String::from("priority"),
            message: format!("Unknown priority: '{priority}'"),
        },
        DomainError::UnknownRequestType(request_type) => ApiError::InvalidInput {
            field: String::from("request_type"),
            message: format!("Unknown request type: '{request_type}'"),
        },
        DomainError::UnknownRole(role) => ApiError::InvalidInput {
            field: String::from("role"),
            message: format!("Unknown role: '{role}'"),
        },
        DomainError::InvalidDurationHours { value } => ApiError::InvalidInput {
            field: String::from("duration_hours"),
            message: format!("Invalid duration hours: {value}. Must be a positive number"),
        },
        DomainError::CompletionDataMismatch { .. } => ApiError::Internal {
            message: err.to_string(),
        },
        DomainError::InvalidSubject(message) => ApiError::InvalidInput {
            field: String::from("subject"),
            message,
        },
        DomainError::MissingScheduledDate => ApiError::InvalidInput {
            field: String::from("scheduled_date"),
            message: String::from("Preventive requests require a scheduled date"),
        },
    }
}

/// Translates a core error into an API error.
///
/// Board-consistency violations are programming errors from the API's
/// perspective; they surface as `Internal`.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::TicketNotInColumn { .. } | CoreError::TicketNotFound { .. } => {
            ApiError::Internal {
                message: err.to_string(),
            }
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Unauthorized => Self::SessionExpired,
            _ => Self::Transport {
                message: err.to_string(),
            },
        }
    }
}
