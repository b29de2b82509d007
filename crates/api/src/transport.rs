// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The network seam.
//!
//! The board core never talks to the server directly; it goes through
//! [`TicketTransport`]. Implementors own retry and timeout policy and
//! auth-token attachment. The trait deals in raw `serde_json::Value`
//! records because the server's shapes are heterogeneous; normalization
//! happens on this side of the seam.

use gearguard_board::TicketPatch;
use gearguard_domain::{Priority, RequestType, TicketStatus, validate_subject};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::error::ApiError;

/// Errors reported by a transport implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request could not be delivered.
    #[error("network error: {0}")]
    Network(String),
    /// The request timed out after the transport's retry policy was
    /// exhausted.
    #[error("request timed out")]
    Timeout,
    /// Authorization failed and the transport's token refresh did not
    /// recover it.
    #[error("unauthorized")]
    Unauthorized,
    /// The server answered with a failure status.
    #[error("server returned {status}: {message}")]
    Server {
        /// The HTTP status code.
        status: u16,
        /// The server's error body, if any.
        message: String,
    },
}

/// The update sent upstream when a ticket changes.
///
/// Only fields present in the patch are serialized, so the server receives
/// a partial update rather than a full record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdatePayload {
    /// New status wire string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TicketStatus>,
    /// New assignee display name.
    #[serde(rename = "assignedTo", skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    /// Duration hours recorded on completion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_hours: Option<f64>,
}

impl From<&TicketPatch> for UpdatePayload {
    fn from(patch: &TicketPatch) -> Self {
        Self {
            status: patch.status,
            assigned_to: patch.assigned_to.clone(),
            duration_hours: patch.duration_hours,
        }
    }
}

/// A new ticket as drafted by a reporting actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketDraft {
    /// Short summary of the issue.
    pub subject: String,
    /// Full description.
    pub description: String,
    /// The equipment the ticket concerns.
    pub equipment: i64,
    /// Corrective or preventive.
    pub request_type: RequestType,
    /// Explicit priority; the server defaults it from the type when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    /// Scheduled date (ISO 8601). Required for preventive requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<String>,
}

impl TicketDraft {
    /// Validates the draft before it is sent anywhere.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` if the subject is empty or a
    /// preventive draft carries no scheduled date.
    pub fn validate(&self) -> Result<(), ApiError> {
        validate_subject(&self.subject).map_err(crate::error::translate_domain_error)?;
        if self.request_type == RequestType::Preventive && self.scheduled_date.is_none() {
            return Err(ApiError::InvalidInput {
                field: String::from("scheduled_date"),
                message: String::from("Preventive requests require a scheduled date"),
            });
        }
        Ok(())
    }
}

/// The ticket transport consumed by the board operations.
///
/// `fetch_all_tickets` returns the raw records of every ticket visible to
/// the session; `update_ticket` sends a partial update and returns the
/// server's updated record; `create_ticket` posts a draft and returns the
/// created record.
pub trait TicketTransport {
    /// Fetches the raw records of all tickets.
    ///
    /// # Errors
    ///
    /// Returns a `TransportError` on any delivery or server failure.
    fn fetch_all_tickets(&self) -> Result<Vec<Value>, TransportError>;

    /// Sends a partial update for one ticket and returns the server's
    /// updated raw record.
    ///
    /// # Errors
    ///
    /// Returns a `TransportError` on any delivery or server failure.
    fn update_ticket(&self, ticket_id: i64, payload: &UpdatePayload)
    -> Result<Value, TransportError>;

    /// Creates a ticket from a draft and returns the server's raw record.
    ///
    /// # Errors
    ///
    /// Returns a `TransportError` on any delivery or server failure.
    fn create_ticket(&self, draft: &TicketDraft) -> Result<Value, TransportError>;
}
