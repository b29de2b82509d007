// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ticket_status::TicketStatus;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Ticket status string is not one of the four recognized values.
    UnknownStatus(String),
    /// Priority string is not recognized.
    UnknownPriority(String),
    /// Request type string is not recognized.
    UnknownRequestType(String),
    /// Role string is not recognized.
    UnknownRole(String),
    /// Duration hours must be a finite, strictly positive number.
    InvalidDurationHours {
        /// The rejected value.
        value: f64,
    },
    /// A completed ticket must carry duration hours, and only a completed
    /// ticket may carry them.
    CompletionDataMismatch {
        /// The ticket id.
        ticket_id: i64,
        /// The ticket's status.
        status: TicketStatus,
        /// Whether duration hours were present.
        has_duration: bool,
    },
    /// Ticket subject is empty or invalid.
    InvalidSubject(String),
    /// Preventive requests require a scheduled date.
    MissingScheduledDate,
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStatus(status) => write!(f, "Unknown ticket status: '{status}'"),
            Self::UnknownPriority(priority) => write!(f, "Unknown priority: '{priority}'"),
            Self::UnknownRequestType(request_type) => {
                write!(f, "Unknown request type: '{request_type}'")
            }
            Self::UnknownRole(role) => write!(f, "Unknown role: '{role}'"),
            Self::InvalidDurationHours { value } => {
                write!(
                    f,
                    "Invalid duration hours: {value}. Must be a positive number"
                )
            }
            Self::CompletionDataMismatch {
                ticket_id,
                status,
                has_duration,
            } => {
                if *has_duration {
                    write!(
                        f,
                        "Ticket {ticket_id} carries duration hours but has status {status}"
                    )
                } else {
                    write!(
                        f,
                        "Ticket {ticket_id} has status {status} but no duration hours"
                    )
                }
            }
            Self::InvalidSubject(msg) => write!(f, "Invalid subject: {msg}"),
            Self::MissingScheduledDate => {
                write!(f, "Preventive requests require a scheduled date")
            }
        }
    }
}

impl std::error::Error for DomainError {}
