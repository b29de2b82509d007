// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gearguard_domain::{DomainError, TicketStatus};

/// Errors that can occur during board mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// A ticket id was not found in the expected column.
    ///
    /// Callers are expected to pass ids taken from the board itself, so this
    /// indicates a programming error rather than a recoverable condition.
    TicketNotInColumn {
        /// The ticket id.
        ticket_id: i64,
        /// The column that was searched.
        column: TicketStatus,
    },
    /// A ticket id was not found anywhere on the board.
    TicketNotFound {
        /// The ticket id.
        ticket_id: i64,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::TicketNotInColumn { ticket_id, column } => {
                write!(f, "Ticket {ticket_id} not found in column {column}")
            }
            Self::TicketNotFound { ticket_id } => {
                write!(f, "Ticket {ticket_id} not found on the board")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
