// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field-level validation rules for tickets.

use crate::error::DomainError;
use crate::ticket_status::TicketStatus;
use crate::types::Ticket;

/// Validates a duration-hours value supplied on completion.
///
/// The value must be finite and strictly positive.
///
/// # Errors
///
/// Returns `DomainError::InvalidDurationHours` if the value is not a
/// positive, finite number.
pub fn validate_duration_hours(value: f64) -> Result<(), DomainError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(DomainError::InvalidDurationHours { value })
    }
}

/// Validates the completion invariant on a ticket.
///
/// `duration_hours` must be present if and only if the status is `Repaired`.
///
/// # Errors
///
/// Returns `DomainError::CompletionDataMismatch` if the invariant does not
/// hold.
pub fn validate_completion(ticket: &Ticket) -> Result<(), DomainError> {
    let is_repaired: bool = ticket.status == TicketStatus::Repaired;
    if is_repaired == ticket.duration_hours.is_some() {
        Ok(())
    } else {
        Err(DomainError::CompletionDataMismatch {
            ticket_id: ticket.id,
            status: ticket.status,
            has_duration: ticket.duration_hours.is_some(),
        })
    }
}

/// Validates a ticket subject.
///
/// # Errors
///
/// Returns `DomainError::InvalidSubject` if the subject is empty or
/// whitespace-only.
pub fn validate_subject(subject: &str) -> Result<(), DomainError> {
    if subject.trim().is_empty() {
        return Err(DomainError::InvalidSubject(String::from(
            "Subject cannot be empty",
        )));
    }
    Ok(())
}
