// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, EquipmentRef, Priority, RequestType, Ticket, TicketStatus, validate_completion,
    validate_duration_hours, validate_subject,
};

fn create_test_ticket(status: TicketStatus, duration_hours: Option<f64>) -> Ticket {
    Ticket {
        id: 1,
        subject: String::from("Hydraulic leak"),
        description: String::from("Oil pooling under the press"),
        status,
        priority: Priority::High,
        request_type: RequestType::Corrective,
        equipment: EquipmentRef::new(4, String::from("Hydraulic Press X1")),
        assigned_to: None,
        created_at: Some(String::from("2026-02-10")),
        scheduled_date: None,
        duration_hours,
    }
}

// ============================================================================
// Duration Hours Tests
// ============================================================================

#[test]
fn test_duration_hours_accepts_positive_value() {
    assert!(validate_duration_hours(2.5).is_ok());
    assert!(validate_duration_hours(0.5).is_ok());
}

#[test]
fn test_duration_hours_rejects_zero() {
    let result = validate_duration_hours(0.0);

    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err(),
        DomainError::InvalidDurationHours { .. }
    ));
}

#[test]
fn test_duration_hours_rejects_negative_value() {
    assert!(validate_duration_hours(-1.0).is_err());
}

#[test]
fn test_duration_hours_rejects_non_finite_values() {
    assert!(validate_duration_hours(f64::NAN).is_err());
    assert!(validate_duration_hours(f64::INFINITY).is_err());
}

// ============================================================================
// Completion Invariant Tests
// ============================================================================

#[test]
fn test_repaired_ticket_with_duration_is_valid() {
    let ticket = create_test_ticket(TicketStatus::Repaired, Some(3.0));
    assert!(validate_completion(&ticket).is_ok());
}

#[test]
fn test_repaired_ticket_without_duration_is_invalid() {
    let ticket = create_test_ticket(TicketStatus::Repaired, None);
    let result = validate_completion(&ticket);

    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err(),
        DomainError::CompletionDataMismatch {
            ticket_id: 1,
            status: TicketStatus::Repaired,
            has_duration: false,
        }
    ));
}

#[test]
fn test_non_repaired_ticket_with_duration_is_invalid() {
    let ticket = create_test_ticket(TicketStatus::InProgress, Some(3.0));
    let result = validate_completion(&ticket);

    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err(),
        DomainError::CompletionDataMismatch {
            has_duration: true,
            ..
        }
    ));
}

#[test]
fn test_non_repaired_ticket_without_duration_is_valid() {
    let ticket = create_test_ticket(TicketStatus::New, None);
    assert!(validate_completion(&ticket).is_ok());
}

// ============================================================================
// Subject Tests
// ============================================================================

#[test]
fn test_subject_accepts_non_empty_text() {
    assert!(validate_subject("Vibration issue").is_ok());
}

#[test]
fn test_subject_rejects_empty_text() {
    let result = validate_subject("");

    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err(),
        DomainError::InvalidSubject(_)
    ));
}

#[test]
fn test_subject_rejects_whitespace_only_text() {
    assert!(validate_subject("   ").is_err());
}
