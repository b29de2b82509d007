// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The field normalizer.
//!
//! Server records arrive in several shapes: field names vary in casing and
//! nesting depending on which endpoint (and which serializer) produced them.
//! Each canonical field is resolved through an explicit ordered list of
//! candidate JSON paths, first non-empty match wins. Normalization is pure;
//! malformed records are skipped and counted, never dropped silently.

use gearguard_domain::{EquipmentRef, Priority, RequestType, Ticket, TicketStatus};
use serde_json::Value;
use std::str::FromStr;
use tracing::{debug, warn};

/// Candidate paths for the ticket status, in resolution order.
const STATUS_PATHS: &[&[&str]] = &[&["status"], &["Status"]];

/// Candidate paths for the assignee display name. Covers the flat camelCase
/// shape, the nested technician-detail object, the nested generic-user
/// object, and the flat snake_case shape.
const ASSIGNEE_PATHS: &[&[&str]] = &[
    &["assignedTo"],
    &["assigned_technician_details", "full_name"],
    &["assigned_user", "full_name"],
    &["assigned_to"],
];

/// Candidate paths for the equipment display name.
const EQUIPMENT_NAME_PATHS: &[&[&str]] = &[
    &["equipmentName"],
    &["equipment_details", "name"],
    &["equipment_name"],
    &["equipment", "name"],
];

/// Candidate paths for the equipment id. The flat `equipment` key holds a
/// bare id on some endpoints and an object on others.
const EQUIPMENT_ID_PATHS: &[&[&str]] = &[
    &["equipment"],
    &["equipment", "id"],
    &["equipmentId"],
    &["equipment_id"],
    &["equipment_details", "id"],
];

/// Candidate paths for the request type.
const REQUEST_TYPE_PATHS: &[&[&str]] = &[&["type"], &["request_type"]];

const CREATED_AT_PATHS: &[&[&str]] = &[&["created_at"], &["createdAt"], &["createdDate"]];
const SCHEDULED_DATE_PATHS: &[&[&str]] = &[&["scheduled_date"], &["scheduledDate"]];
const DURATION_PATHS: &[&[&str]] = &[&["duration_hours"], &["durationHours"]];

/// The result of normalizing a batch of raw records.
///
/// A batch with N malformed records out of M total still yields the other
/// M−N tickets.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NormalizedBatch {
    /// The canonical tickets, in input order.
    pub tickets: Vec<Ticket>,
    /// Records skipped because they carried no usable id.
    pub skipped_missing_id: usize,
    /// Records skipped because their status matched no known column.
    pub skipped_unknown_status: usize,
}

impl NormalizedBatch {
    /// Returns the total number of skipped records.
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped_missing_id + self.skipped_unknown_status
    }
}

/// Why a single record could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The record carried no usable integer id.
    MissingId,
    /// The record's status matched no known column. Carries the ticket id
    /// and the offending value for logging.
    UnknownStatus {
        /// The ticket id.
        ticket_id: i64,
        /// The unrecognized status value, if any was present.
        status: Option<String>,
    },
}

/// Normalizes a full fetch worth of raw records.
///
/// Skipped records are logged at `warn` and counted in the returned batch.
#[must_use]
pub fn normalize_all(records: &[Value]) -> NormalizedBatch {
    let mut batch: NormalizedBatch = NormalizedBatch::default();
    for record in records {
        match normalize_record(record) {
            Ok(ticket) => batch.tickets.push(ticket),
            Err(SkipReason::MissingId) => {
                warn!("Skipping ticket record without id");
                batch.skipped_missing_id += 1;
            }
            Err(SkipReason::UnknownStatus { ticket_id, status }) => {
                warn!(
                    ticket_id,
                    status = status.as_deref().unwrap_or("<absent>"),
                    "Skipping ticket with unknown status"
                );
                batch.skipped_unknown_status += 1;
            }
        }
    }
    batch
}

/// Normalizes one raw server record into a canonical [`Ticket`].
///
/// # Errors
///
/// Returns a [`SkipReason`] when the record carries no id or an
/// unrecognized status. Every other irregularity is absorbed: missing
/// assignee means unassigned, missing priority is defaulted from the request
/// type, and an unresolvable equipment name falls back to a synthetic label.
pub fn normalize_record(record: &Value) -> Result<Ticket, SkipReason> {
    let Some(id) = record.get("id").and_then(Value::as_i64) else {
        return Err(SkipReason::MissingId);
    };

    let raw_status: Option<String> = first_string(record, STATUS_PATHS);
    let status: TicketStatus = raw_status
        .as_deref()
        .and_then(|s| TicketStatus::from_str(s).ok())
        .ok_or_else(|| SkipReason::UnknownStatus {
            ticket_id: id,
            status: raw_status.clone(),
        })?;

    let request_type: RequestType = first_string(record, REQUEST_TYPE_PATHS)
        .as_deref()
        .and_then(|s| RequestType::parse(s).ok())
        .unwrap_or(RequestType::Preventive);

    let priority: Priority = match first_string(record, &[&["priority"]]) {
        Some(raw) => Priority::parse(&raw).unwrap_or_else(|_| {
            debug!(ticket_id = id, priority = %raw, "Unknown priority, using default");
            Priority::default_for(request_type)
        }),
        None => Priority::default_for(request_type),
    };

    let equipment_id: i64 = first_i64(record, EQUIPMENT_ID_PATHS).unwrap_or(0);
    let equipment_name: String = first_string(record, EQUIPMENT_NAME_PATHS)
        .unwrap_or_else(|| EquipmentRef::synthetic_label(equipment_id));

    Ok(Ticket {
        id,
        subject: first_string(record, &[&["subject"]]).unwrap_or_default(),
        description: first_string(record, &[&["description"]]).unwrap_or_default(),
        status,
        priority,
        request_type,
        equipment: EquipmentRef::new(equipment_id, equipment_name),
        assigned_to: first_string(record, ASSIGNEE_PATHS),
        created_at: first_string(record, CREATED_AT_PATHS),
        scheduled_date: first_string(record, SCHEDULED_DATE_PATHS),
        duration_hours: first_f64(record, DURATION_PATHS),
    })
}

/// Walks a dotted path into a JSON value.
fn lookup<'a>(record: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current: &Value = record;
    for key in path {
        current = current.get(key)?;
    }
    Some(current)
}

/// Resolves the first candidate path holding a non-empty string.
fn first_string(record: &Value, candidates: &[&[&str]]) -> Option<String> {
    candidates.iter().find_map(|path| {
        lookup(record, path)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .map(String::from)
    })
}

/// Resolves the first candidate path holding an integer.
fn first_i64(record: &Value, candidates: &[&[&str]]) -> Option<i64> {
    candidates
        .iter()
        .find_map(|path| lookup(record, path).and_then(Value::as_i64))
}

/// Resolves the first candidate path holding a number.
fn first_f64(record: &Value, candidates: &[&[&str]]) -> Option<f64> {
    candidates
        .iter()
        .find_map(|path| lookup(record, path).and_then(Value::as_f64))
}
