// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::ticket_status::TicketStatus;
use serde::{Deserialize, Serialize};

/// Priority of a maintenance ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    /// Routine, no urgency.
    Low,
    /// Default for preventive work.
    Medium,
    /// Default for corrective work.
    High,
    /// Production-blocking.
    Critical,
}

impl Priority {
    /// Parses a priority from its wire string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownPriority` if the string is not recognized.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "LOW" => Ok(Self::Low),
            "MEDIUM" => Ok(Self::Medium),
            "HIGH" => Ok(Self::High),
            "CRITICAL" => Ok(Self::Critical),
            _ => Err(DomainError::UnknownPriority(s.to_string())),
        }
    }

    /// Returns the wire string representation of this priority.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }

    /// Returns the priority a ticket defaults to when the server record
    /// carries none.
    ///
    /// Corrective (breakdown) work defaults to `High`; everything else is
    /// routine and defaults to `Medium`.
    #[must_use]
    pub const fn default_for(request_type: RequestType) -> Self {
        match request_type {
            RequestType::Corrective => Self::High,
            RequestType::Preventive => Self::Medium,
        }
    }
}

/// Classification of a maintenance request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestType {
    /// Breakdown repair.
    Corrective,
    /// Routine scheduled maintenance.
    Preventive,
}

impl RequestType {
    /// Parses a request type from its wire string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownRequestType` if the string is not
    /// recognized.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "CORRECTIVE" => Ok(Self::Corrective),
            "PREVENTIVE" => Ok(Self::Preventive),
            _ => Err(DomainError::UnknownRequestType(s.to_string())),
        }
    }

    /// Returns the wire string representation of this request type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Corrective => "CORRECTIVE",
            Self::Preventive => "PREVENTIVE",
        }
    }
}

/// Roles held by authenticated actors.
///
/// Roles determine board visibility and which transitions an actor may
/// trigger. They are supplied by the external auth collaborator and are
/// read-only here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Full administrative access.
    Admin,
    /// Oversees teams and equipment; sees every ticket.
    Manager,
    /// Performs maintenance work; sees own and unassigned tickets.
    Technician,
    /// Reports issues; no board authority beyond viewing.
    User,
}

impl Role {
    /// Parses a role from its wire string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownRole` if the string is not recognized.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "ADMIN" => Ok(Self::Admin),
            "MANAGER" => Ok(Self::Manager),
            "TECHNICIAN" => Ok(Self::Technician),
            "USER" => Ok(Self::User),
            _ => Err(DomainError::UnknownRole(s.to_string())),
        }
    }

    /// Returns the wire string representation of this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Manager => "MANAGER",
            Self::Technician => "TECHNICIAN",
            Self::User => "USER",
        }
    }

    /// Returns whether this role may claim unassigned tickets.
    #[must_use]
    pub const fn can_self_assign(&self) -> bool {
        matches!(self, Self::Technician)
    }
}

/// The current authenticated user.
///
/// Supplied by the external auth collaborator; read-only from the board's
/// perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Server-assigned identifier.
    pub id: i64,
    /// Display name. Assignee matching compares against this value.
    pub name: String,
    /// The actor's role.
    pub role: Role,
}

impl Actor {
    /// Creates a new `Actor`.
    #[must_use]
    pub const fn new(id: i64, name: String, role: Role) -> Self {
        Self { id, name, role }
    }
}

/// Reference to a piece of equipment: id plus display name.
///
/// The display name may be a synthetic `Equipment #<id>` label when the
/// server record resolved no name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentRef {
    /// Server-assigned equipment id.
    pub id: i64,
    /// Display name.
    pub name: String,
}

impl EquipmentRef {
    /// Creates a new `EquipmentRef`.
    #[must_use]
    pub const fn new(id: i64, name: String) -> Self {
        Self { id, name }
    }

    /// Builds the synthetic display label used when no name is resolvable.
    #[must_use]
    pub fn synthetic_label(id: i64) -> String {
        format!("Equipment #{id}")
    }
}

/// A canonical maintenance ticket.
///
/// This is the single shape produced by normalization from heterogeneous
/// server records. A ticket belongs to exactly one board column at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Server-assigned identifier. Immutable.
    pub id: i64,
    /// Short summary of the issue.
    pub subject: String,
    /// Full description.
    pub description: String,
    /// Lifecycle status; determines the board column.
    pub status: TicketStatus,
    /// Priority, always present (defaulted from the request type if the
    /// server record carried none).
    pub priority: Priority,
    /// Corrective or preventive.
    pub request_type: RequestType,
    /// The equipment this ticket concerns.
    pub equipment: EquipmentRef,
    /// Display name of the assigned technician. `None` means unassigned.
    pub assigned_to: Option<String>,
    /// Creation date (ISO 8601 string, as received).
    pub created_at: Option<String>,
    /// Scheduled date for preventive work (ISO 8601 string, as received).
    pub scheduled_date: Option<String>,
    /// Hours the repair took. Present if and only if status is `Repaired`.
    pub duration_hours: Option<f64>,
}

impl Ticket {
    /// Returns whether a technician is assigned.
    #[must_use]
    pub const fn is_assigned(&self) -> bool {
        self.assigned_to.is_some()
    }
}
