// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The transition engine.
//!
//! Pure decision functions: given a proposed move and the acting user, they
//! return whether the move is allowed and what patch it requires. They never
//! mutate the board; applying a patch is the sync layer's job.

use gearguard_domain::{Actor, Ticket, TicketStatus, validate_duration_hours};

/// A field-level change to a ticket, produced by the engine and applied by
/// the sync layer (locally and over the wire).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TicketPatch {
    /// New status, if the move changes columns.
    pub status: Option<TicketStatus>,
    /// New assignee display name.
    pub assigned_to: Option<String>,
    /// Duration hours recorded on completion.
    pub duration_hours: Option<f64>,
}

impl TicketPatch {
    /// Returns whether the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.status.is_none() && self.assigned_to.is_none() && self.duration_hours.is_none()
    }
}

/// Input the caller must collect before a move can be committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredInput {
    /// A positive duration-hours value, required when completing a ticket.
    DurationHours,
}

impl std::fmt::Display for RequiredInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DurationHours => write!(f, "duration_hours"),
        }
    }
}

/// Why the engine rejected a proposed action.
#[derive(Debug, Clone, PartialEq)]
pub enum RejectReason {
    /// The ticket sits in a terminal status; nothing moves out of it.
    TerminalStatus {
        /// The terminal status.
        status: TicketStatus,
    },
    /// Only technicians may claim tickets.
    RoleCannotClaim {
        /// The role string of the actor who tried.
        role: String,
    },
    /// The ticket already has an assignee.
    AlreadyAssigned {
        /// The current assignee.
        assignee: String,
    },
    /// The supplied completion input was invalid.
    InvalidInput {
        /// A human-readable description.
        message: String,
    },
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TerminalStatus { status } => {
                write!(f, "Tickets cannot be moved out of {status}")
            }
            Self::RoleCannotClaim { role } => {
                write!(f, "Role {role} cannot claim tickets")
            }
            Self::AlreadyAssigned { assignee } => {
                write!(f, "Ticket is already assigned to {assignee}")
            }
            Self::InvalidInput { message } => write!(f, "{message}"),
        }
    }
}

/// The engine's verdict on a proposed action.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    /// The action may proceed with the given patch.
    Allowed {
        /// The fields the action changes. Empty for pure reorders.
        patch: TicketPatch,
    },
    /// The action needs caller-collected input before it can be evaluated
    /// further. The board must not change until the input is supplied.
    NeedsInput {
        /// What to collect.
        input: RequiredInput,
    },
    /// The action is not allowed.
    Rejected {
        /// Why.
        reason: RejectReason,
    },
}

/// Evaluates a proposed column move.
///
/// Rules, in order:
/// - same source and destination: allowed, empty patch (pure reorder);
/// - source is terminal (`Repaired`, `Scrap`): rejected — terminal tickets
///   never regress;
/// - destination is `Repaired`: the caller must collect a duration-hours
///   value first; see [`evaluate_completion`];
/// - destination is `IN_PROGRESS` with an unassigned ticket and a technician
///   actor: allowed, and the patch also claims the ticket for the actor;
/// - anything else: allowed with a status-only patch.
///
/// Moving into `Scrap` additionally requires explicit actor confirmation.
/// That confirmation is a UI concern; callers are expected to have obtained
/// it before invoking the engine.
#[must_use]
pub fn evaluate(
    ticket: &Ticket,
    source: TicketStatus,
    dest: TicketStatus,
    actor: &Actor,
) -> Decision {
    if source == dest {
        return Decision::Allowed {
            patch: TicketPatch::default(),
        };
    }
    if source.is_terminal() {
        return Decision::Rejected {
            reason: RejectReason::TerminalStatus { status: source },
        };
    }
    if dest == TicketStatus::Repaired {
        return Decision::NeedsInput {
            input: RequiredInput::DurationHours,
        };
    }

    let assigned_to: Option<String> = if dest == TicketStatus::InProgress {
        auto_claim(ticket, actor)
    } else {
        None
    };

    Decision::Allowed {
        patch: TicketPatch {
            status: Some(dest),
            assigned_to,
            duration_hours: None,
        },
    }
}

/// Evaluates a completion move once the caller has collected duration hours.
///
/// Applies the same source checks as [`evaluate`], validates the supplied
/// value, and yields the full completion patch: status `Repaired` plus the
/// recorded duration.
#[must_use]
pub fn evaluate_completion(
    source: TicketStatus,
    duration_hours: f64,
) -> Decision {
    if source.is_terminal() {
        return Decision::Rejected {
            reason: RejectReason::TerminalStatus { status: source },
        };
    }
    if let Err(err) = validate_duration_hours(duration_hours) {
        return Decision::Rejected {
            reason: RejectReason::InvalidInput {
                message: err.to_string(),
            },
        };
    }

    Decision::Allowed {
        patch: TicketPatch {
            status: Some(TicketStatus::Repaired),
            assigned_to: None,
            duration_hours: Some(duration_hours),
        },
    }
}

/// Evaluates an explicit "assign me" request, independent of any column move.
///
/// Allowed only for technicians, and only on unassigned tickets. The patch
/// sets the assignee and leaves the status unchanged.
#[must_use]
pub fn evaluate_self_assign(ticket: &Ticket, actor: &Actor) -> Decision {
    if !actor.role.can_self_assign() {
        return Decision::Rejected {
            reason: RejectReason::RoleCannotClaim {
                role: actor.role.as_str().to_string(),
            },
        };
    }
    if let Some(assignee) = &ticket.assigned_to {
        return Decision::Rejected {
            reason: RejectReason::AlreadyAssigned {
                assignee: assignee.clone(),
            },
        };
    }

    Decision::Allowed {
        patch: TicketPatch {
            status: None,
            assigned_to: Some(actor.name.clone()),
            duration_hours: None,
        },
    }
}

/// Returns the assignee patch for a technician picking up unassigned work,
/// or `None` when no claim applies.
fn auto_claim(ticket: &Ticket, actor: &Actor) -> Option<String> {
    if actor.role.can_self_assign() && !ticket.is_assigned() {
        Some(actor.name.clone())
    } else {
        None
    }
}
