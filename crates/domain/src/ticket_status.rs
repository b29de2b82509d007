// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ticket status states and transition logic.
//!
//! Status transitions are actor-initiated only; the system never advances
//! a ticket on its own. `Repaired` and `Scrap` are terminal.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle status of a maintenance ticket.
///
/// Each status corresponds to one board column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    /// Newly reported, not yet picked up.
    New,
    /// A technician is working the ticket.
    InProgress,
    /// Work completed. Terminal.
    Repaired,
    /// Equipment written off. Terminal.
    Scrap,
}

impl TicketStatus {
    /// All statuses in board column order.
    pub const ALL: [Self; 4] = [Self::New, Self::InProgress, Self::Repaired, Self::Scrap];

    /// Returns the wire string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::InProgress => "IN_PROGRESS",
            Self::Repaired => "REPAIRED",
            Self::Scrap => "SCRAP",
        }
    }

    /// Returns true if no further transition out of this status is permitted.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Repaired | Self::Scrap)
    }

    /// Checks if a transition from this status to another is valid.
    ///
    /// Same-status "transitions" are always valid (they are board reorders).
    /// Transitions out of a terminal status are never valid; everything else
    /// is permitted.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        if matches!(
            (self, target),
            (Self::New, Self::New)
                | (Self::InProgress, Self::InProgress)
                | (Self::Repaired, Self::Repaired)
                | (Self::Scrap, Self::Scrap)
        ) {
            return true;
        }
        !self.is_terminal()
    }
}

impl FromStr for TicketStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NEW" => Ok(Self::New),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "REPAIRED" => Ok(Self::Repaired),
            "SCRAP" => Ok(Self::Scrap),
            _ => Err(DomainError::UnknownStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
