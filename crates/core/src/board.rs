// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The status-partitioned board state.
//!
//! A `Board` is an in-memory structure only: it is rebuilt from a full
//! ticket fetch and mutated by local moves. It never touches the network.

use crate::error::CoreError;
use crate::transition::TicketPatch;
use gearguard_domain::{Actor, Role, Ticket, TicketStatus};

/// The four-column board: one ordered sequence of tickets per status.
///
/// All four columns always exist, possibly empty. A given ticket id appears
/// in exactly one column at any time; moves are remove-then-insert, so the
/// structure cannot produce duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Columns in `TicketStatus::ALL` order.
    columns: [Vec<Ticket>; 4],
}

/// Returns whether a ticket is visible to the given actor.
///
/// Technicians see tickets assigned to them or unassigned tickets they can
/// pick up; every other role sees the full board.
#[must_use]
fn is_visible_to(ticket: &Ticket, actor: &Actor) -> bool {
    if actor.role != Role::Technician {
        return true;
    }
    match &ticket.assigned_to {
        Some(assignee) => *assignee == actor.name,
        None => true,
    }
}

const fn column_index(status: TicketStatus) -> usize {
    match status {
        TicketStatus::New => 0,
        TicketStatus::InProgress => 1,
        TicketStatus::Repaired => 2,
        TicketStatus::Scrap => 3,
    }
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            columns: [Vec::new(), Vec::new(), Vec::new(), Vec::new()],
        }
    }

    /// Rebuilds a board from a full list of canonical tickets, applying the
    /// visibility rule for the given actor.
    ///
    /// The filter is applied once here, at rebuild time. Tickets keep their
    /// input order within each column.
    #[must_use]
    pub fn from_tickets(tickets: Vec<Ticket>, actor: &Actor) -> Self {
        let mut board: Self = Self::new();
        for ticket in tickets {
            if is_visible_to(&ticket, actor) {
                board.columns[column_index(ticket.status)].push(ticket);
            }
        }
        board
    }

    /// Returns the tickets in the given column, in display order.
    #[must_use]
    pub fn column(&self, status: TicketStatus) -> &[Ticket] {
        &self.columns[column_index(status)]
    }

    /// Returns the total number of tickets across all columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    /// Returns whether the board holds no tickets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(Vec::is_empty)
    }

    /// Finds a ticket anywhere on the board.
    ///
    /// Returns the column, the index within that column, and the ticket.
    #[must_use]
    pub fn find(&self, ticket_id: i64) -> Option<(TicketStatus, usize, &Ticket)> {
        for status in TicketStatus::ALL {
            if let Some(index) = self.columns[column_index(status)]
                .iter()
                .position(|t| t.id == ticket_id)
            {
                return Some((status, index, &self.columns[column_index(status)][index]));
            }
        }
        None
    }

    /// Returns all ticket ids on the board, column by column.
    #[must_use]
    pub fn ticket_ids(&self) -> Vec<i64> {
        self.columns
            .iter()
            .flat_map(|column| column.iter().map(|t| t.id))
            .collect()
    }

    /// Moves a ticket from the source column to the destination index.
    ///
    /// The ticket is removed from wherever it sits in the source column and
    /// inserted at `dest_index` in the destination column (clamped to the
    /// column length). Same-column reordering uses the same remove-then-insert
    /// path. The ticket's status field is updated to match its new column.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::TicketNotInColumn` if the ticket is not in the
    /// source column. Callers treat this as a programming error.
    pub fn move_ticket(
        &mut self,
        ticket_id: i64,
        source: TicketStatus,
        dest: TicketStatus,
        dest_index: usize,
    ) -> Result<(), CoreError> {
        let source_column: &mut Vec<Ticket> = &mut self.columns[column_index(source)];
        let Some(source_index) = source_column.iter().position(|t| t.id == ticket_id) else {
            return Err(CoreError::TicketNotInColumn {
                ticket_id,
                column: source,
            });
        };
        let mut ticket: Ticket = source_column.remove(source_index);
        ticket.status = dest;

        let dest_column: &mut Vec<Ticket> = &mut self.columns[column_index(dest)];
        let index: usize = dest_index.min(dest_column.len());
        dest_column.insert(index, ticket);
        Ok(())
    }

    /// Applies a patch to a ticket in place, wherever it sits.
    ///
    /// The patch's status field is intentionally not used to relocate the
    /// ticket; column placement is `move_ticket`'s job.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::TicketNotFound` if the ticket id is not on the
    /// board.
    pub fn apply_patch(&mut self, ticket_id: i64, patch: &TicketPatch) -> Result<(), CoreError> {
        for status in TicketStatus::ALL {
            let column: &mut Vec<Ticket> = &mut self.columns[column_index(status)];
            if let Some(ticket) = column.iter_mut().find(|t| t.id == ticket_id) {
                if let Some(assignee) = &patch.assigned_to {
                    ticket.assigned_to = Some(assignee.clone());
                }
                if let Some(duration) = patch.duration_hours {
                    ticket.duration_hours = Some(duration);
                }
                return Ok(());
            }
        }
        Err(CoreError::TicketNotFound { ticket_id })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
