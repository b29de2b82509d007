// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The sync controller.
//!
//! Board operations exposed to UI callers. Mutations are optimistic: the
//! local board changes first, then the update goes upstream. On a transport
//! failure the local state is discarded and a full board is re-fetched —
//! never a field-by-field rollback, so local state cannot drift from server
//! truth.

use gearguard_board::{
    Board, Decision, RejectReason, RequiredInput, TicketPatch, evaluate, evaluate_completion,
    evaluate_self_assign,
};
use gearguard_domain::{Actor, Ticket, TicketStatus};
use tracing::{debug, info, warn};

use crate::error::{ApiError, translate_core_error};
use crate::normalize::{NormalizedBatch, normalize_all, normalize_record};
use crate::transport::{TicketDraft, TicketTransport, TransportError, UpdatePayload};

/// The result of a board operation, from the UI's perspective.
///
/// Expected conditions are outcomes, not errors; see [`ApiError`] for the
/// cases that do fail.
#[derive(Debug, Clone, PartialEq)]
pub enum MoveOutcome {
    /// The mutation was applied locally and confirmed upstream.
    Applied,
    /// The move needs caller-collected input before it can proceed. The
    /// board is unchanged; pass the pending move to
    /// [`confirm_move_with_input`] once the input is collected.
    NeedsInput {
        /// The move to complete later.
        pending: PendingMove,
        /// What to collect.
        input: RequiredInput,
    },
    /// The engine rejected the action. The board is unchanged.
    Rejected {
        /// Why.
        reason: RejectReason,
    },
    /// The upstream update failed; the optimistic state was discarded and
    /// the board was rebuilt from a fresh fetch.
    Reverted {
        /// A description of the transport failure, suitable for a
        /// notification.
        message: String,
    },
}

/// A move waiting on required input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingMove {
    /// The ticket to move.
    pub ticket_id: i64,
    /// The column it currently sits in.
    pub source: TicketStatus,
    /// The column it is headed to.
    pub dest: TicketStatus,
    /// The drop position within the destination column.
    pub dest_index: usize,
}

/// Fetches all tickets, normalizes them, and builds the board visible to
/// the given actor.
///
/// # Errors
///
/// Returns an `ApiError` if the fetch fails. Malformed records do not fail
/// the load; they are skipped and logged.
pub fn load_board<T: TicketTransport>(transport: &T, actor: &Actor) -> Result<Board, ApiError> {
    let records = transport.fetch_all_tickets()?;
    let batch: NormalizedBatch = normalize_all(&records);
    if batch.skipped() > 0 {
        info!(
            total = records.len(),
            skipped = batch.skipped(),
            "Loaded board with skipped records"
        );
    }
    Ok(Board::from_tickets(batch.tickets, actor))
}

/// Requests a move of one ticket to a destination column and position.
///
/// Evaluates the move, applies it optimistically when allowed, and sends
/// the update upstream. Pure same-column reorders are local-only; the
/// server holds no display order.
///
/// # Errors
///
/// Returns an `ApiError` if the ticket is not on the board in the given
/// source column (a programming error), if the session expired, or if the
/// post-failure re-fetch itself failed.
pub fn request_move<T: TicketTransport>(
    transport: &T,
    board: &mut Board,
    ticket_id: i64,
    source: TicketStatus,
    dest: TicketStatus,
    dest_index: usize,
    actor: &Actor,
) -> Result<MoveOutcome, ApiError> {
    let ticket: &Ticket = find_in_column(board, ticket_id, source)?;

    match evaluate(ticket, source, dest, actor) {
        Decision::Rejected { reason } => Ok(MoveOutcome::Rejected { reason }),
        Decision::NeedsInput { input } => Ok(MoveOutcome::NeedsInput {
            pending: PendingMove {
                ticket_id,
                source,
                dest,
                dest_index,
            },
            input,
        }),
        Decision::Allowed { patch } => {
            if patch.is_empty() {
                // Pure reorder. Display order is a UI concern; nothing to
                // send upstream.
                board
                    .move_ticket(ticket_id, source, dest, dest_index)
                    .map_err(translate_core_error)?;
                return Ok(MoveOutcome::Applied);
            }
            commit_move(transport, board, ticket_id, source, dest, dest_index, &patch, actor)
        }
    }
}

/// Completes a move that was pending required input.
///
/// # Errors
///
/// Same conditions as [`request_move`].
pub fn confirm_move_with_input<T: TicketTransport>(
    transport: &T,
    board: &mut Board,
    pending: &PendingMove,
    actor: &Actor,
    duration_hours: f64,
) -> Result<MoveOutcome, ApiError> {
    find_in_column(board, pending.ticket_id, pending.source)?;

    match evaluate_completion(pending.source, duration_hours) {
        Decision::Rejected { reason } => Ok(MoveOutcome::Rejected { reason }),
        Decision::NeedsInput { input } => Ok(MoveOutcome::NeedsInput {
            pending: *pending,
            input,
        }),
        Decision::Allowed { patch } => commit_move(
            transport,
            board,
            pending.ticket_id,
            pending.source,
            pending.dest,
            pending.dest_index,
            &patch,
            actor,
        ),
    }
}

/// Handles an explicit "assign me" action on a ticket, independent of any
/// column move.
///
/// # Errors
///
/// Same conditions as [`request_move`].
pub fn assign_self<T: TicketTransport>(
    transport: &T,
    board: &mut Board,
    ticket_id: i64,
    actor: &Actor,
) -> Result<MoveOutcome, ApiError> {
    let Some((_, _, ticket)) = board.find(ticket_id) else {
        return Err(ApiError::Internal {
            message: format!("Ticket {ticket_id} not found on the board"),
        });
    };

    match evaluate_self_assign(ticket, actor) {
        Decision::Rejected { reason } => Ok(MoveOutcome::Rejected { reason }),
        Decision::NeedsInput { input } => Err(ApiError::Internal {
            message: format!("Self-assign unexpectedly required input: {input}"),
        }),
        Decision::Allowed { patch } => {
            board
                .apply_patch(ticket_id, &patch)
                .map_err(translate_core_error)?;
            debug!(ticket_id, actor = %actor.name, "Claimed ticket");

            let payload: UpdatePayload = UpdatePayload::from(&patch);
            match transport.update_ticket(ticket_id, &payload) {
                Ok(_) => Ok(MoveOutcome::Applied),
                Err(err) => reconcile(transport, board, actor, &err),
            }
        }
    }
}

/// Validates and submits a new ticket draft, returning the canonical ticket
/// the server created.
///
/// # Errors
///
/// Returns an `ApiError` if the draft is invalid, the transport fails, or
/// the server's record cannot be normalized.
pub fn create_ticket<T: TicketTransport>(
    transport: &T,
    draft: &TicketDraft,
) -> Result<Ticket, ApiError> {
    draft.validate()?;
    let record = transport.create_ticket(draft)?;
    normalize_record(&record).map_err(|reason| ApiError::Internal {
        message: format!("Server returned an unusable ticket record: {reason:?}"),
    })
}

/// Applies an allowed move optimistically and sends the update upstream.
#[allow(clippy::too_many_arguments)]
fn commit_move<T: TicketTransport>(
    transport: &T,
    board: &mut Board,
    ticket_id: i64,
    source: TicketStatus,
    dest: TicketStatus,
    dest_index: usize,
    patch: &TicketPatch,
    actor: &Actor,
) -> Result<MoveOutcome, ApiError> {
    // Optimistic local mutation first; the caller sees the move before the
    // network answers.
    board
        .apply_patch(ticket_id, patch)
        .map_err(translate_core_error)?;
    board
        .move_ticket(ticket_id, source, dest, dest_index)
        .map_err(translate_core_error)?;
    debug!(ticket_id, %source, %dest, "Applied optimistic move");

    let payload: UpdatePayload = UpdatePayload::from(patch);
    match transport.update_ticket(ticket_id, &payload) {
        Ok(_) => Ok(MoveOutcome::Applied),
        Err(err) => reconcile(transport, board, actor, &err),
    }
}

/// Discards optimistic state after a failed update by re-fetching the full
/// board.
fn reconcile<T: TicketTransport>(
    transport: &T,
    board: &mut Board,
    actor: &Actor,
    err: &TransportError,
) -> Result<MoveOutcome, ApiError> {
    if *err == TransportError::Unauthorized {
        return Err(ApiError::SessionExpired);
    }
    warn!(error = %err, "Ticket update failed, re-fetching board");
    *board = load_board(transport, actor)?;
    Ok(MoveOutcome::Reverted {
        message: err.to_string(),
    })
}

/// Looks up a ticket expected to sit in a specific column.
fn find_in_column(
    board: &Board,
    ticket_id: i64,
    column: TicketStatus,
) -> Result<&Ticket, ApiError> {
    match board.find(ticket_id) {
        Some((status, _, ticket)) if status == column => Ok(ticket),
        Some((status, _, _)) => Err(ApiError::Internal {
            message: format!("Ticket {ticket_id} expected in {column} but found in {status}"),
        }),
        None => Err(ApiError::Internal {
            message: format!("Ticket {ticket_id} not found on the board"),
        }),
    }
}
