// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod error;
mod normalize;
mod sync;
mod transport;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use normalize::{NormalizedBatch, SkipReason, normalize_all, normalize_record};
pub use sync::{
    MoveOutcome, PendingMove, assign_self, confirm_move_with_input, create_ticket, load_board,
    request_move,
};
pub use transport::{TicketDraft, TicketTransport, TransportError, UpdatePayload};
