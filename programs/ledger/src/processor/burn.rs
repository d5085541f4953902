//! Burn Instruction Processor
//!
//! Destroys units from a holder.

use crate::error::LedgerResult;
use crate::events::Event;
use crate::state::{HolderId, Ledger};
use crate::utils::*;
use crate::validator::{self, Movement};

/// Process Burn instruction
///
/// Owner-only. Routes through the transfer validator as a burn
/// movement: there is no receiver side to gate, and the sender-side
/// vesting lock does not apply: the owner can burn vesting-locked
/// units, a privilege holder-initiated transfers do not have. The
/// burned amount still counts against the holder's vested bucket.
pub fn process(
    ledger: &mut Ledger,
    caller: &HolderId,
    from: &HolderId,
    amount: u64,
    now: u64,
) -> LedgerResult<Event> {
    validate_owner(ledger, caller)?;

    validator::execute(ledger, Movement::Burn { from: *from }, amount, now)?;

    Ok(Event::Burned { from: *from, amount })
}
