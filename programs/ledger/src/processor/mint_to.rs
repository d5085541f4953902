//! MintTo Instruction Processor
//!
//! Mints new units to a whitelisted holder.

use crate::error::LedgerResult;
use crate::events::Event;
use crate::state::{HolderId, Ledger};
use crate::utils::*;
use crate::validator::{self, Movement};

/// Process MintTo instruction
///
/// Owner-only. Routes through the transfer validator as a mint
/// movement so the pause switch and the receiver-side gates apply
/// uniformly; there is no sender side to gate.
pub fn process(
    ledger: &mut Ledger,
    caller: &HolderId,
    to: &HolderId,
    amount: u64,
    now: u64,
) -> LedgerResult<Event> {
    validate_owner(ledger, caller)?;

    validator::execute(ledger, Movement::Mint { to: *to }, amount, now)?;

    Ok(Event::Minted { to: *to, amount })
}
