//! Transfer Instruction Processor
//!
//! Moves units from the caller to another holder.

use crate::error::LedgerResult;
use crate::events::Event;
use crate::state::{HolderId, Ledger};
use crate::validator::{self, Movement};

/// Process Transfer instruction
///
/// Holder-initiated: the sender is the execution caller, so no owner
/// check applies. Both endpoints pass the whitelist and freeze gates,
/// and a sender with a vesting schedule is bounded by their available
/// balance.
pub fn process(
    ledger: &mut Ledger,
    caller: &HolderId,
    to: &HolderId,
    amount: u64,
    now: u64,
) -> LedgerResult<Event> {
    validator::execute(
        ledger,
        Movement::Transfer {
            from: *caller,
            to: *to,
        },
        amount,
        now,
    )?;

    Ok(Event::Transferred {
        from: *caller,
        to: *to,
        amount,
    })
}
