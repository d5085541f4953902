//! Unpause Instruction Processor
//!
//! Turns off the global kill-switch.

use crate::error::LedgerResult;
use crate::events::Event;
use crate::state::{HolderId, Ledger};
use crate::utils::*;

/// Process Unpause instruction
///
/// Owner-only. Idempotent, like Pause. Restores the exact pre-pause
/// behavior of every operation.
pub fn process(ledger: &mut Ledger, caller: &HolderId) -> LedgerResult<Event> {
    validate_owner(ledger, caller)?;

    ledger.paused = false;

    Ok(Event::Unpaused)
}
