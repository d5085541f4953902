//! Pause Instruction Processor
//!
//! Turns on the global kill-switch.

use crate::error::LedgerResult;
use crate::events::Event;
use crate::state::{HolderId, Ledger};
use crate::utils::*;

/// Process Pause instruction
///
/// Owner-only. Pausing an already-paused ledger is an idempotent no-op
/// that still emits the notification, consistent with the whitelist and
/// freeze flags. While paused, every balance mutation fails before any
/// other check; administrative flag changes remain permitted.
pub fn process(ledger: &mut Ledger, caller: &HolderId) -> LedgerResult<Event> {
    validate_owner(ledger, caller)?;

    ledger.paused = true;

    Ok(Event::Paused)
}
