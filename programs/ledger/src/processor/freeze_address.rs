//! FreezeAddress Instruction Processor
//!
//! Freezes a holder, blocking all outgoing and incoming movement.

use crate::error::LedgerResult;
use crate::events::Event;
use crate::state::{HolderId, Ledger};
use crate::utils::*;

/// Process FreezeAddress instruction
///
/// Owner-only. Idempotent. Freezing is independent of whitelist
/// status: an unlisted holder can be frozen and stays frozen if later
/// re-listed.
pub fn process(ledger: &mut Ledger, caller: &HolderId, holder: &HolderId) -> LedgerResult<Event> {
    validate_owner(ledger, caller)?;

    ledger.holder_mut(holder).is_frozen = true;

    Ok(Event::AddressFrozen { holder: *holder })
}
