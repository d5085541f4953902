//! UnfreezeAddress Instruction Processor
//!
//! Lifts a holder's freeze.

use crate::error::LedgerResult;
use crate::events::Event;
use crate::state::{HolderId, Ledger};
use crate::utils::*;

/// Process UnfreezeAddress instruction
///
/// Owner-only. Idempotent. Restores the holder's ability to move units
/// up to their available balance.
pub fn process(ledger: &mut Ledger, caller: &HolderId, holder: &HolderId) -> LedgerResult<Event> {
    validate_owner(ledger, caller)?;

    ledger.holder_mut(holder).is_frozen = false;

    Ok(Event::AddressUnfrozen { holder: *holder })
}
