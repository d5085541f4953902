//! AddToWhitelist Instruction Processor
//!
//! Grants a holder whitelist membership.

use crate::error::LedgerResult;
use crate::events::Event;
use crate::state::{HolderId, Ledger};
use crate::utils::*;

/// Process AddToWhitelist instruction
///
/// Owner-only. Idempotent: listing an already-listed holder is not an
/// error and emits the notification again. Permitted while paused.
pub fn process(ledger: &mut Ledger, caller: &HolderId, holder: &HolderId) -> LedgerResult<Event> {
    validate_owner(ledger, caller)?;

    ledger.holder_mut(holder).is_whitelisted = true;

    Ok(Event::WhitelistAdded { holder: *holder })
}
