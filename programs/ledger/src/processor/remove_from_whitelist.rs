//! RemoveFromWhitelist Instruction Processor
//!
//! Revokes a holder's whitelist membership.

use crate::error::LedgerResult;
use crate::events::Event;
use crate::state::{HolderId, Ledger};
use crate::utils::*;

/// Process RemoveFromWhitelist instruction
///
/// Owner-only. Idempotent. The holder keeps their balance; they simply
/// can no longer send or receive until re-listed.
pub fn process(ledger: &mut Ledger, caller: &HolderId, holder: &HolderId) -> LedgerResult<Event> {
    validate_owner(ledger, caller)?;

    ledger.holder_mut(holder).is_whitelisted = false;

    Ok(Event::WhitelistRemoved { holder: *holder })
}
