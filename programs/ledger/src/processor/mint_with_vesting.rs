//! MintWithVesting Instruction Processor
//!
//! Mints new units and atomically attaches a vesting schedule.

use crate::error::{LedgerError, LedgerResult};
use crate::events::Event;
use crate::state::{HolderId, Ledger, VestingSchedule};
use crate::utils::*;
use crate::validator::{self, Movement};

/// Process MintWithVesting instruction
///
/// Owner-only. All-or-nothing: if the holder already has a schedule
/// the mint does not proceed either. A schedule is attached at most
/// once per holder, starts at `now`, and covers exactly the minted
/// amount.
pub fn process(
    ledger: &mut Ledger,
    caller: &HolderId,
    to: &HolderId,
    amount: u64,
    duration: u64,
    now: u64,
) -> LedgerResult<Event> {
    validate_owner(ledger, caller)?;

    // The pause switch outranks the schedule-existence check; the
    // validator would report it anyway, but only after this check ran.
    if ledger.is_paused() {
        return Err(LedgerError::SystemPaused);
    }

    // Refuse before the validator touches balances.
    if ledger.vesting_schedule(to).is_some() {
        return Err(LedgerError::VestingAlreadyExists);
    }

    validator::execute(ledger, Movement::Mint { to: *to }, amount, now)?;
    ledger.holder_mut(to).vesting = Some(VestingSchedule::new(amount, now, duration));

    Ok(Event::MintedWithVesting {
        to: *to,
        amount,
        duration,
    })
}
