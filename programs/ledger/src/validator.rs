//! Transfer Validator
//!
//! The single gate in front of every balance mutation. Mint, burn, and
//! transfer all route through [`execute`], which applies the gate
//! checks in a fixed order, commits the balance deltas, and runs the
//! vesting settlement hook. The first failing check wins and leaves
//! state byte-for-byte unchanged.
//!
//! # Check Order
//!
//! 1. Global pause
//! 2. Sender: whitelist, freeze, then (transfers only) the vesting lock
//! 3. Receiver: whitelist, freeze
//! 4. Arithmetic validation, then the balance mutation (both legs
//!    committed together)
//! 5. Sender with a vesting schedule: record the release
//!
//! Callers must not assume which failure is reported when several
//! violations coexist, only that this order is deterministic.

use crate::error::{LedgerError, LedgerResult};
use crate::state::{HolderId, Ledger};
use crate::utils::{checked_add, checked_sub};

// =============================================================================
// MOVEMENT
// =============================================================================

/// One balance movement routed through the validator.
///
/// Mint and burn carry only the endpoint that exists, so "minted from
/// nothing" and "burned to nothing" are expressed structurally rather
/// than by a reserved null identifier. The missing side is simply never
/// gated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Movement {
    /// Units created out of nothing for `to`.
    Mint { to: HolderId },

    /// Units destroyed from `from`.
    Burn { from: HolderId },

    /// Units moved from `from` to `to`.
    Transfer { from: HolderId, to: HolderId },
}

impl Movement {
    /// The sending endpoint, if this movement has one.
    fn sender(&self) -> Option<&HolderId> {
        match self {
            Movement::Mint { .. } => None,
            Movement::Burn { from } => Some(from),
            Movement::Transfer { from, .. } => Some(from),
        }
    }

    /// The receiving endpoint, if this movement has one.
    fn receiver(&self) -> Option<&HolderId> {
        match self {
            Movement::Mint { to } => Some(to),
            Movement::Burn { .. } => None,
            Movement::Transfer { to, .. } => Some(to),
        }
    }

    /// Whether the sender-side vesting lock applies.
    ///
    /// Only holder-initiated transfers are bounded by the available
    /// balance; an administrative burn deliberately bypasses the lock
    /// (owner emergency-recovery power) while still passing the
    /// whitelist and freeze gates.
    fn enforces_vesting_lock(&self) -> bool {
        matches!(self, Movement::Transfer { .. })
    }
}

// =============================================================================
// GATE CHECKS
// =============================================================================

/// Whitelist membership, then freeze flag, for one endpoint.
///
/// The same two checks apply to both roles; which holder is examined is
/// decided by the movement shape in [`execute`].
fn check_access(ledger: &Ledger, holder: &HolderId) -> LedgerResult<()> {
    if !ledger.is_whitelisted(holder) {
        return Err(LedgerError::NotWhitelisted);
    }
    if ledger.is_frozen(holder) {
        return Err(LedgerError::AddressFrozen);
    }
    Ok(())
}

// =============================================================================
// VALIDATE AND COMMIT
// =============================================================================

/// Route one balance movement through the full check sequence and
/// commit it.
///
/// `now` feeds the sender-side vesting lock; it is ignored for
/// movements that do not enforce one.
pub fn execute(
    ledger: &mut Ledger,
    movement: Movement,
    amount: u64,
    now: u64,
) -> LedgerResult<()> {
    // 1. The pause switch halts every balance mutation first.
    if ledger.is_paused() {
        return Err(LedgerError::SystemPaused);
    }

    // 2. Sender-side gate, then (if a schedule is present) the vesting
    //    lock. An unscheduled sender is bounded by the raw-balance
    //    check below, not by the lock.
    if let Some(from) = movement.sender() {
        check_access(ledger, from)?;
        if movement.enforces_vesting_lock() {
            if let Some(schedule) = ledger.active_vesting(from) {
                if amount > schedule.releasable_at(now) {
                    return Err(LedgerError::AmountLocked);
                }
            }
        }
    }

    // 3. Receiver-side gate.
    if let Some(to) = movement.receiver() {
        check_access(ledger, to)?;
    }

    // 4. Validate the arithmetic on current state, then commit both
    //    legs. Nothing is written until every check has passed.
    match movement {
        Movement::Mint { to } => {
            let supply = checked_add(ledger.total_supply, amount)?;
            let balance = checked_add(ledger.balance_of(&to), amount)?;
            ledger.total_supply = supply;
            ledger.holder_mut(&to).balance = balance;
        }
        Movement::Burn { from } => {
            let balance = checked_sub(ledger.balance_of(&from), amount)?;
            let supply = checked_sub(ledger.total_supply, amount)?;
            ledger.holder_mut(&from).balance = balance;
            ledger.total_supply = supply;
        }
        Movement::Transfer { from, to } if from == to => {
            // Net-zero move; the debit must still be covered.
            checked_sub(ledger.balance_of(&from), amount)?;
        }
        Movement::Transfer { from, to } => {
            let from_balance = checked_sub(ledger.balance_of(&from), amount)?;
            let to_balance = checked_add(ledger.balance_of(&to), amount)?;
            ledger.holder_mut(&from).balance = from_balance;
            ledger.holder_mut(&to).balance = to_balance;
        }
    }

    // 5. Settlement: outbound movement from a vesting holder consumes
    //    the vested bucket.
    if let Some(from) = movement.sender() {
        if let Some(schedule) = ledger.holder_mut(from).active_vesting_mut() {
            schedule.record_release(amount);
        }
    }

    Ok(())
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::VestingSchedule;

    fn id(n: u8) -> HolderId {
        HolderId::new([n; 32])
    }

    /// Owner plus two whitelisted holders, `a` funded with 100.
    fn funded_ledger() -> (Ledger, HolderId, HolderId) {
        let mut ledger = Ledger::new(id(1));
        let (a, b) = (id(2), id(3));
        for h in [a, b] {
            ledger.holder_mut(&h).is_whitelisted = true;
        }
        ledger.holder_mut(&a).balance = 100;
        ledger.total_supply = 100;
        (ledger, a, b)
    }

    #[test]
    fn test_pause_precedes_every_other_check() {
        let (mut ledger, a, _) = funded_ledger();
        ledger.paused = true;
        // Sender is not even whitelisted, yet pause is reported.
        let stranger = id(9);
        let err = execute(&mut ledger, Movement::Transfer { from: stranger, to: a }, 1, 0);
        assert_eq!(err, Err(LedgerError::SystemPaused));
    }

    #[test]
    fn test_sender_gate_runs_before_receiver_gate() {
        let (mut ledger, a, _) = funded_ledger();
        ledger.holder_mut(&a).is_frozen = true;
        // Receiver is unknown (not whitelisted), but the sender-side
        // freeze is reported first.
        let err = execute(&mut ledger, Movement::Transfer { from: a, to: id(9) }, 1, 0);
        assert_eq!(err, Err(LedgerError::AddressFrozen));
    }

    #[test]
    fn test_receiver_violation_detected_when_sender_passes() {
        let (mut ledger, a, _) = funded_ledger();
        let err = execute(&mut ledger, Movement::Transfer { from: a, to: id(9) }, 1, 0);
        assert_eq!(err, Err(LedgerError::NotWhitelisted));
    }

    #[test]
    fn test_frozen_sender_beats_vesting_lock() {
        let (mut ledger, a, b) = funded_ledger();
        ledger.holder_mut(&a).vesting = Some(VestingSchedule::new(100, 1_000, 100));
        ledger.holder_mut(&a).is_frozen = true;
        // Nothing is vested at t=1000, but the freeze is reported first.
        let err = execute(&mut ledger, Movement::Transfer { from: a, to: b }, 10, 1_000);
        assert_eq!(err, Err(LedgerError::AddressFrozen));
    }

    #[test]
    fn test_burn_bypasses_vesting_lock_but_not_gates() {
        let (mut ledger, a, _) = funded_ledger();
        ledger.holder_mut(&a).vesting = Some(VestingSchedule::new(100, 1_000, 100));

        // Fully locked at t=1000, burn succeeds anyway.
        execute(&mut ledger, Movement::Burn { from: a }, 100, 1_000).unwrap();
        assert_eq!(ledger.balance_of(&a), 0);
        assert_eq!(ledger.total_supply(), 0);
        // The settlement hook still ran, saturating at total.
        assert_eq!(ledger.vesting_schedule(&a).unwrap().released, 100);

        // But a frozen holder cannot be burned from.
        ledger.holder_mut(&a).is_frozen = true;
        let err = execute(&mut ledger, Movement::Burn { from: a }, 1, 1_000);
        assert_eq!(err, Err(LedgerError::AddressFrozen));
    }

    #[test]
    fn test_vesting_lock_applies_only_to_scheduled_senders() {
        let (mut ledger, a, b) = funded_ledger();

        // Unscheduled sender over-spending is a balance problem.
        let err = execute(&mut ledger, Movement::Transfer { from: a, to: b }, 101, 0);
        assert_eq!(err, Err(LedgerError::InsufficientBalance));

        // Scheduled sender over-spending the curve is a lock problem.
        ledger.holder_mut(&a).vesting = Some(VestingSchedule::new(100, 1_000, 100));
        let err = execute(&mut ledger, Movement::Transfer { from: a, to: b }, 20, 1_010);
        assert_eq!(err, Err(LedgerError::AmountLocked));
        execute(&mut ledger, Movement::Transfer { from: a, to: b }, 10, 1_010).unwrap();
        assert_eq!(ledger.balance_of(&b), 10);
    }

    #[test]
    fn test_failed_movement_leaves_state_unchanged() {
        let (mut ledger, a, b) = funded_ledger();
        let err = execute(&mut ledger, Movement::Transfer { from: a, to: b }, 101, 0);
        assert_eq!(err, Err(LedgerError::InsufficientBalance));
        assert_eq!(ledger.balance_of(&a), 100);
        assert_eq!(ledger.balance_of(&b), 0);
        assert_eq!(ledger.total_supply(), 100);
    }

    #[test]
    fn test_self_transfer_nets_zero() {
        let (mut ledger, a, _) = funded_ledger();
        execute(&mut ledger, Movement::Transfer { from: a, to: a }, 40, 0).unwrap();
        assert_eq!(ledger.balance_of(&a), 100);
        assert_eq!(ledger.total_supply(), 100);

        let err = execute(&mut ledger, Movement::Transfer { from: a, to: a }, 101, 0);
        assert_eq!(err, Err(LedgerError::InsufficientBalance));
    }

    #[test]
    fn test_mint_overflow_reports_overflow() {
        let (mut ledger, a, _) = funded_ledger();
        let err = execute(&mut ledger, Movement::Mint { to: a }, u64::MAX, 0);
        assert_eq!(err, Err(LedgerError::Overflow));
        assert_eq!(ledger.total_supply(), 100);
    }
}
