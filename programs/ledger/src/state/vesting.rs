//! Vesting Schedule State
//!
//! A linear time-locked release curve attached to units issued to one
//! holder. The curve unlocks nothing before `start`, everything at
//! `start + duration`, and a floor-divided proration in between.
//!
//! The schedule is created exactly once, on the holder's first
//! vesting-mint, and is never deleted; a fully consumed schedule
//! (`released == total`) remains queryable.

// =============================================================================
// VESTING SCHEDULE
// =============================================================================

/// Per-holder linear unlock schedule.
///
/// Invariant: `released <= total` at all times. The settlement hook
/// saturates rather than erroring, so an internal accounting slip can
/// never push `released` past `total`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VestingSchedule {
    /// Units ever subject to this schedule.
    pub total: u64,

    /// Units already counted as moved out of the vested bucket.
    pub released: u64,

    /// Unix timestamp (seconds) the schedule begins.
    pub start: u64,

    /// Seconds from `start` until fully vested.
    pub duration: u64,
}

impl VestingSchedule {
    /// A fresh schedule with nothing released yet.
    pub const fn new(total: u64, start: u64, duration: u64) -> Self {
        Self {
            total,
            released: 0,
            start,
            duration,
        }
    }

    /// Units unlocked by the curve at `now`.
    ///
    /// Returns 0 before `start`, `total` at or after `start + duration`,
    /// and `total * (now - start) / duration` (floor) in between. The
    /// proration multiplies before dividing in `u128` so large totals
    /// cannot wrap.
    pub fn vested_at(&self, now: u64) -> u64 {
        if now < self.start {
            return 0;
        }
        let elapsed = now - self.start;
        if elapsed >= self.duration {
            return self.total;
        }
        // elapsed < duration here, so duration > 0 and the quotient
        // is strictly less than total.
        let vested = (self.total as u128) * (elapsed as u128) / (self.duration as u128);
        vested as u64
    }

    /// Vested units not yet counted as released.
    pub fn releasable_at(&self, now: u64) -> u64 {
        self.vested_at(now).saturating_sub(self.released)
    }

    /// Settlement hook: count `amount` as moved out of the vested bucket.
    ///
    /// Called after any outbound movement from the holder (transfer-out
    /// or burn, never mint-in). Saturates at `total`.
    pub fn record_release(&mut self, amount: u64) {
        self.released = self.released.saturating_add(amount).min(self.total);
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
