//! Ledger Core State
//!
//! The single engine instance: global flags, the holder table, and the
//! audit buffer. All mutation goes through [`Ledger::execute`], which
//! takes `&mut self`; exclusive access *is* the serialization boundary.
//! A multi-threaded host puts its own single-writer wrapper (mutex or
//! actor) around the engine; no finer-grained locking is sound because
//! nearly every check reads global state plus holder state.
//!
//! Queries take `&self`, never mutate, and answer for any identifier:
//! an untouched holder reads as the genesis default (zero balance, not
//! whitelisted, not frozen, no schedule) without allocating a record.

use std::collections::HashMap;

use tracing::info;

use crate::error::LedgerResult;
use crate::events::{Event, EventRecord};
use crate::instruction::LedgerInstruction;
use crate::processor::Processor;
use crate::state::{Holder, HolderId, VestingSchedule};

// =============================================================================
// LEDGER ENGINE
// =============================================================================

/// The fungible-asset ledger engine.
///
/// Tracks per-holder balances of a single asset class under a single
/// administrative authority (the owner), with whitelist/freeze gating,
/// a global pause switch, and per-holder linear vesting.
#[derive(Debug)]
pub struct Ledger {
    /// The administrative authority, fixed at initialization.
    pub(crate) owner: HolderId,

    /// Global kill-switch halting all balance mutations.
    pub(crate) paused: bool,

    /// Sum of all holder balances; equals total minted minus total
    /// burned at all times.
    pub(crate) total_supply: u64,

    /// Materialized holder records. Absence means the genesis default.
    pub(crate) holders: HashMap<HolderId, Holder>,

    /// Buffered audit records awaiting an external sink.
    events: Vec<EventRecord>,
}

impl Ledger {
    /// Create a ledger owned by `owner`.
    ///
    /// The owner is established exactly once here and is automatically
    /// whitelisted. Transferring ownership is the business of the
    /// external deployment layer, not of the engine.
    pub fn new(owner: HolderId) -> Self {
        let mut holders = HashMap::new();
        holders.insert(
            owner,
            Holder {
                is_whitelisted: true,
                ..Holder::default()
            },
        );
        Self {
            owner,
            paused: false,
            total_supply: 0,
            holders,
            events: Vec::new(),
        }
    }

    // =========================================================================
    // MUTATING ENTRY POINT
    // =========================================================================

    /// Execute one instruction on behalf of `caller` at time `now`.
    ///
    /// This is the single mutating entry point. The instruction either
    /// commits all of its effects and returns its audit record, or fails
    /// with a typed error and leaves state untouched. `caller` is the
    /// explicit identity capability: administrative instructions require
    /// it to equal the owner, and `Transfer` uses it as the sender.
    pub fn execute(
        &mut self,
        caller: &HolderId,
        instruction: LedgerInstruction,
        now: u64,
    ) -> LedgerResult<EventRecord> {
        let event = Processor::process(self, caller, instruction, now)?;
        Ok(self.record(event, now))
    }

    /// Stamp, buffer, and log an event. One call per successful mutation.
    fn record(&mut self, event: Event, now: u64) -> EventRecord {
        let record = EventRecord { at: now, event };
        info!(at = now, event = ?event, "ledger event");
        self.events.push(record);
        record
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// The administrative authority.
    pub fn owner(&self) -> HolderId {
        self.owner
    }

    /// Whether the global pause switch is on.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Sum of all holder balances.
    pub fn total_supply(&self) -> u64 {
        self.total_supply
    }

    /// Raw balance of `holder`.
    pub fn balance_of(&self, holder: &HolderId) -> u64 {
        self.holders.get(holder).map_or(0, |h| h.balance)
    }

    /// Whitelist membership of `holder`.
    pub fn is_whitelisted(&self, holder: &HolderId) -> bool {
        self.holders.get(holder).is_some_and(|h| h.is_whitelisted)
    }

    /// Freeze flag of `holder`.
    pub fn is_frozen(&self, holder: &HolderId) -> bool {
        self.holders.get(holder).is_some_and(|h| h.is_frozen)
    }

    /// Units the vesting curve has unlocked for `holder` at `now`.
    ///
    /// A holder without a schedule counts as fully vested: the query
    /// returns their entire current balance.
    pub fn vested_amount(&self, holder: &HolderId, now: u64) -> u64 {
        match self.active_vesting(holder) {
            Some(schedule) => schedule.vested_at(now),
            None => self.balance_of(holder),
        }
    }

    /// The portion of `holder`'s balance not locked by vesting at `now`.
    ///
    /// A holder without a schedule has their entire balance available;
    /// a scheduled holder has the vested, unreleased portion.
    pub fn available(&self, holder: &HolderId, now: u64) -> u64 {
        match self.active_vesting(holder) {
            Some(schedule) => schedule.releasable_at(now),
            None => self.balance_of(holder),
        }
    }

    /// The vesting schedule attached to `holder`, if one exists.
    ///
    /// A fully consumed schedule (`released == total`) is still
    /// returned; a zero-total schedule is not (it counts as absent).
    pub fn vesting_schedule(&self, holder: &HolderId) -> Option<&VestingSchedule> {
        self.active_vesting(holder)
    }

    /// Buffered audit records, oldest first.
    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    /// Hand the buffered audit records to an external sink.
    pub fn drain_events(&mut self) -> Vec<EventRecord> {
        std::mem::take(&mut self.events)
    }

    // =========================================================================
    // INTERNAL ACCESS
    // =========================================================================

    pub(crate) fn active_vesting(&self, holder: &HolderId) -> Option<&VestingSchedule> {
        self.holders.get(holder).and_then(Holder::active_vesting)
    }

    /// Materialize and borrow the record for `holder`.
    pub(crate) fn holder_mut(&mut self, holder: &HolderId) -> &mut Holder {
        self.holders.entry(*holder).or_default()
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
