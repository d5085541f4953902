//! Audit Events
//!
//! Every successful mutation emits exactly one event record after all
//! invariant checks pass. Records are appended to the engine's audit
//! buffer, returned to the caller, and logged; an external audit sink
//! drains the buffer with [`crate::state::Ledger::drain_events`].
//!
//! Records serialize to a self-describing JSON shape (`kind` tag plus
//! the affected identifiers and amount) so the external log needs no
//! schema coordination with the engine.

use serde::Serialize;

use crate::state::HolderId;

// =============================================================================
// EVENT KINDS
// =============================================================================

/// What happened, with the affected identifiers and amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Event {
    /// A holder was added to the whitelist.
    WhitelistAdded { holder: HolderId },

    /// A holder was removed from the whitelist.
    WhitelistRemoved { holder: HolderId },

    /// A holder was frozen.
    AddressFrozen { holder: HolderId },

    /// A holder was unfrozen.
    AddressUnfrozen { holder: HolderId },

    /// The ledger was paused.
    Paused,

    /// The ledger was unpaused.
    Unpaused,

    /// Units were minted to a holder.
    Minted { to: HolderId, amount: u64 },

    /// Units were minted with a vesting schedule attached.
    MintedWithVesting {
        to: HolderId,
        amount: u64,
        duration: u64,
    },

    /// Units were burned from a holder.
    Burned { from: HolderId, amount: u64 },

    /// Units moved between holders.
    Transferred {
        from: HolderId,
        to: HolderId,
        amount: u64,
    },
}

// =============================================================================
// EVENT RECORD
// =============================================================================

/// An [`Event`] stamped with the time its operation committed.
///
/// The timestamp is the caller-supplied clock value of the operation,
/// not a wall-clock read; the engine never reads a clock itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    /// Unix timestamp (seconds) of the operation.
    pub at: u64,

    /// The event payload.
    #[serde(flatten)]
    pub event: Event,
}

// =============================================================================
// UNIT TESTS
// =============================================================================
