//! # Permissioned Ledger
//!
//! A programmable fungible-asset ledger: per-holder balances of a
//! single asset class under a single administrative authority, with
//! whitelist/freeze access gating, a global pause switch, and
//! per-holder linear vesting schedules.
//!
//! ## Overview
//!
//! Every balance mutation routes through the transfer validator, which
//! composes the gate rules into one accept/reject decision before any
//! state is written. A rejected operation leaves the ledger unchanged;
//! an accepted one commits atomically and emits exactly one audit
//! event.
//!
//! ## Instructions
//!
//! | # | Instruction | Description |
//! |---|-------------|-------------|
//! | 0 | AddToWhitelist | Grant a holder whitelist membership |
//! | 1 | RemoveFromWhitelist | Revoke whitelist membership |
//! | 2 | FreezeAddress | Block a holder's movement entirely |
//! | 3 | UnfreezeAddress | Lift a freeze |
//! | 4 | Pause | Halt all balance mutations |
//! | 5 | Unpause | Resume balance mutations |
//! | 6 | MintTo | Mint new units to a holder |
//! | 7 | MintWithVesting | Mint with a linear vesting schedule |
//! | 8 | Burn | Destroy units from a holder |
//! | 9 | Transfer | Move units from the caller to a holder |
//!
//! ## Execution Model
//!
//! The engine is strictly serialized: [`Ledger::execute`] takes
//! `&mut self`, and the borrow checker makes exclusive access the
//! mutual-exclusion boundary. The only external input is the current
//! time, passed explicitly; the engine never reads a clock.
//!
//! ```
//! use permissioned_ledger::{HolderId, Ledger, LedgerInstruction};
//!
//! let owner = HolderId::new([1; 32]);
//! let alice = HolderId::new([2; 32]);
//! let mut ledger = Ledger::new(owner);
//!
//! let now = 1_700_000_000;
//! ledger
//!     .execute(&owner, LedgerInstruction::AddToWhitelist { holder: alice }, now)
//!     .unwrap();
//! ledger
//!     .execute(&owner, LedgerInstruction::MintTo { to: alice, amount: 1_000 }, now)
//!     .unwrap();
//! assert_eq!(ledger.balance_of(&alice), 1_000);
//! ```

// =============================================================================
// MODULE DECLARATIONS
// =============================================================================

/// Custom error types with unique codes
pub mod error;

/// Audit event records
pub mod events;

/// Instruction definitions and parsing
pub mod instruction;

/// Instruction processors (business logic)
pub mod processor;

/// Ledger state structures (Ledger, Holder, VestingSchedule)
pub mod state;

/// Utility functions for validation and math
pub mod utils;

/// Transfer validator gating every balance mutation
pub mod validator;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use error::{LedgerError, LedgerResult};
pub use events::{Event, EventRecord};
pub use instruction::LedgerInstruction;
pub use processor::Processor;
pub use state::{Holder, HolderId, Ledger, VestingSchedule};
pub use validator::Movement;
