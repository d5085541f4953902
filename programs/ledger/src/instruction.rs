//! Instruction Types
//!
//! This module defines all instructions accepted by the ledger engine,
//! plus the compact byte codec handed to the external operator tooling
//! that signs and submits administrative commands.
//!
//! # Instruction Format
//!
//! ```text
//! [discriminant: u8][data: varies]
//! ```
//!
//! Identifiers are 32 raw bytes; amounts and durations are
//! little-endian `u64`.
//!
//! # Discriminant Values
//!
//! | Value | Instruction |
//! |-------|-------------|
//! | 0 | AddToWhitelist |
//! | 1 | RemoveFromWhitelist |
//! | 2 | FreezeAddress |
//! | 3 | UnfreezeAddress |
//! | 4 | Pause |
//! | 5 | Unpause |
//! | 6 | MintTo |
//! | 7 | MintWithVesting |
//! | 8 | Burn |
//! | 9 | Transfer |

use arrayref::array_ref;

use crate::error::{LedgerError, LedgerResult};
use crate::state::HolderId;

// =============================================================================
// LEDGER INSTRUCTION ENUM
// =============================================================================

/// All instructions accepted by [`crate::state::Ledger::execute`].
///
/// The caller identity is not part of the instruction: it is passed to
/// `execute` separately, checked against the owner for administrative
/// instructions, and used as the sender for `Transfer`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LedgerInstruction {
    // =========================================================================
    // ADMINISTRATIVE FLAG INSTRUCTIONS (owner-only, idempotent)
    // =========================================================================

    /// Grant `holder` whitelist membership.
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (0)
    /// [1..33]: holder (32 bytes)
    /// ```
    AddToWhitelist {
        /// The holder to list.
        holder: HolderId,
    },

    /// Revoke `holder`'s whitelist membership.
    ///
    /// Does not touch their balance; an unlisted holder simply can no
    /// longer send or receive.
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (1)
    /// [1..33]: holder (32 bytes)
    /// ```
    RemoveFromWhitelist {
        /// The holder to unlist.
        holder: HolderId,
    },

    /// Freeze `holder`: block all outgoing and incoming movement.
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (2)
    /// [1..33]: holder (32 bytes)
    /// ```
    FreezeAddress {
        /// The holder to freeze.
        holder: HolderId,
    },

    /// Lift `holder`'s freeze.
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (3)
    /// [1..33]: holder (32 bytes)
    /// ```
    UnfreezeAddress {
        /// The holder to unfreeze.
        holder: HolderId,
    },

    /// Halt every balance mutation until `Unpause`.
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (4)
    /// ```
    Pause,

    /// Resume balance mutations.
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (5)
    /// ```
    Unpause,

    // =========================================================================
    // ISSUANCE AND MOVEMENT INSTRUCTIONS
    // =========================================================================

    /// Mint new units to a whitelisted holder (owner-only).
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (6)
    /// [1..33]: to (32 bytes)
    /// [33..41]: amount (u64, little-endian)
    /// ```
    MintTo {
        /// The receiving holder.
        to: HolderId,
        /// Amount of units to mint.
        amount: u64,
    },

    /// Mint new units and attach a vesting schedule (owner-only).
    ///
    /// The schedule starts at the execution time and unlocks linearly
    /// over `duration` seconds. Fails if the holder already has a
    /// schedule; the mint does not proceed either (all-or-nothing).
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (7)
    /// [1..33]: to (32 bytes)
    /// [33..41]: amount (u64, little-endian)
    /// [41..49]: duration (u64, little-endian, seconds)
    /// ```
    MintWithVesting {
        /// The receiving holder.
        to: HolderId,
        /// Amount of units to mint, all subject to the schedule.
        amount: u64,
        /// Seconds until fully vested.
        duration: u64,
    },

    /// Burn units from a holder (owner-only).
    ///
    /// Bounded by the holder's raw balance, not by their available
    /// balance: the owner can burn vesting-locked units.
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (8)
    /// [1..33]: from (32 bytes)
    /// [33..41]: amount (u64, little-endian)
    /// ```
    Burn {
        /// The holder to burn from.
        from: HolderId,
        /// Amount of units to destroy.
        amount: u64,
    },

    /// Move units from the caller to another holder.
    ///
    /// The sender is the execution caller, not instruction data.
    /// Bounded by the caller's available balance when a vesting
    /// schedule is attached.
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (9)
    /// [1..33]: to (32 bytes)
    /// [33..41]: amount (u64, little-endian)
    /// ```
    Transfer {
        /// The receiving holder.
        to: HolderId,
        /// Amount of units to move.
        amount: u64,
    },
}

// =============================================================================
// INSTRUCTION PARSING (UNPACK)
// =============================================================================

impl LedgerInstruction {
    /// Parse instruction data into a `LedgerInstruction`.
    ///
    /// First byte is the discriminant, remaining bytes are
    /// instruction-specific. Trailing garbage is rejected.
    pub fn unpack(input: &[u8]) -> LedgerResult<Self> {
        let (&discriminant, rest) = input
            .split_first()
            .ok_or(LedgerError::InvalidInstruction)?;

        let (instruction, rest) = match discriminant {
            0 => {
                let (holder, rest) = unpack_id(rest)?;
                (LedgerInstruction::AddToWhitelist { holder }, rest)
            }
            1 => {
                let (holder, rest) = unpack_id(rest)?;
                (LedgerInstruction::RemoveFromWhitelist { holder }, rest)
            }
            2 => {
                let (holder, rest) = unpack_id(rest)?;
                (LedgerInstruction::FreezeAddress { holder }, rest)
            }
            3 => {
                let (holder, rest) = unpack_id(rest)?;
                (LedgerInstruction::UnfreezeAddress { holder }, rest)
            }
            4 => (LedgerInstruction::Pause, rest),
            5 => (LedgerInstruction::Unpause, rest),
            6 => {
                let (to, rest) = unpack_id(rest)?;
                let (amount, rest) = unpack_u64(rest)?;
                (LedgerInstruction::MintTo { to, amount }, rest)
            }
            7 => {
                let (to, rest) = unpack_id(rest)?;
                let (amount, rest) = unpack_u64(rest)?;
                let (duration, rest) = unpack_u64(rest)?;
                (
                    LedgerInstruction::MintWithVesting {
                        to,
                        amount,
                        duration,
                    },
                    rest,
                )
            }
            8 => {
                let (from, rest) = unpack_id(rest)?;
                let (amount, rest) = unpack_u64(rest)?;
                (LedgerInstruction::Burn { from, amount }, rest)
            }
            9 => {
                let (to, rest) = unpack_id(rest)?;
                let (amount, rest) = unpack_u64(rest)?;
                (LedgerInstruction::Transfer { to, amount }, rest)
            }
            _ => return Err(LedgerError::InvalidInstruction),
        };

        if !rest.is_empty() {
            return Err(LedgerError::InvalidInstruction);
        }
        Ok(instruction)
    }

    // =========================================================================
    // INSTRUCTION PACKING (for tests and clients)
    // =========================================================================

    /// Pack instruction into bytes.
    ///
    /// This is the inverse of [`LedgerInstruction::unpack`], used by
    /// client tooling to build command payloads.
    pub fn pack(&self) -> Vec<u8> {
        let mut buf = Vec::new();

        match self {
            LedgerInstruction::AddToWhitelist { holder } => {
                buf.push(0);
                buf.extend_from_slice(holder.as_ref());
            }
            LedgerInstruction::RemoveFromWhitelist { holder } => {
                buf.push(1);
                buf.extend_from_slice(holder.as_ref());
            }
            LedgerInstruction::FreezeAddress { holder } => {
                buf.push(2);
                buf.extend_from_slice(holder.as_ref());
            }
            LedgerInstruction::UnfreezeAddress { holder } => {
                buf.push(3);
                buf.extend_from_slice(holder.as_ref());
            }
            LedgerInstruction::Pause => {
                buf.push(4);
            }
            LedgerInstruction::Unpause => {
                buf.push(5);
            }
            LedgerInstruction::MintTo { to, amount } => {
                buf.push(6);
                buf.extend_from_slice(to.as_ref());
                buf.extend_from_slice(&amount.to_le_bytes());
            }
            LedgerInstruction::MintWithVesting {
                to,
                amount,
                duration,
            } => {
                buf.push(7);
                buf.extend_from_slice(to.as_ref());
                buf.extend_from_slice(&amount.to_le_bytes());
                buf.extend_from_slice(&duration.to_le_bytes());
            }
            LedgerInstruction::Burn { from, amount } => {
                buf.push(8);
                buf.extend_from_slice(from.as_ref());
                buf.extend_from_slice(&amount.to_le_bytes());
            }
            LedgerInstruction::Transfer { to, amount } => {
                buf.push(9);
                buf.extend_from_slice(to.as_ref());
                buf.extend_from_slice(&amount.to_le_bytes());
            }
        }

        buf
    }
}

// =============================================================================
// FIELD PARSING HELPERS
// =============================================================================

/// Split a 32-byte holder identifier off the front of `input`.
fn unpack_id(input: &[u8]) -> LedgerResult<(HolderId, &[u8])> {
    if input.len() < HolderId::LEN {
        return Err(LedgerError::InvalidInstruction);
    }
    let (bytes, rest) = input.split_at(HolderId::LEN);
    Ok((HolderId::new(*array_ref![bytes, 0, HolderId::LEN]), rest))
}

/// Split a little-endian `u64` off the front of `input`.
fn unpack_u64(input: &[u8]) -> LedgerResult<(u64, &[u8])> {
    if input.len() < 8 {
        return Err(LedgerError::InvalidInstruction);
    }
    let (bytes, rest) = input.split_at(8);
    Ok((u64::from_le_bytes(*array_ref![bytes, 0, 8]), rest))
}

// =============================================================================
// UNIT TESTS
// =============================================================================
