//! Instruction Processors
//!
//! This module contains the business logic for each instruction.
//! Each instruction has its own file for clarity and maintainability.

pub mod add_to_whitelist;
pub mod burn;
pub mod freeze_address;
pub mod mint_to;
pub mod mint_with_vesting;
pub mod pause;
pub mod remove_from_whitelist;
pub mod transfer;
pub mod unfreeze_address;
pub mod unpause;

use tracing::debug;

use crate::error::LedgerResult;
use crate::events::Event;
use crate::instruction::LedgerInstruction;
use crate::state::{HolderId, Ledger};

/// Main processor that routes instructions to specific handlers
pub struct Processor;

impl Processor {
    /// Process a ledger instruction on behalf of `caller`.
    ///
    /// Returns the audit event of the mutation; stamping, buffering,
    /// and logging the record is the caller's ([`Ledger::execute`])
    /// job.
    pub fn process(
        ledger: &mut Ledger,
        caller: &HolderId,
        instruction: LedgerInstruction,
        now: u64,
    ) -> LedgerResult<Event> {
        match instruction {
            LedgerInstruction::AddToWhitelist { holder } => {
                debug!("Instruction: AddToWhitelist");
                add_to_whitelist::process(ledger, caller, &holder)
            }

            LedgerInstruction::RemoveFromWhitelist { holder } => {
                debug!("Instruction: RemoveFromWhitelist");
                remove_from_whitelist::process(ledger, caller, &holder)
            }

            LedgerInstruction::FreezeAddress { holder } => {
                debug!("Instruction: FreezeAddress");
                freeze_address::process(ledger, caller, &holder)
            }

            LedgerInstruction::UnfreezeAddress { holder } => {
                debug!("Instruction: UnfreezeAddress");
                unfreeze_address::process(ledger, caller, &holder)
            }

            LedgerInstruction::Pause => {
                debug!("Instruction: Pause");
                pause::process(ledger, caller)
            }

            LedgerInstruction::Unpause => {
                debug!("Instruction: Unpause");
                unpause::process(ledger, caller)
            }

            LedgerInstruction::MintTo { to, amount } => {
                debug!("Instruction: MintTo");
                mint_to::process(ledger, caller, &to, amount, now)
            }

            LedgerInstruction::MintWithVesting {
                to,
                amount,
                duration,
            } => {
                debug!("Instruction: MintWithVesting");
                mint_with_vesting::process(ledger, caller, &to, amount, duration, now)
            }

            LedgerInstruction::Burn { from, amount } => {
                debug!("Instruction: Burn");
                burn::process(ledger, caller, &from, amount, now)
            }

            LedgerInstruction::Transfer { to, amount } => {
                debug!("Instruction: Transfer");
                transfer::process(ledger, caller, &to, amount, now)
            }
        }
    }
}
