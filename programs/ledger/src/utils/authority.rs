//! Authority Validation
//!
//! The ledger has a single administrative authority, the owner,
//! established at engine initialization. Administrative operations take
//! the caller's identity explicitly and check it here; there is no
//! ambient authority state.

use crate::error::{LedgerError, LedgerResult};
use crate::state::{HolderId, Ledger};

/// Require that `caller` holds the owner capability.
///
/// # Errors
///
/// Returns `Unauthorized` if `caller` is not the ledger owner.
///
/// ```ignore
/// validate_owner(ledger, caller)?;
/// ```
pub fn validate_owner(ledger: &Ledger, caller: &HolderId) -> LedgerResult<()> {
    if ledger.owner() != *caller {
        return Err(LedgerError::Unauthorized);
    }
    Ok(())
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_passes() {
        let owner = HolderId::new([1; 32]);
        let ledger = Ledger::new(owner);
        assert!(validate_owner(&ledger, &owner).is_ok());
    }

    #[test]
    fn test_non_owner_rejected() {
        let ledger = Ledger::new(HolderId::new([1; 32]));
        let impostor = HolderId::new([2; 32]);
        assert_eq!(
            validate_owner(&ledger, &impostor),
            Err(LedgerError::Unauthorized)
        );
    }
}
