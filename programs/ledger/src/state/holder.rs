//! Holder State
//!
//! A holder is any identity capable of owning a balance of the asset.
//! Conceptually a record exists for every identifier from genesis with
//! the default state (zero balance, not whitelisted, not frozen, no
//! vesting schedule); the engine only materializes a record the first
//! time an identifier is mutated. Records are never deleted.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::state::VestingSchedule;

// =============================================================================
// HOLDER IDENTIFIER
// =============================================================================

/// Fixed-width opaque identity of a holder.
///
/// The engine attaches no meaning to the bytes; callers derive them from
/// whatever key material their identity layer uses. There is no reserved
/// sentinel value: the mint/burn endpoints are expressed structurally by
/// [`crate::validator::Movement`], so an all-zero identifier is a
/// legitimate holder like any other.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HolderId([u8; 32]);

impl HolderId {
    /// Size of an identifier when serialized.
    pub const LEN: usize = 32;

    /// Wrap a raw 32-byte identity.
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// The raw bytes of this identifier.
    pub const fn to_bytes(self) -> [u8; 32] {
        self.0
    }
}

impl AsRef<[u8]> for HolderId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for HolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for HolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HolderId({self})")
    }
}

impl FromStr for HolderId {
    type Err = hex::FromHexError;

    /// Parse a 64-character hex string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s)?;
        let bytes: [u8; 32] = bytes
            .try_into()
            .map_err(|_| hex::FromHexError::InvalidStringLength)?;
        Ok(Self(bytes))
    }
}

impl Serialize for HolderId {
    /// Serialized as the hex string form, for readable audit records.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(self.0))
    }
}

// =============================================================================
// HOLDER RECORD
// =============================================================================

/// Per-holder ledger state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Holder {
    /// Current balance in base units.
    ///
    /// Increases on mint and transfer-in, decreases on burn and
    /// transfer-out. Always counted in the ledger's total supply.
    pub balance: u64,

    /// Whitelist membership. Only whitelisted holders may send or
    /// receive units.
    pub is_whitelisted: bool,

    /// Freeze flag. A frozen holder may neither send nor receive,
    /// independent of whitelist status.
    pub is_frozen: bool,

    /// Vesting schedule attached by the first vesting-mint, if any.
    ///
    /// A schedule with `total == 0` counts as absent everywhere: the
    /// existence test is `total != 0`, so a zero-amount vesting-mint
    /// behaves exactly like an unscheduled holder on all later queries
    /// and does not block a second schedule. Read through
    /// [`Holder::active_vesting`] so this rule is applied uniformly.
    pub vesting: Option<VestingSchedule>,
}

impl Holder {
    /// The vesting schedule, if one exists under the `total != 0` rule.
    pub fn active_vesting(&self) -> Option<&VestingSchedule> {
        self.vesting.as_ref().filter(|s| s.total != 0)
    }

    /// Mutable variant of [`Holder::active_vesting`].
    pub fn active_vesting_mut(&mut self) -> Option<&mut VestingSchedule> {
        self.vesting.as_mut().filter(|s| s.total != 0)
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holder_id_hex_roundtrip() {
        let id = HolderId::new([0xab; 32]);
        let text = id.to_string();
        assert_eq!(text.len(), 64);
        assert_eq!(text.parse::<HolderId>().unwrap(), id);
    }

    #[test]
    fn test_holder_id_rejects_bad_hex() {
        assert!("zz".parse::<HolderId>().is_err());
        assert!("abcd".parse::<HolderId>().is_err()); // too short
    }

    #[test]
    fn test_default_holder_is_inert() {
        let holder = Holder::default();
        assert_eq!(holder.balance, 0);
        assert!(!holder.is_whitelisted);
        assert!(!holder.is_frozen);
        assert!(holder.active_vesting().is_none());
    }

    #[test]
    fn test_zero_total_schedule_counts_as_absent() {
        let holder = Holder {
            vesting: Some(VestingSchedule::new(0, 100, 50)),
            ..Holder::default()
        };
        assert!(holder.vesting.is_some());
        assert!(holder.active_vesting().is_none());
    }
}
