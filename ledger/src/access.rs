//! Owner capability check applied at the top of every mutator.

use cubit_common::{Address, LedgerError, Result};

use crate::state::AssetLedger;

/// Fail with `Unauthorized` unless `caller` is the ledger owner.
///
/// An uninitialized record has no owner, so every caller is rejected until
/// `initialize` has run.
pub fn require_owner(caller: &Address, ledger: &AssetLedger) -> Result<()> {
    match ledger.owner() {
        Some(owner) if owner == caller => Ok(()),
        _ => Err(LedgerError::Unauthorized(caller.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_passes_others_fail() {
        let owner = Address::new("0xab5801a7d398351b8be11c439e05c5b3259aec9b");
        let stranger = Address::new("0xdeadbeef");

        let mut ledger = AssetLedger::default();
        ledger.initialize(owner.clone()).unwrap();

        assert!(require_owner(&owner, &ledger).is_ok());
        assert_eq!(
            require_owner(&stranger, &ledger),
            Err(LedgerError::Unauthorized(stranger))
        );
    }

    #[test]
    fn test_uninitialized_record_rejects_everyone() {
        let ledger = AssetLedger::default();
        let caller = Address::new("0xdeadbeef");

        assert_eq!(
            require_owner(&caller, &ledger),
            Err(LedgerError::Unauthorized(caller))
        );
    }
}
