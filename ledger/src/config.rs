//! Initialization defaults for a ledger deployment.

use cubit_common::Fixed;
use serde::{Deserialize, Serialize};

/// Constants applied by one-time initialization.
///
/// `Default` carries the launch deployment's figures; a deployment script
/// may override individual fields before calling
/// [`AssetLedger::initialize_with_config`](crate::AssetLedger::initialize_with_config).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Descriptive label for the owning organization.
    pub name_owner: String,
    /// Descriptive label for the administering organization.
    pub name_admin: String,
    /// Total issuable CuBit supply, fixed for the life of the deployment.
    pub supply_cubit: Fixed,
    /// Ceiling on future issuance. Informational in this core; enforced by
    /// the collaborator that mints the unit.
    pub mint_limit: Fixed,
    /// Initial USD deposit rate.
    pub rate_deposit_usd: Fixed,
    /// Initial spread, as a fraction of the deposit rate in [0, 1].
    pub spread_usd: Fixed,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            name_owner: "CuBit Reserve".to_string(),
            name_admin: "CuBit Ledger Admin".to_string(),
            supply_cubit: Fixed::from_int(15_000_000),
            mint_limit: Fixed::from_int(500_000_000),
            // 119.17 USD per CuBit at launch.
            rate_deposit_usd: Fixed::from_raw(11_917 * 10u128.pow(16)),
            // 0.291% of the deposit rate (the launch markdown of 0.347 USD
            // expressed as a fraction of the 119.17 rate).
            spread_usd: Fixed::from_raw(291 * 10u128.pow(13)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubit_common::fixed::SCALE;

    #[test]
    fn test_default_matches_launch_deployment() {
        let config = LedgerConfig::default();

        assert_eq!(config.supply_cubit.raw(), 15_000_000 * SCALE);
        assert_eq!(config.mint_limit.raw(), 500_000_000 * SCALE);
        assert_eq!(config.rate_deposit_usd.raw(), 11_917 * 10u128.pow(16));
        // 0.347 USD markdown on the 119.17 rate, as a fraction.
        assert_eq!(config.spread_usd.raw(), 291 * 10u128.pow(13));
        assert!(config.spread_usd <= Fixed::ONE);
    }
}
