//! The canonical ledger record and its owner-gated mutators.
//!
//! The record is deployed behind an upgradeable proxy, so raw storage
//! outlives any single logic version. Two rules follow:
//!
//! 1. Field layout is append-only: a later version may add fields at the
//!    end but never reorders, retypes, or removes existing ones.
//! 2. There is no constructor. A freshly installed record is all zeroes
//!    (`Default`), and `initialize` performs one-time setup exactly once,
//!    recording [`LEDGER_VERSION`] so a future migration can tell whether
//!    its own one-time step has already run.
//!
//! Every mutator validates fully before writing any field; a call that
//! returns an error has had no effect on the record.

use cubit_common::{Address, Fixed, LedgerError, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::access::require_owner;
use crate::config::LedgerConfig;
use crate::events::{LedgerEvent, LedgerEventKind};
use crate::rates;

/// Storage-layout version written by `initialize`. Zero marks a record that
/// has never been initialized.
pub const LEDGER_VERSION: u32 = 1;

/// The CuBit asset ledger record.
///
/// A single flat record per deployment. Field declaration order is the
/// persisted storage layout; see the module docs before touching it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetLedger {
    // -- layout v1: append new fields after rate_redemption_usd --
    version: u32,
    owner: Option<Address>,
    name_owner: String,
    name_admin: String,
    value_cubit: Fixed,
    supply_cubit: Fixed,
    mint_limit: Fixed,
    in_circulation_cubit: Fixed,
    in_reserves_cubit: Fixed,
    deposits_total: Fixed,
    assets_total: Fixed,
    assets_la: Fixed,
    assets_re: Fixed,
    ratio_la: Fixed,
    ratio_re: Fixed,
    rate_deposit_usd: Fixed,
    spread_usd: Fixed,
    rate_redemption_usd: Fixed,
}

impl AssetLedger {
    /// One-time setup with the default deployment constants.
    ///
    /// The first caller becomes the owner; there is no caller check because
    /// no owner exists yet. Fails with `AlreadyInitialized` on any repeat.
    pub fn initialize(&mut self, owner: Address) -> Result<LedgerEvent> {
        self.initialize_with_config(owner, LedgerConfig::default())
    }

    /// One-time setup with explicit deployment constants.
    #[instrument(skip(self, config))]
    pub fn initialize_with_config(
        &mut self,
        owner: Address,
        config: LedgerConfig,
    ) -> Result<LedgerEvent> {
        if self.version != 0 {
            return Err(LedgerError::AlreadyInitialized);
        }

        // Derive everything before the first write.
        let value_cubit = Fixed::ONE;
        let rate_redemption = rates::redemption_rate(config.rate_deposit_usd, config.spread_usd)?;
        let deposits_total = config.rate_deposit_usd;
        let in_circulation = deposits_total.mul_div(Fixed::ONE, value_cubit)?;
        if in_circulation > config.supply_cubit {
            return Err(LedgerError::SupplyExceeded {
                circulation: in_circulation,
                supply: config.supply_cubit,
            });
        }
        let in_reserves = config.supply_cubit.checked_sub(in_circulation)?;

        self.version = LEDGER_VERSION;
        self.owner = Some(owner.clone());
        self.name_owner = config.name_owner;
        self.name_admin = config.name_admin;
        self.value_cubit = value_cubit;
        self.supply_cubit = config.supply_cubit;
        self.mint_limit = config.mint_limit;
        self.in_circulation_cubit = in_circulation;
        self.in_reserves_cubit = in_reserves;
        self.deposits_total = deposits_total;
        self.assets_total = config.rate_deposit_usd;
        self.assets_la = config.rate_deposit_usd;
        self.assets_re = Fixed::ZERO;
        self.ratio_la = Fixed::ONE;
        self.ratio_re = Fixed::ZERO;
        self.rate_deposit_usd = config.rate_deposit_usd;
        self.spread_usd = config.spread_usd;
        self.rate_redemption_usd = rate_redemption;

        info!(owner = %owner, version = LEDGER_VERSION, "Ledger initialized");

        Ok(LedgerEvent::new(LedgerEventKind::Initialized {
            owner,
            version: LEDGER_VERSION,
        }))
    }

    /// Set the cumulative deposit total and re-derive the circulation and
    /// reserve split from the peg.
    #[instrument(skip(self))]
    pub fn change_total_deposits(
        &mut self,
        caller: &Address,
        new_total: Fixed,
    ) -> Result<LedgerEvent> {
        require_owner(caller, self)?;

        let in_circulation = new_total.mul_div(Fixed::ONE, self.value_cubit)?;
        if in_circulation > self.supply_cubit {
            return Err(LedgerError::SupplyExceeded {
                circulation: in_circulation,
                supply: self.supply_cubit,
            });
        }
        let in_reserves = self.supply_cubit.checked_sub(in_circulation)?;

        self.deposits_total = new_total;
        self.in_circulation_cubit = in_circulation;
        self.in_reserves_cubit = in_reserves;

        info!(
            deposits_total = %new_total,
            in_circulation = %in_circulation,
            in_reserves = %in_reserves,
            "Total deposits changed"
        );

        Ok(LedgerEvent::new(LedgerEventKind::DepositsChanged {
            deposits_total: new_total,
            in_circulation_cubit: in_circulation,
            in_reserves_cubit: in_reserves,
        }))
    }

    /// Set the backing asset composition and re-derive the liquid/reserve
    /// ratios.
    #[instrument(skip(self))]
    pub fn change_assets(
        &mut self,
        caller: &Address,
        la: Fixed,
        re: Fixed,
        total: Fixed,
    ) -> Result<LedgerEvent> {
        require_owner(caller, self)?;

        if la.checked_add(re)? != total {
            return Err(LedgerError::InvalidAssetSplit { la, re, total });
        }

        let (ratio_la, ratio_re) = if total.is_zero() {
            // Explicit zero guard: an empty pool has no meaningful ratios.
            (Fixed::ZERO, Fixed::ZERO)
        } else {
            let ratio_la = la.mul_div(Fixed::ONE, total)?;
            // Truncation of the division lands on ratio_re, keeping the two
            // ratios summing to exactly one.
            (ratio_la, Fixed::ONE.checked_sub(ratio_la)?)
        };

        self.assets_la = la;
        self.assets_re = re;
        self.assets_total = total;
        self.ratio_la = ratio_la;
        self.ratio_re = ratio_re;

        info!(
            assets_la = %la,
            assets_re = %re,
            assets_total = %total,
            ratio_la = %ratio_la,
            ratio_re = %ratio_re,
            "Assets changed"
        );

        Ok(LedgerEvent::new(LedgerEventKind::AssetsChanged {
            assets_la: la,
            assets_re: re,
            assets_total: total,
            ratio_la,
            ratio_re,
        }))
    }

    /// Set the deposit rate and re-derive the redemption rate with the
    /// current spread.
    #[instrument(skip(self))]
    pub fn change_rate_deposit_usd(
        &mut self,
        caller: &Address,
        new_rate: Fixed,
    ) -> Result<LedgerEvent> {
        require_owner(caller, self)?;

        let rate_redemption = rates::redemption_rate(new_rate, self.spread_usd)?;

        self.rate_deposit_usd = new_rate;
        self.rate_redemption_usd = rate_redemption;

        info!(
            rate_deposit = %new_rate,
            rate_redemption = %rate_redemption,
            "Deposit rate changed"
        );

        Ok(LedgerEvent::new(LedgerEventKind::DepositRateChanged {
            rate_deposit_usd: new_rate,
            rate_redemption_usd: rate_redemption,
        }))
    }

    /// Set the spread and re-derive the redemption rate with the current
    /// deposit rate.
    #[instrument(skip(self))]
    pub fn change_spread_usd(
        &mut self,
        caller: &Address,
        new_spread: Fixed,
    ) -> Result<LedgerEvent> {
        require_owner(caller, self)?;

        // Also validates the [0, 1] spread bound.
        let rate_redemption = rates::redemption_rate(self.rate_deposit_usd, new_spread)?;

        self.spread_usd = new_spread;
        self.rate_redemption_usd = rate_redemption;

        info!(
            spread = %new_spread,
            rate_redemption = %rate_redemption,
            "Spread changed"
        );

        Ok(LedgerEvent::new(LedgerEventKind::SpreadChanged {
            spread_usd: new_spread,
            rate_redemption_usd: rate_redemption,
        }))
    }

    /// Verify the record's accounting invariants.
    ///
    /// Read-only; useful to tests and to operators auditing a live record.
    pub fn verify_integrity(&self) -> bool {
        let supply_ok = self
            .in_circulation_cubit
            .checked_add(self.in_reserves_cubit)
            .map(|sum| sum == self.supply_cubit)
            .unwrap_or(false);

        let assets_ok = self
            .assets_la
            .checked_add(self.assets_re)
            .map(|sum| sum == self.assets_total)
            .unwrap_or(false);

        let ratios_ok = self.assets_total.is_zero()
            || self
                .ratio_la
                .checked_add(self.ratio_re)
                .map(|sum| sum == Fixed::ONE)
                .unwrap_or(false);

        let rate_ok = rates::redemption_rate(self.rate_deposit_usd, self.spread_usd)
            .map(|rate| rate == self.rate_redemption_usd)
            .unwrap_or(false);

        supply_ok && assets_ok && ratios_ok && rate_ok
    }

    // Read accessors: pure projections of current state.

    /// Storage-layout version; zero means uninitialized.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Whether one-time initialization has run.
    pub fn is_initialized(&self) -> bool {
        self.version != 0
    }

    /// The owner capability holder, once initialized.
    pub fn owner(&self) -> Option<&Address> {
        self.owner.as_ref()
    }

    pub fn name_owner(&self) -> &str {
        &self.name_owner
    }

    pub fn name_admin(&self) -> &str {
        &self.name_admin
    }

    /// The peg: USD backing one CuBit.
    pub fn value_cubit(&self) -> Fixed {
        self.value_cubit
    }

    pub fn supply_cubit(&self) -> Fixed {
        self.supply_cubit
    }

    pub fn mint_limit(&self) -> Fixed {
        self.mint_limit
    }

    pub fn in_circulation_cubit(&self) -> Fixed {
        self.in_circulation_cubit
    }

    pub fn in_reserves_cubit(&self) -> Fixed {
        self.in_reserves_cubit
    }

    pub fn deposits_total(&self) -> Fixed {
        self.deposits_total
    }

    pub fn assets_total(&self) -> Fixed {
        self.assets_total
    }

    pub fn assets_la(&self) -> Fixed {
        self.assets_la
    }

    pub fn assets_re(&self) -> Fixed {
        self.assets_re
    }

    pub fn ratio_la(&self) -> Fixed {
        self.ratio_la
    }

    pub fn ratio_re(&self) -> Fixed {
        self.ratio_re
    }

    pub fn rate_deposit_usd(&self) -> Fixed {
        self.rate_deposit_usd
    }

    /// The spread, as a fraction of the deposit rate.
    pub fn spread_usd(&self) -> Fixed {
        self.spread_usd
    }

    /// Derived by the rate engine; never set directly.
    pub fn rate_redemption_usd(&self) -> Fixed {
        self.rate_redemption_usd
    }
}
