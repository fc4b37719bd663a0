//! State-change notifications returned by successful mutators.
//!
//! The host environment defines no event stream for this core; each mutator
//! instead hands its caller a record of what changed, which a collaborator
//! may forward to whatever observability layer it runs.

use chrono::{DateTime, Utc};
use cubit_common::{Address, Fixed};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single committed state change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEvent {
    /// Unique event ID.
    pub id: Uuid,
    /// When the change was committed.
    pub occurred_at: DateTime<Utc>,
    /// What changed, with the committed values.
    pub kind: LedgerEventKind,
}

impl LedgerEvent {
    pub(crate) fn new(kind: LedgerEventKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            kind,
        }
    }
}

/// The fields committed by each mutator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEventKind {
    /// One-time initialization completed.
    Initialized { owner: Address, version: u32 },
    /// Deposit total changed, moving the circulation/reserve split.
    DepositsChanged {
        deposits_total: Fixed,
        in_circulation_cubit: Fixed,
        in_reserves_cubit: Fixed,
    },
    /// Backing asset composition changed.
    AssetsChanged {
        assets_la: Fixed,
        assets_re: Fixed,
        assets_total: Fixed,
        ratio_la: Fixed,
        ratio_re: Fixed,
    },
    /// Deposit rate changed, re-deriving the redemption rate.
    DepositRateChanged {
        rate_deposit_usd: Fixed,
        rate_redemption_usd: Fixed,
    },
    /// Spread changed, re-deriving the redemption rate.
    SpreadChanged {
        spread_usd: Fixed,
        rate_redemption_usd: Fixed,
    },
}
