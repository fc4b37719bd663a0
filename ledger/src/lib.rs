//! CuBit Asset Ledger Core
//!
//! Invariant-preserving accounting for the CuBit pegged unit. One flat
//! ledger record tracks the circulation/reserve split of a fixed supply,
//! the composition of the backing asset pool, and the deposit/redemption
//! exchange rates derived from a configurable spread. Every mutation is
//! gated to the record owner, and the record is initialized exactly once
//! because deployment happens behind an upgradeable proxy rather than a
//! constructor.

pub mod access;
pub mod config;
pub mod events;
pub mod rates;
pub mod state;

pub use config::LedgerConfig;
pub use events::{LedgerEvent, LedgerEventKind};
pub use state::{AssetLedger, LEDGER_VERSION};
