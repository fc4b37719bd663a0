//! CuBit Ledger Common Types
//!
//! This crate contains the types shared across the CuBit asset ledger:
//! the fixed-point monetary representation, caller identifiers, and the
//! error taxonomy.

pub mod error;
pub mod fixed;
pub mod identifiers;

pub use error::*;
pub use fixed::*;
pub use identifiers::*;
