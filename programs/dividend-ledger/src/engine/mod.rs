//! Host-independent ledger transitions.
//!
//! Every function validates all of its preconditions before writing, so a
//! returned error leaves the passed accounts untouched. Instruction handlers
//! only resolve accounts and the clock, then delegate here.

pub mod payout;
pub mod settlement;
pub mod shares;

pub use payout::*;
pub use settlement::*;
pub use shares::*;

#[cfg(test)]
pub(crate) mod harness;
