pub mod holder;
pub mod ledger;
pub mod period_log;

pub use holder::*;
pub use ledger::*;
pub use period_log::*;
