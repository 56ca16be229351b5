pub mod create_ledger;
pub mod mint_shares;
pub mod deposit;
pub mod transfer_shares;
pub mod settle_period;
pub mod settle_holder_log;
pub mod withdraw;
pub mod emit_period_log;
pub mod emit_holder_log;
pub mod emit_holder_summary;
pub mod emit_ledger_summary;
pub mod emit_period_index_at;

pub use create_ledger::*;
pub use mint_shares::*;
pub use deposit::*;
pub use transfer_shares::*;
pub use settle_period::*;
pub use settle_holder_log::*;
pub use withdraw::*;
pub use emit_period_log::*;
pub use emit_holder_log::*;
pub use emit_holder_summary::*;
pub use emit_ledger_summary::*;
pub use emit_period_index_at::*;
