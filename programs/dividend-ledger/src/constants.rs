//! Program-wide constants.

/// Seed of the singleton ledger PDA.
pub const LEDGER_SEED: &[u8] = b"ledger";

/// Seed of the token vault PDA holding deposited payments.
pub const VAULT_SEED: &[u8] = b"vault";

/// Seed of per-period log PDAs: `[PERIOD_LOG_SEED, ledger, index_le]`.
pub const PERIOD_LOG_SEED: &[u8] = b"period_log";

/// Seed of holder account PDAs: `[HOLDER_SEED, ledger, owner]`.
pub const HOLDER_SEED: &[u8] = b"holder";

/// Seed of per-holder, per-period log PDAs: `[HOLDER_LOG_SEED, ledger, owner, index_le]`.
pub const HOLDER_LOG_SEED: &[u8] = b"holder_log";
