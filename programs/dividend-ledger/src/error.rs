use anchor_lang::prelude::*;

/// Error codes for the dividend ledger program.
#[error_code]
pub enum LedgerError {
    #[msg("Invalid configuration: period length must be > 0")]
    InvalidConfig,

    #[msg("Unauthorized: admin signature required")]
    Unauthorized,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Insufficient shares for transfer")]
    InsufficientShares,

    #[msg("Period has not fully elapsed or its log is not settled")]
    NotYetElapsed,

    #[msg("Predecessor log is not settled")]
    OutOfOrder,

    #[msg("Log is already settled")]
    AlreadySettled,

    #[msg("Timestamp precedes ledger creation")]
    InvalidTimestamp,

    #[msg("Period index does not match the current period")]
    StalePeriod,

    #[msg("Cannot transfer shares to self")]
    SelfTransfer,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Log account is not owned by this program")]
    InvalidLogAccount,

    #[msg("Math overflow")]
    MathOverflow,
}
