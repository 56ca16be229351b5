use anchor_lang::prelude::*;

use crate::error::LedgerError;
use crate::utils::period;

/// Singleton ledger state PDA.
#[account]
#[derive(Default)]
pub struct Ledger {
    /// Authority allowed to mint shares.
    pub admin: Pubkey,
    /// Payment token mint.
    pub mint: Pubkey,
    /// PDA-owned token account holding undistributed and unpaid payments.
    pub vault: Pubkey,
    /// Period length in seconds (> 0, immutable).
    pub period_length: u64,
    /// Creation timestamp (Unix seconds); period 0 starts here.
    pub created_at: i64,
    /// Shares outstanding (sum of all holders' current shares).
    pub total_shares: u64,
    /// Number of settled period logs; also the next index allowed to settle.
    pub settled_periods: u64,
    /// Share snapshot of the last settled period log (0 before any settlement).
    pub settled_shares: u64,
    /// Lifetime sum of deposits.
    pub total_deposited: u64,
    /// Lifetime sum of `per_share * snapshot` over settled period logs.
    pub total_distributed: u64,
    /// Lifetime sum of rewards credited to holders.
    pub total_rewarded: u64,
    /// Lifetime sum of withdrawals.
    pub total_withdrawn: u64,
    pub bump: u8,
    pub vault_bump: u8,
}

impl Ledger {
    pub const SIZE: usize =
        32 + // admin
        32 + // mint
        32 + // vault
        8 +  // period_length
        8 +  // created_at
        8 +  // total_shares
        8 +  // settled_periods
        8 +  // settled_shares
        8 +  // total_deposited
        8 +  // total_distributed
        8 +  // total_rewarded
        8 +  // total_withdrawn
        1 +  // bump
        1;   // vault_bump

    pub fn period_index_at(&self, ts: i64) -> std::result::Result<u64, LedgerError> {
        period::period_index_at(ts, self.created_at, self.period_length)
    }

    /// Timestamp at which period `index` closes (start of `index + 1`).
    pub fn period_ends_at(&self, index: u64) -> std::result::Result<i64, LedgerError> {
        let next = index.checked_add(1).ok_or(LedgerError::MathOverflow)?;
        period::period_start(next, self.created_at, self.period_length)
    }

    pub fn ensure_admin(&self, caller: &Pubkey) -> std::result::Result<(), LedgerError> {
        if *caller != self.admin {
            return Err(LedgerError::Unauthorized);
        }
        Ok(())
    }

    /// Log PDAs are addressed by index, so callers name the period they write to.
    pub fn ensure_current_period(
        &self,
        index: u64,
        now: i64,
    ) -> std::result::Result<(), LedgerError> {
        if self.period_index_at(now)? != index {
            return Err(LedgerError::StalePeriod);
        }
        Ok(())
    }

    pub fn is_period_settled(&self, index: u64) -> bool {
        index < self.settled_periods
    }
}
