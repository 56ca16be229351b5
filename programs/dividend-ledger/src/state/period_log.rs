use anchor_lang::prelude::*;

use crate::error::LedgerError;

/// Global accounting record for one period. Created on first reference.
#[account]
#[derive(Default, Debug)]
pub struct PeriodLog {
    pub ledger: Pubkey,
    /// Period number.
    pub index: u64,
    /// Sum of deposits attributed to this period.
    pub received_amount: u64,
    /// Remainder inherited from settlement of the previous period.
    pub carried_amount: u64,
    /// Shares minted during this period (transfers never change it).
    pub shares_delta: u64,
    pub settled: bool,
    /// Cumulative shares through this period; valid once settled.
    pub total_shares_snapshot: u64,
    /// `floor(pool / snapshot)`; valid once settled.
    pub per_share: u64,
    pub bump: u8,
}

impl PeriodLog {
    pub const SIZE: usize =
        32 + // ledger
        8 +  // index
        8 +  // received_amount
        8 +  // carried_amount
        8 +  // shares_delta
        1 +  // settled
        8 +  // total_shares_snapshot
        8 +  // per_share
        1;   // bump

    /// Binds a freshly created (zeroed) log to its ledger and index. No-op afterwards.
    pub fn open(&mut self, ledger: Pubkey, index: u64, bump: u8) {
        if self.ledger == Pubkey::default() {
            self.ledger = ledger;
            self.index = index;
            self.bump = bump;
        }
    }

    /// Amount to distribute at settlement.
    pub fn pool(&self) -> std::result::Result<u64, LedgerError> {
        self.received_amount
            .checked_add(self.carried_amount)
            .ok_or(LedgerError::MathOverflow)
    }

    pub fn add_received(&mut self, amount: u64) -> std::result::Result<(), LedgerError> {
        self.received_amount = self
            .received_amount
            .checked_add(amount)
            .ok_or(LedgerError::MathOverflow)?;
        Ok(())
    }

    pub fn add_shares_delta(&mut self, amount: u64) -> std::result::Result<(), LedgerError> {
        self.shares_delta = self
            .shares_delta
            .checked_add(amount)
            .ok_or(LedgerError::MathOverflow)?;
        Ok(())
    }

    pub fn add_carry(&mut self, amount: u64) -> std::result::Result<(), LedgerError> {
        self.carried_amount = self
            .carried_amount
            .checked_add(amount)
            .ok_or(LedgerError::MathOverflow)?;
        Ok(())
    }
}
