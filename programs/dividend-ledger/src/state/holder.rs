use anchor_lang::prelude::*;

use crate::error::LedgerError;

/// Live share balance and payout state of one holder.
#[account]
#[derive(Default, Debug)]
pub struct HolderAccount {
    pub ledger: Pubkey,
    pub owner: Pubkey,
    /// Authoritative live balance.
    pub current_shares: u64,
    /// Rewards credited by settled logs and not yet withdrawn.
    pub unpaid_amount: u64,
    /// Number of settled holder logs; also the next index allowed to settle.
    pub settled_logs: u64,
    /// Share snapshot of the last settled holder log.
    pub settled_shares: u64,
    pub total_withdrawn: u64,
    pub bump: u8,
}

impl HolderAccount {
    pub const SIZE: usize =
        32 + // ledger
        32 + // owner
        8 +  // current_shares
        8 +  // unpaid_amount
        8 +  // settled_logs
        8 +  // settled_shares
        8 +  // total_withdrawn
        1;   // bump

    pub fn open(&mut self, ledger: Pubkey, owner: Pubkey, bump: u8) {
        if self.owner == Pubkey::default() {
            self.ledger = ledger;
            self.owner = owner;
            self.bump = bump;
        }
    }
}

/// Per-holder, per-period share movements and the resulting reward.
#[account]
#[derive(Default, Debug)]
pub struct HolderLog {
    pub ledger: Pubkey,
    pub owner: Pubkey,
    pub index: u64,
    pub shares_increased: u64,
    pub shares_decreased: u64,
    pub settled: bool,
    /// Holder balance at the end of this period; valid once settled.
    pub total_shares_snapshot: u64,
    /// Valid once settled.
    pub rewarded_amount: u64,
    pub bump: u8,
}

impl HolderLog {
    pub const SIZE: usize =
        32 + // ledger
        32 + // owner
        8 +  // index
        8 +  // shares_increased
        8 +  // shares_decreased
        1 +  // settled
        8 +  // total_shares_snapshot
        8 +  // rewarded_amount
        1;   // bump

    pub fn open(&mut self, ledger: Pubkey, owner: Pubkey, index: u64, bump: u8) {
        if self.owner == Pubkey::default() {
            self.ledger = ledger;
            self.owner = owner;
            self.index = index;
            self.bump = bump;
        }
    }

    pub fn add_increase(&mut self, amount: u64) -> std::result::Result<(), LedgerError> {
        self.shares_increased = self
            .shares_increased
            .checked_add(amount)
            .ok_or(LedgerError::MathOverflow)?;
        Ok(())
    }

    pub fn add_decrease(&mut self, amount: u64) -> std::result::Result<(), LedgerError> {
        self.shares_decreased = self
            .shares_decreased
            .checked_add(amount)
            .ok_or(LedgerError::MathOverflow)?;
        Ok(())
    }
}
