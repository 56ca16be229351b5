use anchor_lang::prelude::*;

use crate::constants::LEDGER_SEED;
use crate::state::Ledger;

pub fn emit_ledger_summary(ctx: Context<EmitLedgerSummary>) -> Result<()> {
    let ledger = &ctx.accounts.ledger;
    let now = Clock::get()?.unix_timestamp;
    let period_index = ledger.period_index_at(now)?;

    emit!(LedgerSummaryQuote {
        admin: ledger.admin,
        period_length: ledger.period_length,
        created_at: ledger.created_at,
        period_index,
        period_ends_at: ledger.period_ends_at(period_index)?,
        total_shares: ledger.total_shares,
        settled_periods: ledger.settled_periods,
        total_deposited: ledger.total_deposited,
        total_distributed: ledger.total_distributed,
        total_rewarded: ledger.total_rewarded,
        total_withdrawn: ledger.total_withdrawn,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitLedgerSummary<'info> {
    #[account(seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,
}

#[event]
pub struct LedgerSummaryQuote {
    pub admin: Pubkey,
    pub period_length: u64,
    pub created_at: i64,
    /// Current period.
    pub period_index: u64,
    pub period_ends_at: i64,
    pub total_shares: u64,
    pub settled_periods: u64,
    pub total_deposited: u64,
    pub total_distributed: u64,
    pub total_rewarded: u64,
    pub total_withdrawn: u64,
}
