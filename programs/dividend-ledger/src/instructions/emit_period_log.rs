use anchor_lang::prelude::*;

use crate::constants::{LEDGER_SEED, PERIOD_LOG_SEED};
use crate::state::{Ledger, PeriodLog};
use crate::utils::accounts::load_or_default;

pub fn emit_period_log(ctx: Context<EmitPeriodLog>, index: u64) -> Result<()> {
    let log: PeriodLog = load_or_default(&ctx.accounts.period_log)?;

    emit!(PeriodLogQuote {
        index,
        received_amount: log.received_amount,
        carried_amount: log.carried_amount,
        shares_delta: log.shares_delta,
        settled: log.settled,
        total_shares_snapshot: log.total_shares_snapshot,
        per_share: log.per_share,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(index: u64)]
pub struct EmitPeriodLog<'info> {
    #[account(seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    /// CHECK: Period log PDA; may not exist yet, read via `load_or_default`.
    #[account(
        seeds = [PERIOD_LOG_SEED, ledger.key().as_ref(), &index.to_le_bytes()],
        bump
    )]
    pub period_log: UncheckedAccount<'info>,
}

#[event]
pub struct PeriodLogQuote {
    pub index: u64,
    pub received_amount: u64,
    pub carried_amount: u64,
    pub shares_delta: u64,
    pub settled: bool,
    pub total_shares_snapshot: u64,
    pub per_share: u64,
}
