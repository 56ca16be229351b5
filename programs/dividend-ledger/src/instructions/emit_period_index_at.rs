use anchor_lang::prelude::*;

use crate::constants::LEDGER_SEED;
use crate::state::Ledger;

pub fn emit_period_index_at(ctx: Context<EmitPeriodIndexAt>, timestamp: i64) -> Result<()> {
    let period_index = ctx.accounts.ledger.period_index_at(timestamp)?;
    emit!(PeriodIndexQuote {
        timestamp,
        period_index,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct EmitPeriodIndexAt<'info> {
    #[account(seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,
}

#[event]
pub struct PeriodIndexQuote {
    pub timestamp: i64,
    pub period_index: u64,
}
