use anchor_lang::prelude::*;

use crate::constants::{LEDGER_SEED, PERIOD_LOG_SEED};
use crate::engine;
use crate::state::{Ledger, PeriodLog};

/// Permissionless: anyone may settle an elapsed period once its predecessor is settled.
pub fn settle_period(ctx: Context<SettlePeriod>, index: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let ledger_key = ctx.accounts.ledger.key();

    let period_log = &mut ctx.accounts.period_log;
    period_log.open(ledger_key, index, ctx.bumps.period_log);
    let next_period_log = &mut ctx.accounts.next_period_log;
    next_period_log.open(
        ledger_key,
        index.saturating_add(1),
        ctx.bumps.next_period_log,
    );

    let s = engine::settle_period(
        &mut ctx.accounts.ledger,
        period_log,
        next_period_log,
        now,
    )?;

    msg!(
        "Period {} settled: snapshot={} per_share={} carried={}",
        index,
        s.snapshot,
        s.per_share,
        s.remainder
    );

    emit!(PeriodSettled {
        index,
        total_shares_snapshot: s.snapshot,
        pool: s.pool,
        per_share: s.per_share,
        distributed: s.distributed,
        carried_forward: s.remainder,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(index: u64)]
pub struct SettlePeriod<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + PeriodLog::SIZE,
        seeds = [PERIOD_LOG_SEED, ledger.key().as_ref(), &index.to_le_bytes()],
        bump
    )]
    pub period_log: Account<'info, PeriodLog>,

    /// Receives the carry-forward; may not have been referenced before.
    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + PeriodLog::SIZE,
        seeds = [
            PERIOD_LOG_SEED,
            ledger.key().as_ref(),
            &index.saturating_add(1).to_le_bytes()
        ],
        bump
    )]
    pub next_period_log: Account<'info, PeriodLog>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct PeriodSettled {
    pub index: u64,
    pub total_shares_snapshot: u64,
    pub pool: u64,
    pub per_share: u64,
    pub distributed: u64,
    pub carried_forward: u64,
}
