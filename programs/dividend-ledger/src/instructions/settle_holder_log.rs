use anchor_lang::prelude::*;

use crate::constants::{HOLDER_LOG_SEED, HOLDER_SEED, LEDGER_SEED, PERIOD_LOG_SEED};
use crate::engine;
use crate::state::{HolderAccount, HolderLog, Ledger, PeriodLog};

pub fn settle_holder_log(ctx: Context<SettleHolderLog>, holder: Pubkey, index: u64) -> Result<()> {
    let ledger_key = ctx.accounts.ledger.key();

    let period_log = &mut ctx.accounts.period_log;
    period_log.open(ledger_key, index, ctx.bumps.period_log);
    let holder_log = &mut ctx.accounts.holder_log;
    holder_log.open(ledger_key, holder, index, ctx.bumps.holder_log);

    let reward = engine::settle_holder_log(
        &mut ctx.accounts.ledger,
        period_log,
        &mut ctx.accounts.holder_account,
        holder_log,
    )?;

    emit!(HolderLogSettled {
        holder,
        index,
        total_shares_snapshot: holder_log.total_shares_snapshot,
        rewarded_amount: reward,
        unpaid_amount: ctx.accounts.holder_account.unpaid_amount,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(holder: Pubkey, index: u64)]
pub struct SettleHolderLog<'info> {
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

    #[account(
        mut,
        seeds = [HOLDER_SEED, ledger.key().as_ref(), holder.as_ref()],
        bump = holder_account.bump
    )]
    pub holder_account: Account<'info, HolderAccount>,

    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + HolderLog::SIZE,
        seeds = [
            HOLDER_LOG_SEED,
            ledger.key().as_ref(),
            holder.as_ref(),
            &index.to_le_bytes()
        ],
        bump
    )]
    pub holder_log: Account<'info, HolderLog>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct HolderLogSettled {
    pub holder: Pubkey,
    pub index: u64,
    pub total_shares_snapshot: u64,
    pub rewarded_amount: u64,
    pub unpaid_amount: u64,
}
