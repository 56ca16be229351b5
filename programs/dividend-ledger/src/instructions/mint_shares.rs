use anchor_lang::prelude::*;

use crate::constants::{HOLDER_LOG_SEED, HOLDER_SEED, LEDGER_SEED, PERIOD_LOG_SEED};
use crate::engine;
use crate::error::LedgerError;
use crate::state::{HolderAccount, HolderLog, Ledger, PeriodLog};

pub fn mint_shares(
    ctx: Context<MintShares>,
    to: Pubkey,
    amount: u64,
    period_index: u64,
) -> Result<()> {
    require!(to != Pubkey::default(), LedgerError::InvalidPubkey);

    let now = Clock::get()?.unix_timestamp;
    let ledger_key = ctx.accounts.ledger.key();

    let period_log = &mut ctx.accounts.period_log;
    period_log.open(ledger_key, period_index, ctx.bumps.period_log);
    let holder = &mut ctx.accounts.holder_account;
    holder.open(ledger_key, to, ctx.bumps.holder_account);
    let holder_log = &mut ctx.accounts.holder_log;
    holder_log.open(ledger_key, to, period_index, ctx.bumps.holder_log);

    engine::mint_shares(
        &mut ctx.accounts.ledger,
        period_log,
        holder,
        holder_log,
        &ctx.accounts.admin.key(),
        amount,
        now,
    )?;

    emit!(SharesMinted {
        to,
        period_index,
        amount,
        holder_shares: holder.current_shares,
        total_shares: ctx.accounts.ledger.total_shares,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(to: Pubkey, amount: u64, period_index: u64)]
pub struct MintShares<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + PeriodLog::SIZE,
        seeds = [PERIOD_LOG_SEED, ledger.key().as_ref(), &period_index.to_le_bytes()],
        bump
    )]
    pub period_log: Account<'info, PeriodLog>,

    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + HolderAccount::SIZE,
        seeds = [HOLDER_SEED, ledger.key().as_ref(), to.as_ref()],
        bump
    )]
    pub holder_account: Account<'info, HolderAccount>,

    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + HolderLog::SIZE,
        seeds = [
            HOLDER_LOG_SEED,
            ledger.key().as_ref(),
            to.as_ref(),
            &period_index.to_le_bytes()
        ],
        bump
    )]
    pub holder_log: Account<'info, HolderLog>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct SharesMinted {
    pub to: Pubkey,
    pub period_index: u64,
    pub amount: u64,
    pub holder_shares: u64,
    pub total_shares: u64,
}
