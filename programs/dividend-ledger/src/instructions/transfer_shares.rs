use anchor_lang::prelude::*;

use crate::constants::{HOLDER_LOG_SEED, HOLDER_SEED, LEDGER_SEED};
use crate::engine;
use crate::error::LedgerError;
use crate::state::{HolderAccount, HolderLog, Ledger};

pub fn transfer_shares(
    ctx: Context<TransferShares>,
    to: Pubkey,
    amount: u64,
    period_index: u64,
) -> Result<()> {
    require!(to != Pubkey::default(), LedgerError::InvalidPubkey);

    let now = Clock::get()?.unix_timestamp;
    let ledger_key = ctx.accounts.ledger.key();
    let from = ctx.accounts.from.key();

    let from_log = &mut ctx.accounts.from_log;
    from_log.open(ledger_key, from, period_index, ctx.bumps.from_log);
    let to_holder = &mut ctx.accounts.to_holder;
    to_holder.open(ledger_key, to, ctx.bumps.to_holder);
    let to_log = &mut ctx.accounts.to_log;
    to_log.open(ledger_key, to, period_index, ctx.bumps.to_log);

    engine::transfer_shares(
        &ctx.accounts.ledger,
        &mut ctx.accounts.from_holder,
        from_log,
        to_holder,
        to_log,
        &from,
        amount,
        now,
    )?;

    emit!(SharesTransferred {
        from,
        to,
        period_index,
        amount,
        from_shares: ctx.accounts.from_holder.current_shares,
        to_shares: to_holder.current_shares,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(to: Pubkey, amount: u64, period_index: u64)]
pub struct TransferShares<'info> {
    #[account(seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, ledger.key().as_ref(), from.key().as_ref()],
        bump = from_holder.bump,
        constraint = from_holder.owner != to @ LedgerError::SelfTransfer,
    )]
    pub from_holder: Account<'info, HolderAccount>,

    #[account(
        init_if_needed,
        payer = from,
        space = 8 + HolderLog::SIZE,
        seeds = [
            HOLDER_LOG_SEED,
            ledger.key().as_ref(),
            from.key().as_ref(),
            &period_index.to_le_bytes()
        ],
        bump
    )]
    pub from_log: Account<'info, HolderLog>,

    #[account(
        init_if_needed,
        payer = from,
        space = 8 + HolderAccount::SIZE,
        seeds = [HOLDER_SEED, ledger.key().as_ref(), to.as_ref()],
        bump
    )]
    pub to_holder: Account<'info, HolderAccount>,

    #[account(
        init_if_needed,
        payer = from,
        space = 8 + HolderLog::SIZE,
        seeds = [
            HOLDER_LOG_SEED,
            ledger.key().as_ref(),
            to.as_ref(),
            &period_index.to_le_bytes()
        ],
        bump
    )]
    pub to_log: Account<'info, HolderLog>,

    #[account(mut)]
    pub from: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct SharesTransferred {
    pub from: Pubkey,
    pub to: Pubkey,
    pub period_index: u64,
    pub amount: u64,
    pub from_shares: u64,
    pub to_shares: u64,
}
