use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{LEDGER_SEED, PERIOD_LOG_SEED, VAULT_SEED};
use crate::engine;
use crate::error::LedgerError;
use crate::state::{Ledger, PeriodLog};

pub fn deposit(ctx: Context<Deposit>, amount: u64, period_index: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let ledger_key = ctx.accounts.ledger.key();

    require_keys_eq!(
        ctx.accounts.depositor_token_account.mint,
        ctx.accounts.ledger.mint,
        LedgerError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.depositor_token_account.owner,
        ctx.accounts.depositor.key(),
        LedgerError::InvalidTokenAccount
    );

    let period_log = &mut ctx.accounts.period_log;
    period_log.open(ledger_key, period_index, ctx.bumps.period_log);
    engine::record_deposit(&mut ctx.accounts.ledger, period_log, amount, now)?;
    let received_amount = period_log.received_amount;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.depositor_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.depositor.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(PaymentDeposited {
        depositor: ctx.accounts.depositor.key(),
        period_index,
        amount,
        received_amount,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(amount: u64, period_index: u64)]
pub struct Deposit<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    #[account(
        init_if_needed,
        payer = depositor,
        space = 8 + PeriodLog::SIZE,
        seeds = [PERIOD_LOG_SEED, ledger.key().as_ref(), &period_index.to_le_bytes()],
        bump
    )]
    pub period_log: Account<'info, PeriodLog>,

    #[account(
        mut,
        seeds = [VAULT_SEED, ledger.key().as_ref()],
        bump = ledger.vault_bump,
        constraint = vault.mint == ledger.mint @ LedgerError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub depositor_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub depositor: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct PaymentDeposited {
    pub depositor: Pubkey,
    pub period_index: u64,
    pub amount: u64,
    /// Period total after this deposit.
    pub received_amount: u64,
}
