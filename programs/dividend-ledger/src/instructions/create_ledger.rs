use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{LEDGER_SEED, VAULT_SEED};
use crate::error::LedgerError;
use crate::state::Ledger;

pub fn create_ledger(ctx: Context<CreateLedger>, period_length: u64) -> Result<()> {
    require!(period_length > 0, LedgerError::InvalidConfig);
    require!(
        i64::try_from(period_length).is_ok(),
        LedgerError::InvalidConfig
    );

    let now = Clock::get()?.unix_timestamp;

    let ledger = &mut ctx.accounts.ledger;
    ledger.admin = ctx.accounts.admin.key();
    ledger.mint = ctx.accounts.mint.key();
    ledger.vault = ctx.accounts.vault.key();
    ledger.period_length = period_length;
    ledger.created_at = now;
    ledger.total_shares = 0;
    ledger.settled_periods = 0;
    ledger.settled_shares = 0;
    ledger.total_deposited = 0;
    ledger.total_distributed = 0;
    ledger.total_rewarded = 0;
    ledger.total_withdrawn = 0;
    ledger.bump = ctx.bumps.ledger;
    ledger.vault_bump = ctx.bumps.vault;

    msg!("Ledger created: period_length={} created_at={}", period_length, now);

    emit!(LedgerCreated {
        admin: ledger.admin,
        mint: ledger.mint,
        vault: ledger.vault,
        period_length,
        created_at: now,
        config_hash: config_hash(ledger),
    });

    Ok(())
}

/// blake3 over the immutable configuration, for off-chain auditing.
fn config_hash(ledger: &Ledger) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    hasher.update(ledger.admin.as_ref());
    hasher.update(ledger.mint.as_ref());
    hasher.update(ledger.vault.as_ref());
    hasher.update(&ledger.period_length.to_le_bytes());
    hasher.update(&ledger.created_at.to_le_bytes());
    *hasher.finalize().as_bytes()
}

#[derive(Accounts)]
pub struct CreateLedger<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + Ledger::SIZE,
        seeds = [LEDGER_SEED],
        bump
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = ledger,
        seeds = [VAULT_SEED, ledger.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct LedgerCreated {
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub period_length: u64,
    pub created_at: i64,
    pub config_hash: [u8; 32],
}
