use anchor_lang::prelude::*;
use anchor_lang::AccountsExit;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{HOLDER_SEED, LEDGER_SEED, VAULT_SEED};
use crate::engine;
use crate::error::LedgerError;
use crate::state::{HolderAccount, Ledger};
use crate::utils::accounts::load_existing;

/// Pays the signer's unpaid rewards to `destination`. Nothing owed, including
/// never having held shares, is a no-op.
pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.destination.mint,
        ctx.accounts.ledger.mint,
        LedgerError::InvalidTokenMint
    );

    let holder_info = ctx.accounts.holder_account.to_account_info();
    let amount = match load_existing::<HolderAccount>(&holder_info)? {
        Some(mut holder_account) => {
            let amount = engine::take_unpaid(&mut ctx.accounts.ledger, &mut holder_account)?;
            holder_account.exit(&crate::ID)?;
            amount
        }
        None => 0,
    };

    if amount == 0 {
        emit!(RewardsWithdrawn {
            holder: ctx.accounts.holder.key(),
            destination: ctx.accounts.destination.key(),
            amount: 0,
        });
        return Ok(());
    }

    require!(
        ctx.accounts.vault.amount >= amount,
        LedgerError::InsufficientVaultBalance
    );

    let signer_seeds: &[&[&[u8]]] = &[&[LEDGER_SEED, &[ctx.accounts.ledger.bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.destination.to_account_info(),
                authority: ctx.accounts.ledger.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(RewardsWithdrawn {
        holder: ctx.accounts.holder.key(),
        destination: ctx.accounts.destination.key(),
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    /// CHECK: Holder PDA; may not exist yet, read via `load_existing`.
    #[account(
        mut,
        seeds = [HOLDER_SEED, ledger.key().as_ref(), holder.key().as_ref()],
        bump
    )]
    pub holder_account: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, ledger.key().as_ref()],
        bump = ledger.vault_bump,
        constraint = vault.mint == ledger.mint @ LedgerError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub destination: Account<'info, TokenAccount>,

    pub holder: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct RewardsWithdrawn {
    pub holder: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
}
