use anchor_lang::prelude::*;

use crate::constants::{HOLDER_SEED, LEDGER_SEED};
use crate::state::{HolderAccount, Ledger};
use crate::utils::accounts::load_or_default;

/// Current shares (balance) and unpaid rewards of `holder`.
pub fn emit_holder_summary(ctx: Context<EmitHolderSummary>, holder: Pubkey) -> Result<()> {
    let account: HolderAccount = load_or_default(&ctx.accounts.holder_account)?;

    emit!(HolderSummaryQuote {
        holder,
        current_shares: account.current_shares,
        unpaid_amount: account.unpaid_amount,
        settled_logs: account.settled_logs,
        total_withdrawn: account.total_withdrawn,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(holder: Pubkey)]
pub struct EmitHolderSummary<'info> {
    #[account(seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    /// CHECK: Holder PDA; may not exist yet, read via `load_or_default`.
    #[account(
        seeds = [HOLDER_SEED, ledger.key().as_ref(), holder.as_ref()],
        bump
    )]
    pub holder_account: UncheckedAccount<'info>,
}

#[event]
pub struct HolderSummaryQuote {
    pub holder: Pubkey,
    pub current_shares: u64,
    pub unpaid_amount: u64,
    /// Next holder log index allowed to settle.
    pub settled_logs: u64,
    pub total_withdrawn: u64,
}
