use anchor_lang::prelude::*;

use crate::constants::{HOLDER_LOG_SEED, LEDGER_SEED};
use crate::state::{HolderLog, Ledger};
use crate::utils::accounts::load_or_default;

pub fn emit_holder_log(ctx: Context<EmitHolderLog>, holder: Pubkey, index: u64) -> Result<()> {
    let log: HolderLog = load_or_default(&ctx.accounts.holder_log)?;

    emit!(HolderLogQuote {
        holder,
        index,
        shares_increased: log.shares_increased,
        shares_decreased: log.shares_decreased,
        settled: log.settled,
        total_shares_snapshot: log.total_shares_snapshot,
        rewarded_amount: log.rewarded_amount,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(holder: Pubkey, index: u64)]
pub struct EmitHolderLog<'info> {
    #[account(seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    /// CHECK: Holder log PDA; may not exist yet, read via `load_or_default`.
    #[account(
        seeds = [
            HOLDER_LOG_SEED,
            ledger.key().as_ref(),
            holder.as_ref(),
            &index.to_le_bytes()
        ],
        bump
    )]
    pub holder_log: UncheckedAccount<'info>,
}

#[event]
pub struct HolderLogQuote {
    pub holder: Pubkey,
    pub index: u64,
    pub shares_increased: u64,
    pub shares_decreased: u64,
    pub settled: bool,
    pub total_shares_snapshot: u64,
    pub rewarded_amount: u64,
}
