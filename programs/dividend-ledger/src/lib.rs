use anchor_lang::prelude::*;

pub mod constants;
pub mod engine;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;

declare_id!("5Ucn3bKTGLzv8VfWurcQuj6pggEJeb4hUTPisRwozDKc");

#[program]
pub mod dividend_ledger {
    use super::*;

    /// Creates the singleton ledger; the signer becomes admin and period 0 starts now.
    pub fn create_ledger(ctx: Context<CreateLedger>, period_length: u64) -> Result<()> {
        instructions::create_ledger(ctx, period_length)
    }

    /// Admin-only share issuance into the current period.
    pub fn mint_shares(
        ctx: Context<MintShares>,
        to: Pubkey,
        amount: u64,
        period_index: u64,
    ) -> Result<()> {
        instructions::mint_shares(ctx, to, amount, period_index)
    }

    /// Adds a payment to the current period's pool. Open to anyone.
    pub fn deposit(ctx: Context<Deposit>, amount: u64, period_index: u64) -> Result<()> {
        instructions::deposit(ctx, amount, period_index)
    }

    pub fn transfer_shares(
        ctx: Context<TransferShares>,
        to: Pubkey,
        amount: u64,
        period_index: u64,
    ) -> Result<()> {
        instructions::transfer_shares(ctx, to, amount, period_index)
    }

    pub fn settle_period(ctx: Context<SettlePeriod>, index: u64) -> Result<()> {
        instructions::settle_period(ctx, index)
    }

    pub fn settle_holder_log(
        ctx: Context<SettleHolderLog>,
        holder: Pubkey,
        index: u64,
    ) -> Result<()> {
        instructions::settle_holder_log(ctx, holder, index)
    }

    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        instructions::withdraw(ctx)
    }

    pub fn emit_period_log(ctx: Context<EmitPeriodLog>, index: u64) -> Result<()> {
        instructions::emit_period_log(ctx, index)
    }

    pub fn emit_holder_log(
        ctx: Context<EmitHolderLog>,
        holder: Pubkey,
        index: u64,
    ) -> Result<()> {
        instructions::emit_holder_log(ctx, holder, index)
    }

    pub fn emit_holder_summary(ctx: Context<EmitHolderSummary>, holder: Pubkey) -> Result<()> {
        instructions::emit_holder_summary(ctx, holder)
    }

    pub fn emit_ledger_summary(ctx: Context<EmitLedgerSummary>) -> Result<()> {
        instructions::emit_ledger_summary(ctx)
    }

    pub fn emit_period_index_at(ctx: Context<EmitPeriodIndexAt>, timestamp: i64) -> Result<()> {
        instructions::emit_period_index_at(ctx, timestamp)
    }
}
