use anchor_lang::prelude::Pubkey;

use crate::error::LedgerError;
use crate::state::{HolderAccount, HolderLog, Ledger, PeriodLog};

/// Issues `amount` new shares to `holder` in the current period.
pub fn mint_shares(
    ledger: &mut Ledger,
    period_log: &mut PeriodLog,
    holder: &mut HolderAccount,
    holder_log: &mut HolderLog,
    caller: &Pubkey,
    amount: u64,
    now: i64,
) -> Result<(), LedgerError> {
    ledger.ensure_admin(caller)?;
    if amount == 0 {
        return Err(LedgerError::InvalidAmount);
    }
    ledger.ensure_current_period(period_log.index, now)?;
    if holder_log.index != period_log.index {
        return Err(LedgerError::InvalidLogAccount);
    }

    let total_shares = ledger
        .total_shares
        .checked_add(amount)
        .ok_or(LedgerError::MathOverflow)?;
    let current_shares = holder
        .current_shares
        .checked_add(amount)
        .ok_or(LedgerError::MathOverflow)?;
    let mut next_log = holder_log.clone();
    next_log.add_increase(amount)?;
    let mut next_period = period_log.clone();
    next_period.add_shares_delta(amount)?;

    ledger.total_shares = total_shares;
    holder.current_shares = current_shares;
    *holder_log = next_log;
    *period_log = next_period;
    Ok(())
}

/// Moves `amount` shares between holders. Total outstanding shares are unchanged,
/// so no period log is involved.
#[allow(clippy::too_many_arguments)]
pub fn transfer_shares(
    ledger: &Ledger,
    from: &mut HolderAccount,
    from_log: &mut HolderLog,
    to: &mut HolderAccount,
    to_log: &mut HolderLog,
    caller: &Pubkey,
    amount: u64,
    now: i64,
) -> Result<(), LedgerError> {
    if *caller != from.owner {
        return Err(LedgerError::Unauthorized);
    }
    if from.owner == to.owner {
        return Err(LedgerError::SelfTransfer);
    }
    if amount == 0 {
        return Err(LedgerError::InvalidAmount);
    }
    ledger.ensure_current_period(from_log.index, now)?;
    if to_log.index != from_log.index {
        return Err(LedgerError::InvalidLogAccount);
    }
    if from.current_shares < amount {
        return Err(LedgerError::InsufficientShares);
    }

    let to_shares = to
        .current_shares
        .checked_add(amount)
        .ok_or(LedgerError::MathOverflow)?;
    let mut next_from_log = from_log.clone();
    next_from_log.add_decrease(amount)?;
    let mut next_to_log = to_log.clone();
    next_to_log.add_increase(amount)?;

    from.current_shares -= amount;
    to.current_shares = to_shares;
    *from_log = next_from_log;
    *to_log = next_to_log;
    Ok(())
}
