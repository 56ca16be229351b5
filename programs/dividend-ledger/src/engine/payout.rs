use crate::error::LedgerError;
use crate::state::{HolderAccount, Ledger, PeriodLog};

/// Attributes an incoming payment to the current period's pool.
pub fn record_deposit(
    ledger: &mut Ledger,
    period_log: &mut PeriodLog,
    amount: u64,
    now: i64,
) -> Result<(), LedgerError> {
    if amount == 0 {
        return Err(LedgerError::InvalidAmount);
    }
    ledger.ensure_current_period(period_log.index, now)?;

    let total_deposited = ledger
        .total_deposited
        .checked_add(amount)
        .ok_or(LedgerError::MathOverflow)?;
    let mut next = period_log.clone();
    next.add_received(amount)?;

    ledger.total_deposited = total_deposited;
    *period_log = next;
    Ok(())
}

/// Zeroes the holder's unpaid rewards and returns the amount to pay out.
/// Zero is a valid result.
pub fn take_unpaid(ledger: &mut Ledger, holder: &mut HolderAccount) -> Result<u64, LedgerError> {
    let amount = holder.unpaid_amount;
    let holder_withdrawn = holder
        .total_withdrawn
        .checked_add(amount)
        .ok_or(LedgerError::MathOverflow)?;
    let ledger_withdrawn = ledger
        .total_withdrawn
        .checked_add(amount)
        .ok_or(LedgerError::MathOverflow)?;

    holder.unpaid_amount = 0;
    holder.total_withdrawn = holder_withdrawn;
    ledger.total_withdrawn = ledger_withdrawn;
    Ok(amount)
}
