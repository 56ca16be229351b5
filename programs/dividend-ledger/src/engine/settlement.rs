use crate::error::LedgerError;
use crate::state::{HolderAccount, HolderLog, Ledger, PeriodLog};

/// Outcome of settling one period log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PeriodSettlement {
    pub snapshot: u64,
    pub pool: u64,
    pub per_share: u64,
    pub distributed: u64,
    /// Carried into the next period's pool.
    pub remainder: u64,
}

/// Splits `pool` over `snapshot` shares. With no shares outstanding the whole pool
/// is carried.
pub fn split_pool(pool: u64, snapshot: u64) -> (u64, u64) {
    if snapshot == 0 {
        return (0, pool);
    }
    (pool / snapshot, pool % snapshot)
}

/// Settles the global log of an elapsed period and carries the integer-division
/// remainder into `next`, the log at `index + 1`.
pub fn settle_period(
    ledger: &mut Ledger,
    log: &mut PeriodLog,
    next: &mut PeriodLog,
    now: i64,
) -> Result<PeriodSettlement, LedgerError> {
    let index = log.index;
    if index >= ledger.period_index_at(now)? {
        return Err(LedgerError::NotYetElapsed);
    }
    if index > ledger.settled_periods {
        return Err(LedgerError::OutOfOrder);
    }
    if log.settled || index < ledger.settled_periods {
        return Err(LedgerError::AlreadySettled);
    }
    if index.checked_add(1) != Some(next.index) {
        return Err(LedgerError::InvalidLogAccount);
    }

    let snapshot = ledger
        .settled_shares
        .checked_add(log.shares_delta)
        .ok_or(LedgerError::MathOverflow)?;
    let pool = log.pool()?;
    let (per_share, remainder) = split_pool(pool, snapshot);
    let distributed = pool - remainder;

    let total_distributed = ledger
        .total_distributed
        .checked_add(distributed)
        .ok_or(LedgerError::MathOverflow)?;
    let mut next_log = next.clone();
    next_log.add_carry(remainder)?;

    log.total_shares_snapshot = snapshot;
    log.per_share = per_share;
    log.settled = true;
    *next = next_log;
    ledger.settled_periods = index + 1;
    ledger.settled_shares = snapshot;
    ledger.total_distributed = total_distributed;

    Ok(PeriodSettlement {
        snapshot,
        pool,
        per_share,
        distributed,
        remainder,
    })
}

/// Settles one holder log against its settled period log and credits the reward.
/// Returns the reward.
pub fn settle_holder_log(
    ledger: &mut Ledger,
    period_log: &PeriodLog,
    holder: &mut HolderAccount,
    log: &mut HolderLog,
) -> Result<u64, LedgerError> {
    let index = log.index;
    if period_log.index != index {
        return Err(LedgerError::InvalidLogAccount);
    }
    if !ledger.is_period_settled(index) || !period_log.settled {
        return Err(LedgerError::NotYetElapsed);
    }
    if index > holder.settled_logs {
        return Err(LedgerError::OutOfOrder);
    }
    if log.settled || index < holder.settled_logs {
        return Err(LedgerError::AlreadySettled);
    }

    let snapshot = holder
        .settled_shares
        .checked_add(log.shares_increased)
        .and_then(|s| s.checked_sub(log.shares_decreased))
        .ok_or(LedgerError::MathOverflow)?;
    let reward = period_log
        .per_share
        .checked_mul(snapshot)
        .ok_or(LedgerError::MathOverflow)?;
    let unpaid = holder
        .unpaid_amount
        .checked_add(reward)
        .ok_or(LedgerError::MathOverflow)?;
    let total_rewarded = ledger
        .total_rewarded
        .checked_add(reward)
        .ok_or(LedgerError::MathOverflow)?;

    log.total_shares_snapshot = snapshot;
    log.rewarded_amount = reward;
    log.settled = true;
    holder.settled_logs = index + 1;
    holder.settled_shares = snapshot;
    holder.unpaid_amount = unpaid;
    ledger.total_rewarded = total_rewarded;
    Ok(reward)
}
