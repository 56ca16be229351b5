//! Fixed-length period resolution.
//! - period_index_at(t) = floor((t - created_at) / period_length) for t >= created_at
//! - timestamps before creation have no period (no shares or receipts exist yet)

use crate::error::LedgerError;

/// Index of the period containing `ts`.
pub fn period_index_at(ts: i64, created_at: i64, period_length: u64) -> Result<u64, LedgerError> {
    if period_length == 0 {
        return Err(LedgerError::InvalidConfig);
    }
    if ts < created_at {
        return Err(LedgerError::InvalidTimestamp);
    }
    let elapsed = (ts as i128) - (created_at as i128);
    let elapsed = u64::try_from(elapsed).map_err(|_| LedgerError::MathOverflow)?;
    Ok(elapsed / period_length)
}

/// Timestamp at which period `index` opens.
pub fn period_start(index: u64, created_at: i64, period_length: u64) -> Result<i64, LedgerError> {
    let offset = (index as i128)
        .checked_mul(period_length as i128)
        .ok_or(LedgerError::MathOverflow)?;
    let start = (created_at as i128)
        .checked_add(offset)
        .ok_or(LedgerError::MathOverflow)?;
    i64::try_from(start).map_err(|_| LedgerError::MathOverflow)
}
