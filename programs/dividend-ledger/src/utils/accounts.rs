use anchor_lang::prelude::*;

use crate::error::LedgerError;

/// Reads a lazily created program account. A PDA that was never written
/// reads as the zero-valued record.
pub fn load_or_default<T>(info: &AccountInfo) -> Result<T>
where
    T: AccountDeserialize + Default,
{
    if info.data_is_empty() {
        return Ok(T::default());
    }
    require_keys_eq!(*info.owner, crate::ID, LedgerError::InvalidLogAccount);
    let data = info.try_borrow_data()?;
    let record = T::try_deserialize(&mut &data[..])?;
    Ok(record)
}

/// Like `load_or_default`, but keeps a writable handle. `None` when the PDA was
/// never written; the caller persists changes with `exit`.
pub fn load_existing<'a, T>(info: &'a AccountInfo<'a>) -> Result<Option<Account<'a, T>>>
where
    T: AccountSerialize + AccountDeserialize + Owner + Clone,
{
    if info.data_is_empty() {
        return Ok(None);
    }
    Ok(Some(Account::try_from(info)?))
}
