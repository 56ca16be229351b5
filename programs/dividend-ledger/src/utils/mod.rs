pub mod accounts;
pub mod period;
