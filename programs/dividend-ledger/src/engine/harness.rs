//! In-memory stand-in for the host: lazily materialised accounts, a settable
//! clock, and commit-on-success so failed calls leave no trace.

use std::collections::BTreeMap;

use anchor_lang::prelude::Pubkey;

use super::{
    mint_shares, record_deposit, settle_holder_log, settle_period, take_unpaid, transfer_shares,
    PeriodSettlement,
};
use crate::error::LedgerError;
use crate::state::{HolderAccount, HolderLog, Ledger, PeriodLog};

pub const CREATED_AT: i64 = 1_700_000_000;

pub fn key(n: u8) -> Pubkey {
    Pubkey::new_from_array([n; 32])
}

pub fn admin() -> Pubkey {
    key(1)
}

pub struct Book {
    pub ledger: Ledger,
    pub periods: BTreeMap<u64, PeriodLog>,
    pub holders: BTreeMap<Pubkey, HolderAccount>,
    pub holder_logs: BTreeMap<(Pubkey, u64), HolderLog>,
    pub now: i64,
}

impl Book {
    pub fn new(period_length: u64) -> Self {
        Self {
            ledger: Ledger {
                admin: admin(),
                period_length,
                created_at: CREATED_AT,
                ..Ledger::default()
            },
            periods: BTreeMap::new(),
            holders: BTreeMap::new(),
            holder_logs: BTreeMap::new(),
            now: CREATED_AT,
        }
    }

    pub fn current(&self) -> u64 {
        self.ledger.period_index_at(self.now).unwrap()
    }

    pub fn advance(&mut self, periods: u64) {
        self.now += (periods * self.ledger.period_length) as i64;
    }

    pub fn period(&self, index: u64) -> PeriodLog {
        self.periods.get(&index).cloned().unwrap_or_else(|| {
            let mut log = PeriodLog::default();
            log.open(key(0xAA), index, 255);
            log
        })
    }

    pub fn holder(&self, owner: Pubkey) -> HolderAccount {
        self.holders.get(&owner).cloned().unwrap_or_else(|| {
            let mut holder = HolderAccount::default();
            holder.open(key(0xAA), owner, 255);
            holder
        })
    }

    pub fn holder_log(&self, owner: Pubkey, index: u64) -> HolderLog {
        self.holder_logs
            .get(&(owner, index))
            .cloned()
            .unwrap_or_else(|| {
                let mut log = HolderLog::default();
                log.open(key(0xAA), owner, index, 255);
                log
            })
    }

    pub fn mint(&mut self, to: Pubkey, amount: u64) -> Result<(), LedgerError> {
        self.mint_as(admin(), to, amount)
    }

    pub fn mint_at(&mut self, index: u64, to: Pubkey, amount: u64) -> Result<(), LedgerError> {
        self.mint_inner(admin(), index, to, amount)
    }

    pub fn mint_as(&mut self, caller: Pubkey, to: Pubkey, amount: u64) -> Result<(), LedgerError> {
        let index = self.current();
        self.mint_inner(caller, index, to, amount)
    }

    fn mint_inner(
        &mut self,
        caller: Pubkey,
        index: u64,
        to: Pubkey,
        amount: u64,
    ) -> Result<(), LedgerError> {
        let mut ledger = self.ledger.clone();
        let mut period = self.period(index);
        let mut holder = self.holder(to);
        let mut log = self.holder_log(to, index);
        mint_shares(&mut ledger, &mut period, &mut holder, &mut log, &caller, amount, self.now)?;
        self.ledger = ledger;
        self.periods.insert(index, period);
        self.holders.insert(to, holder);
        self.holder_logs.insert((to, index), log);
        Ok(())
    }

    pub fn deposit(&mut self, amount: u64) -> Result<(), LedgerError> {
        let index = self.current();
        let mut ledger = self.ledger.clone();
        let mut period = self.period(index);
        record_deposit(&mut ledger, &mut period, amount, self.now)?;
        self.ledger = ledger;
        self.periods.insert(index, period);
        Ok(())
    }

    pub fn transfer(&mut self, from: Pubkey, to: Pubkey, amount: u64) -> Result<(), LedgerError> {
        self.transfer_as(from, from, to, amount)
    }

    pub fn transfer_as(
        &mut self,
        caller: Pubkey,
        from: Pubkey,
        to: Pubkey,
        amount: u64,
    ) -> Result<(), LedgerError> {
        let index = self.current();
        let mut from_holder = self.holder(from);
        let mut from_log = self.holder_log(from, index);
        let mut to_holder = self.holder(to);
        let mut to_log = self.holder_log(to, index);
        transfer_shares(
            &self.ledger,
            &mut from_holder,
            &mut from_log,
            &mut to_holder,
            &mut to_log,
            &caller,
            amount,
            self.now,
        )?;
        self.holders.insert(from, from_holder);
        self.holders.insert(to, to_holder);
        self.holder_logs.insert((from, index), from_log);
        self.holder_logs.insert((to, index), to_log);
        Ok(())
    }

    pub fn settle_period(&mut self, index: u64) -> Result<PeriodSettlement, LedgerError> {
        let mut ledger = self.ledger.clone();
        let mut log = self.period(index);
        let mut next = self.period(index + 1);
        let settlement = settle_period(&mut ledger, &mut log, &mut next, self.now)?;
        self.ledger = ledger;
        self.periods.insert(index, log);
        self.periods.insert(index + 1, next);
        Ok(settlement)
    }

    pub fn settle_holder(&mut self, owner: Pubkey, index: u64) -> Result<u64, LedgerError> {
        let mut ledger = self.ledger.clone();
        let period = self.period(index);
        let mut holder = self.holder(owner);
        let mut log = self.holder_log(owner, index);
        let reward = settle_holder_log(&mut ledger, &period, &mut holder, &mut log)?;
        self.ledger = ledger;
        self.holders.insert(owner, holder);
        self.holder_logs.insert((owner, index), log);
        Ok(reward)
    }

    /// A holder that was never created has nothing to pay and is not created.
    pub fn withdraw(&mut self, owner: Pubkey) -> Result<u64, LedgerError> {
        if !self.holders.contains_key(&owner) {
            return Ok(0);
        }
        let mut ledger = self.ledger.clone();
        let mut holder = self.holder(owner);
        let amount = take_unpaid(&mut ledger, &mut holder)?;
        self.ledger = ledger;
        self.holders.insert(owner, holder);
        Ok(amount)
    }
}
