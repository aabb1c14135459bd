//! Per-customer totals derived from the repeated product sub-records.
//!
//! Each total is an independent reduction over one sequence. A missing
//! amount contributes zero; an empty sequence sums to zero.

use crate::{profile::CustomerProfileRecord, types::Amount};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileTotals {
    pub total_accounts: usize,
    pub total_balance: Amount,
    pub total_loans: Amount,
    pub total_cards: Amount,
    pub total_investments: Amount,
}

impl ProfileTotals {
    /// Recomputed from scratch on every selection change.
    pub fn compute(record: &CustomerProfileRecord) -> Self {
        Self {
            total_accounts: total_accounts(record),
            total_balance: total_balance(record),
            total_loans: total_loans(record),
            total_cards: total_cards(record),
            total_investments: total_investments(record),
        }
    }
}

pub fn total_accounts(record: &CustomerProfileRecord) -> usize {
    record.accounts.len()
}

pub fn total_balance(record: &CustomerProfileRecord) -> Amount {
    sum_present(&record.accounts, |a| a.balance)
}

pub fn total_loans(record: &CustomerProfileRecord) -> Amount {
    sum_present(&record.loans, |l| l.outstanding_balance)
}

/// Outstanding card balances, not limits.
pub fn total_cards(record: &CustomerProfileRecord) -> Amount {
    sum_present(&record.cards, |c| c.outstanding_balance)
}

pub fn total_investments(record: &CustomerProfileRecord) -> Amount {
    sum_present(&record.investments, |i| i.current_value)
}

fn sum_present<T>(items: &[T], field: impl Fn(&T) -> Option<Amount>) -> Amount {
    items
        .iter()
        .fold(0.0, |total, item| total + field(item).unwrap_or(0.0))
}
