//! Exact-cents aggregation over a ledger snapshot.

use chrono::NaiveDate;

use crate::currency::Amount;
use crate::ledger::{Kind, Ledger};

/// Whole-ledger totals. `balance` is income minus expense and may go
/// negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub total_income: Amount,
    pub total_expense: Amount,
    pub balance: Amount,
}

/// Sums for a single calendar day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayTotals {
    pub income: Amount,
    pub expense: Amount,
}

pub fn totals(ledger: &Ledger) -> Totals {
    let total_income = sum(ledger, Kind::Income);
    let total_expense = sum(ledger, Kind::Expense);
    Totals {
        total_income,
        total_expense,
        balance: total_income - total_expense,
    }
}

/// Income and expense sums for entries dated exactly `date`.
pub fn daily_totals(ledger: &Ledger, date: NaiveDate) -> DayTotals {
    DayTotals {
        income: sum_on(ledger, Kind::Income, date),
        expense: sum_on(ledger, Kind::Expense, date),
    }
}

fn sum(ledger: &Ledger, kind: Kind) -> Amount {
    ledger.entries(kind).iter().map(|entry| entry.amount).sum()
}

fn sum_on(ledger: &Ledger, kind: Kind, date: NaiveDate) -> Amount {
    ledger
        .entries(kind)
        .iter()
        .filter(|entry| entry.date == date)
        .map(|entry| entry.amount)
        .sum()
}
