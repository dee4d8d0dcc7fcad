#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{
    BalanceReport, BalanceWarning, Balances, Expense, ExpenseIssue, Money, Participant, Roster,
    RosterError, Settlement, SplitPolicy,
};
pub use services::{BalanceCalculator, SettlementPlanner};
