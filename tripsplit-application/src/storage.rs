//! Stored representation of a trip.
//!
//! Three keys, matching the layout the expense splitter has always written:
//! the trip label as a raw string, the roster as a JSON array of names and the
//! expenses as a JSON array of records with an optional `sharedBy` list.

use crate::error::TripError;
use serde::{Deserialize, Serialize};
use tripsplit_domain::{Expense, Money, Participant, Roster, SplitPolicy};

pub const TRIP_NAME_KEY: &str = "tripname";
pub const ROSTER_KEY: &str = "friendsList";
pub const EXPENSES_KEY: &str = "expenses";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    pub title: String,
    pub amount: f64,
    pub payer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_by: Option<Vec<String>>,
}

impl From<&Expense> for ExpenseRecord {
    fn from(expense: &Expense) -> Self {
        let shared_by = match &expense.split {
            SplitPolicy::Equal => None,
            SplitPolicy::Among(participants) => Some(
                participants
                    .iter()
                    .map(|participant| participant.as_str().to_owned())
                    .collect(),
            ),
        };
        Self {
            title: expense.title.clone(),
            amount: expense.amount.to_f64(),
            payer: expense.payer.as_str().to_owned(),
            shared_by,
        }
    }
}

impl ExpenseRecord {
    /// Stored expenses are not re-validated; the balance calculator reports
    /// anything it cannot apply.
    pub fn into_expense(self) -> Result<Expense, TripError> {
        let amount = Money::try_from_f64(self.amount).ok_or_else(|| TripError::CorruptRecord {
            key: EXPENSES_KEY,
            detail: format!("amount {} of '{}' is not a finite number", self.amount, self.title),
        })?;
        let split = match self.shared_by {
            None => SplitPolicy::Equal,
            Some(names) => SplitPolicy::Among(names.into_iter().map(Participant::new).collect()),
        };
        Ok(Expense {
            title: self.title,
            amount,
            payer: Participant::new(self.payer),
            split,
        })
    }
}

pub fn encode_roster(roster: &Roster) -> Result<String, TripError> {
    let names: Vec<&str> = roster.iter().map(Participant::as_str).collect();
    serde_json::to_string(&names).map_err(|err| corrupt(ROSTER_KEY, &err))
}

pub fn decode_roster(raw: &str) -> Result<Roster, TripError> {
    let names: Vec<String> = serde_json::from_str(raw).map_err(|err| corrupt(ROSTER_KEY, &err))?;
    Roster::try_from_names(names).map_err(|err| TripError::CorruptRecord {
        key: ROSTER_KEY,
        detail: err.to_string(),
    })
}

pub fn encode_expenses(expenses: &[Expense]) -> Result<String, TripError> {
    let records: Vec<ExpenseRecord> = expenses.iter().map(ExpenseRecord::from).collect();
    serde_json::to_string(&records).map_err(|err| corrupt(EXPENSES_KEY, &err))
}

pub fn decode_expenses(raw: &str) -> Result<Vec<Expense>, TripError> {
    let records: Vec<ExpenseRecord> =
        serde_json::from_str(raw).map_err(|err| corrupt(EXPENSES_KEY, &err))?;
    records.into_iter().map(ExpenseRecord::into_expense).collect()
}

fn corrupt(key: &'static str, err: &serde_json::Error) -> TripError {
    TripError::CorruptRecord {
        key,
        detail: err.to_string(),
    }
}
