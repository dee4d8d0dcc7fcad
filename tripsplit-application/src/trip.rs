use crate::error::TripError;
use tripsplit_domain::{Expense, Money, Participant, Roster, SplitPolicy};

/// User input for a new expense, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub title: String,
    pub amount: Money,
    pub payer: String,
    /// `None` splits across the whole roster.
    pub shared_by: Option<Vec<String>>,
}

/// Trip label, roster and expense list as edited by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trip {
    name: String,
    roster: Roster,
    expenses: Vec<Expense>,
}

impl Trip {
    pub fn new(name: String, roster: Roster, expenses: Vec<Expense>) -> Self {
        Self {
            name,
            roster,
            expenses,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_owned();
    }

    pub fn add_participant(&mut self, name: &str) -> Result<&Participant, TripError> {
        Ok(self.roster.try_push(name)?)
    }

    /// Expenses that mention the removed participant are kept as they are.
    pub fn remove_participant(&mut self, index: usize) -> Result<Participant, TripError> {
        self.roster
            .remove(index)
            .ok_or(TripError::ParticipantIndexOutOfRange(index))
    }

    pub fn add_expense(&mut self, draft: ExpenseDraft) -> Result<&Expense, TripError> {
        let expense = self.validate(draft)?;
        self.expenses.push(expense);
        Ok(&self.expenses[self.expenses.len() - 1])
    }

    pub fn remove_expense(&mut self, index: usize) -> Result<Expense, TripError> {
        if index >= self.expenses.len() {
            return Err(TripError::ExpenseIndexOutOfRange(index));
        }
        Ok(self.expenses.remove(index))
    }

    fn validate(&self, draft: ExpenseDraft) -> Result<Expense, TripError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(TripError::EmptyTitle);
        }
        if !draft.amount.is_positive() {
            return Err(TripError::NonPositiveAmount);
        }
        if draft.amount > Money::MAX_AMOUNT {
            return Err(TripError::AmountTooLarge);
        }
        if !draft.amount.is_whole_cents() {
            return Err(TripError::AmountTooPrecise);
        }
        let payer = draft.payer.trim();
        if !self.roster.contains(payer) {
            return Err(TripError::UnknownPayer(payer.to_owned()));
        }

        let split = match draft.shared_by {
            None => SplitPolicy::Equal,
            Some(names) => {
                let mut shared_by: Vec<Participant> = Vec::with_capacity(names.len());
                for name in &names {
                    let name = name.trim();
                    if !self.roster.contains(name) {
                        return Err(TripError::UnknownSharer(name.to_owned()));
                    }
                    if shared_by.iter().all(|p| p.as_str() != name) {
                        shared_by.push(Participant::new(name));
                    }
                }
                if shared_by.is_empty() {
                    return Err(TripError::EmptySharedBy);
                }
                SplitPolicy::Among(shared_by)
            }
        };

        Ok(Expense {
            title: title.to_owned(),
            amount: draft.amount,
            payer: Participant::new(payer),
            split,
        })
    }
}
