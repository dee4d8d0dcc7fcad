use crate::{
    error::TripError,
    ledger::SettlementLedger,
    ports::KeyValueStore,
    storage::{
        EXPENSES_KEY, ROSTER_KEY, TRIP_NAME_KEY, decode_expenses, decode_roster, encode_expenses,
        encode_roster,
    },
    trip::{ExpenseDraft, Trip},
};
use tripsplit_domain::{Expense, Participant, Roster, Settlement};

/// A trip bound to its store.
///
/// Loads everything on open and writes the touched key after every edit.
/// The ledger follows the data: expense edits trigger a recompute, roster
/// edits replace the roster first. Edits are applied to a copy and only
/// committed once the store accepted them.
pub struct TripSession<S> {
    store: S,
    trip: Trip,
    ledger: SettlementLedger,
}

impl<S: KeyValueStore> TripSession<S> {
    pub fn open(store: S) -> Result<Self, TripError> {
        let name = store.get(TRIP_NAME_KEY)?.unwrap_or_default();
        let roster = match store.get(ROSTER_KEY)? {
            Some(raw) => decode_roster(&raw)?,
            None => Roster::new(),
        };
        let expenses = match store.get(EXPENSES_KEY)? {
            Some(raw) => decode_expenses(&raw)?,
            None => Vec::new(),
        };

        tracing::info!(
            trip = %name,
            participant_count = roster.len(),
            expense_count = expenses.len(),
            "Trip loaded"
        );

        let mut ledger = SettlementLedger::new(roster.clone());
        ledger.recompute(&expenses);

        Ok(Self {
            store,
            trip: Trip::new(name, roster, expenses),
            ledger,
        })
    }

    pub fn trip(&self) -> &Trip {
        &self.trip
    }

    pub fn ledger(&self) -> &SettlementLedger {
        &self.ledger
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn set_trip_name(&mut self, name: &str) -> Result<(), TripError> {
        self.store.set(TRIP_NAME_KEY, name)?;
        self.trip.set_name(name);
        Ok(())
    }

    pub fn add_participant(&mut self, name: &str) -> Result<Participant, TripError> {
        let mut next = self.trip.clone();
        let added = next.add_participant(name)?.clone();
        self.commit_roster(next)?;
        Ok(added)
    }

    pub fn remove_participant(&mut self, index: usize) -> Result<Participant, TripError> {
        let mut next = self.trip.clone();
        let removed = next.remove_participant(index)?;
        self.commit_roster(next)?;
        Ok(removed)
    }

    pub fn add_expense(&mut self, draft: ExpenseDraft) -> Result<Expense, TripError> {
        let mut next = self.trip.clone();
        let added = next.add_expense(draft)?.clone();
        self.commit_expenses(next)?;
        Ok(added)
    }

    pub fn remove_expense(&mut self, index: usize) -> Result<Expense, TripError> {
        let mut next = self.trip.clone();
        let removed = next.remove_expense(index)?;
        self.commit_expenses(next)?;
        Ok(removed)
    }

    /// Hides a displayed settlement for the lifetime of this session only.
    pub fn dismiss_settlement(&mut self, index: usize) -> Option<&Settlement> {
        self.ledger.dismiss(index)
    }

    fn commit_roster(&mut self, next: Trip) -> Result<(), TripError> {
        self.store.set(ROSTER_KEY, &encode_roster(next.roster())?)?;
        self.trip = next;
        self.ledger.replace_roster(self.trip.roster().clone());
        self.ledger.recompute(self.trip.expenses());
        Ok(())
    }

    fn commit_expenses(&mut self, next: Trip) -> Result<(), TripError> {
        self.store
            .set(EXPENSES_KEY, &encode_expenses(next.expenses())?)?;
        self.trip = next;
        self.ledger.recompute(self.trip.expenses());
        Ok(())
    }
}
