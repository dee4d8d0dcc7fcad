use std::fmt::Display;

pub const MEMBER: &str = "Member";
pub const BALANCE: &str = "Balance";
pub const FROM: &str = "From";
pub const TO: &str = "To";
pub const AMOUNT: &str = "Amount";
pub const TITLE: &str = "Title";
pub const PAYER: &str = "Payer";
pub const SHARED_BY: &str = "Shared by";
pub const EVERYONE: &str = "everyone";
pub const TOTAL_EXPENSES: &str = "Total expenses";
pub const PER_PERSON_SHARE: &str = "Per person";
pub const ALL_SETTLED: &str = "All expenses are settled.";
pub const NO_FRIENDS: &str = "No friends added yet.";
pub const NO_EXPENSES: &str = "No expenses recorded yet.";
pub const UNNAMED_TRIP: &str = "(unnamed trip)";
pub const EMPTY_ROSTER: &str = "The roster is empty, so every balance is zero";

pub fn expense_skipped(index: usize, title: impl Display, reason: impl Display) -> String {
    format!("Expense #{index} '{title}' was skipped: {reason}")
}

pub fn unknown_sharer(index: usize, title: impl Display, name: impl Display) -> String {
    format!("Expense #{index} '{title}': '{name}' is not on the roster and was left out")
}

pub fn non_positive_amount() -> String {
    "amount must be positive".to_string()
}

pub fn unknown_payer(name: impl Display) -> String {
    format!("payer '{name}' is not on the roster")
}

pub fn unknown_participant(name: impl Display) -> String {
    format!("'{name}' is not on the roster")
}

pub fn payer_not_on_roster() -> String {
    "the payer is not on the roster".to_string()
}

pub fn empty_shared_by() -> String {
    "name at least one person to share the expense".to_string()
}

pub fn no_known_sharers() -> String {
    "none of the listed sharers are on the roster".to_string()
}

pub fn empty_participant_name() -> String {
    "name must not be empty".to_string()
}

pub fn duplicate_participant(name: impl Display) -> String {
    format!("'{name}' is already on the roster")
}

pub fn empty_title() -> String {
    "title must not be empty".to_string()
}

pub fn no_participant_at(index: usize) -> String {
    format!("There is no friend #{index}")
}

pub fn no_expense_at(index: usize) -> String {
    format!("There is no expense #{index}")
}

pub fn no_settlement_at(index: usize) -> String {
    format!("There is no settlement #{index}")
}

pub fn corrupt_record(key: impl Display, detail: impl Display) -> String {
    format!("Stored '{key}' is damaged: {detail}")
}

pub fn store_failed(detail: impl Display) -> String {
    format!("Could not access the trip store: {detail}")
}

pub fn trip_renamed(name: impl Display) -> String {
    format!("Trip name set to '{name}'")
}

pub fn friend_added(name: impl Display) -> String {
    format!("Added {name}")
}

pub fn friend_removed(name: impl Display) -> String {
    format!("Removed {name}")
}

pub fn expense_added(title: impl Display, amount: impl Display) -> String {
    format!("Added expense '{title}' ({amount})")
}

pub fn expense_removed(title: impl Display) -> String {
    format!("Removed expense '{title}'")
}

pub fn amount_too_large(max: impl Display) -> String {
    format!("amount must not exceed {max}")
}

pub fn amount_too_precise() -> String {
    "amount must have at most two decimal places".to_string()
}

pub fn amount_out_of_range() -> String {
    "amount is too large to add to the balances".to_string()
}
