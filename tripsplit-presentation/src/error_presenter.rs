use tripsplit_application::{StoreError, TripError};
use tripsplit_domain::{BalanceWarning, ExpenseIssue, Money};
use tripsplit_i18n as i18n;

pub fn format_balance_warning(warning: &BalanceWarning) -> String {
    match warning {
        BalanceWarning::EmptyRoster => i18n::EMPTY_ROSTER.to_string(),
        BalanceWarning::InvalidExpense {
            index,
            title,
            issue,
        } => i18n::expense_skipped(*index, title, format_expense_issue(issue)),
        BalanceWarning::UnknownSharer { index, title, name } => {
            i18n::unknown_sharer(*index, title, name)
        }
    }
}

fn format_expense_issue(issue: &ExpenseIssue) -> String {
    match issue {
        ExpenseIssue::NonPositiveAmount => i18n::non_positive_amount(),
        ExpenseIssue::UnknownPayer => i18n::payer_not_on_roster(),
        ExpenseIssue::EmptySharedBy => i18n::empty_shared_by(),
        ExpenseIssue::NoKnownSharers => i18n::no_known_sharers(),
        ExpenseIssue::AmountOutOfRange => i18n::amount_out_of_range(),
    }
}

pub fn format_trip_error(error: &TripError) -> String {
    match error {
        TripError::EmptyParticipantName => i18n::empty_participant_name(),
        TripError::DuplicateParticipant(name) => i18n::duplicate_participant(name),
        TripError::ParticipantIndexOutOfRange(index) => i18n::no_participant_at(*index),
        TripError::EmptyTitle => i18n::empty_title(),
        TripError::NonPositiveAmount => i18n::non_positive_amount(),
        TripError::AmountTooLarge => i18n::amount_too_large(Money::MAX_AMOUNT),
        TripError::AmountTooPrecise => i18n::amount_too_precise(),
        TripError::UnknownPayer(name) => i18n::unknown_payer(name),
        TripError::UnknownSharer(name) => i18n::unknown_participant(name),
        TripError::EmptySharedBy => i18n::empty_shared_by(),
        TripError::ExpenseIndexOutOfRange(index) => i18n::no_expense_at(*index),
        TripError::CorruptRecord { key, detail } => i18n::corrupt_record(key, detail),
        TripError::Store(err) => format_store_error(err),
    }
}

fn format_store_error(error: &StoreError) -> String {
    match error {
        StoreError::Io { path, source } => {
            i18n::store_failed(format!("{}: {source}", path.display()))
        }
        StoreError::Malformed { path, source } => {
            i18n::store_failed(format!("{}: {source}", path.display()))
        }
    }
}

#[cfg(all(test, not(feature = "ja")))]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::{io, path::PathBuf};
    use tripsplit_domain::Participant;

    #[rstest]
    #[case::empty_roster(
        BalanceWarning::EmptyRoster,
        "The roster is empty, so every balance is zero"
    )]
    #[case::invalid_expense(
        BalanceWarning::InvalidExpense {
            index: 3,
            title: "Taxi".to_string(),
            issue: ExpenseIssue::NonPositiveAmount,
        },
        "Expense #3 'Taxi' was skipped: amount must be positive"
    )]
    #[case::out_of_range(
        BalanceWarning::InvalidExpense {
            index: 1,
            title: "Yacht".to_string(),
            issue: ExpenseIssue::AmountOutOfRange,
        },
        "Expense #1 'Yacht' was skipped: amount is too large to add to the balances"
    )]
    #[case::unknown_sharer(
        BalanceWarning::UnknownSharer {
            index: 0,
            title: "Lunch".to_string(),
            name: Participant::new("Zed"),
        },
        "Expense #0 'Lunch': 'Zed' is not on the roster and was left out"
    )]
    fn formats_balance_warnings(#[case] warning: BalanceWarning, #[case] expected: &str) {
        assert_eq!(format_balance_warning(&warning), expected);
    }

    #[rstest]
    #[case::duplicate(TripError::DuplicateParticipant("A".to_string()), "'A' is already on the roster")]
    #[case::unknown_payer(TripError::UnknownPayer("Q".to_string()), "payer 'Q' is not on the roster")]
    #[case::too_large(TripError::AmountTooLarge, "amount must not exceed 1000000000000.00")]
    #[case::too_precise(TripError::AmountTooPrecise, "amount must have at most two decimal places")]
    #[case::expense_index(TripError::ExpenseIndexOutOfRange(7), "There is no expense #7")]
    #[case::corrupt(
        TripError::CorruptRecord { key: "friendsList", detail: "bad".to_string() },
        "Stored 'friendsList' is damaged: bad"
    )]
    fn formats_trip_errors(#[case] error: TripError, #[case] expected: &str) {
        assert_eq!(format_trip_error(&error), expected);
    }

    #[test]
    fn store_errors_name_the_path() {
        let error = TripError::Store(StoreError::Io {
            path: PathBuf::from("trip.json"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        });

        let message = format_trip_error(&error);

        assert!(message.starts_with("Could not access the trip store: trip.json"));
    }
}
