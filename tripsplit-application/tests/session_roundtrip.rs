use proptest::prelude::*;
use std::collections::HashMap;
use tripsplit_application::{ExpenseDraft, TripSession};
use tripsplit_domain::{BalanceWarning, ExpenseIssue, Money};

type MemoryStore = HashMap<String, String>;

const NAMES: [&str; 4] = ["Ana", "Ben", "Cai", "Dev"];

fn open_with_roster(member_count: usize) -> TripSession<MemoryStore> {
    let mut session = TripSession::open(MemoryStore::new()).expect("empty store opens");
    for name in &NAMES[..member_count] {
        session.add_participant(name).expect("participant added");
    }
    session
}

proptest! {
    #[test]
    fn reopened_session_reproduces_ledger(
        member_count in 2usize..=4,
        amounts in prop::collection::vec(1i64..=100_000_000_000_000, 1..=12),
        payer_indexes in prop::collection::vec(0usize..=3, 1..=12),
        explicit in prop::collection::vec(any::<bool>(), 1..=12),
    ) {
        let mut session = open_with_roster(member_count);
        for (idx, cents) in amounts.iter().enumerate() {
            let payer = NAMES[payer_indexes.get(idx).copied().unwrap_or(0) % member_count];
            let shared_by = explicit
                .get(idx)
                .copied()
                .unwrap_or(false)
                .then(|| vec![payer.to_string(), NAMES[(idx + 1) % member_count].to_string()]);
            session
                .add_expense(ExpenseDraft {
                    title: format!("expense {idx}"),
                    amount: Money::new(*cents, 2),
                    payer: payer.to_string(),
                    shared_by,
                })
                .expect("valid expense");
        }

        let balances = session.ledger().report().balances.clone();
        let settlements = session.ledger().outstanding().to_vec();

        let reopened = TripSession::open(session.into_store()).expect("reopens");

        prop_assert_eq!(&reopened.ledger().report().balances, &balances);
        prop_assert_eq!(reopened.ledger().outstanding(), settlements.as_slice());
    }
}

#[test]
fn reopened_session_keeps_every_cent() {
    let mut session = open_with_roster(3);
    for (title, amount, payer) in [
        ("Villa", Money::new(99_999_999_999_999, 2), "Ana"),
        ("Boat", Money::new(10_001, 2), "Ben"),
        ("Fuel", Money::new(1, 2), "Cai"),
    ] {
        session
            .add_expense(ExpenseDraft {
                title: title.to_string(),
                amount,
                payer: payer.to_string(),
                shared_by: None,
            })
            .expect("valid expense");
    }
    let expenses = session.trip().expenses().to_vec();
    let report = session.ledger().report().clone();

    let reopened = TripSession::open(session.into_store()).expect("reopens");

    assert_eq!(reopened.trip().expenses(), expenses.as_slice());
    assert_eq!(reopened.ledger().report(), &report);
}

#[test]
fn stored_oversized_amounts_do_not_stop_the_session() {
    let store = MemoryStore::from([
        ("friendsList".to_string(), r#"["Ana","Ben"]"#.to_string()),
        (
            "expenses".to_string(),
            r#"[{"title":"Yacht","amount":5e28,"payer":"Ana"},{"title":"Island","amount":5e28,"payer":"Ana"}]"#
                .to_string(),
        ),
    ]);

    let mut session = TripSession::open(store).expect("opens");

    assert_eq!(
        session.ledger().report().warnings,
        vec![BalanceWarning::InvalidExpense {
            index: 1,
            title: "Island".to_string(),
            issue: ExpenseIssue::AmountOutOfRange,
        }]
    );
    session.remove_expense(1).expect("removed");
    assert!(session.ledger().report().warnings.is_empty());
}

#[test]
fn dismissed_entry_returns_after_recompute() {
    let mut session = open_with_roster(3);
    session
        .add_expense(ExpenseDraft {
            title: "Hotel".to_string(),
            amount: Money::from_i64(300),
            payer: "Ana".to_string(),
            shared_by: None,
        })
        .expect("valid expense");
    let before: Vec<_> = session.ledger().displayed().cloned().collect();

    session.dismiss_settlement(0).expect("entry dismissed");
    assert_eq!(session.ledger().displayed().count(), before.len() - 1);

    let reopened = TripSession::open(session.into_store()).expect("reopens");
    let after: Vec<_> = reopened.ledger().displayed().cloned().collect();
    assert_eq!(after, before);
}
