use crate::model::{Balances, Money, Participant, Settlement};
use std::cmp::Ordering;

/// Settlement planning service
///
/// Greedily matches the largest creditor with the largest debtor until one
/// side runs out. Equal balances are ordered by participant identifier so the
/// plan is reproducible.
pub struct SettlementPlanner;

impl SettlementPlanner {
    /// Plan the transfers that bring every balance back to zero
    ///
    /// # Arguments
    /// * `balances` - Net balance per participant (positive: owed money)
    ///
    /// # Returns
    /// Ordered settlements, at most one fewer than the non-zero balances.
    /// Amounts keep full precision; round only for display.
    pub fn plan(&self, balances: &Balances) -> Vec<Settlement> {
        let mut creditors: Vec<(&Participant, Money)> = Vec::new();
        let mut debtors: Vec<(&Participant, Money)> = Vec::new();
        for (participant, balance) in balances {
            if balance.is_negligible() {
                continue;
            }
            if balance.is_positive() {
                creditors.push((participant, *balance));
            } else {
                debtors.push((participant, -*balance));
            }
        }

        sort_by_priority(&mut creditors);
        sort_by_priority(&mut debtors);

        let mut settlements = Vec::with_capacity(creditors.len() + debtors.len());

        while !creditors.is_empty() && !debtors.is_empty() {
            let (Some((creditor, credit)), Some((debtor, debt))) = (creditors.pop(), debtors.pop())
            else {
                break;
            };

            let amount = credit.min(debt);
            settlements.push(Settlement {
                from: debtor.clone(),
                to: creditor.clone(),
                amount,
            });

            let credit_left = credit - amount;
            if !credit_left.is_negligible() {
                creditors.push((creditor, credit_left));
                sort_by_priority(&mut creditors);
            }

            let debt_left = debt - amount;
            if !debt_left.is_negligible() {
                debtors.push((debtor, debt_left));
                sort_by_priority(&mut debtors);
            }
        }

        let residual: Money = creditors
            .iter()
            .chain(debtors.iter())
            .map(|(_, amount)| *amount)
            .sum();
        if !residual.is_zero() {
            tracing::debug!(
                residual = %residual,
                unmatched = creditors.len() + debtors.len(),
                "Unmatched balance left after settlement planning"
            );
        }

        tracing::debug!(
            participant_count = balances.len(),
            settlement_count = settlements.len(),
            "Settlements planned"
        );

        settlements
    }
}

/// Orders one side so that `pop` yields the next participant to match:
/// the largest outstanding amount, then the smallest identifier.
fn sort_by_priority(side: &mut [(&Participant, Money)]) {
    side.sort_by(|(lhs_id, lhs_amount), (rhs_id, rhs_amount)| {
        match lhs_amount.cmp(rhs_amount) {
            Ordering::Equal => rhs_id.cmp(lhs_id),
            ordering => ordering,
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn planner() -> SettlementPlanner {
        SettlementPlanner
    }

    fn balances(entries: &[(&str, i64)]) -> Balances {
        entries
            .iter()
            .map(|(name, amount)| (Participant::new(*name), Money::from_i64(*amount)))
            .collect()
    }

    fn triples(settlements: &[Settlement]) -> Vec<(&str, &str, String)> {
        settlements
            .iter()
            .map(|s| (s.from.as_str(), s.to.as_str(), s.amount.to_string()))
            .collect()
    }

    #[rstest]
    #[case::single_creditor_tie_by_name(
        &[("A", 200), ("B", -100), ("C", -100)],
        vec![("B", "A", "100.00"), ("C", "A", "100.00")],
    )]
    #[case::two_people(&[("A", 10), ("B", -10)], vec![("B", "A", "10.00")])]
    #[case::largest_matched_first(
        &[("A", 50), ("B", 30), ("C", -60), ("D", -20)],
        vec![("C", "A", "50.00"), ("D", "B", "20.00"), ("C", "B", "10.00")],
    )]
    #[case::remainder_pushed_back(
        &[("A", 100), ("B", -30), ("C", -70)],
        vec![("C", "A", "70.00"), ("B", "A", "30.00")],
    )]
    #[case::creditor_tie_by_name(
        &[("Zoe", 40), ("Amy", 40), ("Max", -80)],
        vec![("Max", "Amy", "40.00"), ("Max", "Zoe", "40.00")],
    )]
    #[case::all_zero(&[("A", 0), ("B", 0)], vec![])]
    #[case::empty(&[], vec![])]
    fn plans_settlements(
        planner: SettlementPlanner,
        #[case] entries: &[(&str, i64)],
        #[case] expected: Vec<(&str, &str, &str)>,
    ) {
        let settlements = planner.plan(&balances(entries));

        let expected: Vec<(&str, &str, String)> = expected
            .into_iter()
            .map(|(from, to, amount)| (from, to, amount.to_string()))
            .collect();
        assert_eq!(triples(&settlements), expected);
    }

    #[rstest]
    fn negligible_balances_are_ignored(planner: SettlementPlanner) {
        let balances: Balances = [
            (Participant::new("A"), Money::new(1, 10)),
            (Participant::new("B"), Money::new(-1, 10)),
        ]
        .into_iter()
        .collect();

        assert!(planner.plan(&balances).is_empty());
    }

    #[rstest]
    fn thirds_settle_without_residue(planner: SettlementPlanner) {
        let hundred = Money::from_i64(100);
        let third = hundred.split(3);
        let balances: Balances = [
            (Participant::new("A"), hundred - third),
            (Participant::new("B"), -third),
            (Participant::new("C"), third + third - hundred),
        ]
        .into_iter()
        .collect();

        let settlements = planner.plan(&balances);

        assert_eq!(settlements.len(), 2);
        assert!(settlements.iter().all(|s| s.to.as_str() == "A"));
        assert!(settlements.iter().all(|s| s.amount.to_string() == "33.33"));
        let paid: Money = settlements.iter().map(|s| s.amount).sum();
        assert!((paid - (hundred - third)).is_negligible());
    }
}
