use std::collections::BTreeSet;
use tripsplit_domain::{
    BalanceCalculator, BalanceReport, Expense, Roster, Settlement, SettlementPlanner,
};

/// Currently displayed settlements for one roster.
///
/// The outstanding list is engine output and is only ever replaced as a
/// whole. Dismissals are a separate set of indices into that list: hiding an
/// entry is cosmetic and does not record a payment, so the next
/// [`SettlementLedger::recompute`] brings equivalent entries back.
#[derive(Debug, Default)]
pub struct SettlementLedger {
    roster: Roster,
    report: BalanceReport,
    outstanding: Vec<Settlement>,
    dismissed: BTreeSet<usize>,
}

impl SettlementLedger {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            ..Self::default()
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Swaps the roster. The current list no longer applies and stays empty
    /// until the next recompute.
    pub fn replace_roster(&mut self, roster: Roster) {
        self.roster = roster;
        self.report = BalanceReport::default();
        self.outstanding.clear();
        self.dismissed.clear();
    }

    /// Reruns balance calculation and settlement planning over `expenses`
    /// and replaces the whole list, dismissals included.
    pub fn recompute(&mut self, expenses: &[Expense]) -> &BalanceReport {
        let report = BalanceCalculator.calculate(&self.roster, expenses);
        let outstanding = SettlementPlanner.plan(&report.balances);

        tracing::debug!(
            expense_count = expenses.len(),
            settlement_count = outstanding.len(),
            dropped_dismissals = self.dismissed.len(),
            "Settlement ledger recomputed"
        );

        self.report = report;
        self.outstanding = outstanding;
        self.dismissed.clear();
        &self.report
    }

    /// Hides the entry at `index` of the displayed list.
    ///
    /// Balances are untouched. Returns the hidden settlement, or `None` when
    /// `index` is past the end of the displayed list.
    pub fn dismiss(&mut self, index: usize) -> Option<&Settlement> {
        let position = self.displayed_positions().nth(index)?;
        self.dismissed.insert(position);

        let settlement = &self.outstanding[position];
        tracing::info!(
            index,
            from = %settlement.from,
            to = %settlement.to,
            amount = %settlement.amount,
            "Settlement dismissed from display"
        );
        Some(settlement)
    }

    pub fn displayed(&self) -> impl Iterator<Item = &Settlement> + '_ {
        self.displayed_positions()
            .map(|position| &self.outstanding[position])
    }

    /// Full engine output, including dismissed entries.
    pub fn outstanding(&self) -> &[Settlement] {
        &self.outstanding
    }

    pub fn report(&self) -> &BalanceReport {
        &self.report
    }

    pub fn is_settled(&self) -> bool {
        self.displayed().next().is_none()
    }

    fn displayed_positions(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.outstanding.len()).filter(|position| !self.dismissed.contains(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tripsplit_domain::{Money, Participant};

    fn expenses() -> Vec<Expense> {
        vec![Expense::equal("Hotel", Money::from_i64(300), "A")]
    }

    #[fixture]
    fn ledger() -> SettlementLedger {
        let roster = Roster::try_from_names(["A", "B", "C"]).expect("valid roster");
        let mut ledger = SettlementLedger::new(roster);
        ledger.recompute(&expenses());
        ledger
    }

    fn displayed_debtors(ledger: &SettlementLedger) -> Vec<&str> {
        ledger.displayed().map(|s| s.from.as_str()).collect()
    }

    #[rstest]
    fn recompute_fills_list(ledger: SettlementLedger) {
        assert_eq!(displayed_debtors(&ledger), vec!["B", "C"]);
        assert_eq!(
            ledger.report().balance_of("A"),
            Some(Money::from_i64(200))
        );
        assert!(!ledger.is_settled());
    }

    #[rstest]
    fn dismiss_hides_entry_without_touching_balances(mut ledger: SettlementLedger) {
        let dismissed = ledger.dismiss(0).cloned().expect("entry to dismiss");

        assert_eq!(dismissed.from, Participant::new("B"));
        assert_eq!(displayed_debtors(&ledger), vec!["C"]);
        assert_eq!(ledger.outstanding().len(), 2);
        assert_eq!(
            ledger.report().balance_of("B"),
            Some(Money::from_i64(-100))
        );
    }

    #[rstest]
    fn dismiss_indexes_displayed_list(mut ledger: SettlementLedger) {
        ledger.dismiss(0);
        let second = ledger.dismiss(0).cloned().expect("remaining entry");

        assert_eq!(second.from, Participant::new("C"));
        assert!(ledger.is_settled());
        assert!(ledger.dismiss(0).is_none());
    }

    #[rstest]
    #[case::past_end(2)]
    #[case::far_past_end(usize::MAX)]
    fn dismiss_out_of_range_is_noop(mut ledger: SettlementLedger, #[case] index: usize) {
        assert!(ledger.dismiss(index).is_none());
        assert_eq!(displayed_debtors(&ledger), vec!["B", "C"]);
    }

    #[rstest]
    fn recompute_restores_dismissed_entries(mut ledger: SettlementLedger) {
        ledger.dismiss(1);
        ledger.dismiss(0);
        assert!(ledger.is_settled());

        ledger.recompute(&expenses());

        assert_eq!(displayed_debtors(&ledger), vec!["B", "C"]);
    }

    #[rstest]
    fn roster_change_invalidates_list(mut ledger: SettlementLedger) {
        let roster = Roster::try_from_names(["A", "B"]).expect("valid roster");

        ledger.replace_roster(roster);

        assert!(ledger.outstanding().is_empty());
        assert!(ledger.report().balances.is_empty());

        ledger.recompute(&expenses());
        assert_eq!(displayed_debtors(&ledger), vec!["B"]);
        assert_eq!(
            ledger.report().balance_of("A"),
            Some(Money::from_i64(150))
        );
    }

    #[test]
    fn empty_roster_has_nothing_to_settle() {
        let mut ledger = SettlementLedger::new(Roster::new());

        let report = ledger.recompute(&expenses());

        assert!(report.balances.is_empty());
        assert!(ledger.is_settled());
    }
}
