use crate::model::{
    BalanceReport, BalanceWarning, Balances, Expense, ExpenseIssue, Money, Participant, Roster,
    SplitPolicy,
};
use fxhash::FxHashSet;

/// Balance calculation service
///
/// Turns a roster and an expense list into a net balance per participant.
/// Each expense is applied under exactly one [`SplitPolicy`]: an equal split
/// charges the whole roster, an explicit split charges only its listed sharers.
/// Invalid expenses are skipped and reported; the calculation never fails.
pub struct BalanceCalculator;

impl BalanceCalculator {
    /// Calculate balances for every roster participant
    ///
    /// # Arguments
    /// * `roster` - Participants of the trip; each gets an entry, zero if untouched
    /// * `expenses` - Recorded expenses in entry order
    ///
    /// # Returns
    /// Balances summing to zero (within [`Money::TOLERANCE`]) plus any warnings
    pub fn calculate(&self, roster: &Roster, expenses: &[Expense]) -> BalanceReport {
        if roster.is_empty() {
            let mut warnings = Vec::new();
            if !expenses.is_empty() {
                tracing::warn!(
                    expense_count = expenses.len(),
                    "Roster is empty; all balances resolve to zero"
                );
                warnings.push(BalanceWarning::EmptyRoster);
            }
            return BalanceReport {
                balances: Balances::new(),
                total: expenses
                    .iter()
                    .map(|expense| expense.amount)
                    .filter(|amount| amount.is_positive())
                    .fold(Money::ZERO, |total, amount| {
                        total.checked_add(amount).unwrap_or(total)
                    }),
                per_person_share: Money::ZERO,
                warnings,
            };
        }

        let mut balances: Balances = roster
            .iter()
            .cloned()
            .map(|participant| (participant, Money::ZERO))
            .collect();
        let mut warnings = Vec::new();
        let mut total = Money::ZERO;

        for (index, expense) in expenses.iter().enumerate() {
            let Some(sharers) = resolve_sharers(roster, index, expense, &mut warnings) else {
                continue;
            };

            let applied = apply_expense(&balances, expense, &sharers)
                .zip(total.checked_add(expense.amount));
            let Some((next_balances, next_total)) = applied else {
                tracing::warn!(
                    index,
                    title = %expense.title,
                    amount = %expense.amount,
                    "Expense skipped: balances would overflow"
                );
                warnings.push(BalanceWarning::InvalidExpense {
                    index,
                    title: expense.title.clone(),
                    issue: ExpenseIssue::AmountOutOfRange,
                });
                continue;
            };
            balances = next_balances;
            total = next_total;
        }

        let per_person_share = total.split(roster.len());

        tracing::debug!(
            participant_count = roster.len(),
            expense_count = expenses.len(),
            warning_count = warnings.len(),
            total = %total,
            per_person_share = %per_person_share,
            "Balances calculated"
        );

        BalanceReport {
            balances,
            total,
            per_person_share,
            warnings,
        }
    }
}

/// Balances after charging `sharers` and crediting the payer, or `None` when
/// any running balance would leave the decimal range.
fn apply_expense(
    balances: &Balances,
    expense: &Expense,
    sharers: &[&Participant],
) -> Option<Balances> {
    let portion = expense.amount.split(sharers.len());
    let mut next = balances.clone();
    for sharer in sharers {
        if let Some(balance) = next.get_mut(*sharer) {
            *balance = balance.checked_sub(portion)?;
        }
    }
    if let Some(balance) = next.get_mut(&expense.payer) {
        *balance = balance.checked_add(expense.amount)?;
    }
    Some(next)
}

/// Validates an expense and returns the participants it is charged to.
///
/// `None` means the whole expense is skipped. Unknown explicit sharers are
/// dropped one by one, so the divisor is the number of known sharers.
fn resolve_sharers<'a>(
    roster: &'a Roster,
    index: usize,
    expense: &'a Expense,
    warnings: &mut Vec<BalanceWarning>,
) -> Option<Vec<&'a Participant>> {
    let reject = |warnings: &mut Vec<BalanceWarning>, issue: ExpenseIssue| {
        tracing::warn!(
            index,
            title = %expense.title,
            payer = %expense.payer,
            amount = %expense.amount,
            issue = %issue,
            "Expense skipped"
        );
        warnings.push(BalanceWarning::InvalidExpense {
            index,
            title: expense.title.clone(),
            issue,
        });
    };

    if !expense.amount.is_positive() {
        reject(warnings, ExpenseIssue::NonPositiveAmount);
        return None;
    }
    if !roster.contains(expense.payer.as_str()) {
        reject(warnings, ExpenseIssue::UnknownPayer);
        return None;
    }

    match &expense.split {
        SplitPolicy::Equal => Some(roster.iter().collect()),
        SplitPolicy::Among(shared_by) => {
            if shared_by.is_empty() {
                reject(warnings, ExpenseIssue::EmptySharedBy);
                return None;
            }

            let mut seen: FxHashSet<&str> = FxHashSet::default();
            let mut known = Vec::with_capacity(shared_by.len());
            for sharer in shared_by {
                if !seen.insert(sharer.as_str()) {
                    continue;
                }
                if !roster.contains(sharer.as_str()) {
                    tracing::warn!(
                        index,
                        title = %expense.title,
                        sharer = %sharer,
                        "Expense sharer is not on the roster"
                    );
                    warnings.push(BalanceWarning::UnknownSharer {
                        index,
                        title: expense.title.clone(),
                        name: sharer.clone(),
                    });
                    continue;
                }
                known.push(sharer);
            }

            if known.is_empty() {
                reject(warnings, ExpenseIssue::NoKnownSharers);
                return None;
            }
            Some(known)
        }
    }
}
