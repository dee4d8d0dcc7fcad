use crate::text_table::{Alignment, TextTableBuilder};
use std::borrow::Cow;
use tripsplit_domain::{BalanceReport, Money, Roster, Settlement};
use tripsplit_i18n as i18n;

pub struct BalanceSheetPresenter;

pub struct BalanceSheetView {
    pub summary: String,
    pub balance_table: String,
    /// `None` when nothing is left to settle.
    pub settlement_table: Option<String>,
}

impl BalanceSheetPresenter {
    /// Balance sheet presenter
    ///
    /// # Arguments
    /// * `report` - Output of the balance calculation
    /// * `settlements` - Settlements currently displayed, in display order
    /// * `roster` - Roster the report was computed for; sets the row order
    ///
    /// # Returns
    /// Summary text and the rendered tables. Settlement rows are numbered by
    /// their display position, which is what dismissal addresses.
    pub fn render<'s>(
        report: &BalanceReport,
        settlements: impl IntoIterator<Item = &'s Settlement>,
        roster: &Roster,
    ) -> BalanceSheetView {
        let settlements: Vec<&Settlement> = settlements.into_iter().collect();

        let mut summary = format!(
            "{}: {}\n{}: {}",
            i18n::TOTAL_EXPENSES,
            report.total,
            i18n::PER_PERSON_SHARE,
            report.per_person_share
        );
        if settlements.is_empty() {
            summary.push('\n');
            summary.push_str(i18n::ALL_SETTLED);
        }

        let balance_table = Self::build_balance_table(report, roster);
        let settlement_table =
            (!settlements.is_empty()).then(|| Self::build_settlement_table(&settlements));

        BalanceSheetView {
            summary,
            balance_table,
            settlement_table,
        }
    }

    pub fn build_balance_table(report: &BalanceReport, roster: &Roster) -> String {
        let headers = [Cow::Borrowed(i18n::MEMBER), Cow::Borrowed(i18n::BALANCE)];
        let mut builder = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Right])
            .headers(&headers);

        for participant in roster.iter() {
            let balance = report
                .balance_of(participant.as_str())
                .unwrap_or(Money::ZERO);
            builder = builder.row([
                Cow::Borrowed(participant.as_str()),
                Cow::Owned(format_signed(balance)),
            ]);
        }

        builder.build()
    }

    pub fn build_settlement_table(settlements: &[&Settlement]) -> String {
        let headers = [
            Cow::Borrowed("#"),
            Cow::Borrowed(i18n::FROM),
            Cow::Borrowed(i18n::TO),
            Cow::Borrowed(i18n::AMOUNT),
        ];
        let mut builder = TextTableBuilder::new()
            .alignments(&[
                Alignment::Right,
                Alignment::Left,
                Alignment::Left,
                Alignment::Right,
            ])
            .headers(&headers);

        for (index, settlement) in settlements.iter().enumerate() {
            builder = builder.row([
                Cow::Owned(index.to_string()),
                Cow::Borrowed(settlement.from.as_str()),
                Cow::Borrowed(settlement.to.as_str()),
                Cow::Owned(settlement.amount.to_string()),
            ]);
        }

        builder.build()
    }
}

fn format_signed(amount: Money) -> String {
    let rounded = amount.rounded();
    let sign = if rounded.is_sign_negative() { "" } else { "+" };
    format!("{sign}{rounded}")
}
