use crate::text_table::{Alignment, TextTableBuilder};
use std::borrow::Cow;
use tripsplit_application::Trip;
use tripsplit_domain::SplitPolicy;
use tripsplit_i18n as i18n;

pub struct TripPresenter;

impl TripPresenter {
    pub fn render_title(trip: &Trip) -> &str {
        match trip.name() {
            "" => i18n::UNNAMED_TRIP,
            name => name,
        }
    }

    /// Numbered roster; the numbers are what `remove_participant` takes.
    pub fn render_roster(trip: &Trip) -> String {
        if trip.roster().is_empty() {
            return i18n::NO_FRIENDS.to_string();
        }

        let headers = [Cow::Borrowed("#"), Cow::Borrowed(i18n::MEMBER)];
        TextTableBuilder::new()
            .alignments(&[Alignment::Right, Alignment::Left])
            .headers(&headers)
            .rows(trip.roster().iter().enumerate().map(|(index, participant)| {
                [
                    Cow::Owned(index.to_string()),
                    Cow::Borrowed(participant.as_str()),
                ]
            }))
            .build()
    }

    pub fn render_expenses(trip: &Trip) -> String {
        if trip.expenses().is_empty() {
            return i18n::NO_EXPENSES.to_string();
        }

        let headers = [
            Cow::Borrowed("#"),
            Cow::Borrowed(i18n::TITLE),
            Cow::Borrowed(i18n::AMOUNT),
            Cow::Borrowed(i18n::PAYER),
            Cow::Borrowed(i18n::SHARED_BY),
        ];
        let mut builder = TextTableBuilder::new()
            .alignments(&[
                Alignment::Right,
                Alignment::Left,
                Alignment::Right,
                Alignment::Left,
                Alignment::Left,
            ])
            .headers(&headers);

        for (index, expense) in trip.expenses().iter().enumerate() {
            let shared_by = match &expense.split {
                SplitPolicy::Equal => Cow::Borrowed(i18n::EVERYONE),
                SplitPolicy::Among(sharers) => Cow::Owned(
                    sharers
                        .iter()
                        .map(|sharer| sharer.as_str())
                        .collect::<Vec<_>>()
                        .join(", "),
                ),
            };
            builder = builder.row([
                Cow::Owned(index.to_string()),
                Cow::Borrowed(expense.title.as_str()),
                Cow::Owned(expense.amount.to_string()),
                Cow::Borrowed(expense.payer.as_str()),
                shared_by,
            ]);
        }

        builder.build()
    }
}
