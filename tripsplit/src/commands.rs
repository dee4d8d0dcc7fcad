use crate::{
    bootstrap::AppConfig,
    cli::{AddExpenseArgs, Command, ExpenseCommand, FriendCommand},
};
use std::borrow::Cow;
use tripsplit_application::{ExpenseDraft, KeyValueStore, TripError, TripSession};
use tripsplit_i18n as i18n;
use tripsplit_infrastructure::JsonFileStore;
use tripsplit_presentation::{
    BalanceSheetPresenter, TripPresenter, format_balance_warning, format_trip_error,
};

type CliResult<T> = Result<T, Cow<'static, str>>;

pub fn execute(config: &AppConfig, command: Command) -> CliResult<String> {
    let store = JsonFileStore::new(&config.store_path);
    let mut session = TripSession::open(store).map_err(present)?;
    execute_on(&mut session, command)
}

fn execute_on<S: KeyValueStore>(
    session: &mut TripSession<S>,
    command: Command,
) -> CliResult<String> {
    match command {
        Command::Name { name: None } => Ok(TripPresenter::render_title(session.trip()).to_owned()),
        Command::Name { name: Some(name) } => {
            session.set_trip_name(name.trim()).map_err(present)?;
            Ok(i18n::trip_renamed(session.trip().name()))
        }
        Command::Friend(FriendCommand::Add { name }) => {
            let added = session.add_participant(&name).map_err(present)?;
            Ok(i18n::friend_added(added))
        }
        Command::Friend(FriendCommand::Remove { index }) => {
            let removed = session.remove_participant(index).map_err(present)?;
            Ok(i18n::friend_removed(removed))
        }
        Command::Friend(FriendCommand::List) => Ok(TripPresenter::render_roster(session.trip())),
        Command::Expense(ExpenseCommand::Add(args)) => add_expense(session, args),
        Command::Expense(ExpenseCommand::Remove { index }) => {
            let removed = session.remove_expense(index).map_err(present)?;
            Ok(i18n::expense_removed(removed.title))
        }
        Command::Expense(ExpenseCommand::List) => Ok(TripPresenter::render_expenses(session.trip())),
        Command::Balance { dismiss } => render_balance(session, dismiss),
    }
}

fn add_expense<S: KeyValueStore>(
    session: &mut TripSession<S>,
    args: AddExpenseArgs,
) -> CliResult<String> {
    let draft = ExpenseDraft {
        title: args.title,
        amount: args.amount,
        payer: args.payer,
        shared_by: args.shared_by,
    };
    let added = session.add_expense(draft).map_err(present)?;
    Ok(i18n::expense_added(added.title, added.amount))
}

/// Dismissal numbers refer to the list as it was before any of them applied.
fn render_balance<S: KeyValueStore>(
    session: &mut TripSession<S>,
    mut dismiss: Vec<usize>,
) -> CliResult<String> {
    dismiss.sort_unstable_by(|lhs, rhs| rhs.cmp(lhs));
    dismiss.dedup();
    for index in dismiss {
        if session.dismiss_settlement(index).is_none() {
            return Err(i18n::no_settlement_at(index).into());
        }
    }

    let title = TripPresenter::render_title(session.trip());
    let ledger = session.ledger();
    let view = BalanceSheetPresenter::render(ledger.report(), ledger.displayed(), ledger.roster());

    let mut sections = vec![title.to_owned(), view.summary];
    sections.extend(
        ledger
            .report()
            .warnings
            .iter()
            .map(|warning| format!("! {}", format_balance_warning(warning))),
    );
    sections.push(view.balance_table);
    sections.extend(view.settlement_table);

    Ok(sections.join("\n"))
}

fn present(error: TripError) -> Cow<'static, str> {
    format_trip_error(&error).into()
}
