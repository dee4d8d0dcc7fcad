use crate::bootstrap::{DEFAULT_STORE_PATH, STORE_ENV};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tripsplit_domain::Money;

/// Split shared trip expenses and work out who pays whom.
#[derive(Debug, Parser)]
#[command(name = "tripsplit", version, about)]
pub struct Cli {
    /// JSON file holding the trip
    #[arg(long, global = true, env = STORE_ENV, default_value = DEFAULT_STORE_PATH)]
    pub store: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the trip name, or set it
    Name { name: Option<String> },
    /// Manage the roster
    #[command(subcommand)]
    Friend(FriendCommand),
    /// Manage expenses
    #[command(subcommand)]
    Expense(ExpenseCommand),
    /// Show balances and who pays whom
    Balance {
        /// Hide settlements by their `#` for this run only
        #[arg(long, num_args = 1..)]
        dismiss: Vec<usize>,
    },
}

#[derive(Debug, Subcommand)]
pub enum FriendCommand {
    Add { name: String },
    Remove { index: usize },
    List,
}

#[derive(Debug, Subcommand)]
pub enum ExpenseCommand {
    Add(AddExpenseArgs),
    Remove { index: usize },
    List,
}

#[derive(Debug, Args)]
pub struct AddExpenseArgs {
    pub title: String,
    #[arg(allow_negative_numbers = true)]
    pub amount: Money,
    #[arg(long)]
    pub payer: String,
    /// Comma-separated names; omit to split across everyone
    #[arg(long, value_delimiter = ',')]
    pub shared_by: Option<Vec<String>>,
}
