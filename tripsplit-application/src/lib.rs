#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod ledger;
pub mod ports;
pub mod session;
pub mod storage;
pub mod trip;

pub use error::{StoreError, TripError};
pub use ledger::SettlementLedger;
pub use ports::KeyValueStore;
pub use session::TripSession;
pub use storage::{EXPENSES_KEY, ExpenseRecord, ROSTER_KEY, TRIP_NAME_KEY};
pub use trip::{ExpenseDraft, Trip};
