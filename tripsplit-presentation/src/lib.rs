#![warn(clippy::uninlined_format_args)]

pub mod balance_sheet_presenter;
pub mod error_presenter;
pub mod text_table;
pub mod trip_presenter;

pub use balance_sheet_presenter::{BalanceSheetPresenter, BalanceSheetView};
pub use error_presenter::{format_balance_warning, format_trip_error};
pub use trip_presenter::TripPresenter;
