#![warn(clippy::uninlined_format_args)]

#[cfg(all(feature = "ja", feature = "en"))]
compile_error!("Cannot enable both 'ja' and 'en' features at the same time");

#[cfg(feature = "ja")]
#[path = "ja.rs"]
mod lang;

#[cfg(feature = "en")]
#[path = "en.rs"]
mod lang;

#[cfg(not(any(feature = "ja", feature = "en")))]
#[path = "en.rs"]
mod lang;

pub use lang::*;
