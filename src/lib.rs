pub mod catalog;
pub mod civil;
pub mod cli;
pub mod cmd;
pub mod completions;
pub mod config;
pub mod countdown;
pub mod countries;
pub mod error;
pub mod init;
pub mod logging;
pub mod model;
pub mod output;
pub mod provider;
pub mod search;
pub mod state;
#[cfg(test)]
mod test_helpers;
pub mod ticker;

pub use catalog::Catalog;
pub use civil::CivilDateTime;
pub use countdown::{compute_remaining, decompose, CountdownEngine};
pub use error::CountdownError;
pub use model::{TimeRemaining, ZoneRecord};
pub use provider::{TimeService, TzdbService};
pub use search::{display_name, filter};
