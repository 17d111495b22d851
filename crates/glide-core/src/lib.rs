pub mod calendar;
pub mod config;
pub mod error;
pub mod scroll;

pub use config::{AppConfig, CalendarConfig, ScrollConfig};
pub use error::{Error, Result};
pub use scroll::{ScrollHandle, ScrollPhase};
