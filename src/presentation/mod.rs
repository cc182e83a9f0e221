//! Presentation module
//!
//! Pure functions turning stations and reservation outcomes into message text
//! and choice sets. Nothing here performs I/O.

pub mod format;
pub mod keyboards;
pub mod messages;

pub use format::{format_station, format_station_list};
pub use keyboards::{build_main_menu_choices, build_station_choices, CallbackAction, Choice, ChoiceSet};
