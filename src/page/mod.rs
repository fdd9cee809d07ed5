//! Page Surfaces
//!
//! The parts of the page the controller touches: traits plus their
//! signal-backed implementations.

mod alert;
mod bootstrap;
mod rows;

pub use alert::{AlertBanner, AlertSignals};
pub use bootstrap::{load, PageData};
pub use rows::{LineItemView, RowRegistry, HIDDEN_DISPLAY};
