//! UI Components
//!
//! Leptos components of the cart page.

mod alert_view;
mod cart_row;
mod cart_table;

pub use alert_view::AlertView;
pub use cart_row::CartRow;
pub use cart_table::CartTable;
