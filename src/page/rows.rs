//! Cart Rows
//!
//! Per-row state the controller reads and mutates: the quantity text as
//! typed and the row's display style.

use std::collections::HashMap;
use std::sync::Arc;

use leptos::prelude::*;

use crate::models::{CartLine, ItemId};

/// Display style of a row removed optimistically
pub const HIDDEN_DISPLAY: &str = "none";

pub trait LineItemView {
    /// Current text of the item's quantity input
    fn quantity_input(&self, item: &ItemId) -> Option<String>;
    /// Current display style of the item's row
    fn row_display(&self, item: &ItemId) -> Option<String>;
    fn set_row_display(&self, item: &ItemId, display: &str);
}

#[derive(Clone, Copy)]
pub struct RowSignals {
    pub quantity: RwSignal<String>,
    pub display: RwSignal<String>,
}

impl RowSignals {
    fn for_line(line: &CartLine) -> Self {
        Self {
            quantity: RwSignal::new(line.quantity.to_string()),
            // Rows start without an inline display style
            display: RwSignal::new(String::new()),
        }
    }
}

/// Row signals keyed by item, built once from the page data
#[derive(Clone, Default)]
pub struct RowRegistry {
    rows: Arc<HashMap<ItemId, RowSignals>>,
}

impl RowRegistry {
    pub fn from_lines(lines: &[CartLine]) -> Self {
        let rows = lines
            .iter()
            .map(|line| (line.id.clone(), RowSignals::for_line(line)))
            .collect();
        Self { rows: Arc::new(rows) }
    }

    pub fn get(&self, item: &ItemId) -> Option<RowSignals> {
        self.rows.get(item).copied()
    }
}

impl LineItemView for RowRegistry {
    fn quantity_input(&self, item: &ItemId) -> Option<String> {
        self.get(item).map(|row| row.quantity.get_untracked())
    }

    fn row_display(&self, item: &ItemId) -> Option<String> {
        self.get(item).map(|row| row.display.get_untracked())
    }

    fn set_row_display(&self, item: &ItemId, display: &str) {
        if let Some(row) = self.get(item) {
            row.display.set(display.to_string());
        }
    }
}
