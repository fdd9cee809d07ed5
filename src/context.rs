//! Application Context
//!
//! Shared cart state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::FetchTransport;
use crate::controller::CartLineController;
use crate::models::ItemId;
use crate::page::{AlertSignals, RowRegistry};

pub type PageController = CartLineController<AlertSignals, RowRegistry, FetchTransport>;

#[derive(Clone)]
pub struct CartContext {
    pub alert: AlertSignals,
    pub rows: RowRegistry,
    controller: PageController,
}

impl CartContext {
    pub fn new(alert: AlertSignals, rows: RowRegistry, api_base: &str) -> Self {
        let controller = CartLineController::new(alert, rows.clone(), FetchTransport, api_base);
        Self { alert, rows, controller }
    }

    /// Send the typed quantity for `item`; the alert reports the outcome
    pub fn update_quantity(&self, item: ItemId) {
        let completion = self.controller.update_quantity(&item);
        spawn_local(async move {
            let _ = completion.await;
        });
    }

    /// Hide `item`'s row and delete it; the row comes back if the server refuses
    pub fn remove_item(&self, item: ItemId) {
        let completion = self.controller.remove_item(&item);
        spawn_local(async move {
            let _ = completion.await;
        });
    }
}

pub fn provide_cart_context(ctx: CartContext) {
    provide_context(ctx);
}

pub fn use_cart_context() -> CartContext {
    use_context::<CartContext>().expect("CartContext should be provided")
}
