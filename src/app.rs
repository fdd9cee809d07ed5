//! Cart Page App
//!
//! Root component: alert banner, cart table, checkout link.

use leptos::prelude::*;

use crate::components::{AlertView, CartTable};
use crate::context::{provide_cart_context, CartContext};
use crate::page::{AlertSignals, PageData, RowRegistry};

#[component]
pub fn App(data: PageData) -> impl IntoView {
    let PageData { config, lines } = data;

    // Provide context to all children
    provide_cart_context(CartContext::new(
        AlertSignals::new(),
        RowRegistry::from_lines(&lines),
        &config.api_base,
    ));
    tracing::info!(lines = lines.len(), api_base = %config.api_base, "cart page mounted");

    view! {
        <div class="cart-page">
            <h1>"Your Cart"</h1>
            <AlertView />
            <CartTable lines=lines />
            {config.checkout_url.map(|url| view! {
                <a class="checkout-btn" href=url>"Checkout"</a>
            })}
        </div>
    }
}
