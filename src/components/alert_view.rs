//! Alert View Component
//!
//! Renders the shared banner (`#alert`).

use leptos::prelude::*;

use crate::context::use_cart_context;

#[component]
pub fn AlertView() -> impl IntoView {
    let alert = use_cart_context().alert;

    view! {
        <div
            id="alert"
            class="alert"
            role="alert"
            style:display=move || if alert.is_visible() { "block" } else { "none" }
        >
            {move || alert.message()}
        </div>
    }
}
