//! Cart Table Component
//!
//! Lists every line of the cart.

use leptos::prelude::*;

use crate::models::CartLine;
use super::CartRow;

#[component]
pub fn CartTable(lines: Vec<CartLine>) -> impl IntoView {
    if lines.is_empty() {
        return view! { <p class="cart-empty">"Your cart is empty."</p> }.into_any();
    }

    view! {
        <table class="cart-table">
            <thead>
                <tr>
                    <th>"Tour"</th>
                    <th>"Time"</th>
                    <th>"Price"</th>
                    <th>"Quantity"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {lines.into_iter().map(|line| view! { <CartRow line=line /> }).collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}
