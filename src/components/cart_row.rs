//! Cart Row Component
//!
//! One line item: quantity input with Update, and Remove.

use leptos::prelude::*;

use crate::context::use_cart_context;
use crate::models::CartLine;

/// Row `items.{id}` with input `items.{id}.quantity`.
///
/// The input is never reset by the controller; it keeps what was typed.
#[component]
pub fn CartRow(line: CartLine) -> impl IntoView {
    let ctx = use_cart_context();
    let Some(row) = ctx.rows.get(&line.id) else {
        return ().into_any();
    };

    let on_update = {
        let ctx = ctx.clone();
        let id = line.id.clone();
        move |_| ctx.update_quantity(id.clone())
    };
    let on_remove = {
        let id = line.id.clone();
        move |_| ctx.remove_item(id.clone())
    };

    view! {
        <tr
            id=line.id.row_element_id()
            class="cart-row"
            style:display=move || row.display.get()
        >
            <td class="tour-code">{line.tour_code.clone()}</td>
            <td class="tour-time">{line.display_time()}</td>
            <td class="tour-price">{line.display_price()}</td>
            <td class="quantity">
                <input
                    id=line.id.quantity_element_id()
                    type="text"
                    size="3"
                    prop:value=move || row.quantity.get()
                    on:input=move |ev| row.quantity.set(event_target_value(&ev))
                />
                <button class="update-btn" on:click=on_update>"Update"</button>
            </td>
            <td>
                <button class="remove-btn" on:click=on_remove>"Remove"</button>
            </td>
        </tr>
    }
    .into_any()
}
