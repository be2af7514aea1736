//! Order call-to-action

use leptos::prelude::*;
use shared::OrderView;

/// the button has no handler; ordering is not implemented
#[component]
pub fn Order(order: OrderView) -> impl IntoView {
    view! {
        <div class="order">
            <p>{order.message}</p>
            <button class="btn">"Order"</button>
        </div>
    }
}
