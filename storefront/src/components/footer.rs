//! Footer component

use leptos::prelude::*;
use shared::{footer_view, FooterView, OperatingHours};

use super::Order;
use crate::clock::BrowserClock;

#[component]
pub fn Footer(hours: OperatingHours) -> impl IntoView {
    // clock is read on every render, never cached
    let body = match footer_view(hours, &BrowserClock) {
        FooterView::Open(order) => view! { <Order order=order /> }.into_any(),
        FooterView::Closed { message } => view! { <p>{message}</p> }.into_any(),
    };

    view! {
        <footer class="footer">
            {body}
        </footer>
    }
}
