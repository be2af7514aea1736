//! Menu component

use leptos::prelude::*;
use shared::{menu_view, MenuItem, MenuView, PizzaView, MENU_HEADING};

use super::Pizza;

#[component]
pub fn Menu(pizzas: Vec<MenuItem>) -> impl IntoView {
    let body = match menu_view(&pizzas) {
        MenuView::Listing { intro, entries } => view! {
            <p>{intro}</p>
            <ul class="pizzas">
                // keyed by name, so names must stay unique
                <For
                    each=move || entries.clone()
                    key=|entry: &PizzaView| entry.key.clone()
                    children=|entry: PizzaView| view! { <Pizza pizza=entry /> }
                />
            </ul>
        }
        .into_any(),
        MenuView::Empty { message } => view! { <p>{message}</p> }.into_any(),
    };

    view! {
        <main class="menu">
            <h2>{MENU_HEADING}</h2>
            {body}
        </main>
    }
}
