//! Pizza card component

use leptos::prelude::*;
use shared::PizzaView;

#[component]
pub fn Pizza(pizza: PizzaView) -> impl IntoView {
    let label = pizza.label.text().to_string();
    let alt = pizza.name.clone();

    view! {
        <li class=pizza.class>
            <img src=pizza.photo alt=alt />
            <div>
                <h3>{pizza.name}</h3>
                <p>{pizza.ingredients}</p>
                <span>{label}</span>
            </div>
        </li>
    }
}
