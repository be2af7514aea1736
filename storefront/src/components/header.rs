//! Header component

use leptos::prelude::*;
use shared::TITLE;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>{TITLE}</h1>
        </header>
    }
}
