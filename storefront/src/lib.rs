//! ==============================================================================
//! lib.rs - Pizza Palette storefront
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm front-end that renders the pizza menu. the menu and the
//!     opening hours come from the catalog compiled into the shared crate;
//!     the footer checks the browser clock to decide open vs. closed.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - no network calls, no user input, no mutable state
//!     - decisions live in `shared`, components only lay out markup
//!
//! ==============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use shared::{Catalog, TITLE};
use wasm_bindgen::prelude::*;

mod clock;
mod components;

use components::{Footer, Header, Menu};

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    mount_to_body(App);
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App() -> impl IntoView {
    provide_meta_context();
    let Catalog { hours, pizzas } = load_catalog();

    view! {
        <Title text=TITLE />
        <div class="container">
            <Header />
            <Menu pizzas=pizzas />
            <Footer hours=hours />
        </div>
    }
}

/// embedded catalog, or an empty menu if it can't be read
fn load_catalog() -> Catalog {
    match Catalog::embedded() {
        Ok(catalog) => {
            let dupes = catalog.duplicate_names();
            if !dupes.is_empty() {
                log::warn!("pizza names used more than once: {}", dupes.join(", "));
            }
            catalog
        }
        Err(e) => {
            log::error!("failed to load menu catalog: {}", e);
            Catalog::default()
        }
    }
}
