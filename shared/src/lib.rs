//! ==============================================================================
//! lib.rs - shared types and render decisions for the pizza palette storefront
//! ==============================================================================
//!
//! purpose:
//!     defines the menu data model, the embedded catalog and the pure
//!     decision functions behind every conditional in the storefront ui.
//!     nothing in here touches the dom, so it builds and tests natively.
//!
//! relationships:
//!     - used by: storefront (leptos components render the view models)
//!     - catalog: embedded menu.json (pizzas + operating hours)
//!     - hours: open/closed check and the clock abstraction
//!     - view: (data, hour) -> display models for menu, pizza, footer
//!
//! design rationale:
//!     a render pass is a plain function of (static data, current hour).
//!     keeping the decisions here means the components only map fields to
//!     markup and every branch can be exercised without a browser.
//!
//! ==============================================================================

mod catalog;
mod hours;
mod view;

pub use catalog::{Catalog, CatalogError, MenuItem};
pub use hours::{Clock, FixedClock, LocalClock, OperatingHours};
pub use view::{
    app_view, footer_view, menu_view, AppView, FooterView, MenuView, OrderView, PizzaView,
    PriceLabel, EMPTY_MENU_MESSAGE, MENU_HEADING, SOLD_OUT_LABEL, TITLE,
};
