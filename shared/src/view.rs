//! ==============================================================================
//! view.rs - render decisions
//! ==============================================================================
//!
//! purpose:
//!     turns (menu items, operating hours, current hour) into display models.
//!     every conditional in the storefront lives here, components only
//!     map these models onto markup.
//!
//! decisions:
//!     - menu: listing vs. "still working on our menu"
//!     - pizza: price vs. "SOLD OUT" (mutually exclusive, one flag)
//!     - footer: order block vs. opening hours message
//!
//! ==============================================================================

use crate::catalog::{Catalog, MenuItem};
use crate::hours::{Clock, OperatingHours};

pub const TITLE: &str = "Pizza Palette";
pub const MENU_HEADING: &str = "Our Menu";
pub const EMPTY_MENU_MESSAGE: &str = "We are still working on our menu. Please come back later.";
pub const SOLD_OUT_LABEL: &str = "SOLD OUT";

const PIZZA_CLASS: &str = "pizza";
const SOLD_OUT_CLASS: &str = "pizza sold-out";

// ==============================================================================
// pizza
// ==============================================================================

/// what goes in the price slot of a pizza card
#[derive(Debug, Clone, PartialEq)]
pub enum PriceLabel {
    /// formatted price, e.g. "12$"
    Price(String),
    SoldOut,
}

impl PriceLabel {
    pub fn text(&self) -> &str {
        match self {
            PriceLabel::Price(price) => price.as_str(),
            PriceLabel::SoldOut => SOLD_OUT_LABEL,
        }
    }
}

/// one rendered menu entry
#[derive(Debug, Clone, PartialEq)]
pub struct PizzaView {
    /// list key, the pizza name
    pub key: String,
    pub name: String,
    pub ingredients: String,
    pub photo: String,
    /// css class, carries the sold-out marker
    pub class: &'static str,
    pub label: PriceLabel,
}

impl PizzaView {
    pub fn is_sold_out(&self) -> bool {
        self.label == PriceLabel::SoldOut
    }
}

impl From<&MenuItem> for PizzaView {
    fn from(item: &MenuItem) -> Self {
        let (class, label) = if item.sold_out {
            (SOLD_OUT_CLASS, PriceLabel::SoldOut)
        } else {
            (PIZZA_CLASS, PriceLabel::Price(format_price(item.price)))
        };

        Self {
            key: item.name.clone(),
            name: item.name.clone(),
            ingredients: item.ingredients.clone(),
            photo: item.photo_name.clone(),
            class,
            label,
        }
    }
}

// f64's Display already drops a zero fraction: 6.0 -> "6", 12.5 -> "12.5"
fn format_price(price: f64) -> String {
    format!("{}$", price)
}

// ==============================================================================
// menu
// ==============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum MenuView {
    /// intro line plus one entry per pizza, in input order
    Listing {
        intro: String,
        entries: Vec<PizzaView>,
    },
    /// nothing on the menu yet
    Empty { message: &'static str },
}

impl MenuView {
    pub fn entries(&self) -> &[PizzaView] {
        match self {
            MenuView::Listing { entries, .. } => entries,
            MenuView::Empty { .. } => &[],
        }
    }
}

pub fn menu_view(pizzas: &[MenuItem]) -> MenuView {
    if pizzas.is_empty() {
        log::debug!("menu is empty, showing placeholder");
        return MenuView::Empty {
            message: EMPTY_MENU_MESSAGE,
        };
    }

    log::debug!("rendering {} menu entries", pizzas.len());
    MenuView::Listing {
        intro: format!(
            "Authentic Italian cuisine. {} creative dishes to choose from. \
             All from our stone oven, all organic, all delicious.",
            pizzas.len()
        ),
        entries: pizzas.iter().map(PizzaView::from).collect(),
    }
}

// ==============================================================================
// footer
// ==============================================================================

/// the call-to-action shown while open. the button does nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderView {
    pub open_hour: u8,
    pub close_hour: u8,
    pub message: String,
}

impl OrderView {
    pub fn new(hours: OperatingHours) -> Self {
        Self {
            open_hour: hours.open_hour,
            close_hour: hours.close_hour,
            message: format!(
                "We are open from {}:00 to {}:00. Come visit us or order online.",
                hours.open_hour, hours.close_hour
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FooterView {
    Open(OrderView),
    Closed { message: String },
}

impl FooterView {
    pub fn is_open(&self) -> bool {
        matches!(self, FooterView::Open(_))
    }
}

/// reads the clock once and decides what the footer shows
///
/// ```
/// use shared::{footer_view, FixedClock, OperatingHours};
///
/// let hours = OperatingHours::new(10, 22);
/// assert!(footer_view(hours, &FixedClock(22)).is_open());
/// assert!(!footer_view(hours, &FixedClock(23)).is_open());
/// ```
pub fn footer_view<C: Clock + ?Sized>(hours: OperatingHours, clock: &C) -> FooterView {
    let hour = clock.current_hour();
    let open = hours.is_open(hour);
    log::debug!(
        "hour {} against {}..={}: {}",
        hour,
        hours.open_hour,
        hours.close_hour,
        if open { "open" } else { "closed" }
    );

    if open {
        FooterView::Open(OrderView::new(hours))
    } else {
        FooterView::Closed {
            message: format!(
                "We are happy to welcome you between {}:00 and {}:00",
                hours.open_hour, hours.close_hour
            ),
        }
    }
}

// ==============================================================================
// app
// ==============================================================================

/// a full render pass: header, menu, footer in that order
#[derive(Debug, Clone, PartialEq)]
pub struct AppView {
    pub title: &'static str,
    pub menu: MenuView,
    pub footer: FooterView,
}

pub fn app_view<C: Clock + ?Sized>(catalog: &Catalog, clock: &C) -> AppView {
    AppView {
        title: TITLE,
        menu: menu_view(&catalog.pizzas),
        footer: footer_view(catalog.hours, clock),
    }
}

// ==============================================================================
// tests
// ==============================================================================
