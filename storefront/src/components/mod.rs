//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod footer;
mod header;
mod menu;
mod order;
mod pizza;

pub use footer::Footer;
pub use header::Header;
pub use menu::Menu;
pub use order::Order;
pub use pizza::Pizza;
