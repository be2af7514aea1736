//! Browser clock

use shared::Clock;

/// local hour as the browser reports it
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn current_hour(&self) -> u8 {
        js_sys::Date::new_0().get_hours() as u8
    }
}
