use chrono::{Datelike, Local};

use crate::site::application::ports::outgoing::Clock;

/// Reads the year from the local wall clock on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}
