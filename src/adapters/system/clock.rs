use crate::ports::clock::Clock as ClockTrait;
use chrono::{Local, NaiveDate};

/// Wall-clock implementation of Clock
///
/// Uses the local calendar date of the host.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl ClockTrait for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
