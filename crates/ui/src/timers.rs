use gloo_timers::callback::Timeout;
use neo_lux_core::schedule::{Scheduler, Task};

/// `setTimeout`-backed scheduler; dropping the `Timeout` clears it
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn defer(&self, delay_ms: u32, task: Task) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}
