//! Timer scheduling used by the animated components.
//!
//! Every timer hands back a handle. Dropping the handle cancels the timer, so a
//! component that keeps its handles in an effect cleanup can never be touched
//! by a callback after it unmounts.

use gloo_timers::callback::{Interval, Timeout};

pub trait Scheduler {
    type Handle;

    /// Runs `callback` once, `delay_ms` from now.
    fn once(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;

    /// Runs `callback` every `period_ms` until the handle is dropped.
    fn repeating(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Self::Handle;
}

/// Browser event loop timers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserScheduler;

/// Dropping either variant clears the underlying JS timer.
#[allow(dead_code)] // held only for its Drop
pub enum BrowserTimer {
    Timeout(Timeout),
    Interval(Interval),
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTimer;

    fn once(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> BrowserTimer {
        BrowserTimer::Timeout(Timeout::new(delay_ms, callback))
    }

    fn repeating(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> BrowserTimer {
        BrowserTimer::Interval(Interval::new(period_ms, callback))
    }
}
