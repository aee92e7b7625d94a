use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Idle time after the last keystroke before a search runs.
pub const SEARCH_DEBOUNCE_MS: u32 = 500;

/// Starts a one-shot callback after a delay. Dropping the handle may cancel it.
pub trait Timer {
    type Handle;

    fn start(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// `setTimeout` in the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    type Handle = Timeout;

    fn start(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}

pub type SearchDebouncer = Debouncer<BrowserTimer>;

/// Runs only the most recently scheduled callback, once `delay_ms` passes
/// without another call to [`Debouncer::schedule`] or [`Debouncer::cancel`].
pub struct Debouncer<T: Timer> {
    timer: T,
    delay_ms: u32,
    generation: Rc<Cell<u64>>,
    pending: Option<T::Handle>,
}

impl<T: Timer> Debouncer<T> {
    pub fn new(timer: T, delay_ms: u32) -> Self {
        Self {
            timer,
            delay_ms,
            generation: Rc::new(Cell::new(0)),
            pending: None,
        }
    }

    pub fn schedule(&mut self, callback: impl FnOnce() + 'static) {
        self.cancel();
        let scheduled = self.generation.get();
        let generation = Rc::clone(&self.generation);
        self.pending = Some(self.timer.start(
            self.delay_ms,
            Box::new(move || {
                if generation.get() == scheduled {
                    callback();
                }
            }),
        ));
    }

    // A callback whose generation has moved on never runs, even if its timer fires.
    pub fn cancel(&mut self) {
        self.generation.set(self.generation.get() + 1);
        self.pending = None;
    }
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(BrowserTimer, SEARCH_DEBOUNCE_MS)
    }
}
