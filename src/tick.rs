//! Pending tick counter shared between the timer interrupt and the main loop.
//!
//! The interrupt posts ticks, the loop consumes them. Both sides mutate the
//! count inside a critical section, so an increment can never race a
//! decrement, even on cores without atomic read-modify-write.

use core::cell::Cell;

use critical_section::Mutex;
use embassy_time::Duration;

/// Count of ticks received but not yet processed.
///
/// Place it in a `static` and hand a [`TickSender`] to the interrupt handler
/// and a [`TickReceiver`] to the consumer loop.
pub struct TickCounter {
    pending: Mutex<Cell<u32>>,
}

impl TickCounter {
    /// Create a counter with no pending ticks.
    pub const fn new() -> Self {
        Self {
            pending: Mutex::new(Cell::new(0)),
        }
    }

    /// Get a sender handle for the tick source.
    pub const fn sender(&self) -> TickSender<'_> {
        TickSender { counter: self }
    }

    /// Get a receiver handle for the consumer loop.
    pub const fn receiver(&self) -> TickReceiver<'_> {
        TickReceiver { counter: self }
    }

    /// Record one tick.
    ///
    /// Saturates at `u32::MAX` instead of wrapping.
    pub fn post(&self) {
        critical_section::with(|cs| {
            let pending = self.pending.borrow(cs);
            pending.set(pending.get().saturating_add(1));
        });
    }

    /// Remove one processed tick.
    ///
    /// Returns `false` if there was nothing to consume.
    pub fn consume(&self) -> bool {
        critical_section::with(|cs| {
            let pending = self.pending.borrow(cs);
            match pending.get() {
                0 => false,
                count => {
                    pending.set(count - 1);
                    true
                }
            }
        })
    }

    /// Number of ticks waiting to be processed.
    pub fn pending(&self) -> u32 {
        critical_section::with(|cs| self.pending.borrow(cs).get())
    }
}

impl Default for TickCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Tick source side of a [`TickCounter`].
///
/// Call [`TickSender::post`] from the timer interrupt and nothing else:
/// no LED I/O or blocking work belongs in that context.
#[derive(Clone, Copy)]
pub struct TickSender<'a> {
    counter: &'a TickCounter,
}

impl TickSender<'_> {
    pub fn post(&self) {
        self.counter.post();
    }
}

/// Consumer side of a [`TickCounter`].
#[derive(Clone, Copy)]
pub struct TickReceiver<'a> {
    counter: &'a TickCounter,
}

impl TickReceiver<'_> {
    pub fn pending(&self) -> u32 {
        self.counter.pending()
    }

    pub fn consume(&self) -> bool {
        self.counter.consume()
    }
}

/// Periodic interrupt source driving a [`TickCounter`].
///
/// Implemented by the platform; invoked once at startup.
pub trait TickTimer {
    /// Start firing every `period`, posting one tick per overflow
    fn start_periodic(&mut self, period: Duration);
}
