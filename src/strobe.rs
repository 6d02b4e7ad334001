//! Strobe timers
//!
//! A strobe is a two-state (on/off) timer counted in ticks. Each light group
//! that blinks owns one [`StrobeTimer`]; the scheduler advances every timer
//! once per tick and repaints the group's pixels when the state flips.

use crate::color::{OFF_COLOR, Rgb};
use crate::output::PixelSink;

/// Current phase of a strobe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrobeState {
    /// Lights are lit
    On,
    /// Lights are dark
    Off,
}

impl StrobeState {
    /// Returns the opposite state
    pub const fn toggled(self) -> Self {
        match self {
            Self::On => Self::Off,
            Self::Off => Self::On,
        }
    }

    pub const fn is_lit(self) -> bool {
        matches!(self, Self::On)
    }
}

/// On and off durations of a strobe, in ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrobeTimings {
    pub on: u16,
    pub off: u16,
}

impl StrobeTimings {
    pub const fn new(on: u16, off: u16) -> Self {
        Self { on, off }
    }

    /// Number of ticks spent in `state` before flipping
    pub const fn threshold(self, state: StrobeState) -> u16 {
        match state {
            StrobeState::On => self.on,
            StrobeState::Off => self.off,
        }
    }

    /// Length of one full on/off cycle in ticks
    #[allow(clippy::cast_lossless)]
    pub const fn period(self) -> u32 {
        self.on as u32 + self.off as u32
    }
}

/// Outcome of a single [`StrobeTimer::advance`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrobeStep {
    /// State differs from the one before the call
    pub transitioned: bool,
    /// State after the call
    pub state: StrobeState,
}

/// Two-state tick timer
///
/// Starts dark with no elapsed ticks, so the first transition happens after
/// `timings.off` ticks.
#[derive(Debug, Clone)]
pub struct StrobeTimer {
    timings: StrobeTimings,
    state: StrobeState,
    ticks_in_state: u16,
}

impl StrobeTimer {
    pub const fn new(timings: StrobeTimings) -> Self {
        Self {
            timings,
            state: StrobeState::Off,
            ticks_in_state: 0,
        }
    }

    pub const fn state(&self) -> StrobeState {
        self.state
    }

    pub const fn ticks_in_state(&self) -> u16 {
        self.ticks_in_state
    }

    pub const fn timings(&self) -> StrobeTimings {
        self.timings
    }

    pub const fn is_lit(&self) -> bool {
        self.state.is_lit()
    }

    /// Count one tick and flip state once the current phase has elapsed
    ///
    /// A phase configured with zero ticks is skipped: after flipping into it
    /// the timer immediately flips back. At most two flips happen per call,
    /// so a timer with both durations at zero simply holds its state.
    pub fn advance(&mut self) -> StrobeStep {
        let previous = self.state;
        self.ticks_in_state = self.ticks_in_state.saturating_add(1);

        if self.ticks_in_state < self.timings.threshold(self.state) {
            return StrobeStep {
                transitioned: false,
                state: self.state,
            };
        }

        self.ticks_in_state = 0;
        self.state = self.state.toggled();
        if self.timings.threshold(self.state) == 0 {
            self.state = self.state.toggled();
        }

        StrobeStep {
            transitioned: self.state != previous,
            state: self.state,
        }
    }
}

/// Which strobe a group belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrobeKind {
    /// Rotating beacon
    Beacon,
    /// Anti-collision strobe
    Collision,
}

/// A pair of pixels driven identically by one [`StrobeTimer`]
#[derive(Debug, Clone)]
pub struct StrobeGroup {
    kind: StrobeKind,
    timer: StrobeTimer,
    pixels: [usize; 2],
    color: Rgb,
}

impl StrobeGroup {
    pub const fn new(kind: StrobeKind, timings: StrobeTimings, pixels: [usize; 2], color: Rgb) -> Self {
        Self {
            kind,
            timer: StrobeTimer::new(timings),
            pixels,
            color,
        }
    }

    pub const fn kind(&self) -> StrobeKind {
        self.kind
    }

    pub const fn timer(&self) -> &StrobeTimer {
        &self.timer
    }

    pub const fn pixels(&self) -> [usize; 2] {
        self.pixels
    }

    /// Color the group's pixels show in `state`
    pub const fn color_for(&self, state: StrobeState) -> Rgb {
        if state.is_lit() { self.color } else { OFF_COLOR }
    }

    /// Paint the group's pixels for the current state without flushing
    pub fn paint<S: PixelSink>(&self, sink: &mut S) {
        let color = self.color_for(self.timer.state());
        for index in self.pixels {
            sink.set_pixel_color(index, color);
        }
    }

    /// Advance the timer one tick, repainting on a transition
    ///
    /// Returns `true` if pixels were changed. The sink is never flushed here.
    pub fn advance<S: PixelSink>(&mut self, sink: &mut S) -> bool {
        let step = self.timer.advance();
        if step.transitioned {
            self.paint(sink);
        }
        step.transitioned
    }
}
