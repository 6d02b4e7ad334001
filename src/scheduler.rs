//! Tick-driven strobe scheduling
//!
//! The scheduler drains the pending tick counter and advances every strobe
//! once per tick. Pixel changes from all strobes within a tick are batched
//! into a single flush, so the strip is latched at most once per tick.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Rgb;
use crate::config::{ConfigError, LightConfig};
use crate::output::PixelSink;
use crate::side::{DigitalInput, Side, read_side};
use crate::strobe::{StrobeGroup, StrobeKind};
use crate::tick::{TickReceiver, TickTimer};

/// Owns the strobe timers and the pixel sink
///
/// # Usage
///
/// ```ignore
/// static TICKS: TickCounter = TickCounter::new();
///
/// // timer interrupt
/// fn on_overflow() {
///     TICKS.sender().post();
/// }
///
/// let mut scheduler =
///     StrobeScheduler::start(&LightConfig::default(), sink, &mut jumper, &mut timer)?;
/// scheduler.run(&TICKS.receiver(), || cortex_m::asm::wfi());
/// ```
pub struct StrobeScheduler<S: PixelSink> {
    sink: S,
    side: Side,
    nav_pixels: [usize; 2],
    nav_color: Rgb,
    beacon: StrobeGroup,
    collision: StrobeGroup,
}

impl<S: PixelSink> StrobeScheduler<S> {
    /// Create a scheduler for a known side
    ///
    /// Nothing is written to the sink; see [`StrobeScheduler::show_initial`].
    pub fn new(config: &LightConfig, sink: S, side: Side) -> Result<Self, ConfigError> {
        config.layout.validate(sink.pixel_count())?;

        Ok(Self {
            sink,
            side,
            nav_pixels: config.layout.nav,
            nav_color: side.nav_color(&config.palette),
            beacon: StrobeGroup::new(
                StrobeKind::Beacon,
                config.beacon,
                config.layout.beacon,
                config.palette.beacon,
            ),
            collision: StrobeGroup::new(
                StrobeKind::Collision,
                config.collision,
                config.layout.collision,
                config.palette.collision,
            ),
        })
    }

    /// Bring the lights up
    ///
    /// Reads the side jumper once, lights the navigation pixels in that
    /// side's color with both strobes dark, flushes, then starts the tick
    /// timer. The jumper is read before any pixel is written.
    pub fn start<I, T>(
        config: &LightConfig,
        sink: S,
        jumper: &mut I,
        timer: &mut T,
    ) -> Result<Self, ConfigError>
    where
        I: DigitalInput,
        T: TickTimer,
    {
        let side = read_side(jumper, &config.side_select);

        #[cfg(feature = "esp32-log")]
        println!("[navlights] side: {:?}", side);

        let mut scheduler = Self::new(config, sink, side)?;
        scheduler.show_initial();
        timer.start_periodic(config.tick_period);

        #[cfg(feature = "esp32-log")]
        println!(
            "[navlights] ticking every {}ms",
            config.tick_period.as_millis()
        );

        Ok(scheduler)
    }

    /// Paint navigation and strobe pixels for the current state and flush once
    pub fn show_initial(&mut self) {
        for index in self.nav_pixels {
            self.sink.set_pixel_color(index, self.nav_color);
        }
        self.beacon.paint(&mut self.sink);
        self.collision.paint(&mut self.sink);
        self.sink.show();
    }

    /// Advance every strobe by one tick
    ///
    /// Flushes the sink once if any strobe changed state. Returns whether a
    /// flush happened.
    pub fn process_tick(&mut self) -> bool {
        let beacon_changed = self.beacon.advance(&mut self.sink);
        let collision_changed = self.collision.advance(&mut self.sink);

        let dirty = beacon_changed || collision_changed;
        if dirty {
            self.sink.show();
        }
        dirty
    }

    /// Process every pending tick
    ///
    /// A tick is consumed only after it has been processed. Returns the
    /// number of ticks handled.
    pub fn drain(&mut self, ticks: &TickReceiver<'_>) -> u32 {
        let mut processed = 0;
        while ticks.pending() > 0 {
            self.process_tick();
            ticks.consume();
            processed += 1;
        }
        processed
    }

    /// Drain ticks forever, calling `idle` whenever nothing is pending
    ///
    /// A stalled tick source leaves the lights frozen in their last state.
    pub fn run<F: FnMut()>(&mut self, ticks: &TickReceiver<'_>, mut idle: F) -> ! {
        loop {
            if self.drain(ticks) == 0 {
                idle();
            }
        }
    }

    pub const fn side(&self) -> Side {
        self.side
    }

    pub const fn beacon(&self) -> &StrobeGroup {
        &self.beacon
    }

    pub const fn collision(&self) -> &StrobeGroup {
        &self.collision
    }

    /// Get a reference to the sink.
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Get a mutable reference to the sink.
    pub const fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
