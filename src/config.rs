//! Static light configuration
//!
//! Everything here is fixed at build time; nothing is reconfigured while the
//! lights run.

use embassy_time::Duration;

use crate::color::{Rgb, rgb_from_u32};
use crate::layout::LightLayout;
use crate::side::SideSelectConfig;
use crate::strobe::StrobeTimings;

/// Number of pixels on the chain
pub const PIXEL_COUNT: usize = 6;

/// Interval between timer ticks
pub const TICK_PERIOD: Duration = Duration::from_millis(100);

/// Beacon on/off durations in ticks
pub const BEACON_TIMINGS: StrobeTimings = StrobeTimings::new(12, 12);

/// Anti-collision on/off durations in ticks
///
/// Keep the total period coprime with the beacon's so the two patterns
/// drift apart for as long as possible.
pub const COLLISION_TIMINGS: StrobeTimings = StrobeTimings::new(10, 11);

pub const NAV_PORT_COLOR: Rgb = rgb_from_u32(0x00FF_0000);
pub const NAV_STARBOARD_COLOR: Rgb = rgb_from_u32(0x0000_FF00);
pub const BEACON_COLOR: Rgb = rgb_from_u32(0x00FF_0000);
pub const COLLISION_COLOR: Rgb = rgb_from_u32(0x00FF_FFFF);

pub const DEFAULT_LAYOUT: LightLayout = LightLayout {
    nav: [1, 2],
    beacon: [3, 4],
    collision: [5, 0],
};

/// Configuration errors detected at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A light is assigned to a pixel past the end of the strip
    PixelOutOfRange { index: usize, pixel_count: usize },
    /// Two lights share a pixel
    DuplicatePixel { index: usize },
    /// Tick period does not fit the timer's period register
    PeriodOutOfRange,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::PixelOutOfRange { index, pixel_count } => {
                write!(f, "pixel {index} is outside a strip of {pixel_count} pixels")
            }
            Self::DuplicatePixel { index } => {
                write!(f, "pixel {index} is assigned to more than one light")
            }
            Self::PeriodOutOfRange => write!(f, "tick period does not fit the timer"),
        }
    }
}

/// Light colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub nav_port: Rgb,
    pub nav_starboard: Rgb,
    pub beacon: Rgb,
    pub collision: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            nav_port: NAV_PORT_COLOR,
            nav_starboard: NAV_STARBOARD_COLOR,
            beacon: BEACON_COLOR,
            collision: COLLISION_COLOR,
        }
    }
}

/// Complete light controller configuration
#[derive(Debug, Clone)]
pub struct LightConfig {
    pub layout: LightLayout,
    pub palette: Palette,
    pub beacon: StrobeTimings,
    pub collision: StrobeTimings,
    pub tick_period: Duration,
    pub side_select: SideSelectConfig,
}

impl LightConfig {
    /// Ticks until the beacon and collision patterns line up again
    ///
    /// Returns 0 if either strobe has a zero-length cycle.
    pub const fn resync_ticks(&self) -> u32 {
        lcm(self.beacon.period(), self.collision.period())
    }
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            layout: DEFAULT_LAYOUT,
            palette: Palette::default(),
            beacon: BEACON_TIMINGS,
            collision: COLLISION_TIMINGS,
            tick_period: TICK_PERIOD,
            side_select: SideSelectConfig::default(),
        }
    }
}

/// Input clock of a 16-bit periodic timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerClock {
    /// Core clock in Hz
    pub hz: u32,
    /// Clock divider in front of the counter
    pub prescaler: u16,
}

impl TimerClock {
    /// 20 MHz core clock divided by 1024
    pub const DIV1024_20MHZ: Self = Self {
        hz: 20_000_000,
        prescaler: 1024,
    };

    /// Counter value at which the timer should overflow to fire every `period`
    pub fn period_counts(&self, period: Duration) -> Result<u16, ConfigError> {
        if self.prescaler == 0 {
            return Err(ConfigError::PeriodOutOfRange);
        }
        let counts = period
            .as_micros()
            .checked_mul(u64::from(self.hz))
            .ok_or(ConfigError::PeriodOutOfRange)?
            / (u64::from(self.prescaler) * 1_000_000);
        match u16::try_from(counts) {
            Ok(0) | Err(_) => Err(ConfigError::PeriodOutOfRange),
            Ok(counts) => Ok(counts),
        }
    }
}

const fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let rem = a % b;
        a = b;
        b = rem;
    }
    a
}

const fn lcm(a: u32, b: u32) -> u32 {
    if a == 0 || b == 0 {
        return 0;
    }
    a / gcd(a, b) * b
}
