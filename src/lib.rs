#![no_std]

pub mod color;
pub mod config;
pub mod layout;
pub mod output;
pub mod scheduler;
pub mod side;
pub mod strobe;
pub mod tick;

pub use config::{ConfigError, LightConfig, Palette, TimerClock};
pub use layout::LightLayout;
pub use output::{FrameBuffer, OutputDriver, PixelSink, SmartLedsDriver};
pub use scheduler::StrobeScheduler;
pub use side::{DigitalInput, Side, SideSelectConfig};
pub use strobe::{StrobeGroup, StrobeKind, StrobeState, StrobeStep, StrobeTimer, StrobeTimings};
pub use tick::{TickCounter, TickReceiver, TickSender, TickTimer};

pub use color::Rgb;
pub use embassy_time::Duration;
