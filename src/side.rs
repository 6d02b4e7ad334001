//! Port/starboard selection
//!
//! The side is read once from a jumper at power-on and only decides which
//! navigation color the static lights use.

use crate::color::Rgb;
use crate::config::Palette;

/// Side of the craft the board is mounted on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Port,
    Starboard,
}

impl Side {
    pub const fn opposite(self) -> Self {
        match self {
            Self::Port => Self::Starboard,
            Self::Starboard => Self::Port,
        }
    }

    /// Navigation light color for this side
    pub const fn nav_color(self, palette: &Palette) -> Rgb {
        match self {
            Self::Port => palette.nav_port,
            Self::Starboard => palette.nav_starboard,
        }
    }
}

/// A boolean input read at startup
pub trait DigitalInput {
    /// Read the raw input level (`true` = high)
    fn read(&mut self) -> bool;
}

impl<F: FnMut() -> bool> DigitalInput for F {
    fn read(&mut self) -> bool {
        self()
    }
}

/// How the jumper input maps to a [`Side`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideSelectConfig {
    /// Input level seen when the jumper is fitted
    ///
    /// The input is pulled up and the jumper shorts it to ground, so a
    /// fitted jumper reads low.
    pub present_level: bool,
    /// Side reported when the jumper is fitted
    pub jumper_present: Side,
}

impl SideSelectConfig {
    pub const fn new(present_level: bool, jumper_present: Side) -> Self {
        Self {
            present_level,
            jumper_present,
        }
    }

    /// Map a raw input level to a side
    pub const fn side_for_level(&self, level: bool) -> Side {
        if level == self.present_level {
            self.jumper_present
        } else {
            self.jumper_present.opposite()
        }
    }
}

impl Default for SideSelectConfig {
    fn default() -> Self {
        Self::new(false, Side::Port)
    }
}

/// Read the side jumper once
pub fn read_side<I: DigitalInput>(input: &mut I, config: &SideSelectConfig) -> Side {
    config.side_for_level(input.read())
}
