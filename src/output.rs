//! Pixel output
//!
//! [`PixelSink`] is what the scheduler paints into: per-pixel color
//! assignment plus an explicit flush. [`FrameBuffer`] implements it on top of
//! any [`OutputDriver`], and [`SmartLedsDriver`] adapts a `smart-leds` writer.

#[cfg(feature = "esp32-log")]
use esp_println::println;
use smart_leds::{RGB8, SmartLedsWrite};

use crate::color::{OFF_COLOR, Rgb};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}

/// Buffered pixel output
pub trait PixelSink {
    /// Number of addressable pixels
    fn pixel_count(&self) -> usize;

    /// Assign a color to a pixel in the buffer
    ///
    /// Indices past the end of the strip are ignored.
    fn set_pixel_color(&mut self, index: usize, color: Rgb);

    /// Transmit the whole buffer to the hardware
    fn show(&mut self);
}

/// In-memory pixel buffer flushed through an [`OutputDriver`]
pub struct FrameBuffer<D: OutputDriver, const N: usize> {
    driver: D,
    pixels: [Rgb; N],
}

impl<D: OutputDriver, const N: usize> FrameBuffer<D, N> {
    /// Create a buffer with every pixel off
    pub const fn new(driver: D) -> Self {
        Self {
            driver,
            pixels: [OFF_COLOR; N],
        }
    }

    /// Current buffer contents, including changes not yet shown
    pub const fn pixels(&self) -> &[Rgb; N] {
        &self.pixels
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    pub const fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }
}

impl<D: OutputDriver, const N: usize> PixelSink for FrameBuffer<D, N> {
    fn pixel_count(&self) -> usize {
        N
    }

    fn set_pixel_color(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn show(&mut self) {
        self.driver.write(&self.pixels);
    }
}

/// [`OutputDriver`] for any `smart-leds` writer
///
/// Write failures cannot be reported through [`PixelSink::show`], so they
/// are counted instead. The next successful write restores the strip.
pub struct SmartLedsDriver<W> {
    writer: W,
    errors: u32,
}

impl<W> SmartLedsDriver<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer, errors: 0 }
    }

    /// Number of failed writes since creation
    pub const fn errors(&self) -> u32 {
        self.errors
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsDriver<W>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    fn write(&mut self, colors: &[Rgb]) {
        if self.writer.write(colors.iter().copied()).is_err() {
            self.errors = self.errors.saturating_add(1);
            #[cfg(feature = "esp32-log")]
            println!("[output] strip write failed ({} total)", self.errors);
        }
    }
}
