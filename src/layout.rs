use crate::config::ConfigError;

/// Pixel positions of each light along the chain
///
/// Every light group is a pair (A, B) of pixels lit identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightLayout {
    /// Static navigation lights
    pub nav: [usize; 2],
    /// Beacon strobe
    pub beacon: [usize; 2],
    /// Anti-collision strobe
    pub collision: [usize; 2],
}

impl LightLayout {
    /// Number of pixels the layout addresses
    pub const LEN: usize = 6;

    /// All pixel indices in nav, beacon, collision order
    pub const fn pixels(&self) -> [usize; Self::LEN] {
        [
            self.nav[0],
            self.nav[1],
            self.beacon[0],
            self.beacon[1],
            self.collision[0],
            self.collision[1],
        ]
    }

    /// Check that every index fits the strip and no pixel is shared
    pub fn validate(&self, pixel_count: usize) -> Result<(), ConfigError> {
        let pixels = self.pixels();
        for (position, &index) in pixels.iter().enumerate() {
            if index >= pixel_count {
                return Err(ConfigError::PixelOutOfRange { index, pixel_count });
            }
            if pixels[..position].contains(&index) {
                return Err(ConfigError::DuplicatePixel { index });
            }
        }
        Ok(())
    }
}
