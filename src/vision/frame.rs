/// A single RGB image sample taken from a video feed.
/// Pixels are packed row-major, three bytes per pixel.
///
/// Never empty: both constructors refuse zero dimensions, so every
/// in-bounds coordinate addresses a whole pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Frame {
    /// Wraps packed RGB bytes. `None` if the buffer does not hold
    /// exactly `width * height` pixels or the frame is empty.
    pub fn new(width: usize, height: usize, pixels: Vec<u8>) -> Option<Self> {
        match Self::bytes(width, height) {
            Some(len) if len == pixels.len() => Some(Self {
                width,
                height,
                pixels,
            }),
            _ => None,
        }
    }
    /// Uniformly coloured frame. `None` under the same rules as `new`.
    pub fn solid(width: usize, height: usize, rgb: [u8; 3]) -> Option<Self> {
        Self::bytes(width, height)?;
        Self::new(width, height, rgb.repeat(width * height))
    }
    /// Buffer length for a non-empty frame of this size, if it fits in memory.
    fn bytes(width: usize, height: usize) -> Option<usize> {
        match width > 0 && height > 0 {
            true => width.checked_mul(height)?.checked_mul(crate::CHANNELS),
            false => None,
        }
    }
    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
    /// RGB triple at column x, row y. Panics outside the frame.
    pub fn rgb(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.width + x) * crate::CHANNELS;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
