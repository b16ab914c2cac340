/// A decoded thumbnail as a flat RGBA8 buffer (4 bytes per pixel, row-major)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailImage {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl ThumbnailImage {
    /// Creates an image, rejecting buffers whose length does not match the dimensions
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> crate::shared::Result<Self> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            anyhow::bail!(
                "RGBA buffer has {} bytes, expected {} for {}x{}",
                rgba.len(),
                expected,
                width,
                height
            );
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.rgba
    }
}
