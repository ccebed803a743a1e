use std::sync::Arc;

/// A handle to the thumb image.
///
/// ThumbImage provides a cheap, cloneable reference to RGBA8 pixel data.
/// The slider core never inspects the pixels; it hands the handle to the
/// render adapter, which owns the actual drawing (and any texture caching).
#[derive(Clone, Debug)]
pub struct ThumbImage {
    /// The raw RGBA8 image data
    data: Arc<Vec<u8>>,
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
}

impl ThumbImage {
    /// Create a new thumb image from RGBA8 data.
    ///
    /// # Panics
    /// Panics if data.len() != width * height * 4
    pub fn from_rgba8(data: Vec<u8>, width: u32, height: u32) -> Self {
        assert_eq!(
            data.len(),
            (width * height * 4) as usize,
            "Image data size mismatch"
        );

        Self {
            data: Arc::new(data),
            width,
            height,
        }
    }

    /// Create a new thumb image from Arc-wrapped RGBA8 data.
    pub fn from_rgba8_arc(data: Arc<Vec<u8>>, width: u32, height: u32) -> Self {
        assert_eq!(
            data.len(),
            (width * height * 4) as usize,
            "Image data size mismatch"
        );

        Self {
            data,
            width,
            height,
        }
    }

    /// Get the image data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the image width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height.
    pub fn height(&self) -> u32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_is_shared() {
        let image = ThumbImage::from_rgba8(vec![255; 16], 2, 2);
        let clone = image.clone();
        assert!(std::ptr::eq(image.data().as_ptr(), clone.data().as_ptr()));
        assert_eq!(clone.width(), 2);
        assert_eq!(clone.height(), 2);
    }
}
