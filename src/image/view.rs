//! Borrowed pixel views over caller-owned buffers.
//!
//! A view never copies; `stride` counts pixels (not bytes) between rows so
//! sub-windows of a larger buffer can be analyzed in place.
use super::traits::ImageView;

#[derive(Clone, Copy, Debug)]
pub struct PixelView<'a, P> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // pixels between rows
    pub data: &'a [P],
}

/// Single-channel luminance view.
pub type GrayView<'a> = PixelView<'a, u8>;
/// Interleaved 8-bit RGB view.
pub type RgbView<'a> = PixelView<'a, [u8; 3]>;

impl<'a, P> PixelView<'a, P> {
    /// Tightly packed view (`stride == w`).
    ///
    /// Returns `None` when `data` holds fewer than `w * h` pixels.
    pub fn packed(w: usize, h: usize, data: &'a [P]) -> Option<Self> {
        (data.len() >= w * h).then_some(Self {
            w,
            h,
            stride: w,
            data,
        })
    }
}

impl<'a, P: Copy> ImageView for PixelView<'a, P> {
    type Pixel = P;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[P] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}
