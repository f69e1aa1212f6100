/// Read-only access to a row-major pixel buffer.
pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn stride(&self) -> usize;

    fn row(&self, y: usize) -> &[Self::Pixel];

    /// Pixel at `(x, y)`. Panics outside the image.
    #[inline]
    fn pixel(&self, x: usize, y: usize) -> Self::Pixel {
        self.row(y)[x]
    }

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { image: self, y: 0 }
    }
}

/// Reduces a pixel to an 8-bit luminance-like value.
pub trait Luminance {
    fn luminance(&self) -> u8;
}

impl Luminance for u8 {
    #[inline]
    fn luminance(&self) -> u8 {
        *self
    }
}

impl Luminance for [u8; 3] {
    /// Unweighted channel mean, truncated.
    #[inline]
    fn luminance(&self) -> u8 {
        let [r, g, b] = *self;
        ((r as u16 + g as u16 + b as u16) / 3) as u8
    }
}

pub struct Rows<'a, I: ?Sized + ImageView> {
    image: &'a I,
    y: usize,
}

impl<'a, I: ImageView> Iterator for Rows<'a, I> {
    type Item = &'a [I::Pixel];

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.image.height() {
            return None;
        }
        let y = self.y;
        self.y += 1;
        Some(self.image.row(y))
    }
}
