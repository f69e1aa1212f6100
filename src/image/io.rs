//! I/O helpers for RGB images and JSON.
//!
//! - `load_rgb_image`: decode a PNG/JPEG into an owned 8-bit RGB buffer.
//! - `save_rgb_image`: write an `RgbImage` to disk (format from extension).
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageView, RgbView};
use image::RgbImage;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned 8-bit RGB buffer with borrowed view conversion.
#[derive(Clone, Debug)]
pub struct RgbBuffer {
    width: usize,
    height: usize,
    data: Vec<[u8; 3]>,
}

impl RgbBuffer {
    /// Wrap tightly packed pixels. Returns `None` on a size mismatch.
    pub fn new(width: usize, height: usize, data: Vec<[u8; 3]>) -> Option<Self> {
        (data.len() == width * height).then_some(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only `RgbView`.
    pub fn as_view(&self) -> RgbView<'_> {
        RgbView {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: &self.data,
        }
    }

    /// Copy into an `image::RgbImage` canvas for drawing.
    pub fn to_rgb_image(&self) -> RgbImage {
        let view = self.as_view();
        let mut out = RgbImage::new(self.width as u32, self.height as u32);
        for (y, row) in view.rows().enumerate() {
            for (x, px) in row.iter().enumerate() {
                out.put_pixel(x as u32, y as u32, image::Rgb(*px));
            }
        }
        out
    }
}

/// Load an image from disk as 8-bit RGB.
///
/// Channels are decoded at 16 bits and reduced by dropping the low byte, so
/// 8-bit and 16-bit sources quantize identically.
pub fn load_rgb_image(path: &Path) -> Result<RgbBuffer, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb16();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img
        .pixels()
        .map(|p| [(p[0] >> 8) as u8, (p[1] >> 8) as u8, (p[2] >> 8) as u8])
        .collect();
    RgbBuffer::new(width, height, data)
        .ok_or_else(|| format!("Decoded buffer size mismatch for {}", path.display()))
}

/// Save an RGB canvas, creating parent directories.
pub fn save_rgb_image(image: &RgbImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_round_trips_through_rgb_image() {
        let data = vec![[1, 2, 3], [4, 5, 6], [7, 8, 9], [10, 11, 12]];
        let buffer = RgbBuffer::new(2, 2, data).expect("sizes match");
        let canvas = buffer.to_rgb_image();
        assert_eq!(canvas.dimensions(), (2, 2));
        assert_eq!(canvas.get_pixel(1, 0).0, [4, 5, 6]);
        assert_eq!(canvas.get_pixel(0, 1).0, [7, 8, 9]);
    }

    #[test]
    fn load_keeps_high_byte_of_16_bit_channels() {
        let dir = std::env::temp_dir().join(format!("cellgrid-io-{}", std::process::id()));
        let path = dir.join("deep.png");
        let mut deep = image::ImageBuffer::<image::Rgb<u16>, Vec<u16>>::new(2, 1);
        deep.put_pixel(0, 0, image::Rgb([0x12ff, 0x3400, 0xffff]));
        deep.put_pixel(1, 0, image::Rgb([0x00ff, 0x0100, 0x8080]));
        fs::create_dir_all(&dir).unwrap();
        deep.save(&path).unwrap();

        let loaded = load_rgb_image(&path).expect("png loads");
        let view = loaded.as_view();
        assert_eq!(view.pixel(0, 0), [0x12, 0x34, 0xff]);
        assert_eq!(view.pixel(1, 0), [0x00, 0x01, 0x80]);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_rgb_image(Path::new("/nonexistent/cellgrid.png")).unwrap_err();
        assert!(err.contains("/nonexistent/cellgrid.png"), "got {err}");
    }
}
