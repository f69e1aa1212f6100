//! Marking recovered grid points on a copy of the input.
//!
//! Markers are axis-aligned crosses drawn in the photographic negative of
//! the dominant color so they stay visible on top of it.

use crate::analysis::GridGeometry;
use crate::image::{ImageView, Luminance};
use image::{Rgb, RgbImage};
use serde::{Deserialize, Serialize};

/// Cross marker geometry in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerStyle {
    /// Distance from the center to the end of each arm.
    pub arm: usize,
    /// Stroke width, centered on the arm.
    pub thickness: usize,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            arm: 5,
            thickness: 3,
        }
    }
}

/// Every lattice point `(shift_x + i * step, shift_y + j * step)` inside a
/// `width × height` image, x-major.
pub fn lattice_points(width: usize, height: usize, geometry: &GridGeometry) -> Vec<(usize, usize)> {
    if geometry.step == 0 {
        return Vec::new();
    }
    let xs = (geometry.shift_x..width).step_by(geometry.step);
    xs.flat_map(|x| {
        (geometry.shift_y..height)
            .step_by(geometry.step)
            .map(move |y| (x, y))
    })
    .collect()
}

/// Lattice points whose luminance is within `tolerance` of the dominant color.
pub fn matching_points<I>(image: &I, geometry: &GridGeometry, tolerance: u8) -> Vec<(usize, usize)>
where
    I: ImageView,
    I::Pixel: Luminance,
{
    lattice_points(image.width(), image.height(), geometry)
        .into_iter()
        .filter(|&(x, y)| {
            image.pixel(x, y).luminance().abs_diff(geometry.dominant_color) <= tolerance
        })
        .collect()
}

/// Negative of the dominant gray level.
pub fn marker_color(dominant_color: u8) -> Rgb<u8> {
    let c = 255 - dominant_color;
    Rgb([c, c, c])
}

/// Draw a cross at each point, clipped to the canvas.
pub fn draw_markers(canvas: &mut RgbImage, points: &[(usize, usize)], color: Rgb<u8>, style: MarkerStyle) {
    let (w, h) = (canvas.width() as i64, canvas.height() as i64);
    let arm = style.arm as i64;
    let half = (style.thickness.max(1) as i64 - 1) / 2;
    let lo = -half;
    let hi = style.thickness.max(1) as i64 - 1 - half;

    let mut put = |x: i64, y: i64| {
        if (0..w).contains(&x) && (0..h).contains(&y) {
            canvas.put_pixel(x as u32, y as u32, color);
        }
    };
    for &(px, py) in points {
        let (cx, cy) = (px as i64, py as i64);
        for along in -arm..=arm {
            for across in lo..=hi {
                put(cx + along, cy + across);
                put(cx + across, cy + along);
            }
        }
    }
}

/// Copy of `canvas` with a marker at each point.
pub fn render_overlay(
    canvas: &RgbImage,
    points: &[(usize, usize)],
    geometry: &GridGeometry,
    style: MarkerStyle,
) -> RgbImage {
    let mut out = canvas.clone();
    draw_markers(&mut out, points, marker_color(geometry.dominant_color), style);
    out
}
