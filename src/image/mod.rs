pub mod io;
pub mod traits;
pub mod view;

pub use self::traits::{ImageView, Luminance, Rows};
pub use self::view::{GrayView, PixelView, RgbView};
