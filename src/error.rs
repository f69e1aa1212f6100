/// Reasons why a grid analysis cannot proceed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The image is too narrow to hold a single search interval.
    InvalidDimensions {
        width: usize,
        height: usize,
        min_width: usize,
    },
    /// A sampling offset falls outside the image.
    OutOfBounds {
        offset_x: usize,
        offset_y: usize,
        width: usize,
        height: usize,
    },
    /// A step of zero, or one larger than the image it is applied to.
    InvalidStep {
        step: usize,
        width: usize,
        height: usize,
    },
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::InvalidDimensions {
                width,
                height,
                min_width,
            } => write!(
                f,
                "image {width}x{height} is too small for a step search (need width ≥{min_width})"
            ),
            GridError::OutOfBounds {
                offset_x,
                offset_y,
                width,
                height,
            } => write!(
                f,
                "sampling offset ({offset_x}, {offset_y}) outside {width}x{height} image"
            ),
            GridError::InvalidStep {
                step,
                width,
                height,
            } => write!(f, "step {step} is not valid for a {width}x{height} image"),
        }
    }
}

impl std::error::Error for GridError {}
