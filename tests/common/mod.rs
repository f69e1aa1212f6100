#![allow(dead_code)]

pub mod synthetic_image;

/// Cell indices left without a center dot in the fixtures below.
pub const UNDOTTED: [(i64, i64); 3] = [(1, 1), (4, 6), (2, 9)];

/// `(cell, side, origin)` cases where the step search can be exact.
pub const CASES: [(usize, usize, (usize, usize)); 3] =
    [(20, 400, (3, 7)), (16, 320, (5, 2)), (12, 300, (7, 3))];
