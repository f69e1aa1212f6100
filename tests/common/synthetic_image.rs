/// Cell grid with a marker dot at every cell center.
///
/// Cells are `cell` pixels wide and centered on the lattice
/// `(ox + i * cell, oy + j * cell)`; each cell gets its own gray level and
/// its center pixel is painted `dot`, except for the cell indices listed in
/// `undotted`.
pub fn dotted_cells_rgb(
    width: usize,
    height: usize,
    cell: usize,
    origin: (usize, usize),
    dot: u8,
    undotted: &[(i64, i64)],
) -> Vec<[u8; 3]> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let (s, half) = (cell as i64, (cell / 2) as i64);
    let (ox, oy) = (origin.0 as i64, origin.1 as i64);
    let mut img = vec![[0u8; 3]; width * height];
    for y in 0..height as i64 {
        for x in 0..width as i64 {
            let cx = (x - ox + half).div_euclid(s);
            let cy = (y - oy + half).div_euclid(s);
            let center = (x - ox).rem_euclid(s) == 0 && (y - oy).rem_euclid(s) == 0;
            let val = if center && !undotted.contains(&(cx, cy)) {
                dot
            } else {
                cell_level(cx, cy)
            };
            img[y as usize * width + x as usize] = [val, val, val];
        }
    }
    img
}

/// Distinct gray level per cell; horizontally, vertically and diagonally
/// adjacent cells differ by at least 5.
pub fn cell_level(cx: i64, cy: i64) -> u8 {
    (10 + ((cx + 2) * 13 + (cy + 2) * 97).rem_euclid(47) * 5) as u8
}

/// Two-color checkerboard with cells starting at `origin`.
pub fn checkerboard_rgb(
    width: usize,
    height: usize,
    cell: usize,
    origin: (usize, usize),
    colors: (u8, u8),
) -> Vec<[u8; 3]> {
    let s = cell as i64;
    let mut img = vec![[0u8; 3]; width * height];
    for y in 0..height as i64 {
        for x in 0..width as i64 {
            let parity = ((x - origin.0 as i64).div_euclid(s) + (y - origin.1 as i64).div_euclid(s))
                .rem_euclid(2);
            let val = if parity == 0 { colors.0 } else { colors.1 };
            img[y as usize * width + x as usize] = [val, val, val];
        }
    }
    img
}
