mod common;

use cellgrid::find_shifts_and_color;
use cellgrid::image::RgbView;
use common::synthetic_image::dotted_cells_rgb;
use common::{CASES, UNDOTTED};

#[test]
fn recovers_phase_and_color_of_center_dots() {
    let _ = env_logger::builder().is_test(true).try_init();
    for (cell, side, origin) in CASES {
        let buffer = dotted_cells_rgb(side, side, cell, origin, 201, &UNDOTTED);
        let image = RgbView::packed(side, side, &buffer).unwrap();
        let est = find_shifts_and_color(&image, cell).unwrap();

        assert_eq!((est.shift_x, est.shift_y), origin, "cell={cell}");
        // 201 folds into bucket 100 and comes back as 200.
        assert_eq!(est.dominant_color, 200);
        assert!(
            est.support * 10 >= est.cells * 9,
            "support {}/{} below 90%",
            est.support,
            est.cells
        );
        assert!(!est.is_ambiguous());
    }
}

#[test]
fn phase_search_is_deterministic() {
    let (cell, side, origin) = CASES[1];
    let buffer = dotted_cells_rgb(side, side, cell, origin, 120, &UNDOTTED);
    let image = RgbView::packed(side, side, &buffer).unwrap();
    let first = find_shifts_and_color(&image, cell).unwrap();
    let second = find_shifts_and_color(&image, cell).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.dominant_color, 120);
}
