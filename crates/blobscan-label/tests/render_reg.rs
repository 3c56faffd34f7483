//! Renderer regression test
//!
//! Checks random coloring, bounding-box highlighting, and the
//! smallest/largest marking against synthetic fixtures.
//!
//! Run with:
//! ```
//! cargo test -p blobscan-label --test render_reg
//! ```

use blobscan_label::{
    HIGHLIGHT_COLOR, LARGEST_COLOR, Labeling, SMALLEST_COLOR, colorize_with, highlight,
    mark_extremes,
};
use image::{Rgb, RgbImage};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;

const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Three spatially separated single-pixel objects on black.
fn three_dots() -> RgbImage {
    let mut img = RgbImage::new(7, 5);
    img.put_pixel(1, 1, WHITE);
    img.put_pixel(5, 1, WHITE);
    img.put_pixel(3, 3, WHITE);
    img
}

#[test]
fn colorize_paints_one_color_per_object() {
    let img = three_dots();
    let (bw, labeling) = Labeling::analyze(&img, 128.0).unwrap();
    assert_eq!(labeling.components(), 3);

    let mut rng = StdRng::seed_from_u64(42);
    let colored = colorize_with(&bw, &labeling, &mut rng);

    let mut object_colors = HashSet::new();
    for y in 0..colored.height() {
        for x in 0..colored.width() {
            match labeling.label_at(x, y) {
                Some(_) => {
                    object_colors.insert(*colored.get_pixel(x, y));
                }
                None => assert_eq!(colored.get_pixel(x, y), &BLACK, "background repainted"),
            }
        }
    }
    eprintln!("distinct object colors: {}", object_colors.len());
    assert_eq!(object_colors.len(), 3);
}

#[test]
fn colorize_is_deterministic_under_a_seed() {
    let img = three_dots();
    let (bw, labeling) = Labeling::analyze(&img, 128.0).unwrap();

    let a = colorize_with(&bw, &labeling, &mut StdRng::seed_from_u64(7));
    let b = colorize_with(&bw, &labeling, &mut StdRng::seed_from_u64(7));
    assert_eq!(a.as_raw(), b.as_raw());
}

#[test]
fn highlight_outlines_full_canvas_object() {
    let img = RgbImage::from_pixel(6, 5, WHITE);
    let (bw, labeling) = Labeling::analyze(&img, 128.0).unwrap();
    assert_eq!(labeling.components(), 1);

    let outlined = highlight(&bw, &labeling);
    for y in 0..5 {
        for x in 0..6 {
            let on_border = x == 0 || x == 5 || y == 0 || y == 4;
            let expected = if on_border { HIGHLIGHT_COLOR } else { WHITE };
            assert_eq!(outlined.get_pixel(x, y), &expected, "at ({}, {})", x, y);
        }
    }
}

#[test]
fn highlight_leaves_outside_pixels_untouched() {
    // One 2x2 object with margin on all sides.
    let mut img = RgbImage::new(6, 6);
    for y in 2..=3 {
        for x in 2..=3 {
            img.put_pixel(x, y, WHITE);
        }
    }
    let (bw, labeling) = Labeling::analyze(&img, 128.0).unwrap();
    let outlined = highlight(&bw, &labeling);

    let bounds = labeling.geometry()[0].bounds();
    for y in 0..6 {
        for x in 0..6 {
            if bounds.on_perimeter(x, y) {
                assert_eq!(outlined.get_pixel(x, y), &HIGHLIGHT_COLOR);
            } else {
                assert_eq!(outlined.get_pixel(x, y), bw.get_pixel(x, y));
            }
        }
    }
}

#[test]
fn extremes_marked_without_overlap() {
    // Small dot near one corner, large 3x3 block in the opposite region.
    let mut img = RgbImage::new(8, 6);
    img.put_pixel(1, 1, WHITE);
    for y in 3..=5 {
        for x in 4..=6 {
            img.put_pixel(x, y, WHITE);
        }
    }
    let (bw, labeling) = Labeling::analyze(&img, 128.0).unwrap();
    assert_eq!(labeling.components(), 2);

    let marked = mark_extremes(&bw, &labeling);
    assert_eq!(marked.get_pixel(1, 1), &SMALLEST_COLOR);
    for y in 3..=5 {
        for x in 4..=6 {
            assert_eq!(marked.get_pixel(x, y), &LARGEST_COLOR);
        }
    }
    // Background untouched.
    assert_eq!(marked.get_pixel(0, 0), &BLACK);
    assert_eq!(marked.get_pixel(7, 0), &BLACK);
}

#[test]
fn tied_extremes_take_first_label_in_order() {
    // Two single-pixel objects: both extremes resolve to the first.
    let mut img = RgbImage::new(5, 3);
    img.put_pixel(1, 1, WHITE);
    img.put_pixel(3, 1, WHITE);
    let (bw, labeling) = Labeling::analyze(&img, 128.0).unwrap();

    let marked = mark_extremes(&bw, &labeling);
    // First object is smallest and largest; largest color is painted last.
    assert_eq!(marked.get_pixel(1, 1), &LARGEST_COLOR);
    // Second object is neither extreme and keeps its binarized color.
    assert_eq!(marked.get_pixel(3, 1), &WHITE);
}

#[test]
fn single_object_gets_largest_color() {
    let mut img = RgbImage::new(4, 4);
    img.put_pixel(2, 2, WHITE);
    let (bw, labeling) = Labeling::analyze(&img, 128.0).unwrap();

    let marked = mark_extremes(&bw, &labeling);
    assert_eq!(marked.get_pixel(2, 2), &LARGEST_COLOR);
}

#[test]
fn empty_labeling_renders_unchanged() {
    let img = RgbImage::new(4, 4); // all background at t > 0
    let (bw, labeling) = Labeling::analyze(&img, 128.0).unwrap();
    assert_eq!(labeling.components(), 0);

    let marked = mark_extremes(&bw, &labeling);
    assert_eq!(marked.as_raw(), bw.as_raw());
    let outlined = highlight(&bw, &labeling);
    assert_eq!(outlined.as_raw(), bw.as_raw());
    let colored = colorize_with(&bw, &labeling, &mut StdRng::seed_from_u64(1));
    assert_eq!(colored.as_raw(), bw.as_raw());
}
