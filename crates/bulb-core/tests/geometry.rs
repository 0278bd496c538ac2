// File: crates/bulb-core/tests/geometry.rs
// Purpose: Bulb layout from widget bounds and padding, including degenerate sizes.

use bulb_core::{BulbGeometry, Padding};

#[test]
fn diameter_is_smaller_side_minus_one() {
    let g = BulbGeometry::compute(100, 50, &Padding::default());
    assert_eq!(g.diameter, 49);
    assert_eq!((g.canvas.left, g.canvas.top), (0, 0));
    assert_eq!((g.canvas.width(), g.canvas.height()), (49, 49));
}

#[test]
fn padding_shrinks_and_offsets() {
    let g = BulbGeometry::compute(100, 100, &Padding::new(10, 20, 5, 15));
    // 100 - 30 = 70 wide, 100 - 20 = 80 high
    assert_eq!(g.diameter, 69);
    assert_eq!((g.canvas.left, g.canvas.top), (10, 5));
}

#[test]
fn diameter_floor_is_one() {
    for (w, h) in [(1, 1), (0, 0), (-5, 3), (2, 1)] {
        let g = BulbGeometry::compute(w, h, &Padding::default());
        assert_eq!(g.diameter, 1, "{w}x{h}");
    }
    let g = BulbGeometry::compute(10, 10, &Padding::uniform(20));
    assert_eq!(g.diameter, 1);
    assert_eq!((g.canvas.left, g.canvas.top), (20, 20));
}

#[test]
fn reflection_sits_up_and_left() {
    let g = BulbGeometry::compute(101, 101, &Padding::uniform(0));
    assert_eq!(g.diameter, 100);
    let r = g.reflection_oval();
    assert!((r.left - -15.0).abs() < 1e-4);
    assert!((r.top - -15.0).abs() < 1e-4);
    assert!((r.width() - 80.0).abs() < 1e-4);
    assert!((r.height() - 80.0).abs() < 1e-4);
}

#[test]
fn center_and_radius() {
    let g = BulbGeometry::compute(41, 41, &Padding::new(4, 0, 6, 0));
    // 37 wide, 35 high
    assert_eq!(g.diameter, 34);
    let c = g.center();
    assert!((c.x - 21.0).abs() < 1e-4);
    assert!((c.y - 23.0).abs() < 1e-4);
    assert!((g.radius() - 17.0).abs() < 1e-4);
}

#[test]
fn oversized_padding_saturates() {
    let g = BulbGeometry::compute(10, 10, &Padding::uniform(u32::MAX));
    assert_eq!(g.diameter, 1);
    assert_eq!((g.canvas.left, g.canvas.top), (i32::MAX, i32::MAX));
    assert_eq!((g.canvas.right, g.canvas.bottom), (i32::MAX, i32::MAX));

    // Larger than i32::MAX must still shrink the bulb, not wrap around.
    let g = BulbGeometry::compute(100, 100, &Padding::new(3_000_000_000, 0, 0, 0));
    assert_eq!(g.diameter, 1);
    assert_eq!(g.canvas.left, i32::MAX);

    let g = BulbGeometry::compute(10, 10, &Padding::new(i32::MAX as u32, 0, 0, 0));
    assert_eq!(g.diameter, 1);
    assert_eq!(g.canvas.right, i32::MAX);
}

#[test]
fn padding_sums_saturate() {
    assert_eq!(Padding::uniform(u32::MAX).hsum(), u32::MAX);
    assert_eq!(Padding::new(0, 0, u32::MAX, 1).vsum(), u32::MAX);
    assert_eq!(Padding::new(1, 2, 3, 4).hsum(), 3);
}
