//! Transform regression test
//!
//! Checks the display/original mapping:
//!   1. Forward rotation followed by the inverse returns the input (1e-9)
//!   2. The rotation matrix handed to the renderer agrees with the engine
//!   3. The quarter-turn click scenario maps (10, 0) to (0, -10)
//!   4. Angles outside [0, 360) behave periodically

use pinmark_core::{ImageExtent, TransformEngine};
use pinmark_test::RegParams;

const ANGLES: [f64; 9] = [0.0, 12.5, 45.0, 90.0, 137.0, 180.0, 271.3, 359.99, 360.0];
const POINTS: [(f64, f64); 6] = [
    (0.0, 0.0),
    (10.0, 0.0),
    (0.0, -10.0),
    (28.28, 28.28),
    (-39.5, 3.25),
    (1234.5, -987.25),
];

#[test]
fn transform_reg() {
    let mut rp = RegParams::new("transform");
    let mut engine = TransformEngine::new();

    // --- Test 1: round trip for every angle and point ---
    for angle in ANGLES {
        engine.set_rotation(angle).expect("finite angle");
        for (x, y) in POINTS {
            let (xd, yd) = engine.original_to_display(x, y);
            let (xo, yo) = engine.display_to_original(xd, yd);
            rp.compare_values(x, xo, 1e-9);
            rp.compare_values(y, yo, 1e-9);
        }
    }

    // --- Test 2: rotation matrix agrees with original_to_display ---
    engine.set_rotation(33.0).unwrap();
    let m = engine.rotation_transform();
    for (x, y) in POINTS {
        let (mx, my) = m.transform_point(x, y);
        let (ex, ey) = engine.original_to_display(x, y);
        rp.compare_values(ex, mx, 1e-9);
        rp.compare_values(ey, my, 1e-9);
    }

    // The inverse of the forward matrix undoes the renderer mapping
    let mut engine = TransformEngine::with_extent(ImageExtent::new(320, 240).unwrap());
    engine.set_rotation(72.0).unwrap();
    let forward = engine.forward_transform();
    let inverse = forward.inverse().expect("rotation is invertible");
    let (px, py) = forward.transform_point(-12.0, 30.0);
    let (bx, by) = inverse.transform_point(px, py);
    rp.compare_values(-12.0, bx, 1e-9);
    rp.compare_values(30.0, by, 1e-9);

    // --- Test 3: quarter-turn scenario ---
    let mut engine = TransformEngine::new();
    engine.set_rotation(90.0).unwrap();
    let (xo, yo) = engine.display_to_original(10.0, 0.0);
    rp.compare_values(0.0, xo, 1e-9);
    rp.compare_values(-10.0, yo, 1e-9);

    // --- Test 4: periodic behaviour for out-of-range angles ---
    for (a, b) in [(0.0, 360.0), (-90.0, 270.0), (720.0 + 15.0, 15.0)] {
        let mut ea = TransformEngine::new();
        let mut eb = TransformEngine::new();
        ea.set_rotation(a).unwrap();
        eb.set_rotation(b).unwrap();
        let (xa, ya) = ea.display_to_original(17.0, -4.0);
        let (xb, yb) = eb.display_to_original(17.0, -4.0);
        rp.compare_values(xa, xb, 1e-9);
        rp.compare_values(ya, yb, 1e-9);
    }

    // Non-finite angles are refused and leave the state alone
    let err = engine.set_rotation(f64::NAN);
    rp.compare_values(1.0, if err.is_err() { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(90.0, engine.rotation().degrees(), 0.0);

    assert!(rp.cleanup(), "transform regression test failed");
}
