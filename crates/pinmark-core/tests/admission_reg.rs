//! Admission regression test
//!
//! Exercises the boundary test and the point store through a session:
//!   1. Points on the circle are admitted, points just outside are not
//!   2. Admission in original space ignores the current rotation
//!   3. Insertion order is preserved and snapshots are stable
//!   4. Click scenarios at 90 and 0 degrees
//!   5. Invalid color/size leave the collection untouched

use pinmark_core::{Error, MarkerSize, PaletteColor, Selection, Session};
use pinmark_test::RegParams;

fn flag(b: bool) -> f64 {
    if b { 1.0 } else { 0.0 }
}

#[test]
fn admission_reg() {
    let mut rp = RegParams::new("admission");
    let sel = Selection::default();

    // --- Test 1: boundary inclusivity ---
    let mut session = Session::default();
    rp.compare_values(1.0, flag(session.admit(40.0, 0.0, &sel).is_some()), 0.0);
    rp.compare_values(1.0, flag(session.admit(0.0, -40.0, &sel).is_some()), 0.0);
    rp.compare_values(1.0, flag(session.admit(24.0, 32.0, &sel).is_some()), 0.0);
    // 1600 + epsilon
    let eps_x = (1600.0f64 + 1e-6).sqrt();
    rp.compare_values(0.0, flag(session.admit(eps_x, 0.0, &sel).is_some()), 0.0);
    rp.compare_values(3.0, session.snapshot().len() as f64, 0.0);

    // --- Test 2: rotation invariance of admission ---
    for angle in [0.0, 45.0, 90.0, 200.0, 359.0] {
        let mut s = Session::default();
        s.set_rotation(angle).unwrap();
        let p = s.admit(30.0, -20.0, &sel);
        rp.compare_values(1.0, flag(p.is_some()), 0.0);
        if let Some(p) = p {
            rp.compare_values(30.0, p.x(), 0.0);
            rp.compare_values(-20.0, p.y(), 0.0);
        }
    }

    // --- Test 3: order preservation and idempotent snapshot ---
    let mut session = Session::default();
    let picks = [
        (PaletteColor::Yellow, 5, (-10.0, 10.0)),
        (PaletteColor::Red, 1, (35.0, 0.0)),
        (PaletteColor::Blue, 3, (0.0, 0.0)),
    ];
    for (color, size, (x, y)) in picks {
        let s = Selection::new(color, MarkerSize::new(size).unwrap());
        session.admit(x, y, &s).expect("inside boundary");
    }
    let first: Vec<_> = session.snapshot().to_vec();
    let second: Vec<_> = session.snapshot().to_vec();
    rp.compare_values(1.0, flag(first == second), 0.0);
    for (point, (color, size, (x, y))) in first.iter().zip(picks) {
        rp.compare_values(1.0, flag(point.color() == color), 0.0);
        rp.compare_values(size as f64, point.size().get() as f64, 0.0);
        rp.compare_values(x, point.x(), 0.0);
        rp.compare_values(y, point.y(), 0.0);
    }

    // --- Test 4: click scenarios ---
    let mut session = Session::default();
    session.set_rotation(90.0).unwrap();
    let p = session.click(10.0, 0.0, &sel);
    rp.compare_values(1.0, flag(p.is_some()), 0.0);
    if let Some(p) = p {
        rp.compare_values(0.0, p.x(), 0.0);
        rp.compare_values(-10.0, p.y(), 0.0);
        rp.compare_values(1.0, flag(p.x().is_sign_positive()), 0.0);
    }

    let mut session = Session::default();
    session.set_rotation(0.0).unwrap();
    rp.compare_values(0.0, flag(session.click(41.0, 0.0, &sel).is_some()), 0.0);
    rp.compare_values(0.0, session.snapshot().len() as f64, 0.0);

    // Rotation about the shared origin preserves distance
    session.set_rotation(45.0).unwrap();
    rp.compare_values(1.0, flag(session.click(28.0, 28.0, &sel).is_some()), 0.0);
    rp.compare_values(0.0, flag(session.click(29.0, 29.0, &sel).is_some()), 0.0);
    if let Some(p) = session.snapshot().first() {
        rp.compare_values(0.0, p.y(), 0.01);
        rp.compare_values(39.6, p.x(), 0.01);
    }

    // --- Test 5: invalid attributes ---
    let mut session = Session::default();
    let err = session.try_admit(1.0, 1.0, "Purple", 2);
    let is_attr_err = matches!(
        err,
        Err(Error::InvalidAttribute {
            attribute: "color",
            ..
        })
    );
    rp.compare_values(1.0, flag(is_attr_err), 0.0);
    let err = session.try_admit(1.0, 1.0, "Green", 0);
    rp.compare_values(1.0, flag(err.is_err()), 0.0);
    rp.compare_values(0.0, session.snapshot().len() as f64, 0.0);

    let ok = session.try_admit(1.0, 1.0, "Green", 2);
    rp.compare_values(1.0, flag(matches!(ok, Ok(Some(_)))), 0.0);
    let outside = session.try_admit(50.0, 0.0, "Green", 2);
    rp.compare_values(1.0, flag(matches!(outside, Ok(None))), 0.0);
    rp.compare_values(1.0, session.snapshot().len() as f64, 0.0);

    assert!(rp.cleanup(), "admission regression test failed");
}
