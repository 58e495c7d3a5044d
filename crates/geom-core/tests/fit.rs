// File: crates/geom-core/tests/fit.rs
// Purpose: Validate aspect fitting against wide, tall and degenerate inputs.

use geom_core::{are_equal, fit_rect, Rect};

#[test]
fn square_item_in_wide_viewport_is_height_bound() {
    let fit = fit_rect(&Rect::new(0.0, 0.0, 100.0, 50.0), &Rect::from_size(10.0, 10.0));
    assert_eq!(fit.rect, Rect::new(25.0, 0.0, 50.0, 50.0));
    assert_eq!(fit.scale_factor, 5.0);
}

#[test]
fn square_item_in_tall_viewport_is_width_bound() {
    let fit = fit_rect(&Rect::new(0.0, 0.0, 50.0, 100.0), &Rect::from_size(10.0, 10.0));
    assert_eq!(fit.rect, Rect::new(0.0, 25.0, 50.0, 50.0));
    assert_eq!(fit.scale_factor, 5.0);
}

#[test]
fn offset_viewport_centers_result() {
    let fit = fit_rect(&Rect::new(100.0, 200.0, 1024.0, 640.0), &Rect::from_size(4000.0, 3000.0));
    // height bound: 640 / 3000
    assert_eq!(fit.rect.height, 640.0);
    assert!((fit.rect.width - 853.333_333).abs() < 1e-3);
    assert!((fit.rect.x - (100.0 + (1024.0 - fit.rect.width) / 2.0)).abs() < 1e-9);
    assert_eq!(fit.rect.y, 200.0);
}

#[test]
fn degenerate_item_returns_viewport() {
    let vp = Rect::new(3.0, 4.0, 120.0, 80.0);
    for item in [Rect::from_size(0.0, 10.0), Rect::from_size(10.0, 0.0), Rect::from_size(0.0, 0.0)] {
        let fit = fit_rect(&vp, &item);
        assert!(are_equal(&fit.rect, &vp));
        assert_eq!(fit.scale_factor, 1.0);
    }
}

#[test]
fn item_position_is_ignored() {
    let vp = Rect::new(0.0, 0.0, 100.0, 50.0);
    let a = fit_rect(&vp, &Rect::new(0.0, 0.0, 10.0, 10.0));
    let b = fit_rect(&vp, &Rect::new(-77.0, 13.0, 10.0, 10.0));
    assert_eq!(a, b);
}
