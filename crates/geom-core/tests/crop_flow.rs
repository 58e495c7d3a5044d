// File: crates/geom-core/tests/crop_flow.rs
// Purpose: On-screen crop box -> ratio crop -> pixel crop, as an editor would chain them.

use geom_core::{crop_to_pixels, fit_rect, relative_rect, GeomError, PixelRect, Rect, Size};

#[test]
fn screen_crop_box_maps_to_image_pixels() {
    let image = Size::new(800, 400);
    let viewport = Rect::new(0.0, 0.0, 400.0, 400.0);
    let fit = fit_rect(&viewport, &Rect::from_size(800.0, 400.0));
    // width bound, image drawn at y=100..300
    assert_eq!(fit.rect, Rect::new(0.0, 100.0, 400.0, 200.0));
    assert_eq!(fit.scale_factor, 0.5);

    // box covering the right half of the drawn image
    let on_screen = Rect::new(200.0, 100.0, 200.0, 200.0);
    let ratio = relative_rect(&on_screen, &fit.rect);
    assert_eq!(ratio, Rect::new(0.5, 0.0, 0.5, 1.0));

    let px = crop_to_pixels(&ratio, image).expect("valid crop");
    assert_eq!(px, PixelRect::new(400, 0, 400, 400));

    // same box through the scale factor
    assert_eq!(fit.to_item(&on_screen), Rect::new(400.0, 0.0, 400.0, 400.0));
}

#[test]
fn box_dragged_outside_image_is_rejected() {
    let fit = fit_rect(&Rect::new(0.0, 0.0, 400.0, 400.0), &Rect::from_size(800.0, 400.0));
    let on_screen = Rect::new(300.0, 50.0, 100.0, 100.0);
    let ratio = relative_rect(&on_screen, &fit.rect);
    assert!(ratio.y < 0.0);
    let err = crop_to_pixels(&ratio, Size::new(800, 400)).unwrap_err();
    assert!(matches!(err, GeomError::InvalidCrop { image_width: 800, image_height: 400, .. }));
}
