use super::*;

use image::Rgba;

fn checker(w: u32, h: u32) -> RgbaImage {
    RgbaImage::from_fn(w, h, |x, y| {
        if (x + y) % 2 == 0 {
            Rgba([255, 0, 0, 255])
        } else {
            Rgba([0, 0, 255, 128])
        }
    })
}

#[test]
fn pixel_density_survives_a_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.png");
    let second = dir.path().join("second.png");

    // 72 DPI expressed in pixels per meter.
    let dims = png::PixelDimensions {
        xppu: 2835,
        yppu: 2835,
        unit: png::Unit::Meter,
    };
    let img = checker(4, 4);
    save_png(&first, &img, Some(dims)).unwrap();

    let read = read_pixel_dims(&first).expect("pHYs chunk should be present");
    assert_eq!(read.xppu, 2835);
    assert_eq!(read.yppu, 2835);
    assert!(matches!(read.unit, png::Unit::Meter));

    // Carry-through path: density read from a source frame is re-attached to
    // the frame written next to it.
    save_png(&second, &img, Some(read)).unwrap();
    let carried = read_pixel_dims(&second).expect("pHYs chunk should carry through");
    assert_eq!(carried.xppu, 2835);
    assert_eq!(carried.yppu, 2835);

    let reloaded = image::open(&second).unwrap().to_rgba8();
    assert_eq!(reloaded, img);
}

#[test]
fn images_without_density_stay_without_density() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plain.png");

    save_png(&path, &checker(2, 2), None).unwrap();
    assert!(read_pixel_dims(&path).is_none());
}
