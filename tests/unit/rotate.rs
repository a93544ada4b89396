use super::*;
use image::{Rgba, RgbaImage};

#[test]
fn rotation_map_skips_malformed_lines_and_keeps_last_duplicate() {
    let map = parse_rotation_map("2 10.0\nbad\n3 -5.5\n2 20.0\n");
    assert_eq!(map.len(), 2);
    assert_eq!(map[&2], 20.0);
    assert_eq!(map[&3], -5.5);
}

#[test]
fn unmapped_frames_pass_through_unrotated() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("frames");
    std::fs::create_dir(&dir).unwrap();

    let mut img = RgbaImage::new(8, 8);
    img.put_pixel(1, 1, Rgba([255, 0, 0, 255]));
    img.save(dir.join("0001.png")).unwrap();

    let curve = root.path().join("curve.txt");
    std::fs::write(&curve, "99 45.0\n").unwrap();

    let (count, out_dir) = rotate_sequence(&curve, &dir).unwrap();
    assert_eq!(count, 1);

    let out = image::open(out_dir.join("0001.png")).unwrap().to_rgba8();
    assert_eq!(out.get_pixel(1, 1).0, [255, 0, 0, 255]);
}

#[test]
fn rotation_keeps_the_canvas_size() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("frames");
    std::fs::create_dir(&dir).unwrap();
    RgbaImage::new(10, 6).save(dir.join("0001.png")).unwrap();

    let curve = root.path().join("curve.txt");
    std::fs::write(&curve, "1 30.0\n").unwrap();

    let (_, out_dir) = rotate_sequence(&curve, &dir).unwrap();
    let out = image::open(out_dir.join("0001.png")).unwrap();
    assert_eq!((out.width(), out.height()), (10, 6));
}

#[test]
fn quarter_turn_moves_an_off_center_pixel() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("frames");
    std::fs::create_dir(&dir).unwrap();

    // Solid-alpha canvas with one marked pixel right of center.
    let mut img = RgbaImage::from_pixel(9, 9, Rgba([0, 0, 0, 255]));
    img.put_pixel(7, 4, Rgba([255, 255, 255, 255]));
    img.save(dir.join("0001.png")).unwrap();

    let curve = root.path().join("curve.txt");
    std::fs::write(&curve, "1 90.0\n").unwrap();

    let (_, out_dir) = rotate_sequence(&curve, &dir).unwrap();
    let out = image::open(out_dir.join("0001.png")).unwrap().to_rgba8();

    // 90 degrees counter-clockwise about (4,4): (7,4) lands near (4,1).
    assert!(out.get_pixel(4, 1).0[0] > 128, "marker not found above center");
    assert!(out.get_pixel(7, 4).0[0] < 128, "marker did not move");
}

#[test]
fn missing_rotation_file_is_a_usage_error() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("frames");
    std::fs::create_dir(&dir).unwrap();
    assert!(rotate_sequence(&root.path().join("nope.txt"), &dir).is_err());
}
