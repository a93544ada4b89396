use super::*;
use image::{Rgb, RgbImage};

fn black(w: u32, h: u32) -> RgbImage {
    RgbImage::new(w, h)
}

#[test]
fn all_black_frame_has_no_bbox() {
    assert_eq!(frame_bbox(&black(8, 8)), None);
}

#[test]
fn single_pixel_bbox_is_tight() {
    let mut img = black(10, 10);
    img.put_pixel(3, 7, Rgb([1, 0, 0]));
    assert_eq!(
        frame_bbox(&img),
        Some(PixelBox {
            left: 3,
            top: 7,
            right: 3,
            bottom: 7
        })
    );
}

#[test]
fn bbox_spans_extreme_pixels() {
    let mut img = black(20, 20);
    img.put_pixel(2, 5, Rgb([255, 255, 255]));
    img.put_pixel(17, 12, Rgb([0, 0, 1]));
    assert_eq!(
        frame_bbox(&img),
        Some(PixelBox {
            left: 2,
            top: 5,
            right: 17,
            bottom: 12
        })
    );
}

#[test]
fn scan_unions_across_frames_and_skips_black_ones() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("frames");
    std::fs::create_dir(&dir).unwrap();

    let mut a = black(16, 16);
    a.put_pixel(4, 4, Rgb([9, 9, 9]));
    a.save(dir.join("0001.png")).unwrap();

    black(16, 16).save(dir.join("0002.png")).unwrap();

    let mut c = black(16, 16);
    c.put_pixel(12, 10, Rgb([9, 9, 9]));
    c.save(dir.join("0003.png")).unwrap();

    let bbox = scan_bbox(&dir, None).unwrap().unwrap();
    assert_eq!(
        bbox,
        PixelBox {
            left: 4,
            top: 4,
            right: 12,
            bottom: 10
        }
    );
}

#[test]
fn scan_honors_the_frame_limit() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("frames");
    std::fs::create_dir(&dir).unwrap();

    let mut a = black(16, 16);
    a.put_pixel(4, 4, Rgb([9, 9, 9]));
    a.save(dir.join("0001.png")).unwrap();

    let mut b = black(16, 16);
    b.put_pixel(15, 15, Rgb([9, 9, 9]));
    b.save(dir.join("0002.png")).unwrap();

    let bbox = scan_bbox(&dir, Some(1)).unwrap().unwrap();
    assert_eq!(bbox.right, 4);
    assert_eq!(bbox.bottom, 4);
}

#[test]
fn scan_rejects_mixed_resolutions() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("frames");
    std::fs::create_dir(&dir).unwrap();
    black(16, 16).save(dir.join("0001.png")).unwrap();
    black(8, 8).save(dir.join("0002.png")).unwrap();

    let err = scan_bbox(&dir, None).unwrap_err();
    assert!(err.to_string().contains("same resolution"));
}

#[test]
fn crop_sequence_validates_the_box() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("frames");
    std::fs::create_dir(&dir).unwrap();
    black(16, 16).save(dir.join("0001.png")).unwrap();

    let bad = PixelBox {
        left: 4,
        top: 4,
        right: 20,
        bottom: 8,
    };
    let err = crop_sequence(&dir, bad).unwrap_err();
    assert!(err.to_string().contains("out of bounds"));
}

#[test]
fn crop_sequence_writes_same_names_to_cropped_sibling() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("frames");
    std::fs::create_dir(&dir).unwrap();
    black(16, 16).save(dir.join("0001.png")).unwrap();
    black(16, 16).save(dir.join("0002.png")).unwrap();

    let bbox = PixelBox {
        left: 2,
        top: 4,
        right: 10,
        bottom: 12,
    };
    let (count, out_dir) = crop_sequence(&dir, bbox).unwrap();
    assert_eq!(count, 2);
    assert_eq!(out_dir, root.path().join("frames-cropped"));

    let out = image::open(out_dir.join("0001.png")).unwrap();
    assert_eq!((out.width(), out.height()), (8, 8));
    assert!(out_dir.join("0002.png").is_file());
}

#[test]
fn square_box_is_centered_and_clamped() {
    assert_eq!(square_box(100, 60, 40), (30, 10, 40));
    // Requested side larger than the image clamps to the short edge.
    assert_eq!(square_box(100, 60, 500), (20, 0, 60));
}

#[test]
fn crop_square_produces_square_outputs() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("frames");
    std::fs::create_dir(&dir).unwrap();
    black(32, 24).save(dir.join("0001.png")).unwrap();

    let (count, out_dir) = crop_square(&dir, 16).unwrap();
    assert_eq!(count, 1);
    let out = image::open(out_dir.join("0001.png")).unwrap();
    assert_eq!((out.width(), out.height()), (16, 16));
}
