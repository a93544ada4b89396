use super::*;

#[test]
fn pad_width_uses_widest_numeric_stem() {
    let frames = vec![
        PathBuf::from("001.png"),
        PathBuf::from("00002.png"),
        PathBuf::from("003.png"),
    ];
    assert_eq!(output_pad_width(&frames), 5);
}

#[test]
fn pad_width_falls_back_to_four() {
    let frames = vec![PathBuf::from("frame-a.png"), PathBuf::from("frame-b.png")];
    assert_eq!(output_pad_width(&frames), 4);
}

#[test]
fn non_numeric_stems_are_ignored_for_padding() {
    let frames = vec![PathBuf::from("frame-a.png"), PathBuf::from("07.png")];
    assert_eq!(output_pad_width(&frames), 2);
}

#[test]
fn reverse_copies_in_reverse_order_with_fresh_numbering() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("frames");
    std::fs::create_dir(&dir).unwrap();
    std::fs::write(dir.join("001.png"), b"first").unwrap();
    std::fs::write(dir.join("002.png"), b"second").unwrap();
    std::fs::write(dir.join("003.png"), b"third").unwrap();

    let (count, out_dir) = reverse_sequence(&dir).unwrap();
    assert_eq!(count, 3);
    assert_eq!(out_dir, root.path().join("frames-reversed"));

    // Last input becomes the first output, bytes untouched.
    assert_eq!(std::fs::read(out_dir.join("001.png")).unwrap(), b"third");
    assert_eq!(std::fs::read(out_dir.join("002.png")).unwrap(), b"second");
    assert_eq!(std::fs::read(out_dir.join("003.png")).unwrap(), b"first");
}

#[test]
fn reverse_rejects_empty_directories() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("frames");
    std::fs::create_dir(&dir).unwrap();
    assert!(reverse_sequence(&dir).is_err());
}
