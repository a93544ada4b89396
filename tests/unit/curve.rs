use super::*;

#[test]
fn parse_skips_malformed_lines() {
    let text = "1 10.5\nbroken\n2\n3 not-a-number\n4 -2.25\n\n5 0\n";
    let pairs = parse_pairs(text);
    assert_eq!(
        pairs,
        vec![
            ("1".to_string(), 10.5),
            ("4".to_string(), -2.25),
            ("5".to_string(), 0.0)
        ]
    );
}

#[test]
fn parse_keeps_first_token_verbatim() {
    let pairs = parse_pairs("007 1.0\n");
    assert_eq!(pairs[0].0, "007");
}

#[test]
fn scale_maps_minimum_to_target() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("curve.txt");
    std::fs::write(&path, "1 -52.0\n2 -26.0\n3 13.0\n").unwrap();

    let (factor, out_path) = scale_to_min(&path, -104.0).unwrap();
    assert_eq!(factor, 2.0);
    assert_eq!(out_path, dir.path().join("curve-scaled.txt"));

    let out = std::fs::read_to_string(out_path).unwrap();
    assert_eq!(out, "1 -104.000000\n2 -52.000000\n3 26.000000\n");
}

#[test]
fn scale_rejects_zero_minimum() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("curve.txt");
    std::fs::write(&path, "1 0.0\n2 5.0\n").unwrap();
    assert!(scale_to_min(&path, -104.0).is_err());
}

#[test]
fn scale_rejects_files_with_no_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("curve.txt");
    std::fs::write(&path, "nothing to see\n").unwrap();
    assert!(scale_to_min(&path, -104.0).is_err());
}

#[test]
fn negate_flips_signs_and_skips_malformed_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("curve.txt");
    std::fs::write(&path, "1 2.5\njunk line\n2 -3.0\n").unwrap();

    let out_path = negate(&path).unwrap();
    assert_eq!(out_path, dir.path().join("curve-reversed.txt"));
    let out = std::fs::read_to_string(out_path).unwrap();
    assert_eq!(out, "1 -2.500000\n2 3.000000\n");
}

#[test]
fn accumulate_keeps_a_negated_running_sum() {
    let points = vec![(2, 1.0), (3, 2.0), (4, 0.5)];
    let curve = accumulate(&points, 10.0, 2, 4);
    assert_eq!(curve, vec![(2, -10.0), (3, -30.0), (4, -35.0)]);
}

#[test]
fn accumulate_respects_the_frame_window() {
    let points = vec![(1, 1.0), (2, 1.0), (3, 1.0), (4, 1.0)];
    let curve = accumulate(&points, 1.0, 2, 3);
    assert_eq!(curve, vec![(2, -1.0), (3, -2.0)]);
}

#[test]
fn accumulate_sorts_out_of_order_input() {
    let points = vec![(3, 2.0), (2, 1.0)];
    let curve = accumulate(&points, 1.0, 1, 10);
    assert_eq!(curve, vec![(2, -1.0), (3, -3.0)]);
}
