use super::*;

fn frames(names: &[&str]) -> Vec<PathBuf> {
    names.iter().map(|n| PathBuf::from("frames").join(n)).collect()
}

#[test]
fn empty_filter_selects_every_frame_in_order() {
    let all = frames(&["0001.png", "0002.png", "0003.png"]);
    let selected = select_frames(&all, &[]);
    assert_eq!(selected.len(), 3);
    assert_eq!(selected[0], (1, &all[0]));
    assert_eq!(selected[2], (3, &all[2]));
}

#[test]
fn filtered_frames_keep_their_full_folder_index() {
    let all = frames(&["0001.png", "0002.png", "0003.png", "0004.png"]);
    let filter = vec!["0003.png".to_owned(), "0001.png".to_owned()];
    let selected = select_frames(&all, &filter);
    // Folder order wins over filter order, and indices stay 1-based against
    // the whole listing so frame tokens match a full run.
    assert_eq!(selected, vec![(1, &all[0]), (3, &all[2])]);
}

#[test]
fn filter_matches_whole_filenames_only() {
    let all = frames(&["0001.png", "10001.png"]);
    let filter = vec!["0001.png".to_owned()];
    let selected = select_frames(&all, &filter);
    assert_eq!(selected, vec![(1, &all[0])]);
}

#[test]
fn unmatched_filter_selects_nothing() {
    let all = frames(&["0001.png"]);
    let filter = vec!["9999.png".to_owned()];
    assert!(select_frames(&all, &filter).is_empty());
}
