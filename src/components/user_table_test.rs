use super::*;

#[test]
fn actionable_rows_have_plain_class() {
    assert_eq!(row_class(RowPhase::Idle), "user-row");
    assert_eq!(row_class(RowPhase::Restored), "user-row");
}

#[test]
fn removal_stages_map_to_highlight_then_fade() {
    assert_eq!(row_class(RowPhase::Removing(RemovalStage::Highlight)), "user-row user-row--removed");
    assert!(row_class(RowPhase::Removing(RemovalStage::Fade)).ends_with("user-row--fading"));
}

#[test]
fn delete_label_tracks_phase() {
    assert_eq!(delete_label(RowPhase::Idle), "Delete");
    assert_eq!(delete_label(RowPhase::Confirming), "Delete");
    assert_eq!(delete_label(RowPhase::InFlight), "Deleting...");
    assert_eq!(delete_label(RowPhase::Removing(RemovalStage::Fade)), "Deleted");
}
