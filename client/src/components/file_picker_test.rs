use super::*;

#[test]
fn slot_ids_are_distinct() {
    let before = slot_ids(Slot::Before);
    let after = slot_ids(Slot::After);
    assert_eq!(before.input, "beforeImage");
    assert_eq!(after.preview, "afterPreview");
    assert_ne!(before, after);
}

#[test]
fn slots_map_to_separate_storage() {
    assert_ne!(slot_index(Slot::Before), slot_index(Slot::After));
}
