use moments_core::CategoryTag;
use std::collections::HashSet;

#[test]
fn type_ids_zero_to_five_map_onto_every_variant_once() {
    let resolved: HashSet<CategoryTag> = (0..=5).map(CategoryTag::from_type_id).collect();
    assert_eq!(resolved.len(), 6);

    for id in 0..=5 {
        assert_eq!(CategoryTag::from_type_id(id).type_id(), id);
    }
}

#[test]
fn unmapped_type_ids_fall_back_to_other() {
    for id in [-100, -1, 6, 7, 42, i32::MAX, i32::MIN] {
        assert_eq!(CategoryTag::from_type_id(id), CategoryTag::Other);
    }
}

#[test]
fn storage_mapping_is_fixed() {
    let expected = [
        (0, CategoryTag::Family, "Family"),
        (1, CategoryTag::Love, "Love"),
        (2, CategoryTag::Music, "Music"),
        (3, CategoryTag::Tech, "Tech"),
        (4, CategoryTag::JustMe, "Just Me"),
        (5, CategoryTag::Other, "Other"),
    ];
    for (id, tag, title) in expected {
        assert_eq!(tag.type_id(), id);
        assert_eq!(tag.title(), title);
    }
}

#[test]
fn serializes_as_snake_case_names() {
    let json = serde_json::to_string(&CategoryTag::JustMe).unwrap();
    assert_eq!(json, "\"just_me\"");
    let parsed: CategoryTag = serde_json::from_str("\"music\"").unwrap();
    assert_eq!(parsed, CategoryTag::Music);
}
