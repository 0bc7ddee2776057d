//! Tag set normalization and limits.

use crate::task::domain::{TaskTags, TaskValidationError, ValidatedField};
use rstest::rstest;

fn numbered(count: usize) -> Vec<String> {
    (0..count).map(|index| format!("tag-{index}")).collect()
}

#[rstest]
fn duplicates_collapse() {
    let tags = TaskTags::new(["work", "work"]).expect("valid tags");
    assert_eq!(tags.len(), 1);
}

#[rstest]
fn tags_are_trimmed_before_deduplication() {
    let tags = TaskTags::new(["  work  ", "work"]).expect("valid tags");
    assert_eq!(tags.to_vec(), vec!["work".to_owned()]);
}

#[rstest]
fn blank_tags_are_dropped() {
    let tags = TaskTags::new(["", "   ", "home"]).expect("valid tags");
    assert_eq!(tags.to_vec(), vec!["home".to_owned()]);
}

#[rstest]
fn tag_length_limit_is_fifty_characters() {
    assert!(TaskTags::new(["a".repeat(50)]).is_ok());
    assert_eq!(
        TaskTags::new(["b".repeat(51)]),
        Err(TaskValidationError::TagTooLong {
            tag: "b".repeat(51),
            max: 50,
        })
    );
}

#[rstest]
fn tag_count_limit_is_twenty() {
    assert_eq!(TaskTags::new(numbered(20)).map(|tags| tags.len()), Ok(20));
    assert_eq!(
        TaskTags::new(numbered(21)),
        Err(TaskValidationError::TooManyTags { max: 20 })
    );
}

#[rstest]
fn duplicates_do_not_count_towards_limit() {
    let mut tags = numbered(20);
    tags.extend(numbered(5));
    assert_eq!(TaskTags::new(tags).map(|tags| tags.len()), Ok(20));
}

#[rstest]
fn oversized_input_is_rejected_at_the_first_extra_tag() {
    let mut consumed = 0_usize;
    let unbounded = (0_usize..).map(|index| {
        consumed += 1;
        format!("tag-{index}")
    });

    assert_eq!(
        TaskTags::new(unbounded),
        Err(TaskValidationError::TooManyTags { max: 20 })
    );
    assert_eq!(consumed, 21);
}

#[rstest]
fn equality_ignores_order() {
    let ab = TaskTags::new(["a", "b"]).expect("valid tags");
    let ba = TaskTags::new(["b", "a"]).expect("valid tags");
    let abc = TaskTags::new(["a", "b", "c"]).expect("valid tags");

    assert_eq!(ab, ba);
    assert_ne!(ab, abc);
}

#[rstest]
fn comma_separated_input_is_split_and_trimmed() {
    let tags = TaskTags::from_comma_separated("work, urgent ,, home").expect("valid tags");
    assert_eq!(tags, TaskTags::new(["home", "urgent", "work"]).expect("valid tags"));
    assert!(TaskTags::from_comma_separated("  ").expect("valid tags").is_empty());
}

#[rstest]
fn add_returns_new_set() {
    let tags = TaskTags::new(["work"]).expect("valid tags");
    let added = tags.add(" urgent ").expect("valid tag");

    assert_eq!(tags.len(), 1);
    assert!(added.contains("urgent"));
    assert_eq!(added.len(), 2);
}

#[rstest]
fn add_existing_tag_is_a_no_op() {
    let tags = TaskTags::new(["work"]).expect("valid tags");
    assert_eq!(tags.add("work"), Ok(tags.clone()));
}

#[rstest]
fn add_rejects_blank_long_and_overflowing_tags() {
    let tags = TaskTags::empty();
    assert_eq!(tags.add("  "), Err(TaskValidationError::EmptyTag));
    assert!(matches!(
        tags.add(&"c".repeat(51)),
        Err(TaskValidationError::TagTooLong { .. })
    ));

    let full = TaskTags::new(numbered(20)).expect("valid tags");
    assert_eq!(
        full.add("one-more"),
        Err(TaskValidationError::TooManyTags { max: 20 })
    );
    assert_eq!(full.add("tag-3"), Ok(full.clone()));
}

#[rstest]
fn remove_drops_matching_tag_only() {
    let tags = TaskTags::new(["work", "home"]).expect("valid tags");
    let removed = tags.remove(" work ");

    assert_eq!(removed.to_vec(), vec!["home".to_owned()]);
    assert_eq!(tags.remove("missing"), tags);
}

#[rstest]
fn display_joins_in_insertion_order() {
    let tags = TaskTags::new(["b", "a"]).expect("valid tags");
    assert_eq!(tags.to_string(), "b, a");
    assert_eq!(tags.value(), ["b".to_owned(), "a".to_owned()].as_slice());
}
