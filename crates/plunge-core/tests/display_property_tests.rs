//! Property tests for the fixed-width path formatter

use plunge_core::display::{MAX_LINE_LENGTH, TERSE_FIELD_WIDTH, VERBOSE_FIELD_WIDTH, format_path};
use proptest::prelude::*;

fn path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z0-9._-]{1,24}", 1..8).prop_map(|parts| parts.join("/"))
}

/// Paths with a deep directory prefix and a leaf short enough to be kept
/// whole when elided.
fn deep_path_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec("[a-z0-9_]{6,12}", 5..10),
        "[a-z0-9._-]{1,30}",
    )
        .prop_map(|(dirs, leaf)| format!("{}/{leaf}", dirs.join("/")))
}

proptest! {
    #[test]
    fn field_is_always_exactly_its_width(
        path in path_strategy(),
        width in prop::sample::select(vec![TERSE_FIELD_WIDTH, VERBOSE_FIELD_WIDTH, 12usize, 20]),
    ) {
        let line = format_path(&path, width);
        prop_assert_eq!(line.chars().count(), width);
    }

    #[test]
    fn full_width_line_never_exceeds_limit(path in path_strategy()) {
        let line = format_path(&path, MAX_LINE_LENGTH);
        prop_assert!(line.ends_with('\n'));
        prop_assert!(line.chars().count() <= MAX_LINE_LENGTH + 1);
    }

    #[test]
    fn short_paths_are_kept_whole(path in path_strategy()) {
        prop_assume!(path.len() <= TERSE_FIELD_WIDTH - 3);
        let line = format_path(&path, TERSE_FIELD_WIDTH);
        prop_assert!(line.starts_with(&path));
    }

    #[test]
    fn long_paths_keep_a_head_and_an_ellipsis(path in path_strategy()) {
        prop_assume!(path.len() > VERBOSE_FIELD_WIDTH);
        let line = format_path(&path, VERBOSE_FIELD_WIDTH);
        prop_assert!(line.contains("..."));
        let head: String = path.chars().take(3).collect();
        prop_assert!(line.starts_with(&head));
    }

    #[test]
    fn elided_tail_starts_at_last_separator(path in deep_path_strategy()) {
        let field = VERBOSE_FIELD_WIDTH - 3;
        prop_assume!(path.len() > field);
        let last_sep = path.rfind('/').unwrap();
        let tail = &path[last_sep..];

        let line = format_path(&path, VERBOSE_FIELD_WIDTH);
        let kept = &line[..field];
        let expected = format!("...{tail}");
        prop_assert!(kept.ends_with(&expected), "{:?} lacks {:?}", kept, expected);
    }
}
