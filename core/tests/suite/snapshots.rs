//! Debug rendering

use insta::assert_debug_snapshot;
use optio_core::Optional;

#[test]
fn present_debug() {
    assert_debug_snapshot!(Optional::of(5), @r"
    Present(
        5,
    )
    ");
}

#[test]
fn absent_debug() {
    assert_debug_snapshot!(Optional::<i32>::empty(), @"Absent");
}

#[test]
fn nested_debug() {
    assert_debug_snapshot!(Optional::of(Optional::of("inner")), @r#"
    Present(
        Present(
            "inner",
        ),
    )
    "#);
}
