use std::cmp::Ordering;

/// Three-way comparison against a value of type `Rhs`.
///
/// [`Optional::equals`](crate::Optional::equals) treats [`Ordering::Equal`] as
/// equality. Every `Ord` type compares against itself out of the box; payloads
/// that should match a different type implement this directly.
///
/// ```
/// use std::cmp::Ordering;
///
/// use optio_core::{Comparable, Optional};
///
/// struct Label(String);
///
/// impl Comparable<String> for Label {
///     fn compare(&self, other: &String) -> Ordering {
///         self.0.cmp(other)
///     }
/// }
///
/// let label = Optional::of(Label("ok".to_string()));
/// assert!(label.equals(&Optional::of("ok".to_string())));
/// ```
pub trait Comparable<Rhs: ?Sized = Self> {
    fn compare(&self, other: &Rhs) -> Ordering;
}

impl<T: Ord + ?Sized> Comparable for T {
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}
