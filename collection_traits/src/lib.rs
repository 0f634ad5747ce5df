#![forbid(clippy::unconditional_recursion)]

//! Capability traits shared by the container types of this workspace.
//!
//! The traits are intentionally tiny so that generic helpers can accept any
//! of `[T]`, `Vec<T>`, `HashMap<K, V, S>` or the wrapper containers built on
//! top of them.

pub mod hash_map;
pub mod slice;
pub mod vec;

pub trait HasLength {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}

/// Borrowing iteration over a container.
pub trait Iterable {
    type Item<'a>
    where
        Self: 'a;

    fn iter<'a>(&'a self) -> impl Iterator<Item = Self::Item<'a>>;
}

/// Counts the items of any [`Iterable`] container that satisfy `predicate`.
pub fn count_matching<'a, C, F>(container: &'a C, mut predicate: F) -> usize
where
    C: Iterable + ?Sized,
    F: FnMut(&C::Item<'a>) -> bool,
{
    container.iter().filter(|item| predicate(item)).count()
}
