use crate::{HasLength, Iterable};
use std::hash::BuildHasher;

#[allow(clippy::disallowed_types)]
impl<K, V, S: BuildHasher> HasLength for std::collections::HashMap<K, V, S> {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

#[allow(clippy::disallowed_types)]
impl<K, V, S: BuildHasher> Iterable for std::collections::HashMap<K, V, S> {
    type Item<'a> = (&'a K, &'a V) where Self: 'a;

    fn iter<'a>(&'a self) -> impl Iterator<Item = Self::Item<'a>> {
        std::collections::HashMap::iter(self)
    }
}
