use crate::{HasLength, Iterable};

impl<T> HasLength for Vec<T> {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Iterable for Vec<T> {
    type Item<'a> = &'a T where Self: 'a;

    fn iter<'a>(&'a self) -> impl Iterator<Item = Self::Item<'a>> {
        <[T]>::iter(self)
    }
}
