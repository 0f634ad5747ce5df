use crate::errors::FillRangeError;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};
use tracing::debug;

/// An ordered, index-addressable list with chainable functional operations.
///
/// `map`, `filter`, `sort`, `fill` and `reverse` never touch the receiver,
/// they return a new sequence. Mutation only happens through the `*_in_place`
/// methods, [`Sequence::push`] and element access (`seq[0] = value`,
/// [`Sequence::get_mut`]).
///
/// The copying operations need `T: Clone`; there is no fallback to the slice
/// methods of the same name:
///
/// ```compile_fail
/// use fluent_collections::Sequence;
///
/// struct Token(u8);
///
/// let seq = Sequence::from(vec![Token(1), Token(2)]);
/// let reversed = seq.reverse();
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Sequence<T>(Vec<T>);

impl<T> Sequence<T> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn push(&mut self, item: T) {
        self.0.push(item);
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.0.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.0.as_mut_slice().iter_mut()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Calls `f` with every element, in order.
    ///
    /// Returns the receiver, so further operations can be chained.
    pub fn for_each(&self, f: impl FnMut(&T)) -> &Self {
        self.iter().for_each(f);
        self
    }

    /// Builds a new sequence out of `f` applied to every element.
    #[must_use]
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Sequence<U> {
        Sequence(self.iter().map(f).collect())
    }

    /// Replaces every element with the result of `f`.
    pub fn map_in_place(&mut self, mut f: impl FnMut(&T) -> T) -> &mut Self {
        for item in self.iter_mut() {
            *item = f(item);
        }
        self
    }

    /// Left fold over the elements.
    ///
    /// `f` receives the accumulated value and the current element. An empty
    /// sequence returns `init` without calling `f`.
    pub fn reduce<A>(&self, init: A, f: impl FnMut(A, &T) -> A) -> A {
        self.iter().fold(init, f)
    }

    /// Stable sort driven by a "`a` goes before `b`" predicate.
    ///
    /// Elements `less` considers equivalent keep their relative order, and an
    /// element only moves in front of another when `less(moved, other)` holds.
    /// A predicate that is not a strict weak ordering (`<` over floats with
    /// NaN, for example) gives an unspecified permutation but never panics.
    pub fn sort_in_place(&mut self, mut less: impl FnMut(&T, &T) -> bool) -> &mut Self {
        if self.0.len() < 2 {
            return self;
        }
        let order = merge_order(&self.0, &mut less);
        let mut slots: Vec<Option<T>> = std::mem::take(&mut self.0)
            .into_iter()
            .map(Some)
            .collect();
        self.0 = order.into_iter().filter_map(|i| slots[i].take()).collect();
        self
    }

    /// Reverses the receiver.
    pub fn reverse_in_place(&mut self) -> &mut Self {
        self.0.as_mut_slice().reverse();
        self
    }
}

impl<T: Clone> Sequence<T> {
    /// Keeps the elements for which `f` returns `true`, in their original order.
    #[must_use]
    pub fn filter(&self, mut f: impl FnMut(&T) -> bool) -> Self {
        Self(self.iter().filter(|item| f(item)).cloned().collect())
    }

    /// Sorted copy of the sequence, see [`Sequence::sort_in_place`].
    #[must_use]
    pub fn sort(&self, less: impl FnMut(&T, &T) -> bool) -> Self {
        let mut sorted = self.clone();
        sorted.sort_in_place(less);
        sorted
    }

    /// Copy of the sequence with every index in `start..end` set to `val`.
    ///
    /// An empty or reversed range yields an unchanged copy.
    ///
    /// # Panics
    ///
    /// Panics if the range is non-empty and `end` is past the end of the
    /// sequence. See [`Sequence::try_fill`] for a non-panicking version.
    #[must_use]
    pub fn fill(&self, val: T, start: usize, end: usize) -> Self {
        let mut filled = self.clone();
        if start < end {
            filled.0[start..end].fill(val);
        }
        filled
    }

    /// Checked [`Sequence::fill`].
    pub fn try_fill(&self, val: T, start: usize, end: usize) -> Result<Self, FillRangeError> {
        if let Err(err) = FillRangeError::check(start, end, self.len()) {
            debug!(%err, "Rejected fill range");
            return Err(err);
        }
        Ok(self.fill(val, start, end))
    }

    /// Copy of the sequence with the elements in opposite order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        Self(self.iter().rev().cloned().collect())
    }
}

/// Bottom-up merge sort over indices into `items`.
///
/// `slice::sort_by` may panic when the comparator is not a total order, so
/// the ordering is computed here and applied by the caller.
fn merge_order<T>(items: &[T], less: &mut impl FnMut(&T, &T) -> bool) -> Vec<usize> {
    let len = items.len();
    let mut order: Vec<usize> = (0..len).collect();
    let mut merged = order.clone();
    let mut width = 1;
    while width < len {
        for start in (0..len).step_by(2 * width) {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            let (mut left, mut right) = (start, mid);
            for slot in &mut merged[start..end] {
                // right side wins only when strictly first, keeps the sort stable
                let take_right = right < end
                    && (left >= mid || less(&items[order[right]], &items[order[left]]));
                if take_right {
                    *slot = order[right];
                    right += 1;
                } else {
                    *slot = order[left];
                    left += 1;
                }
            }
        }
        std::mem::swap(&mut order, &mut merged);
        width *= 2;
    }
    order
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for Sequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T> IndexMut<usize> for Sequence<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self(items)
    }
}

impl<const N: usize, T> From<[T; N]> for Sequence<T> {
    fn from(items: [T; N]) -> Self {
        Self(items.into())
    }
}

impl<T> From<Sequence<T>> for Vec<T> {
    fn from(seq: Sequence<T>) -> Self {
        seq.0
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq<U>, U> PartialEq<Sequence<U>> for Sequence<T> {
    fn eq(&self, other: &Sequence<U>) -> bool {
        self.0 == other.0
    }
}

impl<T: PartialEq<U>, U> PartialEq<Vec<U>> for Sequence<T> {
    fn eq(&self, other: &Vec<U>) -> bool {
        self.0 == *other
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T: Hash> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

impl<T> collection_traits::HasLength for Sequence<T> {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<T> collection_traits::Iterable for Sequence<T> {
    type Item<'a> = &'a T where Self: 'a;

    fn iter<'a>(&'a self) -> impl Iterator<Item = Self::Item<'a>> {
        self.0.as_slice().iter()
    }
}
