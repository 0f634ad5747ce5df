//! Fluent, value-semantics wrappers over ordered sequences and hash maps.
//!
//! Operations on [`Sequence`] and [`Mapping`] borrow the receiver and return
//! a fresh container, so calls can be chained without disturbing the source:
//!
//! ```
//! use fluent_collections::seq;
//!
//! let words = seq!["z", "w", "a", "b"];
//! let doubled = words.sort(|a, b| a < b).map(|s| s.repeat(2));
//!
//! assert_eq!(doubled, seq!["aa", "bb", "ww", "zz"]);
//! assert_eq!(words, seq!["z", "w", "a", "b"]);
//! ```
//!
//! Mutation goes through the explicitly named `*_in_place` variants and
//! element access (`push`, `get_mut`, indexing).

pub mod errors;
pub mod map;
pub mod mapping;
pub mod sequence;

pub use errors::FillRangeError;
pub use mapping::Mapping;
pub use sequence::Sequence;

/// Create a [`Sequence`] from a list of elements, like `vec!`.
#[macro_export]
macro_rules! seq {
    () => {
        $crate::Sequence::new()
    };
    ($($x:expr),+ $(,)?) => {
        $crate::Sequence::from(vec![$($x),+])
    };
}
