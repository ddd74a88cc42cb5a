//! A doubly-linked sequence container with owned nodes, kept as a single
//! cycle through a sentinel node.
//!
//! [`LinkedSequence`] inserts and removes elements at any known position
//! in constant time, and moves whole runs of elements between sequences
//! by rewriting links instead of copying ([`splice`], [`merge`],
//! [`append`]). In exchange, reaching a position by index takes *O*(*n*)
//! time.
//!
//! ```
//! use linked_sequence::LinkedSequence;
//!
//! let mut seq = LinkedSequence::from([1, 2, 3, 4]);
//!
//! let mut cursor = seq.cursor_start_mut();
//! cursor.insert(0); // insert 0 at the front
//! assert_eq!(cursor.current(), Some(&1));
//!
//! assert!(cursor.seek_to(3).is_ok());
//! assert_eq!(cursor.remove(), Some(3));
//!
//! assert_eq!(seq.to_vec(), vec![0, 1, 2, 4]);
//! ```
//!
//! # Memory Layout
//!
//! The sequence owns one sentinel node for its whole lifetime. The
//! sentinel carries the two link fields but no element, and it closes the
//! node chain into a cycle:
//!
//! ```text
//!    ┌──────────────────────────────────────────────────┐
//!    │      Node 0         Node 1          Sentinel     │
//!    ↓    ╔════════╗     ╔════════╗      ┌─────────┐    │
//!    ───→ ║  next  ║ ──→ ║  next  ║ ┄──→ │  next   │ ───┘
//!    ┌─── ║  prev  ║ ←── ║  prev  ║ ←──┄ │  prev   │ ←──┐
//!    │    ╟────────╢     ╟────────╢      ├─────────┤    │
//!    │    ║ elem T ║     ║ elem T ║      ┊ no elem ┊    │
//!    │    ╚════════╝     ╚════════╝      └─────────┘    │
//!    │                                                  │
//!    └──────────────────────────────────────────────────┘
//! ```
//!
//! `sentinel.next` is the first element (or the sentinel itself when the
//! sequence is empty) and `sentinel.prev` is the last. A sequence of
//! length *n* therefore has *n* + 1 positions: 0 through *n* - 1 hold the
//! elements and position *n* is the sentinel, which doubles as the end
//! position for cursors and iterators. The sequence also tracks its
//! length, so [`len`](LinkedSequence::len) is *O*(1) and range splices
//! can update size bookkeeping without walking the moved run.
//!
//! # Iteration
//!
//! [`Iter`] and [`IterMut`] iterate like a slice: double-ended, fused and
//! non-cyclic. [`IterMut`] gives mutable access to the elements but never
//! to the links.
//!
//! ```
//! use linked_sequence::LinkedSequence;
//!
//! let mut seq = LinkedSequence::from([1, 2, 3]);
//! let mut iter = seq.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next_back(), Some(&3));
//!
//! seq.iter_mut().for_each(|value| *value *= 2);
//! assert_eq!(seq.into_vec(), vec![2, 4, 6]);
//! ```
//!
//! # Cursors
//!
//! Cursors are positions that can seek both ways and, for
//! [`CursorMut`], edit the sequence while standing on it: [`insert`],
//! [`remove`], [`try_remove`] and [`splice`]. A cursor stays on its
//! element however many other elements are inserted or removed around
//! it.
//!
//! ```
//! use linked_sequence::LinkedSequence;
//!
//! let mut seq = LinkedSequence::from([1, 2, 3]);
//! let mut cursor = seq.cursor_mut(1);
//!
//! cursor.insert(10);                       // [1, 10, 2, 3]
//! assert_eq!(cursor.current(), Some(&2));  // still on its element
//! assert_eq!(cursor.remove(), Some(2));    // [1, 10, 3]
//!
//! assert_eq!(seq.to_vec(), vec![1, 10, 3]);
//! ```
//!
//! # Errors
//!
//! Removal through a checked operation reports [`Error::Empty`] on a
//! sequence with no elements and [`Error::InvalidPosition`] when the end
//! position is used where a removable element is required. A failed call
//! never mutates the sequence. Positions that do not exist at all
//! (`index > len`) are programming errors and panic.
//!
//! [`splice`]: LinkedSequence::splice
//! [`merge`]: LinkedSequence::merge
//! [`append`]: LinkedSequence::append
//! [`CursorMut`]: crate::sequence::cursor::CursorMut
//! [`insert`]: crate::sequence::cursor::CursorMut::insert
//! [`remove`]: crate::sequence::cursor::CursorMut::remove
//! [`try_remove`]: crate::sequence::cursor::CursorMut::try_remove

#[doc(inline)]
pub use sequence::error::Error;
#[doc(inline)]
pub use sequence::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use sequence::LinkedSequence;

pub mod sequence;

mod prototype;
