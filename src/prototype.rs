#![allow(dead_code)]
//! A compile-time-checked rendition of the node ownership scheme, built
//! on [`ghost_cell`] branded cells and [`static_rc`] fractional ownership
//! instead of raw pointers.
//!
//! Each node is owned by exactly two half-references: one held by its
//! predecessor's `next` slot (or the deque's `head`) and one by its
//! successor's `prev` slot (or the deque's `tail`). Popping a node joins
//! the two halves back into full ownership, so leaks and double-frees are
//! ruled out at compile time. The main sequence keeps the raw-pointer
//! ring for its richer cursor and splicing surface; this module tracks
//! how far the checked approach carries.

use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;

type Half<'id, T> = StaticRc<GhostCell<'id, Hinge<'id, T>>, 1, 2>;
type Full<'id, T> = StaticRc<GhostCell<'id, Hinge<'id, T>>, 2, 2>;

struct Hinge<'id, T> {
    next: Option<Half<'id, T>>,
    prev: Option<Half<'id, T>>,
    element: T,
}

impl<'id, T> Hinge<'id, T> {
    fn new(element: T) -> Self {
        Self {
            next: None,
            prev: None,
            element,
        }
    }
}

/// A double-ended queue whose linkage is checked by the brand token.
pub struct CheckedDeque<'id, T> {
    head: Option<Half<'id, T>>,
    tail: Option<Half<'id, T>>,
    len: usize,
}

impl<'id, T> Default for CheckedDeque<'id, T> {
    fn default() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
        }
    }
}

impl<'id, T> CheckedDeque<'id, T> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn push_front(&mut self, element: T, token: &mut GhostToken<'id>) {
        let (inner, outer) = Full::split(Full::new(GhostCell::new(Hinge::new(element))));
        match self.head.take() {
            Some(old_head) => {
                old_head.borrow_mut(token).prev = Some(inner);
                outer.borrow_mut(token).next = Some(old_head);
                self.head = Some(outer);
            }
            None => {
                self.tail = Some(inner);
                self.head = Some(outer);
            }
        }
        self.len += 1;
    }

    pub fn push_back(&mut self, element: T, token: &mut GhostToken<'id>) {
        let (inner, outer) = Full::split(Full::new(GhostCell::new(Hinge::new(element))));
        match self.tail.take() {
            Some(old_tail) => {
                old_tail.borrow_mut(token).next = Some(inner);
                outer.borrow_mut(token).prev = Some(old_tail);
                self.tail = Some(outer);
            }
            None => {
                self.head = Some(inner);
                self.tail = Some(outer);
            }
        }
        self.len += 1;
    }

    pub fn pop_front(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        let outer = self.head.take()?;
        let inner = match outer.borrow_mut(token).next.take() {
            Some(new_head) => {
                let inner = new_head
                    .borrow_mut(token)
                    .prev
                    .take()
                    .expect("predecessor half is present");
                self.head = Some(new_head);
                inner
            }
            None => self.tail.take().expect("tail of a one-element deque"),
        };
        self.len -= 1;
        Some(Full::into_box(Full::join(inner, outer)).into_inner().element)
    }

    pub fn pop_back(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        let outer = self.tail.take()?;
        let inner = match outer.borrow_mut(token).prev.take() {
            Some(new_tail) => {
                let inner = new_tail
                    .borrow_mut(token)
                    .next
                    .take()
                    .expect("successor half is present");
                self.tail = Some(new_tail);
                inner
            }
            None => self.head.take().expect("head of a one-element deque"),
        };
        self.len -= 1;
        Some(Full::into_box(Full::join(inner, outer)).into_inner().element)
    }

    /// Drain the deque front to back into a vector.
    pub fn into_vec(mut self, token: &mut GhostToken<'id>) -> Vec<T> {
        let mut values = Vec::with_capacity(self.len);
        while let Some(value) = self.pop_front(token) {
            values.push(value);
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use crate::prototype::CheckedDeque;
    use ghost_cell::GhostToken;

    #[test]
    fn push_pop_both_ends() {
        GhostToken::new(|mut token| {
            let mut deque = CheckedDeque::new();
            assert!(deque.is_empty());

            deque.push_back(2, &mut token);
            deque.push_front(1, &mut token);
            deque.push_back(3, &mut token);
            assert_eq!(deque.len(), 3);

            assert_eq!(deque.pop_front(&mut token), Some(1));
            assert_eq!(deque.pop_back(&mut token), Some(3));
            assert_eq!(deque.pop_back(&mut token), Some(2));
            assert_eq!(deque.pop_back(&mut token), None);
            assert!(deque.is_empty());
        })
    }

    #[test]
    fn drains_in_order() {
        GhostToken::new(|mut token| {
            let mut deque = CheckedDeque::new();
            for value in 0..5 {
                deque.push_back(value, &mut token);
            }
            assert_eq!(deque.into_vec(&mut token), vec![0, 1, 2, 3, 4]);
        })
    }
}
