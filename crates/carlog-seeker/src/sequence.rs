//! Append-only linked sequence with a built-in cursor.
//!
//! [`LinkedSequence`] stores its elements as nodes in an arena, chained by
//! `next` indices from `head` to `tail`. Node positions never change once
//! appended; [`sort`](LinkedSequence::sort) moves payloads between nodes
//! and leaves the chain alone.
//!
//! Two traversal styles are available:
//!
//! - The built-in cursor ([`reset_cursor`](LinkedSequence::reset_cursor),
//!   [`advance_cursor`](LinkedSequence::advance_cursor),
//!   [`has_current`](LinkedSequence::has_current),
//!   [`current`](LinkedSequence::current)). There is exactly one per
//!   sequence, so nested traversals through it interfere with each other.
//! - [`iter`](LinkedSequence::iter), which hands out an independent
//!   [`Cursor`] that borrows the sequence and leaves the built-in cursor
//!   untouched.
//!
//! ```text
//! cursor state:  OFF --reset_cursor--> ON(head)        (OFF if empty)
//!                ON(n) --advance_cursor--> ON(n.next)   (OFF past tail)
//!                OFF --advance_cursor--> panic
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Result, SeekerError};
use crate::traits::Ranking;

#[derive(Clone)]
struct Node<T> {
    value: T,
    next: Option<usize>,
}

/// Ordered, append-only sequence traversed through a cursor.
///
/// # Example
///
/// ```
/// use carlog_seeker::LinkedSequence;
///
/// let mut seq = LinkedSequence::new();
/// seq.append("a");
/// seq.append("b");
///
/// let mut seen = Vec::new();
/// seq.reset_cursor();
/// while seq.has_current() {
///     seen.push(*seq.current());
///     seq.advance_cursor();
/// }
/// assert_eq!(seen, vec!["a", "b"]);
/// ```
#[derive(Clone)]
pub struct LinkedSequence<T> {
    nodes: Vec<Node<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    cursor: Option<usize>,
}

impl<T> LinkedSequence<T> {
    /// Creates an empty sequence with the cursor off-sequence.
    pub fn new() -> Self {
        LinkedSequence {
            nodes: Vec::new(),
            head: None,
            tail: None,
            cursor: None,
        }
    }

    /// Number of elements appended so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Appends `value` after the current tail.
    pub fn append(&mut self, value: T) {
        let index = self.nodes.len();
        self.nodes.push(Node { value, next: None });
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
    }

    /// Moves the cursor to the first element, or off-sequence if empty.
    pub fn reset_cursor(&mut self) {
        self.cursor = self.head;
    }

    /// Moves the cursor to the next element.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is off-sequence. Check
    /// [`has_current`](Self::has_current) first, or use
    /// [`try_advance_cursor`](Self::try_advance_cursor).
    pub fn advance_cursor(&mut self) {
        if let Err(err) = self.try_advance_cursor() {
            panic!("advance_cursor precondition violated: {err}");
        }
    }

    /// Moves the cursor to the next element, failing if it is off-sequence.
    pub fn try_advance_cursor(&mut self) -> Result<()> {
        let at = self.cursor.ok_or(SeekerError::CursorExhausted)?;
        self.cursor = self.nodes[at].next;
        Ok(())
    }

    /// Returns `true` if the cursor designates an element.
    pub fn has_current(&self) -> bool {
        self.cursor.is_some()
    }

    /// Returns the element under the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is off-sequence.
    pub fn current(&self) -> &T {
        match self.try_current() {
            Ok(value) => value,
            Err(err) => panic!("current precondition violated: {err}"),
        }
    }

    /// Returns the element under the cursor, failing if it is off-sequence.
    pub fn try_current(&self) -> Result<&T> {
        self.cursor
            .map(|at| &self.nodes[at].value)
            .ok_or(SeekerError::NoCurrent)
    }

    /// Returns an independent cursor over the elements in sequence order.
    pub fn iter(&self) -> Cursor<'_, T> {
        Cursor {
            nodes: &self.nodes,
            next: self.head,
        }
    }

    /// Sorts the sequence in place by [`Ranking::compare`], ascending.
    ///
    /// Selection sort: for each node from head to tail, the smallest payload
    /// among that node and its successors is swapped into it. Payloads move,
    /// nodes and links do not. Not stable.
    pub fn sort(&mut self)
    where
        T: Ranking,
    {
        let mut slot = self.head;
        while let Some(at) = slot {
            let mut min = at;
            let mut probe = self.nodes[at].next;
            while let Some(candidate) = probe {
                let ordering = self.nodes[candidate]
                    .value
                    .compare(Some(&self.nodes[min].value));
                if ordering == Ordering::Less {
                    min = candidate;
                }
                probe = self.nodes[candidate].next;
            }
            if min != at {
                self.swap_payload(at, min);
            }
            slot = self.nodes[at].next;
        }
    }

    fn swap_payload(&mut self, a: usize, b: usize) {
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        let (front, back) = self.nodes.split_at_mut(high);
        std::mem::swap(&mut front[low].value, &mut back[0].value);
    }
}

impl<T> Default for LinkedSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for LinkedSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = LinkedSequence::new();
        seq.extend(iter);
        seq
    }
}

impl<T> Extend<T> for LinkedSequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a LinkedSequence<T> {
    type Item = &'a T;
    type IntoIter = Cursor<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Independent forward cursor returned by [`LinkedSequence::iter`].
pub struct Cursor<'a, T> {
    nodes: &'a [Node<T>],
    next: Option<usize>,
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Cursor {
            nodes: self.nodes,
            next: self.next,
        }
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let at = self.next?;
        let node = &self.nodes[at];
        self.next = node.next;
        Some(&node.value)
    }
}
