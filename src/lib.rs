#![doc = include_str!("../README.md")]
#![no_std]

extern crate alloc;

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;
use core::hash::Hasher;
use core::mem;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PUBLIC TYPE AND TRAIT DEFINITIONS                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// A persistent singly-linked list.
///
/// A list is either [`Empty`](List::Empty) or a [`Node`](List::Node) holding
/// a head element and a reference-counted tail. Lists are immutable values:
/// every operation that "changes" a list builds a new one, and the new list
/// shares the old list's nodes instead of copying them. Sharing is safe
/// precisely because no node is ever mutated after construction.
///
/// Cloning a list is O(1): it copies the head element and bumps the tail's
/// reference count.

#[derive(Clone, Default)]
pub enum List<T> {
  /// The zero-length list.
  #[default]
  Empty,
  /// A head element followed by the rest of the list.
  Node(T, Rc<List<T>>),
}

/// An optional value without a null sentinel.
///
/// Exactly one of the two variants holds at any time. Transformations such
/// as [`map`](Maybe::map) produce a new `Maybe` rather than mutating the
/// receiver.

#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum Maybe<T> {
  /// No value.
  #[default]
  Absent,
  /// Exactly one value.
  Present(T),
}

/// A borrowing iterator over a [`List`], front to back.

#[derive(Clone)]
pub struct Iter<'a, T>(&'a List<T>);

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// MACROS                                                                     //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// Builds a [`List`] from its arguments in order.
///
/// The first argument becomes the head of the outermost node; `list![]` is
/// [`List::Empty`].
///
/// ```
/// use catena::{list, List};
///
/// let xs: List<i64> = list![1, 2, 3];
/// assert_eq!(xs.head().get_or_else(&0), &1);
/// ```

#[macro_export]
macro_rules! list {
  () => {
    $crate::List::Empty
  };
  ($head:expr $(, $tail:expr)* $(,)?) => {
    $crate::list![$($tail),*].cons($head)
  };
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// List                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<T> List<T> {
  /// The empty list.

  #[inline(always)]
  pub const fn new() -> Self {
    List::Empty
  }

  /// Prepends an element, consuming the list. O(1).

  #[inline(always)]
  pub fn cons(self, head: T) -> Self {
    List::Node(head, Rc::new(self))
  }

  /// Whether the list is [`Empty`](List::Empty).

  #[inline(always)]
  pub const fn is_empty(&self) -> bool {
    matches!(self, List::Empty)
  }

  /// The number of elements. O(n).

  pub fn len(&self) -> usize {
    let mut n = 0;
    let mut cur = self;
    while let List::Node(_, tail) = cur {
      n += 1;
      cur = tail;
    }
    n
  }

  /// A reference to the first element, or [`Absent`](Maybe::Absent) if the
  /// list is empty.

  #[inline(always)]
  pub fn head(&self) -> Maybe<&T> {
    match self {
      List::Empty => Maybe::Absent,
      List::Node(head, _) => Maybe::Present(head),
    }
  }

  /// The list after the first element, or [`Absent`](Maybe::Absent) if the
  /// list is empty.

  #[inline(always)]
  pub fn tail(&self) -> Maybe<&List<T>> {
    match self {
      List::Empty => Maybe::Absent,
      List::Node(_, tail) => Maybe::Present(tail.as_ref()),
    }
  }

  /// Iterates over the elements front to back.

  #[inline(always)]
  pub fn iter(&self) -> Iter<'_, T> {
    Iter(self)
  }

  /// Folds the list from the back toward the front.
  ///
  /// `fold_right` obeys the two structural equations
  ///
  /// ```text
  /// fold_right(Empty,      seed, combine) == seed
  /// fold_right(Node(h, t), seed, combine)
  ///   == combine(h, fold_right(t, seed, combine))
  /// ```
  ///
  /// so the last element is combined with `seed` first and the result is
  /// threaded leftward to the head. The traversal runs in two passes over an
  /// explicit stack of head references rather than by recursion, so the call
  /// stack stays flat no matter how long the list is.

  pub fn fold_right<B, F>(&self, seed: B, combine: F) -> B
  where
    F: FnMut(&T, B) -> B
  {
    let mut combine = combine;

    let mut spine = Vec::new();
    let mut cur = self;

    loop {
      match cur {
        List::Empty => break,
        List::Node(head, tail) => {
          spine.push(head);
          cur = tail;
        }
      }
    }

    let mut acc = seed;

    while let Some(head) = spine.pop() {
      acc = combine(head, acc);
    }

    acc
  }
}

impl<T> FromIterator<T> for List<T> {
  /// Builds a list preserving the iterator's order: the first item yielded
  /// becomes the head of the outermost node.

  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let mut items: Vec<T> = iter.into_iter().collect();
    let mut list = List::Empty;

    while let Some(item) = items.pop() {
      list = list.cons(item);
    }

    list
  }
}

impl<T: PartialEq> PartialEq for List<T> {
  fn eq(&self, other: &Self) -> bool {
    self.iter().eq(other.iter())
  }
}

impl<T: Eq> Eq for List<T> { }

impl<T: Hash> Hash for List<T> {
  fn hash<H: Hasher>(&self, state: &mut H) {
    state.write_usize(self.len());
    for item in self {
      item.hash(state);
    }
  }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

impl<T> Drop for List<T> {
  fn drop(&mut self) {
    // A derived drop would recurse once per node. Unlink the chain
    // iteratively instead, for as long as the current value is the sole
    // owner of its tail. The first shared tail stays linked; the co-owner
    // keeps it alive and only the reference count is decremented.
    let mut tail = match self {
      List::Empty => return,
      List::Node(_, tail) => match Rc::get_mut(tail) {
        None => return,
        Some(inner) => mem::take(inner),
      },
    };

    loop {
      let next = match &mut tail {
        List::Empty => return,
        List::Node(_, next) => match Rc::get_mut(next) {
          None => return,
          Some(inner) => mem::take(inner),
        },
      };
      tail = next;
    }
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Iter                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  fn next(&mut self) -> Option<&'a T> {
    let cur: &'a List<T> = self.0;
    match cur {
      List::Empty => None,
      List::Node(head, tail) => {
        self.0 = tail;
        Some(head)
      }
    }
  }
}

impl<'a, T> IntoIterator for &'a List<T> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;

  #[inline(always)]
  fn into_iter(self) -> Iter<'a, T> {
    self.iter()
  }
}

impl<'a, T> fmt::Debug for Iter<'a, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("Iter").finish()
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Maybe                                                                      //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<T> Maybe<T> {
  /// Whether the value is [`Present`](Maybe::Present).

  #[inline(always)]
  pub const fn is_present(&self) -> bool {
    matches!(self, Maybe::Present(_))
  }

  /// Whether the value is [`Absent`](Maybe::Absent).

  #[inline(always)]
  pub const fn is_absent(&self) -> bool {
    matches!(self, Maybe::Absent)
  }

  /// Converts from `&Maybe<T>` to `Maybe<&T>`.

  #[inline(always)]
  pub const fn as_ref(&self) -> Maybe<&T> {
    match self {
      Maybe::Absent => Maybe::Absent,
      Maybe::Present(value) => Maybe::Present(value),
    }
  }

  /// Applies `f` to a present value and passes an absent one through.
  ///
  /// `f` is never invoked on [`Absent`](Maybe::Absent).

  #[inline(always)]
  pub fn map<U, F>(self, f: F) -> Maybe<U>
  where
    F: FnOnce(T) -> U
  {
    match self {
      Maybe::Absent => Maybe::Absent,
      Maybe::Present(value) => Maybe::Present(f(value)),
    }
  }

  /// The contained value, or `fallback` if absent.
  ///
  /// The fallback is an already-computed value, evaluated eagerly by the
  /// caller whether or not it is used.

  #[inline(always)]
  pub fn get_or_else(self, fallback: T) -> T {
    match self {
      Maybe::Absent => fallback,
      Maybe::Present(value) => value,
    }
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Conversions                                                                //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<T> From<Option<T>> for Maybe<T> {
  #[inline(always)]
  fn from(value: Option<T>) -> Self {
    match value {
      None => Maybe::Absent,
      Some(value) => Maybe::Present(value),
    }
  }
}

impl<T> From<Maybe<T>> for Option<T> {
  #[inline(always)]
  fn from(value: Maybe<T>) -> Self {
    match value {
      Maybe::Absent => None,
      Maybe::Present(value) => Some(value),
    }
  }
}
