//! Everything related to traversing trees in general.
//!
//! The module is home to the following items:
//! - [`Traversable`] — a *trait for types which describe binary tree-like structures* which can be walked by a traversal
//! - [`Traversal`] — the iterator which walks a `Traversable` from a starting node in one of the classical orders
//! - [`Order`] — the orders themselves: preorder, inorder and postorder
//!
//! # How traversals work
//! A `Traversal` does all of its work when it's created. Starting at the provided node, it walks the whole subtree and records the nodes into a last-in-first-out buffer, arranged so that popping from the buffer produces them in the requested order. After that, every step is a single pop. This means that creating a traversal costs time and memory proportional to the size of the subtree, while stepping through it is constant-time.
//!
//! The subtree walk itself runs on a heap-allocated work stack instead of the call stack, so arbitrarily deep (degenerate) trees can be traversed without overflowing the stack.
//!
//! A traversal keeps the tree borrowed for as long as it's alive, so the tree cannot be mutated from under it. Traversals are one-shot: once exhausted, they stay exhausted, and a new one has to be created to walk the tree again.
//!
//! # Begin and end
//! Besides being an ordinary [`Iterator`], a traversal can be driven by hand: [`get`] reads the value at the current position, [`advance`] and [`post_advance`] step forward, and comparing against an exhausted traversal (returned by [`Traversal::end`] or the `end_*` methods on trees) tells whether there is anything left. Two traversals are equal if they are positioned on the same node of the same tree, or if both are exhausted.
//!
//! [`Traversable`]: trait.Traversable.html " "
//! [`Traversal`]: struct.Traversal.html " "
//! [`Traversal::end`]: struct.Traversal.html#method.end " "
//! [`Order`]: enum.Order.html " "
//! [`get`]: struct.Traversal.html#method.get " "
//! [`advance`]: struct.Traversal.html#method.advance " "
//! [`post_advance`]: struct.Traversal.html#method.post_advance " "
//! [`Iterator`]: https://doc.rust-lang.org/std/iter/trait.Iterator.html " "

#[cfg(test)]
mod tests;

use core::{
    iter::FusedIterator,
    fmt::{self, Formatter, Debug, Display},
    ptr,
};
use alloc::vec::Vec;

/// The order in which a [`Traversal`] visits the nodes of a subtree.
///
/// [`Traversal`]: struct.Traversal.html " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// The node itself, then its left subtree, then its right subtree.
    Preorder,
    /// The left subtree, then the node itself, then the right subtree. This is the default order.
    Inorder,
    /// The left subtree, then the right subtree, then the node itself.
    Postorder,
}
impl Default for Order {
    #[inline(always)]
    fn default() -> Self {
        Self::Inorder
    }
}
impl Display for Order {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Preorder => "preorder",
            Self::Inorder => "inorder",
            Self::Postorder => "postorder",
        })
    }
}

/// Data structures shaped like binary trees which can be walked by a [`Traversal`].
///
/// Cursors are only required to stay valid for as long as the traversable is borrowed immutably.
///
/// [`Traversal`]: struct.Traversal.html " "
pub trait Traversable {
    /// The payload of the nodes.
    type Value;
    /// The type for the cursor which will be used for keeping track of the traversed nodes.
    ///
    /// Must be very cheaply copyable, since traversals store one for every node they are going to visit.
    type Cursor: Copy + Debug + Eq;

    /// Returns the cursor pointing to the root node, or `None` if the traversable is empty.
    fn cursor_to_root(&self) -> Option<Self::Cursor>;
    /// Returns a reference to the value of the node at the specified cursor.
    fn value_of(&self, cursor: Self::Cursor) -> &Self::Value;
    /// Returns a cursor to the parent of the node at the specified cursor, or `None` if that node is the root node.
    fn parent_of(&self, cursor: Self::Cursor) -> Option<Self::Cursor>;
    /// Returns a cursor to the left child of the node at the specified cursor, or `None` if there is no left child.
    fn left_child_of(&self, cursor: Self::Cursor) -> Option<Self::Cursor>;
    /// Returns a cursor to the right child of the node at the specified cursor, or `None` if there is no right child.
    fn right_child_of(&self, cursor: Self::Cursor) -> Option<Self::Cursor>;

    /// Traverses the whole traversable in the specified order.
    #[inline]
    fn traverse(&self, order: Order) -> Traversal<'_, Self>
    where Self: Sized,
    {
        Traversal::new(self, order, self.cursor_to_root())
    }
}

/// A pending piece of work for filling the buffer of a traversal.
#[derive(Copy, Clone, Debug)]
enum Work<C> {
    /// Lay out the whole subtree rooted at the node.
    Expand(C),
    /// Put the node itself into the buffer.
    Emit(C),
}

/// A one-shot, forward-only walk over a subtree in one of the classical [orders].
///
/// See the [module-level documentation] for more.
///
/// [orders]: enum.Order.html " "
/// [module-level documentation]: index.html " "
pub struct Traversal<'a, T: Traversable> {
    traversable: &'a T,
    order: Order,
    /// Nodes yet to be visited, the next one on top.
    pending: Vec<T::Cursor>,
    current: Option<T::Cursor>,
}
impl<'a, T: Traversable> Traversal<'a, T> {
    /// Creates a traversal of the subtree rooted at `start` in the specified order, or an exhausted one if `start` is `None`.
    ///
    /// The whole visitation sequence is computed right away; the traversal is positioned on its first node.
    pub fn new(traversable: &'a T, order: Order, start: Option<T::Cursor>) -> Self {
        let mut pending = Vec::new();
        if let Some(start) = start {
            Self::fill(traversable, order, start, &mut pending);
        }
        let current = pending.pop();
        Self {
            traversable,
            order,
            pending,
            current,
        }
    }
    /// Creates an exhausted traversal, which is what every traversal compares equal to once it runs out of nodes.
    #[inline]
    pub fn end(traversable: &'a T, order: Order) -> Self {
        Self {
            traversable,
            order,
            pending: Vec::new(),
            current: None,
        }
    }

    /// Lays out the subtree rooted at `start` into `buffer` so that popping from it produces the nodes in `order`.
    ///
    /// For every node, its right subtree goes in first and its left subtree after it, so that the left one comes out first. Where the node itself goes relative to the two determines the order.
    fn fill(traversable: &T, order: Order, start: T::Cursor, buffer: &mut Vec<T::Cursor>) {
        // Work items are popped in the reverse order they are pushed in
        let mut work = Vec::new();
        work.push(Work::Expand(start));
        while let Some(item) = work.pop() {
            let cursor = match item {
                Work::Emit(cursor) => {
                    buffer.push(cursor);
                    continue;
                }
                Work::Expand(cursor) => cursor,
            };
            let left = traversable.left_child_of(cursor).map(Work::Expand);
            let right = traversable.right_child_of(cursor).map(Work::Expand);
            match order {
                // right, left, node
                Order::Preorder => {
                    work.push(Work::Emit(cursor));
                    work.extend(left);
                    work.extend(right);
                }
                // right, node, left
                Order::Inorder => {
                    work.extend(left);
                    work.push(Work::Emit(cursor));
                    work.extend(right);
                }
                // node, right, left
                Order::Postorder => {
                    work.extend(left);
                    work.extend(right);
                    work.push(Work::Emit(cursor));
                }
            }
        }
    }

    /// Returns the value of the node the traversal is positioned on, or `None` if it's exhausted.
    #[inline]
    pub fn get(&self) -> Option<&'a T::Value> {
        let traversable = self.traversable;
        self.current.map(|cursor| traversable.value_of(cursor))
    }
    /// Returns the cursor of the node the traversal is positioned on, or `None` if it's exhausted.
    #[inline(always)]
    pub fn cursor(&self) -> Option<T::Cursor> {
        self.current
    }
    /// Returns the traversable being traversed.
    #[inline(always)]
    pub fn traversable(&self) -> &'a T {
        self.traversable
    }
    /// Returns the order of the traversal.
    #[inline(always)]
    pub fn order(&self) -> Order {
        self.order
    }
    /// Returns `true` if the traversal has run out of nodes, `false` otherwise.
    #[inline(always)]
    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }
    /// Moves to the next node, or to the end if there is none. Does nothing on an exhausted traversal.
    ///
    /// Returns the traversal itself, positioned on the new node.
    #[inline]
    pub fn advance(&mut self) -> &mut Self {
        self.current = self.pending.pop();
        self
    }
    /// Moves to the next node like `advance` does, but returns a copy of the traversal as it was *before* moving.
    pub fn post_advance(&mut self) -> Self {
        let previous = self.clone();
        self.advance();
        previous
    }
}
impl<T: Traversable> Clone for Traversal<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            traversable: self.traversable,
            order: self.order,
            pending: self.pending.clone(),
            current: self.current,
        }
    }
}
impl<T: Traversable> PartialEq for Traversal<'_, T> {
    /// Compares the positions of the traversals: they are equal if they are on the same node of the same traversable, or if both are exhausted.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        match (self.current, other.current) {
            (None, None) => true,
            (Some(this), Some(other_cursor)) => {
                this == other_cursor && ptr::eq(self.traversable, other.traversable)
            }
            _ => false,
        }
    }
}
impl<T: Traversable> Eq for Traversal<'_, T> {}
impl<'a, T: Traversable> Iterator for Traversal<'a, T> {
    type Item = &'a T::Value;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.get()?;
        self.advance();
        Some(value)
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}
impl<T: Traversable> ExactSizeIterator for Traversal<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.pending.len() + if self.current.is_some() { 1 } else { 0 }
    }
}
impl<T: Traversable> FusedIterator for Traversal<'_, T> {}
impl<T: Traversable> Debug for Traversal<'_, T> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traversal")
            .field("order", &self.order)
            .field("current", &self.current)
            .field("pending", &self.pending)
            .finish()
    }
}
