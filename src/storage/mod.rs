//! Utilities for treating the backing storage for trees generically.
//!
//! This module is home for the following items:
//! - [`ListStorage`], the trait for list-like collections which can be the arena of a tree
//! - [`DefaultStorage`], a type definition for the default backing storage used by trees unless a different one is specified
//!
//! Trees in this crate never remove individual nodes, so the arena is append-only: a node keeps its index for as long as the tree it belongs to is alive, and nodes added later always get larger indices than the ones added before them.
//!
//! [`ListStorage`]: trait.ListStorage.html " "
//! [`DefaultStorage`]: type.DefaultStorage.html " "

mod alloc_impl;
mod arrayvec_impl;

use alloc::vec::Vec;

/// Trait for list-like containers which can be the backing storage for trees.
///
/// # Safety
/// There's a number of invariants which have to be followed by the container:
/// - The length of the storage cannot be modified in the container when it's borrowed immutably or not borrowed at all;
/// - `new` and `with_capacity` ***must*** return empty storages, i.e. those which have `len() == 0` and `is_empty() == true`;
/// - it should be impossible for the length of the storage to overflow `usize`;
/// - Calling [`get_unchecked`] or [`get_unchecked_mut`] with `self.len() > index` should *not* cause undefined behavior (otherwise, it may or may not — that is implementation specific);
/// - `push` must place the element at index `len()` and `pop` must remove the element at index `len() - 1`, never moving any other element;
/// - If an element is added at a position, it must be retrieveable in the exact same state as it was inserted until it is removed or modified using a method which explicitly does so.
///
/// Tree structures may rely on those invariants for safety.
///
/// [`get_unchecked`]: #tymethod.get_unchecked " "
/// [`get_unchecked_mut`]: #tymethod.get_unchecked_mut " "
pub unsafe trait ListStorage: Sized {
    /// The type of values in the container.
    type Element;

    /// Creates an empty collection with the specified capacity.
    ///
    /// # Panics
    /// Collections with a fixed capacity should panic if the specified capacity does not match their actual one, and are recommended to override the `new` method to use the correct capacity.
    fn with_capacity(capacity: usize) -> Self;
    /// Appends an element to the back of the collection.
    ///
    /// # Panics
    /// Collections with a fixed capacity panic if they are already full.
    fn push(&mut self, element: Self::Element);
    /// Removes the last element from the collection and returns it, or `None` if it is empty.
    fn pop(&mut self) -> Option<Self::Element>;
    /// Returns the number of elements in the collection, also referred to as its 'length'.
    fn len(&self) -> usize;
    /// Returns a reference to the specified element in the collection, without doing bounds checking.
    ///
    /// # Safety
    /// If the specified index is out of bounds, a dangling reference will be created, causing *immediate undefined behavior*.
    unsafe fn get_unchecked(&self, index: usize) -> &Self::Element;
    /// Returns a *mutable* reference to the specified element in the collection, without doing bounds checking.
    ///
    /// # Safety
    /// If the specified index is out of bounds, a dangling reference will be created, causing *immediate undefined behavior*.
    unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut Self::Element;

    /// Returns a reference to the specified element in the collection, or `None` if the index is out of bounds.
    #[inline]
    fn get(&self, index: usize) -> Option<&Self::Element> {
        if self.len() > index {
            Some(unsafe {
                // SAFETY: we just did a bounds check
                self.get_unchecked(index)
            })
        } else {
            None
        }
    }
    /// Returns a *mutable* reference to the specified element in the collection, or `None` if the index is out of bounds.
    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Element> {
        if self.len() > index {
            Some(unsafe {
                // SAFETY: we just did a bounds check
                self.get_unchecked_mut(index)
            })
        } else {
            None
        }
    }
    /// Returns `true` if the specified index points to an element of the collection, `false` otherwise.
    ///
    /// If this method returned `true`, calling `get_unchecked`/`get_unchecked_mut` on the same index is guaranteed to be safe.
    #[inline(always)]
    fn contains_index(&self, index: usize) -> bool {
        self.len() > index
    }
    /// Creates a new empty collection. Dynamically-allocated collections created this way do not allocate memory.
    ///
    /// Collections with fixed capacity should override this method to use the correct capacity, as the default implementation calls `Self::with_capacity(0)`.
    #[inline(always)]
    fn new() -> Self {
        Self::with_capacity(0)
    }
    /// Returns `true` if the collection contains no elements, `false` otherwise.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns the amount of elements the collection can hold without requiring a memory allocation.
    ///
    /// For collections which have a fixed capacity, this should be equal to the length; the default implementation uses exactly that.
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.len()
    }
    /// Reserves capacity for at least additional more elements to be inserted in the given collection. The collection may reserve more space to avoid frequent reallocations. After calling `reserve`, `capacity` will be greater than or equal to `self.len()` + `additional`. Does nothing if capacity is already sufficient.
    ///
    /// For collections which have a fixed capacity, this should first check for the specified amount of elements to reserve for and if it's not zero, either reallocate the collection anew or, if that is not supported, panic. The default implementation does exactly that.
    #[inline(always)]
    fn reserve(&mut self, additional: usize) {
        if self.len() + additional > self.capacity() {
            unimplemented!("this storage type does not support reallocation")
        }
    }
    /// Shrinks the capacity of the collection as much as possible.
    ///
    /// The default implementation does nothing.
    #[inline(always)]
    fn shrink_to_fit(&mut self) {}
    /// Appends an element and returns the index it landed at.
    ///
    /// This is what trees use instead of `push`, since they need the index to link the new node to its parent.
    #[inline(always)]
    fn add(&mut self, element: Self::Element) -> usize {
        self.push(element);
        self.len() - 1
    }
}

/// The default storage type used by the tree types when a storage type is not provided.
///
/// This is always a [`Vec`]. Fixed-capacity arenas which never touch the allocator can be had by specifying an [`ArrayVec`] explicitly.
///
/// [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html " "
/// [`ArrayVec`]: https://docs.rs/arrayvec/*/arrayvec/struct.ArrayVec.html " "
pub type DefaultStorage<T> = Vec<T>;
