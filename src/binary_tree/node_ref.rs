use core::ptr;
use crate::{
    storage::{ListStorage, DefaultStorage},
    traversal::{Order, Traversal},
    util::unreachable_debugchecked,
};
use arrayvec::ArrayVec;
use super::{BinaryTree, Node};

/// A reference to a node in a binary tree.
///
/// Since this type does not point to the node directly, but rather the tree the node is in and the key of the node in the storage, it can be used to traverse the tree.
///
/// Two `NodeRef`s are equal if they point to the same node of the same tree, regardless of the values stored.
#[derive(Debug)]
pub struct NodeRef<'a, T, S = DefaultStorage<Node<T>>>
where S: ListStorage<Element = Node<T>>,
{
    tree: &'a BinaryTree<T, S>,
    key: usize,
}
impl<'a, T, S> NodeRef<'a, T, S>
where S: ListStorage<Element = Node<T>>,
{
    /// Creates a new `NodeRef` pointing to the specified key in the storage, or `None` if it's out of bounds.
    #[inline]
    pub fn new_raw(tree: &'a BinaryTree<T, S>, key: usize) -> Option<Self> {
        if tree.storage.contains_index(key) {
            Some(unsafe {
                // SAFETY: we just did a key check
                Self::new_raw_unchecked(tree, key)
            })
        } else {
            None
        }
    }
    /// Creates a new `NodeRef` pointing to the specified key in the storage without doing bounds checking.
    ///
    /// # Safety
    /// Causes *immediate* undefined behavior if the specified key is not present in the storage.
    #[inline(always)]
    pub unsafe fn new_raw_unchecked(tree: &'a BinaryTree<T, S>, key: usize) -> Self {
        Self { tree, key }
    }
    /// Returns the raw storage key for the node.
    #[inline(always)]
    pub fn raw_key(&self) -> usize {
        self.key
    }
    /// Consumes the reference and returns the underlying raw storage key for the node.
    #[inline(always)]
    pub fn into_raw_key(self) -> usize {
        self.key
    }
    /// Returns the tree the node belongs to.
    #[inline(always)]
    pub fn tree(&self) -> &'a BinaryTree<T, S> {
        self.tree
    }
    /// Returns a reference to the data stored in the node.
    #[inline(always)]
    pub fn value(&self) -> &'a T {
        &self.node().value
    }
    /// Returns a reference to the parent node of the pointee, or `None` if it's the root node.
    #[inline]
    pub fn parent(&self) -> Option<Self> {
        self.node().parent.map(|x| unsafe {
            // SAFETY: nodes can never have out-of-bounds parents
            Self::new_raw_unchecked(self.tree, x)
        })
    }
    /// Returns `true` if the node is the root node, `false` otherwise.
    #[inline(always)]
    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }
    /// Returns `true` if the node is a *leaf*, i.e. does not have child nodes; `false` otherwise.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        let node = self.node();
        node.left_child.is_none() && node.right_child.is_none()
    }
    /// Returns `true` if the node is the left child of its parent, `false` if it's the right one and `None` if it's the root node.
    pub fn is_left_child(&self) -> Option<bool> {
        let parent = self.parent()?.node();
        match (parent.left_child, parent.right_child) {
            (Some(left), _) if left == self.key => Some(true),
            (_, Some(right)) if right == self.key => Some(false),
            _ => unsafe { unreachable_debugchecked("parent does not link back to its child") },
        }
    }
    /// Returns a reference to the left child, or `None` if there is none.
    #[inline]
    pub fn left_child(&self) -> Option<Self> {
        self.node().left_child.map(|x| self.child_ref(x))
    }
    /// Returns a reference to the right child, or `None` if there is none.
    #[inline]
    pub fn right_child(&self) -> Option<Self> {
        self.node().right_child.map(|x| self.child_ref(x))
    }
    /// Returns references to the children which are present, the left one first.
    ///
    /// If you need to know which side a lone child is on, use [`left_child`] and [`right_child`] instead.
    ///
    /// [`left_child`]: #method.left_child " "
    /// [`right_child`]: #method.right_child " "
    pub fn children(&self) -> ArrayVec<[Self; 2]> {
        let mut children = ArrayVec::new();
        children.extend(self.left_child());
        children.extend(self.right_child());
        children
    }
    /// Starts a traversal of the subtree rooted at this node in the specified order.
    ///
    /// # Example
    /// ```rust
    /// # use birch::{BinaryTree, Order};
    /// let mut tree = BinaryTree::<_>::new();
    /// tree.add_root(1)
    ///     .add_left(&1, 2)?
    ///     .add_right(&1, 3)?
    ///     .add_left(&2, 4)?
    ///     .add_right(&2, 5)?;
    ///
    /// let two = tree.find(&2).expect("just added it");
    /// let subtree = two.traverse(Order::Postorder).copied().collect::<Vec<_>>();
    /// assert_eq!(subtree, [4, 5, 2]);
    /// # Ok::<(), birch::ParentNotFound>(())
    /// ```
    #[inline]
    pub fn traverse(&self, order: Order) -> Traversal<'a, BinaryTree<T, S>> {
        Traversal::new(self.tree, order, Some(self.key))
    }

    #[inline(always)]
    fn child_ref(&self, key: usize) -> Self {
        debug_assert!(
            self.tree.storage.contains_index(key),
            "debug key check failed: tried to reference key {} which is not present in the storage",
            key,
        );
        unsafe {
            // SAFETY: child keys are guaranteed to be valid; checked above in debug builds
            Self::new_raw_unchecked(self.tree, key)
        }
    }
    #[inline(always)]
    fn node(&self) -> &'a Node<T> {
        self.tree.node(self.key)
    }
}
impl<T, S> Copy for NodeRef<'_, T, S>
where S: ListStorage<Element = Node<T>>,
{}
impl<T, S> Clone for NodeRef<'_, T, S>
where S: ListStorage<Element = Node<T>>,
{
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}
impl<T, S> PartialEq for NodeRef<'_, T, S>
where S: ListStorage<Element = Node<T>>,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && ptr::eq(self.tree, other.tree)
    }
}
impl<T, S> Eq for NodeRef<'_, T, S>
where S: ListStorage<Element = Node<T>>,
{}
