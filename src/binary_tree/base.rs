use core::{
    borrow::Borrow,
    fmt::{self, Formatter, Display},
    mem,
};
use crate::{
    storage::{ListStorage, DefaultStorage},
    traversal::{Order, Traversal},
    ParentNotFound,
};
use super::{Node, NodeRef, Side};

/// A binary tree.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Debug)]
pub struct BinaryTree<T, S = DefaultStorage<Node<T>>>
where S: ListStorage<Element = Node<T>>,
{
    pub(super) storage: S,
    pub(super) root: Option<usize>,
}
impl<T, S> BinaryTree<T, S>
where S: ListStorage<Element = Node<T>>,
{
    /// Creates an empty binary tree.
    ///
    /// # Example
    /// ```rust
    /// # use birch::BinaryTree;
    /// // The turbofish there is needed to state that we are using the default storage method
    /// // instead of asking the compiler to infer it, which would be impossible.
    /// let tree = BinaryTree::<i32>::new();
    /// assert!(tree.is_empty());
    /// assert!(tree.root().is_none());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            storage: S::new(),
            root: None,
        }
    }
    /// Creates an empty binary tree with the specified capacity for the storage.
    ///
    /// # Panics
    /// The storage may panic if it has fixed capacity and the specified value does not match it.
    ///
    /// # Example
    /// ```rust
    /// # use birch::BinaryTree;
    /// let mut tree = BinaryTree::<_>::with_capacity(3);
    /// assert!(tree.capacity() >= 3);
    ///
    /// // Capacity does not affect the actual nodes:
    /// assert!(tree.is_empty());
    /// tree.add_root("Root");
    /// assert_eq!(tree.len(), 1);
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: S::with_capacity(capacity),
            root: None,
        }
    }

    /// Returns the number of nodes in the tree.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.storage.len()
    }
    /// Returns `true` if the tree has no nodes, `false` otherwise.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
    /// Returns the amount of nodes the tree can hold without reallocating its storage.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }
    /// Shrinks the capacity of the storage as much as possible.
    #[inline(always)]
    pub fn shrink_to_fit(&mut self) {
        self.storage.shrink_to_fit()
    }

    /// Returns a reference to the root node of the tree, or `None` if the tree is empty.
    #[inline]
    pub fn root(&self) -> Option<NodeRef<'_, T, S>> {
        self.root.map(|key| unsafe {
            // SAFETY: the root key always points into the storage
            NodeRef::new_raw_unchecked(self, key)
        })
    }

    /// Puts a value at the root of the tree.
    ///
    /// If the tree is empty, a root node is created. Otherwise, the value of the existing root is replaced, and the rest of the tree stays as it was.
    ///
    /// Returns the tree itself to allow chaining.
    ///
    /// # Example
    /// ```rust
    /// # use birch::BinaryTree;
    /// let mut tree = BinaryTree::<_>::new();
    /// tree.add_root(5).add_root(9);
    /// assert_eq!(tree.len(), 1);
    /// assert_eq!(tree.root().map(|root| *root.value()), Some(9));
    /// ```
    pub fn add_root(&mut self, value: T) -> &mut Self {
        match self.root {
            Some(root) => {
                trace_event!(node = root, "overwrote the root value");
                self.node_mut(root).value = value;
            }
            None => {
                let root = self.storage.add(Node::root(value));
                trace_event!(node = root, "created the root node");
                self.root = Some(root);
            }
        }
        self
    }
    /// Gives the first node with the value `parent` a left child with the value `child`.
    ///
    /// The parent is found by scanning the tree in inorder and picking the first node which compares equal to `parent`. **If several nodes have that value, the first one in inorder is picked, which might not be the one you had in mind** — keep the values unique if that matters.
    ///
    /// If the parent has no left child, one is created. If it already has one, that child's value is replaced and its own children stay in place.
    ///
    /// Returns the tree itself to allow chaining.
    ///
    /// # Errors
    /// Fails with [`ParentNotFound`] if no node in the tree has the value `parent`. The tree is not modified in that case.
    ///
    /// # Example
    /// ```rust
    /// # use birch::{BinaryTree, ParentNotFound};
    /// let mut tree = BinaryTree::<_>::new();
    /// tree.add_root(1).add_left(&1, 2)?.add_left(&2, 3)?;
    /// // Replaces 2 with 4, 3 stays attached to it
    /// tree.add_left(&1, 4)?;
    /// assert_eq!(tree.preorder().copied().collect::<Vec<_>>(), [1, 4, 3]);
    ///
    /// assert_eq!(tree.add_left(&99, 5).map(|_| ()), Err(ParentNotFound));
    /// # Ok::<(), ParentNotFound>(())
    /// ```
    ///
    /// [`ParentNotFound`]: ../struct.ParentNotFound.html " "
    #[inline]
    pub fn add_left<Q>(&mut self, parent: &Q, child: T) -> Result<&mut Self, ParentNotFound>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.attach(parent, child, Side::Left)
    }
    /// Gives the first node with the value `parent` a right child with the value `child`.
    ///
    /// Works exactly like [`add_left`], only on the other side; the caveats about duplicate values apply here too.
    ///
    /// # Errors
    /// Fails with [`ParentNotFound`] if no node in the tree has the value `parent`. The tree is not modified in that case.
    ///
    /// [`add_left`]: #method.add_left " "
    /// [`ParentNotFound`]: ../struct.ParentNotFound.html " "
    #[inline]
    pub fn add_right<Q>(&mut self, parent: &Q, child: T) -> Result<&mut Self, ParentNotFound>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.attach(parent, child, Side::Right)
    }
    fn attach<Q>(&mut self, parent: &Q, child: T, side: Side) -> Result<&mut Self, ParentNotFound>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let parent = match self.find_key(parent) {
            Some(key) => key,
            None => {
                debug_event!(side = side.name(), "parent lookup failed, tree left untouched");
                return Err(ParentNotFound);
            }
        };
        match self.node(parent).child(side) {
            Some(existing) => {
                trace_event!(parent, node = existing, side = side.name(), "overwrote a child value");
                self.node_mut(existing).value = child;
            }
            None => {
                let new_child = self.storage.add(Node::leaf(child, Some(parent)));
                *self.node_mut(parent).child_slot(side) = Some(new_child);
                trace_event!(parent, node = new_child, side = side.name(), "created a child node");
            }
        }
        Ok(self)
    }

    /// Returns a reference to the first node in inorder with the value `key`, or `None` if there is no such node.
    ///
    /// This is the lookup used by [`add_left`] and [`add_right`]. It's a linear scan over the whole tree.
    ///
    /// # Example
    /// ```rust
    /// # use birch::BinaryTree;
    /// let mut tree = BinaryTree::<String>::new();
    /// tree.add_root("Fruit".to_string())
    ///     .add_left("Fruit", "Apple".to_string())?
    ///     .add_right("Fruit", "Pear".to_string())?;
    ///
    /// let pear = tree.find("Pear").expect("just added it");
    /// assert_eq!(pear.parent().map(|x| x.value().as_str()), Some("Fruit"));
    /// assert!(tree.find("Plum").is_none());
    /// # Ok::<(), birch::ParentNotFound>(())
    /// ```
    ///
    /// [`add_left`]: #method.add_left " "
    /// [`add_right`]: #method.add_right " "
    #[inline]
    pub fn find<Q>(&self, key: &Q) -> Option<NodeRef<'_, T, S>>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.find_key(key).map(|key| unsafe {
            // SAFETY: traversals only produce keys present in the storage
            NodeRef::new_raw_unchecked(self, key)
        })
    }
    fn find_key<Q>(&self, key: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let mut traversal = self.begin_inorder();
        while let Some(cursor) = traversal.cursor() {
            if Borrow::<Q>::borrow(&self.node(cursor).value) == key {
                return Some(cursor);
            }
            traversal.advance();
        }
        None
    }

    /// Moves all nodes out of the tree into a new one, leaving this one empty.
    ///
    /// This takes constant time and never touches the nodes themselves.
    ///
    /// # Example
    /// ```rust
    /// # use birch::BinaryTree;
    /// let mut tree = BinaryTree::<_>::new();
    /// tree.add_root(1);
    /// let moved = tree.take();
    /// assert!(tree.is_empty());
    /// assert_eq!(moved.iter().copied().collect::<Vec<_>>(), [1]);
    /// ```
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::new())
    }
    /// Drops every node of the tree, leaving it empty. Children are always dropped before their parents.
    pub fn clear(&mut self) {
        self.root = None;
        // Children always come after their parents in the storage
        while self.storage.pop().is_some() {}
    }

    /// Starts a traversal of the whole tree in the specified order.
    #[inline]
    pub fn traverse(&self, order: Order) -> Traversal<'_, Self> {
        Traversal::new(self, order, self.root)
    }
    /// Returns an exhausted traversal in the specified order, which any traversal of this tree compares equal to once it's done.
    #[inline]
    pub fn traversal_end(&self, order: Order) -> Traversal<'_, Self> {
        Traversal::end(self, order)
    }
    /// Returns an iterator over the values of the tree in preorder: a node, its left subtree, its right subtree.
    #[inline(always)]
    pub fn preorder(&self) -> Traversal<'_, Self> {
        self.traverse(Order::Preorder)
    }
    /// Returns an iterator over the values of the tree in inorder: a node's left subtree, the node, its right subtree.
    #[inline(always)]
    pub fn inorder(&self) -> Traversal<'_, Self> {
        self.traverse(Order::Inorder)
    }
    /// Returns an iterator over the values of the tree in postorder: a node's left subtree, its right subtree, the node.
    #[inline(always)]
    pub fn postorder(&self) -> Traversal<'_, Self> {
        self.traverse(Order::Postorder)
    }
    /// Returns an iterator over the values of the tree in the default order, which is inorder.
    #[inline(always)]
    pub fn iter(&self) -> Traversal<'_, Self> {
        self.traverse(Order::default())
    }

    /// Same as [`preorder`].
    ///
    /// [`preorder`]: #method.preorder " "
    #[inline(always)]
    pub fn begin_preorder(&self) -> Traversal<'_, Self> {
        self.preorder()
    }
    /// The end of a preorder traversal.
    #[inline(always)]
    pub fn end_preorder(&self) -> Traversal<'_, Self> {
        self.traversal_end(Order::Preorder)
    }
    /// Same as [`inorder`].
    ///
    /// [`inorder`]: #method.inorder " "
    #[inline(always)]
    pub fn begin_inorder(&self) -> Traversal<'_, Self> {
        self.inorder()
    }
    /// The end of an inorder traversal.
    #[inline(always)]
    pub fn end_inorder(&self) -> Traversal<'_, Self> {
        self.traversal_end(Order::Inorder)
    }
    /// Same as [`postorder`].
    ///
    /// [`postorder`]: #method.postorder " "
    #[inline(always)]
    pub fn begin_postorder(&self) -> Traversal<'_, Self> {
        self.postorder()
    }
    /// The end of a postorder traversal.
    #[inline(always)]
    pub fn end_postorder(&self) -> Traversal<'_, Self> {
        self.traversal_end(Order::Postorder)
    }
    /// Same as [`iter`].
    ///
    /// [`iter`]: #method.iter " "
    #[inline(always)]
    pub fn begin(&self) -> Traversal<'_, Self> {
        self.iter()
    }
    /// The end of a traversal in the default order.
    #[inline(always)]
    pub fn end(&self) -> Traversal<'_, Self> {
        self.traversal_end(Order::default())
    }

    #[inline(always)]
    pub(super) fn node(&self, key: usize) -> &Node<T> {
        debug_assert!(
            self.storage.contains_index(key),
            "debug key check failed: tried to reference key {} which is not present in the storage",
            key,
        );
        unsafe {
            // SAFETY: keys are only ever taken from links inside the tree, which always point
            // into the storage since it never shrinks while those links exist
            self.storage.get_unchecked(key)
        }
    }
    #[inline(always)]
    fn node_mut(&mut self, key: usize) -> &mut Node<T> {
        debug_assert!(
            self.storage.contains_index(key),
            "debug key check failed: tried to reference key {} which is not present in the storage",
            key,
        );
        unsafe {
            // SAFETY: as above
            self.storage.get_unchecked_mut(key)
        }
    }
}
impl<T, S> Default for BinaryTree<T, S>
where S: ListStorage<Element = Node<T>>,
{
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
impl<T, S> Clone for BinaryTree<T, S>
where
    T: Clone,
    S: ListStorage<Element = Node<T>>,
{
    /// Creates a deep copy of the tree, with every node duplicated into a fresh storage.
    fn clone(&self) -> Self {
        let mut storage = S::with_capacity(self.storage.capacity());
        // Indices are preserved, so the links can be copied verbatim
        for key in 0..self.storage.len() {
            storage.push(self.node(key).clone());
        }
        Self {
            storage,
            root: self.root,
        }
    }
    /// Replaces the nodes of the tree with copies of the nodes of `source`.
    ///
    /// The copy is built before the old nodes are dropped, so the tree is left untouched if cloning a value panics.
    fn clone_from(&mut self, source: &Self) {
        *self = source.clone();
    }
}
impl<T, S> Drop for BinaryTree<T, S>
where S: ListStorage<Element = Node<T>>,
{
    /// Drops every node, children before parents.
    fn drop(&mut self) {
        self.clear();
    }
}
impl<T, S> Display for BinaryTree<T, S>
where
    T: Display,
    S: ListStorage<Element = Node<T>>,
{
    /// Prints the value of the root node, or nothing if the tree is empty. Meant for debugging, not for serializing trees.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => Display::fmt(root.value(), f),
            None => Ok(()),
        }
    }
}
impl<'a, T, S> IntoIterator for &'a BinaryTree<T, S>
where S: ListStorage<Element = Node<T>>,
{
    type Item = &'a T;
    type IntoIter = Traversal<'a, BinaryTree<T, S>>;
    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
