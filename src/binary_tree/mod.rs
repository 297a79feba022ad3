//! Trees which allow at most two children for their nodes, grown by naming the value of the parent.
//!
//! The [Wikipedia article] on binary trees covers their use cases and specifics in more detail.
//!
//! A [`BinaryTree`] starts out empty. [`add_root`] gives it a root node, or replaces the root's value if there already is one. [`add_left`] and [`add_right`] look up a parent node by value and give it a child on the respective side; if the parent already has a child there, only that child's value is replaced, so everything below it stays attached. The tree never removes nodes on its own: they all live until the tree is dropped, cleared or overwritten with a copy of another tree.
//!
//! # Example
//! ```rust
//! use birch::binary_tree::{BinaryTree, NodeRef};
//!
//! // Create the tree. The turbofish there is needed to state that we are using the default
//! // storage method instead of asking the compiler to infer it, which would be impossible.
//! let mut tree = BinaryTree::<_>::new();
//! tree.add_root("Hello".to_string())
//!     .add_left("Hello", "World".to_string())?
//!     .add_right("Hello", "Rust".to_string())?;
//!
//! // Let's now try to access the structure of the tree and look around.
//! let root = tree.root().expect("the tree has a root now");
//! assert!(root.is_root());
//! let children = root.children();
//! assert_eq!(children.len(), 2);
//! assert_eq!(children[0].value(), "World");
//! assert_eq!(children[1].value(), "Rust");
//!
//! // Every node knows its parent:
//! let rust: NodeRef<'_, _> = tree.find("Rust").expect("just added it");
//! assert_eq!(rust.parent(), Some(root));
//! assert_eq!(rust.is_left_child(), Some(false));
//!
//! // And the whole tree can be walked in any of the three orders:
//! let words = tree.preorder().map(String::as_str).collect::<Vec<_>>();
//! assert_eq!(words, ["Hello", "World", "Rust"]);
//! # Ok::<(), birch::ParentNotFound>(())
//! ```
//!
//! [Wikipedia article]: https://en.wikipedia.org/wiki/Binary_tree " "
//! [`BinaryTree`]: struct.BinaryTree.html " "
//! [`add_root`]: struct.BinaryTree.html#method.add_root " "
//! [`add_left`]: struct.BinaryTree.html#method.add_left " "
//! [`add_right`]: struct.BinaryTree.html#method.add_right " "

mod base;
mod impl_traversable;
mod node;
mod node_ref;

use alloc::vec::Vec;
use node::Side;
pub use node::Node;
pub use node_ref::NodeRef;
pub use base::BinaryTree;

/// A binary tree which uses a `Vec` as backing storage.
///
/// The default `BinaryTree` type already uses this, so this is only provided for explicitness and consistency.
pub type VecBinaryTree<T> = BinaryTree<T, Vec<Node<T>>>;
/// A binary tree which uses an `ArrayVec` as backing storage, holding at most `A::CAPACITY` nodes and never allocating.
///
/// Adding a node to a full tree panics.
pub type ArrayBinaryTree<T, A> = BinaryTree<T, arrayvec::ArrayVec<A>>;
