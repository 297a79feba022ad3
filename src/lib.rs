//! An arena-allocated binary tree which is grown by naming the value of the parent node, and read back through preorder, inorder and postorder traversals.
//!
//! ------------------------
//!
//! # Overview
//! Birch stores the nodes of a [`BinaryTree`] in an "arena": a list-like backing storage, a [`Vec`] by default, where nodes refer to their children and their parent by index instead of by pointer. The tree owns the arena, so copying, moving and dropping a tree copies, moves and drops every node with it, and there is no way to share a node between two parents or to build a cycle.
//!
//! Nodes are never addressed by index from the outside when growing the tree. Instead, [`add_left`] and [`add_right`] look up the parent by *value*, scanning the tree in inorder and picking the first node which compares equal to the key. Keys are therefore best kept unique; with duplicates, the first one in inorder wins.
//!
//! ```rust
//! use birch::BinaryTree;
//!
//! let mut tree = BinaryTree::<_>::new();
//! tree.add_root(1)
//!     .add_left(&1, 2)?
//!     .add_right(&1, 3)?
//!     .add_left(&2, 4)?;
//!
//! assert_eq!(tree.preorder().copied().collect::<Vec<_>>(), [1, 2, 4, 3]);
//! assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [4, 2, 1, 3]);
//! assert_eq!(tree.postorder().copied().collect::<Vec<_>>(), [4, 2, 3, 1]);
//! # Ok::<(), birch::ParentNotFound>(())
//! ```
//!
//! # Traversal
//! Traversals are performed by [`Traversal`], which computes the whole visitation order up front when it's created and then hands out nodes one by one. This costs memory proportional to the size of the subtree being traversed, but makes all three orders work the same way and keeps stepping constant-time. See the [`traversal`] module for more.
//!
//! # Storage
//! The trait used for defining the arena type is [`ListStorage`]. It's implemented for [`Vec`] and [`ArrayVec`]; the latter gives a fixed-capacity tree which never allocates.
//!
//! # Feature flags
//! - `std` (**enabled by default**) — enables the full standard library, disabling `no_std` for the crate. Currently, this only adds [`Error`] trait implementations for the error types. An allocator is required either way.
//! - `tracing` — emits `tracing` events whenever the tree is mutated or a parent lookup fails.
//! - `doc_cfg` — annotates feature-gated items in the documentation. **Requires a nightly compiler.**
//!
//! # Public dependencies
//! - `arrayvec` (**required**) — `^0.5`
//! - `tracing` (*optional*) — `^0.1`
//!
//! [`BinaryTree`]: binary_tree/struct.BinaryTree.html " "
//! [`add_left`]: binary_tree/struct.BinaryTree.html#method.add_left " "
//! [`add_right`]: binary_tree/struct.BinaryTree.html#method.add_right " "
//! [`Traversal`]: traversal/struct.Traversal.html " "
//! [`traversal`]: traversal/index.html " "
//! [`ListStorage`]: storage/trait.ListStorage.html " "
//! [`Error`]: https://doc.rust-lang.org/std/error/trait.Error.html " "
//! [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html " "
//! [`ArrayVec`]: https://docs.rs/arrayvec/*/arrayvec/struct.ArrayVec.html " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::copy_iterator,
    clippy::expl_impl_clone_on_copy,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::fn_params_excessive_bools,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::items_after_statements,
    clippy::large_stack_arrays,
    clippy::let_unit_value,
    clippy::macro_use_imports,
    clippy::match_same_arms,
    clippy::match_wildcard_for_single_variants,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::too_many_lines,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![allow(clippy::use_self)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

extern crate alloc;

#[macro_use]
pub(crate) mod util;

pub mod storage;
#[doc(no_inline)]
pub use storage::{ListStorage, DefaultStorage};

pub mod binary_tree;
pub use binary_tree::BinaryTree;

pub mod traversal;
pub use traversal::{Order, Traversable, Traversal};

/// A prelude for using Birch, containing the most used types in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::storage::{
        ListStorage as TreeStorage,
        DefaultStorage as DefaultTreeStorage,
    };
    #[doc(no_inline)]
    pub use crate::binary_tree::{
        BinaryTree,
        NodeRef as BinaryTreeNodeRef,
    };
    #[doc(no_inline)]
    pub use crate::traversal::{
        Order as TraversalOrder,
        Traversal as TreeTraversal,
    };
    #[doc(no_inline)]
    pub use crate::ParentNotFound;
}

use core::fmt::{self, Formatter, Display};

/// The error type returned by methods on trees which attach a child to a parent looked up by its value, which occurs when no node in the tree has that value.
///
/// The tree is left exactly as it was before the failed call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ParentNotFound;
impl Display for ParentNotFound {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad("parent not found")
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for ParentNotFound {}
