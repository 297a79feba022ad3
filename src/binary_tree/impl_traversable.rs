use crate::{
    storage::ListStorage,
    traversal::Traversable,
};
use super::*;

impl<T, S> Traversable for BinaryTree<T, S>
where S: ListStorage<Element = Node<T>>,
{
    type Value = T;
    type Cursor = usize;

    #[inline(always)]
    fn cursor_to_root(&self) -> Option<Self::Cursor> {
        self.root
    }
    #[track_caller]
    fn value_of(&self, cursor: Self::Cursor) -> &Self::Value {
        let node_ref = NodeRef::new_raw(self, cursor)
            .unwrap_or_else(|| panic!("invalid cursor: {:?}", cursor));
        node_ref.value()
    }
    #[track_caller]
    fn parent_of(&self, cursor: Self::Cursor) -> Option<Self::Cursor> {
        let node_ref = NodeRef::new_raw(self, cursor)
            .unwrap_or_else(|| panic!("invalid cursor: {:?}", cursor));
        node_ref.parent().map(NodeRef::into_raw_key)
    }
    #[track_caller]
    fn left_child_of(&self, cursor: Self::Cursor) -> Option<Self::Cursor> {
        let node_ref = NodeRef::new_raw(self, cursor)
            .unwrap_or_else(|| panic!("invalid cursor: {:?}", cursor));
        node_ref.left_child().map(NodeRef::into_raw_key)
    }
    #[track_caller]
    fn right_child_of(&self, cursor: Self::Cursor) -> Option<Self::Cursor> {
        let node_ref = NodeRef::new_raw(self, cursor)
            .unwrap_or_else(|| panic!("invalid cursor: {:?}", cursor));
        node_ref.right_child().map(NodeRef::into_raw_key)
    }
}
