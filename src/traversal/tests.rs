use super::*;
use alloc::{format, vec};

/// A complete binary tree laid out like a binary heap: the children of `i` are `2i + 1` and `2i + 2`.
#[derive(Debug)]
struct Heap(Vec<u32>);
impl Traversable for Heap {
    type Value = u32;
    type Cursor = usize;

    fn cursor_to_root(&self) -> Option<usize> {
        if self.0.is_empty() { None } else { Some(0) }
    }
    fn value_of(&self, cursor: usize) -> &u32 {
        &self.0[cursor]
    }
    fn parent_of(&self, cursor: usize) -> Option<usize> {
        if cursor == 0 { None } else { Some((cursor - 1) / 2) }
    }
    fn left_child_of(&self, cursor: usize) -> Option<usize> {
        Some(2 * cursor + 1).filter(|&x| x < self.0.len())
    }
    fn right_child_of(&self, cursor: usize) -> Option<usize> {
        Some(2 * cursor + 2).filter(|&x| x < self.0.len())
    }
}

/// A tree where every node only has a right child.
#[derive(Debug)]
struct Spine(usize);
impl Traversable for Spine {
    type Value = ();
    type Cursor = usize;

    fn cursor_to_root(&self) -> Option<usize> {
        if self.0 == 0 { None } else { Some(0) }
    }
    fn value_of(&self, _: usize) -> &() {
        &()
    }
    fn parent_of(&self, cursor: usize) -> Option<usize> {
        cursor.checked_sub(1)
    }
    fn left_child_of(&self, _: usize) -> Option<usize> {
        None
    }
    fn right_child_of(&self, cursor: usize) -> Option<usize> {
        Some(cursor + 1).filter(|&x| x < self.0)
    }
}

fn collect(heap: &Heap, order: Order) -> Vec<u32> {
    heap.traverse(order).copied().collect()
}

#[test]
fn orders() {
    //        1
    //     2     3
    //    4 5   6 7
    let heap = Heap(vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(collect(&heap, Order::Preorder), [1, 2, 4, 5, 3, 6, 7]);
    assert_eq!(collect(&heap, Order::Inorder), [4, 2, 5, 1, 6, 3, 7]);
    assert_eq!(collect(&heap, Order::Postorder), [4, 5, 2, 6, 7, 3, 1]);
}

#[test]
fn every_visited_node_leads_back_to_the_root() {
    let heap = Heap(vec![1, 2, 3, 4, 5, 6, 7]);
    let mut traversal = heap.traverse(Order::Postorder);
    assert_eq!(traversal.order(), Order::Postorder);
    assert!(core::ptr::eq(traversal.traversable(), &heap));
    while let Some(mut cursor) = traversal.cursor() {
        let heap = traversal.traversable();
        let mut depth = 0;
        while let Some(parent) = heap.parent_of(cursor) {
            let children = [heap.left_child_of(parent), heap.right_child_of(parent)];
            assert!(children.contains(&Some(cursor)));
            cursor = parent;
            depth += 1;
        }
        assert_eq!(Some(cursor), heap.cursor_to_root());
        assert!(depth <= 2);
        traversal.advance();
    }
    assert!(traversal.is_end());
}

#[test]
fn default_order_is_inorder() {
    assert_eq!(Order::default(), Order::Inorder);
}

#[test]
fn subtree() {
    let heap = Heap(vec![1, 2, 3, 4, 5, 6, 7]);
    let values = Traversal::new(&heap, Order::Postorder, Some(2))
        .copied()
        .collect::<Vec<_>>();
    assert_eq!(values, [6, 7, 3]);
}

#[test]
fn empty_start_is_exhausted() {
    let heap = Heap(vec![]);
    for &order in &[Order::Preorder, Order::Inorder, Order::Postorder] {
        let traversal = heap.traverse(order);
        assert!(traversal.is_end());
        assert_eq!(traversal.get(), None);
        assert_eq!(traversal, Traversal::end(&heap, order));
    }
}

#[test]
fn manual_stepping() {
    let heap = Heap(vec![1, 2, 3]);
    let end = Traversal::end(&heap, Order::Inorder);
    let mut traversal = heap.traverse(Order::Inorder);
    let mut seen = Vec::new();
    while traversal != end {
        seen.push(*traversal.get().expect("not at the end"));
        traversal.advance();
    }
    assert_eq!(seen, [2, 1, 3]);
    // Stepping past the end keeps the traversal at the end
    traversal.advance();
    assert!(traversal.is_end());
}

#[test]
fn post_advance_returns_previous_position() {
    let heap = Heap(vec![1, 2, 3]);
    let mut traversal = heap.traverse(Order::Preorder);
    let previous = traversal.post_advance();
    assert_eq!(previous.get(), Some(&1));
    assert_eq!(traversal.get(), Some(&2));
    // The copy is independent and can be stepped on its own
    let mut previous = previous;
    previous.advance();
    assert_eq!(previous, traversal);
}

#[test]
fn equality_is_positional() {
    let heap = Heap(vec![1, 2, 3]);
    let other_heap = Heap(vec![1, 2, 3]);
    let a = heap.traverse(Order::Inorder);
    let b = heap.traverse(Order::Inorder);
    assert_eq!(a, b);
    // Same cursor, different traversable
    assert_ne!(a, other_heap.traverse(Order::Inorder));
    // Different position
    assert_ne!(a, heap.traverse(Order::Preorder));
    // Exhausted traversals are equal regardless of where they came from
    assert_eq!(Traversal::end(&heap, Order::Inorder), Traversal::end(&other_heap, Order::Inorder));
}

#[test]
fn exact_size() {
    let heap = Heap(vec![1, 2, 3, 4, 5]);
    let mut traversal = heap.traverse(Order::Postorder);
    assert_eq!(traversal.len(), 5);
    traversal.next();
    traversal.next();
    assert_eq!(traversal.len(), 3);
    assert_eq!(traversal.by_ref().count(), 3);
    assert_eq!(traversal.len(), 0);
    assert_eq!(traversal.next(), None);
}

#[test]
fn deep_tree_does_not_overflow() {
    let spine = Spine(200_000);
    for &order in &[Order::Preorder, Order::Inorder, Order::Postorder] {
        assert_eq!(spine.traverse(order).count(), 200_000);
    }
    // Postorder starts at the bottom of the spine
    assert_eq!(spine.traverse(Order::Postorder).cursor(), Some(199_999));
    assert_eq!(spine.traverse(Order::Preorder).cursor(), Some(0));
}

#[test]
fn order_display() {
    assert_eq!(format!("{}", Order::Preorder), "preorder");
    assert_eq!(format!("{:>9}", Order::Inorder), "  inorder");
    assert_eq!(format!("{}", Order::Postorder), "postorder");
}
