/// A node of a binary tree.
///
/// Created by the binary tree internally and only publicly exposed so that binary tree storages' generic arguments could be specified.
#[derive(Copy, Clone, Debug, Hash)]
pub struct Node<T> {
    pub(super) value: T,
    pub(super) left_child: Option<usize>,
    pub(super) right_child: Option<usize>,
    pub(super) parent: Option<usize>,
}
impl<T> Node<T> {
    /// Creates a childless node.
    ///
    /// The parent index is only recorded here; linking the node into the parent's child slot is up to the caller.
    #[inline(always)]
    pub(super) const fn leaf(value: T, parent: Option<usize>) -> Self {
        Self {
            value,
            left_child: None,
            right_child: None,
            parent,
        }
    }
    /// Creates a root node.
    #[inline(always)]
    pub(super) const fn root(value: T) -> Self {
        Self::leaf(value, None)
    }

    #[inline(always)]
    pub(super) fn child(&self, side: Side) -> Option<usize> {
        match side {
            Side::Left => self.left_child,
            Side::Right => self.right_child,
        }
    }
    #[inline(always)]
    pub(super) fn child_slot(&mut self, side: Side) -> &mut Option<usize> {
        match side {
            Side::Left => &mut self.left_child,
            Side::Right => &mut self.right_child,
        }
    }
}

/// Which of the two child slots of a node an operation works on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(super) enum Side {
    Left,
    Right,
}
impl Side {
    #[cfg(feature = "tracing")]
    pub(super) const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}
