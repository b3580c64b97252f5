//! Iterators walking an [`OrderedTree`][crate::OrderedTree] depth-first (in-order, pre-order and
//! post-order) or breadth-first. All of them are driven by an explicit stack or queue rather
//! than recursion, so a degenerate tree (a chain) can't overflow the call stack. The depth-first
//! ones hold at most `O(height)` pending nodes, the breadth-first one at most `O(width)`.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::ordered::TreeNode;

/// Yields elements in ascending order. See [`OrderedTree::inorder`][crate::OrderedTree::inorder].
pub struct Inorder<'a, E> {
    /// Nodes whose left subtree has been (or is being) visited but which haven't been yielded.
    stack: Vec<&'a TreeNode<E>>,
}

impl<'a, E> Inorder<'a, E> {
    pub(crate) fn new(root: Option<&'a TreeNode<E>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    /// Pushes `node` and all of its left descendants.
    fn push_left_spine(&mut self, mut node: Option<&'a TreeNode<E>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, E> Iterator for Inorder<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.element())
    }
}

impl<E> FusedIterator for Inorder<'_, E> {}

/// Yields each node's element before the elements of its subtrees. See
/// [`OrderedTree::preorder`][crate::OrderedTree::preorder].
pub struct Preorder<'a, E> {
    stack: Vec<&'a TreeNode<E>>,
}

impl<'a, E> Preorder<'a, E> {
    pub(crate) fn new(root: Option<&'a TreeNode<E>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, E> Iterator for Preorder<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right first so the left subtree is popped first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node.element())
    }
}

impl<E> FusedIterator for Preorder<'_, E> {}

/// Yields each node's element after the elements of its subtrees. See
/// [`OrderedTree::postorder`][crate::OrderedTree::postorder].
pub struct Postorder<'a, E> {
    /// Pending nodes, flagged with whether their children have already been pushed.
    stack: Vec<(&'a TreeNode<E>, bool)>,
}

impl<'a, E> Postorder<'a, E> {
    pub(crate) fn new(root: Option<&'a TreeNode<E>>) -> Self {
        Self {
            stack: root.map(|n| (n, false)).into_iter().collect(),
        }
    }
}

impl<'a, E> Iterator for Postorder<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(node.element());
            }

            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }
    }
}

impl<E> FusedIterator for Postorder<'_, E> {}

/// Yields elements level by level. See
/// [`OrderedTree::breadth_first`][crate::OrderedTree::breadth_first].
pub struct BreadthFirst<'a, E> {
    queue: VecDeque<&'a TreeNode<E>>,
}

impl<'a, E> BreadthFirst<'a, E> {
    pub(crate) fn new(root: Option<&'a TreeNode<E>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, E> Iterator for BreadthFirst<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node.element())
    }
}

impl<E> FusedIterator for BreadthFirst<'_, E> {}

#[cfg(test)]
mod tests {
    use crate::OrderedTree;

    fn example_tree() -> OrderedTree<i32> {
        OrderedTree::from([5, 3, 8, 1, 4, 7, 9])
    }

    #[test]
    fn empty_tree_yields_nothing() {
        let tree = OrderedTree::<i32>::new();

        assert_eq!(tree.inorder().next(), None);
        assert_eq!(tree.preorder().next(), None);
        assert_eq!(tree.postorder().next(), None);
        assert_eq!(tree.breadth_first().next(), None);
    }

    #[test]
    fn inorder_is_sorted() {
        let tree = example_tree();

        assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 7, 8, 9]);
    }

    #[test]
    fn preorder_follows_structure() {
        let tree = example_tree();

        assert_eq!(tree.preorder().copied().collect::<Vec<_>>(), [5, 3, 1, 4, 8, 7, 9]);
    }

    #[test]
    fn postorder_follows_structure() {
        let tree = example_tree();

        assert_eq!(tree.postorder().copied().collect::<Vec<_>>(), [1, 4, 3, 7, 9, 8, 5]);
    }

    #[test]
    fn breadth_first_is_level_order() {
        let tree = example_tree();

        assert_eq!(tree.breadth_first().copied().collect::<Vec<_>>(), [5, 3, 8, 1, 4, 7, 9]);
    }

    #[test]
    fn lopsided_tree() {
        //   4
        //  /
        // 2
        //  \
        //   3
        let tree = OrderedTree::from([4, 2, 3]);

        assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [2, 3, 4]);
        assert_eq!(tree.preorder().copied().collect::<Vec<_>>(), [4, 2, 3]);
        assert_eq!(tree.postorder().copied().collect::<Vec<_>>(), [3, 2, 4]);
        assert_eq!(tree.breadth_first().copied().collect::<Vec<_>>(), [4, 2, 3]);
    }

    #[test]
    fn exhausted_iterators_stay_exhausted() {
        let tree = OrderedTree::from([1]);
        let mut iter = tree.postorder();

        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }
}
