//! An ordered set backed by a plain (never rebalanced) Binary Search Tree. Every node exclusively
//! owns its two children through a `Box`, so the tree can never turn into a DAG and nodes are
//! freed as soon as they are unlinked.
//!
//! Operations that edit the structure (`insert` and `delete`) don't store parent pointers.
//! Instead they walk a mutable cursor over the links on the way down: the link the cursor points
//! at is the parent's pointer to the current node, which is all a structural edit needs.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.search(&1));
//!
//! // The first insertion wins, later equal insertions are rejected.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! assert!(tree.delete(&1));
//! assert!(!tree.search(&1));
//! assert!(tree.is_empty());
//! ```
//!
//! # Ordering contract
//!
//! All operations rely on `E`'s [`Ord`] implementation being a consistent total order. If it
//! isn't, elements may become unreachable and traversals may not come out sorted. Nothing here
//! tries to detect that; it is the caller's responsibility.
//!
//! # Complexity
//!
//! `search`, `insert` and `delete` are `O(height)`. Since the tree never rebalances, inserting
//! already sorted input produces a chain and all three degrade to `O(n)`.
//!
//! # Threads
//!
//! There is no internal locking. Sharing a tree that is being mutated across threads requires
//! external synchronisation such as a `Mutex`.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

use tracing::trace;

use crate::traversal::{BreadthFirst, Inorder, Postorder, Preorder};

/// An owning pointer to a subtree. `None` is the empty spot below a leaf.
type Link<E> = Option<Box<TreeNode<E>>>;

/// A single node of an [`OrderedTree`]. It holds one element and owns up to two children.
///
/// Nodes are only handed out by shared reference (see [`OrderedTree::root`]) so that callers can
/// inspect the shape of a tree without being able to break its ordering.
pub struct TreeNode<E> {
    element: E,
    left: Link<E>,
    right: Link<E>,
}

impl<E> TreeNode<E> {
    fn new(element: E) -> Self {
        Self {
            element,
            left: None,
            right: None,
        }
    }

    /// The element stored in this node.
    pub fn element(&self) -> &E {
        &self.element
    }

    /// The root of the subtree holding every element less than this node's element.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the subtree holding every element greater than this node's element.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// The child link a descent continues through after comparing `Less` or `Greater` against
    /// this node.
    fn child_mut(&mut self, ordering: Ordering) -> &mut Link<E> {
        match ordering {
            Ordering::Less => &mut self.left,
            Ordering::Equal | Ordering::Greater => &mut self.right,
        }
    }
}

/// Prints the node's element and its children's elements, not whole subtrees, so formatting a
/// node of a long chain can't overflow the stack.
impl<E> fmt::Debug for TreeNode<E>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeNode")
            .field("element", &self.element)
            .field("left", &self.left().map(TreeNode::element))
            .field("right", &self.right().map(TreeNode::element))
            .finish()
    }
}

/// A Binary Search Tree holding distinct elements in ascending order. This can be used for
/// inserting, searching and deleting elements and for walking them depth-first or breadth-first.
pub struct OrderedTree<E> {
    root: Link<E>,
    /// Number of nodes reachable from `root`.
    len: usize,
}

impl<E> Default for OrderedTree<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Drop for OrderedTree<E> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<E> OrderedTree<E> {
    /// Generates a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns the number of elements in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if any. Useful to inspect the shape of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from([2, 1, 3]);
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(root.element(), &2);
    /// assert_eq!(root.left().map(|n| n.element()), Some(&1));
    /// assert_eq!(root.right().map(|n| n.element()), Some(&3));
    /// ```
    pub fn root(&self) -> Option<&TreeNode<E>> {
        self.root.as_deref()
    }

    /// Removes every element from the tree.
    pub fn clear(&mut self) {
        let released = self.len;
        self.release();
        trace!(released, "cleared tree");
    }

    /// Returns the smallest element, found by following left children from the root.
    pub fn min(&self) -> Option<&E> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(&node.element)
    }

    /// Returns the largest element, found by following right children from the root.
    pub fn max(&self) -> Option<&E> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(&node.element)
    }

    /// Gets the height of this tree, i.e. the number of nodes on the longest path from the root
    /// to a leaf. An empty tree has a height of 0.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut queue: VecDeque<(&TreeNode<E>, usize)> = VecDeque::new();
        queue.extend(self.root().map(|n| (n, 1)));

        while let Some((node, depth)) = queue.pop_front() {
            height = height.max(depth);
            queue.extend(node.left().map(|n| (n, depth + 1)));
            queue.extend(node.right().map(|n| (n, depth + 1)));
        }

        height
    }

    /// Visits elements in ascending order (left subtree, node, right subtree).
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from([5, 3, 8, 1, 4, 7, 9]);
    /// let sorted: Vec<_> = tree.inorder().copied().collect();
    ///
    /// assert_eq!(sorted, [1, 3, 4, 5, 7, 8, 9]);
    /// ```
    pub fn inorder(&self) -> Inorder<'_, E> {
        Inorder::new(self.root())
    }

    /// Visits each node before its subtrees (node, left subtree, right subtree).
    pub fn preorder(&self) -> Preorder<'_, E> {
        Preorder::new(self.root())
    }

    /// Visits each node after its subtrees (left subtree, right subtree, node).
    pub fn postorder(&self) -> Postorder<'_, E> {
        Postorder::new(self.root())
    }

    /// Visits nodes level by level, shallowest first and left to right within a level.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from([5, 3, 8, 1, 4, 7, 9]);
    /// let levels: Vec<_> = tree.breadth_first().copied().collect();
    ///
    /// assert_eq!(levels, [5, 3, 8, 1, 4, 7, 9]);
    /// ```
    pub fn breadth_first(&self) -> BreadthFirst<'_, E> {
        BreadthFirst::new(self.root())
    }

    /// Same as [`OrderedTree::inorder`].
    pub fn iter(&self) -> Inorder<'_, E> {
        self.inorder()
    }

    /// Drops every node without recursing so that a long chain can't overflow the stack.
    fn release(&mut self) {
        let mut pending: Vec<Box<TreeNode<E>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.len = 0;
    }
}

impl<E> OrderedTree<E>
where
    E: Ord,
{
    /// Returns `true` if an element equal to `element` is in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from([2, 1, 3]);
    ///
    /// assert!(tree.search(&3));
    /// assert!(!tree.search(&42));
    /// ```
    pub fn search(&self, element: &E) -> bool {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match element.cmp(&node.element) {
                Ordering::Less => &node.left,
                Ordering::Equal => return true,
                Ordering::Greater => &node.right,
            };
        }
        false
    }

    /// Same as [`OrderedTree::search`].
    pub fn contains(&self, element: &E) -> bool {
        self.search(element)
    }

    /// Inserts `element` into the tree. Returns `false` and leaves the tree untouched if an equal
    /// element is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, element: E) -> bool {
        let link = self.locate(&element);
        if link.is_some() {
            trace!("rejected duplicate element");
            return false;
        }

        *link = Some(Box::new(TreeNode::new(element)));
        self.len += 1;
        trace!(len = self.len, "attached new node");
        true
    }

    /// Removes the element equal to `element` from the tree. Returns `false` if there is no such
    /// element.
    ///
    /// A node without a left child is replaced by its right subtree. Otherwise the node stays in
    /// place and takes over the element of its in-order predecessor (the rightmost node of its
    /// left subtree), and it's the predecessor's node that gets unlinked.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::from([5, 3, 8, 1, 4, 7, 9]);
    ///
    /// assert!(tree.delete(&5));
    /// assert!(!tree.delete(&5));
    ///
    /// // The root now holds 5's predecessor.
    /// assert_eq!(tree.root().map(|n| n.element()), Some(&4));
    /// assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [1, 3, 4, 7, 8, 9]);
    /// ```
    pub fn delete(&mut self, element: &E) -> bool {
        let link = self.locate(element);
        let Some(current) = link.as_deref_mut() else {
            return false;
        };

        match detach_rightmost(&mut current.left) {
            None => {
                *link = current.right.take();
                trace!("spliced out node without a left child");
            }
            Some(predecessor) => {
                current.element = predecessor.element;
                trace!("promoted in-order predecessor");
            }
        }

        self.len -= 1;
        true
    }

    /// Descends from the root comparing against `element`. Returns the link owning the node equal
    /// to `element`, or the empty link where such a node would have to be attached.
    fn locate(&mut self, element: &E) -> &mut Link<E> {
        let mut link = &mut self.root;
        loop {
            let ordering = match link.as_deref() {
                Some(node) => element.cmp(&node.element),
                None => break,
            };
            if ordering == Ordering::Equal {
                break;
            }

            link = match link {
                Some(node) => node.child_mut(ordering),
                None => break,
            };
        }
        link
    }
}

/// Unlinks the rightmost node of the subtree owned by `link` and moves that node's left subtree
/// into the vacated spot. Returns `None` if the subtree is empty.
fn detach_rightmost<E>(mut link: &mut Link<E>) -> Option<Box<TreeNode<E>>> {
    while link.as_ref().is_some_and(|node| node.right.is_some()) {
        link = match link {
            Some(node) => &mut node.right,
            None => break,
        };
    }

    let mut rightmost = link.take()?;
    // Being rightmost, it has no right child.
    *link = rightmost.left.take();
    Some(rightmost)
}

impl<E> Clone for OrderedTree<E>
where
    E: Clone + Ord,
{
    // Inserting in pre-order rebuilds exactly the same shape.
    fn clone(&self) -> Self {
        self.preorder().cloned().collect()
    }
}

impl<E> fmt::Debug for OrderedTree<E>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inorder()).finish()
    }
}

impl<E> Extend<E> for OrderedTree<E>
where
    E: Ord,
{
    /// Inserts every element in order. Duplicates are skipped.
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<E> FromIterator<E> for OrderedTree<E>
where
    E: Ord,
{
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<E, const N: usize> From<[E; N]> for OrderedTree<E>
where
    E: Ord,
{
    fn from(elements: [E; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<E> From<Vec<E>> for OrderedTree<E>
where
    E: Ord,
{
    fn from(elements: Vec<E>) -> Self {
        elements.into_iter().collect()
    }
}

impl<'a, E> IntoIterator for &'a OrderedTree<E> {
    type Item = &'a E;
    type IntoIter = Inorder<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder()
    }
}
