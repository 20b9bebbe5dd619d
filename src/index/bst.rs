use crate::index::tree::{Keyed, Tree};
use std::cmp::Ordering;

/// Unbalanced binary search tree
///
/// ```
///          +------+
///          | CS250|
///          +------+
///         /        \
///   +------+      +------+
///   | CS101|      | CS300|
///   +------+      +------+
///                /
///          +------+
///          | CS250|  <- equal keys are routed right
///          +------+
/// ```
///
/// Left subtree keys < node key <= right subtree keys. The shape only
/// depends on the insertion order, there is no rebalancing.
#[derive(Debug)]
pub struct BinarySearchTree<T> {
    root: Link<T>,
    len: usize,
}

type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug)]
struct Node<T> {
    val: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new(val: T) -> Node<T> {
        Node {
            val,
            left: None,
            right: None,
        }
    }
}

impl<T: Keyed + Clone> BinarySearchTree<T> {
    pub fn new() -> BinarySearchTree<T> {
        BinarySearchTree { root: None, len: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// In-order iterator, values come out sorted by key.
    /// Equal keys come out in insertion order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref(), self.len)
    }

    fn remove_node(node: Link<T>, key: &str, len: &mut usize) -> Link<T> {
        let mut node = node?;
        match key.cmp(node.val.key()) {
            Ordering::Less => {
                node.left = Self::remove_node(node.left.take(), key, len);
                Some(node)
            }
            Ordering::Greater => {
                node.right = Self::remove_node(node.right.take(), key, len);
                Some(node)
            }
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, None) => {
                    *len -= 1;
                    None
                }
                (Some(child), None) | (None, Some(child)) => {
                    *len -= 1;
                    Some(child)
                }
                (Some(left), Some(right)) => {
                    // the node keeps its links, only the payload is replaced by the
                    // successor; the nested removal accounts for `len`
                    node.val = Self::leftmost(&right).clone();
                    node.right = Self::remove_node(Some(right), node.val.key(), len);
                    node.left = Some(left);
                    Some(node)
                }
            },
        }
    }

    fn leftmost(node: &Node<T>) -> &T {
        let mut cur = node;
        while let Some(ref left) = cur.left {
            cur = left;
        }
        &cur.val
    }
}

impl<T: Keyed + Clone> Tree<T> for BinarySearchTree<T> {
    fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<T>, usize)> = vec![];
        stack.extend(self.root.as_deref().map(|n| (n, 1)));
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        height
    }

    fn len(&self) -> usize {
        self.len
    }

    fn insert(&mut self, val: T) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if val.key() < node.val.key() {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        debug!("insert `{}`", val.key());
        *slot = Some(Box::new(Node::new(val)));
        self.len += 1;
    }

    fn delete(&mut self, key: &str) -> bool {
        let before = self.len;
        self.root = Self::remove_node(self.root.take(), key, &mut self.len);
        let removed = self.len < before;
        debug!("delete `{}`: {}", key, if removed { "removed" } else { "not found" });
        removed
    }

    fn search(&self, key: &str) -> Option<&T> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            cur = match key.cmp(node.val.key()) {
                Ordering::Equal => return Some(&node.val),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }
}

impl<T: Keyed + Clone> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

// sorted input degenerates into a list, so nodes are freed without recursion
impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>, len: usize) -> Iter<'a, T> {
        let mut iter = Iter {
            stack: vec![],
            remaining: len,
        };
        iter.push_left(root);
        iter
    }

    fn push_left(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.val)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: Keyed + Clone> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
