use crate::bst::node::Node;
use crate::entry::Entry;
use std::borrow::Borrow;
use std::cmp;
use std::cmp::Ordering;

pub type Tree<T, U> = Option<Box<Node<T, U>>>;

/// Inserts a node into the subtree, rejecting duplicates. Returns the
/// rejected entry if the key was already present.
pub fn insert<T, U>(tree: &mut Tree<T, U>, new_node: Node<T, U>) -> Option<Entry<T, U>>
where
    T: Ord,
{
    match tree {
        Some(ref mut node) => match new_node.entry.key.cmp(&node.entry.key) {
            Ordering::Less => insert(&mut node.left, new_node),
            Ordering::Greater => insert(&mut node.right, new_node),
            Ordering::Equal => Some(new_node.entry),
        },
        None => {
            *tree = Some(Box::new(new_node));
            None
        },
    }
}

// precondition: there exists a minimum node in the tree
fn remove_min<T, U>(tree: &mut Tree<T, U>) -> Box<Node<T, U>> {
    if let Some(ref mut node) = tree {
        if node.left.is_some() {
            return remove_min(&mut node.left);
        }
    }

    match tree.take() {
        Some(mut node) => {
            *tree = node.right.take();
            node
        },
        _ => unreachable!(),
    }
}

/// Removes the node with the given key from the subtree, if there is one,
/// and returns its entry. A two-child node is replaced by its in-order
/// successor.
pub fn remove<T, U, V>(tree: &mut Tree<T, U>, key: &V) -> Option<Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut node = match tree.take() {
        Some(node) => node,
        None => return None,
    };

    match key.cmp(node.entry.key.borrow()) {
        Ordering::Less => {
            let removed = remove(&mut node.left, key);
            *tree = Some(node);
            removed
        },
        Ordering::Greater => {
            let removed = remove(&mut node.right, key);
            *tree = Some(node);
            removed
        },
        Ordering::Equal => {
            let Node { entry, left, right } = *node;
            *tree = match (left, right) {
                (None, right) => right,
                (left, None) => left,
                (left, mut right) => {
                    let mut successor = remove_min(&mut right);
                    successor.left = left;
                    successor.right = right;
                    Some(successor)
                },
            };
            Some(entry)
        },
    }
}

pub fn get<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => get(&node.left, key),
            Ordering::Greater => get(&node.right, key),
            Ordering::Equal => Some(&node.entry),
        }
    })
}

/// The number of nodes on the longest path from the subtree root to a leaf.
/// An empty subtree has depth zero.
pub fn depth<T, U>(tree: &Tree<T, U>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => 1 + cmp::max(depth(&node.left), depth(&node.right)),
    }
}
