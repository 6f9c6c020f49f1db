use crate::avl::node::Node;
use crate::entry::Entry;
use std::borrow::Borrow;
use std::cmp;
use std::cmp::Ordering;

pub type Tree<T, U> = Option<Box<Node<T, U>>>;

// Both rotations consume the subtree root and return the new one. The
// balance updates are exact, so they hold for deletions as well, where the
// rotated child may start out balanced.
fn rotate_left<T, U>(mut node: Box<Node<T, U>>) -> Box<Node<T, U>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.balance += 1 - cmp::min(child.balance, 0);
    child.balance += 1 + cmp::max(node.balance, 0);
    child.left = Some(node);
    child
}

fn rotate_right<T, U>(mut node: Box<Node<T, U>>) -> Box<Node<T, U>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.balance -= 1 + cmp::max(child.balance, 0);
    child.balance -= 1 - cmp::min(node.balance, 0);
    child.right = Some(node);
    child
}

// Repairs the subtree root after an insert or remove changed the height of
// one of its children. A heavy child leaning the other way is rotated into
// position first, then a single rotation fixes the root.
fn rebalance<T, U>(tree: &mut Tree<T, U>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    if node.balance > 1 {
        if let Some(child) = node.left.take() {
            if child.balance < 0 {
                node.left = Some(rotate_left(child));
            } else {
                node.left = Some(child);
            }
        }
        node = rotate_right(node);
    } else if node.balance < -1 {
        if let Some(child) = node.right.take() {
            if child.balance > 0 {
                node.right = Some(rotate_right(child));
            } else {
                node.right = Some(child);
            }
        }
        node = rotate_left(node);
    }

    debug_assert!(node.balance >= -1 && node.balance <= 1);
    *tree = Some(node);
}

// precondition: there exists a minimum node in the tree
fn remove_min<T, U>(tree: &mut Tree<T, U>) -> (Box<Node<T, U>>, bool) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => unreachable!(),
    };

    if node.left.is_none() {
        *tree = node.right.take();
        return (node, true);
    }

    let (min, shrank) = remove_min(&mut node.left);
    if shrank {
        node.balance -= 1;
    }
    *tree = Some(node);
    if !shrank {
        return (min, false);
    }
    rebalance(tree);
    let shrank = tree.as_ref().map_or(true, |node| node.balance == 0);
    (min, shrank)
}

/// Inserts a node into the subtree, rejecting duplicates. Returns the
/// rejected entry if the key was already present, and whether the subtree
/// grew in height.
pub fn insert<T, U>(tree: &mut Tree<T, U>, new_node: Node<T, U>) -> (Option<Entry<T, U>>, bool)
where
    T: Ord,
{
    let (rejected, grew) = match tree {
        Some(ref mut node) => match new_node.entry.key.cmp(&node.entry.key) {
            Ordering::Less => {
                let (rejected, grew) = insert(&mut node.left, new_node);
                if grew {
                    node.balance += 1;
                }
                (rejected, grew)
            },
            Ordering::Greater => {
                let (rejected, grew) = insert(&mut node.right, new_node);
                if grew {
                    node.balance -= 1;
                }
                (rejected, grew)
            },
            Ordering::Equal => return (Some(new_node.entry), false),
        },
        None => {
            *tree = Some(Box::new(new_node));
            return (None, true);
        },
    };

    if !grew {
        return (rejected, false);
    }
    rebalance(tree);
    // A subtree keeps its old height exactly when it settles balanced: the
    // insertion filled in the shorter side, or a rotation undid the growth.
    let grew = tree.as_ref().map_or(false, |node| node.balance != 0);
    (rejected, grew)
}

/// Removes the node with the given key from the subtree, if there is one.
/// Returns the removed entry and whether the subtree shrank in height.
pub fn remove<T, U, V>(tree: &mut Tree<T, U>, key: &V) -> (Option<Entry<T, U>>, bool)
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut node = match tree.take() {
        Some(node) => node,
        None => return (None, false),
    };

    let (removed, delta) = match key.cmp(node.entry.key.borrow()) {
        Ordering::Less => {
            let (removed, shrank) = remove(&mut node.left, key);
            (removed, if shrank { -1 } else { 0 })
        },
        Ordering::Greater => {
            let (removed, shrank) = remove(&mut node.right, key);
            (removed, if shrank { 1 } else { 0 })
        },
        Ordering::Equal => {
            let Node {
                entry,
                balance,
                left,
                right,
            } = *node;
            match (left, right) {
                (None, right) => {
                    *tree = right;
                    return (Some(entry), true);
                },
                (left, None) => {
                    *tree = left;
                    return (Some(entry), true);
                },
                (left, mut right) => {
                    // The in-order successor takes over the removed node's
                    // slot, children, and balance; the extraction is then
                    // settled like any other right-side shrink.
                    let (mut successor, shrank) = remove_min(&mut right);
                    successor.left = left;
                    successor.right = right;
                    successor.balance = balance;
                    node = successor;
                    (Some(entry), if shrank { 1 } else { 0 })
                },
            }
        },
    };

    if delta == 0 {
        *tree = Some(node);
        return (removed, false);
    }
    node.balance += delta;
    *tree = Some(node);
    rebalance(tree);
    // Heights shrink exactly when the settled node is balanced; a node left
    // leaning kept its height from the taller side.
    let shrank = tree.as_ref().map_or(true, |node| node.balance == 0);
    (removed, shrank)
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

pub fn get_mut<'a, T, U, V>(tree: &'a mut Tree<T, U>, key: &V) -> Option<&'a mut Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_mut().and_then(|node| {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => get_mut(&mut node.left, key),
            Ordering::Greater => get_mut(&mut node.right, key),
            Ordering::Equal => Some(&mut node.entry),
        }
    })
}

pub fn ceil<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Greater => ceil(&node.right, key),
            Ordering::Less => {
                match ceil(&node.left, key) {
                    None => Some(&node.entry),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.entry),
        }
    })
}

pub fn floor<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => floor(&node.left, key),
            Ordering::Greater => {
                match floor(&node.right, key) {
                    None => Some(&node.entry),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.entry),
        }
    })
}

pub fn min<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>>
where
    T: Ord,
{
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.entry
    })
}

pub fn max<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>>
where
    T: Ord,
{
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.entry
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

// Verifies the search order and the balance bookkeeping of every node in
// the subtree and returns its height.
#[cfg(test)]
pub fn check<T, U>(tree: &Tree<T, U>) -> usize
where
    T: Ord,
{
    match tree {
        None => 0,
        Some(ref node) => {
            if let Some(ref left) = node.left {
                assert!(left.entry.key < node.entry.key);
            }
            if let Some(ref right) = node.right {
                assert!(node.entry.key < right.entry.key);
            }
            let left_height = check(&node.left);
            let right_height = check(&node.right);
            assert_eq!(
                i64::from(node.balance),
                left_height as i64 - right_height as i64
            );
            assert!(node.balance >= -1 && node.balance <= 1);
            1 + cmp::max(left_height, right_height)
        },
    }
}
