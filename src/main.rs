use std::fmt::Display;
use tree_dictionaries::avl::AvlMap;
use tree_dictionaries::bst::BstMap;

// Two-letter keys AA..=ZZ in ascending order, the worst case for the
// unbalanced variant.
fn two_letter_keys() -> Vec<String> {
    let mut keys = Vec::with_capacity(26 * 26);
    for first in b'A'..=b'Z' {
        for second in b'A'..=b'Z' {
            keys.push(format!("{}{}", first as char, second as char));
        }
    }
    keys
}

fn print_entries<K, V, I>(name: &str, entries: I)
where
    K: Display,
    V: Display,
    I: Iterator<Item = (K, V)>,
{
    println!("In-order traversal of {} entries:", name);
    for (key, value) in entries {
        println!("key: {} value: {}", key, value);
    }
}

fn main() {
    let keys = ["AA", "BB", "CC", "BC", "ZZ", "DZ", "OO"];

    let mut bst = BstMap::new();
    let mut avl = AvlMap::new();
    for key in keys.iter() {
        bst.insert(key.to_string(), key.to_string());
        avl.insert(key.to_string(), key.to_string());
    }

    print_entries("BST", bst.iter());
    print_entries("AVL", avl.iter());
    println!("The initial BST has a maximum depth of {}", bst.depth());
    println!("The initial AVL tree has a maximum depth of {}", avl.depth());

    bst.remove("BB");
    avl.remove("BB");
    println!();
    print_entries("BST (after removing BB)", bst.iter());
    print_entries("AVL (after removing BB)", avl.iter());

    let mut bst = BstMap::new();
    let mut avl = AvlMap::new();
    for key in two_letter_keys() {
        bst.insert(key.clone(), ());
        avl.insert(key, ());
    }
    println!();
    println!(
        "After {} ascending inserts: BST depth {}, AVL depth {}",
        bst.len(),
        bst.depth(),
        avl.depth(),
    );
}
