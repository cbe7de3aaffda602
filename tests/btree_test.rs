//! B-tree scenario tests
//!
//! Fixed insert/delete sequences with the expected shape or contents checked
//! after every step.

use interchangedb_btree::{BTree, Error};

/// Smallest `h` with `t^h >= n + 1`, i.e. `ceil(log_t(n + 1))`.
fn height_bound(t: usize, n: usize) -> usize {
    let mut h = 0;
    let mut reach = 1;
    while reach < n + 1 {
        reach *= t;
        h += 1;
    }
    h
}

fn sorted(keys: &[i32]) -> Vec<i32> {
    let mut keys = keys.to_vec();
    keys.sort_unstable();
    keys
}

// ============================================================================
// Insert then delete in reverse insertion order
// ============================================================================

#[test]
fn test_degree_three_reverse_delete() {
    let inserted = [10, 20, 30, 40, 50, 60, 70, 80, 90, 5, 42, 765, 34, 2, 4, 1];
    let mut tree = BTree::new(3);

    for (i, &key) in inserted.iter().enumerate() {
        tree.insert(key);
        assert!(tree.search(&key).is_some(), "{} not found after insert", key);
        tree.validate().unwrap();
        assert!(tree.height() <= height_bound(3, i + 1));
    }
    assert_eq!(tree.inorder_keys(), sorted(&inserted));

    let mut remaining = inserted.to_vec();
    for &key in inserted.iter().rev() {
        assert_eq!(tree.delete(&key), Some(key));
        remaining.retain(|&k| k != key);

        assert_eq!(tree.inorder_keys(), sorted(&remaining));
        tree.validate().unwrap();
        assert!(
            tree.height() <= height_bound(3, remaining.len()),
            "height {} too large for {} keys",
            tree.height(),
            remaining.len()
        );
    }

    assert!(tree.is_empty());
    assert!(tree.root().is_leaf());
}

/// Descending deletes first, then the small keys out of order.
#[test]
fn test_degree_three_mixed_delete_order() {
    let mut tree = BTree::new(3);
    for key in [10, 20, 30, 40, 50, 60, 70, 80, 90, 5, 42, 765, 34, 2, 4, 1] {
        tree.insert(key);
    }

    let mut remaining = tree.inorder_keys();
    for key in [765, 90, 80, 70, 60, 50, 40, 30, 20, 10, 5, 42, 34, 2, 4, 1] {
        assert_eq!(tree.delete(&key), Some(key));
        remaining.retain(|&k| k != key);
        assert_eq!(tree.inorder_keys(), remaining);
        tree.validate().unwrap();
    }
    assert!(tree.is_empty());
}

// ============================================================================
// Minimal degree
// ============================================================================

#[test]
fn test_degree_two_ascending_splits() {
    let mut tree = BTree::new(2);

    for key in 1..=3 {
        tree.insert(key);
    }
    assert_eq!(tree.stats().splits, 0);
    assert_eq!(tree.height(), 0);

    // Fourth key overflows the 3-key root.
    tree.insert(4);
    assert!(tree.stats().splits >= 1);
    assert_eq!(tree.root().len(), 1);
    assert_eq!(tree.root().keys(), &[2]);

    for key in 5..=7 {
        tree.insert(key);
        tree.validate().unwrap();
    }

    let root = tree.root();
    assert_eq!(root.keys(), &[2, 4]);
    let leaves: Vec<&[i32]> = root.children().iter().map(|c| c.keys()).collect();
    assert_eq!(leaves, vec![&[1][..], &[3][..], &[5, 6, 7][..]]);
    assert_eq!(tree.stats().splits, 2);
}

#[test]
fn test_degree_two_descending_round_trip() {
    let mut tree = BTree::new(2);
    for key in (0..100).rev() {
        tree.insert(key);
        tree.validate().unwrap();
    }
    for key in 0..100 {
        assert_eq!(tree.delete(&key), Some(key));
        tree.validate().unwrap();
    }
    assert!(tree.is_empty());
    assert!(tree.stats().merges > 0);
    assert!(tree.stats().root_collapses > 0);
}

// ============================================================================
// Edge cases
// ============================================================================

#[test]
fn test_single_key_tree_delete() {
    let mut tree = BTree::new(4);
    tree.insert("only");
    assert_eq!(tree.delete("only"), Some("only"));

    assert!(tree.root().is_leaf());
    assert_eq!(tree.root().len(), 0);
    assert!(tree.inorder_keys().is_empty());
}

#[test]
fn test_delete_absent_key_leaves_tree_unchanged() {
    let mut tree: BTree<i32> = (0..64).map(|k| k * 3).collect();
    let before = tree.inorder_keys();

    for key in [-1, 1, 2, 100, 1000] {
        assert_eq!(tree.delete(&key), None);
    }

    assert_eq!(tree.inorder_keys(), before);
    tree.validate().unwrap();
    assert_eq!(tree.len(), 64);
}

#[test]
fn test_invalid_degree_rejected() {
    assert_eq!(BTree::<u8>::try_new(1).unwrap_err(), Error::InvalidDegree(1));
}

#[test]
fn test_conservation_with_large_degree() {
    let keys: Vec<u32> = (0..1000).map(|i| (i * 7919) % 1000).collect();
    let mut tree = BTree::new(16);
    for &key in &keys {
        tree.insert(key);
    }
    assert_eq!(tree.len(), 1000);
    tree.validate().unwrap();

    for &key in keys.iter().rev() {
        assert_eq!(tree.delete(&key), Some(key));
    }
    assert!(tree.is_empty());
    assert!(tree.inorder_keys().is_empty());
    tree.validate().unwrap();
}

#[test]
fn test_interleaved_insert_delete() {
    let mut tree = BTree::new(3);
    let mut model = Vec::new();

    for round in 0..20 {
        for i in 0..15 {
            let key = round * 10 + i;
            tree.insert(key);
            model.push(key);
        }
        for i in (0..15).step_by(2) {
            let key = round * 10 + i;
            assert!(tree.delete(&key).is_some());
            let pos = model.iter().position(|&k| k == key).unwrap();
            model.remove(pos);
        }
        tree.validate().unwrap();
    }

    model.sort_unstable();
    assert_eq!(tree.inorder_keys(), model);
}
