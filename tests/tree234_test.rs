//! Integration tests for the full insert/find/walk surface.

use tree234::{Error, NodeId, Tree234};

/// The canonical split sequence: 70, 50, 30 fill the root; 40 forces the
/// root to split before it lands.
#[test]
fn test_canonical_root_split() {
    let mut tree = Tree234::new();
    tree.insert(70);
    tree.insert(50);
    tree.insert(30);

    // Root is a full leaf, no split yet.
    assert_eq!(tree.node(tree.root()).unwrap().items(), &[30, 50, 70]);
    assert_eq!(tree.height(), 0);

    tree.insert(40);

    let root = tree.node(tree.root()).unwrap();
    assert_eq!(root.items(), &[50]);
    assert_eq!(tree.height(), 1);

    let left = tree.node(root.child(0).unwrap()).unwrap();
    let right = tree.node(root.child(1).unwrap()).unwrap();
    assert_eq!(left.items(), &[30, 40]);
    assert_eq!(right.items(), &[70]);
}

/// A ten-key mixed sequence: two root splits along the way leave a
/// height-2 tree with this exact shape.
#[test]
fn test_demo_sequence_shape() {
    let keys = [70, 50, 30, 40, 20, 80, 25, 90, 75, 10];
    let mut tree = Tree234::new();
    for key in keys {
        tree.insert(key);
    }

    assert_eq!(tree.len(), 10);
    assert_eq!(tree.height(), 2);
    assert_eq!(tree.stats().snapshot().root_splits, 2);

    let visits: Vec<(usize, usize, Vec<i32>)> = tree
        .walk()
        .map(|v| (v.level, v.child_slot, v.keys.to_vec()))
        .collect();
    assert_eq!(
        visits,
        vec![
            (0, 0, vec![50]),
            (1, 0, vec![30]),
            (2, 0, vec![10, 20, 25]),
            (2, 1, vec![40]),
            (1, 1, vec![80]),
            (2, 0, vec![70, 75]),
            (2, 1, vec![90]),
        ]
    );

    for key in keys {
        assert!(tree.contains(&key), "lost key {}", key);
    }
    for missing in [0, 15, 35, 60, 100] {
        assert!(!tree.contains(&missing));
    }
}

#[test]
fn test_ascending_inserts_stay_balanced() {
    let mut tree = Tree234::new();
    for key in 0..1000 {
        tree.insert(key);
    }

    assert_eq!(tree.len(), 1000);
    // Every leaf sits at tree.height(): walk and compare.
    let height = tree.height();
    for visit in tree.walk() {
        assert!(visit.level <= height);
        assert!((1..=3).contains(&visit.keys.len()));
    }
    // Height is logarithmic: 2-3-4 tree of 1000 keys fits in depth 9
    // (minimum fan-out 2) and needs at least 4 (maximum fan-out 4).
    assert!((4..=9).contains(&height), "height {}", height);

    for key in 0..1000 {
        assert!(tree.contains(&key));
    }
    assert!(!tree.contains(&1000));
    assert!(!tree.contains(&-1));
}

#[test]
fn test_descending_and_interleaved_inserts() {
    let mut tree = Tree234::new();
    for key in (0..500).rev() {
        tree.insert(key);
    }
    for key in 500..600 {
        tree.insert(key);
    }

    assert_eq!(tree.len(), 600);
    for key in 0..600 {
        assert!(tree.contains(&key));
    }
}

#[test]
fn test_duplicates_across_splits() {
    let mut tree = Tree234::new();
    for _ in 0..20 {
        tree.insert(42);
    }
    tree.insert(41);
    tree.insert(43);

    assert_eq!(tree.len(), 22);
    assert!(tree.contains(&41));
    assert!(tree.contains(&42));
    assert!(tree.contains(&43));

    // Every stored item is one of the three keys, and the walk sees all 22.
    let mut count = 0;
    for visit in tree.walk() {
        for key in visit.keys {
            assert!((41..=43).contains(key));
            count += 1;
        }
    }
    assert_eq!(count, 22);
}

#[test]
fn test_find_on_empty_tree() {
    let tree: Tree234<u64> = Tree234::new();
    assert_eq!(tree.find(&0), None);
    assert_eq!(tree.find(&u64::MAX), None);
    assert_eq!(tree.stats().snapshot().found, 0);
}

#[test]
fn test_checked_node_access() {
    let mut tree = Tree234::new();
    tree.insert(1);

    assert!(tree.node(tree.root()).is_ok());
    assert_eq!(
        tree.node(NodeId::new(500)).unwrap_err(),
        Error::NodeOutOfBounds(500)
    );
}

#[test]
fn test_display_matches_walk() {
    let mut tree = Tree234::new();
    for key in [70, 50, 30, 40, 20] {
        tree.insert(key);
    }

    let rendered = format!("{}", tree);
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), tree.walk().count());
    assert_eq!(lines[0], "L0 C0 [50]");
    assert_eq!(lines[1], "L1 C0 [20,30,40]");
    assert_eq!(lines[2], "L1 C1 [70]");
}

#[test]
fn test_generic_keys() {
    // Anything Ord works as a key; the walk and find don't care.
    let mut tree: Tree234<String> = Tree234::new();
    for word in ["pear", "apple", "fig", "mango", "date", "kiwi"] {
        tree.insert(word.to_string());
    }

    assert!(tree.contains(&"fig".to_string()));
    assert!(!tree.contains(&"grape".to_string()));
    assert_eq!(tree.len(), 6);
}
