//! Configuration constants for tree234.

/// Maximum number of items a node may hold (3).
///
/// This is what makes the structure a 2-3-4 tree: a node carries 1 to 3
/// items, so an internal node has 2 to 4 children. Reaching `MAX_ITEMS`
/// marks a node as full, and full nodes are split before the insertion
/// descent enters them.
pub const MAX_ITEMS: usize = 3;

/// Maximum number of children an internal node may have.
///
/// Always one more than the item count: item `i` separates the key ranges
/// of children `i` and `i + 1`.
pub const MAX_CHILDREN: usize = MAX_ITEMS + 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fan_out_matches_item_capacity() {
        assert_eq!(MAX_CHILDREN, MAX_ITEMS + 1);
    }

    #[test]
    fn test_capacity_is_2_3_4() {
        assert_eq!(MAX_ITEMS, 3);
        assert_eq!(MAX_CHILDREN, 4);
    }
}
