//! Tests for `CharacterSet` membership, ranges and deduplication

#[cfg(test)]
mod tests {
    use pwpattern::pattern::charset::CharacterSet;

    #[test]
    fn test_new_set_is_empty() {
        let set = CharacterSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set, CharacterSet::default());
    }

    // Duplicate items collapse to one member
    #[test]
    fn test_insert_deduplicates() {
        let mut set = CharacterSet::new();
        set.insert(b'a');
        set.insert(b'a');
        set.insert(b'b');
        assert_eq!(set.len(), 2);
        assert!(set.contains(b'a'));
        assert!(set.contains(b'b'));
        assert!(!set.contains(b'c'));
    }

    #[test]
    fn test_same_members_compare_equal() {
        let doubled: CharacterSet = b"aab".iter().copied().collect();
        let single: CharacterSet = b"ab".iter().copied().collect();
        assert_eq!(doubled, single);
    }

    #[test]
    fn test_insert_range_is_inclusive() {
        let mut set = CharacterSet::new();
        set.insert_range(b'0', b'3');
        assert_eq!(set.to_vec(), b"0123".to_vec());
        assert!(!set.contains(b'4'));
        assert!(!set.contains(b'/'));
    }

    #[test]
    fn test_degenerate_and_empty_ranges() {
        let mut set = CharacterSet::new();
        set.insert_range(b'a', b'a');
        assert_eq!(set.to_vec(), vec![b'a']);

        let mut empty = CharacterSet::new();
        empty.insert_range(b'b', b'a');
        assert!(empty.is_empty());
    }

    #[test]
    fn test_overlapping_ranges() {
        let mut set = CharacterSet::new();
        set.insert_range(b'a', b'f');
        set.insert_range(b'd', b'h');
        set.insert(b'c');
        assert_eq!(set.len(), 8);
    }

    #[test]
    fn test_non_ascii_is_ignored() {
        let mut set = CharacterSet::new();
        set.insert(200);
        assert!(set.is_empty());
        assert!(!set.contains(200));
    }

    #[test]
    fn test_to_vec_is_sorted() {
        let set: CharacterSet = b"zaM".iter().copied().collect();
        assert_eq!(set.to_vec(), b"Maz".to_vec());
    }

    #[test]
    fn test_display() {
        let set: CharacterSet = b"ba".iter().copied().collect();
        assert_eq!(set.to_string(), "CharacterSet(2 chars: ab)");
    }
}
