use std::hash::Hash;

use crate::{HashSet, Hasher};

/// Return the first item in `items` that has already appeared earlier in the slice.
pub fn first_duplicate<T: Hash + Eq>(items: &[T]) -> Option<&T> {
    let mut seen = HashSet::with_capacity_and_hasher(items.len(), Hasher::default());
    items.iter().find(|item| !seen.insert(*item))
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn test_no_dupes() {
        assert_eq!(first_duplicate(&[1, 7, 14, 28, 42]), None);
        assert_eq!(first_duplicate::<u32>(&[]), None);
    }
    #[test]
    fn test_finds_first_repeat() {
        assert_eq!(first_duplicate(&[0, 14, 28, 14, 0]), Some(&14));
        assert_eq!(first_duplicate(&["p+c", "c", "p+c"]), Some(&"p+c"));
    }
}
