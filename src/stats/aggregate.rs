use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Every value tied for the highest frequency, in ascending order.
/// Empty input has no mode and yields an empty vector.
pub fn modes<T, I>(values: I) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_default() += 1;
    }
    let Some(max) = counts.values().copied().max() else {
        return Vec::new();
    };
    counts
        .into_iter()
        .filter(|(_, n)| *n == max)
        .map(|(v, _)| v)
        .collect()
}

/// Occurrences of each distinct value, highest count first.
/// Equal counts keep the order in which values were first seen.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut slots: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();
    for v in values {
        match slots.get(&v) {
            Some(&i) => counts[i].1 += 1,
            None => {
                slots.insert(v.clone(), counts.len());
                counts.push((v, 1));
            }
        }
    }
    // Stable sort keeps first-seen order among ties.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_mode() {
        assert_eq!(modes(["b", "a", "b", "c"]), vec!["b"]);
    }

    #[test]
    fn tied_modes_are_all_returned_sorted() {
        assert_eq!(modes([3, 1, 3, 1, 2]), vec![1, 3]);
        assert_eq!(modes(["z", "y", "x"]), vec!["x", "y", "z"]);
    }

    #[test]
    fn empty_input_has_no_mode() {
        assert!(modes(Vec::<u32>::new()).is_empty());
    }

    #[test]
    fn value_counts_descending_with_first_seen_ties() {
        let counts = value_counts([
            Some("Customer"),
            None,
            Some("Subscriber"),
            Some("Subscriber"),
            Some("Customer"),
            Some("Subscriber"),
        ]);
        assert_eq!(
            counts,
            vec![(Some("Subscriber"), 3), (Some("Customer"), 2), (None, 1)]
        );

        let tied = value_counts(["b", "a", "a", "b"]);
        assert_eq!(tied, vec![("b", 2), ("a", 2)]);
    }

    #[test]
    fn value_counts_of_nothing_is_empty() {
        assert!(value_counts(Vec::<&str>::new()).is_empty());
    }
}
