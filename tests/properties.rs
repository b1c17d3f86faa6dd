#![cfg(feature = "proptest")]

use {
    bitonic_union::{bitonic, DisjointSet},
    proptest::prelude::*,
};

/// Sizes with a list of pairs to join inside them.
fn unions() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize .. 40).prop_flat_map(|len| {
        (Just(len), proptest::collection::vec((0 .. len, 0 .. len), 0 .. 3 * len))
    })
}

proptest! {
    #[test]
    fn sets_partition_the_universe(disjoint_set in any::<DisjointSet>()) {
        let mut seen = vec![false; disjoint_set.len()];
        let mut sets = 0;

        for set in disjoint_set.all_sets() {
            sets += 1;
            prop_assert!(!set.is_empty());
            prop_assert!(set.windows(2).all(|pair| pair[0] < pair[1]));
            prop_assert_eq!(set.len(), disjoint_set.len_of_set(set[0]).unwrap());

            let max = *set.last().unwrap();
            for &member in &set {
                prop_assert!(!seen[member]);
                seen[member] = true;
                prop_assert_eq!(max, disjoint_set.find_max(member).unwrap());
                prop_assert!(disjoint_set.connected(member, set[0]).unwrap());
            }
        }

        prop_assert!(seen.into_iter().all(|seen| seen));
        prop_assert_eq!(sets, disjoint_set.count());
    }

    #[test]
    fn matches_a_naive_partition((len, pairs) in unions()) {
        let mut disjoint_set = DisjointSet::new(len).unwrap();
        // The label of the set of each element.
        let mut labels: Vec<usize> = (0 .. len).collect();
        let mut merges = 0;

        for (first, second) in pairs {
            let joined = disjoint_set.union(first, second).unwrap();
            prop_assert_eq!(labels[first] != labels[second], joined);

            if joined {
                merges += 1;
                let (old, new) = (labels[second], labels[first]);
                for label in labels.iter_mut() {
                    if *label == old {
                        *label = new;
                    }
                }
            }

            // Joining again changes nothing.
            let count = disjoint_set.count();
            prop_assert!(!disjoint_set.union(second, first).unwrap());
            prop_assert_eq!(count, disjoint_set.count());
        }

        prop_assert_eq!(len - merges, disjoint_set.count());

        for i in 0 .. len {
            let max = (0 .. len).filter(|&j| labels[j] == labels[i]).max().unwrap();
            prop_assert_eq!(max, disjoint_set.find_max(i).unwrap());

            for j in 0 .. len {
                prop_assert_eq!(labels[i] == labels[j], disjoint_set.connected(i, j).unwrap());
            }
        }
    }

    #[test]
    fn clone_is_equal(disjoint_set in any::<DisjointSet>()) {
        prop_assert_eq!(disjoint_set.clone(), disjoint_set);
    }

    #[test]
    fn finds_every_element(array in bitonic::bitonic_vec(64)) {
        for (index, value) in array.iter().enumerate() {
            prop_assert_eq!(Ok(Some(index)), bitonic::search(&array, value));
        }
    }

    #[test]
    fn misses_absent_values(array in bitonic::bitonic_vec(64), target in any::<i64>()) {
        let expected = array.iter().position(|&value| value == target);

        prop_assert_eq!(Ok(expected), bitonic::search(&array, &target));
        prop_assert_eq!(Ok(None), bitonic::search(&array, &(i64::from(i32::MAX) + 1)));
        prop_assert_eq!(Ok(None), bitonic::search(&array, &(i64::from(i32::MIN) - 1)));
    }

    #[test]
    fn never_returns_a_wrong_index(
        array in proptest::collection::vec(-20i32 .. 20, 0 .. 32),
        target in -20i32 .. 20,
    ) {
        if let Ok(Some(index)) = bitonic::search(&array, &target) {
            prop_assert_eq!(target, array[index]);
        }
    }
}

#[cfg(feature = "rayon")]
proptest! {
    #[test]
    fn parallel_search_agrees(
        array in bitonic::bitonic_vec(64),
        targets in proptest::collection::vec(any::<i32>().prop_map(i64::from), 0 .. 16),
    ) {
        let expected: Vec<Option<usize>> = targets
            .iter()
            .map(|target| bitonic::search(&array, target).unwrap())
            .collect();

        prop_assert_eq!(Ok(expected), bitonic::par_search_all(&array, &targets));
    }
}
