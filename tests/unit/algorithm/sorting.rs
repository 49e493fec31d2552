//! Tests for the stepwise sorting algorithms

#[cfg(test)]
mod tests {
    use algoviz::algorithm::pacing::{CancellationToken, Pace};
    use algoviz::algorithm::snapshot::{Detail, Role, StepKind, StepSnapshot};
    use algoviz::algorithm::sorting::{HeapMode, SortAlgorithm, sort};
    use algoviz::algorithm::stepper::Stepper;
    use algoviz::model::sequence::{is_non_decreasing, is_permutation};

    const MIXED: [u32; 10] = [9, 0, 4, 4, 100, 23, 7, 0, 56, 31];

    fn run(algorithm: SortAlgorithm, values: &[u32]) -> (Vec<u32>, Vec<StepSnapshot>) {
        let pace = Pace::immediate();
        let token = CancellationToken::new();
        let mut snapshots = Vec::new();
        let mut observer = |snapshot: &StepSnapshot| snapshots.push(snapshot.clone());
        let mut items = values.to_vec();

        let flow = {
            let mut stepper = Stepper::new(&pace, &token, &mut observer);
            sort(algorithm, &mut items, &mut stepper)
        };
        assert!(flow.is_continue());
        (items, snapshots)
    }

    fn last_counters(snapshots: &[StepSnapshot]) -> (u64, u64, u64) {
        snapshots.last().map_or((0, 0, 0), |s| {
            (s.counters.comparisons, s.counters.swaps, s.counters.shifts)
        })
    }

    // Tests every variant sorts a mixed input with duplicates and zeros
    // Verified by breaking the heap sift comparison
    #[test]
    fn test_all_algorithms_sort_mixed_input() {
        for algorithm in SortAlgorithm::ALL {
            let (sorted, _) = run(algorithm, &MIXED);
            assert!(is_non_decreasing(&sorted), "{} left {sorted:?}", algorithm.name());
            assert!(is_permutation(&sorted, &MIXED), "{} lost values", algorithm.name());
        }
    }

    // Tests the textbook example for the three simple sorts
    // Verified by swapping on equality in bubble sort
    #[test]
    fn test_simple_sorts_on_small_example() {
        for algorithm in [
            SortAlgorithm::Bubble,
            SortAlgorithm::Insertion,
            SortAlgorithm::Selection,
        ] {
            let (sorted, _) = run(algorithm, &[5, 3, 8, 1]);
            assert_eq!(sorted, vec![1, 3, 5, 8], "{}", algorithm.name());
        }
    }

    // Tests insertion sort counts five comparisons and two shifts on [5, 3, 8, 1]
    // Verified by emitting a shift step for keys that stay in place
    #[test]
    fn test_insertion_sort_counters() {
        let (_, snapshots) = run(SortAlgorithm::Insertion, &[5, 3, 8, 1]);
        assert_eq!(last_counters(&snapshots), (5, 0, 2));
    }

    // Tests bubble and selection sort counters on [5, 3, 8, 1]
    // Verified by removing the early exit from bubble sort
    #[test]
    fn test_bubble_and_selection_counters() {
        let (_, bubble) = run(SortAlgorithm::Bubble, &[5, 3, 8, 1]);
        assert_eq!(last_counters(&bubble), (6, 4, 0));

        let (_, selection) = run(SortAlgorithm::Selection, &[5, 3, 8, 1]);
        assert_eq!(last_counters(&selection), (6, 2, 0));
    }

    // Tests bubble sort stops after one clean pass on sorted input
    // Verified by removing the early exit
    #[test]
    fn test_bubble_sort_early_exit() {
        let (_, snapshots) = run(SortAlgorithm::Bubble, &[1, 2, 3, 4, 5]);
        assert_eq!(snapshots.len(), 4);
        assert!(snapshots.iter().all(|s| s.kind == StepKind::Compare));
    }

    // Tests empty and single element inputs finish without steps
    // Verified by starting the outer loop at zero
    #[test]
    fn test_trivial_inputs_take_no_steps() {
        for algorithm in SortAlgorithm::ALL {
            let (sorted, snapshots) = run(algorithm, &[]);
            assert!(sorted.is_empty());
            assert!(snapshots.is_empty(), "{} stepped on empty input", algorithm.name());

            let (sorted, snapshots) = run(algorithm, &[7]);
            assert_eq!(sorted, vec![7]);
            assert!(
                snapshots.iter().all(|s| s.sequence == vec![7]),
                "{} changed a single value",
                algorithm.name()
            );
        }
    }

    // Tests every published sequence is a permutation of the input
    // Verified by writing merged values one at a time
    #[test]
    fn test_every_step_is_a_permutation() {
        for algorithm in SortAlgorithm::ALL {
            let (_, snapshots) = run(algorithm, &MIXED);
            assert!(!snapshots.is_empty());
            for snapshot in &snapshots {
                assert!(
                    is_permutation(&snapshot.sequence, &MIXED),
                    "{} step {} is not a permutation",
                    algorithm.name(),
                    snapshot.step
                );
            }
        }
    }

    // Tests counters never decrease and step numbers count up from one
    // Verified by resetting counters between passes
    #[test]
    fn test_counters_are_monotonic() {
        for algorithm in SortAlgorithm::ALL {
            let (_, snapshots) = run(algorithm, &MIXED);
            for (i, pair) in snapshots.windows(2).enumerate() {
                let [a, b] = pair else { continue };
                assert_eq!(a.step, i + 1);
                assert!(b.counters.comparisons >= a.counters.comparisons);
                assert!(b.counters.swaps >= a.counters.swaps);
                assert!(b.counters.shifts >= a.counters.shifts);
                assert!(b.counters.placements >= a.counters.placements);
            }
        }
    }

    // Tests stable algorithms keep equal keys in input order
    // Verified by taking ties from the right run in merge sort
    #[test]
    fn test_stable_algorithms_preserve_order_of_equal_keys() {
        let input: Vec<(u32, usize)> = [3, 1, 3, 1, 2, 3, 0, 2]
            .iter()
            .enumerate()
            .map(|(i, &k)| (k, i))
            .collect();

        for algorithm in SortAlgorithm::ALL.into_iter().filter(|a| a.is_stable()) {
            let pace = Pace::immediate();
            let token = CancellationToken::new();
            let mut observer = |_: &StepSnapshot| {};
            let mut items = input.clone();
            let flow = {
                let mut stepper = Stepper::new(&pace, &token, &mut observer);
                sort(algorithm, &mut items, &mut stepper)
            };
            assert!(flow.is_continue());

            for pair in items.windows(2) {
                let [a, b] = pair else { continue };
                assert!(a.0 <= b.0, "{} left keys unsorted", algorithm.name());
                if a.0 == b.0 {
                    assert!(a.1 < b.1, "{} reordered equal keys", algorithm.name());
                }
            }
        }
    }

    // Tests quicksort uses the last element of the range as pivot
    // Verified by choosing the first element as pivot
    #[test]
    fn test_quicksort_pivot_is_last_element() {
        let (_, snapshots) = run(SortAlgorithm::Quick, &[4, 7, 1, 9, 5]);
        let first = snapshots.first().map(|s| s.role_of(4));
        assert_eq!(first, Some(Some(Role::Pivot)));
    }

    // Tests quicksort and merge sort publish a partition tree rooted at the full range
    // Verified by recording partitions after recursion
    #[test]
    fn test_partition_tree_accumulates() {
        for algorithm in [SortAlgorithm::Merge, SortAlgorithm::Quick] {
            let (_, snapshots) = run(algorithm, &MIXED);
            let Some(Detail::Partitions { nodes, .. }) = snapshots.last().map(|s| &s.detail) else {
                panic!("{} published no partition tree", algorithm.name());
            };
            let root = nodes.first();
            assert_eq!(root.map(|n| (n.low, n.high, n.depth)), Some((0, 9, 0)));
            assert!(nodes.len() > 1);
            assert!(nodes.iter().skip(1).all(|n| n.depth > 0));
        }
    }

    // Tests merge steps leave the merged range sorted
    // Verified by merging before recursing into the right half
    #[test]
    fn test_merge_steps_write_sorted_runs() {
        let (_, snapshots) = run(SortAlgorithm::Merge, &MIXED);
        for snapshot in snapshots.iter().filter(|s| s.kind == StepKind::Merge) {
            let Detail::Partitions {
                active: Some((low, high)),
                ..
            } = snapshot.detail
            else {
                panic!("merge step without active range");
            };
            let run = snapshot.sequence.get(low..=high).unwrap_or_default();
            assert!(is_non_decreasing(run));
        }
    }

    // Tests min-heap mode sorts ascending by reversing at the end
    // Verified by skipping the final reversal
    #[test]
    fn test_min_heap_mode_reverses_into_ascending_order() {
        let (sorted, snapshots) = run(SortAlgorithm::Heap(HeapMode::Min), &[2, 9, 4, 7, 1, 8]);
        assert_eq!(sorted, vec![1, 2, 4, 7, 8, 9]);

        let tail: Vec<StepKind> = snapshots.iter().rev().take(3).map(|s| s.kind).collect();
        assert_eq!(tail, vec![StepKind::Swap; 3]);
    }

    // Tests counting sort leaves the sequence untouched until the final copy
    // Verified by writing output slots into the sequence directly
    #[test]
    fn test_counting_sort_copies_at_the_end() {
        let input = [3, 0, 2, 3, 1];
        let (_, snapshots) = run(SortAlgorithm::Counting, &input);

        let (last, earlier) = snapshots.split_last().unwrap_or_else(|| panic!("no steps"));
        assert_eq!(last.kind, StepKind::Copy);
        assert_eq!(last.sequence, vec![0, 1, 2, 3, 3]);
        assert!(earlier.iter().all(|s| s.sequence == input));

        let counts = earlier.iter().filter(|s| s.kind == StepKind::Count).count();
        let sums = earlier.iter().filter(|s| s.kind == StepKind::Accumulate).count();
        let places = earlier.iter().filter(|s| s.kind == StepKind::Place).count();
        assert_eq!((counts, sums, places), (5, 3, 5));

        let Detail::Counting { output, .. } = &last.detail else {
            panic!("counting detail missing");
        };
        assert!(output.iter().all(Option::is_some));
    }

    // Tests counting sort output fills in from the right during placement
    // Verified by scanning forwards during placement
    #[test]
    fn test_counting_sort_output_is_partially_filled() {
        let (_, snapshots) = run(SortAlgorithm::Counting, &[2, 1, 2]);
        let first_place = snapshots.iter().find(|s| s.kind == StepKind::Place);
        let Some(Detail::Counting { output, .. }) = first_place.map(|s| &s.detail) else {
            panic!("no placement step");
        };
        assert_eq!(output, &vec![None, None, Some(2)]);
    }

    // Tests radix sort drains buckets visibly, one bucket per collect step
    // Verified by clearing every bucket at the start of collection
    #[test]
    fn test_radix_buckets_drain_during_collection() {
        let input = [170, 45, 75, 90, 802, 24, 2, 66];
        let (sorted, snapshots) = run(SortAlgorithm::Radix, &input);
        assert_eq!(sorted, vec![2, 24, 45, 66, 75, 90, 170, 802]);

        for snapshot in snapshots.iter().filter(|s| s.kind == StepKind::Collect) {
            let Detail::Radix {
                buckets, collected, ..
            } = &snapshot.detail
            else {
                panic!("radix detail missing");
            };
            let waiting: usize = buckets.iter().map(Vec::len).sum();
            assert_eq!(waiting + collected.len(), input.len());
        }

        let places: Vec<u32> = snapshots
            .iter()
            .filter_map(|s| match s.detail {
                Detail::Radix { place, .. } => Some(place),
                _ => None,
            })
            .collect();
        assert_eq!(places.first(), Some(&1));
        assert_eq!(places.last(), Some(&100));
    }

    // Tests radix sort on all zeros takes no steps and leaves values in place
    // Verified by running one pass when the maximum is zero
    #[test]
    fn test_radix_sort_all_zeros() {
        let (sorted, snapshots) = run(SortAlgorithm::Radix, &[0, 0, 0]);
        assert_eq!(sorted, vec![0, 0, 0]);
        assert!(snapshots.is_empty());
    }

    // Tests only the textbook-stable algorithms report stability
    // Verified by marking selection sort stable
    #[test]
    fn test_stability_flags() {
        let stable: Vec<&str> = SortAlgorithm::ALL
            .into_iter()
            .filter(|a| a.is_stable())
            .map(SortAlgorithm::name)
            .collect();
        assert_eq!(
            stable,
            vec!["insertion sort", "merge sort", "counting sort", "radix sort"]
        );
    }
}
