//! Stepwise sorting algorithms
//!
//! Every routine mutates the slice it is given and reports each unit of
//! work through the [`Stepper`]. Mutations are applied in whole steps, so
//! the slice is a permutation of the input after every published snapshot:
//! insertion sort moves a key and its displaced block in one `Shift`, merge
//! sort writes a merged run in one `Merge`, and counting and radix sort
//! keep their intermediate output in the snapshot detail until a pass is
//! complete.

use std::ops::ControlFlow;

use crate::algorithm::snapshot::{Detail, Highlight, PartitionNode, Role, StepKind};
use crate::algorithm::stepper::{Flow, Stepper};
use crate::model::Keyed;

/// Heap orientation used by heap sort
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum HeapMode {
    /// Max-heap, extracts the largest value to the end (ascending output)
    #[default]
    Max,
    /// Min-heap, produces descending order which is then reversed
    Min,
}

/// Supported sorting algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    /// Adjacent compare-and-swap passes with early exit
    Bubble,
    /// Insert each key into the sorted prefix
    Insertion,
    /// Select the minimum of the unsorted suffix
    Selection,
    /// Top-down merge sort with a floor midpoint
    Merge,
    /// Quicksort with Lomuto partitioning (last element pivot)
    Quick,
    /// Heap sort in the given heap orientation
    Heap(HeapMode),
    /// Counting sort over `0..=max`
    Counting,
    /// Least-significant-digit radix sort, base 10
    Radix,
}

impl SortAlgorithm {
    /// Every sorting algorithm, min-heap mode included
    pub const ALL: [Self; 9] = [
        Self::Bubble,
        Self::Insertion,
        Self::Selection,
        Self::Merge,
        Self::Quick,
        Self::Heap(HeapMode::Max),
        Self::Heap(HeapMode::Min),
        Self::Counting,
        Self::Radix,
    ];

    /// Whether equal keys keep their relative order
    pub const fn is_stable(self) -> bool {
        matches!(
            self,
            Self::Insertion | Self::Merge | Self::Counting | Self::Radix
        )
    }

    /// Display name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bubble => "bubble sort",
            Self::Insertion => "insertion sort",
            Self::Selection => "selection sort",
            Self::Merge => "merge sort",
            Self::Quick => "quicksort",
            Self::Heap(HeapMode::Max) => "heap sort (max-heap)",
            Self::Heap(HeapMode::Min) => "heap sort (min-heap)",
            Self::Counting => "counting sort",
            Self::Radix => "radix sort",
        }
    }
}

/// Sort `items` by key, publishing a snapshot for every step
///
/// Returns `Break` if the run was cancelled; `items` then holds the state
/// reached after the last published step.
pub fn sort<T: Keyed>(algorithm: SortAlgorithm, items: &mut [T], stepper: &mut Stepper<'_>) -> Flow {
    stepper.checkpoint()?;

    match algorithm {
        SortAlgorithm::Bubble => bubble_sort(items, stepper),
        SortAlgorithm::Insertion => insertion_sort(items, stepper),
        SortAlgorithm::Selection => selection_sort(items, stepper),
        SortAlgorithm::Merge => merge_sort(items, stepper),
        SortAlgorithm::Quick => quick_sort(items, stepper),
        SortAlgorithm::Heap(mode) => heap_sort(items, mode, stepper),
        SortAlgorithm::Counting => counting_sort(items, stepper),
        SortAlgorithm::Radix => radix_sort(items, stepper),
    }
}

fn key_at<T: Keyed>(items: &[T], index: usize) -> u32 {
    items.get(index).map_or(0, Keyed::key)
}

fn keys<T: Keyed>(items: &[T]) -> Vec<u32> {
    items.iter().map(Keyed::key).collect()
}

fn sorted_range(range: std::ops::Range<usize>) -> impl Iterator<Item = Highlight> {
    range.map(|i| Highlight::new(i, Role::Sorted))
}

fn with_sorted(range: std::ops::Range<usize>, active: &[Highlight]) -> Vec<Highlight> {
    sorted_range(range).chain(active.iter().copied()).collect()
}

fn bubble_sort<T: Keyed>(items: &mut [T], stepper: &mut Stepper<'_>) -> Flow {
    let n = items.len();

    for pass in 0..n.saturating_sub(1) {
        let settled = n - pass..n;
        let mut swapped = false;

        for j in 0..n - 1 - pass {
            let pair = [
                Highlight::new(j, Role::Comparing),
                Highlight::new(j + 1, Role::Comparing),
            ];
            stepper.step(
                StepKind::Compare,
                items,
                with_sorted(settled.clone(), &pair),
                Detail::None,
            )?;

            if key_at(items, j) > key_at(items, j + 1) {
                items.swap(j, j + 1);
                swapped = true;
                let pair = [
                    Highlight::new(j, Role::Swapping),
                    Highlight::new(j + 1, Role::Swapping),
                ];
                stepper.step(
                    StepKind::Swap,
                    items,
                    with_sorted(settled.clone(), &pair),
                    Detail::None,
                )?;
            }
        }

        if !swapped {
            break;
        }
    }

    ControlFlow::Continue(())
}

fn insertion_sort<T: Keyed>(items: &mut [T], stepper: &mut Stepper<'_>) -> Flow {
    for i in 1..items.len() {
        let key = key_at(items, i);
        let mut position = i;

        while position > 0 {
            stepper.step(
                StepKind::Compare,
                items,
                vec![
                    Highlight::new(position - 1, Role::Comparing),
                    Highlight::new(i, Role::Placing),
                ],
                Detail::None,
            )?;

            if key_at(items, position - 1) > key {
                position -= 1;
            } else {
                break;
            }
        }

        if position < i {
            if let Some(block) = items.get_mut(position..=i) {
                block.rotate_right(1);
            }
            stepper.step(
                StepKind::Shift,
                items,
                vec![Highlight::new(position, Role::Swapping)],
                Detail::None,
            )?;
        }
    }

    ControlFlow::Continue(())
}

fn selection_sort<T: Keyed>(items: &mut [T], stepper: &mut Stepper<'_>) -> Flow {
    let n = items.len();

    for i in 0..n.saturating_sub(1) {
        let mut minimum = i;

        for j in i + 1..n {
            let active = [
                Highlight::new(minimum, Role::Minimum),
                Highlight::new(j, Role::Comparing),
            ];
            stepper.step(
                StepKind::Compare,
                items,
                with_sorted(0..i, &active),
                Detail::None,
            )?;

            if key_at(items, j) < key_at(items, minimum) {
                minimum = j;
            }
        }

        if minimum != i {
            items.swap(i, minimum);
            let active = [
                Highlight::new(i, Role::Swapping),
                Highlight::new(minimum, Role::Swapping),
            ];
            stepper.step(
                StepKind::Swap,
                items,
                with_sorted(0..i, &active),
                Detail::None,
            )?;
        }
    }

    ControlFlow::Continue(())
}

fn partitions(tree: &[PartitionNode], low: usize, high: usize) -> Detail {
    Detail::Partitions {
        nodes: tree.to_vec(),
        active: Some((low, high)),
    }
}

fn record_partition<T: Keyed>(
    tree: &mut Vec<PartitionNode>,
    items: &[T],
    low: usize,
    high: usize,
    depth: usize,
) {
    tree.push(PartitionNode {
        low,
        high,
        depth,
        values: items.get(low..=high).map(keys).unwrap_or_default(),
    });
}

fn merge_sort<T: Keyed>(items: &mut [T], stepper: &mut Stepper<'_>) -> Flow {
    let mut tree = Vec::new();
    if items.len() > 1 {
        merge_range(items, 0, items.len() - 1, 0, &mut tree, stepper)?;
    }
    ControlFlow::Continue(())
}

fn merge_range<T: Keyed>(
    items: &mut [T],
    low: usize,
    high: usize,
    depth: usize,
    tree: &mut Vec<PartitionNode>,
    stepper: &mut Stepper<'_>,
) -> Flow {
    record_partition(tree, items, low, high, depth);
    if low >= high {
        return ControlFlow::Continue(());
    }

    let mid = low + (high - low) / 2;
    merge_range(items, low, mid, depth + 1, tree, stepper)?;
    merge_range(items, mid + 1, high, depth + 1, tree, stepper)?;

    let left = items.get(low..=mid).map(<[T]>::to_vec).unwrap_or_default();
    let right = items
        .get(mid + 1..=high)
        .map(<[T]>::to_vec)
        .unwrap_or_default();
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while let (Some(a), Some(b)) = (left.get(i), right.get(j)) {
        stepper.step(
            StepKind::Compare,
            items,
            vec![
                Highlight::new(low + i, Role::Comparing),
                Highlight::new(mid + 1 + j, Role::Comparing),
            ],
            partitions(tree, low, high),
        )?;

        // Ties take from the left run to keep the sort stable
        if b.key() < a.key() {
            merged.push(b.clone());
            j += 1;
        } else {
            merged.push(a.clone());
            i += 1;
        }
    }
    merged.extend(left.get(i..).unwrap_or_default().iter().cloned());
    merged.extend(right.get(j..).unwrap_or_default().iter().cloned());

    if let Some(range) = items.get_mut(low..=high) {
        range.clone_from_slice(&merged);
    }
    stepper.step(
        StepKind::Merge,
        items,
        (low..=high)
            .map(|k| Highlight::new(k, Role::Placing))
            .collect(),
        partitions(tree, low, high),
    )
}

fn quick_sort<T: Keyed>(items: &mut [T], stepper: &mut Stepper<'_>) -> Flow {
    let mut tree = Vec::new();
    if items.len() > 1 {
        quick_range(items, 0, items.len() - 1, 0, &mut tree, stepper)?;
    }
    ControlFlow::Continue(())
}

fn quick_range<T: Keyed>(
    items: &mut [T],
    low: usize,
    high: usize,
    depth: usize,
    tree: &mut Vec<PartitionNode>,
    stepper: &mut Stepper<'_>,
) -> Flow {
    if low >= high {
        return ControlFlow::Continue(());
    }
    record_partition(tree, items, low, high, depth);

    let pivot = key_at(items, high);
    let mut store = low;

    for j in low..high {
        stepper.step(
            StepKind::Compare,
            items,
            vec![
                Highlight::new(high, Role::Pivot),
                Highlight::new(store, Role::Bound),
                Highlight::new(j, Role::Comparing),
            ],
            partitions(tree, low, high),
        )?;

        if key_at(items, j) < pivot {
            if store != j {
                items.swap(store, j);
                stepper.step(
                    StepKind::Swap,
                    items,
                    vec![
                        Highlight::new(high, Role::Pivot),
                        Highlight::new(store, Role::Swapping),
                        Highlight::new(j, Role::Swapping),
                    ],
                    partitions(tree, low, high),
                )?;
            }
            store += 1;
        }
    }

    if store != high {
        items.swap(store, high);
        stepper.step(
            StepKind::Swap,
            items,
            vec![
                Highlight::new(store, Role::Pivot),
                Highlight::new(high, Role::Swapping),
            ],
            partitions(tree, low, high),
        )?;
    }

    if store > low {
        quick_range(items, low, store - 1, depth + 1, tree, stepper)?;
    }
    quick_range(items, store + 1, high, depth + 1, tree, stepper)
}

fn heap_sort<T: Keyed>(items: &mut [T], mode: HeapMode, stepper: &mut Stepper<'_>) -> Flow {
    let n = items.len();

    for root in (0..n / 2).rev() {
        sift_down(items, root, n, mode, stepper)?;
    }

    for end in (1..n).rev() {
        items.swap(0, end);
        let active = [
            Highlight::new(0, Role::Swapping),
            Highlight::new(end, Role::Swapping),
        ];
        stepper.step(
            StepKind::Swap,
            items,
            with_sorted(end + 1..n, &active),
            Detail::None,
        )?;
        sift_down(items, 0, end, mode, stepper)?;
    }

    // A min-heap leaves the values descending
    if mode == HeapMode::Min {
        for i in 0..n / 2 {
            let mirror = n - 1 - i;
            items.swap(i, mirror);
            let active = [
                Highlight::new(i, Role::Swapping),
                Highlight::new(mirror, Role::Swapping),
            ];
            stepper.step(
                StepKind::Swap,
                items,
                with_sorted(0..i, &active),
                Detail::None,
            )?;
        }
    }

    ControlFlow::Continue(())
}

const fn outranks(a: u32, b: u32, mode: HeapMode) -> bool {
    match mode {
        HeapMode::Max => a > b,
        HeapMode::Min => a < b,
    }
}

fn sift_down<T: Keyed>(
    items: &mut [T],
    mut root: usize,
    size: usize,
    mode: HeapMode,
    stepper: &mut Stepper<'_>,
) -> Flow {
    let settled = size..items.len();

    loop {
        let left = 2 * root + 1;
        if left >= size {
            break;
        }
        let right = left + 1;
        let mut chosen = root;

        let active = [
            Highlight::new(root, Role::Comparing),
            Highlight::new(left, Role::Comparing),
        ];
        stepper.step(
            StepKind::Compare,
            items,
            with_sorted(settled.clone(), &active),
            Detail::None,
        )?;
        if outranks(key_at(items, left), key_at(items, chosen), mode) {
            chosen = left;
        }

        if right < size {
            let active = [
                Highlight::new(chosen, Role::Comparing),
                Highlight::new(right, Role::Comparing),
            ];
            stepper.step(
                StepKind::Compare,
                items,
                with_sorted(settled.clone(), &active),
                Detail::None,
            )?;
            if outranks(key_at(items, right), key_at(items, chosen), mode) {
                chosen = right;
            }
        }

        if chosen == root {
            break;
        }

        items.swap(root, chosen);
        let active = [
            Highlight::new(root, Role::Swapping),
            Highlight::new(chosen, Role::Swapping),
        ];
        stepper.step(
            StepKind::Swap,
            items,
            with_sorted(settled.clone(), &active),
            Detail::None,
        )?;
        root = chosen;
    }

    ControlFlow::Continue(())
}

fn counting_sort<T: Keyed>(items: &mut [T], stepper: &mut Stepper<'_>) -> Flow {
    let n = items.len();
    let Some(max) = items.iter().map(Keyed::key).max() else {
        return ControlFlow::Continue(());
    };

    let mut counts = vec![0usize; max as usize + 1];
    let mut output: Vec<Option<u32>> = vec![None; n];

    for i in 0..n {
        let key = key_at(items, i) as usize;
        if let Some(count) = counts.get_mut(key) {
            *count += 1;
        }
        stepper.step(
            StepKind::Count,
            items,
            vec![Highlight::new(i, Role::Comparing)],
            Detail::Counting {
                counts: counts.clone(),
                output: output.clone(),
            },
        )?;
    }

    for value in 1..counts.len() {
        let previous = counts.get(value - 1).copied().unwrap_or(0);
        if let Some(count) = counts.get_mut(value) {
            *count += previous;
        }
        stepper.step(
            StepKind::Accumulate,
            items,
            Vec::new(),
            Detail::Counting {
                counts: counts.clone(),
                output: output.clone(),
            },
        )?;
    }

    // Reverse scan keeps equal keys in input order
    let mut placed: Vec<Option<T>> = vec![None; n];
    for i in (0..n).rev() {
        let key = key_at(items, i);
        let Some(count) = counts.get_mut(key as usize) else {
            continue;
        };
        *count -= 1;
        let slot = *count;

        if let (Some(target), Some(item)) = (placed.get_mut(slot), items.get(i)) {
            *target = Some(item.clone());
        }
        if let Some(shown) = output.get_mut(slot) {
            *shown = Some(key);
        }
        stepper.step(
            StepKind::Place,
            items,
            vec![Highlight::new(i, Role::Placing)],
            Detail::Counting {
                counts: counts.clone(),
                output: output.clone(),
            },
        )?;
    }

    let sorted: Vec<T> = placed.into_iter().flatten().collect();
    if sorted.len() == n {
        items.clone_from_slice(&sorted);
    }
    stepper.step(
        StepKind::Copy,
        items,
        sorted_range(0..n).collect(),
        Detail::Counting { counts, output },
    )
}

const RADIX: u32 = 10;

fn radix_sort<T: Keyed>(items: &mut [T], stepper: &mut Stepper<'_>) -> Flow {
    let n = items.len();
    let Some(max) = items.iter().map(Keyed::key).max() else {
        return ControlFlow::Continue(());
    };

    let mut place: u32 = 1;
    while max / place > 0 {
        let mut buckets: Vec<Vec<T>> = vec![Vec::new(); RADIX as usize];

        for i in 0..n {
            let Some(item) = items.get(i) else {
                continue;
            };
            let digit = ((item.key() / place) % RADIX) as usize;
            if let Some(bucket) = buckets.get_mut(digit) {
                bucket.push(item.clone());
            }
            stepper.step(
                StepKind::Place,
                items,
                vec![Highlight::new(i, Role::Placing)],
                Detail::Radix {
                    place,
                    buckets: buckets.iter().map(|b| keys(b)).collect(),
                    collected: Vec::new(),
                },
            )?;
        }

        // Buckets drain one per step; the sequence is replaced once the
        // last bucket of the pass has been collected
        let mut collected: Vec<T> = Vec::with_capacity(n);
        for digit in 0..buckets.len() {
            let Some(bucket) = buckets.get_mut(digit) else {
                continue;
            };
            if bucket.is_empty() {
                continue;
            }
            collected.append(bucket);

            let pass_complete = collected.len() == n;
            if pass_complete {
                items.clone_from_slice(&collected);
            }
            let highlights = if pass_complete {
                (0..n).map(|k| Highlight::new(k, Role::Placing)).collect()
            } else {
                Vec::new()
            };
            stepper.step(
                StepKind::Collect,
                items,
                highlights,
                Detail::Radix {
                    place,
                    buckets: buckets.iter().map(|b| keys(b)).collect(),
                    collected: keys(&collected),
                },
            )?;
        }

        place = match place.checked_mul(RADIX) {
            Some(next) => next,
            None => break,
        };
    }

    ControlFlow::Continue(())
}
