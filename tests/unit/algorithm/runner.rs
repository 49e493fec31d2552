//! Tests for the parameterised runner, its pre-conditions and final results

#[cfg(test)]
mod tests {
    use algoviz::AlgoVizError;
    use algoviz::algorithm::pacing::{CancellationToken, Pace};
    use algoviz::algorithm::runner::{
        Algorithm, FinalResult, Outcome, RunInput, Runner, SearchVerdict,
    };
    use algoviz::algorithm::searching::SearchAlgorithm;
    use algoviz::algorithm::snapshot::StepSnapshot;
    use algoviz::algorithm::sorting::SortAlgorithm;
    use algoviz::io::configuration::MAX_COUNTING_VALUE;
    use algoviz::model::{Graph, Sequence};

    fn sequence_input(values: &[u32], target: Option<u32>) -> RunInput {
        RunInput::Sequence {
            values: Sequence::new(values.to_vec()),
            target,
        }
    }

    fn run(algorithm: Algorithm, input: &RunInput) -> (FinalResult, Vec<StepSnapshot>) {
        let mut snapshots = Vec::new();
        let result = Runner::new(algorithm)
            .run(
                input,
                &Pace::immediate(),
                |s| snapshots.push(s.clone()),
                &CancellationToken::new(),
            )
            .unwrap_or_else(|error| panic!("run rejected: {error}"));
        (result, snapshots)
    }

    // Tests a completed sort reports its final sequence and counters
    // Verified by returning the input sequence instead of the working copy
    #[test]
    fn test_sort_run_completes() {
        let input = sequence_input(&[5, 3, 8, 1], None);
        let (result, snapshots) = run(Algorithm::Sort(SortAlgorithm::Bubble), &input);

        assert_eq!(result.outcome, Outcome::Completed);
        assert!(result.is_completed());
        assert_eq!(result.final_sequence.values(), &[1, 3, 5, 8]);
        assert_eq!(result.found_index(), None);
        assert_eq!(result.steps, snapshots.len());
        assert_eq!(
            Some(result.counters),
            snapshots.last().map(|s| s.counters)
        );
    }

    // Tests the caller's input is never mutated
    // Verified by sorting the input in place
    #[test]
    fn test_input_is_not_mutated() {
        let input = sequence_input(&[4, 2, 9, 1], None);
        let before = input.clone();
        let _ = run(Algorithm::Sort(SortAlgorithm::Quick), &input);
        assert_eq!(input, before);
    }

    // Tests found and not-found searches map to index and -1
    // Verified by reporting not-found as None
    #[test]
    fn test_search_verdicts() {
        let algorithm = Algorithm::Search(SearchAlgorithm::Binary);

        let (found, _) = run(algorithm, &sequence_input(&[5, 10, 15, 20, 25], Some(20)));
        assert_eq!(found.verdict, Some(SearchVerdict::Found(3)));
        assert_eq!(found.found_index(), Some(3));

        let (missing, _) = run(algorithm, &sequence_input(&[5, 10, 15, 20, 25], Some(12)));
        assert_eq!(missing.verdict, Some(SearchVerdict::NotFound));
        assert_eq!(missing.found_index(), Some(-1));
        assert!(missing.is_completed());
    }

    // Tests a search of an empty sequence completes as not found
    // Verified by raising an error on empty input
    #[test]
    fn test_empty_search_is_a_normal_ending() {
        let (result, snapshots) = run(
            Algorithm::Search(SearchAlgorithm::Linear),
            &sequence_input(&[], Some(3)),
        );
        assert!(snapshots.is_empty());
        assert_eq!(result.found_index(), Some(-1));
    }

    // Tests a traversal reports its visit order and an empty sequence
    // Verified by returning the stack instead of the visit order
    #[test]
    fn test_traversal_run() {
        let graph = Graph::circular(4, &[(0, 1), (1, 2), (2, 3)])
            .unwrap_or_else(|error| panic!("{error}"));
        let (result, snapshots) = run(Algorithm::DepthFirst, &RunInput::Graph { graph, root: 0 });

        assert_eq!(result.visit_order, vec![0, 1, 2, 3]);
        assert!(result.final_sequence.is_empty());
        assert_eq!(result.counters.visits, 4);
        assert_eq!(snapshots.len(), 4);
        assert_eq!(result.found_index(), None);
    }

    // Tests pre-condition failures are rejected before any step
    // Verified by skipping validation for sorted searches
    #[test]
    fn test_preconditions_reject_before_first_step() {
        let graph = Graph::circular(3, &[(0, 1)]).unwrap_or_else(|error| panic!("{error}"));
        let cases = [
            (
                Algorithm::Search(SearchAlgorithm::Binary),
                sequence_input(&[3, 1, 2], Some(1)),
            ),
            (
                Algorithm::Search(SearchAlgorithm::Linear),
                sequence_input(&[3, 1, 2], None),
            ),
            (Algorithm::DepthFirst, sequence_input(&[1, 2], None)),
            (
                Algorithm::Sort(SortAlgorithm::Merge),
                RunInput::Graph {
                    graph: graph.clone(),
                    root: 0,
                },
            ),
            (Algorithm::DepthFirst, RunInput::Graph { graph, root: 7 }),
        ];

        for (algorithm, input) in cases {
            let mut steps = 0;
            let result = Runner::new(algorithm).run(
                &input,
                &Pace::immediate(),
                |_| steps += 1,
                &CancellationToken::new(),
            );
            assert!(
                matches!(result, Err(AlgoVizError::InvalidInput { .. })),
                "{} accepted bad input",
                algorithm.name()
            );
            assert_eq!(steps, 0);
        }
    }

    // Tests counting sort rejects values beyond its tally range before any step
    // Verified by sizing the tally array from unchecked input
    #[test]
    fn test_counting_sort_value_bound() {
        let runner = Runner::new(Algorithm::Sort(SortAlgorithm::Counting));
        let mut steps = 0;
        let rejected = runner.run(
            &sequence_input(&[3, 2_000_000], None),
            &Pace::immediate(),
            |_| steps += 1,
            &CancellationToken::new(),
        );
        assert!(matches!(rejected, Err(AlgoVizError::InvalidInput { .. })));
        assert_eq!(steps, 0);

        let (result, _) = run(
            Algorithm::Sort(SortAlgorithm::Counting),
            &sequence_input(&[MAX_COUNTING_VALUE, 0, 5], None),
        );
        assert_eq!(result.final_sequence.values(), &[0, 5, MAX_COUNTING_VALUE]);

        let (radix, _) = run(
            Algorithm::Sort(SortAlgorithm::Radix),
            &sequence_input(&[3, 2_000_000], None),
        );
        assert!(radix.is_completed());
    }

    // Tests linear search accepts unsorted input
    // Verified by requiring sorted input for every search
    #[test]
    fn test_linear_search_accepts_unsorted_input() {
        let (result, _) = run(
            Algorithm::Search(SearchAlgorithm::Linear),
            &sequence_input(&[9, 2, 7], Some(7)),
        );
        assert_eq!(result.found_index(), Some(2));
    }

    // Tests a token cancelled before the run yields zero steps
    // Verified by checking cancellation only after the first step
    #[test]
    fn test_pre_cancelled_run() {
        let token = CancellationToken::new();
        token.cancel();
        let mut steps = 0;
        let result = Runner::new(Algorithm::Sort(SortAlgorithm::Insertion))
            .run(
                &sequence_input(&[3, 2, 1], None),
                &Pace::immediate(),
                |_| steps += 1,
                &token,
            )
            .unwrap_or_else(|error| panic!("{error}"));

        assert_eq!(result.outcome, Outcome::Cancelled);
        assert_eq!(steps, 0);
        assert_eq!(result.final_sequence.values(), &[3, 2, 1]);
    }

    // Tests cancelling inside the observer stops after exactly that step
    // Verified by checking cancellation only before waits
    #[test]
    fn test_cancel_from_observer_stops_at_step() {
        let token = CancellationToken::new();
        let mut last = None;
        let result = Runner::new(Algorithm::Sort(SortAlgorithm::Selection))
            .run(
                &sequence_input(&[9, 8, 7, 6, 5, 4], None),
                &Pace::immediate(),
                |s| {
                    last = Some(s.sequence.clone());
                    if s.step == 7 {
                        token.cancel();
                    }
                },
                &token,
            )
            .unwrap_or_else(|error| panic!("{error}"));

        assert_eq!(result.outcome, Outcome::Cancelled);
        assert_eq!(result.steps, 7);
        assert_eq!(Some(result.final_sequence.into_values()), last);
    }

    // Tests a cancelled search carries no verdict
    // Verified by reporting NotFound on cancellation
    #[test]
    fn test_cancelled_search_has_no_verdict() {
        let token = CancellationToken::new();
        let result = Runner::new(Algorithm::Search(SearchAlgorithm::Linear))
            .run(
                &sequence_input(&[1, 2, 3, 4], Some(4)),
                &Pace::immediate(),
                |_| token.cancel(),
                &token,
            )
            .unwrap_or_else(|error| panic!("{error}"));

        assert_eq!(result.outcome, Outcome::Cancelled);
        assert_eq!(result.verdict, None);
        assert_eq!(result.found_index(), None);
    }

    // Tests algorithm metadata used by sessions
    // Verified by flagging linear search as sorted-only
    #[test]
    fn test_algorithm_flags() {
        let dfs = Algorithm::DepthFirst;
        assert!(dfs.uses_graph());
        assert!(!dfs.needs_target());

        let linear = Algorithm::Search(SearchAlgorithm::Linear);
        assert!(linear.needs_target());
        assert!(!linear.requires_sorted_input());
        assert!(Algorithm::Search(SearchAlgorithm::Ternary).requires_sorted_input());

        let sort = Algorithm::Sort(SortAlgorithm::Radix);
        assert!(!sort.uses_graph() && !sort.needs_target() && !sort.requires_sorted_input());
        assert_eq!(sort.name(), "radix sort");
        assert_eq!(Runner::new(sort).algorithm(), sort);
    }
}
