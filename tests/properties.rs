// Property tests for the structural model, recorder and player

use algoscope::config::constants::AUTO_INTERVAL;
use algoscope::model::search::{binary_search, SearchResult};
use algoscope::model::sort::merge_sort;
use algoscope::model::tree::Bst;
use algoscope::player::scheduler::ManualScheduler;
use algoscope::player::{Player, PlayerStatus};
use algoscope::recorder::merge_sort::record_merge_sort;
use algoscope::recorder::search::record_binary_search;
use algoscope::recorder::tree::record_insert;
use algoscope::snapshot::{StepPhase, Structure};
use proptest::prelude::*;
use std::collections::BTreeSet;

proptest! {
    #[test]
    fn bst_in_order_is_sorted(values in prop::collection::vec(-500i64..500, 0..40)) {
        let tree = Bst::from_values(&values);
        let in_order = tree.in_order();
        prop_assert!(in_order.windows(2).all(|w| w[0] < w[1]));

        let distinct: BTreeSet<i64> = values.iter().copied().collect();
        prop_assert_eq!(in_order, distinct.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn bst_delete_removes_exactly_one(
        values in prop::collection::vec(-500i64..500, 1..40),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut tree = Bst::from_values(&values);
        let target = values[pick.index(values.len())];
        prop_assert!(tree.contains(target));
        let before = tree.len();

        tree.delete(target);
        prop_assert_eq!(tree.len(), before - 1);
        prop_assert!(!tree.contains(target));
        prop_assert!(tree.in_order().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn merge_sort_yields_sorted_permutation(values in prop::collection::vec(-100i64..100, 1..20)) {
        let recorded = record_merge_sort(&values).unwrap();
        let mut expected = values.clone();
        expected.sort();
        prop_assert_eq!(&recorded.structure, &expected);

        let terminal = recorded.steps.terminal().unwrap();
        match &terminal.structure {
            Structure::SortForest(nodes) => {
                prop_assert_eq!(nodes.len(), 1);
                prop_assert_eq!(&nodes[0].values, &expected);
            }
            _ => prop_assert!(false, "terminal step is not a sort forest"),
        }
    }

    #[test]
    fn merge_sort_of_sorted_input_never_reorders(
        values in prop::collection::btree_set(-100i64..100, 1..20),
    ) {
        let sorted: Vec<i64> = values.into_iter().collect();
        let trace = merge_sort(&sorted);
        prop_assert_eq!(trace.reorderings(), 0);
        prop_assert_eq!(trace.sorted, sorted);
    }

    #[test]
    fn binary_search_finds_present_key(
        values in prop::collection::btree_set(-200i64..200, 1..30),
        pick in any::<prop::sample::Index>(),
    ) {
        let values: Vec<i64> = values.into_iter().collect();
        let index = pick.index(values.len());
        let key = values[index];

        prop_assert_eq!(binary_search(&values, key).result, SearchResult::Found(index));
        let recorded = record_binary_search(&values, key).unwrap();
        let terminal = recorded.steps.terminal().unwrap();
        prop_assert_eq!(&terminal.message, &format!("Key {} found at index {}.", key, index));
    }

    #[test]
    fn binary_search_reports_missing_key(
        values in prop::collection::vec(-200i64..200, 1..30),
        key in -250i64..250,
    ) {
        let mut values = values;
        values.sort();
        prop_assume!(!values.contains(&key));

        let trace = binary_search(&values, key);
        prop_assert_eq!(trace.result, SearchResult::NotFound);
        let (low, high) = trace.final_window().unwrap();
        prop_assert!(low > high);

        let recorded = record_binary_search(&values, key).unwrap();
        let terminal = recorded.steps.terminal().unwrap();
        prop_assert!(terminal.message.ends_with("not found in the array."));
        match &terminal.structure {
            Structure::Array(view) => prop_assert!(view.low.unwrap() > view.high.unwrap()),
            _ => prop_assert!(false, "terminal step is not an array"),
        }
    }

    #[test]
    fn player_reaches_terminal_once(
        values in prop::collection::vec(-50i64..50, 0..15),
        insert in -50i64..50,
    ) {
        let tree = Bst::from_values(&values);
        let sequence = record_insert(&tree, insert).steps;
        let len = sequence.len();
        let mut player = Player::new(ManualScheduler::new(), AUTO_INTERVAL);
        player.start(sequence.clone());

        let mut terminal_visits = 0;
        for _ in 0..len - 1 {
            prop_assert_eq!(player.next(), PlayerStatus::Advanced);
            if player.current().unwrap().phase == StepPhase::Terminal {
                terminal_visits += 1;
            }
        }
        prop_assert_eq!(terminal_visits, 1);
        prop_assert_eq!(player.next(), PlayerStatus::SequenceExhausted);
        prop_assert_eq!(player.cursor(), Some(len - 1));

        player.previous();
        prop_assert_eq!(player.current(), sequence.get(len - 2));
    }
}
