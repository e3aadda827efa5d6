//! Randomized play checked against the board invariants.

use pdp_engine::{Action, BitPlane, Board, BoardConfig};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const GAMES: u64 = 24;
const TICKS: usize = 300;

/// Mostly random swaps and no-ops, with a raise about one tick in five.
fn random_action(board: &Board, rng: &mut ChaCha8Rng) -> Action {
    if rng.gen_range(0..5) == 0 {
        return Action::RaiseStack;
    }
    let index = rng.gen_range(0..Action::count(board.height()));
    Action::from_index(index, board.height()).unwrap_or(Action::NoOp)
}

fn random_config(rng: &mut ChaCha8Rng, seed: u64) -> BoardConfig {
    BoardConfig::default()
        .with_height(rng.gen_range(3..=12))
        .with_colors(rng.gen_range(3..=6))
        .with_seed(seed)
}

/// Drive `check` after every tick of a batch of seeded random games.
fn for_each_tick(mut check: impl FnMut(&Board, Action, &Board)) {
    for seed in 0..GAMES {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut board = Board::new(random_config(&mut rng, seed)).expect("valid config");
        for _ in 0..TICKS {
            let action = random_action(&board, &mut rng);
            let before = board.clone();
            board.step(action).expect("generated actions are valid");
            check(&before, action, &board);
        }
    }
}

mod geometry {
    use super::*;

    #[test]
    fn test_planes_stay_in_region() {
        for_each_tick(|_, _, board| {
            let outside = !board.region();
            for plane in board.colors() {
                assert!((*plane & outside).is_empty());
            }
            assert!((board.falling() & outside).is_empty());
            assert!((board.swapping() & outside).is_empty());
            assert!((board.chaining() & outside).is_empty());
        });
    }

    #[test]
    fn test_colors_are_exclusive() {
        for_each_tick(|_, _, board| {
            let total: u32 = board.colors().iter().map(|plane| plane.popcount()).sum();
            assert_eq!(total, board.occupied().popcount());
        });
    }

    #[test]
    fn test_falling_panels_exist() {
        for_each_tick(|_, _, board| {
            assert!((board.falling() & !board.occupied()).is_empty());
        });
    }
}

mod chains {
    use super::*;

    #[test]
    fn test_chain_ends_with_chaining_plane() {
        for_each_tick(|_, _, board| {
            if board.chaining().is_empty() {
                assert_eq!(board.chain_number(), 0);
            }
        });
    }

    #[test]
    fn test_raise_never_leaves_free_match() {
        for_each_tick(|_, action, board| {
            if action == Action::RaiseStack {
                let mut probe = board.clone();
                assert_eq!(probe.resolve_matches().chain, 0);
            }
        });
    }

    #[test]
    fn test_raise_adds_a_row_or_nothing() {
        for_each_tick(|before, action, after| {
            if action != Action::RaiseStack {
                return;
            }
            let mut settled = before.clone();
            settled.step(Action::NoOp).expect("noop");
            let top_full = settled
                .colors()
                .iter()
                .any(|&plane| (plane & BitPlane::TOP).any());
            let bottom = BitPlane::row(after.height() - 1);
            if top_full {
                assert_eq!(settled.to_list(), after.to_list());
            } else {
                assert_eq!(after.occupied() & bottom, bottom);
            }
        });
    }
}

mod cloning {
    use super::*;

    #[test]
    fn test_stepping_clone_leaves_source() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let mut board = Board::new(BoardConfig::default().with_seed(99)).expect("config");
        for _ in 0..6 {
            board.raise_stack();
        }

        for _ in 0..50 {
            let snapshot = board.to_list();
            let (falling, swapping, chaining) =
                (board.falling(), board.swapping(), board.chaining());
            let chain_number = board.chain_number();

            let mut clone = board.clone();
            for _ in 0..10 {
                let action = random_action(&clone, &mut rng);
                clone.step(action).expect("valid action");
            }

            assert_eq!(board.to_list(), snapshot);
            assert_eq!(board.falling(), falling);
            assert_eq!(board.swapping(), swapping);
            assert_eq!(board.chaining(), chaining);
            assert_eq!(board.chain_number(), chain_number);

            let action = random_action(&board, &mut rng);
            board.step(action).expect("valid action");
        }
    }

    #[test]
    fn test_children_match_sequential_steps() {
        let mut board = Board::new(BoardConfig::endless_small().with_seed(4)).expect("config");
        for _ in 0..3 {
            board.raise_stack();
        }
        let children = board.children().expect("all actions valid");
        for (index, (child, score)) in children.iter().enumerate() {
            let mut expected = board.clone();
            let expected_score = expected.step_index(index).expect("valid index");
            assert_eq!(*score, expected_score);
            assert_eq!(child.to_list(), expected.to_list());
            assert_eq!(child.chaining(), expected.chaining());
        }
    }
}
