//! End-to-end tests for the matchbox learning engine

use std::io::Cursor;

use matchbox::{Board, StateTable, Symmetry, Trainer, TrainerConfig, play};
use rand::{SeedableRng, rngs::StdRng};

#[test]
fn full_training_run_is_deterministic_under_a_seed() {
    let config = TrainerConfig {
        iterations: 50,
        seed: Some(7),
    };

    let first = Trainer::new(config.clone()).train().unwrap();
    let second = Trainer::new(config).train().unwrap();

    assert_eq!(first, second);
}

#[test]
fn different_seeds_diverge() {
    let first = Trainer::new(TrainerConfig {
        iterations: 50,
        seed: Some(1),
    })
    .train()
    .unwrap();
    let second = Trainer::new(TrainerConfig {
        iterations: 50,
        seed: Some(2),
    })
    .train()
    .unwrap();

    assert_ne!(first, second);
}

#[test]
fn training_discovers_states_within_bounds() {
    let iterations = 300;
    let mut trainer = Trainer::new(TrainerConfig {
        iterations,
        seed: Some(42),
    });
    let table = trainer.train().unwrap();

    assert!(table.len() > 1, "training should learn beyond the root state");
    // At most one new state per ply can be created
    assert!(table.len() <= iterations * 9 + 1);

    // Cells occupied at entry creation start at weight 0 and are never
    // selected, so credit never touches them.
    for entry in table.iter() {
        for (pos, &weight) in entry.weights().iter().enumerate() {
            if !entry.pattern().is_empty(pos) {
                assert_eq!(weight, 0, "occupied cell {pos} should stay unweighted");
            }
        }
    }
}

#[test]
fn table_holds_one_entry_per_symmetry_class() {
    let mut trainer = Trainer::new(TrainerConfig {
        iterations: 100,
        seed: Some(13),
    });
    let table = trainer.train().unwrap();

    let patterns: Vec<Board> = table.iter().map(|entry| *entry.pattern()).collect();
    for (i, a) in patterns.iter().enumerate() {
        for (j, b) in patterns.iter().enumerate() {
            if i != j {
                assert!(
                    !Symmetry::all().iter().any(|s| s.apply(a) == *b),
                    "entries {i} and {j} are symmetric duplicates"
                );
            }
        }
    }
}

#[test]
fn trained_table_supports_interactive_play() {
    let mut trainer = Trainer::new(TrainerConfig {
        iterations: 100,
        seed: Some(23),
    });
    let mut table = trainer.train().unwrap();
    let states_after_training = table.len();

    let mut rng = StdRng::seed_from_u64(99);
    let mut input = Cursor::new("0\n1\n2\n3\n4\n5\n6\n7\n8\n");
    let mut output = Vec::new();

    let result = play::play_game(&mut table, &mut rng, &mut input, &mut output);
    assert!(result.is_ok());
    assert!(table.len() >= states_after_training);

    let transcript = String::from_utf8(output).unwrap();
    assert!(transcript.contains("starting game"));
}

#[test]
fn preloaded_table_skips_training() {
    // Inference-only: hand a fresh table straight to the play loop
    let mut table = StateTable::new();
    let mut rng = StdRng::seed_from_u64(3);
    let mut input = Cursor::new("0\n1\n2\n3\n4\n5\n6\n7\n8\n");
    let mut output = Vec::new();

    let winner = play::play_game(&mut table, &mut rng, &mut input, &mut output).unwrap();
    assert!(table.len() > 1, "play grows the table for unseen states");

    let transcript = String::from_utf8(output).unwrap();
    match winner {
        Some(player) => assert!(transcript.contains(&format!("player {player} won"))),
        None => assert!(transcript.contains("draw")),
    }
}
