//! Scenario tests for the puzzle engine.

use strictly_river::{
    Bank, Entity, GameOutcome, GameState, Hazard, Location, Move, MoveError, Puzzle, SOLUTION,
};

fn play(moves: &[Move]) -> Puzzle {
    Puzzle::replay(moves).expect("moves should be legal")
}

#[test]
fn test_toggle_on_wrong_side_never_mutates() {
    let puzzle = play(&[Move::Toggle(Entity::Farmer), Move::Cross]);
    for item in Entity::ITEMS {
        let result = puzzle.toggle_board(item);
        assert!(
            matches!(result, Err(MoveError::WrongSide { entity, .. }) if entity == item),
            "{item} should be rejected"
        );
    }
    assert_eq!(puzzle, play(&[Move::Toggle(Entity::Farmer), Move::Cross]));
}

#[test]
fn test_third_passenger_rejected() {
    let puzzle = play(&[Move::Toggle(Entity::Tiger), Move::Toggle(Entity::Apple)]);
    assert_eq!(puzzle.toggle_board(Entity::Farmer), Err(MoveError::BoatFull));
    assert_eq!(puzzle.state().passengers().len(), 2);
}

#[test]
fn test_two_items_without_farmer_cannot_cross() {
    let puzzle = play(&[Move::Toggle(Entity::Tiger), Move::Toggle(Entity::Apple)]);
    assert_eq!(puzzle.cross_river(), Err(MoveError::FarmerNotAboard));
    assert_eq!(puzzle.state().boat(), Bank::Left);
    assert_eq!(puzzle.state().location(Entity::Tiger), Location::Boat);
    assert_eq!(puzzle.state().location(Entity::Apple), Location::Boat);
    assert!(puzzle.log().is_empty());
}

#[test]
fn test_chicken_first_loses_tiger_eats_sheep() {
    let puzzle = play(&[Move::Toggle(Entity::Farmer), Move::Toggle(Entity::Chicken)]);
    let crossing = puzzle.cross_river().unwrap();

    assert_eq!(crossing.outcome(), GameOutcome::Lost(Hazard::TigerEatsSheep));
    let left = crossing.state().occupants(Bank::Left);
    for item in [Entity::Tiger, Entity::Sheep, Entity::Snake, Entity::Apple] {
        assert!(left.contains(item));
    }
    assert_eq!(left.len(), 4);
    assert_eq!(
        crossing.record().report(Bank::Left).hazard(),
        Some(Hazard::TigerEatsSheep)
    );
    assert!(crossing.record().report(Bank::Right).is_safe());
}

#[test]
fn test_documented_solution_wins() {
    let puzzle = play(&SOLUTION);
    assert_eq!(puzzle.outcome(), GameOutcome::Won);
    assert!(puzzle.is_terminal());
    for item in Entity::ITEMS {
        assert_eq!(puzzle.state().location(item), Location::Right);
    }

    let records = puzzle.log().records();
    assert_eq!(records.len(), 9);
    assert_eq!(
        records[0].description(),
        "The farmer takes the apple to the right bank."
    );
    assert_eq!(records[1].description(), "The farmer rows alone to the left bank.");
    for (i, record) in records.iter().enumerate() {
        assert_eq!(*record.step(), i + 1);
        assert!(record.report(Bank::Left).is_safe());
        assert!(record.report(Bank::Right).is_safe());
    }
}

#[test]
fn test_terminal_puzzles_reject_everything() {
    let lost = play(&[
        Move::Toggle(Entity::Farmer),
        Move::Toggle(Entity::Chicken),
        Move::Cross,
    ]);
    let won = play(&SOLUTION);

    for puzzle in [lost, won] {
        assert!(puzzle.is_terminal());
        assert_eq!(puzzle.cross_river(), Err(MoveError::GameOver));
        for entity in Entity::ALL {
            assert_eq!(puzzle.toggle_board(entity), Err(MoveError::GameOver));
        }
    }
}

#[test]
fn test_reset_restores_canonical_start() {
    let puzzle = play(&SOLUTION[..8]);
    assert!(!puzzle.log().is_empty());

    let fresh = puzzle.reset();
    assert_eq!(*fresh.state(), GameState::initial());
    for entity in Entity::ALL {
        assert_eq!(fresh.state().location(entity), Location::Left);
    }
    assert_eq!(fresh.state().boat(), Bank::Left);
    assert_eq!(fresh.outcome(), GameOutcome::InProgress);
    assert!(fresh.log().is_empty());
    assert_eq!(fresh, Puzzle::new());
}

#[test]
fn test_toggle_never_evaluates_safety() {
    // Leaving tiger and sheep together on the bank is fine until a crossing.
    let puzzle = play(&[Move::Toggle(Entity::Farmer), Move::Toggle(Entity::Chicken)]);
    assert!(!puzzle.evaluate_bank(Bank::Left).is_safe());
    assert_eq!(puzzle.outcome(), GameOutcome::InProgress);
}

#[test]
fn test_puzzle_serializes() {
    let puzzle = play(&SOLUTION);
    let json = serde_json::to_string(&puzzle).unwrap();
    assert!(json.contains("\"Won\""));
    let back: Puzzle = serde_json::from_str(&json).unwrap();
    assert_eq!(back, puzzle);
}
