use gridlock::{rules, Board, Orientation, Vehicle, BOARD_SIZE};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Random non-overlapping fleet: target on the exit row plus up to eight
/// obstacles placed greedily.
fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let target = Vehicle::target(rng.random_range(0..=3), 2, 2);
    let mut vehicles = vec![target];
    let mut occupancy = target.mask().unwrap();

    let wanted = rng.random_range(0..=8);
    let mut id = 1u8;
    let mut attempts = 0;
    while (vehicles.len() - 1) < wanted && attempts < 64 {
        attempts += 1;
        let length = if rng.random() { 2 } else { 3 };
        let candidate = if rng.random() {
            let x = rng.random_range(0..=(BOARD_SIZE - length));
            let y = rng.random_range(0..BOARD_SIZE);
            Vehicle::horizontal(id, x, y, length)
        } else {
            let x = rng.random_range(0..BOARD_SIZE);
            let y = rng.random_range(0..=(BOARD_SIZE - length));
            Vehicle::vertical(id, x, y, length)
        };
        let mask = candidate.mask().unwrap();
        if (mask & occupancy).is_empty() {
            occupancy |= mask;
            vehicles.push(candidate);
            id += 1;
        }
    }
    Board::from_vehicles(vehicles).unwrap()
}

/// Straightforward cell-set re-statement of the legality rule, used as an
/// independent oracle for the mask-based implementation.
fn naive_is_legal(board: &Board, index: usize, cx: usize, cy: usize) -> bool {
    let vehicle = &board.vehicles()[index];
    match vehicle.orientation() {
        Orientation::Horizontal if cy != vehicle.y() => return false,
        Orientation::Vertical if cx != vehicle.x() => return false,
        _ => {}
    }
    let cells: Vec<(usize, usize)> = (0..vehicle.length())
        .map(|i| match vehicle.orientation() {
            Orientation::Horizontal => (cx + i, cy),
            Orientation::Vertical => (cx, cy + i),
        })
        .collect();
    if cells.iter().any(|&(x, y)| x >= BOARD_SIZE || y >= BOARD_SIZE) {
        return false;
    }
    for (other_index, other) in board.vehicles().iter().enumerate() {
        if other_index == index {
            continue;
        }
        if cells.iter().any(|&(x, y)| other.occupies(x, y)) {
            return false;
        }
    }
    true
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn validator_matches_cell_set_oracle(seed in any::<u64>()) {
        let board = random_board(seed);
        for index in 0..board.vehicles().len() {
            for cx in 0..BOARD_SIZE {
                for cy in 0..BOARD_SIZE {
                    prop_assert_eq!(
                        rules::is_legal(&board, index, cx, cy),
                        naive_is_legal(&board, index, cx, cy),
                        "vehicle {} candidate ({}, {})", index, cx, cy
                    );
                }
            }
        }
    }

    #[test]
    fn enumerated_moves_apply_cleanly(seed in any::<u64>()) {
        let board = random_board(seed);
        for mv in rules::moves(&board) {
            let mut next = board.clone();
            prop_assert!(next.apply(mv).is_ok());
            // the board stays internally consistent: no shared cells
            let total: usize = next
                .vehicles()
                .iter()
                .map(|v| v.length())
                .sum();
            prop_assert_eq!(next.occupancy().count_ones(), total);
        }
    }

    #[test]
    fn move_then_inverse_restores_key(seed in any::<u64>()) {
        let board = random_board(seed);
        let key = board.canonical_key();
        for mv in rules::moves(&board) {
            let mut next = board.clone();
            next.apply(mv).unwrap();
            prop_assert_ne!(next.canonical_key(), key.clone());
            let inverse = gridlock::Move {
                vehicle: mv.vehicle,
                direction: match mv.direction {
                    gridlock::Direction::Forward => gridlock::Direction::Backward,
                    gridlock::Direction::Backward => gridlock::Direction::Forward,
                },
            };
            next.apply(inverse).unwrap();
            prop_assert_eq!(next.canonical_key(), key.clone());
        }
    }

    #[test]
    fn clones_are_independent(seed in any::<u64>()) {
        let board = random_board(seed);
        let copy = board.clone();
        if let Some(&mv) = rules::moves(&board).first() {
            let mut moved = board.clone();
            moved.apply(mv).unwrap();
            prop_assert_eq!(&board, &copy);
            prop_assert_ne!(&moved, &copy);
        }
    }
}
