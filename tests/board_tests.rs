use seabattle::{
    Board, BoardError, Cell, GameEngine, GameStatus, Move, Orientation, ShotResult, FLEET,
    NUM_SHIPS, TOTAL_SHIP_CELLS,
};

fn mv(s: &str) -> Move {
    s.parse().unwrap()
}

#[test]
fn test_manual_place_and_shoot_sink() {
    let mut board = Board::new();
    board.place(0, 0, 0, Orientation::Horizontal).unwrap();

    for s in ["A1", "B1", "C1"] {
        assert_eq!(board.shoot(mv(s)), ShotResult::Hit);
    }
    // final segment sinks the battleship
    assert_eq!(board.shoot(mv("D1")), ShotResult::Kill);
    assert_eq!(board.sunk_ships(), 1);
    assert!(board.ships()[0].unwrap().is_sunk());

    // shooting the wreck again changes nothing
    assert_eq!(board.shoot(mv("D1")), ShotResult::Miss);
    assert_eq!(board.shoot(mv("A1")), ShotResult::Miss);
    assert_eq!(board.sunk_ships(), 1);
    assert_eq!(board.cell(mv("A1")), Cell::Killed);
}

#[test]
fn test_killing_last_live_ship_loses() {
    let mut board = Board::new();
    board.place(6, 0, 0, Orientation::Horizontal).unwrap();
    board.place(7, 8, 8, Orientation::Horizontal).unwrap();

    assert_eq!(board.shoot(mv("A1")), ShotResult::Kill);
    assert!(!board.is_loser());
    assert_eq!(board.ships_afloat(), 1);

    assert_eq!(board.shoot(mv("I9")), ShotResult::Kill);
    assert!(board.is_loser());
    assert_eq!(board.remaining_health(), 0);

    // a lost board stays lost
    assert_eq!(board.shoot(mv("E5")), ShotResult::Miss);
    assert!(board.is_loser());
}

#[test]
fn test_single_boat_kill_loses() {
    let mut board = Board::new();
    board.place(6, 0, 0, Orientation::Horizontal).unwrap();
    assert!(!board.is_loser());
    assert_eq!(board.shoot(mv("A1")), ShotResult::Kill);
    assert!(board.is_loser());

    let engine = GameEngine::new(board);
    assert_eq!(engine.status(), GameStatus::Lost);
}

#[test]
fn test_board_without_ships_has_not_lost() {
    assert!(!Board::new().is_loser());
    assert!(!Board::shadow().is_loser());
}

#[test]
fn test_shoot_water_then_repeat() {
    let mut board = Board::new();
    board.place(6, 4, 4, Orientation::Horizontal).unwrap();

    assert_eq!(board.shoot(mv("A1")), ShotResult::Miss);
    assert_eq!(board.cell(mv("A1")), Cell::Miss);
    assert_eq!(board.shoot(mv("A1")), ShotResult::Miss);
    assert_eq!(board.cell(mv("A1")), Cell::Miss);
    assert_eq!(board.remaining_health(), 1);
}

#[test]
fn test_place_rejects_touching_ships() {
    let mut board = Board::new();
    board.place(0, 0, 0, Orientation::Horizontal).unwrap();

    // diagonal contact with D1
    assert_eq!(
        board.place(6, 1, 4, Orientation::Horizontal),
        Err(BoardError::ShipTouches)
    );
    // overlap
    assert_eq!(
        board.place(1, 0, 2, Orientation::Vertical),
        Err(BoardError::ShipTouches)
    );
    board.place(6, 1, 5, Orientation::Horizontal).unwrap();
    assert_eq!(board.ship_map().count_ones(), 5);
}

#[test]
fn test_place_errors() {
    let mut board = Board::new();
    assert_eq!(
        board.place(0, 0, 6, Orientation::Horizontal),
        Err(BoardError::ShipOutOfBounds)
    );
    assert_eq!(
        board.place(1, 7, 0, Orientation::Vertical),
        Err(BoardError::ShipOutOfBounds)
    );
    assert_eq!(
        board.place(NUM_SHIPS, 0, 0, Orientation::Vertical),
        Err(BoardError::InvalidIndex)
    );
    board.place(0, 0, 0, Orientation::Vertical).unwrap();
    assert_eq!(
        board.place(0, 5, 5, Orientation::Vertical),
        Err(BoardError::ShipAlreadyPlaced)
    );
}

#[test]
fn test_random_board_has_full_fleet() {
    let board = Board::from_seed(42);
    assert!(board.ships().iter().all(Option::is_some));
    assert_eq!(board.ship_map().count_ones(), TOTAL_SHIP_CELLS);
    assert_eq!(board.ships_afloat(), NUM_SHIPS);
    assert_eq!(board.remaining_health(), TOTAL_SHIP_CELLS);
    assert!(!board.is_loser());
}

#[test]
fn test_same_seed_same_layout() {
    let a = Board::from_seed(7);
    let b = Board::from_seed(7);
    assert_eq!(a.ship_map(), b.ship_map());
    assert_eq!(a.to_string(), b.to_string());
}

#[test]
fn test_sinking_every_ship_loses() {
    let mut board = Board::from_seed(99);
    let targets: Vec<Move> = Move::all()
        .filter(|&m| board.cell(m) == Cell::Ship)
        .collect();
    assert_eq!(targets.len(), TOTAL_SHIP_CELLS);

    let mut kills = 0;
    let mut hits = 0;
    for (i, &m) in targets.iter().enumerate() {
        assert!(!board.is_loser(), "lost before shot {}", i);
        match board.shoot(m) {
            ShotResult::Kill => kills += 1,
            ShotResult::Hit => hits += 1,
            ShotResult::Miss => panic!("ship cell {} reported as miss", m),
        }
    }
    assert_eq!(kills, NUM_SHIPS);
    assert_eq!(hits, TOTAL_SHIP_CELLS - NUM_SHIPS);
    assert!(board.is_loser());
    assert_eq!(board.ships_afloat(), 0);
    assert_eq!(board.remaining_health(), 0);
}

#[test]
fn test_shadow_starts_unknown() {
    let shadow = Board::shadow();
    assert!(Move::all().all(|m| shadow.cell(m) == Cell::Unknown));
    assert!(!shadow.is_loser());
    let expected: Vec<usize> = FLEET.iter().map(|s| s.length()).collect();
    assert_eq!(shadow.remaining_ship_lengths().to_vec(), expected);
}

#[test]
fn test_shadow_hit_marks_diagonals_as_water() {
    let mut shadow = Board::shadow();
    shadow.mark_hit(mv("E5"));
    assert_eq!(shadow.cell(mv("E5")), Cell::Hit);
    for s in ["D4", "F4", "D6", "F6"] {
        assert_eq!(shadow.cell(mv(s)), Cell::Empty, "{}", s);
    }
    for s in ["E4", "E6", "D5", "F5"] {
        assert_eq!(shadow.cell(mv(s)), Cell::Unknown, "{}", s);
    }
}

#[test]
fn test_shadow_kill_infers_ship_and_ring() {
    let mut shadow = Board::shadow();
    shadow.mark_hit(mv("E5"));
    shadow.mark_kill(mv("E6"));

    assert_eq!(shadow.cell(mv("E5")), Cell::Killed);
    assert_eq!(shadow.cell(mv("E6")), Cell::Killed);
    for s in ["D4", "E4", "F4", "D5", "F5", "D6", "F6", "D7", "E7", "F7"] {
        assert_eq!(shadow.cell(mv(s)), Cell::Empty, "{}", s);
    }
    assert_eq!(shadow.cell(mv("E8")), Cell::Unknown);
    assert_eq!(shadow.sunk_ships(), 1);

    // exactly one destroyer is gone from the remaining fleet
    let remaining = shadow.remaining_ship_lengths();
    assert_eq!(remaining.iter().filter(|&&l| l == 2).count(), 2);
    assert_eq!(remaining.iter().filter(|&&l| l == 0).count(), 1);
}

#[test]
fn test_shadow_settled_cells_do_not_change() {
    let mut shadow = Board::shadow();
    shadow.mark_kill(mv("A1"));
    shadow.mark_kill(mv("A1"));
    assert_eq!(shadow.sunk_ships(), 1);

    shadow.mark_miss(mv("A1"));
    assert_eq!(shadow.cell(mv("A1")), Cell::Killed);

    shadow.mark_miss(mv("C3"));
    shadow.mark_hit(mv("C3"));
    assert_eq!(shadow.cell(mv("C3")), Cell::Miss);
}

#[test]
fn test_apply_mirrors_own_board() {
    let mut own = Board::from_seed(5);
    let mut shadow = Board::shadow();
    for m in Move::all() {
        let result = own.shoot(m);
        shadow.apply(m, result);
    }
    assert!(own.is_loser());
    assert!(shadow.is_loser());
    for m in Move::all() {
        assert_eq!(own.cell(m), shadow.cell(m), "{}", m);
    }
}

#[test]
fn test_render_own_and_shadow() {
    let mut board = Board::new();
    board.place(0, 0, 0, Orientation::Horizontal).unwrap();
    board.shoot(mv("A1"));
    board.shoot(mv("A2"));

    let text = board.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "  A B C D E F G H I  ");
    assert_eq!(lines[1], "1 x o o o . . . . . 1");
    assert_eq!(lines[2], "2 * . . . . . . . . 2");
    assert_eq!(lines[10], lines[0]);

    let shadow = Board::shadow();
    let text = shadow.to_string();
    assert_eq!(text.lines().nth(9), Some("9 ? ? ? ? ? ? ? ? ? 9"));
}
