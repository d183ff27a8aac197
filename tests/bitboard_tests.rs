use seabattle::{BitBoard, BitBoardError};

type Grid = BitBoard<u128, 9>;

#[test]
fn test_try_new_sizes() {
    // Success for board that fits
    let ok = BitBoard::<u128, 9>::try_new();
    assert!(ok.is_ok());

    // Failure when board is too large
    let err = BitBoard::<u64, 9>::try_new();
    assert!(matches!(err, Err(BitBoardError::SizeTooLarge { .. })));
}

#[test]
fn test_get_set() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());

    bb.set(1, 1).unwrap();
    assert!(bb.get(1, 1).unwrap());

    assert!(!bb.get(1, 2).unwrap());
    assert_eq!(bb.count_ones(), 1);

    assert_eq!(
        bb.set(4, 0),
        Err(BitBoardError::IndexOutOfBounds { row: 4, col: 0 })
    );
}

#[test]
fn test_full_and_not() {
    let full = Grid::full();
    assert_eq!(full.count_ones(), 81);
    assert!((!full).is_empty());

    let one = Grid::from_cells([(4, 4)]).unwrap();
    assert_eq!((!one).count_ones(), 80);
}

#[test]
fn test_from_cells_and_iter() {
    let bb = BitBoard::<u16, 4>::from_cells([(3, 3), (0, 1)]).unwrap();
    let bits: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 1), (3, 3)]);
}

#[test]
fn test_halo_clips_at_edges() {
    let corner = Grid::from_cells([(0, 0)]).unwrap();
    let halo = corner.halo();
    assert_eq!(halo, Grid::from_cells([(0, 0), (0, 1), (1, 0), (1, 1)]).unwrap());

    let centre = Grid::from_cells([(4, 4)]).unwrap();
    assert_eq!(centre.halo().count_ones(), 9);

    let far = Grid::from_cells([(8, 8)]).unwrap();
    assert_eq!(far.halo().count_ones(), 4);
}

#[test]
fn test_diagonals_within() {
    let cell = Grid::from_cells([(4, 4)]).unwrap();
    let diag = cell.diagonals_within(&Grid::full());
    assert_eq!(
        diag,
        Grid::from_cells([(3, 3), (3, 5), (5, 3), (5, 5)]).unwrap()
    );

    let limited = cell.diagonals_within(&Grid::from_cells([(3, 3), (4, 5)]).unwrap());
    assert_eq!(limited, Grid::from_cells([(3, 3)]).unwrap());
}

#[test]
fn test_grow_within_follows_edges_only() {
    let hits = Grid::from_cells([(2, 2), (2, 3), (2, 4), (3, 5), (6, 6)]).unwrap();
    let seed = Grid::from_cells([(2, 3)]).unwrap();
    let grown = seed.grow_within(&hits);
    // (3, 5) only touches (2, 4) diagonally
    assert_eq!(grown, Grid::from_cells([(2, 2), (2, 3), (2, 4)]).unwrap());

    let lone = Grid::from_cells([(6, 6)]).unwrap();
    assert_eq!(lone.grow_within(&hits), lone);
}
