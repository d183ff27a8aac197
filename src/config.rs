use crate::ship::ShipType;

pub const BOARD_SIZE: u8 = 9;
pub const NUM_SHIPS: usize = 10;
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Cruiser", 3),
    ShipType::new("Destroyer", 2),
    ShipType::new("Destroyer", 2),
    ShipType::new("Destroyer", 2),
    ShipType::new("Boat", 1),
    ShipType::new("Boat", 1),
    ShipType::new("Boat", 1),
    ShipType::new("Boat", 1),
];

/// Length of the longest ship in [`FLEET`].
pub const MAX_SHIP_LENGTH: usize = 4;

/// Total number of ship segments in the fleet.
pub const TOTAL_SHIP_CELLS: usize = 4 + 2 * 3 + 3 * 2 + 4;

/// Random attempts per ship before a partially built layout is discarded.
pub const PLACEMENT_ATTEMPTS: usize = 100;

/// Number of ships of the given length in the fleet.
pub const fn ships_of_length(length: usize) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i < NUM_SHIPS {
        if FLEET[i].length() == length {
            count += 1;
        }
        i += 1;
    }
    count
}
