//! One player's 9×9 sea: ship layout, shot history and win detection.
//!
//! The same type serves as the authoritative board (built with real ships
//! and resolved with [`Board::shoot`]) and as the shadow board that
//! reconstructs the opponent from reported results through the `mark_*`
//! methods.

use core::fmt;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Cell, ShotResult};
use crate::config::{BOARD_SIZE, FLEET, MAX_SHIP_LENGTH, NUM_SHIPS, PLACEMENT_ATTEMPTS};
use crate::coord::Move;
use crate::ship::{Orientation, Ship};

type BB = BitBoard<u128, { BOARD_SIZE as usize }>;
type FleetShip = Ship<u128, { BOARD_SIZE as usize }>;

const SIZE: usize = BOARD_SIZE as usize;

pub struct Board {
    ships: [Option<FleetShip>; NUM_SHIPS],
    ship_map: BB,
    hits: BB,
    kills: BB,
    misses: BB,
    // cells known to hold no ship
    water: BB,
    // sunk ships counted by length
    sunk: [u8; MAX_SHIP_LENGTH + 1],
}

impl Board {
    /// An own board with no ships placed yet: every cell is open water.
    pub fn new() -> Self {
        Self::with_water(BB::full())
    }

    /// A shadow board for tracking the opponent: every cell is unknown.
    pub fn shadow() -> Self {
        Self::with_water(BB::new())
    }

    fn with_water(water: BB) -> Self {
        Board {
            ships: [None; NUM_SHIPS],
            ship_map: BB::new(),
            hits: BB::new(),
            kills: BB::new(),
            misses: BB::new(),
            water,
            sunk: [0; MAX_SHIP_LENGTH + 1],
        }
    }

    /// Deterministic random fleet for `seed`.
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        Self::random(&mut rng)
    }

    /// Build a complete fleet layout from `rng`, largest ships first. A layout
    /// that gets stuck is discarded and rebuilt, so this only returns once
    /// every ship is placed.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        'layout: loop {
            let mut board = Board::new();
            for i in 0..NUM_SHIPS {
                let placed = board
                    .random_placement(rng, i)
                    .and_then(|(r, c, o)| board.place(i, r, c, o));
                if placed.is_err() {
                    log::trace!("fleet layout stuck at ship {}, starting over", i);
                    continue 'layout;
                }
            }
            return board;
        }
    }

    /// Place fleet ship `ship_index` with its bow at (row, col). The ship may
    /// neither overlap nor touch, even diagonally, a ship already placed.
    pub fn place(
        &mut self,
        ship_index: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        if ship_index >= NUM_SHIPS {
            return Err(BoardError::InvalidIndex);
        }
        if self.ships[ship_index].is_some() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        let ship = FleetShip::new(FLEET[ship_index], orientation, row, col)?;
        if !(self.ship_map.halo() & ship.mask()).is_empty() {
            return Err(BoardError::ShipTouches);
        }
        self.ship_map |= ship.mask();
        self.water = !self.ship_map;
        self.ships[ship_index] = Some(ship);
        Ok(())
    }

    /// Returns a random legal (row, col, Orientation) for `ship_index`.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        ship_index: usize,
    ) -> Result<(usize, usize, Orientation), BoardError> {
        if ship_index >= NUM_SHIPS {
            return Err(BoardError::InvalidIndex);
        }
        let def = FLEET[ship_index];
        let blocked = self.ship_map.halo();
        for _ in 0..PLACEMENT_ATTEMPTS {
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orient {
                Orientation::Horizontal => (SIZE - 1, SIZE - def.length()),
                Orientation::Vertical => (SIZE - def.length(), SIZE - 1),
            };
            let r = rng.random_range(0..=max_r);
            let c = rng.random_range(0..=max_c);
            let ship = FleetShip::new(def, orient, r, c)?;
            if (blocked & ship.mask()).is_empty() {
                return Ok((r, c, orient));
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Resolve an incoming shot against the real layout.
    ///
    /// A cell that was shot before resolves to [`ShotResult::Miss`] and
    /// leaves the board untouched, so a ship can never lose the same segment
    /// twice nor be reported sunk twice.
    pub fn shoot(&mut self, mv: Move) -> ShotResult {
        let (row, col) = mv.index();
        if self.is_shot(row, col) {
            return ShotResult::Miss;
        }
        if !self.ship_map.get(row, col).unwrap_or(false) {
            let _ = self.misses.set(row, col);
            return ShotResult::Miss;
        }

        let _ = self.hits.set(row, col);
        let Some(ship) = self.ships.iter_mut().flatten().find(|s| s.contains(row, col)) else {
            return ShotResult::Hit;
        };
        ship.register_hit(row, col);
        if ship.is_sunk() {
            let footprint = ship.mask();
            self.record_kill(footprint);
            ShotResult::Kill
        } else {
            ShotResult::Hit
        }
    }

    /// Apply a result reported for `mv` without re-deriving it.
    pub fn apply(&mut self, mv: Move, result: ShotResult) {
        match result {
            ShotResult::Miss => self.mark_miss(mv),
            ShotResult::Hit => self.mark_hit(mv),
            ShotResult::Kill => self.mark_kill(mv),
        }
    }

    /// Record a shot into water. Cells already known to be hit stay hit.
    pub fn mark_miss(&mut self, mv: Move) {
        let (row, col) = mv.index();
        if self.hits.get(row, col).unwrap_or(true) {
            return;
        }
        let _ = self.misses.set(row, col);
        let _ = self.water.set(row, col);
    }

    /// Record a hit. Since ships never touch, the diagonal neighbours of a
    /// hit are water.
    pub fn mark_hit(&mut self, mv: Move) {
        let (row, col) = mv.index();
        if self.is_settled(row, col) {
            return;
        }
        let _ = self.hits.set(row, col);
        let mut cell = BB::new();
        let _ = cell.set(row, col);
        self.water |= cell.diagonals_within(&!self.ship_map);
    }

    /// Record a kill. The sunk ship is the run of hit cells connected to
    /// `mv`; it is marked killed and the ring around it becomes water.
    pub fn mark_kill(&mut self, mv: Move) {
        let (row, col) = mv.index();
        if self.is_settled(row, col) {
            return;
        }
        self.mark_hit(mv);
        let mut cell = BB::new();
        let _ = cell.set(row, col);
        let footprint = cell.grow_within(&self.hits);
        self.record_kill(footprint);
    }

    fn record_kill(&mut self, footprint: BB) {
        self.kills |= footprint;
        self.water |= footprint.halo() & !footprint & !self.ship_map;
        let length = footprint.count_ones().min(MAX_SHIP_LENGTH);
        self.sunk[length] = self.sunk[length].saturating_add(1);
    }

    // killed or missed cells never change again
    fn is_settled(&self, row: usize, col: usize) -> bool {
        self.kills.get(row, col).unwrap_or(true) || self.misses.get(row, col).unwrap_or(true)
    }

    fn is_shot(&self, row: usize, col: usize) -> bool {
        self.hits.get(row, col).unwrap_or(false) || self.misses.get(row, col).unwrap_or(false)
    }

    /// `true` once every ship on the board has been sunk. A shadow board has
    /// no placed ships and relies on the kills reported to it instead.
    pub fn is_loser(&self) -> bool {
        let mut placed = self.ships.iter().flatten().peekable();
        if placed.peek().is_some() {
            placed.all(|s| s.is_sunk())
        } else {
            self.sunk_ships() == NUM_SHIPS
        }
    }

    /// Number of ships sunk so far.
    pub fn sunk_ships(&self) -> usize {
        self.sunk.iter().map(|&n| n as usize).sum()
    }

    /// Ships of the placed fleet that still have intact segments.
    pub fn ships_afloat(&self) -> usize {
        self.ships.iter().flatten().filter(|s| !s.is_sunk()).count()
    }

    /// Sum of the health of every placed ship.
    pub fn remaining_health(&self) -> usize {
        self.ships.iter().flatten().map(|s| s.health()).sum()
    }

    /// Lengths of fleet ships not yet known to be sunk; sunk entries are 0.
    pub fn remaining_ship_lengths(&self) -> [usize; NUM_SHIPS] {
        let mut sunk = self.sunk;
        let mut lens = [0usize; NUM_SHIPS];
        for (i, def) in FLEET.iter().enumerate() {
            let len = def.length();
            if sunk[len] > 0 {
                sunk[len] -= 1;
            } else {
                lens[i] = len;
            }
        }
        lens
    }

    /// Placed ships, indexed like [`FLEET`].
    pub fn ships(&self) -> &[Option<FleetShip>] {
        &self.ships
    }

    /// Occupancy mask of all placed ships.
    pub fn ship_map(&self) -> BB {
        self.ship_map
    }

    pub fn cell(&self, mv: Move) -> Cell {
        let (row, col) = mv.index();
        let at = |bb: &BB| bb.get(row, col).unwrap_or(false);
        if at(&self.kills) {
            Cell::Killed
        } else if at(&self.hits) {
            Cell::Hit
        } else if at(&self.misses) {
            Cell::Miss
        } else if at(&self.ship_map) {
            Cell::Ship
        } else if at(&self.water) {
            Cell::Empty
        } else {
            Cell::Unknown
        }
    }

    /// Column labels, aligned with [`Board::write_row`].
    pub fn write_header<W: fmt::Write + ?Sized>(out: &mut W) -> fmt::Result {
        out.write_str("  ")?;
        for c in 0..BOARD_SIZE {
            write!(out, "{} ", (b'A' + c) as char)?;
        }
        out.write_str(" ")
    }

    /// Row label followed by the nine cell glyphs of `row`.
    pub fn write_row<W: fmt::Write + ?Sized>(&self, out: &mut W, row: u8) -> fmt::Result {
        write!(out, "{} ", row + 1)?;
        for col in 0..BOARD_SIZE {
            let glyph = Move::new(row, col).map_or(' ', |mv| self.cell(mv).glyph());
            write!(out, "{} ", glyph)?;
        }
        write!(out, "{}", row + 1)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Board::write_header(f)?;
        writeln!(f)?;
        for row in 0..BOARD_SIZE {
            self.write_row(f, row)?;
            writeln!(f)?;
        }
        Board::write_header(f)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("ships", &self.ships)
            .field("sunk", &self.sunk_ships())
            .finish_non_exhaustive()
    }
}
