// Probability-based targeting over the shadow board.
// Uses no_std and avoids heap allocations.

use crate::{
    board::Board,
    common::Cell,
    config::{BOARD_SIZE, NUM_SHIPS},
    coord::Move,
    ship::Orientation,
};
use rand::Rng;

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Placements covering more confirmed hits get far more weight, so an
/// unfinished ship is chased down before new water is explored.
const HIT_BIAS: f64 = 10.0;

/// Sampling temperature; below 1.0 sharpens the distribution.
pub const DEFAULT_TEMPERATURE: f64 = 0.5;

pub type Pdf = [[f64; GRID_SIZE]; GRID_SIZE];

/// Compute a probability density over the unexplored cells of `shadow`.
/// Every placement of every ship still afloat that avoids known water,
/// misses and sunk ships adds its weight to the open cells it covers.
pub fn calc_pdf(shadow: &Board) -> Pdf {
    let remaining: [usize; NUM_SHIPS] = shadow.remaining_ship_lengths();
    let mut matrix = [[0.0f64; GRID_SIZE]; GRID_SIZE];

    for &len in remaining.iter() {
        if len == 0 {
            continue;
        }
        let orientations: &[Orientation] = if len == 1 {
            &[Orientation::Horizontal]
        } else {
            &[Orientation::Horizontal, Orientation::Vertical]
        };
        for &orient in orientations {
            let (rows, cols) = match orient {
                Orientation::Horizontal => (GRID_SIZE, GRID_SIZE - len + 1),
                Orientation::Vertical => (GRID_SIZE - len + 1, GRID_SIZE),
            };
            for r in 0..rows {
                for c in 0..cols {
                    let Some(n_hits) = placement_hits(shadow, r, c, len, orient) else {
                        continue;
                    };
                    let weight = libm::pow(HIT_BIAS, n_hits as f64);
                    for (rr, cc) in segment(r, c, len, orient) {
                        if cell_at(shadow, rr, cc) == Cell::Unknown {
                            matrix[rr][cc] += weight;
                        }
                    }
                }
            }
        }
    }

    normalize(matrix)
}

/// Number of hit cells the placement covers, or `None` if it crosses a cell
/// that cannot hold a live ship.
fn placement_hits(shadow: &Board, r: usize, c: usize, len: usize, orient: Orientation) -> Option<usize> {
    let mut n_hits = 0;
    for (rr, cc) in segment(r, c, len, orient) {
        match cell_at(shadow, rr, cc) {
            Cell::Unknown => {}
            Cell::Hit => n_hits += 1,
            _ => return None,
        }
    }
    Some(n_hits)
}

fn segment(r: usize, c: usize, len: usize, orient: Orientation) -> impl Iterator<Item = (usize, usize)> {
    (0..len).map(move |k| match orient {
        Orientation::Horizontal => (r, c + k),
        Orientation::Vertical => (r + k, c),
    })
}

fn cell_at(shadow: &Board, r: usize, c: usize) -> Cell {
    Move::new(r as u8, c as u8).map_or(Cell::Miss, |mv| shadow.cell(mv))
}

fn normalize(mut matrix: Pdf) -> Pdf {
    let total: f64 = matrix.iter().flat_map(|row| row.iter()).sum();
    if total == 0.0 {
        return matrix;
    }
    for row in matrix.iter_mut() {
        for v in row.iter_mut() {
            *v /= total;
        }
    }
    matrix
}

/// Sample a cell from a probability matrix using a temperature parameter.
/// Cells with zero probability are never chosen; `None` means the matrix
/// is empty.
pub fn sample_pdf<R: Rng + ?Sized>(pdf: &Pdf, temperature: f64, rng: &mut R) -> Option<Move> {
    let mut adjusted = [[0.0f64; GRID_SIZE]; GRID_SIZE];
    let mut total = 0.0;
    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            let v = if pdf[r][c] > 0.0 {
                libm::pow(pdf[r][c], 1.0 / temperature)
            } else {
                0.0
            };
            adjusted[r][c] = v;
            total += v;
        }
    }
    if total <= 0.0 {
        return None;
    }
    let threshold: f64 = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    let mut last = None;
    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            if adjusted[r][c] == 0.0 {
                continue;
            }
            cumulative += adjusted[r][c];
            last = Move::new(r as u8, c as u8);
            if threshold < cumulative {
                return last;
            }
        }
    }
    // rounding left the threshold past the final bucket
    last
}

/// Pick the next cell to fire at. Falls back to a uniformly random
/// unexplored cell when no placement is consistent with the shadow board.
pub fn choose_target<R: Rng + ?Sized>(shadow: &Board, rng: &mut R) -> Option<Move> {
    let pdf = calc_pdf(shadow);
    sample_pdf(&pdf, DEFAULT_TEMPERATURE, rng).or_else(|| {
        let open = Move::all().filter(|&mv| shadow.cell(mv) == Cell::Unknown).count();
        if open == 0 {
            return None;
        }
        let pick = rng.random_range(0..open);
        Move::all().filter(|&mv| shadow.cell(mv) == Cell::Unknown).nth(pick)
    })
}
