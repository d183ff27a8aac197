//! Text rendering of the two boards side by side.

use core::fmt;

use crate::board::Board;
use crate::config::BOARD_SIZE;

const LEFT_PAD: &str = "  ";
const DELIMITER: &str = "    ";

/// Write `left` and `right` next to each other: a label row, the nine board
/// rows and a closing label row.
pub fn render_pair<W: fmt::Write + ?Sized>(left: &Board, right: &Board, out: &mut W) -> fmt::Result {
    write_labels(out)?;
    for row in 0..BOARD_SIZE {
        out.write_str(LEFT_PAD)?;
        left.write_row(out, row)?;
        out.write_str(DELIMITER)?;
        right.write_row(out, row)?;
        out.write_str("\n")?;
    }
    write_labels(out)
}

fn write_labels<W: fmt::Write + ?Sized>(out: &mut W) -> fmt::Result {
    out.write_str(LEFT_PAD)?;
    Board::write_header(out)?;
    out.write_str(DELIMITER)?;
    Board::write_header(out)?;
    out.write_str("\n")
}
