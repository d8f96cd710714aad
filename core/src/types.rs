/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for mine counts, flag counts, and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Neighbor deltas `(d_row, d_col)` for cells on an even row.
///
/// Odd rows are shoved half a cell to the right, so an even row reaches back one column
/// into the rows above and below it.
const EVEN_ROW_DELTAS: [(i8, i8); 6] = [(-1, 0), (-1, -1), (0, -1), (0, 1), (1, 0), (1, -1)];

/// Neighbor deltas `(d_row, d_col)` for cells on an odd row.
const ODD_ROW_DELTAS: [(i8, i8); 6] = [(-1, 0), (-1, 1), (0, -1), (0, 1), (1, 0), (1, 1)];

const fn deltas_for_row(row: Coord) -> &'static [(i8, i8); 6] {
    if row % 2 == 0 {
        &EVEN_ROW_DELTAS
    } else {
        &ODD_ROW_DELTAS
    }
}

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (rows, cols) = bounds;

    let next_row = row.checked_add_signed(d_row)?;
    if next_row >= rows {
        return None;
    }

    let next_col = col.checked_add_signed(d_col)?;
    if next_col >= cols {
        return None;
    }

    Some((next_row, next_col))
}

/// Iterates the in-bounds hex neighbors of `center` on a board of size `bounds`.
///
/// Edge and corner cells yield fewer than six neighbors.
pub fn neighbors(center: Coord2, bounds: Coord2) -> NeighborIter {
    NeighborIter::new(center, bounds)
}

#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    deltas: &'static [(i8, i8); 6],
    index: u8,
}

impl NeighborIter {
    fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            deltas: deltas_for_row(center.0),
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= self.deltas.len() {
                return None;
            }

            let next_item = apply_delta(self.center, self.deltas[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn collect(center: Coord2, bounds: Coord2) -> Vec<Coord2> {
        neighbors(center, bounds).collect()
    }

    #[test]
    fn even_row_interior_reaches_left_diagonals() {
        assert_eq!(
            collect((2, 2), (5, 5)),
            [(1, 2), (1, 1), (2, 1), (2, 3), (3, 2), (3, 1)]
        );
    }

    #[test]
    fn odd_row_interior_reaches_right_diagonals() {
        assert_eq!(
            collect((1, 2), (5, 5)),
            [(0, 2), (0, 3), (1, 1), (1, 3), (2, 2), (2, 3)]
        );
    }

    #[test]
    fn corners_are_clipped_to_bounds() {
        assert_eq!(collect((0, 0), (3, 3)), [(0, 1), (1, 0)]);
        // odd row on the right edge loses both right diagonals
        assert_eq!(collect((1, 2), (3, 3)), [(0, 2), (1, 1), (2, 2)]);
        assert_eq!(collect((2, 0), (3, 3)), [(1, 0), (2, 1)]);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert!(collect((0, 0), (1, 1)).is_empty());
    }

    #[test]
    fn adjacency_is_symmetric() {
        let bounds = (6, 7);
        for row in 0..bounds.0 {
            for col in 0..bounds.1 {
                for other in neighbors((row, col), bounds) {
                    assert!(
                        neighbors(other, bounds).any(|pos| pos == (row, col)),
                        "{other:?} does not list {:?} back",
                        (row, col)
                    );
                }
            }
        }
    }
}
