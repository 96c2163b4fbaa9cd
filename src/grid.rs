//! Coordinate arithmetic for the toroidal board.
//!
//! Everything here is a pure function on grid units (columns and rows, not
//! pixels). The board has no walls: crossing an edge wraps to the far side.

/// A single board cell, addressed by column and row. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighboring cell one step in `direction`, without wrapping.
    pub fn moved(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Cell::new(self.x + dx, self.y + dy)
    }
}

/// Wrap a coordinate onto a board axis of the given size.
/// The result is always in `[0, dimension)`, including for negative inputs.
pub fn wrap(coord: i32, dimension: i32) -> i32 {
    coord.rem_euclid(dimension)
}

/// Unit-normalized delta between two cells: each component is the sign of
/// the raw difference, clamped to {-1, 0, 1}. Cells sitting on opposite
/// edges of the board differ by almost a full board span, but still read
/// as a single step.
pub fn delta(a: Cell, b: Cell) -> (i32, i32) {
    ((a.x - b.x).signum(), (a.y - b.y).signum())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit offset in grid coordinates; `y` grows downward, so Up is (0, -1).
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Inverse of [`offset`](Self::offset); `None` for anything that is not
    /// a unit cardinal step.
    pub fn from_delta(delta: (i32, i32)) -> Option<Direction> {
        match delta {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_DIRECTIONS: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    #[test]
    fn test_wrap_negative_coordinates() {
        assert_eq!(wrap(-1, 32), 31);
        assert_eq!(wrap(-32, 32), 0);
        assert_eq!(wrap(32, 32), 0);
        assert_eq!(wrap(5, 32), 5);
    }

    #[test]
    fn test_delta_clamps_wraparound_spans() {
        // Head on the right edge, tail on the left edge of a 32-wide board:
        // the raw difference is 31 but it reads as a single step.
        let head = Cell::new(31, 5);
        let tail = Cell::new(0, 5);
        assert_eq!(delta(head, tail), (1, 0));
        assert_eq!(delta(tail, head), (-1, 0));
        assert_eq!(delta(head, head), (0, 0));
    }

    #[test]
    fn test_opposite_is_an_involution() {
        for direction in ALL_DIRECTIONS {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_ne!(direction.opposite(), direction);
        }
    }

    #[test]
    fn test_from_delta_inverts_offset() {
        for direction in ALL_DIRECTIONS {
            assert_eq!(Direction::from_delta(direction.offset()), Some(direction));
        }
        assert_eq!(Direction::from_delta((0, 0)), None);
        assert_eq!(Direction::from_delta((1, 1)), None);
        assert_eq!(Direction::from_delta((2, 0)), None);
    }

    #[test]
    fn test_moved_matches_offset() {
        let cell = Cell::new(3, 7);
        assert_eq!(cell.moved(Direction::Up), Cell::new(3, 6));
        assert_eq!(cell.moved(Direction::Down), Cell::new(3, 8));
        assert_eq!(cell.moved(Direction::Left), Cell::new(2, 7));
        assert_eq!(cell.moved(Direction::Right), Cell::new(4, 7));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// wrap always lands inside the board axis, whatever the input.
        #[test]
        fn prop_wrap_stays_in_range(
            coord in -10_000i32..10_000,
            dimension in 1i32..200,
        ) {
            let wrapped = wrap(coord, dimension);
            prop_assert!(
                (0..dimension).contains(&wrapped),
                "wrap({}, {}) = {} is outside [0, {})",
                coord, dimension, wrapped, dimension
            );
        }

        /// delta components never exceed a unit step in magnitude.
        #[test]
        fn prop_delta_components_are_unit(
            ax in -100i32..100, ay in -100i32..100,
            bx in -100i32..100, by in -100i32..100,
        ) {
            let (dx, dy) = delta(Cell::new(ax, ay), Cell::new(bx, by));
            prop_assert!((-1..=1).contains(&dx));
            prop_assert!((-1..=1).contains(&dy));
        }
    }
}
