use crate::grid::Cell;
use rand::Rng;

/// Draw a uniformly random free cell on a `width` x `height` board.
///
/// Rejection-samples until the candidate is outside `occupied`. Termination
/// is guaranteed as long as the body does not cover the whole board; a board
/// that full is unreachable in a normal session and is not handled here.
pub fn place(rng: &mut impl Rng, width: i32, height: i32, occupied: &[Cell]) -> Cell {
    loop {
        let candidate = Cell::new(rng.gen_range(0..width), rng.gen_range(0..height));
        if !occupied.contains(&candidate) {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_place_finds_the_single_free_cell() {
        // Occupy every cell of a 3x3 board except one.
        let mut occupied = Vec::new();
        for y in 0..3 {
            for x in 0..3 {
                if (x, y) != (2, 1) {
                    occupied.push(Cell::new(x, y));
                }
            }
        }

        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(place(&mut rng, 3, 3, &occupied), Cell::new(2, 1));
    }

    #[test]
    fn test_place_on_empty_board_is_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let cell = place(&mut rng, 32, 24, &[]);
            assert!((0..32).contains(&cell.x));
            assert!((0..24).contains(&cell.y));
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    proptest! {
        /// The placed cell never coincides with the occupying body.
        #[test]
        fn prop_food_never_lands_on_occupied(
            seed in any::<u64>(),
            body_row in 0i32..8,
            body_len in 1usize..7,
        ) {
            let occupied: Vec<Cell> =
                (0..body_len as i32).map(|x| Cell::new(x, body_row)).collect();

            let mut rng = StdRng::seed_from_u64(seed);
            let cell = place(&mut rng, 8, 8, &occupied);

            prop_assert!(!occupied.contains(&cell));
            prop_assert!((0..8).contains(&cell.x));
            prop_assert!((0..8).contains(&cell.y));
        }
    }
}
