use rand::Rng;

use crate::{
    models::{Grid, Position, Tile},
    utils::letters::{get_cumulative_distribution, weight_total},
};

pub struct GridGenerator;

impl GridGenerator {
    /// Generate a new `size` x `size` grid with weighted letter distribution
    pub fn generate(size: usize) -> Grid {
        Self::generate_with(size, &mut rand::rng())
    }

    /// Same as [`generate`](Self::generate) with a caller-supplied RNG, so a
    /// seeded source produces a reproducible board.
    pub fn generate_with(size: usize, rng: &mut impl Rng) -> Grid {
        let cumulative_dist = get_cumulative_distribution();
        let total = weight_total();

        let mut cells = Vec::with_capacity(size);

        for row in 0..size {
            let mut tiles = Vec::with_capacity(size);
            for col in 0..size {
                tiles.push(Tile {
                    position: Position::new(row, col),
                    letter: Self::random_letter(&cumulative_dist, total, rng),
                });
            }
            cells.push(tiles);
        }

        Grid::from_cells(cells)
    }

    fn random_letter(cumulative_dist: &[(char, u32)], total: u32, rng: &mut impl Rng) -> char {
        let random_value = rng.random_range(0..total);

        for (letter, cumulative) in cumulative_dist {
            if random_value < *cumulative {
                return *letter;
            }
        }

        'E' // Fallback
    }
}
