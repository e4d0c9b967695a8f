use rand::Rng;

use crate::grid::{self, Cell};

/// Food item currently on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Cell,
}

impl Food {
    /// Creates food at a fixed `position`.
    #[must_use]
    pub fn at(position: Cell) -> Self {
        Self { position }
    }

    /// Creates food on a random cell of an `n`×`n` grid outside `excluding`.
    #[must_use]
    pub fn spawn<'a, R, I>(rng: &mut R, n: u16, excluding: I) -> Self
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = &'a Cell> + Copy,
    {
        Self::at(random_free_cell(rng, n, excluding))
    }

    /// Moves the food to a random cell outside `excluding`.
    ///
    /// Must not be called while `excluding` covers the whole grid.
    pub fn place_randomly<'a, R, I>(&mut self, rng: &mut R, n: u16, excluding: I)
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = &'a Cell> + Copy,
    {
        self.position = random_free_cell(rng, n, excluding);
    }
}

/// Draws uniform cells until one is not in `excluding`.
fn random_free_cell<'a, R, I>(rng: &mut R, n: u16, excluding: I) -> Cell
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = &'a Cell> + Copy,
{
    debug_assert!(n > 0);

    let upper = i32::from(n);
    loop {
        let candidate = Cell {
            x: rng.gen_range(0..upper),
            y: rng.gen_range(0..upper),
        };
        if !grid::contains(excluding, candidate) {
            return candidate;
        }
    }
}
