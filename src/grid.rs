/// Grid cell in logical coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring cell one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns true when the cell lies inside an `n`×`n` grid.
    #[must_use]
    pub fn is_within(self, n: u16) -> bool {
        let n = i32::from(n);
        (0..n).contains(&self.x) && (0..n).contains(&self.y)
    }
}

/// Canonical movement directions.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Unit vector for this direction; y grows downwards.
    #[must_use]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Returns true if any of `cells` equals `cell`.
#[must_use]
pub fn contains<'a, I>(cells: I, cell: Cell) -> bool
where
    I: IntoIterator<Item = &'a Cell>,
{
    cells.into_iter().any(|candidate| *candidate == cell)
}

/// Returns true when `cell` sits on one of the four indices just outside an
/// `n`×`n` grid: -1 or `n` on either axis.
///
/// A snake moves one cell per tick from inside the grid, so these are the
/// only out-of-grid cells its head can ever reach.
#[must_use]
pub fn hits_edge(cell: Cell, n: u16) -> bool {
    let n = i32::from(n);
    cell.x == -1 || cell.x == n || cell.y == -1 || cell.y == n
}
