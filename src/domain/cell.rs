/// State of one position on the field.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    pub const fn from_alive(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }

    /// State in the next generation given the live neighbor count (B3/S23)
    pub const fn evolve(self, neighbors: u8) -> Self {
        let alive = match self {
            Cell::Alive => neighbors == 2 || neighbors == 3,
            Cell::Dead => neighbors == 3,
        };
        Cell::from_alive(alive)
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        Cell::from_alive(alive)
    }
}

impl From<Cell> for bool {
    fn from(cell: Cell) -> Self {
        cell.is_alive()
    }
}
