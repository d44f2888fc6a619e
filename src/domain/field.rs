use std::mem;

use super::{Cell, Preset};
use crate::error::{Error, Result};

/// Field holds the toroidal cell grid.
///
/// Two equally sized buffers are kept: `buffers[current]` is the
/// authoritative generation, the other is scratch space that `step`
/// fully overwrites before the two swap roles.
#[derive(Clone, Debug)]
pub struct Field {
    width: usize,
    height: usize,
    buffers: [Vec<Cell>; 2],
    current: usize,
    generation: u64,
}

impl Field {
    /// Create a new field with all cells dead
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyField { width, height });
        }

        Ok(Self {
            width,
            height,
            buffers: [
                vec![Cell::Dead; width * height],
                vec![Cell::Dead; width * height],
            ],
            current: 0,
            generation: 0,
        })
    }

    pub fn with_preset(width: usize, height: usize, preset: Preset) -> Result<Self> {
        let mut field = Self::new(width, height)?;
        field.apply_preset(preset);
        Ok(field)
    }

    /// Get field dimensions as (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Steps completed since the last preset was applied
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Reduce any coordinate pair onto the torus and return its buffer index.
    /// Uses euclidean remainder so negative offsets wrap to the far edge.
    fn wrap(&self, x: i64, y: i64) -> usize {
        let col = x.rem_euclid(self.width as i64) as usize;
        let row = y.rem_euclid(self.height as i64) as usize;
        row * self.width + col
    }

    fn cells(&self) -> &[Cell] {
        &self.buffers[self.current]
    }

    /// Liveness of the cell at (x, y); any integer pair is valid
    pub fn get(&self, x: i64, y: i64) -> bool {
        self.cells()[self.wrap(x, y)].is_alive()
    }

    /// Set the cell at (x, y), wrapping like `get`
    pub fn set(&mut self, x: i64, y: i64, alive: bool) {
        let idx = self.wrap(x, y);
        self.buffers[self.current][idx] = Cell::from_alive(alive);
    }

    /// Count live cells among the 8 surrounding (x, y) on the torus
    pub fn live_neighbors(&self, x: i64, y: i64) -> u8 {
        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter(|&(dx, dy)| self.get(x + dx, y + dy))
            .count() as u8
    }

    /// Advance one generation.
    ///
    /// The next state is computed entirely from the current buffer into the
    /// scratch buffer, then the buffer roles are swapped. `&mut self` keeps
    /// readers out for the whole step, so a half-written generation is never
    /// observable.
    pub fn step(&mut self) {
        let scratch_idx = 1 - self.current;
        let mut scratch = mem::take(&mut self.buffers[scratch_idx]);

        for row in 0..self.height {
            for col in 0..self.width {
                let idx = row * self.width + col;
                let neighbors = self.live_neighbors(col as i64, row as i64);
                scratch[idx] = self.cells()[idx].evolve(neighbors);
            }
        }

        self.buffers[scratch_idx] = scratch;
        self.current = scratch_idx;
        self.generation += 1;
    }

    /// Overwrite the whole current generation with `preset`
    pub fn apply_preset(&mut self, preset: Preset) {
        let width = self.width;
        self.buffers[self.current]
            .iter_mut()
            .enumerate()
            .for_each(|(idx, cell)| *cell = preset.cell_at(idx % width, idx / width));
        self.generation = 0;
    }

    /// Number of live cells in the current generation
    pub fn population(&self) -> usize {
        self.cells().iter().filter(|cell| cell.is_alive()).count()
    }

    /// Live cell positions, column by column then row by row
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.width)
            .flat_map(move |col| (0..self.height).map(move |row| (col, row)))
            .filter(|&(col, row)| self.cells()[row * self.width + col].is_alive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn field_with(width: usize, height: usize, live: &[(i64, i64)]) -> Field {
        let mut field = Field::new(width, height).unwrap();
        for &(x, y) in live {
            field.set(x, y, true);
        }
        field
    }

    fn snapshot(field: &Field) -> Vec<(usize, usize)> {
        field.live_cells().collect()
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            Field::new(0, 5),
            Err(Error::EmptyField {
                width: 0,
                height: 5
            })
        ));
        assert!(Field::new(5, 0).is_err());
    }

    #[test]
    fn test_negative_coordinates_wrap() {
        let field = field_with(4, 3, &[(3, 2)]);
        assert!(field.get(-1, -1));
        assert!(field.get(7, 5));
        assert!(field.get(-5, -4));
        assert!(!field.get(0, 0));
    }

    #[test]
    fn test_neighbors_wrap_across_corner() {
        let field = field_with(5, 5, &[(4, 4), (1, 0), (0, 4)]);
        assert_eq!(field.live_neighbors(0, 0), 3);
    }

    #[test]
    fn test_empty_is_fixed_point() {
        let mut field = Field::with_preset(8, 6, Preset::Empty).unwrap();
        field.step();
        assert_eq!(field.population(), 0);
    }

    #[test]
    fn test_stable_squares_is_fixed_point() {
        for (w, h) in [(64, 64), (9, 9), (10, 7)] {
            let mut field = Field::with_preset(w, h, Preset::StableSquares).unwrap();
            let before = snapshot(&field);
            field.step();
            assert_eq!(snapshot(&field), before, "{w}x{h} changed after one step");
        }
    }

    #[test]
    fn test_lonely_cell_dies() {
        let mut field = field_with(5, 5, &[(2, 2)]);
        field.step();
        assert_eq!(field.population(), 0);
    }

    #[test]
    fn test_three_neighbors_births_and_sustains() {
        let mut dead_center = field_with(5, 5, &[(1, 1), (2, 1), (3, 1)]);
        dead_center.step();
        assert!(dead_center.get(2, 2));

        let mut live_center = field_with(5, 5, &[(1, 1), (2, 1), (3, 1), (2, 2)]);
        live_center.step();
        assert!(live_center.get(2, 2));
    }

    #[test]
    fn test_full_block_center_dies() {
        let block: Vec<_> = (2..5).flat_map(|x| (2..5).map(move |y| (x, y))).collect();
        let mut field = field_with(7, 7, &block);
        assert_eq!(field.live_neighbors(3, 3), 8);
        field.step();
        assert!(!field.get(3, 3));
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut field = field_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        field.step();
        assert_eq!(snapshot(&field), vec![(2, 1), (2, 2), (2, 3)]);
        field.step();
        assert_eq!(snapshot(&field), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn test_glider_returns_after_circling_torus() {
        let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
        let mut field = field_with(8, 8, &glider);
        let start = snapshot(&field);
        // A glider moves one cell diagonally every 4 generations
        for _ in 0..32 {
            field.step();
        }
        assert_eq!(snapshot(&field), start);
        assert_eq!(field.generation(), 32);
    }

    #[test]
    fn test_apply_preset_resets_generation() {
        let mut field = Field::with_preset(6, 6, Preset::StableSquares).unwrap();
        field.step();
        field.apply_preset(Preset::Empty);
        assert_eq!(field.generation(), 0);
        assert_eq!(field.population(), 0);
    }

    #[test]
    fn test_live_cells_column_major() {
        let field = field_with(3, 3, &[(1, 0), (0, 2), (0, 1)]);
        assert_eq!(snapshot(&field), vec![(0, 1), (0, 2), (1, 0)]);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_get_is_periodic(
            (w, h, alive) in (1usize..12, 1usize..12).prop_flat_map(|(w, h)| {
                (Just(w), Just(h), prop::collection::vec(any::<bool>(), w * h))
            }),
            x in -10_000i64..10_000,
            y in -10_000i64..10_000,
            k in -50i64..50,
            j in -50i64..50,
        ) {
            let mut field = Field::new(w, h).unwrap();
            for (idx, &a) in alive.iter().enumerate() {
                field.set((idx % w) as i64, (idx / w) as i64, a);
            }
            let (shifted_x, shifted_y) = (x + k * w as i64, y + j * h as i64);
            prop_assert_eq!(field.get(x, y), field.get(shifted_x, shifted_y));
        }

        #[test]
        fn test_step_is_deterministic(
            seeds in prop::collection::vec((0i64..16, 0i64..16), 0..60),
            steps in 1usize..20,
        ) {
            let mut a = field_with(16, 16, &seeds);
            let mut b = field_with(16, 16, &seeds);
            for _ in 0..steps {
                a.step();
                b.step();
            }
            prop_assert_eq!(snapshot(&a), snapshot(&b));
        }
    }
}
