use std::time::Duration;

use tracing::{debug, info};

use super::Config;
use crate::domain::{Field, Preset};
use crate::error::Result;

/// User-facing actions; the only way the flags on `Simulation` change
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    ToggleGrid,
    /// Advance exactly one generation, even while paused
    Step,
    Reset(Preset),
}

/// Simulation orchestrates the field.
/// This is the application layer that decides when the domain steps.
pub struct Simulation {
    pub field: Field,
    pub paused: bool,
    pub hide_grid: bool,
    steps_per_second: f64,
    max_steps_per_frame: u32,
    /// Fractional steps owed from previous calls to `advance`
    step_debt: f64,
}

impl Simulation {
    pub fn new(field: Field, steps_per_second: f64, max_steps_per_frame: u32) -> Self {
        Self {
            field,
            paused: true,
            hide_grid: false,
            steps_per_second,
            max_steps_per_frame: max_steps_per_frame.max(1),
            step_debt: 0.0,
        }
    }

    /// Build the startup field: preset first, then the seed cells on top
    pub fn from_config(config: &Config) -> Result<Self> {
        let field_config = &config.field;
        let mut field =
            Field::with_preset(field_config.width, field_config.height, field_config.preset)?;
        for &(x, y) in &field_config.seed_cells {
            field.set(x, y, true);
        }

        let mut simulation = Self::new(
            field,
            config.timing.updates_per_second,
            config.timing.max_steps_per_frame,
        );
        simulation.paused = config.start_paused;
        simulation.hide_grid = config.hide_grid;
        Ok(simulation)
    }

    /// Run one step unless paused. Returns whether the field advanced.
    pub fn tick(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.field.step();
        true
    }

    /// Run the ticks that fell due during `elapsed`.
    ///
    /// At most `max_steps_per_frame` ticks run per call; any backlog beyond
    /// that is dropped rather than carried forward.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.paused {
            self.step_debt = 0.0;
            return 0;
        }

        self.step_debt += elapsed.as_secs_f64() * self.steps_per_second;
        let due = self.step_debt.floor();
        self.step_debt -= due;

        let steps = if due > f64::from(self.max_steps_per_frame) {
            debug!(
                due,
                cap = self.max_steps_per_frame,
                "simulation behind schedule, dropping backlog"
            );
            self.max_steps_per_frame
        } else {
            due as u32
        };

        (0..steps).filter(|_| self.tick()).count() as u32
    }

    /// Apply a user command
    pub fn apply(mut self, command: Command) -> Self {
        match command {
            Command::TogglePause => {
                self.paused = !self.paused;
                self.step_debt = 0.0;
                info!(
                    paused = self.paused,
                    generation = self.field.generation(),
                    "pause toggled"
                );
            }
            Command::ToggleGrid => {
                self.hide_grid = !self.hide_grid;
            }
            Command::Step => {
                self.field.step();
            }
            Command::Reset(preset) => {
                self.field.apply_preset(preset);
                self.step_debt = 0.0;
                info!(
                    %preset,
                    description = preset.description(),
                    "preset applied"
                );
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blinker_sim(steps_per_second: f64, cap: u32) -> Simulation {
        let mut field = Field::new(5, 5).unwrap();
        for x in 1..=3 {
            field.set(x, 2, true);
        }
        Simulation::new(field, steps_per_second, cap)
    }

    #[test]
    fn test_starts_paused() {
        assert!(blinker_sim(1.0, 10).paused);
    }

    #[test]
    fn test_tick_is_noop_while_paused() {
        let mut sim = blinker_sim(1.0, 10);
        assert!(!sim.tick());
        assert_eq!(sim.field.generation(), 0);
    }

    #[test]
    fn test_tick_steps_once_when_running() {
        let mut sim = blinker_sim(1.0, 10).apply(Command::TogglePause);
        assert!(sim.tick());
        assert_eq!(sim.field.generation(), 1);
        assert!(sim.field.get(2, 1));
    }

    #[test]
    fn test_advance_converts_time_to_steps() {
        let mut sim = blinker_sim(100.0, 1_000).apply(Command::TogglePause);
        assert_eq!(sim.advance(Duration::from_millis(50)), 5);
        assert_eq!(sim.field.generation(), 5);
    }

    #[test]
    fn test_advance_carries_fractional_steps() {
        let mut sim = blinker_sim(10.0, 1_000).apply(Command::TogglePause);
        assert_eq!(sim.advance(Duration::from_millis(60)), 0);
        assert_eq!(sim.advance(Duration::from_millis(60)), 1);
    }

    #[test]
    fn test_advance_caps_and_drops_backlog() {
        let mut sim = blinker_sim(1_000.0, 3).apply(Command::TogglePause);
        assert_eq!(sim.advance(Duration::from_secs(1)), 3);
        assert_eq!(sim.advance(Duration::ZERO), 0);
    }

    #[test]
    fn test_advance_while_paused_runs_nothing() {
        let mut sim = blinker_sim(1_000.0, 100);
        assert_eq!(sim.advance(Duration::from_secs(1)), 0);
        assert_eq!(sim.field.generation(), 0);
    }

    #[test]
    fn test_step_command_works_while_paused() {
        let sim = blinker_sim(1.0, 10).apply(Command::Step);
        assert!(sim.paused);
        assert_eq!(sim.field.generation(), 1);
    }

    #[test]
    fn test_toggle_grid() {
        let sim = blinker_sim(1.0, 10).apply(Command::ToggleGrid);
        assert!(sim.hide_grid);
        assert!(!sim.apply(Command::ToggleGrid).hide_grid);
    }

    #[test]
    fn test_reset_overwrites_field() {
        let sim = blinker_sim(1.0, 10).apply(Command::Reset(Preset::Empty));
        assert_eq!(sim.field.population(), 0);
    }

    #[test]
    fn test_from_config_applies_seed_cells() {
        let config = Config::default();
        let sim = Simulation::from_config(&config).unwrap();
        assert!(sim.paused);
        assert_eq!(sim.field.dimensions(), (64, 64));
        // (3, 2) lies on a dead lattice column of the stable squares preset
        assert!(sim.field.get(3, 2));
        assert!(!Preset::StableSquares.cell_at(3, 2).is_alive());
    }
}
