mod config;
mod frame_clock;
mod simulation;

pub use config::{
    CONFIG_ENV_VAR, Config, DEFAULT_CONFIG_FILE, FieldConfig, TimingConfig, WindowConfig,
};
pub use frame_clock::FrameClock;
pub use simulation::{Command, Simulation};
