// Domain layer - cells, the toroidal field and presets
pub mod domain;

// Application layer - stepping, frame pacing and configuration
pub mod application;

// Infrastructure layer - rendering, input
pub mod input;
pub mod rendering;

pub mod error;

// Re-exports for convenience
pub use application::{Command, Config, FrameClock, Simulation};
pub use domain::{Cell, Field, Preset};
pub use error::{Error, Result};
pub use rendering::{Canvas, MacroquadCanvas, Viewport};
