/*
 * Star Field - Module Definitions
 *
 * This file defines the module structure for the star field application.
 * The simulation core (params, config, particle, population, budget,
 * simulation, renderer, driver) does not depend on a window; the nannou
 * shell (app, ui, input, debug) drives it.
 */

// Re-export key components for easier access
pub use app::Model;
pub use budget::FrameBudget;
pub use config::{Configuration, ParamsOverride};
pub use debug::DebugInfo;
pub use driver::{FixedTicks, RefreshTicks, TickDriver};
pub use error::SettingsError;
pub use params::{ColorRgb, NumericSettings, SimulationParams, Theme};
pub use particle::{Edge, Glide, Particle};
pub use renderer::{Canvas, Connection, FrameStats};
pub use simulation::{FrameInput, Simulation};
pub use viewport::Viewport;

// Define modules
pub mod app;
pub mod budget;
pub mod config;
pub mod debug;
pub mod driver;
pub mod error;
pub mod input;
pub mod params;
pub mod particle;
pub mod population;
pub mod renderer;
pub mod simulation;
pub mod ui;
pub mod viewport;
