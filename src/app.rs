/*
 * Application Module
 *
 * This module defines the nannou application model for the star field and
 * its model/update/view/exit functions. The model keeps the latest polled
 * environment in a FrameInput; each refresh the update function hands one
 * tick to the simulation and the view paints the result.
 *
 * The frame loop runs through a RefreshTicks driver which is cancelled when
 * the window closes or the app exits, so no tick runs after teardown.
 */

use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};
use nannou::prelude::*;
use nannou_egui::Egui;

use crate::config::{Configuration, ParamsOverride};
use crate::debug::DebugInfo;
use crate::driver::{RefreshTicks, TickDriver};
use crate::input;
use crate::params::{SimulationParams, Theme};
use crate::renderer::{self, NannouCanvas};
use crate::simulation::{FrameInput, Simulation};
use crate::ui::{self, UiAction};
use crate::viewport::Viewport;

// Fallback window size when no monitor is reported
const FALLBACK_WINDOW_SIZE: (u32, u32) = (1280, 720);

/// Command line options for the star field window.
#[derive(Debug, Parser)]
#[command(name = "starfield", version, about = "Drifting stars joined by proximity lines")]
pub struct Cli {
    /// JSON file with settings overriding the built-in defaults
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Start in light mode
    #[arg(long)]
    pub light: bool,

    /// Treat the device as constrained (fewer stars)
    #[arg(long)]
    pub constrained: bool,

    /// Initial window width in logical pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Initial window height in logical pixels
    #[arg(long)]
    pub height: Option<u32>,
}

// Main model for the application
pub struct Model {
    pub simulation: Simulation,
    pub input: FrameInput,
    pub driver: RefreshTicks,
    pub egui: Egui,
    // Panel edits land here until applied
    pub settings_draft: SimulationParams,
    pub debug_info: DebugInfo,
    pub show_debug: bool,
}

// Load the settings override named on the command line, falling back to defaults
fn load_override(cli: &Cli) -> ParamsOverride {
    let Some(path) = &cli.settings else {
        return ParamsOverride::default();
    };

    match ParamsOverride::from_json_file(path) {
        Ok(partial) => {
            info!("loaded settings from {}", path.display());
            partial
        }
        Err(err) => {
            warn!("{}; using built-in defaults", err);
            ParamsOverride::default()
        }
    }
}

// Logical size and scale factor of the main window
pub fn current_viewport(app: &App) -> Viewport {
    let rect = app.window_rect();
    Viewport::new(rect.w(), rect.h()).with_scale_factor(app.main_window().scale_factor())
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let cli = Cli::parse();

    // Default to 80% of the primary monitor, like a full-page background
    let (window_width, window_height) = match (cli.width, cli.height) {
        (Some(width), Some(height)) => (width, height),
        (width, height) => {
            let (monitor_width, monitor_height) = app
                .primary_monitor()
                .map(|monitor| {
                    let size = monitor.size();
                    (
                        (size.width as f32 * 0.8) as u32,
                        (size.height as f32 * 0.8) as u32,
                    )
                })
                .unwrap_or(FALLBACK_WINDOW_SIZE);
            (width.unwrap_or(monitor_width), height.unwrap_or(monitor_height))
        }
    };

    // Create the main window
    let window_id = app
        .new_window()
        .title("Play with the Stars")
        .size(window_width, window_height)
        .view(view)
        .mouse_moved(input::mouse_moved)
        .mouse_exited(input::mouse_exited)
        .touch(input::touch)
        .key_pressed(input::key_pressed)
        .resized(input::resized)
        .closed(input::closed)
        .raw_event(input::raw_window_event)
        .build()
        .expect("failed to build the main window");

    let window = app.window(window_id).expect("main window vanished after creation");
    let egui = Egui::from_window(&window);

    let config = Configuration::from_override(&load_override(&cli));
    let settings_draft = config.get().clone();

    let mut input = FrameInput::new(current_viewport(app));
    input.theme = if cli.light { Theme::Light } else { Theme::Dark };
    input.constrained = cli.constrained;

    let simulation = Simulation::new(config, input);

    Model {
        simulation,
        input,
        driver: RefreshTicks::new(),
        egui,
        settings_draft,
        debug_info: DebugInfo::default(),
        show_debug: false,
    }
}

// Push the panel's draft into the simulation, colors included
fn apply_settings(model: &mut Model) {
    model
        .simulation
        .replace_config(&ParamsOverride::from_params(&model.settings_draft));
    model.settings_draft = model.simulation.params().clone();
}

// Restore the defaults and show them in the panel
pub fn reset_settings(model: &mut Model) {
    let defaults = model.simulation.reset_config();
    info!("settings reset, {} numeric defaults restored", defaults.len());
    model.settings_draft = model.simulation.params().clone();
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    model.egui.set_elapsed_time(update.since_start);
    let action = ui::update_ui(
        &mut model.egui,
        &mut model.settings_draft,
        &mut model.input.theme,
        &mut model.show_debug,
        &model.debug_info,
    );

    match action {
        UiAction::Apply => apply_settings(model),
        UiAction::Reset => reset_settings(model),
        UiAction::None => {}
    }

    // One simulation step per refresh while the loop is alive
    if model.driver.take_tick() {
        model.input.viewport = current_viewport(app);
        model.simulation.tick(&model.input);
        model.driver.request_next_tick();
        model.debug_info.record(&model.simulation, model.driver.ticks());
    }
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    if model.driver.is_cancelled() {
        return;
    }

    let draw = app.draw();
    let window_rect = app.window_rect();
    let simulation = &model.simulation;

    let mut canvas = NannouCanvas::new(&draw, simulation.input().viewport, window_rect);
    let stats = renderer::render(
        &mut canvas,
        simulation.particles(),
        simulation.budget(),
        simulation.params(),
        simulation.theme(),
    );
    model.debug_info.lines_drawn.set(stats.lines);

    if model.show_debug {
        ui::draw_debug_info(&draw, &model.debug_info, window_rect, simulation.theme());
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        warn!("failed to draw frame: {:?}", err);
    }

    if let Err(err) = model.egui.draw_to_frame(&frame) {
        warn!("failed to draw settings panel: {:?}", err);
    }
}

// App is shutting down
pub fn exit(_app: &App, mut model: Model) {
    model.driver.cancel();
    info!("star field stopped after {} ticks", model.driver.ticks());
}
