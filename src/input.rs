/*
 * Input Module
 *
 * This module handles window events for the star field. Handlers only write
 * the latest pointer, viewport and theme into the model's FrameInput; the
 * simulation reads it at the start of the next frame.
 *
 * Keys:
 * - T toggles the dark/light theme
 * - D toggles the debug overlay
 * - R resets the settings to their defaults
 */

use log::{debug, info};
use nannou::event::TouchEvent;
use nannou::prelude::*;
use nannou::winit::event::TouchPhase;

use crate::app::{self, Model};
use crate::driver::TickDriver;

// Mouse moved event handler
pub fn mouse_moved(app: &App, model: &mut Model, pos: Point2) {
    let pointer = model.input.viewport.from_window(pos, app.window_rect());
    model.input.pointer = Some(pointer);
}

// Pointer left the window; stars stop reacting to it
pub fn mouse_exited(_app: &App, model: &mut Model) {
    model.input.pointer = None;
}

// Touch events drive the pointer like the mouse does
pub fn touch(app: &App, model: &mut Model, touch: TouchEvent) {
    match touch.phase {
        TouchPhase::Started | TouchPhase::Moved => {
            let pointer = model.input.viewport.from_window(touch.position, app.window_rect());
            model.input.pointer = Some(pointer);
        }
        TouchPhase::Ended | TouchPhase::Cancelled => {
            model.input.pointer = None;
        }
    }
}

pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    // Keys typed into the settings panel belong to the panel
    if model.egui.ctx().wants_keyboard_input() {
        return;
    }

    match key {
        Key::T => {
            model.input.theme = model.input.theme.toggled();
        }
        Key::D => {
            model.show_debug = !model.show_debug;
        }
        Key::R => {
            app::reset_settings(model);
        }
        _ => {}
    }
}

pub fn resized(app: &App, model: &mut Model, size: Vec2) {
    debug!("window resized to {}x{}", size.x, size.y);
    model.input.viewport = app::current_viewport(app);
}

// Window closed: stop the frame loop before anything else runs
pub fn closed(_app: &App, model: &mut Model) {
    info!("window closed, stopping frame loop");
    model.driver.cancel();
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
