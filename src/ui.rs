/*
 * UI Module
 *
 * This module contains the settings panel built with nannou_egui and the
 * on-screen debug overlay. The panel edits a draft copy of the numeric
 * parameters; nothing reaches the simulation until Apply or Reset is
 * pressed.
 */

use nannou::prelude::*;
use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::{SimulationParams, Theme};

/// What the user asked for in this frame's panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    None,
    Apply,
    Reset,
}

// Draw the settings panel and report the requested action
pub fn update_ui(
    egui: &mut Egui,
    draft: &mut SimulationParams,
    theme: &mut Theme,
    show_debug: &mut bool,
    debug_info: &DebugInfo,
) -> UiAction {
    let mut action = UiAction::None;
    let ctx = egui.begin_frame();

    egui::Window::new("Stars Settings")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Stars", |ui| {
                ui.add(egui::Slider::new(&mut draft.total_star_count, SimulationParams::get_star_count_range()).text("Star Count"));
                ui.add(egui::Slider::new(&mut draft.min_star_size, SimulationParams::get_min_star_size_range()).text("Min Star Size"));
                ui.add(egui::Slider::new(&mut draft.max_star_size, SimulationParams::get_max_star_size_range()).text("Max Star Size"));
                ui.add(egui::Slider::new(&mut draft.min_star_opacity, SimulationParams::get_min_opacity_range()).text("Min Opacity"));
                ui.add(egui::Slider::new(&mut draft.max_star_opacity, SimulationParams::get_max_opacity_range()).text("Max Opacity"));
            });

            ui.collapsing("Movement", |ui| {
                ui.add(egui::Slider::new(&mut draft.base_movement_speed, SimulationParams::get_base_speed_range()).text("Base Speed"));
                ui.add(egui::Slider::new(&mut draft.min_movement_speed, SimulationParams::get_min_speed_range()).text("Min Speed"));
                ui.add(egui::Slider::new(&mut draft.max_movement_speed, SimulationParams::get_max_speed_range()).text("Max Speed"));
                ui.add(egui::Slider::new(&mut draft.direction_change_chance, SimulationParams::get_direction_change_chance_range()).text("Direction Change Chance"));
                ui.add(egui::Slider::new(&mut draft.direction_change_strength, SimulationParams::get_direction_change_strength_range()).text("Direction Change Strength"));
                ui.add(egui::Slider::new(&mut draft.push_recovery_rate, SimulationParams::get_recovery_rate_range()).text("Push Recovery Rate"));
            });

            ui.collapsing("Pointer", |ui| {
                ui.add(egui::Slider::new(&mut draft.cursor_effect_radius, SimulationParams::get_cursor_radius_range()).text("Cursor Effect Radius"));
                ui.add(egui::Slider::new(&mut draft.cursor_effect_power, SimulationParams::get_cursor_power_range()).text("Cursor Effect Power"));
            });

            ui.collapsing("Connections", |ui| {
                ui.add(egui::Slider::new(&mut draft.min_line_distance, SimulationParams::get_line_distance_range()).text("Line Connection Distance"));
                ui.add(egui::Slider::new(&mut draft.max_line_opacity, SimulationParams::get_line_opacity_range()).text("Line Opacity"));
                ui.add(egui::Slider::new(&mut draft.max_line_thickness, SimulationParams::get_line_thickness_range()).text("Line Thickness"));
            });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Reset to Defaults").clicked() {
                    action = UiAction::Reset;
                }
                if ui.button("Apply Changes").clicked() {
                    action = UiAction::Apply;
                }
            });

            ui.separator();

            let mut dark = theme.is_dark();
            if ui.checkbox(&mut dark, "Dark Mode").changed() {
                *theme = theme.toggled();
            }
            ui.checkbox(show_debug, "Show Debug Info");

            ui.label(format!("FPS: {:.1}", debug_info.fps));
            ui.label(format!("Stars: {}", debug_info.star_count));
        });

    action
}

// Draw debug information in the top-left corner of the window
pub fn draw_debug_info(draw: &Draw, debug_info: &DebugInfo, window_rect: Rect, theme: Theme) {
    let margin = 20.0;
    let line_height = 20.0;
    let lines = debug_info.lines();
    let panel_width = 260.0;
    let panel_height = line_height * lines.len() as f32 + margin;

    let (panel_color, text_color) = if theme.is_dark() {
        (rgba(0.0, 0.0, 0.0, 0.7), WHITE)
    } else {
        (rgba(1.0, 1.0, 1.0, 0.7), BLACK)
    };

    draw.rect()
        .x_y(window_rect.left() + panel_width / 2.0, window_rect.top() - panel_height / 2.0)
        .w_h(panel_width, panel_height)
        .color(panel_color);

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.top() - margin;

    for (i, text) in lines.iter().enumerate() {
        draw.text(text)
            .x_y(text_x + 80.0, text_y - i as f32 * line_height)
            .color(text_color)
            .font_size(14);
    }
}
