/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that holds every adjustable
 * parameter of the star field: star count, size and opacity ranges, movement
 * speeds, pointer interaction, connection lines, edge glide and the
 * performance threshold. It also defines the star/line colors and the theme
 * that selects between them.
 *
 * Range pairs (min/max) are expected to satisfy min <= max. Nothing here
 * enforces it; reversed ranges are still sampled without panicking.
 */

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use nannou::color::{rgba, Rgba};
use serde::{Deserialize, Serialize};

// Name -> value view of the numeric parameters (colors excluded)
pub type NumericSettings = BTreeMap<&'static str, f32>;

// Keys of the numeric parameters, in declaration order
pub const NUMERIC_KEYS: [&str; 19] = [
    "total_star_count",
    "min_star_size",
    "max_star_size",
    "min_star_opacity",
    "max_star_opacity",
    "base_movement_speed",
    "min_movement_speed",
    "max_movement_speed",
    "direction_change_chance",
    "direction_change_strength",
    "push_recovery_rate",
    "cursor_effect_radius",
    "cursor_effect_power",
    "min_line_distance",
    "max_line_opacity",
    "max_line_thickness",
    "max_glide_distance",
    "optimization_threshold",
    "mobile_star_reduction",
];

/// An 8-bit RGB triple used for star and line base colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorRgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorRgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    // Convert to a nannou color with the given alpha (0-1)
    pub fn with_alpha(self, alpha: f32) -> Rgba {
        rgba(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            alpha.clamp(0.0, 1.0),
        )
    }
}

/// Dark or light presentation. Selects star and line base colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

// Parameters for the simulation that can be adjusted via UI
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParams {
    // Star count and appearance
    pub total_star_count: u32,
    pub min_star_size: f32,
    pub max_star_size: f32,
    pub min_star_opacity: f32,
    pub max_star_opacity: f32,

    // Star movement
    pub base_movement_speed: f32,
    pub min_movement_speed: f32,
    pub max_movement_speed: f32,
    pub direction_change_chance: f32,
    pub direction_change_strength: f32,
    pub push_recovery_rate: f32,

    // Pointer interaction
    pub cursor_effect_radius: f32,
    pub cursor_effect_power: f32,

    // Connections between stars
    pub min_line_distance: f32,
    pub max_line_opacity: f32,
    pub max_line_thickness: f32,

    // Colors
    pub dark_mode_star_color: ColorRgb,
    pub light_mode_star_color: ColorRgb,
    pub dark_mode_line_color: ColorRgb,
    pub light_mode_line_color: ColorRgb,

    // Edge regeneration
    pub max_glide_distance: f32,

    // Performance
    pub optimization_threshold: u32,
    pub mobile_star_reduction: f32,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            total_star_count: 150,
            min_star_size: 1.0,
            max_star_size: 6.5,
            min_star_opacity: 0.2,
            max_star_opacity: 0.95,
            base_movement_speed: 0.3,
            min_movement_speed: 0.1,
            max_movement_speed: 0.5,
            direction_change_chance: 0.008,
            direction_change_strength: 0.5,
            push_recovery_rate: 0.98,
            cursor_effect_radius: 100.0,
            cursor_effect_power: 1.2,
            min_line_distance: 190.0,
            max_line_opacity: 0.85,
            max_line_thickness: 3.0,
            dark_mode_star_color: ColorRgb::new(22, 163, 74),
            light_mode_star_color: ColorRgb::new(0, 0, 0),
            dark_mode_line_color: ColorRgb::new(22, 162, 74),
            light_mode_line_color: ColorRgb::new(0, 0, 0),
            max_glide_distance: 100.0,
            optimization_threshold: 1000,
            mobile_star_reduction: 0.5,
        }
    }
}

impl SimulationParams {
    pub fn star_color(&self, theme: Theme) -> ColorRgb {
        match theme {
            Theme::Dark => self.dark_mode_star_color,
            Theme::Light => self.light_mode_star_color,
        }
    }

    pub fn line_color(&self, theme: Theme) -> ColorRgb {
        match theme {
            Theme::Dark => self.dark_mode_line_color,
            Theme::Light => self.light_mode_line_color,
        }
    }

    // Read a numeric parameter by its snake_case key
    pub fn numeric(&self, key: &str) -> Option<f32> {
        let value = match key {
            "total_star_count" => self.total_star_count as f32,
            "min_star_size" => self.min_star_size,
            "max_star_size" => self.max_star_size,
            "min_star_opacity" => self.min_star_opacity,
            "max_star_opacity" => self.max_star_opacity,
            "base_movement_speed" => self.base_movement_speed,
            "min_movement_speed" => self.min_movement_speed,
            "max_movement_speed" => self.max_movement_speed,
            "direction_change_chance" => self.direction_change_chance,
            "direction_change_strength" => self.direction_change_strength,
            "push_recovery_rate" => self.push_recovery_rate,
            "cursor_effect_radius" => self.cursor_effect_radius,
            "cursor_effect_power" => self.cursor_effect_power,
            "min_line_distance" => self.min_line_distance,
            "max_line_opacity" => self.max_line_opacity,
            "max_line_thickness" => self.max_line_thickness,
            "max_glide_distance" => self.max_glide_distance,
            "optimization_threshold" => self.optimization_threshold as f32,
            "mobile_star_reduction" => self.mobile_star_reduction,
            _ => return None,
        };
        Some(value)
    }

    // Snapshot of every numeric parameter, colors excluded
    pub fn numeric_settings(&self) -> NumericSettings {
        NUMERIC_KEYS
            .iter()
            .filter_map(|&key| self.numeric(key).map(|value| (key, value)))
            .collect()
    }

    // Get parameter ranges for UI sliders
    pub fn get_star_count_range() -> RangeInclusive<u32> {
        50..=200
    }

    pub fn get_min_star_size_range() -> RangeInclusive<f32> {
        0.5..=3.0
    }

    pub fn get_max_star_size_range() -> RangeInclusive<f32> {
        1.5..=20.0
    }

    pub fn get_min_opacity_range() -> RangeInclusive<f32> {
        0.1..=0.5
    }

    pub fn get_max_opacity_range() -> RangeInclusive<f32> {
        0.5..=1.0
    }

    pub fn get_base_speed_range() -> RangeInclusive<f32> {
        0.1..=1.0
    }

    pub fn get_min_speed_range() -> RangeInclusive<f32> {
        0.05..=0.5
    }

    pub fn get_max_speed_range() -> RangeInclusive<f32> {
        0.2..=2.0
    }

    pub fn get_direction_change_chance_range() -> RangeInclusive<f32> {
        0.001..=0.05
    }

    pub fn get_direction_change_strength_range() -> RangeInclusive<f32> {
        0.1..=1.0
    }

    pub fn get_recovery_rate_range() -> RangeInclusive<f32> {
        0.9..=0.99
    }

    pub fn get_cursor_radius_range() -> RangeInclusive<f32> {
        50.0..=300.0
    }

    pub fn get_cursor_power_range() -> RangeInclusive<f32> {
        0.5..=3.0
    }

    pub fn get_line_distance_range() -> RangeInclusive<f32> {
        50.0..=300.0
    }

    pub fn get_line_opacity_range() -> RangeInclusive<f32> {
        0.1..=1.0
    }

    pub fn get_line_thickness_range() -> RangeInclusive<f32> {
        0.5..=5.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_settings_exclude_colors() {
        let settings = SimulationParams::default().numeric_settings();
        assert_eq!(settings.len(), NUMERIC_KEYS.len());
        assert!(!settings.keys().any(|key| key.contains("color")));
        assert_eq!(settings["total_star_count"], 150.0);
        assert_eq!(settings["push_recovery_rate"], 0.98);
    }

    #[test]
    fn test_numeric_unknown_key() {
        assert_eq!(SimulationParams::default().numeric("gravity"), None);
    }

    #[test]
    fn test_theme_colors() {
        let params = SimulationParams::default();
        assert_eq!(params.star_color(Theme::Dark), ColorRgb::new(22, 163, 74));
        assert_eq!(params.line_color(Theme::Dark), ColorRgb::new(22, 162, 74));
        assert_eq!(params.star_color(Theme::Light), ColorRgb::new(0, 0, 0));
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_with_alpha_clamps() {
        let color = ColorRgb::new(255, 0, 0).with_alpha(1.5);
        assert!((color.red - 1.0).abs() < 0.001);
        assert!((color.alpha - 1.0).abs() < 0.001);
    }
}
