/*
 * Configuration Module
 *
 * Owns the active parameter set of one simulation. Overrides are always
 * merged onto the built-in defaults, never onto a previous override, so a
 * field missing from an override falls back to its default.
 *
 * Both `replace` and `reset` require the particle population to be rebuilt
 * before the next frame; the Simulation does that synchronously.
 */

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::params::{ColorRgb, NumericSettings, SimulationParams};

/// A partial set of parameters. `None` fields keep the built-in default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParamsOverride {
    pub total_star_count: Option<u32>,
    pub min_star_size: Option<f32>,
    pub max_star_size: Option<f32>,
    pub min_star_opacity: Option<f32>,
    pub max_star_opacity: Option<f32>,
    pub base_movement_speed: Option<f32>,
    pub min_movement_speed: Option<f32>,
    pub max_movement_speed: Option<f32>,
    pub direction_change_chance: Option<f32>,
    pub direction_change_strength: Option<f32>,
    pub push_recovery_rate: Option<f32>,
    pub cursor_effect_radius: Option<f32>,
    pub cursor_effect_power: Option<f32>,
    pub min_line_distance: Option<f32>,
    pub max_line_opacity: Option<f32>,
    pub max_line_thickness: Option<f32>,
    pub dark_mode_star_color: Option<ColorRgb>,
    pub light_mode_star_color: Option<ColorRgb>,
    pub dark_mode_line_color: Option<ColorRgb>,
    pub light_mode_line_color: Option<ColorRgb>,
    pub max_glide_distance: Option<f32>,
    pub optimization_threshold: Option<u32>,
    pub mobile_star_reduction: Option<f32>,
}

impl ParamsOverride {
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    // Pin every field, colors included, to the values of a full parameter set
    pub fn from_params(params: &SimulationParams) -> Self {
        Self {
            total_star_count: Some(params.total_star_count),
            min_star_size: Some(params.min_star_size),
            max_star_size: Some(params.max_star_size),
            min_star_opacity: Some(params.min_star_opacity),
            max_star_opacity: Some(params.max_star_opacity),
            base_movement_speed: Some(params.base_movement_speed),
            min_movement_speed: Some(params.min_movement_speed),
            max_movement_speed: Some(params.max_movement_speed),
            direction_change_chance: Some(params.direction_change_chance),
            direction_change_strength: Some(params.direction_change_strength),
            push_recovery_rate: Some(params.push_recovery_rate),
            cursor_effect_radius: Some(params.cursor_effect_radius),
            cursor_effect_power: Some(params.cursor_effect_power),
            min_line_distance: Some(params.min_line_distance),
            max_line_opacity: Some(params.max_line_opacity),
            max_line_thickness: Some(params.max_line_thickness),
            dark_mode_star_color: Some(params.dark_mode_star_color),
            light_mode_star_color: Some(params.light_mode_star_color),
            dark_mode_line_color: Some(params.dark_mode_line_color),
            light_mode_line_color: Some(params.light_mode_line_color),
            max_glide_distance: Some(params.max_glide_distance),
            optimization_threshold: Some(params.optimization_threshold),
            mobile_star_reduction: Some(params.mobile_star_reduction),
        }
    }

    // Build an override from a name -> value map such as the one returned by reset
    pub fn from_numeric(settings: &NumericSettings) -> Result<Self, SettingsError> {
        let mut partial = Self::default();
        for (&key, &value) in settings {
            partial.set(key, value)?;
        }
        Ok(partial)
    }

    // Set one numeric field by its snake_case key. Counts are rounded and floored at zero.
    pub fn set(&mut self, key: &str, value: f32) -> Result<(), SettingsError> {
        let count = || value.max(0.0).round() as u32;
        match key {
            "total_star_count" => self.total_star_count = Some(count()),
            "min_star_size" => self.min_star_size = Some(value),
            "max_star_size" => self.max_star_size = Some(value),
            "min_star_opacity" => self.min_star_opacity = Some(value),
            "max_star_opacity" => self.max_star_opacity = Some(value),
            "base_movement_speed" => self.base_movement_speed = Some(value),
            "min_movement_speed" => self.min_movement_speed = Some(value),
            "max_movement_speed" => self.max_movement_speed = Some(value),
            "direction_change_chance" => self.direction_change_chance = Some(value),
            "direction_change_strength" => self.direction_change_strength = Some(value),
            "push_recovery_rate" => self.push_recovery_rate = Some(value),
            "cursor_effect_radius" => self.cursor_effect_radius = Some(value),
            "cursor_effect_power" => self.cursor_effect_power = Some(value),
            "min_line_distance" => self.min_line_distance = Some(value),
            "max_line_opacity" => self.max_line_opacity = Some(value),
            "max_line_thickness" => self.max_line_thickness = Some(value),
            "max_glide_distance" => self.max_glide_distance = Some(value),
            "optimization_threshold" => self.optimization_threshold = Some(count()),
            "mobile_star_reduction" => self.mobile_star_reduction = Some(value),
            _ => return Err(SettingsError::UnknownSetting(key.to_string())),
        }
        Ok(())
    }

    // Merge this override onto the built-in defaults
    pub fn resolve(&self) -> SimulationParams {
        let defaults = SimulationParams::default();
        SimulationParams {
            total_star_count: self.total_star_count.unwrap_or(defaults.total_star_count),
            min_star_size: self.min_star_size.unwrap_or(defaults.min_star_size),
            max_star_size: self.max_star_size.unwrap_or(defaults.max_star_size),
            min_star_opacity: self.min_star_opacity.unwrap_or(defaults.min_star_opacity),
            max_star_opacity: self.max_star_opacity.unwrap_or(defaults.max_star_opacity),
            base_movement_speed: self.base_movement_speed.unwrap_or(defaults.base_movement_speed),
            min_movement_speed: self.min_movement_speed.unwrap_or(defaults.min_movement_speed),
            max_movement_speed: self.max_movement_speed.unwrap_or(defaults.max_movement_speed),
            direction_change_chance: self
                .direction_change_chance
                .unwrap_or(defaults.direction_change_chance),
            direction_change_strength: self
                .direction_change_strength
                .unwrap_or(defaults.direction_change_strength),
            push_recovery_rate: self.push_recovery_rate.unwrap_or(defaults.push_recovery_rate),
            cursor_effect_radius: self.cursor_effect_radius.unwrap_or(defaults.cursor_effect_radius),
            cursor_effect_power: self.cursor_effect_power.unwrap_or(defaults.cursor_effect_power),
            min_line_distance: self.min_line_distance.unwrap_or(defaults.min_line_distance),
            max_line_opacity: self.max_line_opacity.unwrap_or(defaults.max_line_opacity),
            max_line_thickness: self.max_line_thickness.unwrap_or(defaults.max_line_thickness),
            dark_mode_star_color: self.dark_mode_star_color.unwrap_or(defaults.dark_mode_star_color),
            light_mode_star_color: self
                .light_mode_star_color
                .unwrap_or(defaults.light_mode_star_color),
            dark_mode_line_color: self.dark_mode_line_color.unwrap_or(defaults.dark_mode_line_color),
            light_mode_line_color: self
                .light_mode_line_color
                .unwrap_or(defaults.light_mode_line_color),
            max_glide_distance: self.max_glide_distance.unwrap_or(defaults.max_glide_distance),
            optimization_threshold: self
                .optimization_threshold
                .unwrap_or(defaults.optimization_threshold),
            mobile_star_reduction: self
                .mobile_star_reduction
                .unwrap_or(defaults.mobile_star_reduction),
        }
    }
}

/// Returned by configuration changes; the population has to be regenerated.
#[must_use = "the particle population must be regenerated after a configuration change"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regenerate;

// The active parameter set of one simulation instance
#[derive(Debug, Clone, Default)]
pub struct Configuration {
    active: SimulationParams,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_override(partial: &ParamsOverride) -> Self {
        Self {
            active: partial.resolve(),
        }
    }

    pub fn get(&self) -> &SimulationParams {
        &self.active
    }

    pub fn replace(&mut self, partial: &ParamsOverride) -> Regenerate {
        self.active = partial.resolve();
        Regenerate
    }

    // Restore the built-in defaults, returning their numeric subset
    pub fn reset(&mut self) -> (NumericSettings, Regenerate) {
        self.active = SimulationParams::default();
        (self.active.numeric_settings(), Regenerate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_falls_back_to_defaults_not_previous() {
        let mut config = Configuration::new();
        let first = ParamsOverride {
            cursor_effect_radius: Some(250.0),
            max_line_opacity: Some(0.3),
            ..Default::default()
        };
        let _ = config.replace(&first);
        assert_eq!(config.get().cursor_effect_radius, 250.0);

        let second = ParamsOverride {
            max_line_opacity: Some(0.5),
            ..Default::default()
        };
        let _ = config.replace(&second);
        assert_eq!(config.get().cursor_effect_radius, 100.0);
        assert_eq!(config.get().max_line_opacity, 0.5);
    }

    #[test]
    fn test_reset_round_trip() {
        let mut config = Configuration::from_override(&ParamsOverride {
            total_star_count: Some(80),
            dark_mode_star_color: Some(ColorRgb::new(1, 2, 3)),
            ..Default::default()
        });
        let (numeric, Regenerate) = config.reset();
        assert_eq!(config.get(), &SimulationParams::default());
        assert_eq!(numeric, SimulationParams::default().numeric_settings());
    }

    #[test]
    fn test_from_numeric_reproduces_defaults() {
        let numeric = SimulationParams::default().numeric_settings();
        let partial = ParamsOverride::from_numeric(&numeric).unwrap();
        assert_eq!(partial.resolve(), SimulationParams::default());
        assert!(partial.dark_mode_star_color.is_none());
    }

    #[test]
    fn test_edited_draft_keeps_loaded_colors() {
        let loaded = ParamsOverride::from_json_str(
            r#"{ "dark_mode_star_color": { "r": 200, "g": 10, "b": 10 } }"#,
        )
        .unwrap();
        let mut config = Configuration::from_override(&loaded);

        let mut draft = config.get().clone();
        draft.total_star_count = 220;
        draft.cursor_effect_power = 2.0;
        let _ = config.replace(&ParamsOverride::from_params(&draft));

        assert_eq!(config.get().dark_mode_star_color, ColorRgb::new(200, 10, 10));
        assert_eq!(config.get().total_star_count, 220);
        assert_eq!(config.get().cursor_effect_power, 2.0);
        assert_eq!(config.get(), &draft);
    }

    #[test]
    fn test_set_unknown_key() {
        let mut partial = ParamsOverride::default();
        let err = partial.set("gravity", 1.0).unwrap_err();
        assert!(matches!(err, SettingsError::UnknownSetting(ref key) if key == "gravity"));
    }

    #[test]
    fn test_set_rounds_counts() {
        let mut partial = ParamsOverride::default();
        partial.set("total_star_count", 119.6).unwrap();
        partial.set("optimization_threshold", -4.0).unwrap();
        assert_eq!(partial.total_star_count, Some(120));
        assert_eq!(partial.optimization_threshold, Some(0));
    }

    #[test]
    fn test_json_override() {
        let partial = ParamsOverride::from_json_str(
            r#"{ "total_star_count": 90, "light_mode_line_color": { "r": 10, "g": 20, "b": 30 } }"#,
        )
        .unwrap();
        let params = partial.resolve();
        assert_eq!(params.total_star_count, 90);
        assert_eq!(params.light_mode_line_color, ColorRgb::new(10, 20, 30));
        assert_eq!(params.min_line_distance, 190.0);
    }

    #[test]
    fn test_json_rejects_unknown_fields() {
        let err = ParamsOverride::from_json_str(r#"{ "gridDivisions": 6 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = ParamsOverride::from_json_file(Path::new("/nonexistent/starfield.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }
}
