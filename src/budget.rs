/*
 * Frame Budget Module
 *
 * Degradation policy for large populations. Once the star count exceeds the
 * optimization threshold, the pointer effect radius, the maximum line
 * opacity and the line connection distance are all scaled by
 * threshold / count for that frame. The star count itself is untouched.
 */

use crate::params::SimulationParams;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameBudget {
    // Scale applied this frame, 1.0 when not degraded
    pub factor: f32,
    pub effect_radius: f32,
    pub max_line_opacity: f32,
    pub min_line_distance: f32,
}

impl FrameBudget {
    pub fn for_population(params: &SimulationParams, count: usize) -> Self {
        let threshold = params.optimization_threshold as usize;
        let factor = if count > threshold {
            (threshold as f32 / count as f32).min(1.0)
        } else {
            1.0
        };

        Self {
            factor,
            effect_radius: params.cursor_effect_radius * factor,
            max_line_opacity: params.max_line_opacity * factor,
            min_line_distance: params.min_line_distance * factor,
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.factor < 1.0
    }
}
