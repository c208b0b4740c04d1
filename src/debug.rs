/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that holds frame metrics shown in
 * the settings panel and the on-screen overlay:
 * - FPS and frame time
 * - Star count and how many are still gliding in from an edge
 * - Lines drawn by the last frame
 * - Current degradation factor
 * - Surface size in logical and physical pixels
 */

use std::cell::Cell;
use std::time::Duration;

use crate::simulation::Simulation;

pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub star_count: usize,
    pub gliding_count: usize,
    pub target_count: usize,
    pub degradation_factor: f32,
    pub ticks: u64,
    pub logical_size: (f32, f32),
    pub physical_size: (u32, u32),
    // Written by the view, which only has shared access to the model
    pub lines_drawn: Cell<usize>,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            star_count: 0,
            gliding_count: 0,
            target_count: 0,
            degradation_factor: 1.0,
            ticks: 0,
            logical_size: (0.0, 0.0),
            physical_size: (0, 0),
            lines_drawn: Cell::new(0),
        }
    }
}

impl DebugInfo {
    // Refresh the simulation-derived counters after a tick
    pub fn record(&mut self, simulation: &Simulation, ticks: u64) {
        self.star_count = simulation.particles().len();
        self.gliding_count = simulation.particles().iter().filter(|p| p.is_gliding()).count();
        self.target_count = simulation.target_count();
        self.degradation_factor = simulation.budget().factor;
        self.ticks = ticks;

        let viewport = simulation.input().viewport;
        self.logical_size = (viewport.width, viewport.height);
        self.physical_size = viewport.physical_size();
    }

    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("FPS: {:.1}", self.fps),
            format!("Frame time: {:.2} ms", self.frame_time.as_secs_f64() * 1000.0),
            format!("Stars: {} (target {})", self.star_count, self.target_count),
            format!("Gliding: {}", self.gliding_count),
            format!("Lines: {}", self.lines_drawn.get()),
            format!("Degradation: {:.2}", self.degradation_factor),
            format!(
                "Surface: {:.0}x{:.0} ({}x{} px)",
                self.logical_size.0, self.logical_size.1, self.physical_size.0, self.physical_size.1
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Configuration;
    use crate::simulation::FrameInput;
    use crate::viewport::Viewport;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_surface_size_follows_scale_factor() {
        let viewport = Viewport::new(1280.0, 720.0).with_scale_factor(2.0);
        let simulation =
            Simulation::with_rng(Configuration::new(), FrameInput::new(viewport), StdRng::seed_from_u64(5));

        let mut info = DebugInfo::default();
        info.record(&simulation, 1);
        assert_eq!(info.logical_size, (1280.0, 720.0));
        assert_eq!(info.physical_size, (2560, 1440));
        assert!(info.lines().contains(&"Surface: 1280x720 (2560x1440 px)".to_string()));
    }

    #[test]
    fn test_record_counts() {
        let input = FrameInput::new(Viewport::default());
        let simulation = Simulation::with_rng(Configuration::new(), input, StdRng::seed_from_u64(3));

        let mut info = DebugInfo::default();
        info.record(&simulation, 12);
        assert_eq!(info.star_count, 150);
        assert_eq!(info.target_count, 150);
        assert_eq!(info.gliding_count, 0);
        assert_eq!(info.ticks, 12);
        assert_eq!(info.physical_size, (1920, 1080));
        assert_eq!(info.lines().len(), 7);
    }
}
