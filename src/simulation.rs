/*
 * Simulation Module
 *
 * This module owns the star collection and advances it one frame at a time.
 * Per star, in order:
 * 1. Pointer repulsion
 * 2. Glide completion check
 * 3. Random steering (not while gliding)
 * 4. Velocity recovery towards the base speed (not while gliding)
 * 5. Integration
 * 6. Wrap-around at the viewport edges
 *
 * External state (pointer, viewport, theme, device class) arrives once per
 * frame as a FrameInput. Configuration changes regenerate the population
 * before returning so the next frame never sees stale stars.
 */

use log::{debug, info};
use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::budget::FrameBudget;
use crate::config::{Configuration, ParamsOverride, Regenerate};
use crate::driver::TickDriver;
use crate::params::{NumericSettings, SimulationParams, Theme};
use crate::particle::Particle;
use crate::population;
use crate::viewport::Viewport;

/// Environment state polled at the start of each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Pointer in simulation coordinates, `None` when absent.
    pub pointer: Option<Point2>,
    pub viewport: Viewport,
    pub theme: Theme,
    /// Forces the constrained-device star reduction.
    pub constrained: bool,
}

impl FrameInput {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            pointer: None,
            viewport,
            theme: Theme::default(),
            constrained: false,
        }
    }

    // Narrow viewports count as constrained even without the flag
    pub fn is_constrained(&self) -> bool {
        self.constrained || self.viewport.is_narrow()
    }
}

// Advance every star by one frame
pub fn step_particles<R: Rng + ?Sized>(
    particles: &mut [Particle],
    params: &SimulationParams,
    budget: &FrameBudget,
    pointer: Option<Point2>,
    viewport: &Viewport,
    rng: &mut R,
) {
    for particle in particles.iter_mut() {
        if let Some(pointer) = pointer {
            particle.repel_from(pointer, budget.effect_radius, params.cursor_effect_power);
        }

        particle.update_glide();

        if !particle.is_gliding() {
            if rng.gen::<f32>() < params.direction_change_chance {
                particle.steer(rng, params.direction_change_strength);
            }
            particle.recover(params.push_recovery_rate);
        }

        particle.integrate(params.base_movement_speed);
        particle.wrap_edges(viewport.width, viewport.height);
    }
}

pub struct Simulation {
    config: Configuration,
    particles: Vec<Particle>,
    input: FrameInput,
    budget: FrameBudget,
    rng: StdRng,
}

impl Simulation {
    pub fn new(config: Configuration, input: FrameInput) -> Self {
        Self::with_rng(config, input, StdRng::from_entropy())
    }

    pub fn with_rng(config: Configuration, input: FrameInput, rng: StdRng) -> Self {
        let budget = FrameBudget::for_population(config.get(), 0);
        let mut simulation = Self {
            config,
            particles: Vec::new(),
            input,
            budget,
            rng,
        };
        simulation.resize(input.viewport);
        info!(
            "star field mounted: {} stars in {}x{}",
            simulation.particles.len(),
            input.viewport.width,
            input.viewport.height
        );
        simulation
    }

    pub fn params(&self) -> &SimulationParams {
        self.config.get()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn input(&self) -> &FrameInput {
        &self.input
    }

    pub fn theme(&self) -> Theme {
        self.input.theme
    }

    // Degradation values of the most recent frame
    pub fn budget(&self) -> &FrameBudget {
        &self.budget
    }

    pub fn target_count(&self) -> usize {
        population::target_count(&self.input.viewport, self.config.get(), self.input.is_constrained())
    }

    // Adopt a new viewport and bring the population to the matching size
    pub fn resize(&mut self, viewport: Viewport) {
        self.input.viewport = viewport;
        let target = self.target_count();
        population::reconcile(
            &mut self.particles,
            target,
            &mut self.rng,
            &self.input.viewport,
            self.config.get(),
            self.input.theme,
        );
    }

    // Rebuild every star from scratch with the current settings and theme
    pub fn regenerate(&mut self, _: Regenerate) {
        let target = self.target_count();
        population::regenerate(
            &mut self.particles,
            target,
            &mut self.rng,
            &self.input.viewport,
            self.config.get(),
            self.input.theme,
        );
        info!("regenerated {} stars", self.particles.len());
    }

    pub fn set_theme(&mut self, theme: Theme) {
        if self.input.theme != theme {
            info!("theme changed to {:?}", theme);
            self.input.theme = theme;
            // Star colors are fixed at creation
            self.regenerate(Regenerate);
        }
    }

    pub fn replace_config(&mut self, partial: &ParamsOverride) {
        info!("configuration replaced");
        let regenerate = self.config.replace(partial);
        self.regenerate(regenerate);
    }

    pub fn reset_config(&mut self) -> NumericSettings {
        info!("configuration reset to defaults");
        let (defaults, regenerate) = self.config.reset();
        self.regenerate(regenerate);
        defaults
    }

    // Apply this frame's environment, then advance every star once
    pub fn tick(&mut self, input: &FrameInput) {
        if input.viewport != self.input.viewport || input.constrained != self.input.constrained {
            self.input.constrained = input.constrained;
            self.resize(input.viewport);
        }
        self.set_theme(input.theme);
        self.input.pointer = input.pointer;

        let budget = FrameBudget::for_population(self.config.get(), self.particles.len());
        if budget.is_degraded() != self.budget.is_degraded() {
            debug!("frame budget factor now {:.3}", budget.factor);
        }
        self.budget = budget;

        step_particles(
            &mut self.particles,
            self.config.get(),
            &self.budget,
            self.input.pointer,
            &self.input.viewport,
            &mut self.rng,
        );
    }

    // Run ticks for as long as the driver hands them out; returns how many ran
    pub fn run<D: TickDriver>(&mut self, driver: &mut D, input: &FrameInput) -> u64 {
        let mut ticks = 0;
        while driver.take_tick() {
            self.tick(input);
            ticks += 1;
            driver.request_next_tick();
        }
        ticks
    }
}
