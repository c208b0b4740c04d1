/*
 * Particle Module
 *
 * This module defines the Particle struct (a single star) and the rules for
 * creating one. Stars are created either at a random point of the viewport
 * or on one of its edges; edge-spawned stars glide inward towards a target
 * before joining normal autonomous motion.
 */

use std::f32::consts::{FRAC_PI_2, FRAC_PI_8, PI, TAU};

use nannou::prelude::*;
use rand::Rng;

use crate::params::{ColorRgb, SimulationParams, Theme};
use crate::viewport::Viewport;

// Width of the random window applied to each color channel
pub const COLOR_VARIATION: f32 = 30.0;

// Glide ends once a star is closer than this to its target
pub const GLIDE_ARRIVAL_DISTANCE: f32 = 1.0;

// Edge-spawned stars start this much faster than the base movement speed
pub const GLIDE_SPEED_FACTOR: f32 = 1.5;

// Relative slack before a star counts as faster than its base speed
const SPEED_TOLERANCE: f32 = 1e-4;

// Sample uniformly between two bounds without requiring min <= max
pub(crate) fn sample_between<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + rng.gen::<f32>() * (max - min)
}

// Perturb one color channel by up to half the variation window, clamped to 0-255
fn vary_channel<R: Rng + ?Sized>(rng: &mut R, base: u8) -> u8 {
    let value = (rng.gen::<f32>() * COLOR_VARIATION + base as f32 - COLOR_VARIATION / 2.0).floor();
    value.clamp(0.0, 255.0) as u8
}

/// Viewport edge a star can enter from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    // Heading pointing straight into the viewport (y grows downward)
    pub fn inward_angle(self) -> f32 {
        match self {
            Edge::Top => FRAC_PI_2,
            Edge::Right => PI,
            Edge::Bottom => 3.0 * FRAC_PI_2,
            Edge::Left => 0.0,
        }
    }

    // Random point along this edge
    fn random_point<R: Rng + ?Sized>(self, rng: &mut R, viewport: &Viewport) -> Point2 {
        match self {
            Edge::Top => pt2(rng.gen::<f32>() * viewport.width, 0.0),
            Edge::Right => pt2(viewport.width, rng.gen::<f32>() * viewport.height),
            Edge::Bottom => pt2(rng.gen::<f32>() * viewport.width, viewport.height),
            Edge::Left => pt2(0.0, rng.gen::<f32>() * viewport.height),
        }
    }
}

/// Steering override for a star entering from an edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glide {
    pub target: Point2,
    pub distance: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Point2,
    pub velocity: Vec2,
    pub radius: f32,
    pub opacity: f32,
    pub color: ColorRgb,
    // Speed and heading the star recovers towards
    pub speed: f32,
    pub angle: f32,
    pub glide: Option<Glide>,
}

impl Particle {
    // Create a star at a uniformly random position in the viewport
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        viewport: &Viewport,
        params: &SimulationParams,
        theme: Theme,
    ) -> Self {
        let x = rng.gen::<f32>() * viewport.width;
        let y = rng.gen::<f32>() * viewport.height;
        Self::at(rng, pt2(x, y), params, theme)
    }

    // Create a star at the given position with random size, opacity, color and motion
    pub fn at<R: Rng + ?Sized>(
        rng: &mut R,
        position: Point2,
        params: &SimulationParams,
        theme: Theme,
    ) -> Self {
        let radius = sample_between(rng, params.min_star_size, params.max_star_size);
        let opacity = sample_between(rng, params.min_star_opacity, params.max_star_opacity);

        // The theme is only read here; later theme changes need a regeneration
        let base = params.star_color(theme);
        let color = ColorRgb::new(
            vary_channel(rng, base.r),
            vary_channel(rng, base.g),
            vary_channel(rng, base.b),
        );

        let angle = rng.gen::<f32>() * TAU;
        let speed = sample_between(rng, params.min_movement_speed, params.max_movement_speed);

        Self {
            position,
            velocity: vec2(angle.cos(), angle.sin()) * speed,
            radius,
            opacity,
            color,
            speed,
            angle,
            glide: None,
        }
    }

    // Create a star on a random edge, gliding inward
    pub fn edge_spawn<R: Rng + ?Sized>(
        rng: &mut R,
        viewport: &Viewport,
        params: &SimulationParams,
        theme: Theme,
    ) -> Self {
        let edge = Edge::ALL[rng.gen_range(0..Edge::ALL.len())];
        Self::edge_spawn_on(rng, edge, viewport, params, theme)
    }

    pub fn edge_spawn_on<R: Rng + ?Sized>(
        rng: &mut R,
        edge: Edge,
        viewport: &Viewport,
        params: &SimulationParams,
        theme: Theme,
    ) -> Self {
        let start = edge.random_point(rng, viewport);

        // Mostly perpendicular to the edge, jittered by up to 22.5 degrees
        let inward_angle = edge.inward_angle() + sample_between(rng, -FRAC_PI_8, FRAC_PI_8);

        let mut particle = Self::at(rng, start, params, theme);

        let glide_distance = rng.gen::<f32>() * params.max_glide_distance;
        let target = start + vec2(inward_angle.cos(), inward_angle.sin()) * glide_distance;

        // Head for the target a little faster than normal motion
        let offset = target - start;
        let angle_to_target = offset.y.atan2(offset.x);
        let glide_speed = params.base_movement_speed * GLIDE_SPEED_FACTOR;

        particle.velocity = vec2(angle_to_target.cos(), angle_to_target.sin()) * glide_speed;
        particle.glide = Some(Glide {
            target,
            distance: glide_distance,
        });
        particle
    }

    pub fn is_gliding(&self) -> bool {
        self.glide.is_some()
    }

    // Display color with the star's opacity as alpha
    pub fn fill(&self) -> Rgba {
        self.color.with_alpha(self.opacity)
    }

    // Push the star away from the pointer if it is within the effect radius
    pub fn repel_from(&mut self, pointer: Point2, effect_radius: f32, power: f32) {
        let offset = self.position - pointer;
        let distance = offset.length();

        if distance < effect_radius {
            // Stronger closer to the pointer; no cap on the resulting speed
            let push = (1.0 - distance / effect_radius) * power;
            let push_angle = offset.y.atan2(offset.x);
            self.velocity += vec2(push_angle.cos(), push_angle.sin()) * push;
        }
    }

    // Drop the glide once the target has been reached
    pub fn update_glide(&mut self) {
        if let Some(glide) = self.glide {
            if self.position.distance(glide.target) < GLIDE_ARRIVAL_DISTANCE {
                self.glide = None;
            }
        }
    }

    // Nudge the heading in a random direction, keeping the base speed
    pub fn steer<R: Rng + ?Sized>(&mut self, rng: &mut R, strength: f32) {
        let random_angle = rng.gen::<f32>() * TAU;
        let nudge = vec2(random_angle.cos(), random_angle.sin());
        self.velocity += nudge * self.speed * strength;

        let current_speed = self.velocity.length();
        self.velocity = if current_speed > 0.0 {
            self.velocity * (self.speed / current_speed)
        } else {
            nudge * self.speed
        };
    }

    // Decay speed gained from pushes back towards the base speed
    pub fn recover(&mut self, recovery_rate: f32) {
        if self.velocity.length() > self.speed * (1.0 + SPEED_TOLERANCE) {
            self.velocity *= recovery_rate;
        }
    }

    // Advance the position by the velocity scaled by the global movement speed
    pub fn integrate(&mut self, base_movement_speed: f32) {
        self.position += self.velocity * base_movement_speed;
    }

    // Wrap the star around the viewport edges into [0, width) x [0, height)
    pub fn wrap_edges(&mut self, width: f32, height: f32) {
        self.position.x = wrap_coordinate(self.position.x, width);
        self.position.y = wrap_coordinate(self.position.y, height);
    }
}

fn wrap_coordinate(value: f32, extent: f32) -> f32 {
    if extent.is_nan() || extent <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    if (0.0..extent).contains(&value) {
        return value;
    }
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to exactly `extent` for tiny negative inputs
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}
