/*
 * Population Module
 *
 * Decides how many stars the field should hold for the current viewport and
 * device class, and brings the live collection to that size. Growth adds
 * edge-spawned stars so existing motion is preserved; shrinking truncates.
 */

use log::debug;
use rand::Rng;

use crate::params::{SimulationParams, Theme};
use crate::particle::Particle;
use crate::viewport::{Viewport, REFERENCE_HEIGHT, REFERENCE_WIDTH};

// The field never holds fewer stars than this
pub const MIN_STAR_COUNT: usize = 50;

// Target star count for the viewport, scaled from the 1920x1080 baseline
pub fn target_count(viewport: &Viewport, params: &SimulationParams, constrained: bool) -> usize {
    let area_ratio = viewport.area() / (REFERENCE_WIDTH * REFERENCE_HEIGHT);

    // Float to int casts saturate, so NaN and negatives land on 0
    let mut count = (params.total_star_count as f32 * area_ratio).floor() as usize;

    if constrained {
        count = (count as f32 * params.mobile_star_reduction).floor() as usize;
    }

    count.max(MIN_STAR_COUNT)
}

// Replace the whole collection with `target` randomly placed stars
pub fn regenerate<R: Rng + ?Sized>(
    particles: &mut Vec<Particle>,
    target: usize,
    rng: &mut R,
    viewport: &Viewport,
    params: &SimulationParams,
    theme: Theme,
) {
    particles.clear();
    particles.reserve(target);
    particles.extend((0..target).map(|_| Particle::random(rng, viewport, params, theme)));
}

// Bring the collection to `target` stars, keeping the ones already there
pub fn reconcile<R: Rng + ?Sized>(
    particles: &mut Vec<Particle>,
    target: usize,
    rng: &mut R,
    viewport: &Viewport,
    params: &SimulationParams,
    theme: Theme,
) {
    let current = particles.len();

    if current == 0 {
        debug!("population empty, generating {} stars", target);
        regenerate(particles, target, rng, viewport, params, theme);
    } else if target > current {
        debug!("population {} -> {}, spawning from edges", current, target);
        particles.extend((current..target).map(|_| Particle::edge_spawn(rng, viewport, params, theme)));
    } else if target < current {
        debug!("population {} -> {}, truncating", current, target);
        particles.truncate(target);
    }
}
