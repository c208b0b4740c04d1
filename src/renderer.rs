/*
 * Renderer Module
 *
 * This module paints the star field: one filled disc per star, then a line
 * between every pair of stars closer than the connection distance. Line
 * opacity and thickness fall off linearly with distance.
 *
 * The pair pass is brute force over all i < j. The frame budget is the only
 * thing keeping it affordable for large populations.
 *
 * Drawing goes through the Canvas trait in simulation coordinates; the
 * nannou implementation maps them to window space.
 */

use nannou::prelude::*;

use crate::budget::FrameBudget;
use crate::params::{SimulationParams, Theme};
use crate::particle::Particle;
use crate::viewport::Viewport;

// Lines never get thinner than this
pub const MIN_LINE_THICKNESS: f32 = 0.1;

/// Immediate-mode drawing surface in simulation coordinates.
pub trait Canvas {
    fn clear(&mut self, theme: Theme);
    fn fill_disc(&mut self, center: Point2, radius: f32, color: Rgba);
    fn stroke_line(&mut self, start: Point2, end: Point2, weight: f32, color: Rgba);
}

/// A line to draw between two stars, by index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub opacity: f32,
    pub thickness: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub discs: usize,
    pub lines: usize,
}

// Opacity and thickness of the line between two points, if they are close enough
pub fn line_style(
    from: Point2,
    to: Point2,
    budget: &FrameBudget,
    max_line_thickness: f32,
) -> Option<(f32, f32)> {
    let distance = from.distance(to);
    if distance >= budget.min_line_distance {
        return None;
    }

    let closeness = 1.0 - distance / budget.min_line_distance;
    let opacity = closeness * budget.max_line_opacity;
    let thickness = (closeness * max_line_thickness).max(MIN_LINE_THICKNESS);
    Some((opacity, thickness))
}

// Every pair of stars (i < j) close enough to be connected
pub fn connections<'a>(
    particles: &'a [Particle],
    budget: &'a FrameBudget,
    max_line_thickness: f32,
) -> impl Iterator<Item = Connection> + 'a {
    particles.iter().enumerate().flat_map(move |(a, p1)| {
        particles[a + 1..]
            .iter()
            .enumerate()
            .filter_map(move |(offset, p2)| {
                line_style(p1.position, p2.position, budget, max_line_thickness).map(
                    |(opacity, thickness)| Connection {
                        a,
                        b: a + 1 + offset,
                        opacity,
                        thickness,
                    },
                )
            })
    })
}

pub fn draw_particles<C: Canvas>(canvas: &mut C, particles: &[Particle]) -> usize {
    for particle in particles {
        canvas.fill_disc(particle.position, particle.radius, particle.fill());
    }
    particles.len()
}

pub fn draw_connections<C: Canvas>(
    canvas: &mut C,
    particles: &[Particle],
    budget: &FrameBudget,
    params: &SimulationParams,
    theme: Theme,
) -> usize {
    let line_color = params.line_color(theme);
    let mut lines = 0;

    for connection in connections(particles, budget, params.max_line_thickness) {
        canvas.stroke_line(
            particles[connection.a].position,
            particles[connection.b].position,
            connection.thickness,
            line_color.with_alpha(connection.opacity),
        );
        lines += 1;
    }

    lines
}

// Paint one full frame: background, stars, then connections
pub fn render<C: Canvas>(
    canvas: &mut C,
    particles: &[Particle],
    budget: &FrameBudget,
    params: &SimulationParams,
    theme: Theme,
) -> FrameStats {
    canvas.clear(theme);
    let discs = draw_particles(canvas, particles);
    let lines = draw_connections(canvas, particles, budget, params, theme);
    FrameStats { discs, lines }
}

// Canvas backed by a nannou Draw, mapping simulation space to window space
pub struct NannouCanvas<'a> {
    draw: &'a Draw,
    viewport: Viewport,
    window_rect: Rect,
}

impl<'a> NannouCanvas<'a> {
    pub fn new(draw: &'a Draw, viewport: Viewport, window_rect: Rect) -> Self {
        Self {
            draw,
            viewport,
            window_rect,
        }
    }

    fn to_window(&self, point: Point2) -> Point2 {
        self.viewport.to_window(point, self.window_rect)
    }
}

impl Canvas for NannouCanvas<'_> {
    fn clear(&mut self, theme: Theme) {
        let background = if theme.is_dark() { BLACK } else { WHITE };
        self.draw.background().color(background);
    }

    fn fill_disc(&mut self, center: Point2, radius: f32, color: Rgba) {
        self.draw
            .ellipse()
            .xy(self.to_window(center))
            .radius(radius)
            .color(color);
    }

    fn stroke_line(&mut self, start: Point2, end: Point2, weight: f32, color: Rgba) {
        self.draw
            .line()
            .start(self.to_window(start))
            .end(self.to_window(end))
            .weight(weight)
            .color(color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ColorRgb;

    #[derive(Default)]
    struct RecordingCanvas {
        cleared: Option<Theme>,
        discs: Vec<(Point2, f32, Rgba)>,
        lines: Vec<(Point2, Point2, f32, Rgba)>,
    }

    impl Canvas for RecordingCanvas {
        fn clear(&mut self, theme: Theme) {
            self.cleared = Some(theme);
        }

        fn fill_disc(&mut self, center: Point2, radius: f32, color: Rgba) {
            self.discs.push((center, radius, color));
        }

        fn stroke_line(&mut self, start: Point2, end: Point2, weight: f32, color: Rgba) {
            self.lines.push((start, end, weight, color));
        }
    }

    fn star(x: f32, y: f32) -> Particle {
        Particle {
            position: pt2(x, y),
            velocity: Vec2::ZERO,
            radius: 2.0,
            opacity: 0.5,
            color: ColorRgb::new(10, 20, 30),
            speed: 0.2,
            angle: 0.0,
            glide: None,
        }
    }

    #[test]
    fn test_far_pair_draws_nothing() {
        let params = SimulationParams::default();
        let budget = FrameBudget::for_population(&params, 2);
        let particles = [star(0.0, 0.0), star(190.0, 0.0)];

        let mut canvas = RecordingCanvas::default();
        let stats = render(&mut canvas, &particles, &budget, &params, Theme::Dark);
        assert_eq!(stats, FrameStats { discs: 2, lines: 0 });
        assert!(canvas.lines.is_empty());
    }

    #[test]
    fn test_coincident_pair_draws_at_maximum() {
        let params = SimulationParams::default();
        let budget = FrameBudget::for_population(&params, 2);
        let particles = [star(50.0, 50.0), star(50.0, 50.0)];

        let mut canvas = RecordingCanvas::default();
        render(&mut canvas, &particles, &budget, &params, Theme::Dark);
        assert_eq!(canvas.lines.len(), 1);

        let (_, _, weight, color) = canvas.lines[0];
        assert!((weight - params.max_line_thickness).abs() < 1e-6);
        assert!((color.alpha - params.max_line_opacity).abs() < 1e-6);
        assert!((color.green - 162.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_thickness_floor() {
        let params = SimulationParams {
            max_line_thickness: 0.01,
            ..Default::default()
        };
        let budget = FrameBudget::for_population(&params, 2);
        let (_, thickness) = line_style(pt2(0.0, 0.0), pt2(0.0, 0.0), &budget, params.max_line_thickness)
            .expect("coincident stars connect");
        assert_eq!(thickness, MIN_LINE_THICKNESS);
    }

    #[test]
    fn test_linear_falloff() {
        let params = SimulationParams::default();
        let budget = FrameBudget::for_population(&params, 2);
        let (opacity, thickness) =
            line_style(pt2(0.0, 0.0), pt2(95.0, 0.0), &budget, params.max_line_thickness).unwrap();
        assert!((opacity - 0.425).abs() < 1e-5);
        assert!((thickness - 1.5).abs() < 1e-5);
    }

    #[test]
    fn test_connections_visit_each_pair_once() {
        let params = SimulationParams::default();
        let budget = FrameBudget::for_population(&params, 3);
        let particles = [star(0.0, 0.0), star(10.0, 0.0), star(20.0, 0.0)];

        let pairs: Vec<(usize, usize)> = connections(&particles, &budget, params.max_line_thickness)
            .map(|c| (c.a, c.b))
            .collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn test_degraded_distance_drops_lines() {
        let params = SimulationParams {
            optimization_threshold: 1,
            ..Default::default()
        };
        // factor 0.5 halves the connection distance to 95
        let budget = FrameBudget::for_population(&params, 2);
        let particles = [star(0.0, 0.0), star(120.0, 0.0)];
        assert_eq!(connections(&particles, &budget, params.max_line_thickness).count(), 0);
    }

    #[test]
    fn test_discs_use_star_color_and_opacity() {
        let params = SimulationParams::default();
        let budget = FrameBudget::for_population(&params, 1);
        let particles = [star(5.0, 6.0)];

        let mut canvas = RecordingCanvas::default();
        render(&mut canvas, &particles, &budget, &params, Theme::Light);
        assert_eq!(canvas.cleared, Some(Theme::Light));

        let (center, radius, color) = canvas.discs[0];
        assert_eq!(center, pt2(5.0, 6.0));
        assert_eq!(radius, 2.0);
        assert!((color.alpha - 0.5).abs() < 1e-6);
        assert!((color.red - 10.0 / 255.0).abs() < 1e-6);
    }
}
