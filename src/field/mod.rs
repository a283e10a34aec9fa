//! Field — the ambient particle simulation.
//!
//! Owns a population of lightweight visual entities and advances + draws
//! them once per display frame onto a persistent [`Canvas`]. Three particle
//! kinds share a base record and are dispatched by tag: drifting dots that
//! scatter away from the pointer, streaming lines, and large faint glows.
//!
//! The field knows nothing about terminals; it works in abstract surface
//! units and draws through the canvas contract only.

pub mod palette;

use std::f32::consts::PI;

use crate::canvas::Canvas;
use crate::rng::Rng;
use crate::types::Rgb;

use palette::{BACKGROUND, COMBINED, CYAN, MAGENTA, WHITE};

/// Surface area per dot particle.
const DOT_AREA: f32 = 4000.0;
/// Surface area per line particle.
const LINE_AREA: f32 = 20000.0;
/// Surface area per glow particle.
const GLOW_AREA: f32 = 50000.0;

/// Pointer repulsion radius and impulse scale for dots.
const REPEL_RADIUS: f32 = 120.0;
const REPEL_STRENGTH: f32 = 0.8;
/// Per-frame velocity damping for dots.
const DAMPING: f32 = 0.98;
/// Per-axis random drift added to dot velocity every frame.
const JITTER: f32 = 0.025;
/// Off-screen margin for line wraparound, so reentry happens out of sight.
const LINE_MARGIN: f32 = 100.0;
/// Per-frame probability of a decorative radial flash.
const FLASH_CHANCE: f32 = 0.02;
const FLASH_RADIUS: f32 = 50.0;
/// Alpha of the translucent per-frame clear; lower values leave longer
/// trails.
const FADE_ALPHA: f32 = 0.15;

/// Gradient alpha levels, expressed as byte fractions of 255.
const A_80: f32 = 0x80 as f32 / 255.0;
const A_60: f32 = 0x60 as f32 / 255.0;
const A_50: f32 = 80.0 / 255.0;
const A_40: f32 = 0x40 as f32 / 255.0;
const A_20: f32 = 0x20 as f32 / 255.0;
const A_15: f32 = 0x15 as f32 / 255.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Kind {
    Dot,
    Line { length: f32, angle: f32 },
    Glow,
}

/// One simulated visual entity. `kind` is fixed for the particle's lifetime;
/// everything else may change every frame.
#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    /// Perspective depth; >= 1, larger is farther (drawn first, scaled
    /// smaller).
    pub z: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
    pub color: Rgb,
    pub brightness: f32,
    pub speed: f32,
    /// Random phase offset desynchronizing the brightness pulse.
    pub phase: f32,
    pub kind: Kind,
}

pub struct Field {
    width: f32,
    height: f32,
    particles: Vec<Particle>,
    frames: u64,
    rng: Rng,
}

impl Field {
    pub fn new(seed: u64) -> Self {
        Field {
            width: 0.0,
            height: 0.0,
            particles: Vec::new(),
            frames: 0,
            rng: Rng::new(seed),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Discard and regenerate the whole population for a new surface size.
    /// Counts per kind derive from the surface area, so density survives
    /// resizing.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.particles.clear();

        let area = width * height;
        for _ in 0..(area / DOT_AREA) as usize {
            let p = self.spawn_dot();
            self.particles.push(p);
        }
        for _ in 0..(area / LINE_AREA) as usize {
            let p = self.spawn_line();
            self.particles.push(p);
        }
        for _ in 0..(area / GLOW_AREA) as usize {
            let p = self.spawn_glow();
            self.particles.push(p);
        }
    }

    fn spawn_dot(&mut self) -> Particle {
        let rng = &mut self.rng;
        Particle {
            x: rng.range(0.0, self.width),
            y: rng.range(0.0, self.height),
            z: rng.range(1.0, 4.0),
            vx: rng.range(-0.15, 0.15),
            vy: rng.range(-0.15, 0.15),
            size: rng.range(0.5, 2.5),
            color: COMBINED[rng.index(COMBINED.len())],
            brightness: rng.range(0.3, 1.0),
            speed: rng.range(0.2, 0.7),
            phase: rng.range(0.0, PI * 2.0),
            kind: Kind::Dot,
        }
    }

    fn spawn_line(&mut self) -> Particle {
        let rng = &mut self.rng;
        let horizontal = rng.chance(0.7);
        let magnitude = rng.range(0.1, 0.4) * rng.sign();
        Particle {
            x: rng.range(0.0, self.width),
            y: rng.range(0.0, self.height),
            z: rng.range(1.0, 3.0),
            vx: if horizontal { magnitude } else { 0.0 },
            vy: if horizontal { 0.0 } else { magnitude },
            size: rng.range(0.5, 2.0),
            color: if rng.chance(0.5) { CYAN[0] } else { MAGENTA[0] },
            brightness: rng.range(0.5, 1.0),
            speed: rng.range(0.2, 0.5),
            phase: rng.range(0.0, PI * 2.0),
            kind: Kind::Line {
                length: rng.range(20.0, 100.0),
                angle: if horizontal { 0.0 } else { PI / 2.0 },
            },
        }
    }

    fn spawn_glow(&mut self) -> Particle {
        let rng = &mut self.rng;
        Particle {
            x: rng.range(0.0, self.width),
            y: rng.range(0.0, self.height),
            z: rng.range(2.0, 4.0),
            vx: rng.range(-0.1, 0.1),
            vy: rng.range(-0.1, 0.1),
            size: rng.range(10.0, 30.0),
            color: if rng.chance(0.5) { CYAN[0] } else { MAGENTA[0] },
            brightness: rng.range(0.05, 0.2),
            speed: rng.range(0.1, 0.4),
            phase: rng.range(0.0, PI * 2.0),
            kind: Kind::Glow,
        }
    }

    /// Advance the simulation one display frame and draw it.
    ///
    /// Population membership never changes here; `resize` is the only
    /// mutation point for it.
    pub fn tick(&mut self, canvas: &mut Canvas, mouse: (f32, f32)) {
        self.frames += 1;
        let time = self.frames as f32 * 0.01;

        canvas.fade(BACKGROUND, FADE_ALPHA);

        // Far-to-near draw order. Stable, since depths collide.
        self.particles.sort_by(|a, b| a.z.total_cmp(&b.z));

        let (w, h) = (self.width, self.height);
        let mut particles = std::mem::take(&mut self.particles);
        for p in &mut particles {
            let pulse = (time * 2.0 + p.phase).sin() * 0.3 + 0.7;
            let brightness = p.brightness * pulse;
            match p.kind {
                Kind::Dot => {
                    update_dot(p, mouse, w, h, &mut self.rng);
                    draw_dot(canvas, p, brightness);
                }
                Kind::Line { length, angle } => {
                    update_line(p, w, h);
                    draw_line(canvas, p, length, angle, brightness);
                }
                Kind::Glow => {
                    update_glow(p, w, h);
                    draw_glow(canvas, p, brightness * pulse);
                }
            }
        }
        self.particles = particles;

        // Occasional decorative burst; draws once and leaves no state.
        if self.rng.chance(FLASH_CHANCE) {
            let x = self.rng.range(0.0, w);
            let y = self.rng.range(0.0, h);
            let color = if self.rng.chance(0.5) { CYAN[0] } else { MAGENTA[0] };
            canvas.radial_gradient(
                x,
                y,
                FLASH_RADIUS,
                &[
                    (0.0, color, A_60),
                    (0.5, color, A_20),
                    (1.0, color, 0.0),
                ],
            );
        }
    }
}

fn update_dot(p: &mut Particle, mouse: (f32, f32), w: f32, h: f32, rng: &mut Rng) {
    let dx = mouse.0 - p.x;
    let dy = mouse.1 - p.y;
    let dist = (dx * dx + dy * dy).sqrt();
    if dist < REPEL_RADIUS && dist > 0.0 {
        let force = (REPEL_RADIUS - dist) / REPEL_RADIUS;
        p.vx -= dx / dist * force * REPEL_STRENGTH;
        p.vy -= dy / dist * force * REPEL_STRENGTH;
    }

    p.x += p.vx;
    p.y += p.vy;

    p.vx *= DAMPING;
    p.vy *= DAMPING;

    p.vx += rng.range(-JITTER, JITTER);
    p.vy += rng.range(-JITTER, JITTER);

    // Torus topology: exit one edge, reenter the opposite one.
    if w > 0.0 {
        p.x = wrap(p.x, w);
    }
    if h > 0.0 {
        p.y = wrap(p.y, h);
    }
}

/// Wrap into [0, span). `rem_euclid` alone can round up to `span` itself for
/// tiny negative inputs.
fn wrap(value: f32, span: f32) -> f32 {
    let wrapped = value.rem_euclid(span);
    if wrapped >= span { 0.0 } else { wrapped }
}

fn draw_dot(canvas: &mut Canvas, p: &Particle, brightness: f32) {
    let size = p.size / p.z;

    canvas.radial_gradient(
        p.x,
        p.y,
        size * 4.0,
        &[
            (0.0, p.color, brightness * A_50),
            (0.5, p.color, A_20),
            (1.0, p.color, 0.0),
        ],
    );
    canvas.fill_circle(p.x, p.y, size, p.color, brightness);
}

fn update_line(p: &mut Particle, w: f32, h: f32) {
    p.x += p.vx * p.speed;
    p.y += p.vy * p.speed;

    // Wrap well past the edges so departure and reentry stay off-screen.
    if p.x < -LINE_MARGIN {
        p.x = w + LINE_MARGIN;
    }
    if p.x > w + LINE_MARGIN {
        p.x = -LINE_MARGIN;
    }
    if p.y < -LINE_MARGIN {
        p.y = h + LINE_MARGIN;
    }
    if p.y > h + LINE_MARGIN {
        p.y = -LINE_MARGIN;
    }
}

fn draw_line(canvas: &mut Canvas, p: &Particle, length: f32, angle: f32, brightness: f32) {
    let end_x = p.x - angle.cos() * length;
    let end_y = p.y - angle.sin() * length;

    canvas.stroke_gradient(
        p.x,
        p.y,
        end_x,
        end_y,
        p.size,
        &[
            (0.0, p.color, brightness),
            (0.3, p.color, brightness * A_80),
            (1.0, p.color, 0.0),
        ],
    );

    // Bright head at the leading point.
    canvas.fill_circle(p.x, p.y, p.size * 1.5, WHITE[0], brightness * 0.8);
}

fn update_glow(p: &mut Particle, w: f32, h: f32) {
    p.x += p.vx;
    p.y += p.vy;

    // Elastic bounce rather than wraparound.
    if p.x < 0.0 || p.x > w {
        p.vx = -p.vx;
    }
    if p.y < 0.0 || p.y > h {
        p.vy = -p.vy;
    }
}

fn draw_glow(canvas: &mut Canvas, p: &Particle, alpha: f32) {
    canvas.radial_gradient(
        p.x,
        p.y,
        p.size,
        &[
            (0.0, p.color, A_40 * alpha),
            (0.5, p.color, A_15 * alpha),
            (1.0, p.color, 0.0),
        ],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::rgb;

    fn test_canvas() -> Canvas {
        Canvas::new(40, 30, 4.0, BACKGROUND)
    }

    #[test]
    fn population_counts_derive_from_area() {
        let mut field = Field::new(1);
        field.resize(800.0, 600.0);
        let dots = field.particles().iter().filter(|p| p.kind == Kind::Dot).count();
        let lines = field
            .particles()
            .iter()
            .filter(|p| matches!(p.kind, Kind::Line { .. }))
            .count();
        let glows = field.particles().iter().filter(|p| p.kind == Kind::Glow).count();
        assert_eq!(dots, 120);
        assert_eq!(lines, 24);
        assert_eq!(glows, 9);
        assert_eq!(dots + lines + glows, field.particles().len());
    }

    #[test]
    fn tiny_surface_yields_empty_population() {
        let mut field = Field::new(1);
        field.resize(10.0, 10.0);
        assert!(field.particles().is_empty());
    }

    #[test]
    fn ticks_never_change_population_size() {
        let mut field = Field::new(7);
        field.resize(160.0, 120.0);
        let count = field.particles().len();
        let mut canvas = test_canvas();
        for _ in 0..200 {
            field.tick(&mut canvas, (20.0, 20.0));
            assert_eq!(field.particles().len(), count);
        }
    }

    #[test]
    fn resize_replaces_population() {
        let mut field = Field::new(7);
        field.resize(800.0, 600.0);
        field.resize(160.0, 120.0);
        assert_eq!(
            field.particles().iter().filter(|p| p.kind == Kind::Dot).count(),
            4,
        );
    }

    #[test]
    fn generation_ranges_hold_per_kind() {
        let mut field = Field::new(99);
        field.resize(2000.0, 1500.0);
        for p in field.particles() {
            assert!(p.size > 0.0);
            assert!(p.z >= 1.0);
            assert!(p.brightness > 0.0 && p.brightness <= 1.0);
            match p.kind {
                Kind::Dot => {
                    assert!((1.0..4.0).contains(&p.z));
                    assert!((-0.15..0.15).contains(&p.vx));
                    assert!((-0.15..0.15).contains(&p.vy));
                    assert!((0.5..2.5).contains(&p.size));
                    assert!((0.3..1.0).contains(&p.brightness));
                    assert!((0.2..0.7).contains(&p.speed));
                }
                Kind::Line { length, angle } => {
                    assert!((1.0..3.0).contains(&p.z));
                    assert!((20.0..100.0).contains(&length));
                    // Exactly one axis moves, by 0.1..0.4 either way.
                    let (moving, still) = if angle == 0.0 { (p.vx, p.vy) } else { (p.vy, p.vx) };
                    assert_eq!(still, 0.0);
                    assert!((0.1..0.4).contains(&moving.abs()));
                    assert!(p.color == CYAN[0] || p.color == MAGENTA[0]);
                }
                Kind::Glow => {
                    assert!((2.0..4.0).contains(&p.z));
                    assert!((10.0..30.0).contains(&p.size));
                    assert!((0.05..0.2).contains(&p.brightness));
                    assert!(p.color == CYAN[0] || p.color == MAGENTA[0]);
                }
            }
        }
    }

    #[test]
    fn dots_stay_on_surface_after_wraparound() {
        let mut field = Field::new(5);
        field.resize(160.0, 120.0);
        let mut canvas = test_canvas();
        for frame in 0..500 {
            // Sweep the pointer so repulsion shoves dots across the edges.
            let mouse = ((frame % 160) as f32, (frame % 120) as f32);
            field.tick(&mut canvas, mouse);
            for p in field.particles().iter().filter(|p| p.kind == Kind::Dot) {
                assert!((0.0..160.0).contains(&p.x), "x escaped: {}", p.x);
                assert!((0.0..120.0).contains(&p.y), "y escaped: {}", p.y);
            }
        }
    }

    #[test]
    fn pointer_repels_nearby_dots() {
        let mut field = Field::new(11);
        field.resize(400.0, 400.0);
        // Park the pointer one unit away from a known dot.
        let (tx, ty) = {
            let p = &field.particles()[0];
            (p.x + 1.0, p.y)
        };
        let mut canvas = test_canvas();
        field.tick(&mut canvas, (tx, ty));
        // The impulse dwarfs spawn velocity plus jitter.
        let top_speed = field
            .particles()
            .iter()
            .filter(|p| p.kind == Kind::Dot)
            .map(|p| (p.vx * p.vx + p.vy * p.vy).sqrt())
            .fold(0.0f32, f32::max);
        assert!(top_speed > 0.4, "no dot was repelled: {top_speed}");
    }

    #[test]
    fn pointer_on_top_of_dot_is_not_a_nan() {
        let mut field = Field::new(13);
        field.resize(400.0, 300.0);
        let mut canvas = test_canvas();
        for _ in 0..50 {
            field.tick(&mut canvas, (200.0, 150.0));
        }
        for p in field.particles() {
            assert!(p.x.is_finite() && p.y.is_finite());
            assert!(p.vx.is_finite() && p.vy.is_finite());
        }
    }

    #[test]
    fn same_seed_runs_are_identical() {
        let mut a = Field::new(42);
        let mut b = Field::new(42);
        a.resize(400.0, 300.0);
        b.resize(400.0, 300.0);
        let mut ca = test_canvas();
        let mut cb = test_canvas();
        for _ in 0..60 {
            a.tick(&mut ca, (10.0, 10.0));
            b.tick(&mut cb, (10.0, 10.0));
        }
        for (pa, pb) in a.particles().iter().zip(b.particles()) {
            assert_eq!(pa.x, pb.x);
            assert_eq!(pa.y, pb.y);
            assert_eq!(pa.vx, pb.vx);
        }
    }

    #[test]
    fn tick_paints_trails_not_hard_clears() {
        let mut field = Field::new(3);
        field.resize(160.0, 120.0);
        let mut canvas = Canvas::new(40, 30, 4.0, rgb(255, 255, 255));
        field.tick(&mut canvas, (0.0, 0.0));
        // One 15% fade over white cannot reach the background color yet, and
        // every palette swatch keeps the blue channel well above it.
        let (top, _) = canvas.cell(20, 10);
        assert!(top.b > BACKGROUND.b);
    }

    #[test]
    fn population_sorted_far_to_near_after_tick() {
        let mut field = Field::new(21);
        field.resize(800.0, 600.0);
        let mut canvas = test_canvas();
        field.tick(&mut canvas, (0.0, 0.0));
        let depths: Vec<f32> = field.particles().iter().map(|p| p.z).collect();
        assert!(depths.windows(2).all(|w| w[0] <= w[1]));
    }
}
