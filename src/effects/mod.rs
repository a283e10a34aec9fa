//! Effects — timed, fire-and-forget visual side effects.
//!
//! Commands can trigger a full-screen matrix overlay or a confetti burst;
//! both are windows measured from the trigger instant, nothing cancels them,
//! and re-triggering simply restarts the window. The spring-damped mouse
//! glow lives here too since it is decorative and independent of the field.

pub mod rain;

use std::time::{Duration, Instant};

use crate::canvas::Canvas;
use crate::field::palette::{CONFETTI, CYAN, MAGENTA};
use crate::rng::Rng;
use crate::shell::SideEffect;
use crate::types::Rgb;

use rain::Rain;

pub const MATRIX_DURATION: Duration = Duration::from_secs(5);
pub const CONFETTI_DURATION: Duration = Duration::from_secs(3);

const CONFETTI_PIECES: usize = 50;
/// Confetti square edge, surface units.
const PIECE_SIZE: f32 = 6.0;
/// Pieces start above and finish below the surface by this margin.
const PIECE_MARGIN: f32 = 20.0;

/// The running matrix overlay: a rain simulation plus its expiry instant.
pub struct Overlay {
    until: Instant,
    last_step: Instant,
    rain: Rain,
}

impl Overlay {
    pub fn rain(&self) -> &Rain {
        &self.rain
    }
}

struct Piece {
    x: f32,
    delay: f32,
    duration: f32,
    color: Rgb,
}

struct Confetti {
    started: Instant,
    until: Instant,
    pieces: Vec<Piece>,
}

pub struct Effects {
    matrix: Option<Overlay>,
    confetti: Option<Confetti>,
    rng: Rng,
}

impl Effects {
    pub fn new(seed: u64) -> Self {
        Effects {
            matrix: None,
            confetti: None,
            rng: Rng::new(seed),
        }
    }

    /// Start (or restart) an effect's window.
    pub fn trigger(
        &mut self,
        effect: SideEffect,
        now: Instant,
        cols: u16,
        rows: u16,
        surface_width: f32,
    ) {
        match effect {
            SideEffect::MatrixOverlay => {
                self.matrix = Some(Overlay {
                    until: now + MATRIX_DURATION,
                    last_step: now,
                    rain: Rain::new(cols, rows, self.rng.next_u64()),
                });
            }
            SideEffect::Confetti => {
                let pieces = (0..CONFETTI_PIECES)
                    .map(|_| Piece {
                        x: self.rng.range(0.0, surface_width),
                        delay: self.rng.range(0.0, 0.5),
                        duration: self.rng.range(2.0, 4.0),
                        color: CONFETTI[self.rng.index(CONFETTI.len())],
                    })
                    .collect();
                self.confetti = Some(Confetti {
                    started: now,
                    until: now + CONFETTI_DURATION,
                    pieces,
                });
            }
        }
    }

    /// Drop effects whose window has passed.
    pub fn expire(&mut self, now: Instant) {
        if self.matrix.as_ref().is_some_and(|m| now >= m.until) {
            self.matrix = None;
        }
        if self.confetti.as_ref().is_some_and(|c| now >= c.until) {
            self.confetti = None;
        }
    }

    /// The matrix overlay, stepped up to date, if its window is open.
    pub fn matrix(&mut self, now: Instant) -> Option<&Overlay> {
        let overlay = self.matrix.as_mut()?;
        if now.duration_since(overlay.last_step) >= rain::STEP_INTERVAL {
            overlay.rain.step();
            overlay.last_step = now;
        }
        Some(&*overlay)
    }

    pub fn matrix_active(&self) -> bool {
        self.matrix.is_some()
    }

    /// Paint falling confetti for the open window, if any.
    pub fn draw_confetti(&self, canvas: &mut Canvas, now: Instant) {
        let Some(confetti) = &self.confetti else {
            return;
        };
        let elapsed = now.duration_since(confetti.started).as_secs_f32();
        let travel = canvas.height() + PIECE_MARGIN * 2.0;
        for piece in &confetti.pieces {
            let t = (elapsed - piece.delay) / piece.duration;
            if !(0.0..=1.0).contains(&t) {
                continue;
            }
            let y = t * travel - PIECE_MARGIN;
            canvas.fill_rect(piece.x, y, PIECE_SIZE, PIECE_SIZE, piece.color, 1.0);
        }
    }
}

// Overdamped spring: the halo settles on the pointer without overshoot.
const STIFFNESS: f32 = 200.0;
const SPRING_DAMPING: f32 = 30.0;
const MASS: f32 = 0.5;

/// Glow radius in surface units (a 400-unit-wide halo).
const GLOW_RADIUS: f32 = 200.0;
/// Overall glow opacity.
const GLOW_OPACITY: f32 = 0.2;

/// A soft pointer halo that trails the mouse on a critically-damped-ish
/// spring instead of snapping to it.
pub struct MouseGlow {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
}

impl MouseGlow {
    pub fn new() -> Self {
        MouseGlow {
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
        }
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn step(&mut self, target: (f32, f32), dt: f32) {
        let ax = (STIFFNESS * (target.0 - self.x) - SPRING_DAMPING * self.vx) / MASS;
        let ay = (STIFFNESS * (target.1 - self.y) - SPRING_DAMPING * self.vy) / MASS;
        self.vx += ax * dt;
        self.vy += ay * dt;
        self.x += self.vx * dt;
        self.y += self.vy * dt;
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        canvas.radial_gradient(
            self.x,
            self.y,
            GLOW_RADIUS,
            &[
                (0.0, CYAN[0], 0.3 * GLOW_OPACITY),
                (0.4, MAGENTA[0], 0.1 * GLOW_OPACITY),
                (0.7, MAGENTA[0], 0.0),
            ],
        );
    }
}

impl Default for MouseGlow {
    fn default() -> Self {
        Self::new()
    }
}
