//! App — the host that owns the terminal and drives everything.
//!
//! One cooperative loop: drain input events, resolve any due submission,
//! advance the simulations, render a frame, sleep to the fps cap. All state
//! is mutated from this single thread; pointer and resize notifications just
//! overwrite last-known values read by the next frame.

pub mod view;

use std::io;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind,
};
use crossterm::{cursor, execute, terminal};

use crate::canvas::Canvas;
use crate::config::{AppConfig, matches_binding};
use crate::content::Content;
use crate::effects::{Effects, MouseGlow};
use crate::field::Field;
use crate::field::palette::BACKGROUND;
use crate::shell::{HistoryDirection, Pending, Session};

/// Field surface units per canvas pixel. One terminal column is one pixel
/// wide and two pixels tall, so a cell spans 4×8 units and the area-derived
/// particle counts land at a comfortable on-screen density.
const UNITS_PER_PX: f32 = 4.0;

/// Artificial processing delay between the input echo and the output.
const SUBMIT_DELAY: Duration = Duration::from_millis(100);

struct PendingSubmission {
    pending: Pending,
    due: Instant,
}

pub struct App {
    config: AppConfig,
    session: Session,
    field: Field,
    canvas: Canvas,
    glow: MouseGlow,
    effects: Effects,
    pending: Option<PendingSubmission>,
    /// Last-known pointer position, field surface units.
    mouse: (f32, f32),
    cols: u16,
    rows: u16,
}

impl App {
    pub fn new(content: Content, config: AppConfig) -> Self {
        let seed = config.field_seed.unwrap_or_else(time_seed);
        App {
            session: Session::new(content),
            field: Field::new(seed),
            canvas: Canvas::new(0, 0, UNITS_PER_PX, BACKGROUND),
            glow: MouseGlow::new(),
            effects: Effects::new(seed.wrapping_add(1)),
            pending: None,
            mouse: (0.0, 0.0),
            cols: 0,
            rows: 0,
            config,
        }
    }

    /// Run until quit. Sets up the terminal and always restores it, error
    /// paths included.
    pub fn run(&mut self) -> Result<()> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            event::EnableMouseCapture,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All),
        )?;

        let result = self.main_loop(&mut stdout);

        let _ = execute!(
            stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen,
        );
        let _ = terminal::disable_raw_mode();

        result
    }

    fn main_loop(&mut self, stdout: &mut io::Stdout) -> Result<()> {
        let (cols, rows) = terminal::size()?;
        self.resize(cols, rows);

        let frame_target = Duration::from_millis(1000 / self.config.target_fps.max(1));

        loop {
            let frame_start = Instant::now();

            while event::poll(Duration::ZERO)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                    }
                    Event::Mouse(mouse) => {
                        if matches!(
                            mouse.kind,
                            MouseEventKind::Moved | MouseEventKind::Drag(_),
                        ) {
                            self.mouse = cell_to_units(mouse.column, mouse.row);
                        }
                    }
                    Event::Resize(cols, rows) => self.resize(cols, rows),
                    _ => {}
                }
            }

            let now = Instant::now();
            self.resolve_pending(now);
            self.effects.expire(now);

            // A zero-size viewport is a normal transient state: skip the
            // work and wait for the next resize.
            if !self.canvas.is_empty() {
                self.field.tick(&mut self.canvas, self.mouse);
                self.glow.step(self.mouse, frame_target.as_secs_f32());
                self.glow.draw(&mut self.canvas);
                self.effects.draw_confetti(&mut self.canvas, now);
            }

            let processing = self.pending.is_some();
            let matrix = self.effects.matrix(now);
            view::render(
                stdout,
                &self.canvas,
                &self.session,
                matrix,
                processing,
                self.cols,
                self.rows,
            )?;

            let elapsed = frame_start.elapsed();
            if elapsed < frame_target {
                thread::sleep(frame_target - elapsed);
            }
        }
    }

    /// Returns true when the quit binding fired.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }

        let bindings = self.config.key_bindings.clone();
        if matches_binding(&bindings.quit, &key) {
            return true;
        }
        if matches_binding(&bindings.history_older, &key) {
            self.session.recall(HistoryDirection::Older);
            return false;
        }
        if matches_binding(&bindings.history_newer, &key) {
            self.session.recall(HistoryDirection::Newer);
            return false;
        }
        if matches_binding(&bindings.complete, &key) {
            self.session.complete();
            return false;
        }

        match key.code {
            KeyCode::Enter => self.submit(Instant::now()),
            KeyCode::Backspace => self.session.backspace(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.session.push_input(c);
            }
            _ => {}
        }
        false
    }

    /// Submissions are ignored while one is already processing; the
    /// interpreter never queues.
    fn submit(&mut self, now: Instant) {
        if self.pending.is_some() {
            return;
        }
        if let Some(pending) = self.session.submit() {
            self.pending = Some(PendingSubmission {
                pending,
                due: now + SUBMIT_DELAY,
            });
        }
    }

    fn resolve_pending(&mut self, now: Instant) {
        if self.pending.as_ref().is_none_or(|p| now < p.due) {
            return;
        }
        if let Some(p) = self.pending.take() {
            if let Some(effect) = self.session.dispatch(&p.pending) {
                self.effects
                    .trigger(effect, now, self.cols, self.rows, self.canvas.width());
            }
        }
    }

    fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.canvas = Canvas::new(cols, rows.saturating_mul(2), UNITS_PER_PX, BACKGROUND);
        self.field.resize(self.canvas.width(), self.canvas.height());
    }
}

/// Map a terminal cell coordinate to field surface units (cell center).
fn cell_to_units(col: u16, row: u16) -> (f32, f32) {
    (
        (col as f32 + 0.5) * UNITS_PER_PX,
        (row as f32 * 2.0 + 1.0) * UNITS_PER_PX,
    )
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5EED_5EED_5EED_5EED)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let config = AppConfig {
            field_seed: Some(42),
            ..AppConfig::default()
        };
        App::new(Content::builtin(), config)
    }

    #[test]
    fn resize_populates_the_field_from_canvas_units() {
        let mut app = app();
        app.resize(100, 30);
        // 100x60 pixels at 4 units/px = 400x240 units = 96000 area.
        assert_eq!(app.canvas.width(), 400.0);
        assert_eq!(app.canvas.height(), 240.0);
        assert_eq!(app.field.particles().len(), 24 + 4 + 1);
    }

    #[test]
    fn zero_size_resize_clears_the_surface() {
        let mut app = app();
        app.resize(100, 30);
        app.resize(0, 0);
        assert!(app.canvas.is_empty());
        assert!(app.field.particles().is_empty());
    }

    #[test]
    fn submissions_are_ignored_while_processing() {
        let mut app = app();
        let t0 = Instant::now();
        app.session.push_input('h');
        app.session.push_input('i');
        app.submit(t0);
        assert!(app.pending.is_some());

        // A second Enter mid-delay neither queues nor echoes.
        let lines_before = app.session.lines().len();
        app.session.push_input('x');
        app.submit(t0 + Duration::from_millis(10));
        assert_eq!(app.session.lines().len(), lines_before);

        // Not due yet, then due.
        app.resolve_pending(t0 + Duration::from_millis(50));
        assert!(app.pending.is_some());
        app.resolve_pending(t0 + SUBMIT_DELAY);
        assert!(app.pending.is_none());
        assert!(app.session.lines().len() > lines_before);
    }

    #[test]
    fn matrix_command_opens_the_overlay() {
        let mut app = app();
        app.resize(80, 24);
        let t0 = Instant::now();
        for c in "matrix".chars() {
            app.session.push_input(c);
        }
        app.submit(t0);
        app.resolve_pending(t0 + SUBMIT_DELAY);
        assert!(app.effects.matrix_active());
    }

    #[test]
    fn pointer_cells_map_to_unit_centers() {
        assert_eq!(cell_to_units(0, 0), (2.0, 4.0));
        assert_eq!(cell_to_units(10, 5), (42.0, 44.0));
    }
}
