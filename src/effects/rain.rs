//! Matrix rain — a per-column drop simulation over the terminal cell grid.
//!
//! Each step paints a random glyph at every column's drop row and advances
//! the drop; past the bottom edge it resets with a small probability, so
//! columns restart out of phase. Previously painted cells decay toward
//! black, which is what draws the trailing tails.

use std::time::Duration;

use crate::rng::Rng;

/// Drops advance on their own 33 ms cadence, independent of the host frame
/// rate.
pub const STEP_INTERVAL: Duration = Duration::from_millis(33);

/// Probability that a drop past the bottom edge resets to the top.
const RESET_CHANCE: f32 = 0.025;
/// Per-step brightness decay for painted cells.
const DECAY: f32 = 0.80;
/// Below this a cell is considered dark and is skipped by renderers.
const DARK: f32 = 0.04;

/// Half-width katakana plus digits; single-cell wide in every terminal.
const GLYPHS: &str = "ｱｲｳｴｵｶｷｸｹｺｻｼｽｾｿﾀﾁﾂﾃﾄﾅﾆﾇﾈﾉﾊﾋﾌﾍﾎﾏﾐﾑﾒﾓﾔﾕﾖﾗﾘﾙﾚﾛﾜｦﾝ0123456789";

#[derive(Debug, Clone, Copy)]
pub struct RainCell {
    pub col: u16,
    pub row: u16,
    pub glyph: char,
    /// 1.0 at the drop head, decaying along the tail.
    pub brightness: f32,
}

pub struct Rain {
    cols: usize,
    rows: usize,
    drops: Vec<usize>,
    cells: Vec<(char, f32)>,
    glyphs: Vec<char>,
    rng: Rng,
}

impl Rain {
    pub fn new(cols: u16, rows: u16, seed: u64) -> Self {
        let (cols, rows) = (cols as usize, rows as usize);
        Rain {
            cols,
            rows,
            drops: vec![1; cols],
            cells: vec![(' ', 0.0); cols * rows],
            glyphs: GLYPHS.chars().collect(),
            rng: Rng::new(seed),
        }
    }

    pub fn step(&mut self) {
        for cell in &mut self.cells {
            cell.1 *= DECAY;
        }

        for col in 0..self.cols {
            let row = self.drops[col];
            if row < self.rows {
                let glyph = self.glyphs[self.rng.index(self.glyphs.len())];
                self.cells[row * self.cols + col] = (glyph, 1.0);
            }
            if row > self.rows && self.rng.chance(RESET_CHANCE) {
                self.drops[col] = 0;
            } else {
                self.drops[col] += 1;
            }
        }
    }

    /// Every lit cell, brightest-last not guaranteed; dark cells omitted.
    pub fn cells(&self) -> impl Iterator<Item = RainCell> + '_ {
        self.cells.iter().enumerate().filter_map(|(idx, &(glyph, b))| {
            if b < DARK {
                return None;
            }
            Some(RainCell {
                col: (idx % self.cols) as u16,
                row: (idx / self.cols) as u16,
                glyph,
                brightness: b,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_stay_inside_the_grid() {
        let mut rain = Rain::new(10, 8, 42);
        for _ in 0..500 {
            rain.step();
            for cell in rain.cells() {
                assert!(cell.col < 10);
                assert!(cell.row < 8);
            }
        }
    }

    #[test]
    fn heads_paint_at_full_brightness() {
        let mut rain = Rain::new(4, 4, 7);
        rain.step();
        // Drops all start at row 1, so the first step lights row 1.
        let lit: Vec<_> = rain.cells().filter(|c| c.brightness == 1.0).collect();
        assert_eq!(lit.len(), 4);
        assert!(lit.iter().all(|c| c.row == 1));
    }

    #[test]
    fn tails_decay_between_steps() {
        let mut rain = Rain::new(1, 16, 9);
        rain.step();
        rain.step();
        let head = rain.cells().find(|c| c.row == 2).expect("head");
        let tail = rain.cells().find(|c| c.row == 1).expect("tail");
        assert_eq!(head.brightness, 1.0);
        assert!(tail.brightness < 1.0);
    }

    #[test]
    fn drops_eventually_reset_to_the_top() {
        let mut rain = Rain::new(2, 4, 11);
        let mut saw_reset = false;
        for _ in 0..2000 {
            rain.step();
            if rain.drops.iter().any(|&d| d == 0) {
                saw_reset = true;
                break;
            }
        }
        assert!(saw_reset, "no drop ever reset");
    }
}
