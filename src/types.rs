//! Shared boundary types for the portfolio shell.
//!
//! This module defines the two key data contracts:
//! - Field/Effects → Canvas (in-memory): raw `Rgb` pixels
//! - Shell → View: styled transcript `Line`s made of `Span` rows

/// A concrete 24-bit color. Every color in this crate is an explicit RGB
/// swatch; there is no named-color indirection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const fn rgb(r: u8, g: u8, b: u8) -> Rgb {
    Rgb { r, g, b }
}

/// Text attributes for one transcript span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub fg: Option<Rgb>,
    pub bold: bool,
    pub dim: bool,
}

impl Style {
    pub const fn fg(color: Rgb) -> Self {
        Style {
            fg: Some(color),
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(color: Rgb) -> Self {
        Style {
            fg: Some(color),
            bold: true,
            dim: false,
        }
    }

    pub const fn dim(color: Rgb) -> Self {
        Style {
            fg: Some(color),
            bold: false,
            dim: true,
        }
    }
}

/// A run of text with one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Span {
            text: text.into(),
            style,
        }
    }
}

/// One renderable transcript payload: an ordered list of styled rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    pub rows: Vec<Vec<Span>>,
}

impl Block {
    pub fn new() -> Self {
        Block::default()
    }

    /// Builder-style: append one row of spans.
    pub fn row(mut self, spans: Vec<Span>) -> Self {
        self.rows.push(spans);
        self
    }

    /// A block of uniformly styled text, one row per `\n`-separated line.
    pub fn text(text: &str, style: Style) -> Self {
        Block {
            rows: text
                .lines()
                .map(|line| vec![Span::new(line, style)])
                .collect(),
        }
    }

    /// All row text concatenated with newlines, styles dropped.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.iter().map(|s| s.text.as_str()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Classification of a transcript line; drives its default presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Input,
    Output,
    Error,
    Success,
    Ascii,
    System,
}

impl LineKind {
    /// Default text style for plainly rendered lines of this kind.
    pub fn style(self) -> Style {
        match self {
            LineKind::Input => Style::fg(ui::CYAN),
            LineKind::Output => Style::fg(ui::TEXT),
            LineKind::Error => Style::fg(ui::RED),
            LineKind::Success => Style::fg(ui::GREEN),
            LineKind::Ascii => Style::fg(ui::CYAN),
            LineKind::System => Style::dim(ui::FAINT),
        }
    }
}

/// One appended transcript record. Ids are monotonic per session and are
/// never reused, even across a full transcript reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub id: u64,
    pub kind: LineKind,
    pub block: Block,
}

/// Interface color swatches used by transcript templates and the view.
pub mod ui {
    use super::{Rgb, rgb};

    pub const CYAN: Rgb = rgb(0x22, 0xd3, 0xee);
    pub const GREEN: Rgb = rgb(0x4a, 0xde, 0x80);
    pub const RED: Rgb = rgb(0xf8, 0x71, 0x71);
    pub const BRIGHT_RED: Rgb = rgb(0xef, 0x44, 0x44);
    pub const YELLOW: Rgb = rgb(0xfa, 0xcc, 0x15);
    pub const AMBER: Rgb = rgb(0xca, 0x8a, 0x04);
    pub const PINK: Rgb = rgb(0xec, 0x48, 0x99);
    pub const BLUE: Rgb = rgb(0x60, 0xa5, 0xfa);
    pub const TEXT: Rgb = rgb(0xd1, 0xd5, 0xdb);
    pub const MUTED: Rgb = rgb(0x9c, 0xa3, 0xaf);
    pub const FAINT: Rgb = rgb(0x6b, 0x72, 0x80);
    pub const MATRIX_GREEN: Rgb = rgb(0x00, 0xff, 0x00);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_block_splits_lines() {
        let block = Block::text("one\ntwo", Style::fg(ui::CYAN));
        assert_eq!(block.rows.len(), 2);
        assert_eq!(block.rows[1][0].text, "two");
    }

    #[test]
    fn plain_text_joins_spans_and_rows() {
        let block = Block::new()
            .row(vec![
                Span::new("a", Style::default()),
                Span::new("b", Style::default()),
            ])
            .row(vec![Span::new("c", Style::default())]);
        assert_eq!(block.plain_text(), "ab\nc");
    }
}
