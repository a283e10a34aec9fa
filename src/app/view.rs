//! Frame presentation: canvas blit, transcript overlay, prompt, title bar,
//! and the full-screen matrix overlay.
//!
//! Everything is painted back-to-front into one queued batch and flushed
//! once per frame. The writer is generic so frames can render into a buffer
//! under test.

use std::io::Write;

use anyhow::Result;
use crossterm::{cursor, queue, style};

use crate::canvas::Canvas;
use crate::effects::Overlay;
use crate::field::palette::BACKGROUND;
use crate::shell::Session;
use crate::types::{Rgb, Style, ui};

const PROMPT: &str = "❯ ";
const CAPTION: &str = "WAKE UP, NEO...";

pub fn render<W: Write>(
    out: &mut W,
    canvas: &Canvas,
    session: &Session,
    matrix: Option<&Overlay>,
    processing: bool,
    cols: u16,
    rows: u16,
) -> Result<()> {
    if cols == 0 || rows == 0 {
        return Ok(());
    }

    if let Some(overlay) = matrix {
        render_matrix(out, overlay, cols, rows)?;
        out.flush()?;
        return Ok(());
    }

    blit_canvas(out, canvas, cols, rows)?;
    render_title(out, cols)?;
    render_transcript(out, session, cols, rows)?;
    render_prompt(out, session, processing, cols, rows)?;
    out.flush()?;
    Ok(())
}

fn to_ct(color: Rgb) -> style::Color {
    style::Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

fn content_style(s: Style) -> style::ContentStyle {
    let mut cs = style::ContentStyle::default();
    cs.foreground_color = Some(to_ct(s.fg.unwrap_or(ui::TEXT)));
    cs.background_color = Some(to_ct(BACKGROUND));
    if s.bold {
        cs.attributes.set(style::Attribute::Bold);
    }
    if s.dim {
        cs.attributes.set(style::Attribute::Dim);
    }
    cs
}

/// Paint the pixel canvas with upper-half blocks: one terminal cell carries
/// two vertically stacked pixels (fg = top, bg = bottom).
fn blit_canvas<W: Write>(out: &mut W, canvas: &Canvas, cols: u16, rows: u16) -> Result<()> {
    for row in 0..rows {
        queue!(out, cursor::MoveTo(0, row))?;
        let mut last: Option<(Rgb, Rgb)> = None;
        for col in 0..cols {
            let pair = canvas.cell(col, row);
            if last != Some(pair) {
                queue!(
                    out,
                    style::SetForegroundColor(to_ct(pair.0)),
                    style::SetBackgroundColor(to_ct(pair.1)),
                )?;
                last = Some(pair);
            }
            queue!(out, style::Print('▀'))?;
        }
    }
    queue!(out, style::ResetColor)?;
    Ok(())
}

fn render_title<W: Write>(out: &mut W, cols: u16) -> Result<()> {
    queue!(out, cursor::MoveTo(0, 0))?;
    let host = " ghost@shell:~ ";
    queue!(
        out,
        style::PrintStyledContent(style::StyledContent::new(
            content_style(Style::bold(ui::CYAN)),
            host.to_string(),
        )),
    )?;

    let mut used = host.chars().count();
    for item in ["[Tab] complete", "[↑][↓] history", "[Ctrl-q] quit"] {
        let width = item.chars().count() + 2;
        if used + width > cols as usize {
            break;
        }
        queue!(out, style::Print("  "))?;
        print_hint(out, item)?;
        used += width;
    }
    Ok(())
}

/// Print a hint string, bolding any text inside `[...]` brackets. Text
/// outside brackets is printed dim.
fn print_hint<W: Write>(out: &mut W, item: &str) -> Result<()> {
    let bracketed = content_style(Style::bold(ui::TEXT));
    let plain = content_style(Style::dim(ui::FAINT));
    let mut rest = item;
    while !rest.is_empty() {
        if let Some(open) = rest.find('[') {
            if open > 0 {
                queue!(
                    out,
                    style::PrintStyledContent(style::StyledContent::new(
                        plain,
                        rest[..open].to_string(),
                    )),
                )?;
            }
            rest = &rest[open..];
            if let Some(close) = rest.find(']') {
                queue!(
                    out,
                    style::PrintStyledContent(style::StyledContent::new(
                        bracketed,
                        rest[..=close].to_string(),
                    )),
                )?;
                rest = &rest[close + 1..];
            } else {
                queue!(out, style::Print(rest.to_string()))?;
                break;
            }
        } else {
            queue!(
                out,
                style::PrintStyledContent(style::StyledContent::new(plain, rest.to_string())),
            )?;
            break;
        }
    }
    Ok(())
}

/// Bottom-anchored transcript between the title bar and the prompt row.
fn render_transcript<W: Write>(
    out: &mut W,
    session: &Session,
    cols: u16,
    rows: u16,
) -> Result<()> {
    let avail = rows.saturating_sub(2) as usize;
    if avail == 0 {
        return Ok(());
    }

    let flat: Vec<&[crate::types::Span]> = session
        .lines()
        .iter()
        .flat_map(|line| line.block.rows.iter().map(|row| row.as_slice()))
        .collect();
    let skip = flat.len().saturating_sub(avail);

    for (i, spans) in flat[skip..].iter().enumerate() {
        queue!(out, cursor::MoveTo(1, 1 + i as u16))?;
        let mut remaining = cols.saturating_sub(2) as usize;
        for span in *spans {
            if remaining == 0 {
                break;
            }
            let text: String = span.text.chars().take(remaining).collect();
            remaining -= text.chars().count();
            queue!(
                out,
                style::PrintStyledContent(style::StyledContent::new(
                    content_style(span.style),
                    text,
                )),
            )?;
        }
    }
    Ok(())
}

fn render_prompt<W: Write>(
    out: &mut W,
    session: &Session,
    processing: bool,
    cols: u16,
    rows: u16,
) -> Result<()> {
    queue!(out, cursor::MoveTo(1, rows - 1))?;
    queue!(
        out,
        style::PrintStyledContent(style::StyledContent::new(
            content_style(Style::fg(ui::GREEN)),
            PROMPT.to_string(),
        )),
    )?;

    let avail = cols.saturating_sub(5) as usize;
    let input: String = session.input().chars().take(avail).collect();
    queue!(
        out,
        style::PrintStyledContent(style::StyledContent::new(
            content_style(Style::fg(ui::TEXT)),
            input,
        )),
    )?;

    // Block cursor; hidden while a submission is processing, since input is
    // ignored until it resolves.
    if !processing {
        queue!(
            out,
            style::PrintStyledContent(style::StyledContent::new(
                content_style(Style::fg(ui::CYAN)),
                "▌".to_string(),
            )),
        )?;
    }
    Ok(())
}

/// Full-screen matrix overlay: black field, rain glyphs shaded by
/// brightness, centered caption.
fn render_matrix<W: Write>(out: &mut W, overlay: &Overlay, cols: u16, rows: u16) -> Result<()> {
    let blank = " ".repeat(cols as usize);
    queue!(
        out,
        style::SetBackgroundColor(style::Color::Rgb { r: 0, g: 0, b: 0 }),
    )?;
    for row in 0..rows {
        queue!(out, cursor::MoveTo(0, row), style::Print(blank.clone()))?;
    }

    for cell in overlay.rain().cells() {
        if cell.col >= cols || cell.row >= rows {
            continue;
        }
        let g = 55.0 + 200.0 * cell.brightness;
        queue!(
            out,
            cursor::MoveTo(cell.col, cell.row),
            style::SetForegroundColor(style::Color::Rgb {
                r: 0,
                g: g as u8,
                b: 0,
            }),
            style::Print(cell.glyph),
        )?;
    }

    let x = (cols as usize).saturating_sub(CAPTION.len()) / 2;
    queue!(
        out,
        cursor::MoveTo(x as u16, rows / 2),
        style::SetForegroundColor(to_ct(ui::MATRIX_GREEN)),
        style::SetAttribute(style::Attribute::Bold),
        style::Print(CAPTION),
        style::SetAttribute(style::Attribute::Reset),
        style::ResetColor,
    )?;
    Ok(())
}
