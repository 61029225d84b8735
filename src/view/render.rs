//! Raster rendering of a card snapshot
//!
//! Text is optional: without a [`TextPainter`] only the cell backgrounds,
//! borders and banner are painted. Exports always pass a painter.

use crate::model::{CardSnapshot, CellSnapshot, StatusKind, FREE_LABEL};
use crate::theme::{Color, Theme};

use super::frame::{Frame, TextPainter};
use super::layout::{CardLayout, Rect, BORDER};

/// Font size of the FREE label and banner at 1×
const FREE_LABEL_PX: f32 = 14.0;
const BANNER_PX: f32 = 18.0;

/// Page color behind the grid; exported images are always white
pub const PAGE_BACKGROUND: Color = Color::rgb(0xFF, 0xFF, 0xFF);

/// Fill and border colors for a cell in its current state
pub fn cell_colors(cell: &CellSnapshot, kind: StatusKind, theme: &Theme) -> (Color, Color) {
    if cell.free {
        return (theme.free_background, theme.cell_border);
    }
    if cell.highlighted {
        match kind {
            StatusKind::Bingo => return (theme.bingo.background, theme.bingo.border),
            StatusKind::Reach => return (theme.reach.background, theme.reach.border),
            StatusKind::None => {}
        }
    }
    if cell.marked {
        (theme.marked.background, theme.marked.border)
    } else {
        (theme.cell_background, theme.cell_border)
    }
}

/// Greedy word wrap to `max_width` pixels.
///
/// Explicit newlines are kept. Words wider than a line are broken between
/// characters, which also covers scripts written without spaces.
pub fn wrap_text(
    painter: &mut TextPainter,
    text: &str,
    font_size: f32,
    max_width: f32,
) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };
            if painter.measure_width(&candidate, font_size) <= max_width {
                current = candidate;
                continue;
            }
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            // Break an overlong word across lines
            for ch in word.chars() {
                current.push(ch);
                if painter.measure_width(&current, font_size) > max_width
                    && current.chars().count() > 1
                {
                    current.pop();
                    lines.push(std::mem::take(&mut current));
                    current.push(ch);
                }
            }
        }
        lines.push(current);
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

/// Paint a whole card into `frame`
pub fn render_card(
    frame: &mut Frame,
    mut painter: Option<&mut TextPainter>,
    snapshot: &CardSnapshot,
    theme: &Theme,
    layout: &CardLayout,
) {
    frame.clear(PAGE_BACKGROUND.to_argb_u32());

    if let (Some(rect), Some(banner)) = (layout.banner, snapshot.status.banner()) {
        render_banner(
            frame,
            painter.as_deref_mut(),
            snapshot.status.kind,
            &banner,
            rect,
            theme,
            layout.scale,
        );
    }

    for cell in &snapshot.cells {
        let rect = layout.cells[cell.index];
        let (fill, border) = cell_colors(cell, snapshot.status.kind, theme);
        frame.draw_bordered_rect(
            rect,
            BORDER * layout.scale,
            fill.to_argb_u32(),
            border.to_argb_u32(),
        );

        if let Some(p) = painter.as_deref_mut() {
            render_cell_text(frame, p, cell, rect, theme, layout);
        }
    }
}

fn render_banner(
    frame: &mut Frame,
    painter: Option<&mut TextPainter>,
    kind: StatusKind,
    text: &str,
    rect: Rect,
    theme: &Theme,
    scale: f32,
) {
    let colors = match kind {
        StatusKind::Bingo => theme.bingo,
        StatusKind::Reach => theme.reach,
        StatusKind::None => return,
    };
    frame.draw_bordered_rect(
        rect,
        scale,
        colors.banner_background.to_argb_u32(),
        colors.border.to_argb_u32(),
    );

    if let Some(p) = painter {
        let size = BANNER_PX * scale;
        let width = p.measure_width(text, size);
        let (cx, cy) = rect.center();
        let x = (cx - width / 2.0).max(rect.x);
        let y = cy - p.line_height(size) / 2.0;
        p.draw(frame, x, y, text, size, colors.banner_text.to_argb_u32());
    }
}

fn render_cell_text(
    frame: &mut Frame,
    painter: &mut TextPainter,
    cell: &CellSnapshot,
    rect: Rect,
    theme: &Theme,
    layout: &CardLayout,
) {
    if cell.free {
        let size = FREE_LABEL_PX * layout.scale;
        let width = painter.measure_width(FREE_LABEL, size);
        let (cx, cy) = rect.center();
        let y = cy - painter.line_height(size) / 2.0;
        painter.draw(
            frame,
            cx - width / 2.0,
            y,
            FREE_LABEL,
            size,
            theme.free_text.to_argb_u32(),
        );
        return;
    }
    if cell.text.is_empty() {
        return;
    }

    let Some(area) = layout.text_area(cell.index) else {
        return;
    };
    let size = cell.font_size_px * layout.scale;
    let line_height = painter.line_height(size);
    let lines = wrap_text(painter, &cell.text, size, area.width);

    // Overflowing text is cut at the cell edge
    frame.set_clip(area);
    for (i, line) in lines.iter().enumerate() {
        let y = area.y + i as f32 * line_height;
        if y >= area.y + area.height {
            break;
        }
        painter.draw(frame, area.x, y, line, size, theme.cell_text.to_argb_u32());
    }
    frame.clear_clip();
}

/// Render a snapshot into a fresh ARGB buffer sized by `layout`
pub fn render_to_buffer(
    painter: Option<&mut TextPainter>,
    snapshot: &CardSnapshot,
    theme: &Theme,
    layout: &CardLayout,
) -> Vec<u32> {
    let (width, height) = (layout.width as usize, layout.height as usize);
    let mut buffer = vec![PAGE_BACKGROUND.to_argb_u32(); width * height];
    {
        let mut frame = Frame::new(&mut buffer, width, height);
        render_card(&mut frame, painter, snapshot, theme, layout);
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Card, CellIndex, Mode};

    fn snapshot_with_marks(marks: &[usize], mode: Mode) -> CardSnapshot {
        let mut card = Card::default();
        for &i in marks {
            card.toggle_mark(CellIndex::new(i).unwrap());
        }
        CardSnapshot::capture(&card, mode)
    }

    fn pixel_at_center(buffer: &[u32], layout: &CardLayout, index: usize) -> u32 {
        let (cx, cy) = layout.cells[index].center();
        buffer[cy as usize * layout.width as usize + cx as usize]
    }

    #[test]
    fn test_cell_colors_follow_state() {
        let theme = Theme::classic();
        let snap = snapshot_with_marks(&[0, 1, 2, 3, 4, 5], Mode::Play);
        assert_eq!(
            cell_colors(&snap.cells[0], snap.status.kind, &theme).0,
            theme.bingo.background
        );
        assert_eq!(
            cell_colors(&snap.cells[5], snap.status.kind, &theme).0,
            theme.marked.background
        );
        assert_eq!(
            cell_colors(&snap.cells[12], snap.status.kind, &theme).0,
            theme.free_background
        );
        assert_eq!(
            cell_colors(&snap.cells[24], snap.status.kind, &theme).0,
            theme.cell_background
        );
    }

    #[test]
    fn test_render_without_font_paints_cells() {
        let theme = Theme::classic();
        let snap = snapshot_with_marks(&[0, 1, 2, 3], Mode::Play);
        let layout = CardLayout::compute(1.0, snap.status.banner().is_some());
        let buffer = render_to_buffer(None, &snap, &theme, &layout);

        assert_eq!(buffer.len(), (layout.width * layout.height) as usize);
        assert_eq!(
            pixel_at_center(&buffer, &layout, 0),
            theme.reach.background.to_argb_u32()
        );
        assert_eq!(
            pixel_at_center(&buffer, &layout, 12),
            theme.free_background.to_argb_u32()
        );
        assert_eq!(
            pixel_at_center(&buffer, &layout, 20),
            theme.cell_background.to_argb_u32()
        );
        // top-left corner is page background
        assert_eq!(buffer[0], 0xFFFFFFFF);
    }

    #[test]
    fn test_banner_drawn_in_play_mode() {
        let theme = Theme::classic();
        let snap = snapshot_with_marks(&[0, 1, 2, 3, 4], Mode::Play);
        let layout = CardLayout::compute(1.0, true);
        let buffer = render_to_buffer(None, &snap, &theme, &layout);
        let banner = layout.banner.unwrap();
        let (cx, cy) = banner.center();
        assert_eq!(
            buffer[cy as usize * layout.width as usize + cx as usize],
            theme.bingo.banner_background.to_argb_u32()
        );
    }
}
