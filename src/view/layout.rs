//! Card geometry: where the banner and each of the 25 cells are drawn
//!
//! All sizes are given at 1× and multiplied by the render scale.

use crate::model::{CELL_COUNT, GRID_SIZE};

/// Outer margin around the grid
pub const MARGIN: f32 = 16.0;
/// Grid width (5 cells + 4 gaps)
pub const GRID_WIDTH: f32 = 448.0;
/// Grid height (5 cells + 4 gaps)
pub const GRID_HEIGHT: f32 = 320.0;
/// Space between cells
pub const CELL_GAP: f32 = 8.0;
/// Cell border thickness
pub const BORDER: f32 = 2.0;
/// Text inset from the cell border
pub const CELL_PADDING: f32 = 6.0;
/// Height of the BINGO / REACH banner
pub const BANNER_HEIGHT: f32 = 40.0;
/// Space between banner and grid
pub const BANNER_GAP: f32 = 12.0;

/// Axis-aligned rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Shrink by `amount` on every side (never below zero size)
    pub fn inset(&self, amount: f32) -> Self {
        Self {
            x: self.x + amount,
            y: self.y + amount,
            width: (self.width - 2.0 * amount).max(0.0),
            height: (self.height - 2.0 * amount).max(0.0),
        }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Pixel layout of a rendered card
#[derive(Debug, Clone, PartialEq)]
pub struct CardLayout {
    pub scale: f32,
    pub width: u32,
    pub height: u32,
    pub banner: Option<Rect>,
    pub cells: [Rect; CELL_COUNT],
}

impl CardLayout {
    /// Lay out a card at `scale`, reserving banner space when `with_banner`
    pub fn compute(scale: f32, with_banner: bool) -> Self {
        let s = scale.max(0.1);
        let margin = MARGIN * s;

        let banner =
            with_banner.then(|| Rect::new(margin, margin, GRID_WIDTH * s, BANNER_HEIGHT * s));
        let grid_top = match banner {
            Some(b) => b.y + b.height + BANNER_GAP * s,
            None => margin,
        };

        let gap = CELL_GAP * s;
        let gaps = (GRID_SIZE - 1) as f32 * gap;
        let cell_w = (GRID_WIDTH * s - gaps) / GRID_SIZE as f32;
        let cell_h = (GRID_HEIGHT * s - gaps) / GRID_SIZE as f32;

        let cells = std::array::from_fn(|i| {
            let row = (i / GRID_SIZE) as f32;
            let col = (i % GRID_SIZE) as f32;
            Rect::new(
                margin + col * (cell_w + gap),
                grid_top + row * (cell_h + gap),
                cell_w,
                cell_h,
            )
        });

        let width = (GRID_WIDTH * s + 2.0 * margin).ceil() as u32;
        let height = (grid_top + GRID_HEIGHT * s + margin).ceil() as u32;

        Self {
            scale: s,
            width,
            height,
            banner,
            cells,
        }
    }

    /// Area available for text inside a cell
    pub fn text_area(&self, index: usize) -> Option<Rect> {
        self.cells
            .get(index)
            .map(|r| r.inset((BORDER + CELL_PADDING) * self.scale))
    }
}
