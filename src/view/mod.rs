//! Rendering - raster output for image export and text output for the terminal

pub mod frame;
pub mod layout;
pub mod render;
pub mod text;

pub use frame::{blend_colors, Frame, GlyphCache, TextPainter};
pub use layout::{CardLayout, Rect};
pub use render::{cell_colors, render_card, render_to_buffer, wrap_text, PAGE_BACKGROUND};
pub use text::render_table;
