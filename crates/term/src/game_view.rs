//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested. The same layout math
//! backs [`GameView::cell_at`], so mouse hit-testing always agrees with what
//! was drawn.

use crate::core::{format_time, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Category, CellMark, CellPos, Phase};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the grid frame sits on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Top-left corner of the border
    pub x: u16,
    pub y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
}

const PANEL_W: u16 = 16;
const PANEL_GAP: u16 = 3;

const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const GRID_BG: Rgb = Rgb::new(30, 30, 40);
const SELECT_BG: Rgb = Rgb::new(60, 100, 200);
const PULSE_BG: Rgb = Rgb::new(90, 210, 130);
const FOUND_BG: Rgb = Rgb::new(40, 120, 70);
const INCORRECT_BG: Rgb = Rgb::new(200, 60, 60);

const TEXT: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
const HINT: CellStyle = CellStyle::new(Rgb::new(140, 140, 150), SCREEN_BG);
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
const TITLE: CellStyle = CellStyle::new(Rgb::new(240, 200, 80), SCREEN_BG).bold();
const BANNER: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(40, 120, 70)).bold();

/// Welcome quote colours, picked per quote.
const QUOTE_COLORS: [Rgb; 6] = [
    Rgb::new(255, 107, 107),
    Rgb::new(78, 205, 196),
    Rgb::new(69, 183, 209),
    Rgb::new(150, 206, 180),
    Rgb::new(255, 190, 118),
    Rgb::new(186, 156, 255),
];

/// A lightweight terminal renderer for the word search game.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 3x1 leaves a column either side of each letter and keeps cells squarish.
        Self {
            cell_w: 3,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Position of the grid frame for a `grid_size` puzzle.
    ///
    /// The frame and side panel are centered together horizontally; one row is
    /// kept above the frame for the theme title.
    pub fn grid_layout(&self, grid_size: usize, viewport: Viewport) -> GridLayout {
        let size = grid_size as u16;
        let frame_w = size * self.cell_w + 2;
        let frame_h = size * self.cell_h + 2;
        let total_w = frame_w + PANEL_GAP + PANEL_W;

        let x = if viewport.width >= total_w {
            (viewport.width - total_w) / 2
        } else {
            viewport.width.saturating_sub(frame_w) / 2
        };
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h + 2) / 2 + 1,
            AnchorY::Top => 1,
        };

        GridLayout {
            x,
            y,
            frame_w,
            frame_h,
        }
    }

    /// Grid cell under terminal position `(x, y)`, if any.
    pub fn cell_at(&self, grid_size: usize, viewport: Viewport, x: u16, y: u16) -> Option<CellPos> {
        let layout = self.grid_layout(grid_size, viewport);
        let inner_x = x.checked_sub(layout.x + 1)?;
        let inner_y = y.checked_sub(layout.y + 1)?;
        let pos = CellPos::new(
            (inner_y / self.cell_h) as i16,
            (inner_x / self.cell_w) as i16,
        );
        pos.in_bounds(grid_size).then_some(pos)
    }

    /// Render the current snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().on(SCREEN_BG).cell(' '));

        match snap.phase {
            Phase::Welcome => self.draw_welcome(fb, snap, viewport),
            Phase::CategorySelect => self.draw_categories(fb, snap, viewport),
            Phase::Playing => self.draw_playing(fb, snap, viewport),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_welcome(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        let w = viewport.width;
        let mid = viewport.height / 2;
        let quote_style = CellStyle::new(quote_color(snap.quote), SCREEN_BG);

        fb.put_str_centered(0, mid.saturating_sub(3), w, "W O R D   S E A R C H", TITLE);
        fb.put_str_centered(0, mid.saturating_sub(1), w, snap.quote, quote_style);
        fb.put_str_centered(0, mid + 2, w, "Press Enter to start", LABEL);
        fb.put_str_centered(0, mid + 4, w, "q quit", HINT);
    }

    fn draw_categories(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        let w = viewport.width;
        let top = viewport.height.saturating_sub(9) / 2;

        fb.put_str_centered(0, top, w, "Choose a category", TITLE);

        let x = w.saturating_sub(24) / 2;
        let mut y = top + 2;
        for (i, category) in Category::ALL.iter().enumerate() {
            let selected = snap.loading && snap.category == Some(*category);
            let style = if selected { LABEL.on(SELECT_BG) } else { TEXT };
            fb.put_u32(x, y, i as u32 + 1, LABEL);
            fb.put_str(x + 3, y, category.display_name(), style);
            y += 1;
        }

        y += 1;
        if snap.loading {
            fb.put_str_centered(0, y, w, "Loading puzzle...", LABEL.dim());
        } else {
            fb.put_str_centered(0, y, w, "1-3 choose   b back   q quit", HINT);
        }
    }

    fn draw_playing(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        let layout = self.grid_layout(snap.grid_size, viewport);

        if let Some(theme) = snap.theme {
            let x = fb.put_str(layout.x, layout.y.saturating_sub(1), "Theme: ", HINT);
            fb.put_str(x, layout.y.saturating_sub(1), theme, TITLE);
        }

        fb.fill_rect(
            layout.x + 1,
            layout.y + 1,
            layout.frame_w - 2,
            layout.frame_h - 2,
            ' ',
            TEXT.on(GRID_BG),
        );
        self.draw_border(fb, layout.x, layout.y, layout.frame_w, layout.frame_h, BORDER);

        if snap.has_puzzle() {
            for row in 0..snap.grid_size as i16 {
                for col in 0..snap.grid_size as i16 {
                    self.draw_letter(fb, snap, &layout, CellPos::new(row, col));
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, &layout);

        let hint_y = layout.y + layout.frame_h;
        if hint_y < viewport.height {
            fb.put_str(
                layout.x,
                hint_y,
                "drag/space select  n new  b back  q quit",
                HINT,
            );
        }

        if snap.loading {
            self.draw_overlay_text(fb, &layout, "LOADING...", LABEL.on(GRID_BG));
        } else if snap.complete {
            self.draw_overlay_text(fb, &layout, " PUZZLE SOLVED ", BANNER);
        }
    }

    fn draw_letter(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &GridLayout, pos: CellPos) {
        let Some(letter) = snap.letter_at(pos) else {
            return;
        };

        let base = CellStyle::new(Rgb::new(230, 230, 230), GRID_BG);
        let style = match snap.mark_at(pos) {
            Some(CellMark::Incorrect) => base.on(INCORRECT_BG).bold(),
            Some(CellMark::FoundPulse) => base.on(PULSE_BG).bold(),
            _ if snap.is_selected(pos) => base.on(SELECT_BG).bold(),
            Some(CellMark::Found) => base.on(FOUND_BG),
            None => base,
        };

        let px = layout.x + 1 + pos.col as u16 * self.cell_w;
        let py = layout.y + 1 + pos.row as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(
            px + self.cell_w / 2,
            py + self.cell_h / 2,
            letter as char,
            style,
        );

        if snap.cursor == Some(pos) && self.cell_w >= 3 {
            let cursor = style.bold();
            fb.put_char(px, py + self.cell_h / 2, '[', cursor);
            fb.put_char(px + self.cell_w - 1, py + self.cell_h / 2, ']', cursor);
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        layout: &GridLayout,
    ) {
        let panel_x = layout.x.saturating_add(layout.frame_w).saturating_add(PANEL_GAP);
        if panel_x.saturating_add(PANEL_W) > viewport.width {
            return;
        }

        let mut y = layout.y;
        fb.put_str(panel_x, y, "LEVEL", LABEL);
        fb.put_u32(panel_x + 7, y, snap.level, TEXT);
        y += 1;
        fb.put_str(panel_x, y, "SCORE", LABEL);
        fb.put_u32(panel_x + 7, y, snap.score, TEXT);
        y += 1;
        fb.put_str(panel_x, y, "TIME", LABEL);
        fb.put_str(panel_x + 7, y, &format_time(snap.elapsed_secs), TEXT);
        y += 2;

        fb.put_str(panel_x, y, "WORDS", LABEL);
        let x = fb.put_u32(panel_x + 7, y, snap.found_count() as u32, TEXT);
        let x = fb.put_str(x, y, "/", TEXT);
        fb.put_u32(x, y, snap.words.len() as u32, TEXT);
        y += 1;

        for word in &snap.words {
            if y >= viewport.height {
                break;
            }
            let style = if word.found {
                TEXT.on(SCREEN_BG).crossed().dim()
            } else {
                TEXT
            };
            fb.put_str(panel_x + 1, y, &word.word, style);
            y += 1;
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, layout: &GridLayout, text: &str, style: CellStyle) {
        let mid_y = layout.y.saturating_add(layout.frame_h / 2);
        fb.put_str_centered(layout.x, mid_y, layout.frame_w, text, style);
    }
}

fn quote_color(quote: &str) -> Rgb {
    let hash = quote
        .bytes()
        .fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize));
    QUOTE_COLORS[hash % QUOTE_COLORS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_centers_frame_and_panel() {
        let view = GameView::default();
        // 8 cells * 3 + 2 = 26 wide, 8 + 2 = 10 tall; with panel 26 + 3 + 16 = 45
        let layout = view.grid_layout(8, Viewport::new(65, 22));
        assert_eq!(layout.frame_w, 26);
        assert_eq!(layout.frame_h, 10);
        assert_eq!(layout.x, 10);
        assert_eq!(layout.y, 6);
    }

    #[test]
    fn cell_at_matches_layout() {
        let view = GameView::default();
        let vp = Viewport::new(65, 22);
        let layout = view.grid_layout(8, vp);

        // Border itself is not a cell
        assert_eq!(view.cell_at(8, vp, layout.x, layout.y + 1), None);
        // First cell spans three columns
        for dx in 1..=3 {
            assert_eq!(
                view.cell_at(8, vp, layout.x + dx, layout.y + 1),
                Some(CellPos::new(0, 0))
            );
        }
        assert_eq!(
            view.cell_at(8, vp, layout.x + 4, layout.y + 2),
            Some(CellPos::new(1, 1))
        );
        assert_eq!(
            view.cell_at(8, vp, layout.x + 24, layout.y + 8),
            Some(CellPos::new(7, 7))
        );
        assert_eq!(view.cell_at(8, vp, layout.x + 25, layout.y + 8), None);
        assert_eq!(view.cell_at(8, vp, 0, 0), None);
    }

    #[test]
    fn quote_color_is_stable() {
        assert_eq!(quote_color("abc"), quote_color("abc"));
    }
}
