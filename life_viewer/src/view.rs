// view.rs - Pan/zoom state and screen <-> grid coordinate mapping

use egui::{Pos2, Rect, Vec2, pos2, vec2};

pub const CELL_WIDTH_BASE: f32 = 15.0;
pub const MAX_ZOOM: f32 = 2.0;
pub const MIN_ZOOM: f32 = 0.05;
pub const ZOOM_STEP: f32 = 0.01;
pub const MOVEMENT_STEP: f32 = 5.0;

/// Column and row of a linear cell index.
pub fn index_to_cell(index: usize, width: usize) -> (usize, usize) {
    (index % width, index / width)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct View {
    /// Grid origin relative to the canvas' top-left corner
    pub offset: Vec2,
    pub zoom: f32,
    base_cell: f32,
}

impl Default for View {
    fn default() -> Self {
        Self::new(CELL_WIDTH_BASE)
    }
}

impl View {
    pub fn new(base_cell: f32) -> Self {
        Self {
            offset: Vec2::ZERO,
            zoom: 1.0,
            base_cell,
        }
    }

    /// On-screen side of one cell
    pub fn cell_size(&self) -> f32 {
        self.base_cell * self.zoom
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - ZOOM_STEP);
    }

    /// Zooms by `delta` keeping the grid point under `anchor` in place.
    ///
    /// `anchor` is relative to the canvas' top-left corner.
    pub fn zoom_at(&mut self, anchor: Vec2, delta: f32) {
        let before = self.cell_size();
        self.set_zoom(self.zoom + delta);
        let after = self.cell_size();
        let grid_point = (anchor - self.offset) / before;
        self.offset = anchor - grid_point * after;
    }

    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Places the grid in the middle of a canvas of the given size.
    pub fn center(&mut self, canvas: Vec2, width: usize) {
        let extent = self.cell_size() * width as f32;
        self.offset = (canvas - Vec2::splat(extent)) / 2.0;
    }

    /// Screen position of the grid's top-left corner.
    pub fn origin(&self, canvas: Rect) -> Pos2 {
        canvas.min + self.offset
    }

    /// Cell index under `pos`, or `None` when `pos` is left or right of the grid.
    ///
    /// Rows above or below the grid still produce an index (negative or past
    /// the end); the grid itself rejects those. Columns cannot be passed
    /// through that way since they would wrap onto a neighboring row.
    pub fn screen_to_index(&self, pos: Pos2, origin: Pos2, width: usize) -> Option<i64> {
        let cell = self.cell_size();
        let col = ((pos.x - origin.x) / cell).floor() as i64;
        let row = ((pos.y - origin.y) / cell).floor() as i64;
        let width = width as i64;
        if col < 0 || col >= width {
            return None;
        }
        row.checked_mul(width).and_then(|r| r.checked_add(col))
    }

    pub fn cell_rect(&self, index: usize, width: usize, origin: Pos2) -> Rect {
        let (col, row) = index_to_cell(index, width);
        let cell = self.cell_size();
        Rect::from_min_size(
            pos2(origin.x + col as f32 * cell, origin.y + row as f32 * cell),
            vec2(cell, cell),
        )
    }

    /// Screen rect covered by the whole grid.
    pub fn grid_rect(&self, width: usize, origin: Pos2) -> Rect {
        Rect::from_min_size(origin, Vec2::splat(self.cell_size() * width as f32))
    }

    /// Inclusive range of columns (or rows) intersecting `[from, to]` on one axis.
    pub fn visible_span(&self, from: f32, to: f32, origin: f32, width: usize) -> Option<(usize, usize)> {
        let cell = self.cell_size();
        let first = ((from - origin) / cell).floor();
        let last = ((to - origin) / cell).ceil();
        if last < 0.0 || first > width as f32 {
            return None;
        }
        Some((first.max(0.0) as usize, (last as usize).min(width)))
    }
}
