// Uniform spatial grid, an alternative broad phase for evenly sized shapes

use std::collections::{HashMap, HashSet};

use crate::config::GridConfig;
use crate::geometry::Rect;
use crate::math::vec2::Vec2;
use crate::shapes::ShapeId;
use super::BroadPhase;

/// Cap on columns and rows; larger bounds get proportionally larger cells.
const MAX_CELLS_PER_AXIS: usize = 1024;

/// Represents a cell in the spatial grid.
#[derive(Debug, Default, Clone)]
struct GridCell {
    entries: HashMap<ShapeId, Rect>,
}

/// A uniform spatial grid for accelerating collision detection.
#[derive(Debug, Clone)]
pub struct SpatialGrid {
    bounds: Rect,          // The overall area covered by the grid
    cell_size: f64,        // Requested cell size
    inv_cell_size: f64,    // 1.0 / effective cell size, cached for performance
    num_cols: usize,
    num_rows: usize,
    cells: Vec<GridCell>,  // Flattened 1D vector representing the 2D grid
}

impl SpatialGrid {
    /// Creates a new SpatialGrid.
    ///
    /// # Arguments
    /// * `bounds` - The rect defining the world area the grid should cover.
    /// * `cell_size` - The desired size (width/height) for each grid cell; must be positive.
    pub fn new(bounds: Rect, cell_size: f64) -> Self {
        let cell_size = if cell_size.is_finite() && cell_size > 0.0 {
            cell_size
        } else {
            let fallback = GridConfig::default().cell_size;
            log::warn!("Invalid grid cell size {}, using {}", cell_size, fallback);
            fallback
        };
        let mut grid = SpatialGrid {
            bounds,
            cell_size,
            inv_cell_size: 1.0,
            num_cols: 1,
            num_rows: 1,
            cells: Vec::new(),
        };
        grid.resize(bounds);
        grid
    }

    /// Creates a grid covering `bounds` with the cell size from `config`.
    pub fn with_config(bounds: Rect, config: GridConfig) -> Self {
        Self::new(bounds, config.cell_size)
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Recomputes grid dimensions for new bounds and empties every cell.
    fn resize(&mut self, bounds: Rect) {
        self.bounds = bounds;

        let longest_side = bounds.width.max(bounds.height);
        let effective_cell_size = self.cell_size.max(longest_side / MAX_CELLS_PER_AXIS as f64);
        self.inv_cell_size = 1.0 / effective_cell_size;

        // Calculate grid dimensions, ensuring at least one cell
        self.num_cols = (bounds.width / effective_cell_size).ceil().clamp(1.0, MAX_CELLS_PER_AXIS as f64) as usize;
        self.num_rows = (bounds.height / effective_cell_size).ceil().clamp(1.0, MAX_CELLS_PER_AXIS as f64) as usize;

        let total_cells = self.num_cols * self.num_rows;
        log::debug!(
            "Resizing SpatialGrid: bounds={:?}, cell_size={}, dims={}x{}",
            bounds,
            effective_cell_size,
            self.num_cols,
            self.num_rows
        );

        self.cells.clear();
        self.cells.resize(total_cells, GridCell::default());
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.num_cols, self.num_rows)
    }

    /// Converts world coordinates to grid cell indices (col, row), clamped to the grid.
    #[inline]
    fn get_cell_indices(&self, point: Vec2) -> (usize, usize) {
        let local_x = point.x - self.bounds.x;
        let local_y = point.y - self.bounds.y;
        let col = (local_x * self.inv_cell_size).floor().max(0.0) as usize;
        let row = (local_y * self.inv_cell_size).floor().max(0.0) as usize;
        (col.min(self.num_cols - 1), row.min(self.num_rows - 1))
    }

    /// Determines the range of grid cells overlapped by a rect.
    fn get_cell_range(&self, rect: &Rect) -> (usize, usize, usize, usize) {
        let (min_col, min_row) = self.get_cell_indices(rect.min());
        let (max_col, max_row) = self.get_cell_indices(rect.max());
        (min_col, min_row, max_col, max_row)
    }
}

impl BroadPhase for SpatialGrid {
    fn clear(&mut self, bounds: Option<Rect>) {
        match bounds {
            Some(bounds) => self.resize(bounds),
            None => {
                for cell in self.cells.iter_mut() {
                    cell.entries.clear();
                }
            }
        }
    }

    /// Adds the rect to every cell it overlaps. Rects are clamped to the grid
    /// area, so an entry outside the bounds is dropped.
    fn insert(&mut self, id: ShapeId, rect: Rect) {
        if !self.bounds.intersects(&rect) {
            log::warn!("Dropping shape {} with bounds {:?} outside grid bounds {:?}", id, rect, self.bounds);
            return;
        }

        let (min_col, min_row, max_col, max_row) = self.get_cell_range(&rect);
        for row in min_row..=max_row {
            for col in min_col..=max_col {
                self.cells[col + row * self.num_cols].entries.insert(id, rect);
            }
        }
    }

    fn retrieve_into(&self, rect: &Rect, out: &mut HashSet<ShapeId>) {
        if !self.bounds.intersects(rect) {
            return;
        }

        let (min_col, min_row, max_col, max_row) = self.get_cell_range(rect);
        for row in min_row..=max_row {
            for col in min_col..=max_col {
                for (id, stored) in &self.cells[col + row * self.num_cols].entries {
                    if stored.intersects(rect) {
                        out.insert(*id);
                    }
                }
            }
        }
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
