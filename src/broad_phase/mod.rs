pub mod quadtree;
pub mod spatial_grid;

pub use quadtree::Quadtree;
pub use spatial_grid::SpatialGrid;

use std::collections::HashSet;

use crate::geometry::Rect;
use crate::shapes::ShapeId;

/// Spatial index over shape bounding boxes, rebuilt in bulk every frame.
///
/// Implementations must never miss a stored rect that intersects a query rect
/// lying within the current bounds; extra candidates are allowed.
pub trait BroadPhase {
    /// Drops every entry. Replaces the indexed region when `bounds` is given.
    fn clear(&mut self, bounds: Option<Rect>);

    /// Stores `rect` under `id`. Rects that miss the indexed region are dropped.
    fn insert(&mut self, id: ShapeId, rect: Rect);

    /// Adds the ids of every stored rect intersecting `rect` to `out`.
    /// `out` is not cleared first.
    fn retrieve_into(&self, rect: &Rect, out: &mut HashSet<ShapeId>);

    /// Ids of every stored rect intersecting `rect`, deduplicated.
    fn retrieve(&self, rect: &Rect) -> HashSet<ShapeId> {
        let mut out = HashSet::new();
        self.retrieve_into(rect, &mut out);
        out
    }

    /// The region currently indexed.
    fn bounds(&self) -> Rect;
}
