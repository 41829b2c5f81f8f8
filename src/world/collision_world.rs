use std::collections::{BTreeMap, HashSet};

use crate::{
    broad_phase::{BroadPhase, Quadtree, SpatialGrid},
    collision::{CollisionResult, Sat},
    config::{CollisionConfig, SatConfig},
    error::{CollisionError, Result},
    geometry::{self, Rect},
    shapes::{Shape, ShapeId},
};

/// A registered shape together with its cached bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeEntry {
    pub shape: Shape,
    pub bounding_box: Rect,
}

impl ShapeEntry {
    fn new(shape: Shape) -> Self {
        let bounding_box = shape.bounding_box();
        Self { shape, bounding_box }
    }
}

/// Shape registry plus the per-frame broad/narrow phase pipeline.
///
/// Each frame: register or update shapes, call [`rebuild_broad_phase`], then
/// query neighbors and resolve pairs. Queries reflect the most recent rebuild
/// only; shapes changed after it are seen with stale index data.
///
/// [`rebuild_broad_phase`]: CollisionWorld::rebuild_broad_phase
pub struct CollisionWorld<B: BroadPhase = Quadtree> {
    // Keyed by id; iteration in ascending id order keeps rebuilds deterministic
    shapes: BTreeMap<ShapeId, ShapeEntry>,
    broad_phase: B,
    sat: Sat,
    has_rebuilt: bool,
}

impl CollisionWorld<Quadtree> {
    /// Creates an empty world with the default quadtree and SAT settings.
    pub fn new() -> Self {
        Self::with_config(CollisionConfig::default())
    }

    /// Creates an empty world backed by a quadtree built from `config`.
    pub fn with_config(config: CollisionConfig) -> Self {
        Self::with_broad_phase(Quadtree::new(Rect::default(), config.quadtree), config.sat)
    }
}

impl CollisionWorld<SpatialGrid> {
    /// Creates an empty world backed by a uniform grid sized from `config.grid`.
    pub fn with_grid_config(config: CollisionConfig) -> Self {
        Self::with_broad_phase(SpatialGrid::with_config(Rect::default(), config.grid), config.sat)
    }
}

impl Default for CollisionWorld<Quadtree> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: BroadPhase> CollisionWorld<B> {
    /// Creates an empty world over any broad-phase index.
    pub fn with_broad_phase(mut broad_phase: B, sat_config: SatConfig) -> Self {
        broad_phase.clear(Some(Rect::default()));
        Self {
            shapes: BTreeMap::new(),
            broad_phase,
            sat: Sat::new(sat_config),
            has_rebuilt: false,
        }
    }

    /// Registers a shape from flat coordinates, replacing any shape with the same id.
    ///
    /// `coords` is `[x0, y0, x1, y1, ...]` for polygons or `[cx, cy, r]` for circles.
    /// On failure the registry is left unchanged.
    pub fn register_or_update_shape(&mut self, id: ShapeId, coords: &[f64], is_circle: bool) -> Result<()> {
        let shape = Shape::from_flat(coords, is_circle)
            .map_err(|source| CollisionError::InvalidGeometry { id, source })?;
        self.insert_shape(id, shape);
        Ok(())
    }

    /// Registers an already-built shape, returning the one it replaced.
    pub fn insert_shape(&mut self, id: ShapeId, shape: impl Into<Shape>) -> Option<Shape> {
        let previous = self.shapes.insert(id, ShapeEntry::new(shape.into()));
        if previous.is_some() {
            log::debug!("Replaced geometry of shape {}", id);
        }
        previous.map(|entry| entry.shape)
    }

    /// Rebuilds the spatial index from every registered shape.
    ///
    /// Root bounds become the union of all bounding boxes. Does nothing when
    /// the registry is empty.
    pub fn rebuild_broad_phase(&mut self) {
        let Some(bounds) = geometry::union_of(self.shapes.values().map(|entry| &entry.bounding_box)) else {
            return;
        };

        self.broad_phase.clear(Some(bounds));
        for (id, entry) in &self.shapes {
            self.broad_phase.insert(*id, entry.bounding_box);
        }
        self.has_rebuilt = true;

        log::debug!("Rebuilt broad phase: {} shapes, bounds {:?}", self.shapes.len(), bounds);
    }

    /// Ids whose bounding boxes touch the bounding box of `id`, in ascending order.
    /// The result includes `id` itself.
    pub fn query_neighbors(&self, id: ShapeId) -> Result<Vec<ShapeId>> {
        let mut found = HashSet::new();
        self.query_neighbors_into(id, &mut found)?;
        let mut neighbors: Vec<ShapeId> = found.into_iter().collect();
        neighbors.sort_unstable();
        Ok(neighbors)
    }

    /// Like [`query_neighbors`](Self::query_neighbors) but fills a caller-owned set,
    /// clearing it first.
    pub fn query_neighbors_into(&self, id: ShapeId, out: &mut HashSet<ShapeId>) -> Result<()> {
        let entry = self.entry(id)?;
        if !self.has_rebuilt {
            log::warn!("Neighbor query for shape {} before any broad-phase rebuild", id);
        }
        out.clear();
        self.broad_phase.retrieve_into(&entry.bounding_box, out);
        Ok(())
    }

    /// Runs SAT between two registered shapes.
    pub fn resolve_collision(&self, id_a: ShapeId, id_b: ShapeId) -> Result<CollisionResult> {
        let a = self.entry(id_a)?;
        let b = self.entry(id_b)?;
        Ok(self.sat.resolve(&a.shape, &b.shape))
    }

    /// Every unordered pair `(a, b)` with `a < b` whose bounding boxes touch,
    /// according to the most recent rebuild.
    pub fn candidate_pairs(&self) -> Vec<(ShapeId, ShapeId)> {
        let mut pairs = Vec::new();
        let mut found = HashSet::new();

        for (id, entry) in &self.shapes {
            found.clear();
            self.broad_phase.retrieve_into(&entry.bounding_box, &mut found);
            let mut partners: Vec<ShapeId> = found.iter().copied().filter(|other| other > id).collect();
            partners.sort_unstable();
            pairs.extend(partners.into_iter().map(|other| (*id, other)));
        }
        pairs
    }

    /// Runs the narrow phase on every candidate pair and keeps the overlapping ones.
    pub fn collisions(&self) -> Vec<(ShapeId, ShapeId, CollisionResult)> {
        let mut result = CollisionResult::NONE;
        let mut contacts = Vec::new();

        for (id_a, id_b) in self.candidate_pairs() {
            // Both ids come from the registry, so the lookups cannot miss
            if let (Some(a), Some(b)) = (self.shapes.get(&id_a), self.shapes.get(&id_b)) {
                self.sat.resolve_into(&a.shape, &b.shape, &mut result);
                if result.is_colliding() {
                    contacts.push((id_a, id_b, result));
                }
            }
        }
        contacts
    }

    /// Removes every shape and empties the spatial index.
    pub fn reset_all(&mut self) {
        log::debug!("Resetting collision world ({} shapes)", self.shapes.len());
        self.shapes.clear();
        self.broad_phase.clear(Some(Rect::default()));
        self.has_rebuilt = false;
    }

    pub fn shape(&self, id: ShapeId) -> Result<&Shape> {
        self.entry(id).map(|entry| &entry.shape)
    }

    pub fn bounding_box(&self, id: ShapeId) -> Result<Rect> {
        self.entry(id).map(|entry| entry.bounding_box)
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.shapes.contains_key(&id)
    }

    /// Registered ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = ShapeId> + '_ {
        self.shapes.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn broad_phase(&self) -> &B {
        &self.broad_phase
    }

    pub fn sat(&self) -> &Sat {
        &self.sat
    }

    fn entry(&self, id: ShapeId) -> Result<&ShapeEntry> {
        self.shapes.get(&id).ok_or(CollisionError::ShapeNotFound(id))
    }
}
