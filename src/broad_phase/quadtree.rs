// Adaptive region quadtree for broad-phase candidate search

use std::collections::{HashMap, HashSet};

use crate::config::QuadtreeConfig;
use crate::geometry::Rect;
use crate::shapes::ShapeId;
use super::BroadPhase;

/// Rects stored in a leaf, keyed by shape id.
pub type LeafEntries = HashMap<ShapeId, Rect>;

/// Storage of a quadtree node: a leaf holding entries, or exactly four children.
#[derive(Debug, Clone)]
pub enum NodeContent {
    Leaf(LeafEntries),
    Internal(Box<[QuadNode; 4]>),
}

/// A node covering `bounds` at `depth` (root is 0).
#[derive(Debug, Clone)]
pub struct QuadNode {
    bounds: Rect,
    depth: u32,
    content: NodeContent,
}

impl QuadNode {
    fn new(bounds: Rect, depth: u32) -> Self {
        Self {
            bounds,
            depth,
            content: NodeContent::Leaf(LeafEntries::new()),
        }
    }

    pub fn bounds(&self) -> &Rect {
        &self.bounds
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn content(&self) -> &NodeContent {
        &self.content
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.content, NodeContent::Leaf(_))
    }

    fn insert(&mut self, id: ShapeId, rect: Rect, config: &QuadtreeConfig) {
        let should_split = match &mut self.content {
            NodeContent::Leaf(entries) => {
                // Ids are unique within a leaf; re-inserting replaces the rect
                if let Some(stored) = entries.get_mut(&id) {
                    *stored = rect;
                    return;
                }
                if entries.len() < config.max_rects_per_leaf || self.depth >= config.max_depth {
                    entries.insert(id, rect);
                    return;
                }
                true
            }
            NodeContent::Internal(_) => false,
        };

        if should_split {
            self.subdivide(config);
        }

        if let NodeContent::Internal(children) = &mut self.content {
            for child in children.iter_mut() {
                if child.bounds.intersects(&rect) {
                    child.insert(id, rect, config);
                }
            }
        }
    }

    /// Splits a leaf into NW/NE/SW/SE children and moves its entries into every
    /// child they touch. The node only turns internal once redistribution is done.
    fn subdivide(&mut self, config: &QuadtreeConfig) {
        let entries = match &mut self.content {
            NodeContent::Leaf(entries) => std::mem::take(entries),
            NodeContent::Internal(_) => return,
        };

        let depth = self.depth + 1;
        let [nw, ne, sw, se] = self.bounds.quadrants();
        let mut children = Box::new([
            QuadNode::new(nw, depth),
            QuadNode::new(ne, depth),
            QuadNode::new(sw, depth),
            QuadNode::new(se, depth),
        ]);

        log::trace!(
            "Subdividing quadtree node at depth {} ({:?}), redistributing {} entries",
            self.depth,
            self.bounds,
            entries.len()
        );

        for (id, rect) in entries {
            for child in children.iter_mut() {
                if child.bounds.intersects(&rect) {
                    child.insert(id, rect, config);
                }
            }
        }

        self.content = NodeContent::Internal(children);
    }

    fn retrieve_into(&self, rect: &Rect, out: &mut HashSet<ShapeId>) {
        match &self.content {
            NodeContent::Leaf(entries) => {
                for (id, stored) in entries {
                    if stored.intersects(rect) {
                        out.insert(*id);
                    }
                }
            }
            NodeContent::Internal(children) => {
                for child in children.iter() {
                    if child.bounds.intersects(rect) {
                        child.retrieve_into(rect, out);
                    }
                }
            }
        }
    }

    fn visit_leaves<F>(&self, visitor: &mut F)
    where
        F: FnMut(&QuadNode, &LeafEntries),
    {
        match &self.content {
            NodeContent::Leaf(entries) => visitor(self, entries),
            NodeContent::Internal(children) => {
                for child in children.iter() {
                    child.visit_leaves(visitor);
                }
            }
        }
    }

    fn node_count(&self) -> usize {
        match &self.content {
            NodeContent::Leaf(_) => 1,
            NodeContent::Internal(children) => 1 + children.iter().map(QuadNode::node_count).sum::<usize>(),
        }
    }
}

/// Adaptive quadtree over shape bounding boxes.
///
/// A leaf splits into four equal quadrants when an insert would push it past
/// `max_rects_per_leaf`, unless it already sits at `max_depth`. Rects that
/// straddle quadrant boundaries are replicated into every child they touch.
#[derive(Debug, Clone)]
pub struct Quadtree {
    root: QuadNode,
    config: QuadtreeConfig,
}

impl Quadtree {
    /// Creates an empty quadtree covering `bounds`.
    ///
    /// A `max_rects_per_leaf` of zero would split on every insert, so it is
    /// raised to one.
    pub fn new(bounds: Rect, mut config: QuadtreeConfig) -> Self {
        if config.max_rects_per_leaf == 0 {
            log::warn!("Quadtree max_rects_per_leaf must be positive, using 1");
            config.max_rects_per_leaf = 1;
        }
        Self {
            root: QuadNode::new(bounds, 0),
            config,
        }
    }

    pub fn config(&self) -> &QuadtreeConfig {
        &self.config
    }

    pub fn root(&self) -> &QuadNode {
        &self.root
    }

    /// Calls `visitor` with every leaf node and its entries, depth-first in NW/NE/SW/SE order.
    pub fn visit_leaves<F>(&self, mut visitor: F)
    where
        F: FnMut(&QuadNode, &LeafEntries),
    {
        self.root.visit_leaves(&mut visitor);
    }

    /// Number of stored entries, counting every replica.
    pub fn len(&self) -> usize {
        let mut total = 0;
        self.visit_leaves(|_, entries| total += entries.len());
        total
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn leaf_count(&self) -> usize {
        let mut leaves = 0;
        self.visit_leaves(|_, _| leaves += 1);
        leaves
    }

    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Depth of the deepest leaf.
    pub fn depth(&self) -> u32 {
        let mut deepest = 0;
        self.visit_leaves(|node, _| deepest = deepest.max(node.depth));
        deepest
    }
}

impl Default for Quadtree {
    fn default() -> Self {
        Self::new(Rect::default(), QuadtreeConfig::default())
    }
}

impl BroadPhase for Quadtree {
    fn clear(&mut self, bounds: Option<Rect>) {
        let bounds = bounds.unwrap_or(self.root.bounds);
        self.root = QuadNode::new(bounds, 0);
    }

    fn insert(&mut self, id: ShapeId, rect: Rect) {
        if !self.root.bounds.intersects(&rect) {
            log::warn!(
                "Dropping shape {} with bounds {:?} outside quadtree bounds {:?}",
                id,
                rect,
                self.root.bounds
            );
            return;
        }
        self.root.insert(id, rect, &self.config);
    }

    fn retrieve_into(&self, rect: &Rect, out: &mut HashSet<ShapeId>) {
        if self.root.bounds.intersects(rect) {
            self.root.retrieve_into(rect, out);
        }
    }

    fn bounds(&self) -> Rect {
        self.root.bounds
    }
}
