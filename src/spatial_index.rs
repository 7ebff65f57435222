//! Spatial Index Module
//!
//! R-tree based spatial indexing for hit testing and marquee queries on the
//! page surface. Reduces point lookups from O(n) to O(log n); more
//! importantly, it keeps the rectangle-overlap policy (strict inequalities,
//! per-page filtering) in one place.

use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

use crate::geometry::{MmPoint, MmRect};
use crate::types::{DocElement, ElementId};

/// A spatial entry covering one element's bounding box on its page.
#[derive(Debug, Clone)]
pub struct SpatialEntry {
    pub id: ElementId,
    pub page: usize,
    pub bounds: MmRect,
}

impl SpatialEntry {
    pub fn new(id: ElementId, page: usize, bounds: MmRect) -> Self {
        Self { id, page, bounds }
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.bounds.min_x, self.bounds.min_y],
            [self.bounds.max_x, self.bounds.max_y],
        )
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Spatial index over document elements using an R-tree.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<ElementId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Bulk-load an index from a slice of elements.
    pub fn from_elements(elements: &[DocElement]) -> Self {
        let entries: Vec<SpatialEntry> = elements
            .iter()
            .map(|el| SpatialEntry::new(el.id.clone(), el.page, el.bounds()))
            .collect();

        let entries_map: HashMap<ElementId, SpatialEntry> = entries
            .iter()
            .map(|e| (e.id.clone(), e.clone()))
            .collect();

        Self {
            tree: RTree::bulk_load(entries),
            entries: entries_map,
        }
    }

    pub fn insert(&mut self, element: &DocElement) {
        if let Some(old) = self.entries.remove(&element.id) {
            self.tree.remove(&old);
        }

        let entry = SpatialEntry::new(element.id.clone(), element.page, element.bounds());
        self.tree.insert(entry.clone());
        self.entries.insert(element.id.clone(), entry);
    }

    pub fn remove(&mut self, id: &ElementId) -> bool {
        if let Some(entry) = self.entries.remove(id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// All elements on `page` whose bounds contain the given point.
    pub fn query_point(&self, page: usize, point: MmPoint) -> Vec<ElementId> {
        let envelope = AABB::from_point([point.x, point.y]);

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| entry.page == page && entry.bounds.contains_point(point))
            .map(|entry| entry.id.clone())
            .collect()
    }

    /// All elements on `page` strictly overlapping the rectangle.
    ///
    /// The R-tree envelope test counts touching edges as intersecting; the
    /// strict [`MmRect::intersects`] filter is what marquee selection needs.
    pub fn query_rect(&self, page: usize, rect: &MmRect) -> Vec<ElementId> {
        let envelope = AABB::from_corners([rect.min_x, rect.min_y], [rect.max_x, rect.max_y]);

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| entry.page == page && entry.bounds.intersects(rect))
            .map(|entry| entry.id.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
