//! Layer model: the ordered stack of vector layers drawn over the map.
//!
//! Layers are stored bottom-to-top. Adding a layer always places it on top,
//! which is what a freshly loaded layer would do in any retained-mode map.
//! Callers that need a kind to stay beneath another (parking lots under city
//! boundaries) reapply [`LayerStack::send_to_back`] after each insertion.
//!
//! A kind can be hidden without removing its layers: hidden layers stay in
//! the stack (and keep their order) but are skipped when drawing.

#[cfg(test)]
#[path = "layers_test.rs"]
mod layers_test;

use crate::geo::FeatureCollection;

/// Unique identifier for a layer within one stack.
pub type LayerId = u64;

/// What a layer holds, which also decides how it is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    /// City boundary outlines. Clickable.
    Boundaries,
    /// Per-city parking lot polygons, loaded lazily.
    Detail,
}

/// One layer of features.
#[derive(Debug, Clone)]
pub struct Layer {
    pub id: LayerId,
    pub kind: LayerKind,
    pub data: FeatureCollection,
}

/// Bottom-to-top stack of layers.
#[derive(Debug, Default)]
pub struct LayerStack {
    layers: Vec<Layer>,
    next_id: LayerId,
    hidden: Vec<LayerKind>,
}

impl LayerStack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a layer on top of the stack and return its id.
    pub fn add(&mut self, kind: LayerKind, data: FeatureCollection) -> LayerId {
        let id = self.next_id;
        self.next_id += 1;
        self.layers.push(Layer { id, kind, data });
        id
    }

    /// Return a reference to a layer by id.
    #[must_use]
    pub fn get(&self, id: LayerId) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.id == id)
    }

    /// Remove a layer by id, returning it if it was present.
    pub fn remove(&mut self, id: LayerId) -> Option<Layer> {
        let index = self.layers.iter().position(|layer| layer.id == id)?;
        Some(self.layers.remove(index))
    }

    /// Move every layer of `kind` below all other layers, keeping the
    /// relative order within each group.
    pub fn send_to_back(&mut self, kind: LayerKind) {
        let (mut back, front): (Vec<_>, Vec<_>) = self.layers.drain(..).partition(|layer| layer.kind == kind);
        back.extend(front);
        self.layers = back;
    }

    /// Layers in draw order (bottom first).
    pub fn iter(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter()
    }

    /// Layers of one kind in draw order.
    pub fn iter_kind(&self, kind: LayerKind) -> impl Iterator<Item = &Layer> {
        self.layers.iter().filter(move |layer| layer.kind == kind)
    }

    /// Show or hide every layer of `kind`, including ones added later.
    pub fn set_visible(&mut self, kind: LayerKind, visible: bool) {
        self.hidden.retain(|hidden| *hidden != kind);
        if !visible {
            self.hidden.push(kind);
        }
    }

    #[must_use]
    pub fn is_visible(&self, kind: LayerKind) -> bool {
        !self.hidden.contains(&kind)
    }

    /// Layers to draw, bottom first.
    pub fn iter_visible(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter().filter(|layer| !self.hidden.contains(&layer.kind))
    }

    /// Number of layers in the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether the stack has no layers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}
