use crate::camera::{Camera, Point};
use crate::consts::WHEEL_ZOOM_PER_100PX;
use crate::geo::{FeatureCollection, LatLng, LatLngBounds};
use crate::hit;
use crate::input::{Button, InputState, WheelDelta};
use crate::layers::{LayerId, LayerKind, LayerStack};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Events queued by the engine for the host to process.
///
/// Events are queued rather than dispatched so that a handler reacting to
/// one move can itself move the map without re-entering the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    /// The viewport finished moving (pan, zoom, resize, or programmatic move).
    MoveEnd,
    /// A click landed on a boundary feature.
    FeatureClick { feature_id: String, at: LatLng },
}

/// Core map state: camera, layers, and gesture tracking.
///
/// Has no browser dependencies so it can be shared by the renderer, the
/// input bridge, and tests alike.
#[derive(Debug, Default)]
pub struct MapCore {
    pub camera: Camera,
    pub layers: LayerStack,
    pub input: InputState,
    events: Vec<MapEvent>,
    render_needed: bool,
}

impl MapCore {
    /// Create a map with a viewport of `width` x `height` CSS pixels.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { camera: Camera::with_size(width, height), ..Self::default() }
    }

    // --- Layers ---

    /// Add a layer on top of the stack.
    pub fn add_layer(&mut self, kind: LayerKind, data: FeatureCollection) -> LayerId {
        self.render_needed = true;
        self.layers.add(kind, data)
    }

    /// Move every layer of `kind` beneath the rest.
    pub fn send_to_back(&mut self, kind: LayerKind) {
        self.render_needed = true;
        self.layers.send_to_back(kind);
    }

    /// Show or hide every layer of `kind`.
    pub fn set_layer_visible(&mut self, kind: LayerKind, visible: bool) {
        if self.layers.is_visible(kind) != visible {
            self.render_needed = true;
        }
        self.layers.set_visible(kind, visible);
    }

    // --- Camera ---

    /// Fit the viewport to `bounds`.
    pub fn fit_bounds(&mut self, bounds: &LatLngBounds) {
        self.camera.fit_bounds(bounds);
        self.moved();
    }

    /// Recenter on `center`, keeping the current zoom.
    pub fn set_center(&mut self, center: LatLng) {
        let zoom = self.camera.zoom;
        self.set_view(center, zoom);
    }

    /// Move to `center` at `zoom`.
    pub fn set_view(&mut self, center: LatLng, zoom: f64) {
        self.camera.set_view(center, zoom);
        self.moved();
    }

    /// Adopt a new container size. Queues a move when the size changed.
    pub fn invalidate_size(&mut self, width: f64, height: f64) {
        #[allow(clippy::float_cmp)]
        let unchanged = self.camera.width == width && self.camera.height == height;
        self.render_needed = true;
        if unchanged {
            return;
        }
        self.camera.resize(width, height);
        self.events.push(MapEvent::MoveEnd);
    }

    fn moved(&mut self) {
        self.render_needed = true;
        self.events.push(MapEvent::MoveEnd);
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) {
        if button == Button::Primary {
            self.end_drag();
            self.input = InputState::press(screen_pt);
        }
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) {
        if let Some(delta) = self.input.drag_to(screen_pt) {
            self.camera.pan_by(delta);
            self.render_needed = true;
        }
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button) {
        if button != Button::Primary {
            return;
        }
        let state = std::mem::take(&mut self.input);
        let InputState::Pressed { dragged, .. } = state else {
            return;
        };
        if dragged {
            self.moved();
            return;
        }
        let at = self.camera.container_point_to_lat_lng(screen_pt);
        if let Some(hit) = hit::hit_test(at, &self.layers) {
            self.events.push(MapEvent::FeatureClick { feature_id: hit.feature_id, at });
        }
    }

    /// The browser took the pointer away mid-gesture. A drag in progress
    /// still settles with a move; a press that never dragged is not a click.
    pub fn on_pointer_cancel(&mut self) {
        self.end_drag();
    }

    fn end_drag(&mut self) {
        if let InputState::Pressed { dragged: true, .. } = std::mem::take(&mut self.input) {
            self.moved();
        }
    }

    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta) {
        if delta.dy == 0.0 {
            return;
        }
        let zoom = self.camera.zoom - delta.dy / 100.0 * WHEEL_ZOOM_PER_100PX;
        self.camera.zoom_around(screen_pt, zoom);
        self.moved();
    }

    // --- Queries ---

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.camera.zoom
    }

    #[must_use]
    pub fn center(&self) -> LatLng {
        self.camera.center
    }

    /// Geographic rectangle currently visible.
    #[must_use]
    pub fn bounds(&self) -> LatLngBounds {
        self.camera.bounds()
    }

    #[must_use]
    pub fn lat_lng_to_container_point(&self, lat_lng: LatLng) -> Point {
        self.camera.lat_lng_to_container_point(lat_lng)
    }

    #[must_use]
    pub fn container_point_to_lat_lng(&self, point: Point) -> LatLng {
        self.camera.container_point_to_lat_lng(point)
    }

    /// Drain queued events in the order they happened.
    pub fn take_events(&mut self) -> Vec<MapEvent> {
        std::mem::take(&mut self.events)
    }

    /// Whether anything changed since the last call.
    pub fn take_render_needed(&mut self) -> bool {
        std::mem::replace(&mut self.render_needed, false)
    }
}
