//! Shared handle to the map engine.
//!
//! ARCHITECTURE
//! ============
//! `mapview::engine::MapCore` queues events instead of calling out, so the
//! core can be mutated without anyone observing it half-way. This handle owns
//! the core behind a `RefCell`, runs each mutation, releases the borrow, and
//! only then dispatches queued events to the registered listeners. Listeners
//! are free to move the map again; those moves dispatch their own events
//! before the outer dispatch continues.
//!
//! The canvas host installs a render hook that is called whenever the core
//! says something visible changed.

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;

use std::cell::RefCell;
use std::rc::Rc;

use mapview::camera::Point;
use mapview::engine::{MapCore, MapEvent};
use mapview::geo::{FeatureCollection, LatLng, LatLngBounds};
use mapview::layers::{LayerId, LayerKind};

type MoveEndListener = Rc<dyn Fn()>;
type FeatureClickListener = Rc<dyn Fn(&str, LatLng)>;

#[derive(Default)]
struct Listeners {
    move_end: Vec<MoveEndListener>,
    feature_click: Vec<FeatureClickListener>,
    render: Option<Rc<dyn Fn()>>,
}

struct Inner {
    core: RefCell<MapCore>,
    listeners: RefCell<Listeners>,
}

/// Cloneable handle to one map.
#[derive(Clone)]
pub struct MapHandle {
    inner: Rc<Inner>,
}

impl MapHandle {
    /// Create a map with a `width` x `height` viewport.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            inner: Rc::new(Inner {
                core: RefCell::new(MapCore::new(width, height)),
                listeners: RefCell::new(Listeners::default()),
            }),
        }
    }

    /// Read the core.
    pub fn with_core<R>(&self, f: impl FnOnce(&MapCore) -> R) -> R {
        f(&self.inner.core.borrow())
    }

    /// Mutate the core, then dispatch whatever it queued.
    pub fn update<R>(&self, f: impl FnOnce(&mut MapCore) -> R) -> R {
        let out = f(&mut self.inner.core.borrow_mut());
        self.dispatch_pending();
        out
    }

    // --- Listeners ---

    /// Call `listener` after every pan, zoom, resize, or programmatic move.
    pub fn on_move_end(&self, listener: impl Fn() + 'static) {
        self.inner.listeners.borrow_mut().move_end.push(Rc::new(listener));
    }

    /// Call `listener` with the feature id when a boundary is clicked.
    pub fn on_feature_click(&self, listener: impl Fn(&str, LatLng) + 'static) {
        self.inner.listeners.borrow_mut().feature_click.push(Rc::new(listener));
    }

    /// Install the hook that schedules a redraw.
    pub fn set_render_hook(&self, hook: impl Fn() + 'static) {
        self.inner.listeners.borrow_mut().render = Some(Rc::new(hook));
    }

    // --- Mutations ---

    pub fn add_layer(&self, kind: LayerKind, data: FeatureCollection) -> LayerId {
        self.update(|core| core.add_layer(kind, data))
    }

    pub fn send_to_back(&self, kind: LayerKind) {
        self.update(|core| core.send_to_back(kind));
    }

    /// Show or hide every layer of `kind`, including ones loaded later.
    pub fn set_layer_visible(&self, kind: LayerKind, visible: bool) {
        self.update(|core| core.set_layer_visible(kind, visible));
    }

    pub fn fit_bounds(&self, bounds: &LatLngBounds) {
        self.update(|core| core.fit_bounds(bounds));
    }

    pub fn set_center(&self, center: LatLng) {
        self.update(|core| core.set_center(center));
    }

    pub fn set_view(&self, center: LatLng, zoom: f64) {
        self.update(|core| core.set_view(center, zoom));
    }

    pub fn invalidate_size(&self, width: f64, height: f64) {
        self.update(|core| core.invalidate_size(width, height));
    }

    // --- Queries ---

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.with_core(MapCore::zoom)
    }

    #[must_use]
    pub fn bounds(&self) -> LatLngBounds {
        self.with_core(MapCore::bounds)
    }

    #[must_use]
    pub fn center(&self) -> LatLng {
        self.with_core(MapCore::center)
    }

    #[must_use]
    pub fn lat_lng_to_container_point(&self, lat_lng: LatLng) -> Point {
        self.with_core(|core| core.lat_lng_to_container_point(lat_lng))
    }

    #[must_use]
    pub fn container_point_to_lat_lng(&self, point: Point) -> LatLng {
        self.with_core(|core| core.container_point_to_lat_lng(point))
    }

    /// Number of layers of `kind` currently on the map.
    #[must_use]
    pub fn layer_count(&self, kind: LayerKind) -> usize {
        self.with_core(|core| core.layers.iter_kind(kind).count())
    }

    #[must_use]
    pub fn is_layer_visible(&self, kind: LayerKind) -> bool {
        self.with_core(|core| core.layers.is_visible(kind))
    }

    /// Deliver queued events to listeners, outside of any core borrow.
    fn dispatch_pending(&self) {
        loop {
            let (events, render_needed) = {
                let mut core = self.inner.core.borrow_mut();
                (core.take_events(), core.take_render_needed())
            };
            if render_needed {
                let hook = self.inner.listeners.borrow().render.clone();
                if let Some(hook) = hook {
                    hook();
                }
            }
            if events.is_empty() {
                return;
            }
            for event in events {
                self.dispatch(event);
            }
        }
    }

    fn dispatch(&self, event: MapEvent) {
        match event {
            MapEvent::MoveEnd => {
                let listeners = self.inner.listeners.borrow().move_end.clone();
                for listener in listeners {
                    listener();
                }
            }
            MapEvent::FeatureClick { feature_id, at } => {
                let listeners = self.inner.listeners.borrow().feature_click.clone();
                for listener in listeners {
                    listener(&feature_id, at);
                }
            }
        }
    }
}
